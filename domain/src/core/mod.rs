//! Shared domain primitives: identifiers and error types.

pub mod error;
pub mod ids;
