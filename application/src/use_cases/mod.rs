//! Use cases: one module per operation group of the engine.

pub mod assignments;
pub mod coi;
pub mod conferences;
pub mod decisions;
pub mod discussions;
pub mod progress;
pub mod reviews;
pub(crate) mod shared;
pub mod submissions;
