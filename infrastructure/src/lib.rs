//! Infrastructure layer for confero
//!
//! Adapters behind the application layer's ports: an in-memory versioned
//! store (the reference implementation of the optimistic-concurrency
//! contract), the in-memory COI registry and identity directory, a JSONL
//! domain-event log, and the configuration loader.

pub mod config;
pub mod logging;
pub mod memory;

pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlEventLog;
pub use memory::{
    InMemoryCoiRegistry, InMemoryConferenceStore, InMemoryIdentityDirectory, InMemoryPaperStore,
};
