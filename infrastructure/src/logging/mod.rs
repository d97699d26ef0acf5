//! Logging adapters.

pub mod jsonl_events;

pub use jsonl_events::JsonlEventLog;
