//! Configuration loading.
//!
//! [`FileConfig`] is the serde-facing shape of the TOML file and the
//! `CONFERO_*` environment variables; [`ConfigLoader`] merges the
//! sources with figment and converts into the application layer's
//! [`EngineConfig`](confero_application::EngineConfig).

pub mod file_config;
pub mod loader;

pub use file_config::{ConfigError, FileConfig};
pub use loader::ConfigLoader;
