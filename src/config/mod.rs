//! Configuration file support.
//!
//! The file is optional; every field has a default and command-line flags
//! override what the file sets.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, DataConfig, LoggingConfig, PlaybackConfig, MAX_FRAME_INTERVAL_MS};
