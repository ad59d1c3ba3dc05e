use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Animation pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between frames in milliseconds (default: 10).
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Steps pulled from the sort per frame (default: 1).
    #[serde(default = "default_steps_per_frame")]
    pub steps_per_frame: usize,
}

/// Input array generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Fixed shuffle seed. A random seed is drawn per run when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Tracing output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal UI. Defaults to the cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

pub const MAX_FRAME_INTERVAL_MS: u64 = 10_000;

fn default_frame_interval_ms() -> u64 {
    10
}

fn default_steps_per_frame() -> usize {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            steps_per_frame: default_steps_per_frame(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
