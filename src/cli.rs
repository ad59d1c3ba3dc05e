//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{Config, MAX_FRAME_INTERVAL_MS};
use crate::sort::Algorithm;

pub const MAX_COUNT: i64 = 100_000;

#[derive(Parser, Debug)]
#[command(name = "sortviz", version, about = "Sorting algorithm visualizer")]
pub struct Cli {
    /// Number of elements in the array
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_COUNT))]
    pub count: u32,

    /// Sorting algorithm: s (selection), i (insertion), b (bubble), m (merge), q (quick)
    #[arg(value_parser = clap::value_parser!(Algorithm))]
    pub algorithm: Algorithm,

    /// Shuffle seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between frames in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=MAX_FRAME_INTERVAL_MS))]
    pub interval_ms: Option<u64>,

    /// Steps pulled from the sort per frame
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub steps_per_frame: Option<u64>,

    /// Print every state instead of drawing the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Output format for --headless
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything a run needs, after flags are laid over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub count: u32,
    pub algorithm: Algorithm,
    pub seed: Option<u64>,
    pub frame_interval: Duration,
    pub steps_per_frame: usize,
    pub headless: bool,
    pub format: OutputFormat,
}

impl Cli {
    /// Loads the config named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    pub fn resolve(&self, config: &Config) -> RunSettings {
        let interval_ms = self
            .interval_ms
            .unwrap_or(config.playback.frame_interval_ms);
        let steps_per_frame = self
            .steps_per_frame
            .map(|steps| usize::try_from(steps).unwrap_or(usize::MAX))
            .unwrap_or(config.playback.steps_per_frame);

        RunSettings {
            count: self.count,
            algorithm: self.algorithm,
            seed: self.seed.or(config.data.seed),
            frame_interval: Duration::from_millis(interval_ms),
            steps_per_frame,
            headless: self.headless,
            format: self.format,
        }
    }
}
