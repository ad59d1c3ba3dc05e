//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

use sortviz::sort::{Algorithm, Step};
use tempfile::TempDir;

/// Command for the built binary.
pub fn sortviz_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sortviz"))
}

/// Create a temporary config file with the given TOML contents.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, contents).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Run `algorithm` over `data` and collect every snapshot.
pub fn collect_states<T: Ord + Clone>(algorithm: Algorithm, data: Vec<T>) -> Vec<Vec<T>> {
    algorithm.steps(data).map(|step: Step<T>| step.state).collect()
}

pub fn is_sorted<T: Ord>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
