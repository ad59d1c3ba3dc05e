use std::path::PathBuf;

use thiserror::Error;

/// Failures of the terminal side of the binary. The sorting core cannot
/// fail; bad arguments and config files are rejected before it runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to set up logging at '{path}': {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}
