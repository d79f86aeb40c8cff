use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{failed} of {total} input(s) failed")]
    InputsFailed { failed: usize, total: usize },

    #[error("Could not write report to {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: matsplit::Error,
    },

    #[error(transparent)]
    Split(#[from] matsplit::Error),
}
