use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config file not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error(transparent)]
    Library(#[from] thumbframe::Error),
}
