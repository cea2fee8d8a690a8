use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the ChurnAI crates.
#[derive(Error, Debug)]
pub enum ChurnError {
    /// The raw dataset could not be opened or read from disk.
    #[error("Failed to read dataset {path}: {source}")]
    Ingestion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No dataset path was given, persisted, or discoverable.
    #[error("Dataset not found: {0}")]
    DataPathNotFound(PathBuf),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the churn crates.
pub type Result<T> = std::result::Result<T, ChurnError>;
