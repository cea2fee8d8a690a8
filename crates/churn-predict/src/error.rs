//! Error types for the prediction client.

use thiserror::Error;

/// Errors that can occur while talking to the prediction service.
#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Prediction request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Prediction service returned HTTP {status}: {body}")]
    ServiceStatus { status: u16, body: String },

    #[error("Invalid prediction response: {0}")]
    InvalidResponse(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PredictError>;
