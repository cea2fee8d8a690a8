//! Blocking client for the ChurnAI prediction service.
//!
//! Sends subscriber profiles to the model service's `/predict` endpoint and
//! decodes the scored result. Wire shapes live in [`types`]; transport and
//! status handling in [`client`].

pub mod client;
pub mod error;
pub mod types;

pub use client::{PredictionClient, DEFAULT_PREDICT_URL};
pub use error::PredictError;
pub use types::{PredictionRequest, PredictionResponse};
