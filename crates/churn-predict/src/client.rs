//! HTTP client for the churn prediction service.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{PredictError, Result};
use crate::types::{PredictionRequest, PredictionResponse};

/// Endpoint of a locally-run prediction service.
pub const DEFAULT_PREDICT_URL: &str = "http://localhost:5000";

/// Request timeout for prediction calls.
pub const DEFAULT_PREDICT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client bound to one prediction service instance.
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_PREDICT_TIMEOUT)
            .build()
            .map_err(PredictError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&base_url.into()),
        })
    }

    /// Score a single subscriber profile.
    ///
    /// POSTs the request to `{base_url}/predict` and decodes the service's
    /// response. Non-2xx statuses become [`PredictError::ServiceStatus`] with
    /// the response body preserved for diagnostics.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let url = format!("{}/predict", self.base_url);

        info!("Requesting churn prediction from {}", url);
        debug!("Prediction request: {:?}", request);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .map_err(PredictError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictError::ServiceStatus {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        response
            .json::<PredictionResponse>()
            .map_err(|e| PredictError::InvalidResponse(e.to_string()))
    }
}

/// Strip trailing slashes so path joining stays predictable.
fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
