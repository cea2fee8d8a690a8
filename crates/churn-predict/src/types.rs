//! Wire types for the churn prediction service.
//!
//! The request mirrors the dashboard's prediction form: camelCase keys, with
//! Yes/No answers carried as strings exactly as the form submits them. The
//! response uses the service's snake_case keys.

use serde::{Deserialize, Serialize};

/// Payload POSTed to the service's `/predict` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    /// Months the subscriber has been with the provider.
    pub tenure: u32,
    /// Current monthly bill in dollars.
    pub monthly_charges: f64,
    /// Contract type, one of the provider's fixed offerings.
    pub contract: String,
    /// Internet service tier ("DSL", "Fiber optic" or "No").
    pub internet_service: String,
    /// How the subscriber pays their bill.
    pub payment_method: String,
    /// "Yes" when billed electronically.
    pub paperless_billing: String,
    /// "Yes" when subscribed to add-on support services.
    pub support_services: String,
    /// "Yes" for senior-citizen accounts.
    pub senior_citizen: String,
    /// "Yes" when the account covers partner or dependents.
    pub family: String,
}

/// Scored result returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Churn probability in `[0, 1]`, rounded to two decimals by the service.
    pub churn_probability: f64,
    /// "High Risk" when the probability crosses the service's threshold,
    /// otherwise "Low Risk".
    pub churn_label: String,
}
