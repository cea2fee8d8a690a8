//! Core domain layer for ChurnAI.
//!
//! Holds the subscriber record and metric models, the fixed dataset schema
//! tables, the error taxonomy, CLI settings with last-used persistence, and
//! the shared number-formatting helpers. Contains no I/O beyond the settings
//! file; the ingestion pipeline lives in `churn-data`.

pub mod error;
pub mod formatting;
pub mod models;
pub mod schema;
pub mod settings;

pub use error::{ChurnError, Result};
