//! Data ingestion layer for ChurnAI.
//!
//! Responsible for reading the exported subscriber CSV, parsing rows into
//! typed records, aggregating churn statistics and running the top-level
//! dashboard pipeline.

pub mod aggregator;
pub mod analysis;
pub mod parser;
pub mod reader;

pub use churn_core as core;
