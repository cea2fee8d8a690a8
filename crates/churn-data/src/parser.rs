//! Lenient positional parsing of the raw churn dataset.
//!
//! Extracts the four fields the dashboard consumes out of each delimited
//! row, at the fixed column positions declared in [`churn_core::schema`].
//! Parsing never fails: malformed fields coerce to their zero value so a
//! single dirty row cannot take the dashboard down.

use churn_core::models::SubscriberRecord;
use churn_core::schema::{self, COL_CHURN, COL_CONTRACT, COL_MONTHLY_CHARGES, COL_TENURE};
use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a raw delimited blob into subscriber records.
///
/// The first line is a header and is always skipped. Data rows are read
/// with CSV semantics and may have any field count; a missing field reads
/// as empty and coerces like any other malformed value:
///
/// * tenure / monthly charges that fail to parse → `0`
/// * a churn token that is not exactly the churned marker → retained
///
/// Rows the CSV reader cannot decode at all are skipped with a debug log.
/// Output order equals input row order.
pub fn parse_records(raw: &str) -> Vec<SubscriberRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let mut records: Vec<SubscriberRecord> = Vec::new();
    let mut rows_skipped = 0u64;

    for result in reader.records() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                rows_skipped += 1;
                debug!("Skipping unreadable row: {}", e);
                continue;
            }
        };
        records.push(record_from_row(&row));
    }

    debug!("Parsed {} rows, skipped {}", records.len(), rows_skipped);

    records
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Coerce one CSV row into a [`SubscriberRecord`].
fn record_from_row(row: &csv::StringRecord) -> SubscriberRecord {
    let tenure_months = row
        .get(COL_TENURE)
        .unwrap_or("")
        .trim()
        .parse::<u32>()
        .unwrap_or(0);

    // Reject non-finite parses ("NaN", "inf") so downstream sums stay finite.
    let monthly_charges = row
        .get(COL_MONTHLY_CHARGES)
        .unwrap_or("")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    // The contract token is kept verbatim; unrecognized values simply match
    // no category during grouping.
    let contract = row.get(COL_CONTRACT).unwrap_or("").to_string();

    let churned = schema::is_churned_token(row.get(COL_CHURN).unwrap_or(""));

    SubscriberRecord {
        tenure_months,
        monthly_charges,
        contract,
        churned,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
