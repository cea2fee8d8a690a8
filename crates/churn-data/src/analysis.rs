//! Main analysis pipeline for ChurnAI.
//!
//! Orchestrates loading, parsing and aggregation, returning a
//! [`DashboardMetrics`] ready for the dashboard layer.

use std::path::Path;

use churn_core::error::Result;
use churn_core::formatting::round_to;
use churn_core::models::{DashboardMetrics, SubscriberRecord};
use churn_core::schema::{CONTRACT_TYPES, TENURE_BUCKETS};
use tracing::debug;

use crate::aggregator::ChurnAggregator;
use crate::parser::parse_records;
use crate::reader::read_dataset;

// ── Public functions ──────────────────────────────────────────────────────────

/// Build the full dashboard metric set from a raw dataset blob.
///
/// Pure and deterministic: identical input text always yields identical
/// metrics, every call re-parses and re-aggregates, and every numeric field
/// is finite. The contract breakdown follows the fixed [`CONTRACT_TYPES`]
/// order and the tenure breakdown the [`TENURE_BUCKETS`] order, so chart
/// axes stay stable across refreshes.
pub fn build_dashboard_metrics(raw: &str) -> DashboardMetrics {
    metrics_from_records(&parse_records(raw))
}

/// Run the full pipeline against the dataset at `path`.
///
/// 1. Read the CSV blob from disk.
/// 2. Parse rows leniently into [`SubscriberRecord`]s.
/// 3. Aggregate into [`DashboardMetrics`].
///
/// Only step 1 can fail; unreadable rows are dropped in step 2 and an empty
/// record set produces an all-zero metric set.
pub fn analyze_dataset(path: &Path) -> Result<DashboardMetrics> {
    let start = std::time::Instant::now();
    let raw = read_dataset(path)?;
    let metrics = build_dashboard_metrics(&raw);
    debug!(
        "Analyzed {} records from {} in {:.1?}",
        metrics.total,
        path.display(),
        start.elapsed()
    );
    Ok(metrics)
}

// ── Private helpers ───────────────────────────────────────────────────────────

/// Aggregate already-parsed records into the dashboard metric set.
fn metrics_from_records(records: &[SubscriberRecord]) -> DashboardMetrics {
    let summary = ChurnAggregator::summarize(records);

    // Retention is the complement of churn, except on an empty dataset
    // where both sides report 0 rather than a misleading 100% retention.
    let retention_rate_percent = if summary.total == 0 {
        0.0
    } else {
        round_to(100.0 - summary.churn_rate_percent, 2)
    };

    let by_contract =
        ChurnAggregator::group_by_category(records, CONTRACT_TYPES, |r| r.contract.as_str());
    let by_tenure =
        ChurnAggregator::group_by_bucket(records, TENURE_BUCKETS, |r| r.tenure_months as f64);

    DashboardMetrics {
        total: summary.total,
        churned: summary.churned,
        churn_rate_percent: summary.churn_rate_percent,
        retention_rate_percent,
        revenue_at_risk: ChurnAggregator::revenue_at_risk(records),
        by_contract,
        by_tenure,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn make_record(tenure: u32, contract: &str, charges: f64, churned: bool) -> SubscriberRecord {
        SubscriberRecord {
            tenure_months: tenure,
            monthly_charges: charges,
            contract: contract.to_string(),
            churned,
        }
    }

    fn write_dataset(dir: &Path, contents: &str) -> std::path::PathBuf {
        let path = dir.join("clean_data.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", contents).unwrap();
        path
    }

    // ── build_dashboard_metrics ───────────────────────────────────────────────

    #[test]
    fn test_build_dashboard_metrics_empty_input() {
        let metrics = build_dashboard_metrics("");

        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.churned, 0);
        assert_eq!(metrics.churn_rate_percent, 0.0);
        assert_eq!(metrics.retention_rate_percent, 0.0);
        assert_eq!(metrics.revenue_at_risk, 0.0);
        // Breakdowns keep their full axis even with no data.
        assert_eq!(metrics.by_contract.len(), CONTRACT_TYPES.len());
        assert_eq!(metrics.by_tenure.len(), TENURE_BUCKETS.len());
        assert!(metrics.by_contract.iter().all(|g| g.size == 0));
        assert!(metrics.by_tenure.iter().all(|g| g.size == 0));
    }

    #[test]
    fn test_build_dashboard_metrics_from_sparse_export() {
        // Export with a collapsed header row: rows still parse positionally.
        let raw = "header\n\
                   1,x,x,10,Month-to-month,x,x,50,No\n\
                   2,x,x,5,Month-to-month,x,x,70,Yes";
        let metrics = build_dashboard_metrics(raw);

        assert_eq!(metrics.total, 2);
        assert_eq!(metrics.churned, 1);
        assert!((metrics.churn_rate_percent - 50.0).abs() < 1e-9);
        assert!((metrics.retention_rate_percent - 50.0).abs() < 1e-9);
        assert!((metrics.revenue_at_risk - 70.0).abs() < 1e-9);

        assert_eq!(metrics.by_contract[0].label, "Month-to-month");
        assert_eq!(metrics.by_contract[0].size, 2);
        assert!((metrics.by_contract[0].churn_rate_percent - 50.0).abs() < 1e-9);
        assert_eq!(metrics.by_contract[1].size, 0);
        assert_eq!(metrics.by_contract[1].churn_rate_percent, 0.0);
        assert_eq!(metrics.by_contract[2].size, 0);

        // Tenure "x" coerces to 0, so both records land in the first bucket.
        assert_eq!(metrics.by_tenure[0].label, "0-1yr");
        assert_eq!(metrics.by_tenure[0].size, 2);
        assert!((metrics.by_tenure[0].churn_rate_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_dashboard_metrics_coerced_tenure_lands_in_first_bucket() {
        let raw = "id,g,tenure,p,contract,b,pm,charges,churn\n\
                   c1,F,bad,Yes,One year,Yes,Mailed check,10,No";
        let metrics = build_dashboard_metrics(raw);

        assert_eq!(metrics.total, 1);
        assert_eq!(metrics.by_tenure[0].label, "0-1yr");
        assert_eq!(metrics.by_tenure[0].size, 1);
    }

    #[test]
    fn test_build_dashboard_metrics_idempotent() {
        let raw = "id,g,tenure,p,contract,b,pm,charges,churn\n\
                   c1,F,12,Yes,Month-to-month,Yes,Electronic check,70.35,Yes\n\
                   c2,M,40,No,Two year,No,Mailed check,20.05,No";

        let first = serde_json::to_string(&build_dashboard_metrics(raw)).unwrap();
        let second = serde_json::to_string(&build_dashboard_metrics(raw)).unwrap();
        assert_eq!(first, second);
    }

    // ── metrics_from_records ──────────────────────────────────────────────────

    #[test]
    fn test_metrics_from_records_retention_complements_churn() {
        let records = vec![
            make_record(5, "Month-to-month", 80.0, true),
            make_record(30, "Two year", 20.0, false),
            make_record(50, "Two year", 20.0, false),
        ];
        let metrics = metrics_from_records(&records);

        assert!((metrics.churn_rate_percent - 33.33).abs() < 1e-9);
        assert!((metrics.retention_rate_percent - 66.67).abs() < 1e-9);
        assert!((metrics.revenue_at_risk - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_metrics_from_records_breakdown_order_is_fixed() {
        let records = vec![make_record(40, "Two year", 20.0, false)];
        let metrics = metrics_from_records(&records);

        let contracts: Vec<&str> = metrics.by_contract.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(contracts, vec!["Month-to-month", "One year", "Two year"]);
        let buckets: Vec<&str> = metrics.by_tenure.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(buckets, vec!["0-1yr", "1-2yr", "2-3yr", "3-5yr", "5+yr"]);
    }

    // ── analyze_dataset ───────────────────────────────────────────────────────

    #[test]
    fn test_analyze_dataset_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(
            dir.path(),
            "id,gender,tenure,phone,contract,billing,payment,charges,churn\n\
             c1,Female,2,Yes,Month-to-month,Yes,Electronic check,70.70,Yes\n\
             c2,Male,40,No,Two year,No,Mailed check,20.05,No\n\
             c3,Male,70,No,Two year,No,Mailed check,19.85,No\n",
        );

        let metrics = analyze_dataset(&path).unwrap();
        assert_eq!(metrics.total, 3);
        assert_eq!(metrics.churned, 1);
        assert!((metrics.churn_rate_percent - 33.33).abs() < 1e-9);
        assert!((metrics.revenue_at_risk - 70.70).abs() < 1e-9);
        assert_eq!(metrics.by_tenure[4].label, "5+yr");
        assert_eq!(metrics.by_tenure[4].size, 1);
    }

    #[test]
    fn test_analyze_dataset_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let result = analyze_dataset(&dir.path().join("absent.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_dataset_header_only_is_all_zero() {
        let dir = TempDir::new().unwrap();
        let path = write_dataset(dir.path(), "id,gender,tenure\n");

        let metrics = analyze_dataset(&path).unwrap();
        assert_eq!(metrics.total, 0);
        assert_eq!(metrics.churn_rate_percent, 0.0);
        assert_eq!(metrics.retention_rate_percent, 0.0);
    }
}
