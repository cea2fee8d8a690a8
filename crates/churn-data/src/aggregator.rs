//! Churn rate aggregation over parsed subscriber records.
//!
//! All functions are pure and order-insensitive: the same record set
//! always produces the same metrics, regardless of row order.

use churn_core::formatting::{percentage, round_to};
use churn_core::models::{ChurnSummary, GroupMetric, SubscriberRecord};
use churn_core::schema::BucketSpec;

/// Decimal places of the overall churn rate.
pub const SUMMARY_RATE_DECIMALS: u32 = 2;

/// Decimal places of per-group churn rates (the dashboard's chart precision).
pub const GROUP_RATE_DECIMALS: u32 = 1;

// ── ChurnAggregator ───────────────────────────────────────────────────────────

/// Stateless helper that computes churn statistics over record slices.
pub struct ChurnAggregator;

impl ChurnAggregator {
    /// Scalar summary over the full record set.
    ///
    /// The rate is `churned / total * 100` rounded to
    /// [`SUMMARY_RATE_DECIMALS`]; an empty slice yields exactly 0, never a
    /// non-finite value.
    pub fn summarize(records: &[SubscriberRecord]) -> ChurnSummary {
        let total = records.len();
        let churned = records.iter().filter(|r| r.churned).count();
        ChurnSummary {
            total,
            churned,
            churn_rate_percent: percentage(churned as f64, total as f64, SUMMARY_RATE_DECIMALS),
        }
    }

    /// Sum of monthly charges over churned records, rounded to cents.
    pub fn revenue_at_risk(records: &[SubscriberRecord]) -> f64 {
        let sum: f64 = records
            .iter()
            .filter(|r| r.churned)
            .map(|r| r.monthly_charges)
            .sum();
        round_to(sum, 2)
    }

    /// Churn rate per category, in caller-supplied category order.
    ///
    /// `key_fn` extracts the categorical value of a record. Every category
    /// appears in the output exactly once, including ones no record matches
    /// (size 0, rate 0). Records whose key matches no category are excluded
    /// from every group but still count in [`summarize`].
    pub fn group_by_category(
        records: &[SubscriberRecord],
        categories: &[&str],
        key_fn: impl Fn(&SubscriberRecord) -> &str,
    ) -> Vec<GroupMetric> {
        categories
            .iter()
            .map(|&category| {
                let mut size = 0usize;
                let mut churned = 0usize;
                for record in records {
                    if key_fn(record) == category {
                        size += 1;
                        if record.churned {
                            churned += 1;
                        }
                    }
                }
                GroupMetric {
                    label: category.to_string(),
                    churn_rate_percent: group_rate(churned, size),
                    size,
                }
            })
            .collect()
    }

    /// Churn rate per bucket, in caller-supplied bucket order.
    ///
    /// `value_fn` extracts the numeric value of a record; a record belongs
    /// to the bucket whose half-open interval contains that value. Values
    /// outside every bucket are excluded from the breakdown entirely.
    pub fn group_by_bucket(
        records: &[SubscriberRecord],
        buckets: &[BucketSpec],
        value_fn: impl Fn(&SubscriberRecord) -> f64,
    ) -> Vec<GroupMetric> {
        buckets
            .iter()
            .map(|bucket| {
                let mut size = 0usize;
                let mut churned = 0usize;
                for record in records {
                    if bucket.contains(value_fn(record)) {
                        size += 1;
                        if record.churned {
                            churned += 1;
                        }
                    }
                }
                GroupMetric {
                    label: bucket.label.to_string(),
                    churn_rate_percent: group_rate(churned, size),
                    size,
                }
            })
            .collect()
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Group churn rate at chart precision; exactly 0 for empty groups.
fn group_rate(churned: usize, size: usize) -> f64 {
    percentage(churned as f64, size as f64, GROUP_RATE_DECIMALS)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
