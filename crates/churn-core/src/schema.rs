//! Fixed shape of the churn dataset and the dashboard's grouping tables.
//!
//! Every positional index, category list, and bucket boundary used by the
//! parsing and aggregation pipeline lives here. Nothing downstream hard-codes
//! a column number or duplicates a bucket table.

// ── Column layout ─────────────────────────────────────────────────────────────

/// Zero-based index of the tenure column (months subscribed).
pub const COL_TENURE: usize = 2;

/// Zero-based index of the contract-type column.
pub const COL_CONTRACT: usize = 4;

/// Zero-based index of the monthly-charges column (US dollars).
pub const COL_MONTHLY_CHARGES: usize = 7;

/// Zero-based index of the churn-flag column.
pub const COL_CHURN: usize = 8;

/// Exact raw token that marks a churned subscriber.
pub const CHURNED_TOKEN: &str = "Yes";

/// Whether a raw churn-column token means "churned".
///
/// The comparison is exact and case-sensitive; every other token, including
/// empty and garbage values, means retained.
pub fn is_churned_token(token: &str) -> bool {
    token == CHURNED_TOKEN
}

// ── Grouping tables ───────────────────────────────────────────────────────────

/// Contract categories in dashboard display order.
///
/// Grouping always emits exactly these, in this order; a category no record
/// matches still appears with size 0.
pub const CONTRACT_TYPES: &[&str] = &["Month-to-month", "One year", "Two year"];

/// A labelled half-open numeric interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketSpec {
    /// Display label of the bucket.
    pub label: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl BucketSpec {
    /// Returns `true` if `value` falls inside this bucket.
    ///
    /// Bounds are half-open, so a value equal to one bucket's `max` belongs
    /// to the next bucket and is never counted twice.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value < self.max
    }
}

/// Tenure buckets in dashboard display order, bounds in months.
///
/// Tenures of 100 months or more fall outside every bucket and are excluded
/// from the tenure breakdown entirely.
pub const TENURE_BUCKETS: &[BucketSpec] = &[
    BucketSpec { label: "0-1yr", min: 0.0, max: 12.0 },
    BucketSpec { label: "1-2yr", min: 12.0, max: 24.0 },
    BucketSpec { label: "2-3yr", min: 24.0, max: 36.0 },
    BucketSpec { label: "3-5yr", min: 36.0, max: 60.0 },
    BucketSpec { label: "5+yr", min: 60.0, max: 100.0 },
];
