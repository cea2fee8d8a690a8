use serde::{Deserialize, Serialize};

/// A single subscriber row read from the raw churn dataset.
///
/// Field values are already coerced: the parser never produces a record
/// that aggregation could choke on. Records are immutable after parsing;
/// every downstream computation only reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberRecord {
    /// Months the subscriber has been with the provider.
    #[serde(default)]
    pub tenure_months: u32,
    /// Current monthly charge in US dollars.
    #[serde(default)]
    pub monthly_charges: f64,
    /// Raw contract token from the source row (e.g. "Month-to-month").
    ///
    /// Kept verbatim: an unrecognized token simply matches no contract
    /// category during grouping while still counting in the totals.
    #[serde(default)]
    pub contract: String,
    /// Whether the subscriber has churned.
    #[serde(default)]
    pub churned: bool,
}

/// Scalar churn statistics over an entire record set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurnSummary {
    /// Number of records aggregated.
    pub total: usize,
    /// Number of records flagged as churned.
    pub churned: usize,
    /// `churned / total * 100`, rounded to 2 decimals; exactly 0 when
    /// `total` is 0.
    pub churn_rate_percent: f64,
}

/// Churn statistics for one group of a dimensional breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMetric {
    /// Display label of the group (category name or bucket label).
    pub label: String,
    /// Group churn rate, rounded to 1 decimal; exactly 0 for empty groups.
    pub churn_rate_percent: f64,
    /// Number of records that fell into the group.
    pub size: usize,
}

/// Everything the dashboard page needs, produced in one pass.
///
/// Serialized with camelCase keys since the consumer is the dashboard
/// frontend. All numeric fields are finite and already rounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Total subscriber count.
    pub total: usize,
    /// Churned subscriber count.
    pub churned: usize,
    /// Overall churn rate, 2 decimals.
    pub churn_rate_percent: f64,
    /// `100 - churn_rate_percent` when any records exist, else 0.
    pub retention_rate_percent: f64,
    /// Sum of monthly charges over churned subscribers, 2 decimals.
    pub revenue_at_risk: f64,
    /// Churn rate per contract type, in the fixed category order.
    pub by_contract: Vec<GroupMetric>,
    /// Churn rate per tenure bucket, in bucket-table order.
    pub by_tenure: Vec<GroupMetric>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── SubscriberRecord ───────────────────────────────────────────────────

    #[test]
    fn test_subscriber_record_deserialize_defaults() {
        let rec: SubscriberRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(rec.tenure_months, 0);
        assert_eq!(rec.monthly_charges, 0.0);
        assert_eq!(rec.contract, "");
        assert!(!rec.churned);
    }

    // ── wire shapes ────────────────────────────────────────────────────────

    #[test]
    fn test_churn_summary_wire_names() {
        let summary = ChurnSummary {
            total: 7032,
            churned: 1869,
            churn_rate_percent: 26.58,
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains(r#""churnRatePercent":26.58"#));
        assert!(json.contains(r#""total":7032"#));
        let back: ChurnSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.churned, 1869);
    }

    #[test]
    fn test_group_metric_wire_names() {
        let group = GroupMetric {
            label: "Month-to-month".to_string(),
            churn_rate_percent: 42.7,
            size: 3875,
        };
        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains(r#""label":"Month-to-month""#));
        assert!(json.contains(r#""churnRatePercent":42.7"#));
        assert!(json.contains(r#""size":3875"#));
    }

    #[test]
    fn test_dashboard_metrics_wire_names() {
        let metrics = DashboardMetrics {
            total: 2,
            churned: 1,
            churn_rate_percent: 50.0,
            retention_rate_percent: 50.0,
            revenue_at_risk: 70.7,
            by_contract: vec![],
            by_tenure: vec![],
        };
        let json = serde_json::to_string(&metrics).unwrap();
        assert!(json.contains(r#""retentionRatePercent""#));
        assert!(json.contains(r#""revenueAtRisk""#));
        assert!(json.contains(r#""byContract""#));
        assert!(json.contains(r#""byTenure""#));
    }

    #[test]
    fn test_churn_summary_default_is_all_zero() {
        let summary = ChurnSummary::default();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.churned, 0);
        assert_eq!(summary.churn_rate_percent, 0.0);
    }
}
