//! Plain-text rendering for the `summary` output format.
//!
//! JSON output goes straight through serde; these renderers produce the
//! human-readable report printed when `--format summary` is selected.

use std::fmt::Write;

use churn_core::formatting::{format_currency, format_number};
use churn_core::models::{DashboardMetrics, GroupMetric};
use churn_predict::{PredictionRequest, PredictionResponse};

/// Render the dashboard KPIs and breakdowns as an aligned text report.
pub fn render_dashboard_summary(metrics: &DashboardMetrics) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "ChurnAI Dashboard");
    let _ = writeln!(
        out,
        "  Total Customers:  {}",
        format_number(metrics.total as f64, 0)
    );
    let _ = writeln!(out, "  Churn Risk:       {:.2}%", metrics.churn_rate_percent);
    let _ = writeln!(
        out,
        "  Retention Rate:   {:.2}%",
        metrics.retention_rate_percent
    );
    let _ = writeln!(
        out,
        "  Revenue at Risk:  {}",
        format_currency(metrics.revenue_at_risk)
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Churn by Contract");
    render_groups(&mut out, &metrics.by_contract);

    let _ = writeln!(out);
    let _ = writeln!(out, "Churn by Tenure");
    render_groups(&mut out, &metrics.by_tenure);

    out
}

/// Render one scored profile as a short text report.
pub fn render_prediction_summary(
    request: &PredictionRequest,
    response: &PredictionResponse,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Churn Prediction");
    let _ = writeln!(
        out,
        "  Profile:      {} months tenure, {}/month, {}",
        request.tenure,
        format_currency(request.monthly_charges),
        request.contract
    );
    let _ = writeln!(
        out,
        "  Probability:  {:.1}%",
        response.churn_probability * 100.0
    );
    let _ = writeln!(out, "  Assessment:   {}", response.churn_label);

    out
}

/// Write one aligned row per group, labels padded to the widest label.
fn render_groups(out: &mut String, groups: &[GroupMetric]) {
    let width = groups.iter().map(|g| g.label.len()).max().unwrap_or(0);
    for group in groups {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>5.1}%  ({} customers)",
            group.label,
            group.churn_rate_percent,
            format_number(group.size as f64, 0),
            width = width,
        );
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
