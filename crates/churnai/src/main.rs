mod bootstrap;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use churn_core::error::ChurnError;
use churn_core::settings::{Command, DashboardArgs, PredictArgs, Settings};
use churn_data::analysis::analyze_dataset;
use churn_predict::{PredictionClient, PredictionRequest, DEFAULT_PREDICT_URL};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("ChurnAI v{} starting", env!("CARGO_PKG_VERSION"));

    match &settings.command {
        Command::Dashboard(args) => run_dashboard(args),
        Command::Predict(args) => run_predict(args),
    }
}

// ── Subcommands ────────────────────────────────────────────────────────────────

/// Compute dashboard metrics from the dataset and print them in the
/// requested format.
fn run_dashboard(args: &DashboardArgs) -> Result<()> {
    let data_path = match &args.data {
        Some(path) => path.clone(),
        None => bootstrap::discover_data_path()
            .ok_or_else(|| ChurnError::DataPathNotFound(PathBuf::from("data/clean_data.csv")))?,
    };

    tracing::info!("Computing dashboard metrics from {}", data_path.display());
    let metrics = analyze_dataset(&data_path)?;

    match args.output_format() {
        "summary" => print!("{}", output::render_dashboard_summary(&metrics)),
        _ => println!("{}", serde_json::to_string_pretty(&metrics)?),
    }

    Ok(())
}

/// Forward one subscriber profile to the model service and print the score.
fn run_predict(args: &PredictArgs) -> Result<()> {
    let url = args
        .url
        .clone()
        .unwrap_or_else(|| DEFAULT_PREDICT_URL.to_string());

    let request = PredictionRequest {
        tenure: args.tenure,
        monthly_charges: args.monthly_charges,
        contract: args.contract.clone(),
        internet_service: args.internet_service.clone(),
        payment_method: args.payment_method.clone(),
        paperless_billing: args.paperless_billing.clone(),
        support_services: args.support_services.clone(),
        senior_citizen: args.senior_citizen.clone(),
        family: args.family.clone(),
    };

    let client = PredictionClient::new(url)?;
    let response = client.predict(&request)?;

    match args.output_format() {
        "summary" => print!("{}", output::render_prediction_summary(&request, &response)),
        _ => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}
