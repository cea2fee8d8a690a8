use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::schema;

/// Output format used when no `--format` was given or persisted.
pub const DEFAULT_FORMAT: &str = "json";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Churn analytics for the ChurnAI dashboard
#[derive(Parser, Debug, Clone)]
#[command(
    name = "churnai",
    about = "Churn analytics for the ChurnAI dashboard",
    version
)]
pub struct Settings {
    #[command(subcommand)]
    pub command: Command,

    /// Logging level
    #[arg(long, global = true, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long, global = true)]
    pub clear: bool,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute dashboard metrics from the raw churn dataset
    Dashboard(DashboardArgs),
    /// Forward one prediction request to the model service
    Predict(PredictArgs),
}

/// Arguments of the `dashboard` subcommand.
#[derive(Args, Debug, Clone)]
pub struct DashboardArgs {
    /// Path to the raw churn dataset (CSV)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, value_parser = ["json", "summary"])]
    pub format: Option<String>,
}

impl DashboardArgs {
    /// The effective output format, falling back to [`DEFAULT_FORMAT`].
    pub fn output_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }
}

/// Arguments of the `predict` subcommand.
///
/// The categorical flags are constrained to the option lists of the
/// prediction form; the model service rejects anything else.
#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Model service base URL
    #[arg(long)]
    pub url: Option<String>,

    /// Months the customer has been subscribed
    #[arg(long)]
    pub tenure: u32,

    /// Current monthly charge in USD
    #[arg(long)]
    pub monthly_charges: f64,

    /// Contract type
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(schema::CONTRACT_TYPES.iter().copied()))]
    pub contract: String,

    /// Internet service kind
    #[arg(long, value_parser = ["DSL", "Fiber optic", "No"])]
    pub internet_service: String,

    /// Payment method
    #[arg(long, value_parser = [
        "Electronic check",
        "Mailed check",
        "Bank transfer (automatic)",
        "Credit card (automatic)",
    ])]
    pub payment_method: String,

    /// Enrolled in paperless billing
    #[arg(long, default_value = "No", value_parser = ["Yes", "No"])]
    pub paperless_billing: String,

    /// Subscribed to support services
    #[arg(long, default_value = "No", value_parser = ["Yes", "No"])]
    pub support_services: String,

    /// Senior citizen
    #[arg(long, default_value = "No", value_parser = ["Yes", "No"])]
    pub senior_citizen: String,

    /// Family members on the account
    #[arg(long, default_value = "No", value_parser = ["Yes", "No"])]
    pub family: String,

    /// Output format
    #[arg(long, value_parser = ["json", "summary"])]
    pub format: Option<String>,
}

impl PredictArgs {
    /// The effective output format, falling back to [`DEFAULT_FORMAT`].
    pub fn output_format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.churnai/last_used.json`.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predict_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    /// Uses `~/.churnai/last_used.json`.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(".churnai").join("last_used.json")
    }

    /// Load persisted params from the default path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load persisted params from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to the default path, creating parent directories
    /// if needed.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::config_path())
    }

    /// Atomically write params to an explicit path.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the default config file if it exists.
    pub fn clear() -> Result<(), std::io::Error> {
        Self::clear_at(&Self::config_path())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, and persist the merged result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Same as [`load_with_last_used`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn load_with_last_used_from_args(args: Vec<std::ffi::OsString>) -> Self {
        Self::load_with_last_used_impl(args, &LastUsedParams::config_path())
    }

    /// Full implementation – accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &std::path::Path,
    ) -> Self {
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            let _ = LastUsedParams::clear_at(config_path);
            // Return without re-persisting.
            return Self::apply_debug_override(settings);
        }

        let last = LastUsedParams::load_from(config_path);
        let mut params = last.clone();

        // Merge persisted values into fields the command line left unset
        // (explicit CLI always wins). Only the fields of the subcommand being
        // run are updated in the persisted file; the rest carry over, so a
        // `dashboard` run never forgets the last `predict` URL. Prediction
        // attributes themselves are never persisted.
        match &mut settings.command {
            Command::Dashboard(cmd) => {
                if cmd.data.is_none() {
                    cmd.data = last.data_path;
                }
                if cmd.format.is_none() {
                    cmd.format = last.format;
                }
                params.data_path = cmd.data.clone();
                params.format = cmd.format.clone();
            }
            Command::Predict(cmd) => {
                if cmd.url.is_none() {
                    cmd.url = last.predict_url;
                }
                if cmd.format.is_none() {
                    cmd.format = last.format;
                }
                params.predict_url = cmd.url.clone();
                params.format = cmd.format.clone();
            }
        }

        // Persist current settings for next run.
        let _ = params.save_to(config_path);

        Self::apply_debug_override(settings)
    }

    /// `--debug` forces debug-level logging regardless of `--log-level`.
    fn apply_debug_override(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "debug".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
