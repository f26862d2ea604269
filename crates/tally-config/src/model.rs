use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

const DEFAULT_DIR_NAME: &str = ".tally";
const DATA_FILE: &str = "finance_data.json";

/// Stores user-configurable CLI preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom location for the ledger document. Defaults to
    /// `<app data dir>/finance_data.json`.
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_file: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "en-IN".into()
    }

    pub fn default_currency_symbol() -> String {
        "₹".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Resolves the ledger document path, honoring the configured override.
    pub fn resolve_data_file(&self) -> PathBuf {
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        app_data_dir().join(DATA_FILE)
    }
}

/// Returns the application-specific data directory, defaulting to `~/.tally`.
/// The `TALLY_HOME` environment variable overrides the location.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("TALLY_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
