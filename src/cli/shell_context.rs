//! Shared runtime state for CLI interactions and command execution.

use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;

use tally_config::{app_data_dir, Config, ConfigManager};
use tally_core::{Clock, LedgerStorage};
use tally_domain::Ledger;
use tally_storage_json::JsonLedgerStorage;

use crate::{
    cli::{
        formatters::CliFormatters,
        output::{self, OutputPreferences},
        system_clock::SystemClock,
    },
    errors::CliError,
    fixture,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub config: Config,
    pub storage: JsonLedgerStorage,
    pub data_path: PathBuf,
    pub ledger: Ledger,
    pub clock: Arc<dyn Clock>,
    pub theme: ColorfulTheme,
    pub formatters: CliFormatters,
    pub running: bool,
}

impl ShellContext {
    /// Loads configuration and the ledger document, seeding demo data when no
    /// document exists yet.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::with_base_dir(app_data_dir())?;
        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });

        let storage = JsonLedgerStorage::new();
        let data_path = config.resolve_data_file();
        let ledger = if data_path.exists() {
            tracing::debug!("Loading ledger from {}", data_path.display());
            storage.load_ledger(&data_path)?
        } else {
            tracing::info!(
                "No ledger at {}; seeding demo data",
                data_path.display()
            );
            let seeded = fixture::demo_ledger();
            storage.save_ledger(&seeded, &data_path)?;
            seeded
        };

        let formatters = CliFormatters::new(config.currency_symbol.clone());
        Ok(Self {
            mode,
            config,
            storage,
            data_path,
            ledger,
            clock: Arc::new(SystemClock),
            theme: ColorfulTheme::default(),
            formatters,
            running: true,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Rewrites the whole document after a mutation.
    pub fn persist(&self) -> Result<(), CliError> {
        self.storage.save_ledger(&self.ledger, &self.data_path)?;
        Ok(())
    }
}
