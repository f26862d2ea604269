use thiserror::Error;

/// Error type that captures CLI-level failures.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Core(#[from] tally_core::CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] tally_config::ConfigError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
