//! Line-oriented prompt helpers.
//!
//! Interactive mode prompts through dialoguer; script mode (the
//! `TALLY_CLI_SCRIPT` environment variable) reads the same answers as plain
//! stdin lines so the binary stays drivable from tests. Every prompt returns
//! `None` when input is exhausted, which callers treat as a cancel.

use std::io::{self, BufRead};

use dialoguer::{Confirm, Input};

use crate::cli::shell_context::{CliMode, ShellContext};
use crate::errors::CliError;

/// Prompt for one line of free-form text. Empty input is allowed.
pub fn prompt_text(context: &ShellContext, prompt: &str) -> Result<Option<String>, CliError> {
    match context.mode {
        CliMode::Script => read_stdin_line(),
        CliMode::Interactive => {
            let value = Input::<String>::with_theme(&context.theme)
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            Ok(Some(value.trim().to_string()))
        }
    }
}

/// Prompt for a yes/no answer, defaulting to no.
pub fn prompt_yes_no(context: &ShellContext, prompt: &str) -> Result<Option<bool>, CliError> {
    match context.mode {
        CliMode::Script => Ok(read_stdin_line()?.map(|line| {
            matches!(line.to_ascii_lowercase().as_str(), "yes" | "y" | "true")
        })),
        CliMode::Interactive => {
            let value = Confirm::with_theme(&context.theme)
                .with_prompt(prompt)
                .default(false)
                .interact()?;
            Ok(Some(value))
        }
    }
}

/// Waits for Enter between menu rounds. Script mode skips the pause so
/// scripted sessions stay line-for-line with their expected prompts.
pub fn pause(context: &ShellContext) -> Result<(), CliError> {
    if context.mode == CliMode::Interactive {
        let _ = Input::<String>::with_theme(&context.theme)
            .with_prompt("Press Enter to continue")
            .allow_empty(true)
            .interact_text()?;
    }
    Ok(())
}

fn read_stdin_line() -> Result<Option<String>, CliError> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
