//! The interactive menu loop.

use std::env;

use tally_domain::TransactionKind;

use crate::cli::{
    commands, io, output,
    shell_context::{CliMode, ShellContext},
};
use crate::errors::CliError;

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os("TALLY_CLI_SCRIPT").is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    output::section("PERSONAL FINANCE LEDGER");

    while context.running {
        print_menu();
        let Some(choice) = io::prompt_text(&context, "Enter your choice (1-13)")? else {
            break;
        };
        match dispatch(&mut context, choice.trim()) {
            Ok(()) => {}
            // Core failures are user-reported conditions; the loop continues.
            Err(CliError::Core(err)) => output::error(err),
            Err(err) => return Err(err),
        }
        if context.running {
            io::pause(&context)?;
        }
    }

    output::info("Keep tracking your finances. Goodbye!");
    Ok(())
}

fn print_menu() {
    output::separator();
    output::info("TRANSACTIONS");
    output::info("  1. Add Income");
    output::info("  2. Add Expense");
    output::info("  3. View All Transactions");
    output::info("  4. View Transactions (Filtered)");
    output::info("  5. Search Transactions");
    output::blank_line();
    output::info("BUDGETS & ANALYSIS");
    output::info("  6. Set Budget for Category");
    output::info("  7. View Budget Status");
    output::info("  8. Generate Monthly Report");
    output::info("  9. Expense Insights");
    output::blank_line();
    output::info("SAVINGS & GOALS");
    output::info("  10. Add Savings Goal");
    output::info("  11. Update Savings Goal");
    output::info("  12. View Savings Goals");
    output::blank_line();
    output::info("  13. Exit");
}

fn dispatch(context: &mut ShellContext, choice: &str) -> Result<(), CliError> {
    match choice {
        "1" => commands::transaction::add(context, TransactionKind::Income),
        "2" => commands::transaction::add(context, TransactionKind::Expense),
        "3" => commands::transaction::view_all(context),
        "4" => commands::transaction::view_filtered(context),
        "5" => commands::transaction::search(context),
        "6" => commands::budget::set(context),
        "7" => commands::budget::status(context),
        "8" => commands::report::monthly(context),
        "9" => commands::report::insights(context),
        "10" => commands::goal::add(context),
        "11" => commands::goal::update(context),
        "12" => commands::goal::view(context),
        "13" => {
            context.running = false;
            Ok(())
        }
        _ => {
            output::error("Invalid choice! Please select 1-13.");
            Ok(())
        }
    }
}
