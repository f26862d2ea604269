//! Set category budgets and inspect their current-month standing.

use tally_core::{BudgetChange, BudgetHealth, BudgetService};
use tally_domain::Budget;

use crate::cli::{io, output, shell_context::ShellContext, ui};
use crate::errors::CliError;

use super::transaction::EXPENSE_CATEGORIES;

pub fn set(context: &mut ShellContext) -> Result<(), CliError> {
    output::section("Set Budget");
    output::info(format!("Categories: {}", EXPENSE_CATEGORIES.join(", ")));

    let Some(category) = io::prompt_text(context, "Category")? else {
        return Ok(());
    };
    if category.is_empty() {
        output::error("Category must not be empty!");
        return Ok(());
    }

    let Some(raw_limit) = io::prompt_text(context, "Monthly budget limit")? else {
        return Ok(());
    };
    let Ok(limit) = raw_limit.parse::<f64>() else {
        output::error("Invalid input!");
        return Ok(());
    };

    let Some(raw_threshold) =
        io::prompt_text(context, "Alert threshold % (default 80)")?
    else {
        return Ok(());
    };
    let threshold = if raw_threshold.is_empty() {
        Budget::DEFAULT_ALERT_THRESHOLD
    } else {
        match raw_threshold.parse::<u8>() {
            Ok(value) => value,
            Err(_) => {
                output::error("Invalid input!");
                return Ok(());
            }
        }
    };

    let change = BudgetService::upsert(&mut context.ledger, category.clone(), limit, threshold)?;
    context.persist()?;
    let verb = match change {
        BudgetChange::Created => "set",
        BudgetChange::Updated => "updated",
    };
    output::success(format!(
        "Budget for {category} {verb} to {}",
        context.formatters.amount(limit)
    ));
    Ok(())
}

pub fn status(context: &mut ShellContext) -> Result<(), CliError> {
    let rows = BudgetService::statuses(&context.ledger, context.today());
    if rows.is_empty() {
        output::info("No active budgets.");
        return Ok(());
    }

    let fmt = &context.formatters;
    output::section("BUDGET STATUS - CURRENT MONTH");
    for row in &rows {
        let headline = format!("[{}] {}", row.health, row.category);
        match row.health {
            BudgetHealth::Exceeded => output::error(headline),
            BudgetHealth::Alert => output::warning(headline),
            BudgetHealth::Ok => output::success(headline),
        }
        output::info(format!("   Budget: {}", fmt.amount(row.monthly_limit)));
        output::info(format!(
            "   Spent:  {} ({:.1}%)",
            fmt.amount(row.spent),
            row.percentage_used
        ));
        output::info(format!(
            "   [{}]",
            ui::progress_bar(row.percentage_used, ui::BAR_WIDTH)
        ));
        output::info(format!("   Remaining: {}", fmt.amount(row.remaining)));
    }
    Ok(())
}
