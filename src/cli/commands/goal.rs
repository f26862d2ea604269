//! Create, fund, and review savings goals.

use chrono::NaiveDate;

use tally_core::GoalService;
use tally_domain::GoalPriority;

use crate::cli::{io, output, shell_context::ShellContext, ui};
use crate::errors::CliError;

pub fn add(context: &mut ShellContext) -> Result<(), CliError> {
    output::section("Add Savings Goal");

    let Some(name) = io::prompt_text(context, "Goal name")? else {
        return Ok(());
    };
    let Some(raw_target) = io::prompt_text(context, "Target amount")? else {
        return Ok(());
    };
    let Ok(target) = raw_target.parse::<f64>() else {
        output::error("Invalid amount!");
        return Ok(());
    };

    let Some(raw_deadline) = io::prompt_text(context, "Deadline (YYYY-MM-DD)")? else {
        return Ok(());
    };
    let Ok(deadline) = NaiveDate::parse_from_str(&raw_deadline, "%Y-%m-%d") else {
        output::error("Invalid date! Use YYYY-MM-DD.");
        return Ok(());
    };

    output::info("Priority: high, medium, low");
    let Some(raw_priority) = io::prompt_text(context, "Priority (default medium)")? else {
        return Ok(());
    };
    let priority = if raw_priority.is_empty() {
        GoalPriority::Medium
    } else {
        match GoalPriority::parse(&raw_priority) {
            Some(priority) => priority,
            None => {
                output::error("Invalid priority! Use high, medium, or low.");
                return Ok(());
            }
        }
    };

    let id = GoalService::add(&mut context.ledger, name.clone(), target, deadline, priority)?;
    context.persist()?;
    output::success(format!(
        "Savings goal '{name}' created for {} (id {id})",
        context.formatters.amount(target)
    ));
    Ok(())
}

pub fn update(context: &mut ShellContext) -> Result<(), CliError> {
    view(context)?;

    let Some(raw_id) = io::prompt_text(context, "Goal id")? else {
        return Ok(());
    };
    let Ok(goal_id) = raw_id.parse::<u64>() else {
        output::error("Invalid input!");
        return Ok(());
    };

    let Some(raw_amount) = io::prompt_text(context, "Amount to add")? else {
        return Ok(());
    };
    let Ok(amount) = raw_amount.parse::<f64>() else {
        output::error("Invalid input!");
        return Ok(());
    };

    let outcome = GoalService::deposit(&mut context.ledger, goal_id, amount)?;
    context.persist()?;
    if outcome.completed {
        output::success(format!("Congratulations! Goal '{}' completed!", outcome.name));
    } else {
        output::success(format!(
            "{} added to '{}'",
            context.formatters.amount(amount),
            outcome.name
        ));
        output::info(format!(
            "   Progress: {:.1}% | Remaining: {}",
            outcome.progress_percent,
            context.formatters.amount(outcome.remaining)
        ));
    }
    Ok(())
}

pub fn view(context: &mut ShellContext) -> Result<(), CliError> {
    let rows = GoalService::progress(&context.ledger, context.today());
    if rows.is_empty() {
        output::info("No active savings goals.");
        return Ok(());
    }

    let fmt = &context.formatters;
    output::section("SAVINGS GOALS");
    for row in &rows {
        output::info(format!("[{}] id {} | {}", row.priority, row.id, row.name));
        output::info(format!("   Target: {}", fmt.amount(row.target_amount)));
        output::info(format!(
            "   Saved:  {} ({:.1}%)",
            fmt.amount(row.current_amount),
            row.progress_percent
        ));
        output::info(format!(
            "   [{}]",
            ui::progress_bar(row.progress_percent, ui::BAR_WIDTH)
        ));
        output::info(format!("   Remaining: {}", fmt.amount(row.remaining)));
        output::info(format!(
            "   Deadline: {} ({} days left)",
            fmt.date(row.deadline),
            row.days_left
        ));
        output::info(format!(
            "   Required monthly saving: {}",
            fmt.amount(row.required_monthly)
        ));
    }
    Ok(())
}
