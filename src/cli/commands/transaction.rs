//! Add, list, filter, and search transactions.

use tally_core::{
    BudgetAlert, BudgetAlertKind, BudgetService, TransactionDraft, TransactionFilter,
    TransactionService,
};
use tally_domain::{MonthKey, Transaction, TransactionKind};

use crate::cli::{io, output, shell_context::ShellContext};
use crate::errors::CliError;

/// Suggested (but unenforced) category lists shown before the prompt.
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Bills",
    "Education",
    "Healthcare",
    "Others",
];
pub const INCOME_CATEGORIES: [&str; 5] = ["Salary", "Freelance", "Investment", "Gift", "Others"];

pub fn add(context: &mut ShellContext, kind: TransactionKind) -> Result<(), CliError> {
    output::section(format!("Add {kind}"));

    let Some(raw_amount) = io::prompt_text(context, "Amount")? else {
        return Ok(());
    };
    let Ok(amount) = raw_amount.parse::<f64>() else {
        output::error("Invalid amount!");
        return Ok(());
    };

    let suggestions = match kind {
        TransactionKind::Income => INCOME_CATEGORIES.join(", "),
        TransactionKind::Expense => EXPENSE_CATEGORIES.join(", "),
    };
    output::info(format!("Categories: {suggestions}"));
    let Some(category) = io::prompt_text(context, "Category")? else {
        return Ok(());
    };
    let Some(description) = io::prompt_text(context, "Description")? else {
        return Ok(());
    };
    let Some(payment_method) = io::prompt_text(context, "Payment method")? else {
        return Ok(());
    };
    let Some(recurring) = io::prompt_yes_no(context, "Recurring?")? else {
        return Ok(());
    };
    let Some(raw_tags) = io::prompt_text(context, "Tags (comma-separated, optional)")? else {
        return Ok(());
    };

    let today = context.today();
    let draft = TransactionDraft {
        kind,
        amount,
        category: category.clone(),
        description,
        payment_method,
        recurring,
        tags: parse_tags(&raw_tags),
    };
    let id = TransactionService::add(&mut context.ledger, draft, today)?;
    context.persist()?;
    output::success(format!(
        "{kind} of {} recorded (id {id})",
        context.formatters.amount(amount)
    ));

    if kind == TransactionKind::Expense {
        if let Some(alert) = BudgetService::alert_for(&context.ledger, &category, today) {
            render_alert(context, &alert);
        }
    }
    Ok(())
}

pub fn view_all(context: &mut ShellContext) -> Result<(), CliError> {
    let rows = TransactionService::filtered(&context.ledger, TransactionFilter::All, None);
    render_transactions(context, &rows, "TRANSACTIONS (ALL)");
    Ok(())
}

pub fn view_filtered(context: &mut ShellContext) -> Result<(), CliError> {
    output::info("Filter by: income, expense, all");
    let Some(raw_filter) = io::prompt_text(context, "Filter type")? else {
        return Ok(());
    };
    let Some(filter) = TransactionFilter::parse(&raw_filter) else {
        output::error("Invalid filter type!");
        return Ok(());
    };

    let Some(raw_month) = io::prompt_text(context, "Month (YYYY-MM, optional)")? else {
        return Ok(());
    };
    let month = if raw_month.is_empty() {
        None
    } else {
        match raw_month.parse::<MonthKey>() {
            Ok(key) => Some(key),
            Err(err) => {
                output::error(err);
                return Ok(());
            }
        }
    };

    let rows = TransactionService::filtered(&context.ledger, filter, month);
    let title = format!("TRANSACTIONS ({})", filter.to_string().to_uppercase());
    render_transactions(context, &rows, &title);
    Ok(())
}

pub fn search(context: &mut ShellContext) -> Result<(), CliError> {
    let Some(keyword) = io::prompt_text(context, "Search keyword")? else {
        return Ok(());
    };
    if keyword.is_empty() {
        output::error("Search keyword must not be empty!");
        return Ok(());
    }

    let rows = TransactionService::search(&context.ledger, &keyword);
    if rows.is_empty() {
        output::info(format!("No transactions found matching '{keyword}'"));
        return Ok(());
    }

    let fmt = &context.formatters;
    output::section(format!(
        "Search results for '{keyword}' ({} found)",
        rows.len()
    ));
    for txn in rows {
        output::info(format!(
            "{} | {} | {}",
            fmt.date(txn.date),
            fmt.amount(txn.amount),
            txn.category
        ));
        output::info(format!("   {}", txn.description));
    }
    Ok(())
}

fn render_transactions(context: &ShellContext, rows: &[&Transaction], title: &str) {
    if rows.is_empty() {
        output::info("No transactions found.");
        return;
    }

    let fmt = &context.formatters;
    output::section(title);
    for txn in rows {
        let marker = if txn.is_income() { "+" } else { "-" };
        output::info(format!(
            "[{marker}] id {} | {} | {} | {}",
            txn.id,
            fmt.date(txn.date),
            fmt.amount(txn.amount),
            txn.category
        ));
        output::info(format!("    {}", txn.description));
        output::info(format!(
            "    Payment: {} | Recurring: {}",
            txn.payment_method,
            if txn.recurring { "yes" } else { "no" }
        ));
        if !txn.tags.is_empty() {
            output::info(format!("    Tags: {}", txn.tags.join(", ")));
        }
    }
    output::separator();
    let net = TransactionService::net_total(rows);
    output::info(format!("Net Total: {}", fmt.amount(net)));
}

fn render_alert(context: &ShellContext, alert: &BudgetAlert) {
    let fmt = &context.formatters;
    match alert.kind {
        BudgetAlertKind::Exceeded => {
            output::error(format!("BUDGET EXCEEDED for {}!", alert.category));
            output::info(format!(
                "   Spent: {} / {}",
                fmt.amount(alert.spent),
                fmt.amount(alert.monthly_limit)
            ));
            output::info(format!("   Over budget by: {}", fmt.amount(alert.overrun())));
        }
        BudgetAlertKind::Warning => {
            output::warning(format!("BUDGET ALERT for {}!", alert.category));
            output::info(format!(
                "   Spent: {} / {} ({:.1}%)",
                fmt.amount(alert.spent),
                fmt.amount(alert.monthly_limit),
                alert.percentage_used
            ));
            output::info(format!("   Remaining: {}", fmt.amount(alert.remaining())));
        }
    }
}

fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_tags;

    #[test]
    fn tags_split_on_commas_and_drop_blanks() {
        assert_eq!(parse_tags("work, monthly"), vec!["work", "monthly"]);
        assert_eq!(parse_tags(" a ,, b "), vec!["a", "b"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("  ,  ").is_empty());
    }
}
