//! Monthly report and expense-insight views.

use tally_core::{Insight, InsightService, ReportService, SavingsHealth};

use crate::cli::{output, shell_context::ShellContext, ui};
use crate::errors::CliError;

pub fn monthly(context: &mut ShellContext) -> Result<(), CliError> {
    let report = ReportService::monthly_report(&context.ledger, context.today());
    let fmt = &context.formatters;

    output::section("MONTHLY FINANCIAL REPORT");
    output::info(format!("Period: {}", report.summary.month.long_label()));
    output::blank_line();
    output::info(format!(
        "Total Income:   {}",
        fmt.amount(report.summary.total_income)
    ));
    output::info(format!(
        "Total Expenses: {}",
        fmt.amount(report.summary.total_expense)
    ));
    output::info(format!(
        "Net Savings:    {}",
        fmt.amount(report.summary.net_savings())
    ));
    output::info(format!(
        "Savings Rate:   {:.1}%",
        report.summary.savings_rate()
    ));

    if !report.expense_by_category.is_empty() {
        output::section("Expense breakdown by category");
        for share in &report.expense_by_category {
            output::info(format!(
                "   {:<15} {:>14} ({:>5.1}%) {}",
                share.name,
                fmt.amount(share.amount),
                share.share_percent,
                ui::share_bar(share.share_percent)
            ));
        }
    }

    if !report.payment_methods.is_empty() {
        output::section("Payment method usage");
        for method in &report.payment_methods {
            output::info(format!(
                "   {:<15} {}",
                method.name,
                fmt.amount(method.amount)
            ));
        }
    }

    output::section("Financial health");
    let advice = match report.health {
        SavingsHealth::Excellent => "Excellent savings rate! You're on track!",
        SavingsHealth::Good => "Good savings rate. Keep it up!",
        SavingsHealth::Moderate => "Moderate savings. Try to reduce expenses.",
        SavingsHealth::Low => "Low savings rate. Review your expenses urgently!",
    };
    match report.health {
        SavingsHealth::Excellent | SavingsHealth::Good => output::success(advice),
        SavingsHealth::Moderate => output::warning(advice),
        SavingsHealth::Low => output::error(advice),
    }
    Ok(())
}

pub fn insights(context: &mut ShellContext) -> Result<(), CliError> {
    let findings = InsightService::insights(&context.ledger, context.today());

    output::section("EXPENSE INSIGHTS & RECOMMENDATIONS");
    if findings.is_empty() {
        output::info("Keep tracking expenses to get personalized insights!");
        return Ok(());
    }

    let fmt = &context.formatters;
    for (index, insight) in findings.iter().enumerate() {
        let line = match insight {
            Insight::SpendingUp { percent } => format!(
                "Your spending increased by {percent:.1}% compared to last month. Review discretionary expenses!"
            ),
            Insight::SpendingDown { percent } => format!(
                "Great job! Your spending decreased by {percent:.1}% compared to last month."
            ),
            Insight::TopCategory { name, amount } => format!(
                "'{name}' is your highest spending category this month: {}",
                fmt.amount(*amount)
            ),
            Insight::RecurringTotal { amount } => {
                format!("Recurring expenses total: {} per month", fmt.amount(*amount))
            }
            Insight::GoalAtRisk {
                name,
                required_monthly,
                current_savings,
            } => format!(
                "To reach '{name}', you need to save {}/month. Current savings: {}",
                fmt.amount(*required_monthly),
                fmt.amount(*current_savings)
            ),
        };
        output::info(format!("{}. {line}", index + 1));
    }
    Ok(())
}
