//! Spending-pattern insights derived from the full transaction history.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use tally_domain::{Ledger, MonthKey};

use crate::{goal_service::required_monthly, report_service::ReportService};

/// Threshold (in percent) beyond which a month-over-month move is flagged.
const TREND_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
/// One finding surfaced by the insight pass, in presentation order.
pub enum Insight {
    /// Spending rose by more than the trend threshold versus the prior month.
    SpendingUp { percent: f64 },
    /// Spending fell by more than the trend threshold versus the prior month.
    SpendingDown { percent: f64 },
    /// Largest expense category of the current month.
    TopCategory { name: String, amount: f64 },
    /// Current-month total across recurring expenses.
    RecurringTotal { amount: f64 },
    /// An active goal whose required monthly rate outpaces current savings.
    GoalAtRisk {
        name: String,
        required_monthly: f64,
        current_savings: f64,
    },
}

/// Read-only analysis over [`Ledger`] snapshots.
pub struct InsightService;

impl InsightService {
    /// Collects insights in a fixed order: spending trend, top category,
    /// recurring load, then goals at risk. An empty result means there is not
    /// enough history to say anything.
    pub fn insights(ledger: &Ledger, today: NaiveDate) -> Vec<Insight> {
        let mut insights = Vec::new();
        let current_month = MonthKey::from_date(today);

        if let Some(trend) = Self::spending_trend(ledger) {
            insights.push(trend);
        }

        if let Some((name, amount)) = Self::top_category(ledger, current_month) {
            insights.push(Insight::TopCategory { name, amount });
        }

        if ledger
            .transactions
            .iter()
            .any(|t| t.is_expense() && t.recurring)
        {
            let amount = ledger
                .transactions_in_month(current_month)
                .filter(|t| t.is_expense() && t.recurring)
                .map(|t| t.amount)
                .sum();
            insights.push(Insight::RecurringTotal { amount });
        }

        let summary = ReportService::monthly_summary(ledger, current_month);
        if summary.total_income > 0.0 {
            let current_savings = summary.net_savings();
            for goal in ledger.active_goals() {
                let days_left = (goal.deadline - today).num_days();
                let required = required_monthly(goal.remaining(), days_left);
                if current_savings < required {
                    insights.push(Insight::GoalAtRisk {
                        name: goal.name.clone(),
                        required_monthly: required,
                        current_savings,
                    });
                }
            }
        }

        insights
    }

    /// Compares the two most recent months that carry expenses. Moves within
    /// the threshold band are not worth reporting.
    fn spending_trend(ledger: &Ledger) -> Option<Insight> {
        let mut by_month: BTreeMap<MonthKey, f64> = BTreeMap::new();
        for txn in ledger.transactions.iter().filter(|t| t.is_expense()) {
            *by_month.entry(MonthKey::from_date(txn.date)).or_default() += txn.amount;
        }
        let mut months = by_month.iter().rev();
        let (_, &current) = months.next()?;
        let (_, &previous) = months.next()?;
        if previous <= 0.0 {
            return None;
        }
        let change = (current - previous) / previous * 100.0;
        if change > TREND_THRESHOLD {
            Some(Insight::SpendingUp { percent: change })
        } else if change < -TREND_THRESHOLD {
            Some(Insight::SpendingDown { percent: -change })
        } else {
            None
        }
    }

    fn top_category(ledger: &Ledger, month: MonthKey) -> Option<(String, f64)> {
        let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
        for txn in ledger.transactions_in_month(month).filter(|t| t.is_expense()) {
            *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
        }
        by_category
            .into_iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(name, amount)| (name.to_string(), amount))
    }
}

#[cfg(test)]
mod tests {
    use tally_domain::{GoalPriority, Transaction, TransactionKind};

    use crate::goal_service::GoalService;

    use super::*;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: u64, kind: TransactionKind, amount: f64, category: &str, date: NaiveDate) -> Transaction {
        Transaction {
            id,
            kind,
            amount,
            category: category.into(),
            description: String::new(),
            date,
            payment_method: "Cash".into(),
            recurring: false,
            tags: Vec::new(),
        }
    }

    #[test]
    fn flags_spending_up_beyond_twenty_percent() {
        let mut ledger = Ledger::new();
        ledger.transactions.push(txn(
            1,
            TransactionKind::Expense,
            1000.0,
            "Food",
            sample_date(2025, 10, 10),
        ));
        ledger.transactions.push(txn(
            2,
            TransactionKind::Expense,
            1300.0,
            "Food",
            sample_date(2025, 11, 10),
        ));
        let insights = InsightService::insights(&ledger, sample_date(2025, 11, 20));
        assert!(matches!(
            insights[0],
            Insight::SpendingUp { percent } if (percent - 30.0).abs() < 1e-9
        ));
    }

    #[test]
    fn stays_quiet_inside_the_trend_band() {
        let mut ledger = Ledger::new();
        ledger.transactions.push(txn(
            1,
            TransactionKind::Expense,
            1000.0,
            "Food",
            sample_date(2025, 10, 10),
        ));
        ledger.transactions.push(txn(
            2,
            TransactionKind::Expense,
            1150.0,
            "Food",
            sample_date(2025, 11, 10),
        ));
        let insights = InsightService::insights(&ledger, sample_date(2025, 11, 20));
        assert!(!insights
            .iter()
            .any(|i| matches!(i, Insight::SpendingUp { .. } | Insight::SpendingDown { .. })));
    }

    #[test]
    fn flags_spending_down_with_positive_magnitude() {
        let mut ledger = Ledger::new();
        ledger.transactions.push(txn(
            1,
            TransactionKind::Expense,
            2000.0,
            "Shopping",
            sample_date(2025, 10, 5),
        ));
        ledger.transactions.push(txn(
            2,
            TransactionKind::Expense,
            1000.0,
            "Shopping",
            sample_date(2025, 11, 5),
        ));
        let insights = InsightService::insights(&ledger, sample_date(2025, 11, 20));
        assert!(matches!(
            insights[0],
            Insight::SpendingDown { percent } if (percent - 50.0).abs() < 1e-9
        ));
    }

    #[test]
    fn reports_top_category_and_recurring_total_for_current_month() {
        let mut ledger = Ledger::new();
        let nov = sample_date(2025, 11, 12);
        ledger
            .transactions
            .push(txn(1, TransactionKind::Expense, 900.0, "Food", nov));
        ledger
            .transactions
            .push(txn(2, TransactionKind::Expense, 1500.0, "Shopping", nov));
        let mut bills = txn(3, TransactionKind::Expense, 600.0, "Bills", nov);
        bills.recurring = true;
        ledger.transactions.push(bills);

        let insights = InsightService::insights(&ledger, sample_date(2025, 11, 20));
        assert!(insights.iter().any(|i| matches!(
            i,
            Insight::TopCategory { name, amount } if name == "Shopping" && *amount == 1500.0
        )));
        assert!(insights
            .iter()
            .any(|i| matches!(i, Insight::RecurringTotal { amount } if *amount == 600.0)));
    }

    #[test]
    fn goal_at_risk_requires_income_and_a_shortfall() {
        let mut ledger = Ledger::new();
        let nov = sample_date(2025, 11, 10);
        ledger
            .transactions
            .push(txn(1, TransactionKind::Income, 10000.0, "Salary", nov));
        ledger
            .transactions
            .push(txn(2, TransactionKind::Expense, 9000.0, "Shopping", nov));
        GoalService::add(
            &mut ledger,
            "Laptop Upgrade",
            80000.0,
            sample_date(2026, 1, 31),
            GoalPriority::Medium,
        )
        .unwrap();

        // Net savings 1000 against a steep required rate -> at risk.
        let insights = InsightService::insights(&ledger, sample_date(2025, 11, 20));
        assert!(insights.iter().any(|i| matches!(
            i,
            Insight::GoalAtRisk { name, current_savings, .. }
                if name == "Laptop Upgrade" && *current_savings == 1000.0
        )));
    }

    #[test]
    fn goal_check_is_skipped_without_income() {
        let mut ledger = Ledger::new();
        ledger.transactions.push(txn(
            1,
            TransactionKind::Expense,
            500.0,
            "Food",
            sample_date(2025, 11, 10),
        ));
        GoalService::add(
            &mut ledger,
            "Trip",
            30000.0,
            sample_date(2026, 1, 15),
            GoalPriority::Low,
        )
        .unwrap();
        let insights = InsightService::insights(&ledger, sample_date(2025, 11, 20));
        assert!(!insights.iter().any(|i| matches!(i, Insight::GoalAtRisk { .. })));
    }
}
