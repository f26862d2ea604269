//! Budget upserts, current-month spend aggregation, and alert evaluation.

use std::fmt;

use chrono::NaiveDate;

use tally_domain::{Budget, Ledger, MonthKey};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of a budget upsert.
pub enum BudgetChange {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Severity of a triggered budget alert.
pub enum BudgetAlertKind {
    /// Spend reached the alert threshold but stayed under the limit.
    Warning,
    /// Spend reached or passed the monthly limit.
    Exceeded,
}

#[derive(Debug, Clone, PartialEq)]
/// Signal emitted after an expense pushes a category near or past its cap.
pub struct BudgetAlert {
    pub kind: BudgetAlertKind,
    pub category: String,
    pub spent: f64,
    pub monthly_limit: f64,
    pub percentage_used: f64,
}

impl BudgetAlert {
    pub fn remaining(&self) -> f64 {
        self.monthly_limit - self.spent
    }

    pub fn overrun(&self) -> f64 {
        self.spent - self.monthly_limit
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Three-tier budget standing for status listings.
pub enum BudgetHealth {
    Ok,
    Alert,
    Exceeded,
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetHealth::Ok => "OK",
            BudgetHealth::Alert => "Alert",
            BudgetHealth::Exceeded => "Exceeded",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One row of the current-month budget status view.
pub struct BudgetStatusRow {
    pub category: String,
    pub monthly_limit: f64,
    pub alert_threshold: u8,
    pub spent: f64,
    pub percentage_used: f64,
    pub remaining: f64,
    pub health: BudgetHealth,
}

/// Stateless budgeting utilities over [`Ledger`] snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Creates or replaces the budget for a category. Updating reactivates an
    /// inactive budget, mirroring a fresh set.
    pub fn upsert(
        ledger: &mut Ledger,
        category: impl Into<String>,
        monthly_limit: f64,
        alert_threshold: u8,
    ) -> Result<BudgetChange, CoreError> {
        if !monthly_limit.is_finite() || monthly_limit <= 0.0 {
            return Err(CoreError::Validation(
                "monthly limit must be a positive number".into(),
            ));
        }
        if alert_threshold > 100 {
            return Err(CoreError::Validation(
                "alert threshold must be between 0 and 100".into(),
            ));
        }
        let category = category.into();
        if let Some(existing) = ledger.budget_mut(&category) {
            existing.monthly_limit = monthly_limit;
            existing.alert_threshold = alert_threshold;
            existing.active = true;
            return Ok(BudgetChange::Updated);
        }
        ledger
            .budgets
            .push(Budget::new(category, monthly_limit, alert_threshold));
        Ok(BudgetChange::Created)
    }

    /// Sum of expense amounts for the exact category within the month.
    pub fn month_spend(ledger: &Ledger, category: &str, month: MonthKey) -> f64 {
        ledger
            .transactions_in_month(month)
            .filter(|t| t.is_expense() && t.category == category)
            .map(|t| t.amount)
            .sum()
    }

    /// Evaluates the alert condition for a category after an expense. Absent
    /// or inactive budgets yield `None` (silent no-op).
    pub fn alert_for(ledger: &Ledger, category: &str, today: NaiveDate) -> Option<BudgetAlert> {
        let budget = ledger.budget(category).filter(|b| b.active)?;
        let spent = Self::month_spend(ledger, category, MonthKey::from_date(today));
        let percentage_used = budget.percentage_used(spent);
        let kind = if percentage_used >= 100.0 {
            BudgetAlertKind::Exceeded
        } else if percentage_used >= budget.alert_threshold as f64 {
            BudgetAlertKind::Warning
        } else {
            return None;
        };
        Some(BudgetAlert {
            kind,
            category: budget.category.clone(),
            spent,
            monthly_limit: budget.monthly_limit,
            percentage_used,
        })
    }

    /// Current-month standing of every active budget, in registration order.
    pub fn statuses(ledger: &Ledger, today: NaiveDate) -> Vec<BudgetStatusRow> {
        let month = MonthKey::from_date(today);
        ledger
            .budgets
            .iter()
            .filter(|b| b.active)
            .map(|budget| {
                let spent = Self::month_spend(ledger, &budget.category, month);
                let percentage_used = budget.percentage_used(spent);
                let health = if percentage_used >= 100.0 {
                    BudgetHealth::Exceeded
                } else if percentage_used >= budget.alert_threshold as f64 {
                    BudgetHealth::Alert
                } else {
                    BudgetHealth::Ok
                };
                BudgetStatusRow {
                    category: budget.category.clone(),
                    monthly_limit: budget.monthly_limit,
                    alert_threshold: budget.alert_threshold,
                    spent,
                    percentage_used,
                    remaining: budget.remaining(spent),
                    health,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tally_domain::{Transaction, TransactionKind};

    use super::*;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(id: u64, amount: f64, category: &str, date: NaiveDate) -> Transaction {
        Transaction {
            id,
            kind: TransactionKind::Expense,
            amount,
            category: category.into(),
            description: String::new(),
            date,
            payment_method: "Cash".into(),
            recurring: false,
            tags: Vec::new(),
        }
    }

    fn food_ledger(prior_spend: f64) -> Ledger {
        let mut ledger = Ledger::new();
        BudgetService::upsert(&mut ledger, "Food", 5000.0, 80).unwrap();
        ledger
            .transactions
            .push(expense(1, prior_spend, "Food", sample_date(2025, 11, 5)));
        ledger
    }

    #[test]
    fn upsert_creates_then_updates_by_category() {
        let mut ledger = Ledger::new();
        let change = BudgetService::upsert(&mut ledger, "Food", 5000.0, 80).unwrap();
        assert_eq!(change, BudgetChange::Created);

        ledger.budget_mut("Food").unwrap().active = false;
        let change = BudgetService::upsert(&mut ledger, "Food", 6000.0, 75).unwrap();
        assert_eq!(change, BudgetChange::Updated);
        assert_eq!(ledger.budgets.len(), 1);

        let budget = ledger.budget("Food").unwrap();
        assert_eq!(budget.monthly_limit, 6000.0);
        assert_eq!(budget.alert_threshold, 75);
        assert!(budget.active);
    }

    #[test]
    fn upsert_rejects_bad_limit_and_threshold() {
        let mut ledger = Ledger::new();
        assert!(matches!(
            BudgetService::upsert(&mut ledger, "Food", 0.0, 80),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            BudgetService::upsert(&mut ledger, "Food", 100.0, 101),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn month_spend_counts_only_matching_expenses() {
        let mut ledger = food_ledger(1200.0);
        let nov = sample_date(2025, 11, 10);
        // Same month, other category; other month, same category; income.
        ledger.transactions.push(expense(2, 300.0, "Transport", nov));
        ledger
            .transactions
            .push(expense(3, 999.0, "Food", sample_date(2025, 10, 10)));
        ledger.transactions.push(Transaction {
            kind: TransactionKind::Income,
            ..expense(4, 400.0, "Food", nov)
        });

        let month = MonthKey::new(2025, 11).unwrap();
        assert_eq!(BudgetService::month_spend(&ledger, "Food", month), 1200.0);
    }

    #[test]
    fn alert_triggers_at_the_threshold_boundary() {
        // 4600 spent of 5000 -> 92% used.
        let mut ledger = food_ledger(4600.0);
        let today = sample_date(2025, 11, 20);
        let alert = BudgetService::alert_for(&ledger, "Food", today).expect("92% >= 80%");
        assert_eq!(alert.kind, BudgetAlertKind::Warning);
        assert_eq!(alert.percentage_used, 92.0);
        assert_eq!(alert.remaining(), 400.0);

        // A threshold above the usage suppresses the alert.
        ledger.budget_mut("Food").unwrap().alert_threshold = 93;
        assert!(BudgetService::alert_for(&ledger, "Food", today).is_none());
    }

    #[test]
    fn alert_reports_exceeded_at_and_past_the_limit() {
        let mut ledger = food_ledger(4600.0);
        let today = sample_date(2025, 11, 21);
        ledger.transactions.push(expense(2, 900.0, "Food", today));
        let alert = BudgetService::alert_for(&ledger, "Food", today).expect("over the cap");
        assert_eq!(alert.kind, BudgetAlertKind::Exceeded);
        assert_eq!(alert.spent, 5500.0);
        assert_eq!(alert.overrun(), 500.0);
    }

    #[test]
    fn no_alert_without_an_active_budget() {
        let mut ledger = food_ledger(4900.0);
        let today = sample_date(2025, 11, 20);
        assert!(BudgetService::alert_for(&ledger, "Transport", today).is_none());
        ledger.budget_mut("Food").unwrap().active = false;
        assert!(BudgetService::alert_for(&ledger, "Food", today).is_none());
    }

    #[test]
    fn statuses_tier_each_active_budget() {
        let mut ledger = Ledger::new();
        BudgetService::upsert(&mut ledger, "Food", 5000.0, 80).unwrap();
        BudgetService::upsert(&mut ledger, "Transport", 2000.0, 80).unwrap();
        BudgetService::upsert(&mut ledger, "Shopping", 1000.0, 80).unwrap();
        let today = sample_date(2025, 11, 20);
        ledger.transactions.push(expense(1, 2000.0, "Food", today));
        ledger.transactions.push(expense(2, 1700.0, "Transport", today));
        ledger.transactions.push(expense(3, 1500.0, "Shopping", today));

        let rows = BudgetService::statuses(&ledger, today);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].health, BudgetHealth::Ok);
        assert_eq!(rows[0].percentage_used, 40.0);
        assert_eq!(rows[1].health, BudgetHealth::Alert);
        assert_eq!(rows[2].health, BudgetHealth::Exceeded);
        assert_eq!(rows[2].remaining, -500.0);
    }
}
