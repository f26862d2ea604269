//! Monthly summaries and the full monthly report projection.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

use tally_domain::{Ledger, MonthKey};

/// Income/expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub month: MonthKey,
    pub total_income: f64,
    pub total_expense: f64,
}

impl MonthlySummary {
    pub fn net_savings(&self) -> f64 {
        self.total_income - self.total_expense
    }

    /// Net savings over income, as a percentage. Zero when nothing came in.
    pub fn savings_rate(&self) -> f64 {
        if self.total_income > 0.0 {
            self.net_savings() / self.total_income * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// One category's share of the month's expenses.
pub struct CategoryShare {
    pub name: String,
    pub amount: f64,
    /// Share of total expenses, 0 when the month had none.
    pub share_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
/// Expense total attributed to one payment method.
pub struct MethodShare {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Savings-rate health tier: >=30% excellent, >=20% good, >=10% moderate.
pub enum SavingsHealth {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl SavingsHealth {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 30.0 {
            SavingsHealth::Excellent
        } else if rate >= 20.0 {
            SavingsHealth::Good
        } else if rate >= 10.0 {
            SavingsHealth::Moderate
        } else {
            SavingsHealth::Low
        }
    }
}

impl fmt::Display for SavingsHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SavingsHealth::Excellent => "Excellent",
            SavingsHealth::Good => "Good",
            SavingsHealth::Moderate => "Moderate",
            SavingsHealth::Low => "Low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The complete current-month report: summary plus breakdowns and the
/// savings-health tier.
pub struct MonthlyReport {
    pub summary: MonthlySummary,
    pub expense_by_category: Vec<CategoryShare>,
    pub payment_methods: Vec<MethodShare>,
    pub health: SavingsHealth,
}

/// Pure reporting projections over [`Ledger`] snapshots.
pub struct ReportService;

impl ReportService {
    /// Income and expense totals for the given month.
    pub fn monthly_summary(ledger: &Ledger, month: MonthKey) -> MonthlySummary {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for txn in ledger.transactions_in_month(month) {
            if txn.is_income() {
                total_income += txn.amount;
            } else {
                total_expense += txn.amount;
            }
        }
        MonthlySummary {
            month,
            total_income,
            total_expense,
        }
    }

    /// Full report for the month containing `today`.
    pub fn monthly_report(ledger: &Ledger, today: NaiveDate) -> MonthlyReport {
        let month = MonthKey::from_date(today);
        let summary = Self::monthly_summary(ledger, month);

        let mut by_category: HashMap<&str, f64> = HashMap::new();
        let mut by_method: HashMap<&str, f64> = HashMap::new();
        for txn in ledger.transactions_in_month(month).filter(|t| t.is_expense()) {
            *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
            *by_method.entry(txn.payment_method.as_str()).or_default() += txn.amount;
        }

        let total_expense = summary.total_expense;
        let mut expense_by_category: Vec<CategoryShare> = by_category
            .into_iter()
            .map(|(name, amount)| CategoryShare {
                name: name.to_string(),
                amount,
                share_percent: if total_expense > 0.0 {
                    amount / total_expense * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        sort_shares(&mut expense_by_category, |s| (s.amount, s.name.clone()));

        let mut payment_methods: Vec<MethodShare> = by_method
            .into_iter()
            .map(|(name, amount)| MethodShare {
                name: name.to_string(),
                amount,
            })
            .collect();
        sort_shares(&mut payment_methods, |s| (s.amount, s.name.clone()));

        let health = SavingsHealth::from_rate(summary.savings_rate());
        MonthlyReport {
            summary,
            expense_by_category,
            payment_methods,
            health,
        }
    }
}

/// Descending by amount, then ascending by name for a stable listing.
fn sort_shares<T, F: Fn(&T) -> (f64, String)>(rows: &mut [T], key: F) {
    rows.sort_by(|a, b| {
        let (amount_a, name_a) = key(a);
        let (amount_b, name_b) = key(b);
        amount_b
            .partial_cmp(&amount_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(name_a.cmp(&name_b))
    });
}
