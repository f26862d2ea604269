//! Recording, filtering, and searching transactions.

use std::fmt;

use chrono::NaiveDate;

use tally_domain::{Ledger, MonthKey, Transaction, TransactionKind};

use crate::CoreError;

/// Field set collected before a transaction is recorded. The id and date are
/// assigned at insertion time.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub payment_method: String,
    pub recurring: bool,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Narrow a transaction listing to one kind.
pub enum TransactionFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TransactionFilter {
    pub fn accepts(&self, txn: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Income => txn.is_income(),
            TransactionFilter::Expense => txn.is_expense(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Some(TransactionFilter::All),
            "income" => Some(TransactionFilter::Income),
            "expense" => Some(TransactionFilter::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionFilter::All => "all",
            TransactionFilter::Income => "income",
            TransactionFilter::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// Stateless transaction operations over [`Ledger`] snapshots.
pub struct TransactionService;

impl TransactionService {
    /// Validates and appends a new transaction, assigning the next sequential
    /// id and stamping today's date. Returns the assigned id. Persistence and
    /// the follow-up budget-alert check are composed by the caller.
    pub fn add(
        ledger: &mut Ledger,
        draft: TransactionDraft,
        today: NaiveDate,
    ) -> Result<u64, CoreError> {
        if !draft.amount.is_finite() || draft.amount <= 0.0 {
            return Err(CoreError::Validation(
                "amount must be a positive number".into(),
            ));
        }
        let id = ledger.next_transaction_id();
        ledger.transactions.push(Transaction {
            id,
            kind: draft.kind,
            amount: round_cents(draft.amount),
            category: draft.category,
            description: draft.description,
            date: today,
            payment_method: draft.payment_method,
            recurring: draft.recurring,
            tags: draft.tags,
        });
        Ok(id)
    }

    /// Transactions matching the kind filter and optional month, sorted most
    /// recent first. Ties keep insertion order.
    pub fn filtered<'a>(
        ledger: &'a Ledger,
        filter: TransactionFilter,
        month: Option<MonthKey>,
    ) -> Vec<&'a Transaction> {
        let mut rows: Vec<&Transaction> = ledger
            .transactions
            .iter()
            .filter(|t| filter.accepts(t))
            .filter(|t| month.map(|m| t.in_month(m)).unwrap_or(true))
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }

    /// Σincome − Σexpense over the given view.
    pub fn net_total(transactions: &[&Transaction]) -> f64 {
        transactions.iter().map(|t| t.signed_amount()).sum()
    }

    /// Case-insensitive substring search across description, category, and
    /// tags, in ledger order.
    pub fn search<'a>(ledger: &'a Ledger, keyword: &str) -> Vec<&'a Transaction> {
        ledger
            .transactions
            .iter()
            .filter(|t| t.matches_keyword(keyword))
            .collect()
    }
}

/// Rounds to two decimal places, matching the stored precision.
pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
