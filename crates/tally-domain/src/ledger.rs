//! The persisted ledger document and its lookup helpers.

use serde::{Deserialize, Serialize};

use crate::{
    budget::Budget, common::MonthKey, goal::SavingsGoal, investment::InvestmentEntry,
    transaction::Transaction,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// The whole JSON document: every collection the store persists. Loaded into
/// memory in full and rewritten in full on every mutation.
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub investment_tracker: Vec<InvestmentEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next transaction id. Transactions are never deleted, so the count
    /// stays in lockstep with the highest assigned id.
    pub fn next_transaction_id(&self) -> u64 {
        self.transactions.len() as u64 + 1
    }

    pub fn next_goal_id(&self) -> u64 {
        self.savings_goals.len() as u64 + 1
    }

    /// Budget registered for the exact category name, if any.
    pub fn budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    pub fn budget_mut(&mut self, category: &str) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|b| b.category == category)
    }

    pub fn goal(&self, id: u64) -> Option<&SavingsGoal> {
        self.savings_goals.iter().find(|g| g.id == id)
    }

    pub fn goal_mut(&mut self, id: u64) -> Option<&mut SavingsGoal> {
        self.savings_goals.iter_mut().find(|g| g.id == id)
    }

    pub fn active_goals(&self) -> impl Iterator<Item = &SavingsGoal> {
        self.savings_goals.iter().filter(|g| g.is_active())
    }

    pub fn transactions_in_month(&self, month: MonthKey) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(move |t| t.in_month(month))
    }
}
