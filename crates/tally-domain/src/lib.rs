//! tally-domain
//!
//! Serde data model for the Tally ledger document.
//! No business logic, no I/O; services live in tally-core.

pub mod budget;
pub mod common;
pub mod goal;
pub mod investment;
pub mod ledger;
pub mod transaction;

pub use budget::Budget;
pub use common::*;
pub use goal::{GoalPriority, GoalStatus, SavingsGoal};
pub use investment::InvestmentEntry;
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
