#![doc(test(attr(deny(warnings))))]

//! Tally is a single-user personal finance ledger: income and expense
//! transactions, per-category monthly budgets, savings goals, and textual
//! reports over a JSON-backed store.

pub mod cli;
pub mod errors;
pub mod fixture;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tally tracing initialized.");
    });
}
