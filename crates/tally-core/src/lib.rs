//! tally-core
//!
//! Business logic and services for Tally.
//! Depends on tally-domain. No CLI, no terminal I/O, no direct storage
//! interactions; persistence goes through the [`storage::LedgerStorage`]
//! trait implemented elsewhere.

pub mod budget_service;
pub mod error;
pub mod goal_service;
pub mod insight_service;
pub mod report_service;
pub mod storage;
pub mod time;
pub mod transaction_service;

pub use budget_service::*;
pub use error::CoreError;
pub use goal_service::*;
pub use insight_service::*;
pub use report_service::*;
pub use storage::LedgerStorage;
pub use time::Clock;
pub use transaction_service::*;
