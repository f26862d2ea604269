use std::path::Path;

use tally_domain::Ledger;

use crate::CoreError;

/// Abstraction over persistence backends capable of storing the ledger
/// document. Writes replace the whole document; partial updates are not part
/// of the contract.
pub trait LedgerStorage: Send + Sync {
    fn save_ledger(&self, ledger: &Ledger, path: &Path) -> Result<(), CoreError>;
    fn load_ledger(&self, path: &Path) -> Result<Ledger, CoreError>;
}
