//! Filesystem-backed JSON persistence for the ledger document.
//!
//! The document is always written whole: serialized to a sibling tmp file and
//! renamed over the target. No locking; a single process owns the file.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tally_core::{CoreError, LedgerStorage};
use tally_domain::Ledger;

const TMP_SUFFIX: &str = "tmp";

/// Whole-document JSON persistence implementing [`LedgerStorage`].
#[derive(Debug, Clone, Default)]
pub struct JsonLedgerStorage;

impl JsonLedgerStorage {
    pub fn new() -> Self {
        Self
    }
}

impl LedgerStorage for JsonLedgerStorage {
    fn save_ledger(&self, ledger: &Ledger, path: &Path) -> Result<(), CoreError> {
        save_ledger_to_path(ledger, path)
    }

    fn load_ledger(&self, path: &Path) -> Result<Ledger, CoreError> {
        load_ledger_from_path(path)
    }
}

/// Saves a ledger to the given path, replacing any existing document.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_ledger(ledger)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a ledger from the provided filesystem path.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

fn serialize_ledger(ledger: &Ledger) -> Result<String, CoreError> {
    serde_json::to_string_pretty(ledger).map_err(|err| CoreError::Serde(err.to_string()))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
