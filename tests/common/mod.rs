use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the
/// test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated app-data directory for one test and returns its path.
/// Point `TALLY_HOME` at it when driving the binary.
pub fn test_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Pre-seeds an empty ledger document so a scripted run starts from a blank
/// store instead of the demo fixture.
pub fn seed_empty_ledger(home: &PathBuf) {
    std::fs::write(home.join("finance_data.json"), "{}").expect("write empty ledger");
}
