//! History repository - JSON file storage for a ledger's command stacks

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::errors::PersistenceError;
use crate::domain::services::ledger::Ledger;
use crate::persistence::models::HistoryRecord;

/// Write the ledger's history to `path`, replacing any previous file.
///
/// The document goes to a sibling temp file first and is renamed into place,
/// so a crash mid-write leaves the old file intact.
pub fn save(ledger: &Ledger, path: &Path) -> Result<(), PersistenceError> {
    let record = HistoryRecord::from_ledger(ledger);
    let json = serde_json::to_string_pretty(&record)?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    info!(
        "Saved {} trade(s) ({} undone) to {}",
        record.executed.len(),
        record.undone.len(),
        path.display()
    );
    Ok(())
}

/// Read a history file and replay it into a fresh ledger
pub fn load(path: &Path) -> Result<Ledger, PersistenceError> {
    debug!("Loading history from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let record: HistoryRecord = serde_json::from_str(&contents)?;
    record.into_ledger()
}
