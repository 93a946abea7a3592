//! Persisted history document
//!
//! Only the command stacks and the starting cash are stored; the portfolio is
//! rebuilt by replaying the undo stack.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::trade_action::TradeAction;
use crate::domain::errors::PersistenceError;
use crate::domain::services::ledger::Ledger;
use crate::domain::value_objects::money::validate_cash;

pub const HISTORY_FORMAT_VERSION: u32 = 1;

/// History record on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub version: u32,
    pub initial_cash: BigDecimal,
    /// Undo stack, oldest first
    pub executed: Vec<TradeAction>,
    /// Redo stack, most recently undone last
    pub undone: Vec<TradeAction>,
    pub saved_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            version: HISTORY_FORMAT_VERSION,
            initial_cash: ledger.initial_cash().clone(),
            executed: ledger.history().executed().to_vec(),
            undone: ledger.history().undone().to_vec(),
            saved_at: Utc::now(),
        }
    }

    pub fn into_ledger(self) -> Result<Ledger, PersistenceError> {
        if self.version != HISTORY_FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                expected: HISTORY_FORMAT_VERSION,
            });
        }
        let initial_cash = validate_cash(self.initial_cash)?;
        Ok(Ledger::replay(initial_cash, self.executed, self.undone))
    }
}
