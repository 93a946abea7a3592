//! Journal entity - append-only record of every portfolio mutation

use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::trade_action::TradeSide;
use crate::domain::value_objects::money::format_money;
use crate::domain::value_objects::{price::Price, quantity::Quantity, symbol::Symbol};

/// Whether a mutation applied a trade or reversed an earlier one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalPhase {
    Executed,
    Reversed,
}

/// A reversed BUY keeps `side == Buy`; it is never recorded as a SELL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub phase: JournalPhase,
    pub side: TradeSide,
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub price: Price,
    /// Cash balance right after the mutation
    pub cash_after: BigDecimal,
    pub recorded_at: DateTime<Utc>,
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            JournalPhase::Executed => write!(
                f,
                "[EXEC] {:<4} {} {} @ ${}  (cash: ${})",
                self.side,
                self.quantity,
                self.symbol,
                self.price,
                format_money(&self.cash_after)
            ),
            JournalPhase::Reversed => write!(
                f,
                "[UNDO] {:<4} {} {} @ ${} reversed  (cash: ${})",
                self.side,
                self.quantity,
                self.symbol,
                self.price,
                format_money(&self.cash_after)
            ),
        }
    }
}
