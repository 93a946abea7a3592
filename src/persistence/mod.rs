//! Persistence Layer
//!
//! Stores a ledger's undo and redo stacks as a JSON document. The portfolio
//! itself is never written: loading replays the undo stack from the stored
//! starting cash, which reproduces it exactly.

pub mod models;
pub mod repository;

pub use models::{HistoryRecord, HISTORY_FORMAT_VERSION};
pub use repository::{load, save};
