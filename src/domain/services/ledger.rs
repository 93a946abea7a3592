//! Ledger - one portfolio paired with the history that produced it

use bigdecimal::BigDecimal;
use tracing::info;

use crate::domain::entities::portfolio::Portfolio;
use crate::domain::entities::trade_action::TradeAction;
use crate::domain::errors::ValidationError;
use crate::domain::services::command::Command;
use crate::domain::services::command_history::CommandHistory;
use crate::domain::value_objects::money::cash_from_f64;

#[derive(Debug, Clone)]
pub struct Ledger {
    initial_cash: BigDecimal,
    portfolio: Portfolio,
    history: CommandHistory<TradeAction>,
}

impl Ledger {
    pub fn new(initial_cash: f64) -> Result<Self, ValidationError> {
        Ok(Self::with_cash(cash_from_f64(initial_cash)?))
    }

    pub fn with_cash(initial_cash: BigDecimal) -> Self {
        Self {
            portfolio: Portfolio::with_cash(initial_cash.clone()),
            initial_cash,
            history: CommandHistory::new(),
        }
    }

    /// Rebuild a ledger by applying `executed` in order to a fresh portfolio.
    /// `undone` is restored as the redo stack without being applied.
    pub fn replay(
        initial_cash: BigDecimal,
        executed: Vec<TradeAction>,
        undone: Vec<TradeAction>,
    ) -> Self {
        let mut ledger = Self::with_cash(initial_cash);
        let replayed = executed.len();
        for action in &executed {
            action.apply(&mut ledger.portfolio);
        }
        ledger.history = CommandHistory::from_parts(executed, undone);
        info!(
            "Replayed {} trade(s); {} available to redo",
            replayed,
            ledger.history.undone().len()
        );
        ledger
    }

    pub fn execute(&mut self, action: TradeAction) {
        self.history.execute(action, &mut self.portfolio);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.portfolio)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.portfolio)
    }

    pub fn list(&self) -> Vec<String> {
        self.history.list()
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn history(&self) -> &CommandHistory<TradeAction> {
        &self.history
    }

    pub fn initial_cash(&self) -> &BigDecimal {
        &self.initial_cash
    }

    /// Copy of portfolio and history together, for a later `restore`
    pub fn snapshot(&self) -> Ledger {
        self.clone()
    }

    /// Roll back to a snapshot taken earlier from this ledger
    pub fn restore(&mut self, snapshot: Ledger) {
        info!(
            "Restoring ledger snapshot with {} trade(s)",
            snapshot.history.len()
        );
        *self = snapshot;
    }
}
