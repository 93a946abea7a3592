//! CommandHistory - linear undo/redo over a caller-owned portfolio
//!
//! Invariants:
//! - `executed`, replayed in order from the portfolio's initial state,
//!   reproduces the portfolio's current state
//! - `undone` is empty right after every `execute`
//! - a snapshot shares nothing mutable with the history it was taken from

use tracing::{debug, info};

use crate::domain::entities::portfolio::Portfolio;
use crate::domain::entities::trade_action::TradeAction;
use crate::domain::services::command::Command;

#[derive(Debug, Clone)]
pub struct CommandHistory<C = TradeAction> {
    /// Applied and not undone, most recent last
    executed: Vec<C>,
    /// Undone and not redone, most recent last
    undone: Vec<C>,
}

impl<C> Default for CommandHistory<C> {
    fn default() -> Self {
        Self {
            executed: Vec::new(),
            undone: Vec::new(),
        }
    }
}

impl<C: Command + Clone> CommandHistory<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history from persisted stacks. The caller is responsible for
    /// the portfolio already reflecting `executed`.
    pub fn from_parts(executed: Vec<C>, undone: Vec<C>) -> Self {
        Self { executed, undone }
    }

    /// Apply `command` and record it. Anything waiting to be redone is
    /// discarded for good.
    pub fn execute(&mut self, command: C, portfolio: &mut Portfolio) {
        command.apply(portfolio);
        if !self.undone.is_empty() {
            debug!(
                "Discarding {} undone command(s) after new execute",
                self.undone.len()
            );
        }
        info!("Executed: {}", command.describe());
        self.executed.push(command);
        self.undone.clear();
    }

    /// Reverse the most recent command. Returns `false` with no effect when
    /// there is nothing to undo.
    pub fn undo(&mut self, portfolio: &mut Portfolio) -> bool {
        match self.executed.pop() {
            Some(command) => {
                command.invert(portfolio);
                info!("Undone: {}", command.describe());
                self.undone.push(command);
                true
            }
            None => {
                debug!("Undo requested with empty history");
                false
            }
        }
    }

    /// Re-apply the most recently undone command. Returns `false` with no
    /// effect when there is nothing to redo.
    pub fn redo(&mut self, portfolio: &mut Portfolio) -> bool {
        match self.undone.pop() {
            Some(command) => {
                command.apply(portfolio);
                info!("Redone: {}", command.describe());
                self.executed.push(command);
                true
            }
            None => {
                debug!("Redo requested with nothing undone");
                false
            }
        }
    }

    /// Independent deep copy of both stacks
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// `"1. BUY 100 AAPL @ $185.50"`, ... for every applied command, oldest first
    pub fn list(&self) -> Vec<String> {
        self.executed
            .iter()
            .enumerate()
            .map(|(i, command)| format!("{}. {}", i + 1, command.describe()))
            .collect()
    }

    pub fn executed(&self) -> &[C] {
        &self.executed
    }

    pub fn undone(&self) -> &[C] {
        &self.undone
    }

    /// Number of applied commands
    pub fn len(&self) -> usize {
        self.executed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executed.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.executed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::order::{LimitSell, MarketBuy};
    use crate::domain::services::command::ErasedCommand;

    fn buy(symbol: &str, qty: u32, price: f64) -> TradeAction {
        TradeAction::buy(symbol, qty, price).unwrap()
    }

    #[test]
    fn test_execute_pushes_and_clears_redo() {
        let mut portfolio = Portfolio::new(10_000.0).unwrap();
        let mut history = CommandHistory::new();

        history.execute(buy("AAPL", 1, 100.0), &mut portfolio);
        history.undo(&mut portfolio);
        assert!(history.can_redo());

        history.execute(buy("MSFT", 1, 100.0), &mut portfolio);
        assert!(!history.can_redo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_undo_moves_command_to_redo_stack() {
        let mut portfolio = Portfolio::new(10_000.0).unwrap();
        let mut history = CommandHistory::new();
        let action = buy("AAPL", 2, 50.0);

        history.execute(action.clone(), &mut portfolio);
        assert!(history.undo(&mut portfolio));

        assert!(history.is_empty());
        assert_eq!(history.undone(), &[action]);
    }

    #[test]
    fn test_redo_order_is_lifo() {
        let mut portfolio = Portfolio::new(10_000.0).unwrap();
        let mut history = CommandHistory::new();
        let first = buy("AAPL", 1, 10.0);
        let second = buy("MSFT", 1, 20.0);

        history.execute(first.clone(), &mut portfolio);
        history.execute(second.clone(), &mut portfolio);
        history.undo(&mut portfolio);
        history.undo(&mut portfolio);

        assert!(history.redo(&mut portfolio));
        assert_eq!(history.executed(), &[first.clone()]);
        assert!(history.redo(&mut portfolio));
        assert_eq!(history.executed(), &[first, second]);
        assert!(!history.redo(&mut portfolio));
    }

    #[test]
    fn test_list_empty_history() {
        let history: CommandHistory = CommandHistory::new();
        assert!(history.list().is_empty());
    }

    #[test]
    fn test_from_parts_keeps_stacks() {
        let history = CommandHistory::from_parts(
            vec![buy("AAPL", 1, 1.0)],
            vec![buy("MSFT", 2, 2.0)],
        );
        assert_eq!(history.list(), vec!["1. BUY 1 AAPL @ $1.00"]);
        assert!(history.can_redo());
    }

    #[test]
    fn test_history_of_erased_commands() {
        let mut portfolio = Portfolio::new(500_000.0).unwrap();
        let before = portfolio.state();
        let mut history: CommandHistory<ErasedCommand> = CommandHistory::new();

        history.execute(
            ErasedCommand::new(MarketBuy::new("TSLA", 200, 175.0).unwrap()),
            &mut portfolio,
        );
        history.execute(
            ErasedCommand::new(LimitSell::new("NVDA", 30, 890.5).unwrap()),
            &mut portfolio,
        );
        let snapshot = history.snapshot();

        while history.undo(&mut portfolio) {}

        assert_eq!(portfolio.state(), before);
        assert_eq!(
            snapshot.list(),
            vec![
                "1. MARKET BUY 200 TSLA @ $175.00",
                "2. LIMIT SELL 30 NVDA @ $890.50",
            ]
        );
        assert!(history.list().is_empty());
    }
}
