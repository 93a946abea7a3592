//! Portfolio entity - the receiver every trade command mutates
//!
//! Cash is an exact decimal so that reversing a trade restores the previous
//! balance exactly, not merely to within rounding.

use std::collections::BTreeMap;
use std::fmt;

use bigdecimal::BigDecimal;
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::domain::entities::journal::{JournalEntry, JournalPhase};
use crate::domain::entities::trade_action::TradeSide;
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::money::{cash_from_f64, format_money};
use crate::domain::value_objects::{price::Price, quantity::Quantity, symbol::Symbol};

/// Comparable view of a portfolio: cash plus every non-zero position.
///
/// A symbol whose quantity went back to zero is absent, so it compares equal
/// to a symbol that was never traded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioState {
    pub cash: BigDecimal,
    pub positions: BTreeMap<String, i64>,
}

#[derive(Debug, Clone)]
pub struct Portfolio {
    cash: BigDecimal,
    positions: BTreeMap<Symbol, i64>,
    journal: Vec<JournalEntry>,
}

impl Portfolio {
    /// Create a portfolio holding only cash
    pub fn new(initial_cash: f64) -> Result<Self, ValidationError> {
        Ok(Self::with_cash(cash_from_f64(initial_cash)?))
    }

    pub fn with_cash(cash: BigDecimal) -> Self {
        Self {
            cash,
            positions: BTreeMap::new(),
            journal: Vec::new(),
        }
    }

    pub fn cash(&self) -> &BigDecimal {
        &self.cash
    }

    /// Signed quantity held; symbols never traded hold 0
    pub fn quantity(&self, symbol: &str) -> i64 {
        self.positions.get(symbol).copied().unwrap_or(0)
    }

    /// Non-zero positions in symbol order
    pub fn positions(&self) -> impl Iterator<Item = (&Symbol, i64)> + '_ {
        self.positions
            .iter()
            .filter(|(_, qty)| **qty != 0)
            .map(|(symbol, qty)| (symbol, *qty))
    }

    pub fn state(&self) -> PortfolioState {
        PortfolioState {
            cash: self.cash.clone(),
            positions: self
                .positions()
                .map(|(symbol, qty)| (symbol.to_string(), qty))
                .collect(),
        }
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn buy(&mut self, symbol: &Symbol, quantity: Quantity, price: &Price) {
        self.adjust(symbol, quantity.signed(), -price.notional(quantity));
        self.record(JournalPhase::Executed, TradeSide::Buy, symbol, quantity, price);
    }

    pub fn sell(&mut self, symbol: &Symbol, quantity: Quantity, price: &Price) {
        self.adjust(symbol, -quantity.signed(), price.notional(quantity));
        self.record(JournalPhase::Executed, TradeSide::Sell, symbol, quantity, price);
    }

    /// Undo a buy: same arithmetic as a sell, journaled as "BUY reversed"
    pub fn reverse_buy(&mut self, symbol: &Symbol, quantity: Quantity, price: &Price) {
        self.adjust(symbol, -quantity.signed(), price.notional(quantity));
        self.record(JournalPhase::Reversed, TradeSide::Buy, symbol, quantity, price);
    }

    /// Undo a sell: same arithmetic as a buy, journaled as "SELL reversed"
    pub fn reverse_sell(&mut self, symbol: &Symbol, quantity: Quantity, price: &Price) {
        self.adjust(symbol, quantity.signed(), -price.notional(quantity));
        self.record(JournalPhase::Reversed, TradeSide::Sell, symbol, quantity, price);
    }

    fn adjust(&mut self, symbol: &Symbol, qty_delta: i64, cash_delta: BigDecimal) {
        *self.positions.entry(symbol.clone()).or_insert(0) += qty_delta;
        self.cash = &self.cash + cash_delta;
    }

    fn record(
        &mut self,
        phase: JournalPhase,
        side: TradeSide,
        symbol: &Symbol,
        quantity: Quantity,
        price: &Price,
    ) {
        let entry = JournalEntry {
            phase,
            side,
            symbol: symbol.clone(),
            quantity,
            price: price.clone(),
            cash_after: self.cash.clone(),
            recorded_at: Utc::now(),
        };
        debug!("{}", entry);
        self.journal.push(entry);
    }
}

impl fmt::Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Portfolio:")?;
        write!(f, "  Cash: ${}", format_money(&self.cash))?;
        for (symbol, qty) in self.positions() {
            write!(f, "\n  {}: {} shares", symbol, qty)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aapl() -> Symbol {
        Symbol::new("AAPL").unwrap()
    }

    #[test]
    fn test_new_portfolio_is_cash_only() {
        let portfolio = Portfolio::new(1_000_000.0).unwrap();
        assert_eq!(portfolio.cash(), &BigDecimal::from(1_000_000));
        assert_eq!(portfolio.positions().count(), 0);
        assert!(portfolio.journal().is_empty());
    }

    #[test]
    fn test_new_portfolio_rejects_negative_cash() {
        assert!(Portfolio::new(-5.0).is_err());
    }

    #[test]
    fn test_unset_symbol_has_zero_quantity() {
        let portfolio = Portfolio::new(10.0).unwrap();
        assert_eq!(portfolio.quantity("GOOGL"), 0);
    }

    #[test]
    fn test_reverse_buy_restores_state_and_journals_as_buy() {
        let mut portfolio = Portfolio::new(1_000_000.0).unwrap();
        let before = portfolio.state();
        let qty = Quantity::new(100).unwrap();
        let price = Price::new(185.5).unwrap();

        portfolio.buy(&aapl(), qty, &price);
        portfolio.reverse_buy(&aapl(), qty, &price);

        assert_eq!(portfolio.state(), before);
        assert_eq!(portfolio.journal().len(), 2);
        let undo = &portfolio.journal()[1];
        assert_eq!(undo.phase, JournalPhase::Reversed);
        assert_eq!(undo.side, TradeSide::Buy);
    }

    #[test]
    fn test_reverse_sell_restores_state() {
        let mut portfolio = Portfolio::new(500.0).unwrap();
        let before = portfolio.state();
        let qty = Quantity::new(7).unwrap();
        let price = Price::new(0.3).unwrap();

        portfolio.sell(&aapl(), qty, &price);
        assert_eq!(portfolio.quantity("AAPL"), -7);
        portfolio.reverse_sell(&aapl(), qty, &price);

        assert_eq!(portfolio.state(), before);
    }

    #[test]
    fn test_zero_position_hidden_from_state() {
        let mut portfolio = Portfolio::new(1_000.0).unwrap();
        let qty = Quantity::new(1).unwrap();
        let price = Price::new(10.0).unwrap();
        portfolio.buy(&aapl(), qty, &price);
        portfolio.sell(&aapl(), qty, &price);

        assert_eq!(portfolio.quantity("AAPL"), 0);
        assert!(portfolio.state().positions.is_empty());
    }

    #[test]
    fn test_display_lists_non_zero_positions() {
        let mut portfolio = Portfolio::new(1_000_000.0).unwrap();
        portfolio.buy(
            &aapl(),
            Quantity::new(100).unwrap(),
            &Price::new(185.5).unwrap(),
        );
        assert_eq!(
            portfolio.to_string(),
            "Portfolio:\n  Cash: $981450.00\n  AAPL: 100 shares"
        );
    }
}
