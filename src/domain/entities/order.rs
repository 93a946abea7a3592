//! Order commands - trade kinds defined outside the closed `TradeAction` set
//!
//! They reach `CommandHistory` through `ErasedCommand`, so adding one never
//! touches the history or the action enum.

use crate::domain::entities::portfolio::Portfolio;
use crate::domain::errors::ValidationError;
use crate::domain::services::command::Command;
use crate::domain::value_objects::{price::Price, quantity::Quantity, symbol::Symbol};

/// Buy filled at the quoted market price
#[derive(Debug, Clone, PartialEq)]
pub struct MarketBuy {
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub price: Price,
}

impl MarketBuy {
    pub fn new(symbol: &str, quantity: u32, price: f64) -> Result<Self, ValidationError> {
        Ok(MarketBuy {
            symbol: Symbol::new(symbol)?,
            quantity: Quantity::new(quantity)?,
            price: Price::new(price)?,
        })
    }
}

impl Command for MarketBuy {
    fn apply(&self, portfolio: &mut Portfolio) {
        portfolio.buy(&self.symbol, self.quantity, &self.price);
    }

    fn invert(&self, portfolio: &mut Portfolio) {
        portfolio.reverse_buy(&self.symbol, self.quantity, &self.price);
    }

    fn describe(&self) -> String {
        format!(
            "MARKET BUY {} {} @ ${}",
            self.quantity, self.symbol, self.price
        )
    }
}

/// Sell filled at its limit price
#[derive(Debug, Clone, PartialEq)]
pub struct LimitSell {
    pub symbol: Symbol,
    pub quantity: Quantity,
    pub limit_price: Price,
}

impl LimitSell {
    pub fn new(symbol: &str, quantity: u32, limit_price: f64) -> Result<Self, ValidationError> {
        Ok(LimitSell {
            symbol: Symbol::new(symbol)?,
            quantity: Quantity::new(quantity)?,
            limit_price: Price::new(limit_price)?,
        })
    }
}

impl Command for LimitSell {
    fn apply(&self, portfolio: &mut Portfolio) {
        portfolio.sell(&self.symbol, self.quantity, &self.limit_price);
    }

    fn invert(&self, portfolio: &mut Portfolio) {
        portfolio.reverse_sell(&self.symbol, self.quantity, &self.limit_price);
    }

    fn describe(&self) -> String {
        format!(
            "LIMIT SELL {} {} @ ${}",
            self.quantity, self.symbol, self.limit_price
        )
    }
}
