use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::portfolio::Portfolio;
use crate::domain::errors::ValidationError;
use crate::domain::services::command::Command;
use crate::domain::value_objects::{price::Price, quantity::Quantity, symbol::Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Padding flags such as `{:<4}` are honoured for journal alignment.
        match self {
            TradeSide::Buy => f.pad("BUY"),
            TradeSide::Sell => f.pad("SELL"),
        }
    }
}

/// One committed trade. Immutable once built: undo is derived from the
/// variant, never by editing the action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "side", rename_all = "lowercase")]
pub enum TradeAction {
    Buy {
        symbol: Symbol,
        quantity: Quantity,
        price: Price,
    },
    Sell {
        symbol: Symbol,
        quantity: Quantity,
        price: Price,
    },
}

impl TradeAction {
    pub fn buy(symbol: &str, quantity: u32, price: f64) -> Result<Self, ValidationError> {
        Ok(TradeAction::Buy {
            symbol: Symbol::new(symbol)?,
            quantity: Quantity::new(quantity)?,
            price: Price::new(price)?,
        })
    }

    pub fn sell(symbol: &str, quantity: u32, price: f64) -> Result<Self, ValidationError> {
        Ok(TradeAction::Sell {
            symbol: Symbol::new(symbol)?,
            quantity: Quantity::new(quantity)?,
            price: Price::new(price)?,
        })
    }

    /// Build from already-validated parts
    pub fn new(side: TradeSide, symbol: Symbol, quantity: Quantity, price: Price) -> Self {
        match side {
            TradeSide::Buy => TradeAction::Buy {
                symbol,
                quantity,
                price,
            },
            TradeSide::Sell => TradeAction::Sell {
                symbol,
                quantity,
                price,
            },
        }
    }

    pub fn side(&self) -> TradeSide {
        match self {
            TradeAction::Buy { .. } => TradeSide::Buy,
            TradeAction::Sell { .. } => TradeSide::Sell,
        }
    }

    pub fn symbol(&self) -> &Symbol {
        match self {
            TradeAction::Buy { symbol, .. } | TradeAction::Sell { symbol, .. } => symbol,
        }
    }

    pub fn quantity(&self) -> Quantity {
        match self {
            TradeAction::Buy { quantity, .. } | TradeAction::Sell { quantity, .. } => *quantity,
        }
    }

    pub fn price(&self) -> &Price {
        match self {
            TradeAction::Buy { price, .. } | TradeAction::Sell { price, .. } => price,
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ ${}",
            self.side(),
            self.quantity(),
            self.symbol(),
            self.price()
        )
    }
}

impl Command for TradeAction {
    fn apply(&self, portfolio: &mut Portfolio) {
        match self {
            TradeAction::Buy {
                symbol,
                quantity,
                price,
            } => portfolio.buy(symbol, *quantity, price),
            TradeAction::Sell {
                symbol,
                quantity,
                price,
            } => portfolio.sell(symbol, *quantity, price),
        }
    }

    fn invert(&self, portfolio: &mut Portfolio) {
        match self {
            TradeAction::Buy {
                symbol,
                quantity,
                price,
            } => portfolio.reverse_buy(symbol, *quantity, price),
            TradeAction::Sell {
                symbol,
                quantity,
                price,
            } => portfolio.reverse_sell(symbol, *quantity, price),
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
