use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::money::{check_magnitude, format_money};
use crate::domain::value_objects::quantity::Quantity;

/// Per-unit trade price, strictly positive and stored as an exact decimal
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "BigDecimal", into = "BigDecimal")]
pub struct Price(BigDecimal);

impl Price {
    /// Build a price from a float using its shortest decimal representation,
    /// so `185.5` becomes exactly `185.5` rather than the nearest binary value.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::MustBeFinite);
        }
        let decimal = BigDecimal::from_str(&value.to_string())
            .map_err(|e| ValidationError::InvalidPrice(e.to_string()))?;
        Price::from_decimal(decimal)
    }

    pub fn from_decimal(value: BigDecimal) -> Result<Self, ValidationError> {
        check_magnitude(&value).map_err(ValidationError::InvalidPrice)?;
        if value <= BigDecimal::from(0) {
            return Err(ValidationError::InvalidPrice(format!(
                "{} must be greater than zero",
                value
            )));
        }
        Ok(Price(value))
    }

    pub fn value(&self) -> &BigDecimal {
        &self.0
    }

    /// Cash value of `quantity` units at this price
    pub fn notional(&self, quantity: Quantity) -> BigDecimal {
        &self.0 * BigDecimal::from(quantity.value())
    }
}

impl FromStr for Price {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = BigDecimal::from_str(s.trim())
            .map_err(|_| ValidationError::InvalidPrice(s.to_string()))?;
        Price::from_decimal(decimal)
    }
}

impl TryFrom<BigDecimal> for Price {
    type Error = ValidationError;

    fn try_from(value: BigDecimal) -> Result<Self, Self::Error> {
        Price::from_decimal(value)
    }
}

impl From<Price> for BigDecimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_money(&self.0))
    }
}
