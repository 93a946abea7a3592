use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Longest accepted ticker, in bytes
pub const MAX_SYMBOL_LEN: usize = 15;

/// Instrument ticker, normalised to upper case
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::InvalidSymbol(
                "symbol must not be empty".to_string(),
            ));
        }
        if value.len() > MAX_SYMBOL_LEN {
            return Err(ValidationError::InvalidSymbol(format!(
                "'{}' is longer than {} characters",
                value, MAX_SYMBOL_LEN
            )));
        }
        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '/')))
        {
            return Err(ValidationError::InvalidSymbol(format!(
                "'{}' contains unsupported character '{}'",
                value, c
            )));
        }
        Ok(Symbol(value.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_normalised_to_upper_case() {
        let symbol = Symbol::new(" aapl ").unwrap();
        assert_eq!(symbol.as_str(), "AAPL");
    }

    #[test]
    fn test_symbol_allows_exchange_separators() {
        assert!(Symbol::new("BRK.B").is_ok());
        assert!(Symbol::new("BTC-USD").is_ok());
        assert!(Symbol::new("ETH/USD").is_ok());
    }

    #[test]
    fn test_symbol_empty_rejected() {
        assert!(matches!(
            Symbol::new("   "),
            Err(ValidationError::InvalidSymbol(_))
        ));
    }

    #[test]
    fn test_symbol_too_long_rejected() {
        assert!(Symbol::new("ABCDEFGHIJKLMNO").is_ok());
        assert!(Symbol::new("ABCDEFGHIJKLMNOP").is_err());
    }

    #[test]
    fn test_symbol_bad_character_rejected() {
        let err = Symbol::new("AA PL").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid symbol: 'AA PL' contains unsupported character ' '"
        );
    }
}
