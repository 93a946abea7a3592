//! Cash amount helpers shared by the portfolio and the display layer

use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::domain::errors::ValidationError;

/// Most decimal places (and most trailing zeros in exponent form) an input
/// amount may carry
pub const MAX_SCALE: i64 = 18;

/// Most digits an input amount may have before the decimal point
pub const MAX_INTEGER_DIGITS: i64 = 18;

/// Reject amounts whose exponent or magnitude would blow up once rescaled.
/// The value itself is never formatted here, it may expand to millions of digits.
pub fn check_magnitude(value: &BigDecimal) -> Result<(), String> {
    let (_, scale) = value.as_bigint_and_exponent();
    if !(-MAX_SCALE..=MAX_SCALE).contains(&scale) {
        return Err(format!(
            "exponent {} is outside -{}..={}",
            -scale, MAX_SCALE, MAX_SCALE
        ));
    }
    let integer_digits = value.digits() as i64 - scale;
    if integer_digits > MAX_INTEGER_DIGITS {
        return Err(format!(
            "{} integer digits exceeds the limit of {}",
            integer_digits, MAX_INTEGER_DIGITS
        ));
    }
    Ok(())
}

/// Validate a cash balance read from outside: bounded and non-negative
pub fn validate_cash(value: BigDecimal) -> Result<BigDecimal, ValidationError> {
    check_magnitude(&value).map_err(ValidationError::InvalidCash)?;
    if value < BigDecimal::from(0) {
        return Err(ValidationError::InvalidCash(format!(
            "{} must not be negative",
            value
        )));
    }
    Ok(value)
}

/// Render an amount with exactly two decimals, e.g. `981450.00`
pub fn format_money(value: &BigDecimal) -> String {
    value.round(2).with_scale(2).to_string()
}

/// Validate a starting cash balance: finite and non-negative
pub fn cash_from_f64(value: f64) -> Result<BigDecimal, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::MustBeFinite);
    }
    let decimal = BigDecimal::from_str(&value.to_string())
        .map_err(|e| ValidationError::InvalidCash(e.to_string()))?;
    validate_cash(decimal)
}
