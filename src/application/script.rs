//! Line-oriented trade script parser
//!
//! ```text
//! buy AAPL 100 185.50   # comments run to end of line
//! sell MSFT 75 420
//! undo
//! redo
//! history | show | journal | snapshot | rollback
//! ```
//!
//! Every line is validated here, so invalid input never reaches
//! `CommandHistory::execute`.

use std::str::FromStr;

use crate::domain::entities::trade_action::{TradeAction, TradeSide};
use crate::domain::errors::ScriptError;
use crate::domain::value_objects::{price::Price, quantity::Quantity, symbol::Symbol};

/// Script reproducing the classic demo session
pub const DEMO_SCRIPT: &str = "\
# Executing trades
buy AAPL 100 185.50
buy GOOGL 50 140.25
sell MSFT 75 420.00
show
history

# Undo the MSFT sell, then the GOOGL buy
undo
show
undo
show

redo
show
history

# Snapshot, keep trading, then roll back
snapshot
sell AAPL 50 190.00
history
rollback
history
redo
";

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Trade(TradeAction),
    Undo,
    Redo,
    History,
    Show,
    Journal,
    Snapshot,
    Rollback,
}

/// Parse one line. Blank and comment-only lines yield `Ok(None)`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let content = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    let mut words = content.split_whitespace();
    let keyword = match words.next() {
        Some(word) => word.to_ascii_lowercase(),
        None => return Ok(None),
    };
    let args: Vec<&str> = words.collect();

    let command = match keyword.as_str() {
        "buy" => ScriptCommand::Trade(parse_trade(line_no, TradeSide::Buy, &keyword, &args)?),
        "sell" => ScriptCommand::Trade(parse_trade(line_no, TradeSide::Sell, &keyword, &args)?),
        "undo" => no_args(line_no, &keyword, &args, ScriptCommand::Undo)?,
        "redo" => no_args(line_no, &keyword, &args, ScriptCommand::Redo)?,
        "history" => no_args(line_no, &keyword, &args, ScriptCommand::History)?,
        "show" => no_args(line_no, &keyword, &args, ScriptCommand::Show)?,
        "journal" => no_args(line_no, &keyword, &args, ScriptCommand::Journal)?,
        "snapshot" => no_args(line_no, &keyword, &args, ScriptCommand::Snapshot)?,
        "rollback" => no_args(line_no, &keyword, &args, ScriptCommand::Rollback)?,
        _ => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: keyword.clone(),
            })
        }
    };
    Ok(Some(command))
}

/// Parse a whole script, stopping at the first invalid line.
/// Returned commands carry their 1-based line numbers.
pub fn parse_script(text: &str) -> Result<Vec<(usize, ScriptCommand)>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(command) = parse_line(idx + 1, line)? {
            commands.push((idx + 1, command));
        }
    }
    Ok(commands)
}

fn no_args(
    line: usize,
    keyword: &str,
    args: &[&str],
    command: ScriptCommand,
) -> Result<ScriptCommand, ScriptError> {
    if !args.is_empty() {
        return Err(ScriptError::WrongArity {
            line,
            command: keyword.to_string(),
            expected: 0,
            found: args.len(),
        });
    }
    Ok(command)
}

fn parse_trade(
    line: usize,
    side: TradeSide,
    keyword: &str,
    args: &[&str],
) -> Result<TradeAction, ScriptError> {
    let [symbol, quantity, price] = args else {
        return Err(ScriptError::WrongArity {
            line,
            command: keyword.to_string(),
            expected: 3,
            found: args.len(),
        });
    };

    let symbol = Symbol::new(symbol).map_err(|source| ScriptError::Invalid { line, source })?;
    let quantity = quantity
        .parse::<u32>()
        .map_err(|_| ScriptError::InvalidNumber {
            line,
            field: "quantity",
            value: quantity.to_string(),
        })
        .and_then(|qty| Quantity::new(qty).map_err(|source| ScriptError::Invalid { line, source }))?;
    let price = Price::from_str(price).map_err(|source| ScriptError::Invalid { line, source })?;

    Ok(TradeAction::new(side, symbol, quantity, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ValidationError;

    #[test]
    fn test_parse_buy_line() {
        let command = parse_line(1, "buy aapl 100 185.50").unwrap();
        assert_eq!(
            command,
            Some(ScriptCommand::Trade(
                TradeAction::buy("AAPL", 100, 185.5).unwrap()
            ))
        );
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(parse_line(1, "UNDO").unwrap(), Some(ScriptCommand::Undo));
        assert_eq!(parse_line(1, "  Redo  ").unwrap(), Some(ScriptCommand::Redo));
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(2, "   # just a note").unwrap(), None);
        assert_eq!(
            parse_line(3, "show # trailing").unwrap(),
            Some(ScriptCommand::Show)
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_line(4, "short AAPL 1 1").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 4,
                command: "short".to_string()
            }
        );
        assert_eq!(err.to_string(), "line 4: unknown command 'short'");
    }

    #[test]
    fn test_trade_arity_checked() {
        let err = parse_line(2, "buy AAPL 100").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::WrongArity {
                expected: 3,
                found: 2,
                ..
            }
        ));
        assert!(parse_line(2, "undo now").is_err());
    }

    #[test]
    fn test_bad_quantity_rejected_before_execute() {
        let err = parse_line(5, "buy AAPL -3 10").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::InvalidNumber {
                field: "quantity",
                ..
            }
        ));

        let err = parse_line(5, "buy AAPL 0 10").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::Invalid {
                source: ValidationError::InvalidQuantity(_),
                ..
            }
        ));
    }

    #[test]
    fn test_bad_price_rejected() {
        let err = parse_line(6, "sell MSFT 10 -420").unwrap_err();
        assert_eq!(err.line(), 6);
        assert!(matches!(
            err,
            ScriptError::Invalid {
                source: ValidationError::InvalidPrice(_),
                ..
            }
        ));
    }

    #[test]
    fn test_price_with_huge_exponent_rejected() {
        // Would otherwise expand to millions of digits on the first trade
        let err = parse_script("buy AAPL 10 185.50\nbuy AAPL 1 1e20000000\n").unwrap_err();
        assert_eq!(err.line(), 2);
        assert!(matches!(
            err,
            ScriptError::Invalid {
                source: ValidationError::InvalidPrice(_),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_script_reports_line_numbers() {
        let commands = parse_script("buy A 1 1\n\n# note\nundo\n").unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].0, 1);
        assert_eq!(commands[1], (4, ScriptCommand::Undo));

        let err = parse_script("undo\nbogus\n").unwrap_err();
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_demo_script_parses() {
        let commands = parse_script(DEMO_SCRIPT).unwrap();
        assert!(commands.len() > 10);
    }
}
