use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Invalid cash amount: {0}")]
    InvalidCash(String),

    #[error("Value must be finite")]
    MustBeFinite,
}

/// Failures while saving or restoring a ledger
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("History file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("History file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unsupported history format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("History file contains an invalid value: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by the line-oriented script runner
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected} argument(s), got {found}")]
    WrongArity {
        line: usize,
        command: String,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: '{value}' is not a valid {field}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: ValidationError,
    },
}

impl ScriptError {
    /// 1-based line number the error was raised on
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownCommand { line, .. }
            | ScriptError::WrongArity { line, .. }
            | ScriptError::InvalidNumber { line, .. }
            | ScriptError::Invalid { line, .. } => *line,
        }
    }
}
