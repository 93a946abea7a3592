use std::path::PathBuf;

/// Runtime configuration for the tradebook binary
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    pub initial_cash: f64,
    pub history_file: Option<PathBuf>, // Load on start if present, save on exit
    pub script_file: Option<PathBuf>,  // Falls back to the built-in demo script
    pub print_journal: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            initial_cash: 1_000_000.0,
            history_file: None,
            script_file: None,
            print_journal: false,
        }
    }
}

impl LedgerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> LedgerConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> LedgerConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LedgerConfig::default();

        if let Some(cash) = lookup("TRADEBOOK_INITIAL_CASH") {
            match cash.trim().parse::<f64>() {
                Ok(value) if value.is_finite() && value >= 0.0 => {
                    config.initial_cash = value;
                }
                Ok(value) => {
                    tracing::warn!(
                        "Invalid TRADEBOOK_INITIAL_CASH value: {} (must be finite and non-negative), using default: {}",
                        value, config.initial_cash
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse TRADEBOOK_INITIAL_CASH '{}': {}, using default: {}",
                        cash,
                        e,
                        config.initial_cash
                    );
                }
            }
        }

        if let Some(path) = lookup("TRADEBOOK_HISTORY_FILE") {
            if !path.trim().is_empty() {
                config.history_file = Some(PathBuf::from(path.trim()));
            }
        }

        if let Some(path) = lookup("TRADEBOOK_SCRIPT_FILE") {
            if !path.trim().is_empty() {
                config.script_file = Some(PathBuf::from(path.trim()));
            }
        }

        if let Some(flag) = lookup("TRADEBOOK_PRINT_JOURNAL") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.print_journal = true,
                "0" | "false" | "no" | "off" => config.print_journal = false,
                other => {
                    tracing::warn!(
                        "Invalid TRADEBOOK_PRINT_JOURNAL value: '{}', using default: {}",
                        other,
                        config.print_journal
                    );
                }
            }
        }

        config
    }
}
