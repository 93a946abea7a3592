//! Script runner - drives a ledger from parsed script commands and renders
//! the results as text

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::application::script::ScriptCommand;
use crate::domain::services::ledger::Ledger;

pub struct ScriptRunner {
    ledger: Ledger,
    snapshot: Option<Ledger>,
}

impl ScriptRunner {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            snapshot: None,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    /// Run every command in order
    pub fn run<W: Write>(
        &mut self,
        commands: &[(usize, ScriptCommand)],
        out: &mut W,
    ) -> io::Result<()> {
        for (line, command) in commands {
            debug!("Script line {}: {:?}", line, command);
            self.apply(command, out)?;
        }
        Ok(())
    }

    pub fn apply<W: Write>(&mut self, command: &ScriptCommand, out: &mut W) -> io::Result<()> {
        match command {
            ScriptCommand::Trade(action) => {
                self.ledger.execute(action.clone());
                writeln!(out, "Executed: {}", action)?;
            }
            ScriptCommand::Undo => {
                if self.ledger.undo() {
                    if let Some(action) = self.ledger.history().undone().last() {
                        writeln!(out, "Undone: {}", action)?;
                    }
                } else {
                    writeln!(out, "Nothing to undo")?;
                }
            }
            ScriptCommand::Redo => {
                if self.ledger.redo() {
                    if let Some(action) = self.ledger.history().executed().last() {
                        writeln!(out, "Redone: {}", action)?;
                    }
                } else {
                    writeln!(out, "Nothing to redo")?;
                }
            }
            ScriptCommand::History => {
                writeln!(out, "Trade History:")?;
                let entries = self.ledger.list();
                if entries.is_empty() {
                    writeln!(out, "  (empty)")?;
                }
                for entry in entries {
                    writeln!(out, "  {}", entry)?;
                }
            }
            ScriptCommand::Show => {
                for line in self.ledger.portfolio().to_string().lines() {
                    writeln!(out, "{}", line)?;
                }
            }
            ScriptCommand::Journal => {
                writeln!(out, "Journal:")?;
                let journal = self.ledger.portfolio().journal();
                if journal.is_empty() {
                    writeln!(out, "  (empty)")?;
                }
                for entry in journal {
                    writeln!(out, "  {}", entry)?;
                }
            }
            ScriptCommand::Snapshot => {
                let snapshot = self.ledger.snapshot();
                writeln!(out, "Snapshot taken ({} trades)", snapshot.history().len())?;
                info!("Snapshot taken at {} trade(s)", snapshot.history().len());
                self.snapshot = Some(snapshot);
            }
            ScriptCommand::Rollback => match self.snapshot.clone() {
                Some(snapshot) => {
                    let trades = snapshot.history().len();
                    self.ledger.restore(snapshot);
                    writeln!(out, "Rolled back to snapshot ({} trades)", trades)?;
                }
                None => {
                    warn!("Rollback requested without a snapshot");
                    writeln!(out, "No snapshot to roll back to")?;
                }
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::script::parse_script;

    fn run(script: &str) -> (ScriptRunner, String) {
        let commands = parse_script(script).unwrap();
        let mut runner = ScriptRunner::new(Ledger::new(1_000_000.0).unwrap());
        let mut out = Vec::new();
        runner.run(&commands, &mut out).unwrap();
        (runner, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_empty_undo_redo_reported_as_noop() {
        let (runner, output) = run("undo\nredo\n");
        assert_eq!(output, "Nothing to undo\nNothing to redo\n");
        assert!(runner.ledger().history().is_empty());
    }

    #[test]
    fn test_trade_undo_redo_output() {
        let (_, output) = run("buy AAPL 100 185.50\nundo\nredo\n");
        assert_eq!(
            output,
            "Executed: BUY 100 AAPL @ $185.50\n\
             Undone: BUY 100 AAPL @ $185.50\n\
             Redone: BUY 100 AAPL @ $185.50\n"
        );
    }

    #[test]
    fn test_history_and_show_output() {
        let (_, output) = run("history\nbuy AAPL 100 185.50\nhistory\nshow\n");
        assert_eq!(
            output,
            "Trade History:\n  (empty)\n\
             Executed: BUY 100 AAPL @ $185.50\n\
             Trade History:\n  1. BUY 100 AAPL @ $185.50\n\
             Portfolio:\n  Cash: $981450.00\n  AAPL: 100 shares\n"
        );
    }

    #[test]
    fn test_journal_records_reversal() {
        let (_, output) = run("buy AAPL 100 185.50\nundo\njournal\n");
        assert!(output.contains("  [EXEC] BUY  100 AAPL @ $185.50  (cash: $981450.00)\n"));
        assert!(output.contains("  [UNDO] BUY  100 AAPL @ $185.50 reversed  (cash: $1000000.00)\n"));
    }

    #[test]
    fn test_rollback_without_snapshot() {
        let (_, output) = run("rollback\n");
        assert_eq!(output, "No snapshot to roll back to\n");
    }

    #[test]
    fn test_snapshot_then_rollback_restores_ledger() {
        let (runner, output) = run("buy AAPL 1 10\nsnapshot\nsell AAPL 1 12\nrollback\n");
        assert!(output.contains("Snapshot taken (1 trades)"));
        assert!(output.contains("Rolled back to snapshot (1 trades)"));
        assert_eq!(runner.ledger().list(), vec!["1. BUY 1 AAPL @ $10.00"]);
        assert_eq!(runner.ledger().portfolio().quantity("AAPL"), 1);
    }
}
