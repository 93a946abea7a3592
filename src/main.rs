use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tradebook::application::runner::ScriptRunner;
use tradebook::application::script::{parse_script, ScriptCommand, DEMO_SCRIPT};
use tradebook::config::LedgerConfig;
use tradebook::domain::entities::order::{LimitSell, MarketBuy};
use tradebook::domain::entities::portfolio::Portfolio;
use tradebook::domain::services::command::ErasedCommand;
use tradebook::domain::services::command_history::CommandHistory;
use tradebook::domain::services::ledger::Ledger;
use tradebook::persistence;

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the ledger output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tradebook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = LedgerConfig::from_env();
    info!("Configuration loaded: {:?}", config);

    let ledger = match &config.history_file {
        Some(path) if path.exists() => {
            info!("Restoring ledger from {}", path.display());
            persistence::load(path)?
        }
        _ => Ledger::new(config.initial_cash)?,
    };

    let script_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.script_file.clone());
    let script = match &script_path {
        Some(path) => {
            info!("Running script {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            info!("No script given, running the built-in demo");
            DEMO_SCRIPT.to_string()
        }
    };

    let commands = match parse_script(&script) {
        Ok(commands) => commands,
        Err(e) => {
            error!("Script rejected: {}", e);
            return Err(e.into());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== Trade ledger ===")?;
    let mut runner = ScriptRunner::new(ledger);
    runner.run(&commands, &mut out)?;

    if config.print_journal {
        writeln!(out)?;
        runner.apply(&ScriptCommand::Journal, &mut out)?;
    }

    writeln!(out)?;
    run_order_desk(&mut out)?;

    let ledger = runner.into_ledger();
    if let Some(path) = &config.history_file {
        persistence::save(&ledger, path)?;
    }

    Ok(())
}

/// Orders defined outside `TradeAction`, driven through the same history
fn run_order_desk<W: Write>(out: &mut W) -> Result<(), Box<dyn Error>> {
    writeln!(out, "=== Order desk ===")?;

    let mut portfolio = Portfolio::new(500_000.0)?;
    let mut history: CommandHistory<ErasedCommand> = CommandHistory::new();

    history.execute(
        ErasedCommand::new(MarketBuy::new("TSLA", 200, 175.00)?),
        &mut portfolio,
    );
    history.execute(
        ErasedCommand::new(LimitSell::new("NVDA", 30, 890.50)?),
        &mut portfolio,
    );
    let copy = history.snapshot();

    for line in portfolio.to_string().lines() {
        writeln!(out, "{}", line)?;
    }

    while history.undo(&mut portfolio) {}
    writeln!(out, "After undoing all orders:")?;
    for line in portfolio.to_string().lines() {
        writeln!(out, "{}", line)?;
    }

    writeln!(out, "Snapshot still holds {} orders:", copy.len())?;
    for entry in copy.list() {
        writeln!(out, "  {}", entry)?;
    }
    Ok(())
}
