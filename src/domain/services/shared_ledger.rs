//! SharedLedger - async handle for concurrent callers
//!
//! Every operation holds the lock for its full duration, so a command is
//! never popped from one stack without landing on the other, and the
//! portfolio never moves without the history moving with it.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::entities::portfolio::PortfolioState;
use crate::domain::entities::trade_action::TradeAction;
use crate::domain::services::ledger::Ledger;

#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub async fn execute(&self, action: TradeAction) {
        self.inner.lock().await.execute(action);
    }

    pub async fn undo(&self) -> bool {
        self.inner.lock().await.undo()
    }

    pub async fn redo(&self) -> bool {
        self.inner.lock().await.redo()
    }

    pub async fn list(&self) -> Vec<String> {
        self.inner.lock().await.list()
    }

    pub async fn state(&self) -> PortfolioState {
        self.inner.lock().await.portfolio().state()
    }

    pub async fn snapshot(&self) -> Ledger {
        self.inner.lock().await.snapshot()
    }
}
