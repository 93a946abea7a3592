//! Command capability shared by every trade kind, plus a type-erased wrapper
//! for kinds that live outside the `TradeAction` enum

use std::fmt;

use crate::domain::entities::portfolio::Portfolio;

/// Anything `CommandHistory` can apply, reverse, and describe.
///
/// Commands carry data only; the portfolio is passed in on every call.
pub trait Command: fmt::Debug {
    /// Forward effect on the portfolio
    fn apply(&self, portfolio: &mut Portfolio);

    /// Exact inverse of `apply`, journaled as a reversal of this command
    fn invert(&self, portfolio: &mut Portfolio);

    /// One-line human-readable form, e.g. `BUY 100 AAPL @ $185.50`
    fn describe(&self) -> String;
}

trait DynCommand: Command + Send + Sync {
    fn clone_box(&self) -> Box<dyn DynCommand>;
}

impl<T> DynCommand for T
where
    T: Command + Clone + Send + Sync + 'static,
{
    fn clone_box(&self) -> Box<dyn DynCommand> {
        Box::new(self.clone())
    }
}

/// Owned, cloneable command of any concrete type.
///
/// Cloning deep-copies the wrapped command, so a history of erased commands
/// snapshots exactly like a history of plain values.
pub struct ErasedCommand {
    inner: Box<dyn DynCommand>,
}

impl ErasedCommand {
    pub fn new<T>(command: T) -> Self
    where
        T: Command + Clone + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(command),
        }
    }
}

impl Clone for ErasedCommand {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl fmt::Debug for ErasedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl Command for ErasedCommand {
    fn apply(&self, portfolio: &mut Portfolio) {
        self.inner.apply(portfolio);
    }

    fn invert(&self, portfolio: &mut Portfolio) {
        self.inner.invert(portfolio);
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }
}
