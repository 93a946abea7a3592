pub mod command;
pub mod command_history;
pub mod ledger;
pub mod shared_ledger;
