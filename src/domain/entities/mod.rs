pub mod journal;
pub mod order;
pub mod portfolio;
pub mod trade_action;
