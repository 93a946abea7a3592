//! Tradebook Library
//!
//! Trade command history with undo, redo and snapshots over a portfolio
//! receiver, plus the script runner and JSON persistence used by the
//! `tradebook` binary.

pub mod application;
pub mod config;
pub mod domain;
pub mod persistence;
