pub mod runner;
pub mod script;
