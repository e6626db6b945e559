pub mod command;
pub mod fleet;
