//! CLI module - argument parsing, interactive prompts and the main menu

pub mod args;
pub mod commands;
pub mod menu;
pub mod prompts;

pub use args::*;
pub use commands::*;
pub use menu::*;
pub use prompts::*;
