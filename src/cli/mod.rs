//! Command-line interface: argument parsing and the `scan` / `init` commands

pub mod args;
pub mod commands;

pub use args::Args;
pub use commands::{exit_code, Command};
