//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with the command summary and remaining work
//! - `Err` if the command fails (e.g., catalog not found, parse errors, provider errors)

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init, sync::sync},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Sync(cmd)) => sync(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
