//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report which strings need translation or removal
//! - `sync`: Translate missing strings and rewrite the catalog
//! - `init`: Initialize xcsync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Sync(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// String catalog path (overrides config file)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Target languages, comma separated (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write a markdown summary of the applied changes to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report strings that need translation and stale strings to remove
    Check(CheckCommand),
    /// Translate missing strings, drop stale ones and rewrite the catalog
    Sync(SyncCommand),
    /// Initialize a new .xcsyncrc.json configuration file
    Init,
}
