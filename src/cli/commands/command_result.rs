use super::super::exit_status::ExitStatus;
use crate::core::ChangeSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Sync(SyncSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub catalog_path: String,
    pub target_languages: Vec<String>,
    /// `"<key> (<language>)"` pairs that need a translation.
    pub pending: Vec<String>,
    pub stale_keys: Vec<String>,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub catalog_path: String,
    pub changes: ChangeSummary,
    /// Pairs the provider did not translate; retried on the next run.
    pub pending: Vec<String>,
    /// True if the catalog file was rewritten.
    pub written: bool,
    pub summary_path: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: String,
}

/// Result of running xcsync commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Work still left in the catalog after the command.
    /// A non-zero count makes the process exit with status 1.
    pub remaining_count: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.remaining_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
