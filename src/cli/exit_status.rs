use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and the catalog is fully translated
/// - `Failure` (1): Command completed but translations are still missing (or stale keys remain, for `check`)
/// - `Error` (2): Command failed (missing catalog, malformed JSON, provider error, config error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
