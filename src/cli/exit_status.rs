use std::process::ExitCode;

/// Exit status for the demo binary.
///
/// - `Success` (0): the command completed and found what it looked for
/// - `Failure` (1): the command completed but the lookup came up empty
/// - `Error` (2): the command failed (unreadable file, parse error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and found what it looked for.
    Success,
    /// Command completed but the lookup came up empty.
    Failure,
    /// Command failed (unreadable file, parse error, etc.).
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
