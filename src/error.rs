use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackfillError {
    #[error("Invalid commit count range: min {min} > max {max}")]
    InvalidCommitRange { min: u32, max: u32 },

    #[error("Invalid hour range {low}-{high} (hours are 0-23, low <= high)")]
    InvalidHourRange { low: u32, high: u32 },

    #[error("Invalid minute range {low}-{high} (minutes are 0-59, low <= high)")]
    InvalidMinuteRange { low: u32, high: u32 },

    #[error("Invalid range '{input}', expected LOW-HIGH")]
    InvalidRangeSyntax { input: String },

    #[error("No target directories configured")]
    NoTargetDirs,

    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("No file available under the target directories")]
    NoFileAvailable,

    #[error("Git command failed: {message}")]
    GitCommandFailed { message: String },

    #[error("Timestamp {0} does not exist in the local timezone")]
    NonexistentTimestamp(NaiveDateTime),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cancelled by user")]
    Cancelled,
}
