use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

use crate::error::BackfillError;

/// Inclusive integer range written as `LOW-HIGH` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InclusiveRange {
    pub low: u32,
    pub high: u32,
}

impl FromStr for InclusiveRange {
    type Err = BackfillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax_error = || BackfillError::InvalidRangeSyntax {
            input: s.to_string(),
        };

        let (low, high) = s.split_once('-').ok_or_else(syntax_error)?;
        let low = low.trim().parse().map_err(|_| syntax_error())?;
        let high = high.trim().parse().map_err(|_| syntax_error())?;

        Ok(InclusiveRange { low, high })
    }
}

/// Immutable run configuration, assembled once from the CLI and passed by
/// reference everywhere else.
#[derive(Debug, Clone)]
pub struct BackfillConfig {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub min_commits_per_day: u32,
    pub max_commits_per_day: u32,
    pub commit_hours: InclusiveRange,
    pub commit_minutes: InclusiveRange,
    pub author_name: String,
    pub author_email: String,
    pub target_dirs: Vec<PathBuf>,
    pub repo: PathBuf,
    pub utc_offset: Option<FixedOffset>,
}

impl BackfillConfig {
    /// Fail fast on bounds that would make scheduling meaningless.
    /// `start_date > end_date` is not an error; it yields an empty schedule.
    pub fn validate(&self) -> Result<(), BackfillError> {
        if self.min_commits_per_day > self.max_commits_per_day {
            return Err(BackfillError::InvalidCommitRange {
                min: self.min_commits_per_day,
                max: self.max_commits_per_day,
            });
        }

        let hours = self.commit_hours;
        if hours.low > hours.high || hours.high > 23 {
            return Err(BackfillError::InvalidHourRange {
                low: hours.low,
                high: hours.high,
            });
        }

        let minutes = self.commit_minutes;
        if minutes.low > minutes.high || minutes.high > 59 {
            return Err(BackfillError::InvalidMinuteRange {
                low: minutes.low,
                high: minutes.high,
            });
        }

        if self.target_dirs.is_empty() {
            return Err(BackfillError::NoTargetDirs);
        }

        Ok(())
    }

    /// Resolve a naive commit timestamp against the configured fixed offset,
    /// or the machine's local zone when none was given. A local time that
    /// does not exist (DST gap) is reported so the slot can be skipped.
    pub fn resolve_timestamp(
        &self,
        naive: NaiveDateTime,
    ) -> Result<DateTime<FixedOffset>, BackfillError> {
        let resolved = match self.utc_offset {
            Some(offset) => offset.from_local_datetime(&naive),
            None => Local
                .from_local_datetime(&naive)
                .map(|dt| dt.fixed_offset()),
        };

        match resolved {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt),
            LocalResult::None => Err(BackfillError::NonexistentTimestamp(naive)),
        }
    }
}
