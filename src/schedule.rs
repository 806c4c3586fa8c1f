use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use rand::Rng;

use crate::config::BackfillConfig;
use crate::error::BackfillError;

/// One calendar date per step, `start` through `end` inclusive. Empty when
/// `start > end`. Restartable: a pure function of its inputs.
pub fn days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |day| day.checked_add_days(Days::new(1)))
        .take_while(move |day| *day <= end)
}

pub fn is_weekday(day: NaiveDate) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Wall-clock time of one scheduled commit. Seconds are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitTiming {
    pub hour: u32,
    pub minute: u32,
}

/// One scheduled commit attempt: a day paired with a timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub day: NaiveDate,
    pub timing: CommitTiming,
}

impl Slot {
    pub fn naive_timestamp(&self) -> NaiveDateTime {
        self.day
            .and_hms_opt(self.timing.hour, self.timing.minute, 0)
            .expect("hour and minute were validated against their ranges")
    }
}

/// Draw this day's slots: a random commit count, then an independently
/// sampled hour and minute per commit.
pub fn slots_for_day(
    rng: &mut impl Rng,
    day: NaiveDate,
    cfg: &BackfillConfig,
) -> Vec<Slot> {
    let count = rng.gen_range(cfg.min_commits_per_day..=cfg.max_commits_per_day);

    (0..count)
        .map(|_| Slot {
            day,
            timing: CommitTiming {
                hour: rng.gen_range(cfg.commit_hours.low..=cfg.commit_hours.high),
                minute: rng.gen_range(cfg.commit_minutes.low..=cfg.commit_minutes.high),
            },
        })
        .collect()
}

/// Generate the full schedule in chronological order: every weekday in the
/// configured range, weekends never. Used by preview and tests; the runner
/// interleaves generation with realization instead.
pub fn generate(rng: &mut impl Rng, cfg: &BackfillConfig) -> Result<Vec<Slot>, BackfillError> {
    cfg.validate()?;

    let mut slots = Vec::new();
    for day in days(cfg.start_date, cfg.end_date) {
        if !is_weekday(day) {
            continue;
        }
        slots.extend(slots_for_day(rng, day, cfg));
    }

    Ok(slots)
}
