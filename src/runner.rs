use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDate};
use rand::Rng;

use crate::config::BackfillConfig;
use crate::error::BackfillError;
use crate::git::{CommitRequest, CommitSink};
use crate::{messages, schedule, workspace};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub committed: u64,
    /// Slots with no file available to touch.
    pub skipped: u64,
    /// Slots where the touch or the commit itself failed.
    pub failed: u64,
}

struct RealizedSlot {
    commit_id: String,
    timestamp: DateTime<FixedOffset>,
    file: PathBuf,
}

/// Realize the schedule as commits, one day at a time, one slot at a time,
/// in generation order. Per-slot errors never interrupt the day iteration;
/// only configuration errors abort before any commit attempt.
pub fn run(
    cfg: &BackfillConfig,
    rng: &mut impl Rng,
    sink: &mut impl CommitSink,
) -> Result<RunSummary, BackfillError> {
    cfg.validate()?;

    let dirs: Vec<PathBuf> = cfg.target_dirs.iter().map(|d| cfg.repo.join(d)).collect();
    let mut summary = RunSummary::default();

    for day in schedule::days(cfg.start_date, cfg.end_date) {
        if !schedule::is_weekday(day) {
            continue;
        }

        for slot in schedule::slots_for_day(rng, day, cfg) {
            match realize_slot(cfg, rng, sink, &dirs, slot) {
                Ok(realized) => {
                    summary.committed += 1;
                    println!(
                        "Commit {} at {}: {} ({})",
                        summary.committed,
                        realized.timestamp.to_rfc3339(),
                        realized.file.display(),
                        short_id(&realized.commit_id),
                    );
                }
                Err(BackfillError::NoFileAvailable) => {
                    summary.skipped += 1;
                    eprintln!("No file available for a slot on {}, skipping", day);
                }
                Err(err) => {
                    summary.failed += 1;
                    eprintln!("Slot on {} failed: {}", day, err);
                }
            }
        }
    }

    Ok(summary)
}

fn realize_slot(
    cfg: &BackfillConfig,
    rng: &mut impl Rng,
    sink: &mut impl CommitSink,
    dirs: &[PathBuf],
    slot: schedule::Slot,
) -> Result<RealizedSlot, BackfillError> {
    let timestamp = cfg.resolve_timestamp(slot.naive_timestamp())?;

    let file = workspace::pick_file(rng, dirs)?;
    workspace::touch_file(&file, &timestamp.to_rfc3339())?;

    let repo_relative = file
        .strip_prefix(&cfg.repo)
        .unwrap_or(file.as_path())
        .to_path_buf();

    let request = CommitRequest {
        timestamp,
        author_name: cfg.author_name.clone(),
        author_email: cfg.author_email.clone(),
        message: messages::pick(rng).to_string(),
        file: repo_relative,
    };

    let commit_id = sink.commit(&request)?;
    Ok(RealizedSlot {
        commit_id,
        timestamp,
        file: request.file,
    })
}

fn short_id(commit_id: &str) -> &str {
    commit_id.get(..8).unwrap_or(commit_id)
}

/// Print the schedule a run would realize, without touching anything.
pub fn preview(cfg: &BackfillConfig, rng: &mut impl Rng) -> Result<(), BackfillError> {
    let slots = schedule::generate(rng, cfg)?;

    let mut current_day: Option<NaiveDate> = None;
    let mut day_count = 0u64;
    for slot in &slots {
        if current_day != Some(slot.day) {
            current_day = Some(slot.day);
            day_count += 1;
            println!("{} ({})", slot.day, slot.day.format("%A"));
        }
        println!("  {}", slot.naive_timestamp().format("%H:%M:%S"));
    }

    println!();
    println!("Planned: {} commits across {} days", slots.len(), day_count);
    Ok(())
}
