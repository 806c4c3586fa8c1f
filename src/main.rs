use std::path::PathBuf;

use anyhow::Result;
use chrono::{FixedOffset, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use dialoguer::Confirm;
use rand::rngs::StdRng;
use rand::SeedableRng;

use git_backfill::config::{BackfillConfig, InclusiveRange};
use git_backfill::error::BackfillError;
use git_backfill::git::GitCli;
use git_backfill::{runner, schedule};

#[derive(Parser)]
#[command(name = "git-backfill")]
#[command(about = "Backfill a git repository with randomized backdated commits")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the schedule and realize it as commits
    #[command(alias = "r")]
    Run {
        #[command(flatten)]
        options: ScheduleArgs,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Print the schedule without touching files or invoking git
    #[command(alias = "p")]
    Preview {
        #[command(flatten)]
        options: ScheduleArgs,
    },
}

#[derive(Args)]
struct ScheduleArgs {
    /// First day of the fabricated history (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,

    /// Last day, inclusive (defaults to today)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Fewest commits per scheduled day
    #[arg(long, default_value_t = 1)]
    min_commits: u32,

    /// Most commits per scheduled day
    #[arg(long, default_value_t = 7)]
    max_commits: u32,

    /// Inclusive hour window for commit timestamps (LOW-HIGH)
    #[arg(long, default_value = "9-19")]
    hours: InclusiveRange,

    /// Inclusive minute window for commit timestamps (LOW-HIGH)
    #[arg(long, default_value = "0-59")]
    minutes: InclusiveRange,

    /// Commit author name
    #[arg(long)]
    author_name: String,

    /// Commit author email
    #[arg(long)]
    author_email: String,

    /// Directory to pick files from, relative to the repository (repeatable)
    #[arg(long = "dir", required = true)]
    dirs: Vec<PathBuf>,

    /// Repository to commit into
    #[arg(short = 'C', long, default_value = ".")]
    repo: PathBuf,

    /// Fixed UTC offset for timestamps, e.g. +05:30 (defaults to local)
    #[arg(long)]
    offset: Option<FixedOffset>,

    /// Seed for the random source, for reproducible schedules
    #[arg(long)]
    seed: Option<u64>,
}

impl ScheduleArgs {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn into_config(self) -> BackfillConfig {
        BackfillConfig {
            start_date: self.start,
            end_date: self.end.unwrap_or_else(|| Local::now().date_naive()),
            min_commits_per_day: self.min_commits,
            max_commits_per_day: self.max_commits,
            commit_hours: self.hours,
            commit_minutes: self.minutes,
            author_name: self.author_name,
            author_email: self.author_email,
            target_dirs: self.dirs,
            repo: self.repo,
            utc_offset: self.offset,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { options, yes } => {
            let mut rng = options.rng();
            let cfg = options.into_config();
            cfg.validate()?;

            let git = GitCli::new(&cfg.repo);
            git.ensure_repo()?;

            if !yes {
                confirm_run(&cfg)?;
            }

            let mut sink = git;
            let summary = runner::run(&cfg, &mut rng, &mut sink)?;

            println!();
            println!("Total commits created: {}", summary.committed);
            if summary.skipped > 0 {
                println!("Slots skipped (no file available): {}", summary.skipped);
            }
            if summary.failed > 0 {
                println!("Slots failed: {}", summary.failed);
            }
        }
        Commands::Preview { options } => {
            let mut rng = options.rng();
            let cfg = options.into_config();
            runner::preview(&cfg, &mut rng)?;
        }
    }

    Ok(())
}

fn confirm_run(cfg: &BackfillConfig) -> Result<()> {
    let weekdays = schedule::days(cfg.start_date, cfg.end_date)
        .filter(|day| schedule::is_weekday(*day))
        .count();

    println!(
        "About to backfill {} weekdays ({} to {}), {}-{} commits per day, into {}",
        weekdays,
        cfg.start_date,
        cfg.end_date,
        cfg.min_commits_per_day,
        cfg.max_commits_per_day,
        cfg.repo.display(),
    );

    let proceed = Confirm::new()
        .with_prompt("Rewrite history with fabricated commits?")
        .default(false)
        .interact()?;

    if !proceed {
        return Err(BackfillError::Cancelled.into());
    }

    Ok(())
}
