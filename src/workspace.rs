use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use rand::Rng;
use walkdir::WalkDir;

use crate::error::BackfillError;

/// All regular files beneath the target directories, `.git` pruned.
/// Unreadable entries are skipped rather than treated as fatal.
pub fn candidate_files(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for dir in dirs {
        let walker = WalkDir::new(dir)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != OsStr::new(".git"));

        for entry in walker.flatten() {
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    }

    files
}

/// Pick one file uniformly at random to mutate for a commit slot.
pub fn pick_file(rng: &mut impl Rng, dirs: &[PathBuf]) -> Result<PathBuf, BackfillError> {
    let mut files = candidate_files(dirs);
    if files.is_empty() {
        return Err(BackfillError::NoFileAvailable);
    }

    let index = rng.gen_range(0..files.len());
    Ok(files.swap_remove(index))
}

/// Append a marker line so the file always has a change to commit.
pub fn touch_file(path: &Path, stamp: &str) -> Result<(), BackfillError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "// update {}", stamp)?;
    Ok(())
}
