use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset};

use crate::command_utils::execute_command;
use crate::error::BackfillError;

/// Everything the realization step needs for one backdated commit.
#[derive(Debug, Clone)]
pub struct CommitRequest {
    pub timestamp: DateTime<FixedOffset>,
    pub author_name: String,
    pub author_email: String,
    pub message: String,
    /// Path of the touched file, relative to the repository root.
    pub file: PathBuf,
}

/// Records commits on behalf of the runner. Injected so the scheduling loop
/// can be exercised without invoking any real tool.
pub trait CommitSink {
    fn commit(&mut self, request: &CommitRequest) -> Result<String, BackfillError>;
}

/// Shells out to the `git` CLI in a fixed repository directory.
pub struct GitCli {
    repo: PathBuf,
}

impl GitCli {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self { repo: repo.into() }
    }

    pub fn ensure_repo(&self) -> Result<(), BackfillError> {
        let output = execute_command("git", &["rev-parse", "--git-dir"], &self.repo, &[])?;
        if !output.status.success() {
            return Err(BackfillError::NotInGitRepo);
        }
        Ok(())
    }

    fn head_commit(&self) -> Result<String, BackfillError> {
        let output = execute_command("git", &["rev-parse", "HEAD"], &self.repo, &[])?;
        if !output.status.success() {
            return Err(BackfillError::GitCommandFailed {
                message: "cannot resolve HEAD after commit".to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn stage(&self, file: &Path) -> Result<(), BackfillError> {
        let file = file.to_string_lossy();
        let output = execute_command("git", &["add", "--", file.as_ref()], &self.repo, &[])?;
        if !output.status.success() {
            return Err(BackfillError::GitCommandFailed {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl CommitSink for GitCli {
    fn commit(&mut self, request: &CommitRequest) -> Result<String, BackfillError> {
        self.stage(&request.file)?;

        // Author and committer timestamps are set identically.
        let date = request.timestamp.to_rfc3339();
        let author = format!("{} <{}>", request.author_name, request.author_email);
        let file = request.file.to_string_lossy();

        let output = execute_command(
            "git",
            &[
                "commit",
                "-m",
                &request.message,
                "--author",
                &author,
                "--",
                file.as_ref(),
            ],
            &self.repo,
            &[
                ("GIT_AUTHOR_DATE", date.as_str()),
                ("GIT_COMMITTER_DATE", date.as_str()),
            ],
        )?;

        if !output.status.success() {
            return Err(BackfillError::GitCommandFailed {
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        self.head_commit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn create_test_repo() -> TempDir {
        let temp_dir = TempDir::new().unwrap();

        Command::new("git")
            .args(["init"])
            .current_dir(temp_dir.path())
            .output()
            .expect("Failed to init git repo");

        Command::new("git")
            .args(["config", "user.name", "Test User"])
            .current_dir(temp_dir.path())
            .output()
            .expect("Failed to set git user.name");

        Command::new("git")
            .args(["config", "user.email", "test@example.com"])
            .current_dir(temp_dir.path())
            .output()
            .expect("Failed to set git user.email");

        temp_dir
    }

    fn log_format(repo: &Path, format: &str) -> String {
        let output = Command::new("git")
            .args(["log", "-1", &format!("--pretty={}", format)])
            .current_dir(repo)
            .output()
            .expect("Failed to read git log");
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    #[test]
    fn ensure_repo_fails_outside_git() {
        let temp_dir = TempDir::new().unwrap();
        let git = GitCli::new(temp_dir.path());
        assert!(matches!(
            git.ensure_repo(),
            Err(BackfillError::NotInGitRepo)
        ));
    }

    #[test]
    fn ensure_repo_succeeds_inside_git() {
        let temp_dir = create_test_repo();
        let git = GitCli::new(temp_dir.path());
        assert!(git.ensure_repo().is_ok());
    }

    #[test]
    fn commit_backdates_author_and_committer() {
        let temp_dir = create_test_repo();
        fs::write(temp_dir.path().join("app.ts"), "export {}\n").unwrap();

        let timestamp = FixedOffset::east_opt(5 * 3600 + 30 * 60)
            .unwrap()
            .with_ymd_and_hms(2019, 6, 12, 14, 25, 0)
            .unwrap();

        let mut git = GitCli::new(temp_dir.path());
        let commit_id = git
            .commit(&CommitRequest {
                timestamp,
                author_name: "Backfill Author".to_string(),
                author_email: "backfill@example.com".to_string(),
                message: "chore: update dependencies".to_string(),
                file: PathBuf::from("app.ts"),
            })
            .unwrap();

        assert_eq!(commit_id.len(), 40);
        assert!(commit_id.chars().all(|c| c.is_ascii_hexdigit()));

        assert_eq!(
            log_format(temp_dir.path(), "%aI"),
            "2019-06-12T14:25:00+05:30"
        );
        assert_eq!(
            log_format(temp_dir.path(), "%cI"),
            "2019-06-12T14:25:00+05:30"
        );
        assert_eq!(
            log_format(temp_dir.path(), "%an <%ae>"),
            "Backfill Author <backfill@example.com>"
        );
        assert_eq!(log_format(temp_dir.path(), "%s"), "chore: update dependencies");
    }

    #[test]
    fn commit_with_nothing_to_record_fails_recoverably() {
        let temp_dir = create_test_repo();

        let timestamp = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2019, 6, 12, 14, 25, 0)
            .unwrap();

        let mut git = GitCli::new(temp_dir.path());
        let result = git.commit(&CommitRequest {
            timestamp,
            author_name: "Backfill Author".to_string(),
            author_email: "backfill@example.com".to_string(),
            message: "fix: responsive design issue".to_string(),
            file: PathBuf::from("missing.ts"),
        });

        assert!(matches!(
            result,
            Err(BackfillError::GitCommandFailed { .. })
        ));
    }
}
