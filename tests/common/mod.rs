use std::process::Command as StdCommand;

pub fn setup_test_git_repo(dir: &std::path::Path) {
    StdCommand::new("git")
        .args(["init"])
        .current_dir(dir)
        .output()
        .expect("Failed to init git repo");

    StdCommand::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(dir)
        .output()
        .expect("Failed to set git user.name");

    StdCommand::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(dir)
        .output()
        .expect("Failed to set git user.email");

    std::fs::write(dir.join("README.md"), "# Test Repo").unwrap();
    StdCommand::new("git")
        .args(["add", "README.md"])
        .current_dir(dir)
        .output()
        .expect("Failed to add file");

    StdCommand::new("git")
        .args(["commit", "-m", "Initial commit"])
        .current_dir(dir)
        .output()
        .expect("Failed to commit");
}

/// Seed a source tree so the file picker has something to touch.
pub fn seed_source_files(dir: &std::path::Path) {
    let src = dir.join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(src.join("app.ts"), "export {}\n").unwrap();
    std::fs::write(src.join("util.ts"), "export {}\n").unwrap();
    std::fs::write(src.join("index.js"), "module.exports = {}\n").unwrap();
}

/// Count commits reachable from HEAD.
pub fn commit_count(dir: &std::path::Path) -> u64 {
    let output = StdCommand::new("git")
        .args(["rev-list", "--count", "HEAD"])
        .current_dir(dir)
        .output()
        .expect("Failed to count commits");
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .expect("rev-list output should be a number")
}
