use std::path::Path;
use std::process::{Command, Output};

use log::debug;

/// Run a command in `dir` with extra environment variables, capturing output.
/// Both outcomes are traced at debug level; failure is reported through the
/// returned `Output`, not as an error.
pub fn execute_command(
    cmd: &str,
    args: &[&str],
    dir: &Path,
    envs: &[(&str, &str)],
) -> std::io::Result<Output> {
    debug!(
        "Executing command: {} {} (in {})",
        cmd,
        args.join(" "),
        dir.display()
    );

    let output = Command::new(cmd)
        .args(args)
        .current_dir(dir)
        .envs(envs.iter().copied())
        .output()?;

    if output.status.success() {
        debug!("Command succeeded: {} {}", cmd, args.join(" "));
    } else {
        debug!(
            "Command failed: {} {} (exit code: {:?})",
            cmd,
            args.join(" "),
            output.status.code()
        );
    }
    if !output.stdout.is_empty() {
        debug!("stdout: {}", String::from_utf8_lossy(&output.stdout).trim());
    }
    if !output.stderr.is_empty() {
        debug!("stderr: {}", String::from_utf8_lossy(&output.stderr).trim());
    }

    Ok(output)
}
