//! Git subprocess spawning.
//!
//! Shells out to the system `git` binary so the user's existing git config,
//! SSH agent, and credential store apply unchanged.

use std::env;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::GitError;

/// Default timeout for a single git subprocess (2 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable to override the default timeout.
const TIMEOUT_ENV_VAR: &str = "SMART_COMMIT_GIT_TIMEOUT";

/// Get the configured timeout duration.
///
/// Reads from SMART_COMMIT_GIT_TIMEOUT if set, otherwise uses the default of
/// 120 seconds. Invalid values log a warning and fall back to the default.
pub(crate) fn get_timeout() -> Duration {
    match env::var(TIMEOUT_ENV_VAR) {
        Ok(v) if !v.is_empty() => match v.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(
                    "Invalid {} value '{}', using default {}s",
                    TIMEOUT_ENV_VAR, v, DEFAULT_TIMEOUT_SECS
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        },
        _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
}

/// Check if git is installed and answers `git --version`.
pub async fn check_git_installed() -> Result<(), GitError> {
    if which::which("git").is_err() {
        return Err(GitError::NotInstalled);
    }

    let version_check = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(GitError::SpawnFailed)?;

    if !version_check.status.success() {
        return Err(GitError::NotInstalled);
    }

    Ok(())
}

/// Run `git <args...>` and return its output.
///
/// Returns `Ok(Some(stdout))` with trailing whitespace trimmed, `Ok(None)` when
/// the command succeeded without printing anything, and `Err` when git could
/// not be spawned, timed out, or exited non-zero. Leading whitespace is kept:
/// porcelain status codes are column-sensitive.
pub async fn run_git(
    args: &[&str],
    workdir: Option<&Path>,
    timeout_duration: Duration,
) -> Result<Option<String>, GitError> {
    let command = args.first().copied().unwrap_or_default().to_string();
    debug!("Running git {}", args.join(" "));

    let mut cmd = Command::new("git");
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = workdir {
        cmd.current_dir(dir);
    }

    let output = timeout(timeout_duration, cmd.output())
        .await
        .map_err(|_| GitError::Timeout {
            command: command.clone(),
            secs: timeout_duration.as_secs(),
        })?
        .map_err(GitError::SpawnFailed)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GitError::NonZeroExit {
            command,
            code: output.status.code(),
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let trimmed = stdout.trim_end();
    if trimmed.trim_start().is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
