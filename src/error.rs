//! Error types for smart-commit modules using thiserror.

use thiserror::Error;

/// Errors from running git subprocesses.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found. Install git and make sure it is on your PATH")]
    NotInstalled,

    #[error("Failed to spawn git process: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {command} exited with {}: {stderr}",
            code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("git {command} timed out after {secs} seconds")]
    Timeout { command: String, secs: u64 },
}

/// Errors from the operator question/answer channel.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read answer: {0}")]
    Interaction(#[from] dialoguer::Error),

    #[error("Input closed before an answer was given")]
    Closed,
}

/// Errors from the commit workflow.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to read working tree status: {0}")]
    StatusFailed(#[source] GitError),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] GitError),

    #[error("Failed to push: {0}")]
    PushFailed(#[source] GitError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("Failed to render dry-run report: {0}")]
    ReportFailed(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero_exit_message_with_code() {
        let err = GitError::NonZeroExit {
            command: "commit".to_string(),
            code: Some(1),
            stderr: "nothing to commit".to_string(),
        };
        assert_eq!(err.to_string(), "git commit exited with code 1: nothing to commit");
    }

    #[test]
    fn test_non_zero_exit_message_without_code() {
        let err = GitError::NonZeroExit {
            command: "push".to_string(),
            code: None,
            stderr: "killed".to_string(),
        };
        assert_eq!(err.to_string(), "git push exited with unknown status: killed");
    }

    #[test]
    fn test_commit_failed_wraps_git_error() {
        let err = CommitError::CommitFailed(GitError::Timeout {
            command: "commit".to_string(),
            secs: 5,
        });
        assert_eq!(
            err.to_string(),
            "Failed to create commit: git commit timed out after 5 seconds"
        );
    }
}
