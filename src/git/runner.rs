//! The git collaborator consumed by the commit workflow.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::GitError;

use super::subprocess::{get_timeout, run_git};

/// Outcome of one git call: `Some(text)` for output, `None` for a successful
/// empty output, `Err` for failure.
pub type GitOutput = Result<Option<String>, GitError>;

/// Trait for the git commands the commit workflow needs.
///
/// This abstraction allows mocking git in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// `git status --porcelain` listing untracked files individually.
    /// `Ok(None)` means the working tree is clean.
    async fn status(&self) -> GitOutput;

    /// `git status --short`, shown as-is by the quick preview.
    async fn short_status(&self) -> GitOutput;

    /// Stage every pending change (`git add -A`).
    async fn stage_all(&self) -> GitOutput;

    /// Commit the staged changes with `message`.
    async fn commit(&self, message: &str) -> GitOutput;

    /// Push the current branch to its upstream.
    async fn push(&self) -> GitOutput;
}

/// Runner backed by the system `git` binary.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: Option<PathBuf>,
    timeout: Duration,
}

impl SystemGit {
    /// Run git in `workdir`, or in the current directory when `None`.
    ///
    /// The per-command timeout comes from `SMART_COMMIT_GIT_TIMEOUT`.
    pub fn new(workdir: Option<PathBuf>) -> Self {
        Self {
            workdir,
            timeout: get_timeout(),
        }
    }

    async fn run(&self, args: &[&str]) -> GitOutput {
        run_git(args, self.workdir.as_deref(), self.timeout).await
    }
}

#[async_trait]
impl GitRunner for SystemGit {
    async fn status(&self) -> GitOutput {
        self.run(&["status", "--porcelain", "--untracked-files=all"])
            .await
    }

    async fn short_status(&self) -> GitOutput {
        self.run(&["status", "--short"]).await
    }

    async fn stage_all(&self) -> GitOutput {
        self.run(&["add", "-A"]).await
    }

    async fn commit(&self, message: &str) -> GitOutput {
        self.run(&["commit", "-m", message]).await
    }

    async fn push(&self) -> GitOutput {
        self.run(&["push"]).await
    }
}
