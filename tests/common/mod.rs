//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::process::Command;
use std::sync::Mutex;

use async_trait::async_trait;

use smart_commit::{GitError, GitOutput, GitRunner, PromptError, Prompter};

/// Prompter that replays canned answers and records the questions asked.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    pub questions: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            questions: Mutex::new(Vec::new()),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    fn next(&self, question: &str) -> Result<String, PromptError> {
        self.questions.lock().unwrap().push(question.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(PromptError::Closed)
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &str) -> Result<String, PromptError> {
        self.next(question)
    }

    fn edit(&self, question: &str, _initial: &str) -> Result<String, PromptError> {
        self.next(question)
    }
}

/// Git runner returning a fixed status and recording every mutation.
pub struct RecordingGit {
    status: Option<String>,
    fail_stage: bool,
    fail_commit: bool,
    pub calls: Mutex<Vec<String>>,
}

impl RecordingGit {
    pub fn with_status(lines: &[&str]) -> Self {
        let status = if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        };
        Self {
            status,
            fail_stage: false,
            fail_commit: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_stage(mut self) -> Self {
        self.fail_stage = true;
        self
    }

    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn failure(command: &str) -> GitError {
    GitError::NonZeroExit {
        command: command.to_string(),
        code: Some(128),
        stderr: "fatal: simulated failure".to_string(),
    }
}

#[async_trait]
impl GitRunner for RecordingGit {
    async fn status(&self) -> GitOutput {
        self.record("status".to_string());
        Ok(self.status.clone())
    }

    async fn short_status(&self) -> GitOutput {
        self.record("short_status".to_string());
        Ok(self.status.clone())
    }

    async fn stage_all(&self) -> GitOutput {
        self.record("add".to_string());
        if self.fail_stage {
            return Err(failure("add"));
        }
        Ok(None)
    }

    async fn commit(&self, message: &str) -> GitOutput {
        self.record(format!("commit {message}"));
        if self.fail_commit {
            return Err(failure("commit"));
        }
        Ok(Some(format!("[main 0000000] {message}")))
    }

    async fn push(&self) -> GitOutput {
        self.record("push".to_string());
        Ok(None)
    }
}

/// Run git in `dir`, panicking on failure. Returns trimmed stdout.
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A test git repository with an initial commit and a bare `origin` remote.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub remote: tempfile::TempDir,
}

impl TestRepo {
    /// Create a repository with one committed file, pushed to a bare remote
    /// so that plain `git push` works.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let remote = tempfile::tempdir().expect("Failed to create remote directory");

        git(remote.path(), &["init", "-q", "--bare"]);

        let path = dir.path();
        git(path, &["init", "-q"]);
        git(path, &["config", "user.name", "Test User"]);
        git(path, &["config", "user.email", "test@example.com"]);
        git(path, &["config", "commit.gpgsign", "false"]);

        std::fs::write(path.join("README.md"), "# test\n").expect("Failed to write README");
        git(path, &["add", "-A"]);
        git(path, &["commit", "-q", "-m", "init"]);

        let remote_path = remote.path().to_str().expect("Invalid remote path");
        git(path, &["remote", "add", "origin", remote_path]);
        git(path, &["push", "-q", "-u", "origin", "HEAD"]);

        Self { dir, remote }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) {
        let file = self.path().join(relative);
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(file, contents).expect("Failed to write file");
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.path().join(relative)).expect("Failed to remove file");
    }

    /// Subject of the HEAD commit.
    pub fn head_subject(&self) -> String {
        git(self.path(), &["log", "-1", "--format=%s"])
    }

    /// Subject of the remote's HEAD commit for the current branch.
    pub fn remote_subject(&self) -> String {
        git(self.path(), &["log", "-1", "--format=%s", "@{u}"])
    }
}
