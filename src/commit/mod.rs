//! Interactive commit workflow.
//!
//! Fetches the working tree status, previews it, resolves a commit message
//! (supplied, synthesized and confirmed, or typed), stages everything,
//! commits, and offers to push. Push is only offered after a successful
//! commit.

pub mod preview;
pub mod prompt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::changes::{ChangeSet, ParsedStatus, parse_status, quick_message, synthesize_message};
use crate::error::CommitError;
use crate::git::GitRunner;

use self::preview::{print_preview, render_json_report};
use self::prompt::{MessageChoice, Prompter, wants_push};

pub use self::prompt::TerminalPrompter;

/// Configuration for the commit command, derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct CommitConfig {
    /// Pre-written message; bypasses synthesis when non-blank.
    pub message: Option<String>,
    /// Ask for a message directly instead of confirming a generated one.
    pub quick: bool,
    /// Never push and do not ask.
    pub no_push: bool,
    /// Stop after resolving the plan.
    pub dry_run: bool,
    /// With `dry_run`, print the report as JSON. Stdout then carries only
    /// the report; everything else goes to stderr.
    pub json: bool,
}

impl CommitConfig {
    /// Print a human-readable line on stdout, or on stderr when stdout is
    /// reserved for the JSON report.
    fn say(&self, line: &str) {
        if self.json {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}

/// The finalized message and push decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitPlan {
    pub message: String,
    pub should_push: bool,
}

/// Where the workflow is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    NothingToCommit,
    StatusFetched,
    Previewed,
    MessageResolved,
    Staged,
    Committed,
    Pushed,
    Skipped,
    Done,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The working tree was clean; nothing was staged or committed.
    NothingToCommit,
    /// Dry run: the plan was resolved but not executed.
    Planned(CommitPlan),
    /// The commit was created; `plan.should_push` records whether it was pushed.
    Committed(CommitPlan),
}

impl Outcome {
    /// Process exit code: 1 for a clean tree, 0 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::NothingToCommit => 1,
            Outcome::Planned(_) | Outcome::Committed(_) => 0,
        }
    }
}

/// Drives one commit run against a git runner and an operator prompter.
pub struct CommitFlow<'a, G: GitRunner, P: Prompter> {
    git: &'a G,
    prompter: &'a P,
    state: FlowState,
}

impl<'a, G: GitRunner, P: Prompter> CommitFlow<'a, G, P> {
    pub fn new(git: &'a G, prompter: &'a P) -> Self {
        Self {
            git,
            prompter,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    fn transition(&mut self, next: FlowState) {
        debug!("Commit flow: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Run the workflow to completion.
    pub async fn run(&mut self, config: &CommitConfig) -> Result<Outcome, CommitError> {
        // ── Status ──
        let status = self.git.status().await.map_err(CommitError::StatusFailed)?;
        let changes = match parse_status(status.as_deref()) {
            ParsedStatus::Clean => {
                config.say("No changes to commit");
                self.transition(FlowState::NothingToCommit);
                return Ok(Outcome::NothingToCommit);
            }
            ParsedStatus::Changes(changes) => changes,
        };
        self.transition(FlowState::StatusFetched);

        // ── Preview ──
        if !config.json {
            if config.quick {
                self.print_short_preview(&changes).await;
            } else {
                print_preview(&changes);
            }
        }
        self.transition(FlowState::Previewed);

        // ── Message ──
        let message = self.resolve_message(config, &changes, status.as_deref().unwrap_or(""))?;
        self.transition(FlowState::MessageResolved);

        if config.dry_run {
            let plan = CommitPlan {
                message,
                should_push: !config.no_push,
            };
            if config.json {
                let report =
                    render_json_report(&changes, &plan).map_err(CommitError::ReportFailed)?;
                println!("{}", report);
            } else {
                println!("Commit:  {}", plan.message);
                println!("Push:    {}", if plan.should_push { "ask" } else { "no" });
                println!();
                println!("Dry run complete. No changes made.");
            }
            self.transition(FlowState::Done);
            return Ok(Outcome::Planned(plan));
        }

        // ── Stage ──
        println!("\x1b[34mStaging all changes...\x1b[0m");
        if let Err(e) = self.git.stage_all().await {
            // The commit below still runs: anything already staged is committed.
            warn!("Staging failed: {}", e);
            eprintln!("  [WARN] Staging failed: {}", e);
        }
        self.transition(FlowState::Staged);

        // ── Commit ──
        println!("\x1b[34mCommitting with message: '{}'\x1b[0m", message);
        self.git
            .commit(&message)
            .await
            .map_err(CommitError::CommitFailed)?;
        self.transition(FlowState::Committed);

        // ── Push ──
        let should_push = if config.no_push {
            false
        } else {
            wants_push(&self.prompter.ask("Push to remote? (Y/n)")?)
        };

        if should_push {
            println!("\x1b[34mPushing to remote...\x1b[0m");
            self.git.push().await.map_err(CommitError::PushFailed)?;
            self.transition(FlowState::Pushed);
        } else {
            self.transition(FlowState::Skipped);
        }

        println!("\x1b[32mDone! ✅\x1b[0m");
        self.transition(FlowState::Done);

        Ok(Outcome::Committed(CommitPlan {
            message,
            should_push,
        }))
    }

    /// Quick preview: `git status --short` verbatim, or the grouped preview
    /// when that listing is unavailable.
    async fn print_short_preview(&self, changes: &ChangeSet) {
        match self.git.short_status().await {
            Ok(Some(short)) => {
                println!("\x1b[33m=== Changes ===\x1b[0m");
                println!("{short}");
                println!();
            }
            Ok(None) => print_preview(changes),
            Err(e) => {
                warn!("Short status failed: {}", e);
                print_preview(changes);
            }
        }
    }

    /// Pick the commit message: supplied, typed in quick mode, or generated
    /// and confirmed. `status` is the raw porcelain text behind `changes`.
    fn resolve_message(
        &self,
        config: &CommitConfig,
        changes: &ChangeSet,
        status: &str,
    ) -> Result<String, CommitError> {
        if let Some(message) = config.message.as_deref().filter(|m| !m.trim().is_empty()) {
            debug!("Using supplied commit message");
            return Ok(message.to_string());
        }

        if config.quick {
            let answer = self
                .prompter
                .ask("Enter commit message (or press Enter for auto-generated)")?;
            return Ok(non_blank_or(answer, quick_message(status)));
        }

        let generated = synthesize_message(changes);

        config.say(&format!(
            "\x1b[36mGenerated commit message: \x1b[0m'{}'",
            generated
        ));
        let answer = self.prompter.ask("Use this message? (Y/n/edit)")?;

        let message = match MessageChoice::from_answer(&answer) {
            MessageChoice::Accept => generated,
            MessageChoice::Retype => {
                let custom = self.prompter.ask("Enter custom commit message")?;
                non_blank_or(custom, generated)
            }
            MessageChoice::Edit => {
                let edited = self.prompter.edit("Edit message", &generated)?;
                non_blank_or(edited, generated)
            }
        };

        Ok(message)
    }
}

/// Trimmed `answer`, or `fallback` when the answer is blank.
fn non_blank_or(answer: String, fallback: String) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed.to_string()
    }
}

/// Run the commit workflow with the given collaborators.
pub async fn run_commit<G: GitRunner, P: Prompter>(
    config: &CommitConfig,
    git: &G,
    prompter: &P,
) -> Result<Outcome, CommitError> {
    CommitFlow::new(git, prompter).run(config).await
}
