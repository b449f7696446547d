//! smart-commit - an interactive assistant for committing pending git changes.
//!
//! # Overview
//!
//! smart-commit reads `git status --porcelain`, classifies the pending files
//! into frontend/backend/config/docs buckets, proposes a
//! `"<type>: <description>"` commit message, and then stages, commits, and
//! optionally pushes with confirmation at each step.

pub mod changes;
pub mod commit;
pub mod error;
pub mod git;

// Re-export commonly used types
pub use changes::{
    Category, CategoryCounts, ChangeKind, ChangeRecord, ChangeSet, CommitType, ParsedStatus,
    parse_status, synthesize_message,
};
pub use commit::{CommitConfig, CommitFlow, CommitPlan, FlowState, Outcome, run_commit};
pub use commit::prompt::{Prompter, TerminalPrompter};
pub use error::{CommitError, GitError, PromptError};
pub use git::{GitOutput, GitRunner, SystemGit};
