//! Git operations via the system `git` binary.

pub mod runner;
pub mod subprocess;

pub use runner::{GitOutput, GitRunner, SystemGit};
pub use subprocess::{check_git_installed, run_git};
