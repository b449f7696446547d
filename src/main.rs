//! smart-commit - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use smart_commit::git::check_git_installed;
use smart_commit::{CommitConfig, SystemGit, TerminalPrompter, run_commit};

/// Classify pending changes, propose a commit message, then commit and push.
#[derive(Parser, Debug)]
#[command(name = "smart-commit")]
#[command(about = "Classify pending changes, propose a commit message, then commit and push")]
#[command(version)]
struct Cli {
    /// Commit message to use as-is (skips message generation). Blank messages
    /// are ignored and a message is generated instead
    message: Option<String>,

    /// Type a message directly; press Enter for a fixed message picked from
    /// the changed paths
    #[arg(long)]
    quick: bool,

    /// Do not push after committing
    #[arg(long)]
    no_push: bool,

    /// Show the preview and resolved message without staging or committing
    #[arg(long)]
    dry_run: bool,

    /// Print the dry-run report as JSON
    #[arg(long, requires = "dry_run")]
    json: bool,

    /// Run git in this directory instead of the current one
    #[arg(short = 'C', long = "repo")]
    repo: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn commit_config(&self) -> CommitConfig {
        CommitConfig {
            message: self.message.clone(),
            quick: self.quick,
            no_push: self.no_push,
            dry_run: self.dry_run,
            json: self.json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "smart_commit=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    check_git_installed()
        .await
        .context("git is required")?;

    let git = SystemGit::new(cli.repo.clone());
    let outcome = run_commit(&cli.commit_config(), &git, &TerminalPrompter)
        .await
        .context("Commit failed")?;

    Ok(ExitCode::from(outcome.exit_code()))
}
