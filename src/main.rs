//! autocommit - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use autocommit::{auto_commit, check_git_installed, logging, CommitOutcome};

/// Stage and commit task changes with a deterministic message.
#[derive(Parser, Debug)]
#[command(name = "autocommit")]
#[command(about = "Stage and commit task changes with a deterministic message")]
#[command(version)]
struct Cli {
    /// Task identifier (e.g. US-042)
    #[arg(long = "task-id")]
    task_id: String,

    /// Task title used in the commit message
    #[arg(long)]
    title: String,

    /// Working directory of the repository
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Print the outcome as JSON instead of a summary line
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    check_git_installed().await.context("git is required")?;

    let outcome = auto_commit(&cli.dir, &cli.task_id, &cli.title).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_summary(&outcome);
    }

    if matches!(outcome, CommitOutcome::Failed { .. }) {
        std::process::exit(1);
    }
    Ok(())
}

/// Print a one-line human-readable summary of the outcome.
fn print_summary(outcome: &CommitOutcome) {
    match outcome {
        CommitOutcome::Committed {
            message,
            short_id: Some(id),
        } => println!("✓ committed {id}: {message}"),
        CommitOutcome::Committed {
            message,
            short_id: None,
        } => println!("✓ committed: {message}"),
        CommitOutcome::Skipped { reason } => println!("skipped: {reason}"),
        CommitOutcome::Failed { error } => eprintln!("error: {error}"),
    }
}
