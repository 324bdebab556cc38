//! git-commit-ai - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_commit_ai::confirm::LineConfirmer;
use git_commit_ai::editor::ExternalEditor;
use git_commit_ai::{AnthropicClient, Config, GitCli, Outcome, Workflow, WorkflowOptions};

/// Draft a commit message for the staged changes with Claude.
#[derive(Parser, Debug)]
#[command(name = "git-commit-ai")]
#[command(about = "Draft a commit message for the staged changes with Claude")]
#[command(version)]
struct Cli {
    /// Model identifier to request
    #[arg(long)]
    model: Option<String>,

    /// Maximum output tokens for the generated message
    #[arg(long)]
    max_tokens: Option<u32>,

    /// Repository to inspect (defaults to the current directory)
    #[arg(long)]
    repo: Option<PathBuf>,

    /// Print the edited message without committing
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Checked before inspecting the repository so a missing key fails fast.
    let mut config = Config::from_env().context("Claude API access is required")?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(max_tokens) = cli.max_tokens {
        config.max_tokens = max_tokens;
    }

    let vcs = match &cli.repo {
        Some(dir) => GitCli::in_dir(dir),
        None => GitCli::new(),
    };
    let summarizer = AnthropicClient::new(&config).context("Failed to set up the Claude client")?;

    let options = WorkflowOptions {
        editor_env: config.editor_env.clone(),
        dry_run: cli.dry_run,
    };

    let mut workflow = Workflow::new(
        vcs,
        summarizer,
        ExternalEditor,
        LineConfirmer::stdio(),
        options,
    );

    match workflow.run().await.context("Commit was not created")? {
        Outcome::Committed { .. } => println!("✓ Committed"),
        Outcome::DryRun { .. } => println!("Dry run complete. No commit created."),
        Outcome::Declined => {}
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,git_commit_ai=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
