mod board;
mod config;
mod github;
mod issues;
mod output;

use board::{Board, Filter};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;

/// org-issues — CLI tool that aggregates the open issues of every repository
/// in a GitHub organization into one newest-first list, filterable by
/// repository.
#[derive(Parser, Debug)]
#[command(name = "org-issues", version, about)]
struct Cli {
    /// GitHub organization to aggregate (defaults to the configured one)
    org: Option<String>,

    /// Only show issues from this repository
    #[arg(short, long)]
    repo: Option<String>,

    /// Optional output file path for a markdown report
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading configuration");
    let config = config::Config::load()?;
    let org = cli.org.unwrap_or_else(|| config.organization());

    let _main_span = info_span!("aggregate_issues", org = %org).entered();

    info!("fetching open issues");
    let client = github::GithubClient::new(config.api_url());
    let issues = match issues::aggregate(&client, &org).await {
        Ok(issues) => issues,
        Err(err) => {
            error!(error = %err, "aggregation failed");
            eprintln!(
                "{}",
                "Failed to fetch issues. Please try again later.".red()
            );
            return Err(err.into());
        }
    };
    info!(issues = issues.len(), "aggregation complete");

    let mut board = Board::new(issues);
    if let Some(repo) = cli.repo {
        debug!(repository = %repo, "scoping board to one repository");
        board.set_filter(Filter::Repository(repo));
    }

    output::output(&board, &org, cli.output.as_deref())?;

    Ok(())
}
