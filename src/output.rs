use crate::board::{Board, Filter};
use crate::issues::Issue;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output file: {0}")]
    FileWrite(#[from] std::io::Error),
}

/// Render the board to the terminal (default) or to a markdown file.
#[instrument(skip(board), fields(visible = board.visible().len()))]
pub fn output(board: &Board, org: &str, output_path: Option<&Path>) -> Result<(), OutputError> {
    match output_path {
        None => {
            debug!("writing issue list to terminal");
            print_terminal(board, org);
            Ok(())
        }
        Some(path) => {
            debug!(path = %path.display(), "writing issue list to file");
            write_markdown(board, org, path)
        }
    }
}

/// Print the visible issues with colors, plus the repository list and the
/// appropriate empty state when the filter admits nothing.
fn print_terminal(board: &Board, org: &str) {
    let visible = board.visible();

    println!();
    println!(
        "{} — {} ({})",
        "Open Issues".bold(),
        org,
        visible.len()
    );

    let repositories = board.repository_names();
    if !repositories.is_empty() {
        println!("Repositories: {}", repositories.join(", "));
    }
    if let Filter::Repository(name) = board.filter() {
        println!(
            "Showing only {} ({} of {} open issues)",
            name,
            visible.len(),
            board.issues().len()
        );
    }
    println!();

    if visible.is_empty() {
        print_empty_state(board.filter());
        return;
    }

    for issue in visible {
        print_issue(issue);
        println!();
    }
}

fn print_issue(issue: &Issue) {
    println!(
        "{} {} {}",
        format!("[{}]", issue.repository_name).blue(),
        format!("#{}", issue.number).dimmed(),
        issue.title.bold()
    );

    if !issue.labels.is_empty() {
        let rendered: Vec<String> = issue
            .labels
            .iter()
            .map(|label| match parse_hex_color(&label.color) {
                Some((r, g, b)) => label.name.truecolor(r, g, b).to_string(),
                None => label.name.clone(),
            })
            .collect();
        println!("  {}", rendered.join(" "));
    }

    println!(
        "  opened by {} on {} · {} comments",
        issue.author.login,
        format_date(&issue.created_at),
        issue.comments
    );
    println!("  {}", issue.url.dimmed());
}

fn print_empty_state(filter: &Filter) {
    match filter {
        Filter::All => {
            println!("There are currently no open issues in any repository.");
        }
        Filter::Repository(name) => {
            println!(
                "There are currently no open issues in the {} repository.",
                name
            );
            println!("Run without --repo to see all repositories.");
        }
    }
}

/// Write the visible issues as a markdown file.
fn write_markdown(board: &Board, org: &str, path: &Path) -> Result<(), OutputError> {
    let visible = board.visible();
    let repositories = board.repository_names();

    let mut md = String::new();
    md.push_str(&format!("# Open Issues — {}\n\n", org));
    md.push_str(&format!(
        "{} open issues across {} repositories.\n\n",
        visible.len(),
        repositories.len()
    ));

    if visible.is_empty() {
        match board.filter() {
            Filter::All => {
                md.push_str("There are currently no open issues in any repository.\n");
            }
            Filter::Repository(name) => {
                md.push_str(&format!(
                    "There are currently no open issues in the {} repository.\n",
                    name
                ));
            }
        }
        std::fs::write(path, md)?;
        return Ok(());
    }

    for issue in visible {
        md.push_str(&format!(
            "## [{}] #{}: {}\n\n",
            issue.repository_name, issue.number, issue.title
        ));
        if !issue.labels.is_empty() {
            let names: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
            md.push_str(&format!("**Labels:** {}\n\n", names.join(", ")));
        }
        md.push_str(&format!(
            "**Author:** {} | **Comments:** {} | **Opened:** {}\n\n",
            issue.author.login,
            issue.comments,
            format_date(&issue.created_at)
        ));
        md.push_str(&format!("[View issue]({})\n\n", issue.url));
    }

    std::fs::write(path, md)?;
    Ok(())
}

/// Format a timestamp the way the issue list displays it, e.g. "Jan 2, 2024".
fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y").to_string()
}

/// Parse a 6-hex-digit label color into an RGB triple.
fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
