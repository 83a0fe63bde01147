pub mod types;

pub use types::{Author, Issue, Label};

use futures::future;
use tracing::{debug, instrument};

use crate::github::{FetchError, IssueSource, RawIssue, RawLabel, RawUser};

/// Fallback color for labels that arrive without one (or as bare strings).
const FALLBACK_COLOR: &str = "888888";

/// Fallback for missing label names and author logins.
const UNKNOWN: &str = "unknown";

/// Aggregate the open issues of every repository owned by `org` into one
/// list sorted by creation time, newest first.
///
/// The per-repository fetches run concurrently and are joined all-or-nothing:
/// the first failure aborts the whole aggregation and no partial list is
/// produced. There are no retries.
#[instrument(skip(source))]
pub async fn aggregate<S: IssueSource>(source: &S, org: &str) -> Result<Vec<Issue>, FetchError> {
    let repositories = source.list_repositories(org).await?;
    debug!(repositories = repositories.len(), "fetched repository list");

    let fetches = repositories.iter().map(|repo| async move {
        let raw = source.list_open_issues(org, &repo.name).await?;
        debug!(repository = %repo.name, issues = raw.len(), "fetched open issues");
        Ok::<Vec<Issue>, FetchError>(
            raw.into_iter()
                .map(|issue| normalize(issue, &repo.name))
                .collect(),
        )
    });
    let per_repository = future::try_join_all(fetches).await?;

    let mut issues: Vec<Issue> = per_repository.into_iter().flatten().collect();
    issues.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(issues)
}

/// Convert a raw API issue into the canonical shape, tagging it with the
/// repository it belongs to and applying the missing-field fallbacks.
pub fn normalize(raw: RawIssue, repository_name: &str) -> Issue {
    Issue {
        id: raw.id,
        title: raw.title,
        url: raw.html_url,
        repository_name: repository_name.to_string(),
        number: raw.number,
        state: raw.state,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
        comments: raw.comments,
        labels: raw.labels.into_iter().map(normalize_label).collect(),
        author: normalize_author(raw.user),
    }
}

/// Collapse both wire shapes of a label into `{name, color}`. Bare-string
/// labels carry no color; empty strings count as missing.
fn normalize_label(raw: RawLabel) -> Label {
    match raw {
        RawLabel::Name(name) => Label {
            name,
            color: FALLBACK_COLOR.to_string(),
        },
        RawLabel::Detailed { name, color } => Label {
            name: name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
            color: color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| FALLBACK_COLOR.to_string()),
        },
    }
}

fn normalize_author(raw: Option<RawUser>) -> Author {
    let raw = raw.unwrap_or(RawUser {
        login: None,
        avatar_url: None,
        html_url: None,
    });
    Author {
        login: raw
            .login
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        avatar_url: raw.avatar_url.unwrap_or_default(),
        profile_url: raw.html_url.unwrap_or_default(),
    }
}
