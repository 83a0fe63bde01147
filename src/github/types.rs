use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A repository as returned by the organization listing endpoint.
/// Only the name is needed downstream; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
}

/// An issue as returned by the repository issues endpoint, before
/// normalization. Optional fields stay optional here so that incomplete
/// payloads reach the fallback rules instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    /// Globally unique issue id
    pub id: u64,
    /// Issue number within its repository
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Link to the issue on github.com
    pub html_url: String,
    /// "open" or "closed" (only "open" is ever requested)
    pub state: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
    /// Comment count
    #[serde(default)]
    pub comments: u64,
    /// Labels; either plain strings or structured objects on the wire
    #[serde(default)]
    pub labels: Vec<RawLabel>,
    /// Issue author; absent for some automated or deleted accounts
    pub user: Option<RawUser>,
}

/// A label on the wire is either a bare name or a structured object.
/// Both shapes normalize to the canonical `{name, color}` pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawLabel {
    Name(String),
    Detailed {
        name: Option<String>,
        color: Option<String>,
    },
}

/// Issue author as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub login: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
}
