use chrono::{DateTime, Utc};

/// An open issue in its canonical, post-normalization shape.
/// Note: Not Deserialize — Issue is constructed from the raw API payload
/// by the normalization step, which applies the missing-field fallbacks.
#[derive(Debug, Clone)]
pub struct Issue {
    /// Unique id, stable per source issue
    pub id: u64,
    /// Issue title
    pub title: String,
    /// Absolute link to the issue on GitHub
    pub url: String,
    /// Name of the owning repository
    pub repository_name: String,
    /// Issue number within its repository
    pub number: u64,
    /// "open" or "closed" (only "open" is ever aggregated)
    pub state: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
    /// Comment count
    pub comments: u64,
    /// Labels, possibly empty; names and colors are always present
    pub labels: Vec<Label>,
    /// Issue author
    pub author: Author,
}

/// A normalized issue label. `name` is never empty and `color` is always a
/// 6-hex-digit string after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub name: String,
    pub color: String,
}

/// A normalized issue author. `login` falls back to "unknown"; the URLs fall
/// back to empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub login: String,
    pub avatar_url: String,
    pub profile_url: String,
}
