pub mod types;

pub use types::{RawIssue, RawLabel, RawUser, Repository};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

/// Page size for both listing endpoints. The API caps per_page at 100;
/// results past the first page are not fetched.
const PAGE_SIZE: u32 = 100;

const USER_AGENT: &str = "org-issues";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GitHub API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Read-only view of the remote issue source. Implemented by `GithubClient`
/// against the live API and by in-memory fakes in tests.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// List the repositories owned by an organization.
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, FetchError>;

    /// List the open issues of a single repository.
    async fn list_open_issues(&self, org: &str, repo: &str) -> Result<Vec<RawIssue>, FetchError>;
}

/// Unauthenticated client for the GitHub REST API. Only publicly visible
/// data is reachable, and unauthenticated rate limits apply.
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        debug!(url = %url, "sending API request");
        let response = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl IssueSource for GithubClient {
    #[instrument(skip(self))]
    async fn list_repositories(&self, org: &str) -> Result<Vec<Repository>, FetchError> {
        let url = format!("{}/orgs/{}/repos", self.api_url, org);
        self.get_json(url, &[("per_page", PAGE_SIZE.to_string())])
            .await
    }

    #[instrument(skip(self))]
    async fn list_open_issues(&self, org: &str, repo: &str) -> Result<Vec<RawIssue>, FetchError> {
        let url = format!("{}/repos/{}/{}/issues", self.api_url, org, repo);
        self.get_json(
            url,
            &[
                ("state", "open".to_string()),
                ("per_page", PAGE_SIZE.to_string()),
            ],
        )
        .await
    }
}
