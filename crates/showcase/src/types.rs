//! Wire-level GitHub response shapes and the normalized project model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default listing page size (the API caps `per_page` at 100).
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Repository object as returned by the GitHub REST API.
///
/// Only the fields this crate reads; everything else in the payload is
/// ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    pub stargazers_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    /// Instant of the last push. Required: a repository with no push history
    /// has nothing to showcase, and a missing value is malformed data.
    pub pushed_at: DateTime<Utc>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub private: bool,
}

/// Normalized project metadata, the caller-facing output of a sync.
///
/// Freshly constructed on every successful call and never persisted by this
/// crate; the caller merges it into its own records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectMetadata {
    /// Web URL of the repository.
    pub source_url: String,
    /// Project homepage, present only when the upstream field is non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,
    /// Repository description, empty string when the upstream field is null.
    pub description: String,
    /// Topic list, falling back to the primary language when no topics are
    /// set, or empty when neither is available.
    pub technologies: Vec<String>,
    pub stars: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub last_pushed_at: DateTime<Utc>,
}

/// Sort key for user repository listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepoSort {
    Created,
    #[default]
    Updated,
    Pushed,
    FullName,
}

impl RepoSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RepoSort::Created => "created",
            RepoSort::Updated => "updated",
            RepoSort::Pushed => "pushed",
            RepoSort::FullName => "full_name",
        }
    }
}

/// Sort direction for user repository listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Options for the user repository listing endpoint.
///
/// Defaults suit showcase pages: most recently updated first, one page of
/// 100, public repositories only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub sort: RepoSort,
    pub direction: SortDirection,
    pub page_size: u8,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            sort: RepoSort::default(),
            direction: SortDirection::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListOptions {
    /// Encode as the listing endpoint's query string.
    #[must_use]
    pub(crate) fn query(&self) -> String {
        format!(
            "sort={}&direction={}&per_page={}&type=public",
            self.sort.as_str(),
            self.direction.as_str(),
            self.page_size
        )
    }
}

/// A single rate limit resource entry from the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResource {
    /// Maximum requests allowed per window.
    pub limit: usize,
    /// Requests used in the current window.
    pub used: usize,
    /// Remaining requests in the current window.
    pub remaining: usize,
    /// Unix timestamp when the window resets.
    pub reset: u64,
}

impl RateLimitResource {
    /// Get the reset time as a DateTime.
    #[must_use]
    pub fn reset_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.reset as i64, 0).unwrap_or_else(Utc::now)
    }
}

/// Rate limit buckets reported by the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitStatus {
    /// Core API rate limit (the bucket every request in this crate draws
    /// from).
    pub core: RateLimitResource,
    /// Search API rate limit, when reported.
    #[serde(default)]
    pub search: Option<RateLimitResource>,
}

/// Full response of the rate limit status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitPayload {
    pub resources: RateLimitStatus,
}
