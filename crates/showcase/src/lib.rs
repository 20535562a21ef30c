//! Showcase - GitHub repository metadata sync for project pages.
//!
//! This library fetches public repository metadata from the GitHub REST API
//! and normalizes it into the shape a portfolio or showcase page renders:
//! source link, homepage, description, technology list, star count, and the
//! time of the last push.
//!
//! The client tracks the API rate limit from response headers, waits out the
//! window when the remaining allowance runs low, and serves repeat lookups
//! from a bounded in-memory cache. It never retries a failed request on its
//! own.
//!
//! # Example
//!
//! ```ignore
//! use showcase::GitHubClient;
//!
//! let client = GitHubClient::new()?;
//!
//! // Web URLs and scp-style git remotes both work.
//! let project = client
//!     .sync_repository("https://github.com/rust-lang/cargo")
//!     .await?;
//! println!("{} has {} stars", project.source_url, project.stars);
//! ```

pub mod cache;
pub mod client;
pub mod convert;
pub mod error;
pub mod filter;
pub mod http;
pub mod quota;
pub mod reference;
pub mod types;

pub use client::{API_BASE, GitHubClient};
pub use error::{Result, SyncError};
pub use filter::RepoFilter;
pub use http::HttpTransport;
pub use quota::{QUOTA_SAFETY_MARGIN, QuotaSnapshot};
pub use reference::{RepoReference, parse_reference};
pub use types::{
    ListOptions, ProjectMetadata, RateLimitResource, RateLimitStatus, RepoRecord, RepoSort,
    SortDirection,
};
