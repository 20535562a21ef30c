//! Quota-aware GitHub client with response caching.
//!
//! Every metadata fetch funnels through one request path: consult the
//! response cache, gate on the tracked quota, send the request, record the
//! rate limit headers, then classify the status. The client never retries
//! on its own; callers see every failure as a typed error.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::convert::to_project_metadata;
use crate::error::{Result, SyncError};
use crate::filter::RepoFilter;
use crate::http::{HttpHeaders, HttpRequest, HttpTransport, ReqwestTransport};
use crate::quota::{QuotaSnapshot, QuotaTracker};
use crate::reference::{RepoReference, parse_reference};
use crate::types::{ListOptions, ProjectMetadata, RateLimitPayload, RateLimitStatus, RepoRecord};

/// Base URL of the GitHub REST API.
pub const API_BASE: &str = "https://api.github.com";

/// Media type pinning the stable v3 JSON representation.
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// User agent sent with every request. GitHub rejects anonymous clients.
const USER_AGENT: &str = "showcase";

/// Per-request timeout for the default transport.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub metadata client.
///
/// Each instance owns its quota tracker and response cache; two clients
/// never observe each other's state. Construct one per process and share
/// it by reference.
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    quota: QuotaTracker,
    cache: ResponseCache,
}

impl GitHubClient {
    /// Create a client backed by the default HTTPS transport.
    pub fn new() -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(REQUEST_TIMEOUT)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client on top of a caller-provided transport.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            quota: QuotaTracker::new(),
            cache: ResponseCache::new(),
        }
    }

    /// Most recently observed quota state, if any response has been seen.
    #[must_use]
    pub fn quota(&self) -> Option<QuotaSnapshot> {
        self.quota.snapshot()
    }

    fn request_headers() -> HttpHeaders {
        vec![
            ("Accept".to_string(), ACCEPT_HEADER.to_string()),
            ("User-Agent".to_string(), USER_AGENT.to_string()),
        ]
    }

    /// Fetch a route through the cache and quota gate.
    ///
    /// Fresh cached bodies are returned without touching the network. When
    /// the tracked quota sits below the safety margin the call sleeps until
    /// the reported reset, then sends without rechecking. Rate limit headers
    /// update the tracker whatever the response status. `resource` names the
    /// thing being fetched in `NotFound` errors.
    async fn throttled_get(&self, route: &str, resource: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", API_BASE, route);

        if let Some(body) = self.cache.lookup(&url) {
            debug!("cache hit for {route}");
            return Ok(body);
        }

        if let Some(wait) = self.quota.required_wait() {
            warn!("quota below safety margin, waiting {}s for reset", wait.as_secs());
            tokio::time::sleep(wait).await;
            // The window we knew about is over; drop the stale snapshot
            // instead of gating the next call on it.
            self.quota.clear();
        }

        let request = HttpRequest::new(&url, Self::request_headers());
        let response = self.transport.get(request).await?;

        self.quota.observe(&response.headers);

        match response.status {
            200..=299 => {
                self.cache.store(url, response.body.clone());
                Ok(response.body)
            }
            404 => Err(SyncError::not_found(resource)),
            403 => {
                // Quota exhaustion is only what this response's own headers
                // say it is; the tracker may be stale or primed by another
                // call.
                if let Some(snapshot) = QuotaSnapshot::from_headers(&response.headers)
                    && snapshot.is_depleted()
                {
                    return Err(SyncError::quota_exceeded(snapshot.reset_at));
                }
                Err(SyncError::status(403))
            }
            status => Err(SyncError::status(status)),
        }
    }

    /// Fetch a repository and normalize it to project metadata.
    pub async fn fetch_repository(&self, reference: &RepoReference) -> Result<ProjectMetadata> {
        let route = format!("/repos/{}/{}", reference.owner, reference.name);
        let body = self.throttled_get(&route, &reference.to_string()).await?;
        let record: RepoRecord = serde_json::from_slice(&body)?;
        Ok(to_project_metadata(&record))
    }

    /// Parse a repository reference in any supported form and fetch it.
    ///
    /// Parsing happens before any network activity; an unrecognized
    /// reference fails without spending quota.
    pub async fn sync_repository(&self, reference: &str) -> Result<ProjectMetadata> {
        let parsed =
            parse_reference(reference).ok_or_else(|| SyncError::invalid_reference(reference))?;
        self.fetch_repository(&parsed).await
    }

    /// One raw listing page from the user repositories endpoint.
    async fn user_repo_page(
        &self,
        username: &str,
        options: &ListOptions,
    ) -> Result<Vec<RepoRecord>> {
        let route = format!("/users/{}/repos?{}", username, options.query());
        let resource = format!("user {}", username);
        let body = self.throttled_get(&route, &resource).await?;
        let records: Vec<RepoRecord> = serde_json::from_slice(&body)?;
        Ok(records)
    }

    /// List a user's public repositories, one page, normalized.
    pub async fn list_user_repositories(
        &self,
        username: &str,
        options: &ListOptions,
    ) -> Result<Vec<ProjectMetadata>> {
        let records = self.user_repo_page(username, options).await?;
        Ok(records.iter().map(to_project_metadata).collect())
    }

    /// List a user's public repositories with client-side filtering.
    ///
    /// The filter reads the raw listing page (star counts and exact topic
    /// lists) before normalization; no requests are issued beyond the one
    /// listing call.
    pub async fn list_filtered_repositories(
        &self,
        username: &str,
        options: &ListOptions,
        filter: &RepoFilter,
    ) -> Result<Vec<ProjectMetadata>> {
        let records = self.user_repo_page(username, options).await?;
        Ok(filter.apply(records).iter().map(to_project_metadata).collect())
    }

    /// Query the rate limit status endpoint.
    ///
    /// Bypasses both the response cache and the quota gate: this endpoint
    /// stays reachable when the quota is exhausted and does not count
    /// against the core limit.
    pub async fn rate_limit_status(&self) -> Result<RateLimitStatus> {
        let url = format!("{}/rate_limit", API_BASE);
        let request = HttpRequest::new(&url, Self::request_headers());
        let response = self.transport.get(request).await?;

        self.quota.observe(&response.headers);

        if !(200..=299).contains(&response.status) {
            return Err(SyncError::status(response.status));
        }

        let payload: RateLimitPayload = serde_json::from_slice(&response.body)?;
        Ok(payload.resources)
    }
}
