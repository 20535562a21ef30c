//! API quota tracking from rate limit response headers.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::http::{HttpHeaders, header_get};

/// Requests held in reserve before the client waits out the quota window.
///
/// Checking against a margin rather than zero avoids racing the exact
/// boundary when several responses land close together.
pub const QUOTA_SAFETY_MARGIN: usize = 5;

/// One rate limit reading, taken from `X-RateLimit-*` response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaSnapshot {
    pub limit: usize,
    pub remaining: usize,
    pub reset_at: DateTime<Utc>,
}

impl QuotaSnapshot {
    /// Parse the `X-RateLimit-Limit` / `-Remaining` / `-Reset` header trio.
    ///
    /// Returns `None` unless all three are present and well-formed. Header
    /// names match case-insensitively; the reset value is Unix seconds.
    #[must_use]
    pub fn from_headers(headers: &HttpHeaders) -> Option<Self> {
        let limit = header_get(headers, "x-ratelimit-limit")?
            .parse::<usize>()
            .ok()?;
        let remaining = header_get(headers, "x-ratelimit-remaining")?
            .parse::<usize>()
            .ok()?;
        let reset_epoch = header_get(headers, "x-ratelimit-reset")?
            .parse::<i64>()
            .ok()?;
        let reset_at = DateTime::from_timestamp(reset_epoch, 0).unwrap_or_else(Utc::now);

        Some(Self {
            limit,
            remaining,
            reset_at,
        })
    }

    /// Whether the current window has no requests left.
    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.remaining == 0
    }
}

/// Shared quota state for one client instance.
///
/// Starts unknown (treated as "quota available") and is overwritten by every
/// observed response, success or failure. Separate client instances never
/// share a tracker.
#[derive(Debug, Default)]
pub struct QuotaTracker {
    state: Mutex<Option<QuotaSnapshot>>,
}

impl QuotaTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<QuotaSnapshot>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The most recent reading, if any response has been observed yet.
    #[must_use]
    pub fn snapshot(&self) -> Option<QuotaSnapshot> {
        *self.lock()
    }

    /// Overwrite the state with a fresh reading. Last writer wins.
    pub fn record(&self, snapshot: QuotaSnapshot) {
        *self.lock() = Some(snapshot);
    }

    /// Record the reading carried by `headers`, if one is present.
    ///
    /// Responses without the full header trio leave the state untouched.
    pub fn observe(&self, headers: &HttpHeaders) {
        if let Some(snapshot) = QuotaSnapshot::from_headers(headers) {
            self.record(snapshot);
        }
    }

    /// Forget the current reading, returning to the optimistic unknown state.
    pub fn clear(&self) {
        *self.lock() = None;
    }

    /// How long the next request must wait before it may be issued.
    ///
    /// `None` when the quota is unknown or at least [`QUOTA_SAFETY_MARGIN`]
    /// requests remain. A reset instant already in the past yields a zero
    /// wait, so the duration is always finite and non-negative.
    #[must_use]
    pub fn required_wait(&self) -> Option<Duration> {
        let snapshot = self.snapshot()?;
        if snapshot.remaining >= QUOTA_SAFETY_MARGIN {
            return None;
        }

        let wait = snapshot.reset_at.signed_duration_since(Utc::now());
        Some(wait.to_std().unwrap_or(Duration::ZERO))
    }
}
