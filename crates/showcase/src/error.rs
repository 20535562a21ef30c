use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::http::HttpError;

/// Errors produced by the repository sync client.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The input string could not be parsed into an owner/name pair.
    #[error("unrecognized repository reference: {input}")]
    InvalidReference { input: String },

    /// The upstream API reports no such repository or user.
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// The request budget is exhausted until the quota window resets.
    #[error("API quota exhausted, resets at {reset_at}")]
    QuotaExceeded { reset_at: DateTime<Utc> },

    /// Any other non-success HTTP status.
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// Network-level failure (DNS, timeout, connection reset).
    #[error("network error: {0}")]
    Network(#[from] HttpError),

    /// A successful response whose body does not match the expected shape.
    #[error("malformed API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SyncError {
    /// Create an invalid reference error.
    #[inline]
    pub fn invalid_reference(input: impl Into<String>) -> Self {
        Self::InvalidReference {
            input: input.into(),
        }
    }

    /// Create a not found error.
    #[inline]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a quota exceeded error.
    #[inline]
    pub fn quota_exceeded(reset_at: DateTime<Utc>) -> Self {
        Self::QuotaExceeded { reset_at }
    }

    /// Create an unexpected status error.
    #[inline]
    pub fn status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }

    /// Check if this error means the quota window must pass first.
    #[inline]
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }

    /// Check if this error is a terminal not-found.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for sync client operations.
pub type Result<T> = std::result::Result<T, SyncError>;
