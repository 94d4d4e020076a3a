//! Unified error types for the relay service.

use thiserror::Error;

/// Top-level error type for the relay service.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Upstream lookup error.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Webhook delivery error.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from querying an upstream status or WHOIS API.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The queried server is offline or unknown to the status API.
    ///
    /// Callers treat this as a not-found condition, not a transport
    /// failure.
    #[error("target is offline or not found")]
    TargetOffline,

    /// The upstream body could not be parsed as JSON.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),

    /// The upstream API answered with a non-success status.
    #[error("failed to fetch {target}: {reason}")]
    FetchFailed {
        /// The identifier that was queried.
        target: String,
        /// Reason for failure.
        reason: String,
    },

    /// Transport-level failure.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors from delivering a notification to the webhook.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The webhook answered with a non-success status.
    #[error("webhook delivery failed: HTTP {status}")]
    DeliveryFailed {
        /// Status code returned by the webhook service.
        status: u16,
    },

    /// Transport-level failure.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, RelayError>;
