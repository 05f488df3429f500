//! Error types for the gateway client.
//!
//! # Design
//! One variant per failure class the dispatcher can produce. `Gateway`
//! covers every HTTP status >= 400 and keeps the raw body bytes, because the
//! gateway does not promise JSON on error paths. `Deserialization` is kept
//! apart from `Gateway`: it means the client and the gateway disagree about a
//! response schema, not that the gateway refused the call.
//!
//! Business failures reported inside a successfully decoded response (a
//! non-zero `errorCode`, or `success: false`) are not errors at this level;
//! see `envelope`.

use std::borrow::Cow;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by the dispatcher and every domain service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be serialized; no network I/O happened.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The HTTP exchange could not be completed (DNS, connect, TLS, timeout).
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The caller cancelled the request context.
    #[error("request cancelled")]
    Cancelled,

    /// The deadline on the caller's request context elapsed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,

    /// The gateway answered with HTTP status >= 400.
    #[error("gateway error (status {status}): {}", String::from_utf8_lossy(.body))]
    Gateway { status: u16, body: Vec<u8> },

    /// A success response did not match the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client could not be constructed.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    /// True for failures caused by the caller's context rather than the
    /// remote side.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ApiError::Cancelled | ApiError::DeadlineExceeded)
    }

    /// HTTP status of a gateway error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Gateway { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw gateway error body decoded as (lossy) UTF-8.
    pub fn message(&self) -> Option<Cow<'_, str>> {
        match self {
            ApiError::Gateway { body, .. } => Some(String::from_utf8_lossy(body)),
            _ => None,
        }
    }
}

/// Failure reported by an `HttpTransport`.
///
/// Wraps the underlying cause so callers can downcast to the concrete
/// client error (for example `reqwest::Error`) when they need to.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        Self::with_source(message, err)
    }
}
