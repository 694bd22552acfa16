//! Error types for the storefront client.
//!
//! Three kinds of failure reach callers (screens translate them into
//! user-facing messages; nothing here retries):
//!
//! - transport/status failures from the wire ([`ApiError::Http`],
//!   [`ApiError::Status`])
//! - domain-contract violations, where a success response is missing the
//!   payload the contract promises ([`ApiError::MissingPayload`])
//! - decode failures when a success body does not match the caller's type
//!   ([`ApiError::Decode`])
//!
//! Client-side validation failures never become an `ApiError`; they are
//! caught before any request is issued (see [`crate::checkout`]).

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when calling the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server responded with a non-success status.
    ///
    /// `message` is the server-provided `error` field when present, else
    /// the status's canonical reason text.
    #[error("{message}")]
    Status {
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Human-readable failure description.
        message: String,
    },

    /// A success response did not match the caller's expected type.
    #[error("response decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// A success response omitted a payload the contract requires.
    #[error("server response missing expected '{0}' payload")]
    MissingPayload(&'static str),
}

impl ApiError {
    /// Whether this failure came back with an HTTP 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
