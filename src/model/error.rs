//! Error types for bizlens.
//!
//! # Error Recovery Strategy
//!
//! Request failures are **non-fatal**: every [`ApiError`] that reaches the
//! controller is shown to the user as a recoverable "try again" state (an
//! error banner for searches, an inline message for details) and the session
//! continues. Configuration, logging and terminal errors are fatal and
//! propagate to `main`.

use thiserror::Error;

/// Failures talking to the search backend.
///
/// Well-formed envelopes with a non-success status are *not* errors at this
/// level; they are returned as `Ok(Envelope)` and judged by the controller.
/// Everything here is transport-class: the backend could not be reached, or
/// its answer was not an envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, TLS or timeout failure from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configured base URL is not a valid absolute URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The URL as configured.
        url: String,
        /// Parser error details.
        reason: String,
    },

    /// Response body could not be decoded into the expected envelope.
    #[error("JSON decoding error for {context}: {source}")]
    Decode {
        /// Which endpoint produced the body.
        context: String,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// Health endpoint answered, but not with "healthy".
    #[error("backend reported status '{0}'")]
    Unhealthy(String),
}
