//! Wire types exchanged with the search backend.

use serde::{Deserialize, Serialize};

/// Parameters of a bulk search.
///
/// Strings are trimmed by the caller and may be empty; the backend does its
/// own validation and answers with an error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    /// What to search for.
    pub query: String,
    /// Where to search.
    pub location: String,
    /// Maximum number of results.
    pub limit: u32,
    /// Language code for localized fields.
    pub language: String,
}

/// Body of a detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRequest<'a> {
    /// Identifier of the record to fetch.
    pub business_id: &'a str,
}

/// Response envelope shared by every backend endpoint.
///
/// `status == "success"` is the only success discriminator; HTTP status codes
/// are not consulted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// `"success"` or an error status.
    #[serde(default)]
    pub status: String,

    /// Payload; absent on failures.
    pub data: Option<T>,

    /// Human-readable failure reason, set on non-success responses.
    #[serde(default)]
    pub message: Option<String>,

    /// Composed query echoed back by the search endpoint.
    #[serde(default)]
    pub query: Option<String>,
}

impl<T> Envelope<T> {
    /// Status value of a successful response.
    pub const SUCCESS: &'static str = "success";

    /// Whether `status` is [`Self::SUCCESS`].
    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }

    /// Server-supplied failure message, ignoring blank ones.
    pub fn failure_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// Body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    /// `"healthy"` when the backend is up.
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    /// Whether the backend reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
