//! HTTP client for the business-search backend.
//!
//! Wraps `reqwest` with the backend's JSON envelope convention. The HTTP
//! status code is only logged: the backend reports validation, rate-limit and
//! upstream failures as error envelopes with 4xx/5xx codes, and those must
//! reach the user as server-supplied messages rather than transport errors.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::model::{
    ApiError, Business, BusinessId, DetailRequest, Envelope, HealthStatus, SearchParams,
};

const SEARCH_PATH: &str = "api/search";
const DETAILS_PATH: &str = "api/business-details";
const HEALTH_PATH: &str = "health";

/// Client for the search backend.
///
/// Cheap to clone; clones share the underlying connection pool, so each
/// in-flight request task can own one.
#[derive(Debug, Clone)]
pub struct BusinessClient {
    client: Client,
    base_url: Url,
}

impl BusinessClient {
    /// Creates a client for the backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// URL, or [`ApiError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .user_agent(concat!("bizlens/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Exactly one trailing slash, so joins append to the configured path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Runs a bulk search.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or timeout.
    /// - [`ApiError::Decode`] if the body is not a search envelope.
    pub async fn search(
        &self,
        params: &SearchParams,
    ) -> Result<Envelope<Vec<Business>>, ApiError> {
        self.post_envelope(SEARCH_PATH, params, "search").await
    }

    /// Looks up a single business by identifier.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or timeout.
    /// - [`ApiError::Decode`] if the body is not a detail envelope.
    pub async fn details(&self, business_id: &BusinessId) -> Result<Envelope<Business>, ApiError> {
        let body = DetailRequest {
            business_id: business_id.as_str(),
        };
        self.post_envelope(DETAILS_PATH, &body, "business-details")
            .await
    }

    /// Calls the health endpoint.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure or timeout.
    /// - [`ApiError::Decode`] if the body is not a health document.
    /// - [`ApiError::Unhealthy`] if the backend reports any other status.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.endpoint(HEALTH_PATH)?;
        let response = self.client.get(url).send().await?;
        debug!(status = %response.status(), "health response");

        let bytes = response.bytes().await?;
        let health: HealthStatus =
            serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
                context: HEALTH_PATH.to_string(),
                source,
            })?;

        if health.is_healthy() {
            Ok(health)
        } else {
            Err(ApiError::Unhealthy(health.status))
        }
    }

    async fn post_envelope<B, T>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        debug!(%status, endpoint = context, "backend response");

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            context: format!("{context} (HTTP {status})"),
            source,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}
