//! `TmdbClient` - TMDB API client implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;
use url::Url;

use super::api::LocalTmdbApi;
use super::types::TmdbErrorResponse;
use crate::SearchError;

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Placeholder written over the API key in logged URLs.
const REDACTED: &str = "***";

/// TMDB API client.
///
/// Authenticates with a v3 API key sent as the `api_key` query parameter.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// v3 API key. Requests are sent without `api_key` when unset.
    api_key: Option<String>,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the v3 API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets a total request timeout. Transport defaults apply when unset.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TmdbClient> {
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let mut http_client = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http_client = http_client.timeout(timeout);
        }
        let http_client = http_client.build().context("failed to build HTTP client")?;

        Ok(TmdbClient {
            http_client,
            base_url,
            api_key: self.api_key,
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Returns the base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Returns a copy of `url` with the `api_key` query value masked.
fn redact_api_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            if key == "api_key" {
                (key.into_owned(), String::from(REDACTED))
            } else {
                (key.into_owned(), value.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

/// Logs the TMDB error body of a non-success response.
fn warn_on_error_status(status: reqwest::StatusCode, body: &Value, endpoint: &str) {
    match TmdbErrorResponse::deserialize(body) {
        Ok(error_response) => tracing::warn!(
            %status,
            code = error_response.status_code,
            status_message = %error_response.status_message,
            "TMDB API error response: {endpoint}"
        ),
        Err(_) => tracing::warn!(%status, "TMDB API returned non-success status: {endpoint}"),
    }
}

impl LocalTmdbApi for TmdbClient {
    #[instrument(skip_all, fields(endpoint = endpoint))]
    async fn call(&self, endpoint: &str, query: &str) -> Result<Value, SearchError> {
        if endpoint.is_empty() {
            return Err(SearchError::invalid_search("endpoint is empty"));
        }
        if query.is_empty() {
            return Err(SearchError::invalid_search("query is empty"));
        }

        let url = self.base_url.join(endpoint).map_err(|e| {
            SearchError::invalid_search(format!("failed to join URL path {endpoint}: {e}"))
        })?;

        let mut params: Vec<(&str, &str)> = Vec::with_capacity(2);
        if let Some(key) = self.api_key.as_deref() {
            params.push(("api_key", key));
        }
        params.push(("query", query));

        let request = self
            .http_client
            .get(url)
            .query(&params)
            .build()
            .map_err(|e| {
                SearchError::request_failure(format!("failed to build request {endpoint}: {e}"))
            })?;

        tracing::debug!(url = %redact_api_key(request.url()), "TMDB API request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| SearchError::request_failure(format!("{endpoint}: {e}")))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            SearchError::request_failure(format!("failed to read response body {endpoint}: {e}"))
        })?;

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            SearchError::bad_return(format!("failed to decode JSON response {endpoint}: {e}"))
        })?;

        if !status.is_success() {
            warn_on_error_status(status, &value, endpoint);
        }

        Ok(value)
    }
}
