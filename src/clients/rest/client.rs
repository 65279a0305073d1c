//! REST client implementation for the Fastly API.
//!
//! This module provides the [`RestClient`] type, the handle every resource
//! operation in [`crate::rest`] takes.

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};
use crate::config::FastlyConfig;

/// REST API client for the Fastly API.
///
/// Provides `get`, `post`, `put`, `patch` and `delete` helpers on top of
/// [`HttpClient`]. It holds no per-call state: all request data is built
/// fresh for every call.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use fastly_api::{ApiToken, FastlyConfig, RestClient};
///
/// let config = FastlyConfig::builder()
///     .api_token(ApiToken::new("my-token")?)
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("/service", None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn new(config: &FastlyConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!(endpoint = %config.endpoint(), "created Fastly REST client");
        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, network failures and non-2xx
    /// responses.
    pub async fn get(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, network failures and non-2xx
    /// responses.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Post, path, Some(body), None)
            .await
    }

    /// Sends a PUT request. Product enablement uses PUT without a body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, network failures and non-2xx
    /// responses.
    pub async fn put(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Put, path, body, None).await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, network failures and non-2xx
    /// responses.
    pub async fn patch(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Patch, path, Some(body), None)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, network failures and non-2xx
    /// responses.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.make_request(HttpMethod::Delete, path, None, None)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;

        self.http_client.request(request).await
    }
}
