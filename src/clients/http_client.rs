//! HTTP client for Fastly API communication.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! HTTP round trip per request. It never retries: a failed call is reported
//! to the caller as-is.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::FastlyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the API token.
pub const API_TOKEN_HEADER: &str = "Fastly-Key";

/// HTTP client for making requests to the Fastly API.
///
/// The client handles:
/// - URL construction from the configured endpoint
/// - Default headers including User-Agent and the API token
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The underlying `reqwest::Client` pools
/// connections, so one client should be shared rather than rebuilt per call.
///
/// # Example
///
/// ```rust,ignore
/// use fastly_api::{FastlyConfig, ApiToken};
/// use fastly_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = FastlyConfig::builder()
///     .api_token(ApiToken::new("my-token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/service").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.fastly.com`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &FastlyConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}FastlyRust/{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_TOKEN_HEADER.to_string(),
            config.api_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.endpoint().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Fastly API.
    ///
    /// Performs one round trip. The response body is read to completion
    /// before this returns, on success and on failure alike.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = self
            .client
            .request(request.http_method.into(), &url);

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            rate_limit_remaining = response.rate_limit.map(|limit| limit.remaining),
            "received response"
        );

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Fastly API at {}, received notice: {}",
                request.path,
                reason
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError::from_body(
            code,
            &response.body,
        )))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, Endpoint};

    fn create_test_config() -> FastlyConfig {
        FastlyConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_uses_default_endpoint() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_uri(), "https://api.fastly.com");
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = FastlyConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .endpoint(Endpoint::new("http://127.0.0.1:9999/").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        assert_eq!(client.base_uri(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("FastlyRust/"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = FastlyConfig::builder()
            .api_token(ApiToken::new("test-token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("FastlyRust/"));
    }

    #[test]
    fn test_api_token_header_injection() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get(API_TOKEN_HEADER),
            Some(&"test-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }
}
