//! Configuration types for the Fastly API SDK.
//!
//! # Overview
//!
//! - [`FastlyConfig`]: The configuration struct holding all SDK settings
//! - [`FastlyConfigBuilder`]: A builder for constructing [`FastlyConfig`] instances
//! - [`ApiToken`]: A validated API token with masked debug output
//! - [`Endpoint`]: A validated API endpoint URL
//!
//! # Example
//!
//! ```rust
//! use fastly_api::{FastlyConfig, ApiToken, Endpoint};
//!
//! let config = FastlyConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .endpoint(Endpoint::new("https://api.fastly.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiToken, Endpoint};

use crate::error::ConfigError;

/// Environment variable holding the API token.
pub const API_TOKEN_ENV: &str = "FASTLY_API_TOKEN";

/// Environment variable overriding the API endpoint.
pub const API_URL_ENV: &str = "FASTLY_API_URL";

/// Configuration for the Fastly API SDK.
///
/// `FastlyConfig` is `Clone`, `Send`, and `Sync`, so a single configuration
/// can back any number of clients.
///
/// # Example
///
/// ```rust
/// use fastly_api::{FastlyConfig, ApiToken};
///
/// let config = FastlyConfig::builder()
///     .api_token(ApiToken::new("my-token").unwrap())
///     .user_agent_prefix("deploy-bot/2.1")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint().as_ref(), "https://api.fastly.com");
/// ```
#[derive(Clone, Debug)]
pub struct FastlyConfig {
    api_token: ApiToken,
    endpoint: Endpoint,
    user_agent_prefix: Option<String>,
}

impl FastlyConfig {
    /// Creates a new builder for constructing a `FastlyConfig`.
    #[must_use]
    pub fn builder() -> FastlyConfigBuilder {
        FastlyConfigBuilder::new()
    }

    /// Builds a configuration from `FASTLY_API_TOKEN` and, when set,
    /// `FASTLY_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if the token variable is unset,
    /// or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(API_TOKEN_ENV).map_err(|_| ConfigError::MissingEnvVar {
            name: API_TOKEN_ENV,
        })?;

        let mut builder = Self::builder().api_token(ApiToken::new(token)?);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.endpoint(Endpoint::new(url)?);
        }
        builder.build()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify FastlyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FastlyConfig>();
};

/// Builder for constructing [`FastlyConfig`] instances.
///
/// `api_token` is required. `endpoint` defaults to
/// [`Endpoint::DEFAULT`] and `user_agent_prefix` to `None`.
#[derive(Debug, Default)]
pub struct FastlyConfigBuilder {
    api_token: Option<ApiToken>,
    endpoint: Option<Endpoint>,
    user_agent_prefix: Option<String>,
}

impl FastlyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the API endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`FastlyConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` is not set.
    pub fn build(self) -> Result<FastlyConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField { field: "api_token" })?;

        Ok(FastlyConfig {
            api_token,
            endpoint: self.endpoint.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
