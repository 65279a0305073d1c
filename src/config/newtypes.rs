//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction. Invalid values are
//! rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Fastly API token.
///
/// The token is sent in the `Fastly-Key` header of every request. Its value
/// is masked in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use fastly_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated API endpoint.
///
/// The endpoint must be an absolute `http` or `https` URL with a host. A
/// trailing slash is stripped so that request paths (which always begin with
/// `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use fastly_api::Endpoint;
///
/// let endpoint = Endpoint::new("https://api.fastly.com/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://api.fastly.com");
/// assert_eq!(endpoint.host_name(), "api.fastly.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl Endpoint {
    /// The production API endpoint.
    pub const DEFAULT: &'static str = "https://api.fastly.com";

    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidEndpoint { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_start >= host_end {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the endpoint.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            host_start: "https://".len(),
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_token_rejects_empty_string() {
        assert!(matches!(ApiToken::new(""), Err(ConfigError::EmptyApiToken)));
        assert!(matches!(ApiToken::new("   "), Err(ConfigError::EmptyApiToken)));
    }

    #[test]
    fn test_api_token_masks_value_in_debug() {
        let token = ApiToken::new("super-secret-token").unwrap();
        assert_eq!(format!("{token:?}"), "ApiToken(*****)");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let endpoint = Endpoint::new("https://api.fastly.com/").unwrap();
        assert_eq!(endpoint.as_ref(), "https://api.fastly.com");
    }

    #[test]
    fn test_endpoint_accepts_local_http_with_port() {
        let endpoint = Endpoint::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(endpoint.host_name(), "127.0.0.1");
        assert_eq!(endpoint.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_endpoint_rejects_missing_scheme() {
        assert!(matches!(
            Endpoint::new("api.fastly.com"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_endpoint_rejects_unsupported_scheme() {
        assert!(matches!(
            Endpoint::new("ftp://api.fastly.com"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_endpoint_rejects_empty_host() {
        assert!(matches!(
            Endpoint::new("https://"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Endpoint::new("https://:443"),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_default_endpoint_matches_constant() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint, Endpoint::new(Endpoint::DEFAULT).unwrap());
        assert_eq!(endpoint.host_name(), "api.fastly.com");
    }
}
