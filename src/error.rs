//! Error types for SDK configuration.
//!
//! This module contains the error type returned while building a
//! [`FastlyConfig`](crate::FastlyConfig) and its validated newtypes.
//! Errors raised by API calls live in [`rest::ApiError`](crate::rest::ApiError).
//!
//! # Example
//!
//! ```rust
//! use fastly_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Fastly API token.")]
    EmptyApiToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint '{url}'. Expected an absolute http(s) URL (e.g., 'https://api.fastly.com').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// An environment variable required by [`FastlyConfig::from_env`](crate::FastlyConfig::from_env) is unset.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The name of the variable.
        name: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_token_error_message() {
        let message = ConfigError::EmptyApiToken.to_string();
        assert!(message.contains("API token cannot be empty"));
        assert!(message.contains("valid Fastly API token"));
    }

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            url: "api.fastly.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("api.fastly.com"));
        assert!(message.contains("absolute http(s) URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_token" };
        let message = error.to_string();
        assert!(message.contains("api_token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiToken;
        let _: &dyn std::error::Error = &error;
    }
}
