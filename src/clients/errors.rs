//! HTTP-specific error types for the Fastly API SDK.
//!
//! - [`HttpResponseError`]: Non-2xx responses (or a non-204 answer to a
//!   delete), carrying the status code and the message parsed from the body
//! - [`InvalidHttpRequestError`]: A request that failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::clients::{HttpError, HttpRequest, HttpMethod};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) if e.is_not_found() => println!("gone"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

/// One entry of a JSON:API style `errors` array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Short summary of the problem.
    pub title: Option<String>,
    /// Human-readable explanation.
    pub detail: Option<String>,
    /// Application-specific error code.
    pub code: Option<String>,
    /// Identifier of this occurrence.
    pub id: Option<String>,
}

impl ErrorDetail {
    fn from_value(value: &Value) -> Self {
        let text = |key: &str| match value.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Self {
            title: text("title"),
            detail: text("detail"),
            code: text("code"),
            id: text("id"),
        }
    }
}

/// Error returned when the API answers with an unsuccessful status.
///
/// The API reports errors in three shapes, all of which are understood:
///
/// - legacy: `{"msg": "...", "detail": "..."}`
/// - problem details: `{"title": "...", "detail": "...", "status": 404}`
/// - JSON:API: `{"errors": [{"title": "...", "detail": "..."}]}`
///
/// When the body carries none of these, `message` falls back to the
/// canonical reason phrase of the status code.
///
/// # Example
///
/// ```rust
/// use fastly_api::clients::HttpResponseError;
///
/// let error = HttpResponseError::from_body(404, r#"{"msg":"Record not found","detail":"Couldn't find Acl"}"#);
/// assert!(error.is_not_found());
/// assert_eq!(error.message, "Record not found");
/// assert_eq!(error.detail.as_deref(), Some("Couldn't find Acl"));
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
    "{message} (status {code}){}",
    .detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
)]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The error message.
    pub message: String,
    /// Additional detail, when the API supplied it.
    pub detail: Option<String>,
    /// Individual errors from a JSON:API `errors` array.
    pub errors: Vec<ErrorDetail>,
}

impl HttpResponseError {
    /// Builds an error from a status code and a raw response body.
    #[must_use]
    pub fn from_body(code: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();

        let mut message = None;
        let mut detail = None;
        let mut errors = Vec::new();

        if let Some(value) = &parsed {
            if let Some(items) = value.get("errors").and_then(Value::as_array) {
                errors = items.iter().map(ErrorDetail::from_value).collect();
            }
            message = value
                .get("msg")
                .or_else(|| value.get("title"))
                .and_then(Value::as_str)
                .map(ToString::to_string);
            detail = value
                .get("detail")
                .and_then(Value::as_str)
                .map(ToString::to_string);
        }

        if message.is_none() {
            if let Some(first) = errors.first() {
                message.clone_from(&first.title);
                if detail.is_none() {
                    detail.clone_from(&first.detail);
                }
            }
        }

        let message = message.unwrap_or_else(|| {
            reqwest::StatusCode::from_u16(code)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("Unknown error")
                .to_string()
        });

        Self {
            code,
            message,
            detail,
            errors,
        }
    }

    /// Returns `true` for HTTP 400.
    #[must_use]
    pub const fn is_bad_request(&self) -> bool {
        self.code == 400
    }

    /// Returns `true` for HTTP 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.code == 401
    }

    /// Returns `true` for HTTP 403.
    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        self.code == 403
    }

    /// Returns `true` for HTTP 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }

    /// Returns `true` for HTTP 409.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        self.code == 409
    }

    /// Returns `true` for HTTP 429.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        self.code == 429
    }

    /// Returns `true` for any 5xx status.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500 && self.code <= 599
    }
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before anything is sent.
///
/// # Example
///
/// ```rust
/// use fastly_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "get".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot send a body with a get request.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The path is empty or not absolute.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with a {method} request.")]
    BodyNotAllowed {
        /// The HTTP method of the request.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the response error, if the API answered at all.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Response(e) => Some(e),
            _ => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
    assert_send_sync::<HttpResponseError>();
};
