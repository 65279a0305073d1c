//! Error types for resource operations.
//!
//! Every operation in [`crate::rest`] returns [`ApiError`]. Its variants
//! separate failures that happen before any I/O (a missing required field,
//! an invalid NGWAF scope) from those of the round trip itself (transport,
//! non-2xx status, undecodable body).
//!
//! # Validation sentinels
//!
//! Required fields are checked in a fixed order and the first missing one
//! wins. Each has its own [`ValidationError`] variant so callers can match on
//! it exactly:
//!
//! ```rust
//! use fastly_api::rest::{ApiError, ValidationError};
//!
//! let error = ApiError::from(ValidationError::MissingServiceId);
//! assert_eq!(error.validation(), Some(ValidationError::MissingServiceId));
//! assert_eq!(error.to_string(), "missing required field 'ServiceID'");
//! ```

use crate::clients::{HttpError, HttpResponseError};
use thiserror::Error;

/// A required input field was left at its empty or zero value.
///
/// Raised before any network I/O. The variants are sentinels: compare with
/// `==` rather than inspecting the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("missing required field 'ServiceID'")]
    MissingServiceId,
    #[error("missing required field 'ServiceVersion'")]
    MissingServiceVersion,
    #[error("missing required field 'Name'")]
    MissingName,
    #[error("missing required field 'ID'")]
    MissingId,
    #[error("missing required field 'ProductID'")]
    MissingProductId,
    #[error("missing required field 'ACLID'")]
    MissingAclId,
    #[error("missing required field 'EntryID'")]
    MissingEntryId,
    #[error("missing required field 'DictionaryID'")]
    MissingDictionaryId,
    #[error("missing required field 'ItemKey'")]
    MissingItemKey,
    #[error("missing required field 'Entries'")]
    MissingEntries,
    #[error("missing required field 'Items'")]
    MissingItems,
    #[error("missing required field 'Address'")]
    MissingAddress,
    #[error("missing required field 'IP'")]
    MissingIp,
    #[error("missing required field 'Query'")]
    MissingQuery,
    #[error("missing required field 'WorkspaceID'")]
    MissingWorkspaceId,
    #[error("missing required field 'RuleID'")]
    MissingRuleId,
    #[error("missing required field 'ListID'")]
    MissingListId,
    #[error("missing required field 'SignalID'")]
    MissingSignalId,
    #[error("missing required field 'ThresholdID'")]
    MissingThresholdId,
    #[error("missing required field 'RedactionID'")]
    MissingRedactionId,
    #[error("missing required field 'Type'")]
    MissingType,
    #[error("missing required field 'Description'")]
    MissingDescription,
    #[error("missing required field 'Scope'")]
    MissingScope,
    #[error("missing required field 'Mode'")]
    MissingMode,
    #[error("missing required field 'Field'")]
    MissingField,
    #[error("missing required field 'Action'")]
    MissingAction,
    #[error("missing required field 'Duration'")]
    MissingDuration,
    #[error("missing required field 'Interval'")]
    MissingInterval,
    #[error("missing required field 'Limit'")]
    MissingLimit,
    #[error("missing required field 'Signal'")]
    MissingSignal,
}

/// The NGWAF scope could not be turned into a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// No scope was supplied to a scoped operation.
    #[error("scope is required")]
    Required,

    /// A workspace scope must name exactly one workspace.
    #[error("workspace scope requires exactly one workspace id, got {count}")]
    WorkspaceCount {
        /// The number of ids found in `applies_to`.
        count: usize,
    },

    /// The single workspace id was empty.
    #[error("workspace scope requires a non-empty workspace id")]
    EmptyWorkspaceId,

    /// The scope type string is neither `workspace` nor `account`.
    #[error("unsupported scope type: {value}")]
    UnsupportedType {
        /// The rejected type string.
        value: String,
    },
}

/// Error type returned by every resource operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required input field was missing. No request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The NGWAF scope was missing or malformed. No request was sent.
    #[error(transparent)]
    Scope(#[from] ScopeError),

    /// The request failed in transport or the API answered with an error.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body was not the expected JSON document.
    #[error("failed to decode json response: {source}")]
    Decode {
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The input could not be serialized into a body or query string.
    #[error("failed to encode request: {source}")]
    Encode {
        /// The underlying encoder error.
        #[source]
        source: serde_json::Error,
    },
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<ValidationError>();
    assert_send_sync::<ScopeError>();
};

impl From<HttpResponseError> for ApiError {
    fn from(error: HttpResponseError) -> Self {
        Self::Http(HttpError::Response(error))
    }
}

impl ApiError {
    /// Returns the validation sentinel, if this is a validation failure.
    #[must_use]
    pub const fn validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(e) => Some(*e),
            _ => None,
        }
    }

    /// Returns the remote API error, if the server answered with one.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponseError> {
        match self {
            Self::Http(e) => e.response(),
            _ => None,
        }
    }

    /// Returns the HTTP status code of a remote API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|e| e.code)
    }

    /// Returns `true` if the API answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.response().is_some_and(HttpResponseError::is_not_found)
    }

    /// Returns `true` if the API answered 429.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.response()
            .is_some_and(HttpResponseError::is_rate_limited)
    }
}

/// Fails with `error` when `value` is empty.
pub(crate) fn require(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}

/// Fails with `error` when the optional string is absent or empty.
pub(crate) fn require_opt(
    value: Option<&str>,
    error: ValidationError,
) -> Result<(), ValidationError> {
    require(value.unwrap_or_default(), error)
}

/// Fails with [`ValidationError::MissingServiceVersion`] on version 0.
pub(crate) const fn require_version(version: u32) -> Result<(), ValidationError> {
    if version == 0 {
        Err(ValidationError::MissingServiceVersion)
    } else {
        Ok(())
    }
}

/// Fails with `error` when the optional value is absent.
pub(crate) const fn require_some<T>(
    value: Option<&T>,
    error: ValidationError,
) -> Result<(), ValidationError> {
    if value.is_none() {
        Err(error)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages_name_the_field() {
        assert_eq!(
            ValidationError::MissingServiceVersion.to_string(),
            "missing required field 'ServiceVersion'"
        );
        assert_eq!(
            ValidationError::MissingProductId.to_string(),
            "missing required field 'ProductID'"
        );
    }

    #[test]
    fn test_scope_error_messages() {
        assert_eq!(ScopeError::Required.to_string(), "scope is required");
        let error = ScopeError::UnsupportedType {
            value: "team".to_string(),
        };
        assert!(error.to_string().starts_with("unsupported scope type"));
        assert!(error.to_string().contains("team"));
    }

    #[test]
    fn test_api_error_wraps_validation_transparently() {
        let error: ApiError = ValidationError::MissingName.into();
        assert_eq!(error.to_string(), "missing required field 'Name'");
        assert_eq!(error.validation(), Some(ValidationError::MissingName));
        assert!(error.response().is_none());
    }

    #[test]
    fn test_api_error_decode_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ApiError::Decode { source };
        assert!(error
            .to_string()
            .starts_with("failed to decode json response"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_api_error_status_predicates() {
        let error: ApiError = HttpResponseError::from_body(404, "").into();
        assert!(error.is_not_found());
        assert!(!error.is_rate_limited());
        assert_eq!(error.status(), Some(404));

        let error: ApiError = HttpResponseError::from_body(429, "").into();
        assert!(error.is_rate_limited());
    }

    #[test]
    fn test_require_helpers() {
        assert_eq!(
            require("", ValidationError::MissingId),
            Err(ValidationError::MissingId)
        );
        assert!(require("x", ValidationError::MissingId).is_ok());
        assert_eq!(
            require_opt(Some(""), ValidationError::MissingName),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            require_opt(None, ValidationError::MissingName),
            Err(ValidationError::MissingName)
        );
        assert!(require_opt(Some("a"), ValidationError::MissingName).is_ok());
        assert_eq!(
            require_version(0),
            Err(ValidationError::MissingServiceVersion)
        );
        assert!(require_version(7).is_ok());
        assert_eq!(
            require_some::<u32>(None, ValidationError::MissingLimit),
            Err(ValidationError::MissingLimit)
        );
    }
}
