//! Custom NGWAF signals, the tags rules attach to requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{scope_in_path, scoped_path, ListParams, Page};
use crate::clients::RestClient;
use crate::rest::errors::{require, require_opt, require_some};
use crate::rest::{encode_query, resource, ApiError, Scope, ValidationError};

const COLLECTION: &str = "signals";

/// A custom signal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Signal {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier used to reference the signal from rules, e.g. `site.bad-bot`.
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input of [`Signal::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateSignalInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "scope_in_path")]
    pub scope: Option<Scope>,
}

impl CreateSignalInput {
    /// Checks name, then scope.
    ///
    /// # Errors
    ///
    /// Returns the first missing field as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_opt(self.name.as_deref(), ValidationError::MissingName)?;
        require_some(self.scope.as_ref(), ValidationError::MissingScope)
    }
}

/// Input of [`Signal::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSignalInput {
    pub signal_id: String,
    pub scope: Option<Scope>,
}

/// Input of [`Signal::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSignalsInput {
    pub scope: Option<Scope>,
    pub params: ListParams,
}

/// Input of [`Signal::update`]. Only the description can change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateSignalInput {
    #[serde(skip)]
    pub signal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub scope: Option<Scope>,
}

/// Input of [`Signal::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteSignalInput {
    pub signal_id: String,
    pub scope: Option<Scope>,
}

fn signal_path(signal_id: &str, scope: Option<&Scope>) -> Result<String, ApiError> {
    require(signal_id, ValidationError::MissingSignalId)?;
    scoped_path(scope, COLLECTION, signal_id)
}

impl Signal {
    /// Creates a signal.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing name or scope,
    /// [`ApiError::Scope`] for a malformed scope, otherwise any error of the
    /// round trip.
    pub async fn create(client: &RestClient, input: &CreateSignalInput) -> Result<Self, ApiError> {
        input.validate()?;
        let path = scoped_path(input.scope.as_ref(), COLLECTION, "")?;
        resource::post(client, &path, input).await
    }

    /// Fetches a signal.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing signal id or scope,
    /// [`ApiError::Scope`] for a malformed scope, otherwise any error of the
    /// round trip.
    pub async fn get(client: &RestClient, input: &GetSignalInput) -> Result<Self, ApiError> {
        let path = signal_path(&input.signal_id, input.scope.as_ref())?;
        resource::get(client, &path, None).await
    }

    /// Lists one page of signals in a scope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing scope,
    /// [`ApiError::Scope`] for a malformed one, otherwise any error of the
    /// round trip.
    pub async fn list(
        client: &RestClient,
        input: &ListSignalsInput,
    ) -> Result<Page<Self>, ApiError> {
        let path = scoped_path(input.scope.as_ref(), COLLECTION, "")?;
        let query = encode_query(&input.params)?;
        resource::get(client, &path, Some(query)).await
    }

    /// Changes the description of a signal.
    ///
    /// # Errors
    ///
    /// Same as [`Signal::get`].
    pub async fn update(client: &RestClient, input: &UpdateSignalInput) -> Result<Self, ApiError> {
        let path = signal_path(&input.signal_id, input.scope.as_ref())?;
        resource::patch(client, &path, input).await
    }

    /// Deletes a signal.
    ///
    /// # Errors
    ///
    /// Same as [`Signal::get`]; any status but 204 is an error.
    pub async fn delete(client: &RestClient, input: &DeleteSignalInput) -> Result<(), ApiError> {
        let path = signal_path(&input.signal_id, input.scope.as_ref())?;
        resource::delete(client, &path).await
    }
}
