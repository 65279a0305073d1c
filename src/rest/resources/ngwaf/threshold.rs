//! Signal thresholds of a workspace.
//!
//! A threshold acts on an IP once it produced `limit` occurrences of a signal
//! within `interval` seconds, for `duration` seconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{workspace_path, ListParams, Page};
use crate::clients::RestClient;
use crate::rest::errors::{require, require_opt, require_some};
use crate::rest::{encode_query, resource, ApiError, ValidationError};

const COLLECTION: &str = "thresholds";

/// What happens once a threshold is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdAction {
    Block,
    Log,
}

/// A threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Threshold {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub signal: Option<String>,
    #[serde(default)]
    pub action: Option<ThresholdAction>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub interval: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub dont_notify: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input of [`Threshold::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateThresholdInput {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ThresholdAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dont_notify: Option<bool>,
}

impl CreateThresholdInput {
    /// Checks workspace id, then action, duration, interval, limit, name and
    /// signal.
    ///
    /// # Errors
    ///
    /// Returns the first missing field as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.workspace_id, ValidationError::MissingWorkspaceId)?;
        require_some(self.action.as_ref(), ValidationError::MissingAction)?;
        require_some(self.duration.as_ref(), ValidationError::MissingDuration)?;
        require_some(self.interval.as_ref(), ValidationError::MissingInterval)?;
        require_some(self.limit.as_ref(), ValidationError::MissingLimit)?;
        require_opt(self.name.as_deref(), ValidationError::MissingName)?;
        require_opt(self.signal.as_deref(), ValidationError::MissingSignal)
    }
}

/// Input of [`Threshold::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetThresholdInput {
    pub workspace_id: String,
    pub threshold_id: String,
}

/// Input of [`Threshold::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListThresholdsInput {
    pub workspace_id: String,
    pub params: ListParams,
}

/// Input of [`Threshold::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateThresholdInput {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip)]
    pub threshold_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ThresholdAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dont_notify: Option<bool>,
}

/// Input of [`Threshold::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteThresholdInput {
    pub workspace_id: String,
    pub threshold_id: String,
}

fn threshold_path(workspace_id: &str, threshold_id: &str) -> Result<String, ValidationError> {
    let path = workspace_path(workspace_id, COLLECTION, Some(threshold_id))?;
    require(threshold_id, ValidationError::MissingThresholdId)?;
    Ok(path)
}

impl Threshold {
    /// Creates a threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for the first missing required field,
    /// otherwise any error of the round trip.
    pub async fn create(
        client: &RestClient,
        input: &CreateThresholdInput,
    ) -> Result<Self, ApiError> {
        input.validate()?;
        let path = workspace_path(&input.workspace_id, COLLECTION, None)?;
        resource::post(client, &path, input).await
    }

    /// Fetches a threshold.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing workspace or threshold
    /// id, otherwise any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetThresholdInput) -> Result<Self, ApiError> {
        let path = threshold_path(&input.workspace_id, &input.threshold_id)?;
        resource::get(client, &path, None).await
    }

    /// Lists one page of thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing workspace id, otherwise
    /// any error of the round trip.
    pub async fn list(
        client: &RestClient,
        input: &ListThresholdsInput,
    ) -> Result<Page<Self>, ApiError> {
        let path = workspace_path(&input.workspace_id, COLLECTION, None)?;
        let query = encode_query(&input.params)?;
        resource::get(client, &path, Some(query)).await
    }

    /// Updates a threshold.
    ///
    /// # Errors
    ///
    /// Same as [`Threshold::get`].
    pub async fn update(
        client: &RestClient,
        input: &UpdateThresholdInput,
    ) -> Result<Self, ApiError> {
        let path = threshold_path(&input.workspace_id, &input.threshold_id)?;
        resource::patch(client, &path, input).await
    }

    /// Deletes a threshold.
    ///
    /// # Errors
    ///
    /// Same as [`Threshold::get`]; any status but 204 is an error.
    pub async fn delete(
        client: &RestClient,
        input: &DeleteThresholdInput,
    ) -> Result<(), ApiError> {
        let path = threshold_path(&input.workspace_id, &input.threshold_id)?;
        resource::delete(client, &path).await
    }
}
