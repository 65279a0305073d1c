//! NGWAF workspaces.
//!
//! A workspace groups the protection settings applied to one or more
//! services. Workspace-scoped rules, lists and signals, as well as thresholds
//! and redactions, live under `/ngwaf/v1/workspaces/{workspace_id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ListParams, Page};
use crate::clients::RestClient;
use crate::rest::errors::{require, require_opt, require_some};
use crate::rest::{encode_query, join_path, resource, ApiError, ValidationError, NGWAF_PREFIX};

/// What the workspace does with requests matching a blocking decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceMode {
    Block,
    Log,
    Off,
}

/// Attack signal counts that flag an IP, per time window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackSignalThresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_minute: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ten_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immediate: Option<bool>,
}

/// A workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Workspace {
    #[serde(default, alias = "workspace_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub mode: Option<WorkspaceMode>,
    #[serde(default)]
    pub attack_signal_thresholds: Option<AttackSignalThresholds>,
    #[serde(default)]
    pub ip_anonymization: Option<String>,
    #[serde(default)]
    pub client_ip_headers: Vec<String>,
    #[serde(default)]
    pub default_blocking_response_code: Option<u16>,
    #[serde(default)]
    pub default_redirect_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Settable workspace attributes, shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkspaceAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_signal_thresholds: Option<AttackSignalThresholds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_anonymization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ip_headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_blocking_response_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_redirect_url: Option<String>,
}

/// Input of [`Workspace::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateWorkspaceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<WorkspaceMode>,
    #[serde(flatten)]
    pub attributes: WorkspaceAttributes,
}

/// Input of [`Workspace::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetWorkspaceInput {
    pub workspace_id: String,
}

/// Input of [`Workspace::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWorkspacesInput {
    pub params: ListParams,
}

/// Input of [`Workspace::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWorkspaceInput {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<WorkspaceMode>,
    #[serde(flatten)]
    pub attributes: WorkspaceAttributes,
}

/// Input of [`Workspace::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteWorkspaceInput {
    pub workspace_id: String,
}

fn workspaces_path() -> String {
    let mut segments: Vec<&str> = NGWAF_PREFIX.to_vec();
    segments.push("workspaces");
    join_path(&segments)
}

fn workspace_path(workspace_id: &str) -> Result<String, ValidationError> {
    require(workspace_id, ValidationError::MissingWorkspaceId)?;
    let mut segments: Vec<&str> = NGWAF_PREFIX.to_vec();
    segments.extend(["workspaces", workspace_id]);
    Ok(join_path(&segments))
}

impl Workspace {
    /// Creates a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing name or mode, otherwise
    /// any error of the round trip.
    pub async fn create(
        client: &RestClient,
        input: &CreateWorkspaceInput,
    ) -> Result<Self, ApiError> {
        require_opt(input.name.as_deref(), ValidationError::MissingName)?;
        require_some(input.mode.as_ref(), ValidationError::MissingMode)?;
        resource::post(client, &workspaces_path(), input).await
    }

    /// Fetches a workspace.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing workspace id, otherwise
    /// any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetWorkspaceInput) -> Result<Self, ApiError> {
        let path = workspace_path(&input.workspace_id)?;
        resource::get(client, &path, None).await
    }

    /// Lists one page of workspaces.
    ///
    /// # Errors
    ///
    /// Returns any error of the round trip.
    pub async fn list(
        client: &RestClient,
        input: &ListWorkspacesInput,
    ) -> Result<Page<Self>, ApiError> {
        let query = encode_query(&input.params)?;
        resource::get(client, &workspaces_path(), Some(query)).await
    }

    /// Updates a workspace.
    ///
    /// # Errors
    ///
    /// Same as [`Workspace::get`].
    pub async fn update(
        client: &RestClient,
        input: &UpdateWorkspaceInput,
    ) -> Result<Self, ApiError> {
        let path = workspace_path(&input.workspace_id)?;
        resource::patch(client, &path, input).await
    }

    /// Deletes a workspace.
    ///
    /// # Errors
    ///
    /// Same as [`Workspace::get`]; any status but 204 is an error.
    pub async fn delete(client: &RestClient, input: &DeleteWorkspaceInput) -> Result<(), ApiError> {
        let path = workspace_path(&input.workspace_id)?;
        resource::delete(client, &path).await
    }
}
