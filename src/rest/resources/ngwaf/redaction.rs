//! Redactions: request and response fields a workspace masks in its logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{workspace_path, ListParams, Page};
use crate::clients::RestClient;
use crate::rest::errors::{require, require_opt, require_some};
use crate::rest::{encode_query, resource, ApiError, ValidationError};

const COLLECTION: &str = "redactions";

/// Where the redacted field is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionType {
    RequestParameter,
    RequestHeader,
    ResponseHeader,
}

/// A redaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Redaction {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default, rename = "type")]
    pub redaction_type: Option<RedactionType>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input of [`Redaction::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateRedactionInput {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub redaction_type: Option<RedactionType>,
}

impl CreateRedactionInput {
    /// Checks workspace id, field, then type.
    ///
    /// # Errors
    ///
    /// Returns the first missing field as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.workspace_id, ValidationError::MissingWorkspaceId)?;
        require_opt(self.field.as_deref(), ValidationError::MissingField)?;
        require_some(self.redaction_type.as_ref(), ValidationError::MissingType)
    }
}

/// Input of [`Redaction::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRedactionInput {
    pub workspace_id: String,
    pub redaction_id: String,
}

/// Input of [`Redaction::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRedactionsInput {
    pub workspace_id: String,
    pub params: ListParams,
}

/// Input of [`Redaction::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRedactionInput {
    #[serde(skip)]
    pub workspace_id: String,
    #[serde(skip)]
    pub redaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub redaction_type: Option<RedactionType>,
}

/// Input of [`Redaction::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRedactionInput {
    pub workspace_id: String,
    pub redaction_id: String,
}

fn redaction_path(workspace_id: &str, redaction_id: &str) -> Result<String, ValidationError> {
    let path = workspace_path(workspace_id, COLLECTION, Some(redaction_id))?;
    require(redaction_id, ValidationError::MissingRedactionId)?;
    Ok(path)
}

impl Redaction {
    /// Creates a redaction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing workspace id, field or
    /// type, otherwise any error of the round trip.
    pub async fn create(
        client: &RestClient,
        input: &CreateRedactionInput,
    ) -> Result<Self, ApiError> {
        input.validate()?;
        let path = workspace_path(&input.workspace_id, COLLECTION, None)?;
        resource::post(client, &path, input).await
    }

    /// Fetches a redaction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing workspace or redaction
    /// id, otherwise any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetRedactionInput) -> Result<Self, ApiError> {
        let path = redaction_path(&input.workspace_id, &input.redaction_id)?;
        resource::get(client, &path, None).await
    }

    /// Lists one page of redactions.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing workspace id, otherwise
    /// any error of the round trip.
    pub async fn list(
        client: &RestClient,
        input: &ListRedactionsInput,
    ) -> Result<Page<Self>, ApiError> {
        let path = workspace_path(&input.workspace_id, COLLECTION, None)?;
        let query = encode_query(&input.params)?;
        resource::get(client, &path, Some(query)).await
    }

    /// Updates a redaction.
    ///
    /// # Errors
    ///
    /// Same as [`Redaction::get`].
    pub async fn update(
        client: &RestClient,
        input: &UpdateRedactionInput,
    ) -> Result<Self, ApiError> {
        let path = redaction_path(&input.workspace_id, &input.redaction_id)?;
        resource::patch(client, &path, input).await
    }

    /// Deletes a redaction.
    ///
    /// # Errors
    ///
    /// Same as [`Redaction::get`]; any status but 204 is an error.
    pub async fn delete(
        client: &RestClient,
        input: &DeleteRedactionInput,
    ) -> Result<(), ApiError> {
        let path = redaction_path(&input.workspace_id, &input.redaction_id)?;
        resource::delete(client, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_redaction_validation_order() {
        let mut input = CreateRedactionInput::default();
        assert_eq!(input.validate(), Err(ValidationError::MissingWorkspaceId));

        input.workspace_id = "ws1".to_string();
        assert_eq!(input.validate(), Err(ValidationError::MissingField));

        input.field = Some("password".to_string());
        assert_eq!(input.validate(), Err(ValidationError::MissingType));

        input.redaction_type = Some(RedactionType::RequestParameter);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_redaction_body() {
        let input = CreateRedactionInput {
            workspace_id: "ws1".to_string(),
            field: Some("authorization".to_string()),
            redaction_type: Some(RedactionType::RequestHeader),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({"field": "authorization", "type": "request_header"})
        );
    }

    #[test]
    fn test_redaction_path() {
        assert_eq!(
            redaction_path("ws1", "rd1").unwrap(),
            "/ngwaf/v1/workspaces/ws1/redactions/rd1"
        );
        assert_eq!(
            redaction_path("ws1", ""),
            Err(ValidationError::MissingRedactionId)
        );
    }
}
