//! NGWAF rules.
//!
//! A rule matches requests with [`Condition`]s and applies [`RuleAction`]s to
//! them. Rules are scoped: a workspace rule lives at
//! `/ngwaf/v1/workspaces/{id}/rules`, an account rule at `/ngwaf/v1/rules`.
//!
//! Required fields are checked before any I/O, first failure wins:
//!
//! - create: type, description, scope
//! - get, update and delete: rule id, scope
//!
//! ```rust
//! use fastly_api::rest::resources::ngwaf::CreateRuleInput;
//! use fastly_api::rest::ValidationError;
//!
//! assert_eq!(CreateRuleInput::default().validate(), Err(ValidationError::MissingType));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{scope_in_path, scoped_path, Condition, ListParams, Page};
use crate::clients::RestClient;
use crate::rest::errors::{require, require_opt, require_some};
use crate::rest::{encode_query, resource, ApiError, Scope, ValidationError};

const COLLECTION: &str = "rules";

/// What a rule reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    Request,
    Signal,
    RateLimit,
    TemplatedSignal,
}

/// An action taken when a rule matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleAction {
    /// `block`, `allow`, `exclude_signal`, `add_signal`, `redirect`, ...
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_interactive: Option<bool>,
}

/// Identifies the client a rate limit counts against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentifier {
    #[serde(rename = "type")]
    pub identifier_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Rate limit settings of a `rate_limit` rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRateLimit {
    pub signal: String,
    pub threshold: u32,
    /// Counting window, in seconds.
    pub interval: u32,
    /// How long the action applies, in seconds.
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub client_identifiers: Vec<ClientIdentifier>,
}

/// A rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub rule_type: Option<RuleType>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub group_operator: Option<String>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub actions: Vec<RuleAction>,
    #[serde(default)]
    pub rate_limit: Option<RuleRateLimit>,
    #[serde(default)]
    pub request_logging: Option<String>,
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input of [`Rule::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateRuleInput {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<RuleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_operator: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<RuleAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<RuleRateLimit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_logging: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "scope_in_path")]
    pub scope: Option<Scope>,
}

impl CreateRuleInput {
    /// Checks type, description, then scope.
    ///
    /// # Errors
    ///
    /// Returns the first missing field as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_some(self.rule_type.as_ref(), ValidationError::MissingType)?;
        require_opt(self.description.as_deref(), ValidationError::MissingDescription)?;
        require_some(self.scope.as_ref(), ValidationError::MissingScope)
    }
}

/// Input of [`Rule::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRuleInput {
    pub rule_id: String,
    pub scope: Option<Scope>,
}

/// Input of [`Rule::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRulesInput {
    pub scope: Option<Scope>,
    pub params: ListParams,
}

/// Input of [`Rule::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRuleInput {
    #[serde(skip)]
    pub rule_id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<RuleType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<RuleAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<RuleRateLimit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_logging: Option<String>,
    #[serde(skip_serializing_if = "scope_in_path")]
    pub scope: Option<Scope>,
}

/// Input of [`Rule::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRuleInput {
    pub rule_id: String,
    pub scope: Option<Scope>,
}

fn rule_path(rule_id: &str, scope: Option<&Scope>) -> Result<String, ApiError> {
    require(rule_id, ValidationError::MissingRuleId)?;
    scoped_path(scope, COLLECTION, rule_id)
}

impl Rule {
    /// Creates a rule.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing type, description or
    /// scope, [`ApiError::Scope`] for a malformed scope, otherwise any error
    /// of the round trip.
    pub async fn create(client: &RestClient, input: &CreateRuleInput) -> Result<Self, ApiError> {
        input.validate()?;
        let path = scoped_path(input.scope.as_ref(), COLLECTION, "")?;
        resource::post(client, &path, input).await
    }

    /// Fetches a rule.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing rule id or scope,
    /// [`ApiError::Scope`] for a malformed scope, otherwise any error of the
    /// round trip.
    pub async fn get(client: &RestClient, input: &GetRuleInput) -> Result<Self, ApiError> {
        let path = rule_path(&input.rule_id, input.scope.as_ref())?;
        resource::get(client, &path, None).await
    }

    /// Lists one page of rules in a scope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing scope,
    /// [`ApiError::Scope`] for a malformed one, otherwise any error of the
    /// round trip.
    pub async fn list(client: &RestClient, input: &ListRulesInput) -> Result<Page<Self>, ApiError> {
        let path = scoped_path(input.scope.as_ref(), COLLECTION, "")?;
        let query = encode_query(&input.params)?;
        resource::get(client, &path, Some(query)).await
    }

    /// Updates a rule.
    ///
    /// # Errors
    ///
    /// Same as [`Rule::get`].
    pub async fn update(client: &RestClient, input: &UpdateRuleInput) -> Result<Self, ApiError> {
        let path = rule_path(&input.rule_id, input.scope.as_ref())?;
        resource::patch(client, &path, input).await
    }

    /// Deletes a rule.
    ///
    /// # Errors
    ///
    /// Same as [`Rule::get`]; any status but 204 is an error.
    pub async fn delete(client: &RestClient, input: &DeleteRuleInput) -> Result<(), ApiError> {
        let path = rule_path(&input.rule_id, input.scope.as_ref())?;
        resource::delete(client, &path).await
    }
}
