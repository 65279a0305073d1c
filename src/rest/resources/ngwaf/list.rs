//! NGWAF lists: named sets of IPs, countries, strings or signals that rule
//! conditions can refer to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{scope_in_path, scoped_path, ListParams, Page};
use crate::clients::RestClient;
use crate::rest::errors::{require, require_opt, require_some};
use crate::rest::{encode_query, resource, ApiError, Scope, ValidationError};

const COLLECTION: &str = "lists";

/// What the entries of a list are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    String,
    Wildcard,
    Ip,
    Country,
    Signal,
}

/// A list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct List {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub list_type: Option<ListType>,
    #[serde(default)]
    pub entries: Vec<String>,
    /// Identifier used to reference the list from rule conditions.
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub scope: Option<Scope>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input of [`List::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateListInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub list_type: Option<ListType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "scope_in_path")]
    pub scope: Option<Scope>,
}

impl CreateListInput {
    /// Checks name, type, entries, then scope.
    ///
    /// # Errors
    ///
    /// Returns the first missing field as a [`ValidationError`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_opt(self.name.as_deref(), ValidationError::MissingName)?;
        require_some(self.list_type.as_ref(), ValidationError::MissingType)?;
        require_some(self.entries.as_ref(), ValidationError::MissingEntries)?;
        require_some(self.scope.as_ref(), ValidationError::MissingScope)
    }
}

/// Input of [`List::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetListInput {
    pub list_id: String,
    pub scope: Option<Scope>,
}

/// Input of [`List::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListListsInput {
    pub scope: Option<Scope>,
    pub params: ListParams,
}

/// Input of [`List::update`]. The entries given replace the current ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateListInput {
    #[serde(skip)]
    pub list_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "scope_in_path")]
    pub scope: Option<Scope>,
}

/// Input of [`List::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteListInput {
    pub list_id: String,
    pub scope: Option<Scope>,
}

fn list_path(list_id: &str, scope: Option<&Scope>) -> Result<String, ApiError> {
    require(list_id, ValidationError::MissingListId)?;
    scoped_path(scope, COLLECTION, list_id)
}

impl List {
    /// Creates a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing name, type, entries or
    /// scope, [`ApiError::Scope`] for a malformed scope, otherwise any error
    /// of the round trip.
    pub async fn create(client: &RestClient, input: &CreateListInput) -> Result<Self, ApiError> {
        input.validate()?;
        let path = scoped_path(input.scope.as_ref(), COLLECTION, "")?;
        resource::post(client, &path, input).await
    }

    /// Fetches a list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing list id or scope,
    /// [`ApiError::Scope`] for a malformed scope, otherwise any error of the
    /// round trip.
    pub async fn get(client: &RestClient, input: &GetListInput) -> Result<Self, ApiError> {
        let path = list_path(&input.list_id, input.scope.as_ref())?;
        resource::get(client, &path, None).await
    }

    /// Lists one page of lists in a scope.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing scope,
    /// [`ApiError::Scope`] for a malformed one, otherwise any error of the
    /// round trip.
    pub async fn list(client: &RestClient, input: &ListListsInput) -> Result<Page<Self>, ApiError> {
        let path = scoped_path(input.scope.as_ref(), COLLECTION, "")?;
        let query = encode_query(&input.params)?;
        resource::get(client, &path, Some(query)).await
    }

    /// Updates a list.
    ///
    /// # Errors
    ///
    /// Same as [`List::get`].
    pub async fn update(client: &RestClient, input: &UpdateListInput) -> Result<Self, ApiError> {
        let path = list_path(&input.list_id, input.scope.as_ref())?;
        resource::patch(client, &path, input).await
    }

    /// Deletes a list.
    ///
    /// # Errors
    ///
    /// Same as [`List::get`]; any status but 204 is an error.
    pub async fn delete(client: &RestClient, input: &DeleteListInput) -> Result<(), ApiError> {
        let path = list_path(&input.list_id, input.scope.as_ref())?;
        resource::delete(client, &path).await
    }
}
