//! Access control lists of a service version.
//!
//! An ACL is a named container of IP entries (see
//! [`acl_entry`](super::acl_entry)). The container itself is versioned.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::delivery::{Acl, CreateAclInput};
//!
//! let acl = Acl::create(&client, &CreateAclInput {
//!     name: Some("test_acl".to_string()),
//!     service_id: "SVC123".to_string(),
//!     service_version: 3,
//! }).await?;
//! assert_eq!(acl.name.as_deref(), Some("test_acl"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{collection_path, named_path};
use crate::clients::RestClient;
use crate::rest::{resource, ApiError};

const COLLECTION: &str = "acl";

/// An access control list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Acl {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default, rename = "version")]
    pub service_version: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input of [`Acl::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAclInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub service_version: u32,
}

/// Input of [`Acl::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAclInput {
    pub name: String,
    pub service_id: String,
    pub service_version: u32,
}

/// Input of [`Acl::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAclsInput {
    pub service_id: String,
    pub service_version: u32,
}

/// Input of [`Acl::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateAclInput {
    /// Current name of the ACL.
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub service_version: u32,
}

/// Input of [`Acl::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteAclInput {
    pub name: String,
    pub service_id: String,
    pub service_version: u32,
}

impl Acl {
    /// Creates an ACL in a service version.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id or version,
    /// otherwise any error of the round trip.
    pub async fn create(client: &RestClient, input: &CreateAclInput) -> Result<Self, ApiError> {
        let path = collection_path(&input.service_id, input.service_version, COLLECTION)?;
        resource::post(client, &path, input).await
    }

    /// Fetches an ACL by name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing name, service id or
    /// version, otherwise any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetAclInput) -> Result<Self, ApiError> {
        let path = named_path(
            &input.name,
            &input.service_id,
            input.service_version,
            COLLECTION,
        )?;
        resource::get(client, &path, None).await
    }

    /// Lists the ACLs of a service version.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id or version,
    /// otherwise any error of the round trip.
    pub async fn list(client: &RestClient, input: &ListAclsInput) -> Result<Vec<Self>, ApiError> {
        let path = collection_path(&input.service_id, input.service_version, COLLECTION)?;
        resource::get(client, &path, None).await
    }

    /// Renames an ACL.
    ///
    /// # Errors
    ///
    /// Same as [`Acl::get`].
    pub async fn update(client: &RestClient, input: &UpdateAclInput) -> Result<Self, ApiError> {
        let path = named_path(
            &input.name,
            &input.service_id,
            input.service_version,
            COLLECTION,
        )?;
        resource::put(client, &path, Some(input)).await
    }

    /// Deletes an ACL.
    ///
    /// # Errors
    ///
    /// Same as [`Acl::get`]; any status but 204 is an error.
    pub async fn delete(client: &RestClient, input: &DeleteAclInput) -> Result<(), ApiError> {
        let path = named_path(
            &input.name,
            &input.service_id,
            input.service_version,
            COLLECTION,
        )?;
        resource::delete(client, &path).await
    }
}
