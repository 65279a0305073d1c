//! Domains served by a service version.

use serde::{Deserialize, Serialize};

use super::{collection_path, named_path};
use crate::clients::RestClient;
use crate::rest::{resource, ApiError};

const COLLECTION: &str = "domain";

/// A host name routed to the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Domain {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default, rename = "version")]
    pub service_version: Option<u32>,
}

/// Input of [`Domain::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDomainInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub service_version: u32,
}

/// Input of [`Domain::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDomainInput {
    pub name: String,
    pub service_id: String,
    pub service_version: u32,
}

/// Input of [`Domain::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDomainsInput {
    pub service_id: String,
    pub service_version: u32,
}

/// Input of [`Domain::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateDomainInput {
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub service_version: u32,
}

/// Input of [`Domain::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDomainInput {
    pub name: String,
    pub service_id: String,
    pub service_version: u32,
}

impl Domain {
    /// Adds a domain to a service version.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id or version,
    /// otherwise any error of the round trip.
    pub async fn create(client: &RestClient, input: &CreateDomainInput) -> Result<Self, ApiError> {
        let path = collection_path(&input.service_id, input.service_version, COLLECTION)?;
        resource::post(client, &path, input).await
    }

    /// Fetches a domain by name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing name, service id or
    /// version, otherwise any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetDomainInput) -> Result<Self, ApiError> {
        let path = named_path(&input.name, &input.service_id, input.service_version, COLLECTION)?;
        resource::get(client, &path, None).await
    }

    /// Lists the domains of a service version.
    ///
    /// # Errors
    ///
    /// Same as [`Domain::create`].
    pub async fn list(client: &RestClient, input: &ListDomainsInput) -> Result<Vec<Self>, ApiError> {
        let path = collection_path(&input.service_id, input.service_version, COLLECTION)?;
        resource::get(client, &path, None).await
    }

    /// Renames a domain or changes its comment.
    ///
    /// # Errors
    ///
    /// Same as [`Domain::get`].
    pub async fn update(client: &RestClient, input: &UpdateDomainInput) -> Result<Self, ApiError> {
        let path = named_path(&input.name, &input.service_id, input.service_version, COLLECTION)?;
        resource::put(client, &path, Some(input)).await
    }

    /// Removes a domain.
    ///
    /// # Errors
    ///
    /// Same as [`Domain::get`]; any status but 204 is an error.
    pub async fn delete(client: &RestClient, input: &DeleteDomainInput) -> Result<(), ApiError> {
        let path = named_path(&input.name, &input.service_id, input.service_version, COLLECTION)?;
        resource::delete(client, &path).await
    }
}
