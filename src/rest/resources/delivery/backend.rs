//! Origin backends of a service version.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{collection_path, named_path};
use crate::clients::RestClient;
use crate::rest::{resource, ApiError};

const COLLECTION: &str = "backend";

/// An origin server the service fetches from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Backend {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub override_host: Option<String>,
    #[serde(default)]
    pub use_ssl: Option<bool>,
    #[serde(default)]
    pub ssl_cert_hostname: Option<String>,
    #[serde(default)]
    pub ssl_sni_hostname: Option<String>,
    #[serde(default)]
    pub connect_timeout: Option<u32>,
    #[serde(default)]
    pub first_byte_timeout: Option<u32>,
    #[serde(default)]
    pub between_bytes_timeout: Option<u32>,
    #[serde(default)]
    pub max_conn: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub auto_loadbalance: Option<bool>,
    #[serde(default)]
    pub shield: Option<String>,
    #[serde(default)]
    pub healthcheck: Option<String>,
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

/// Settable backend attributes, shared by create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackendAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_cert_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_sni_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_byte_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub between_bytes_timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_conn: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_loadbalance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthcheck: Option<String>,
}

/// Input of [`Backend::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateBackendInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub attributes: BackendAttributes,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub service_version: u32,
}

/// Input of [`Backend::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBackendInput {
    pub name: String,
    pub service_id: String,
    pub service_version: u32,
}

/// Input of [`Backend::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBackendsInput {
    pub service_id: String,
    pub service_version: u32,
}

/// Input of [`Backend::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateBackendInput {
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(flatten)]
    pub attributes: BackendAttributes,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub service_version: u32,
}

/// Input of [`Backend::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteBackendInput {
    pub name: String,
    pub service_id: String,
    pub service_version: u32,
}

impl Backend {
    /// Creates a backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id or version,
    /// otherwise any error of the round trip.
    pub async fn create(client: &RestClient, input: &CreateBackendInput) -> Result<Self, ApiError> {
        let path = collection_path(&input.service_id, input.service_version, COLLECTION)?;
        resource::post(client, &path, input).await
    }

    /// Fetches a backend by name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing name, service id or
    /// version, otherwise any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetBackendInput) -> Result<Self, ApiError> {
        let path = named_path(&input.name, &input.service_id, input.service_version, COLLECTION)?;
        resource::get(client, &path, None).await
    }

    /// Lists the backends of a service version.
    ///
    /// # Errors
    ///
    /// Same as [`Backend::create`].
    pub async fn list(
        client: &RestClient,
        input: &ListBackendsInput,
    ) -> Result<Vec<Self>, ApiError> {
        let path = collection_path(&input.service_id, input.service_version, COLLECTION)?;
        resource::get(client, &path, None).await
    }

    /// Updates a backend.
    ///
    /// # Errors
    ///
    /// Same as [`Backend::get`].
    pub async fn update(client: &RestClient, input: &UpdateBackendInput) -> Result<Self, ApiError> {
        let path = named_path(&input.name, &input.service_id, input.service_version, COLLECTION)?;
        resource::put(client, &path, Some(input)).await
    }

    /// Deletes a backend.
    ///
    /// # Errors
    ///
    /// Same as [`Backend::get`]; any status but 204 is an error.
    pub async fn delete(client: &RestClient, input: &DeleteBackendInput) -> Result<(), ApiError> {
        let path = named_path(&input.name, &input.service_id, input.service_version, COLLECTION)?;
        resource::delete(client, &path).await
    }
}
