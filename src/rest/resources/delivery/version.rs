//! Versions of a service and their lifecycle actions.
//!
//! Configuration is edited on an unlocked version, which is then validated,
//! activated and (implicitly) locked. The action endpoints take no body:
//!
//! ```text
//! PUT /service/{service_id}/version/{number}/{activate|deactivate|clone|lock}
//! GET /service/{service_id}/version/{number}/validate
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::errors::{require, require_version};
use crate::rest::{join_path, resource, ApiError, ValidationError};

/// One version of a service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Version {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub locked: Option<bool>,
    #[serde(default)]
    pub deployed: Option<bool>,
    #[serde(default)]
    pub staging: Option<bool>,
    #[serde(default)]
    pub testing: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Outcome of [`Version::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VersionValidation {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl VersionValidation {
    /// Returns `true` if the configuration passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == "ok"
    }
}

/// Input of [`Version::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateVersionInput {
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Input of [`Version::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVersionsInput {
    pub service_id: String,
}

/// Input of [`Version::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetVersionInput {
    pub service_id: String,
    pub service_version: u32,
}

/// Input of [`Version::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateVersionInput {
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub service_version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Input of the version actions: activate, deactivate, clone, lock and
/// validate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionActionInput {
    pub service_id: String,
    pub service_version: u32,
}

fn versions_path(service_id: &str) -> Result<String, ValidationError> {
    require(service_id, ValidationError::MissingServiceId)?;
    Ok(join_path(&["service", service_id, "version"]))
}

fn version_path(
    service_id: &str,
    service_version: u32,
    action: Option<&str>,
) -> Result<String, ValidationError> {
    require(service_id, ValidationError::MissingServiceId)?;
    require_version(service_version)?;
    let number = service_version.to_string();
    let mut segments = vec!["service", service_id, "version", number.as_str()];
    segments.extend(action);
    Ok(join_path(&segments))
}

impl Version {
    /// Creates an empty, unlocked version.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id, otherwise
    /// any error of the round trip.
    pub async fn create(client: &RestClient, input: &CreateVersionInput) -> Result<Self, ApiError> {
        let path = versions_path(&input.service_id)?;
        resource::post(client, &path, input).await
    }

    /// Lists every version of a service.
    ///
    /// # Errors
    ///
    /// Same as [`Version::create`].
    pub async fn list(client: &RestClient, input: &ListVersionsInput) -> Result<Vec<Self>, ApiError> {
        let path = versions_path(&input.service_id)?;
        resource::get(client, &path, None).await
    }

    /// Fetches one version.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id or version,
    /// otherwise any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetVersionInput) -> Result<Self, ApiError> {
        let path = version_path(&input.service_id, input.service_version, None)?;
        resource::get(client, &path, None).await
    }

    /// Changes the comment of a version.
    ///
    /// # Errors
    ///
    /// Same as [`Version::get`].
    pub async fn update(client: &RestClient, input: &UpdateVersionInput) -> Result<Self, ApiError> {
        let path = version_path(&input.service_id, input.service_version, None)?;
        resource::put(client, &path, Some(input)).await
    }

    /// Activates a version, deactivating the current one.
    ///
    /// # Errors
    ///
    /// Same as [`Version::get`].
    pub async fn activate(client: &RestClient, input: &VersionActionInput) -> Result<Self, ApiError> {
        Self::action(client, input, "activate").await
    }

    /// Deactivates a version.
    ///
    /// # Errors
    ///
    /// Same as [`Version::get`].
    pub async fn deactivate(
        client: &RestClient,
        input: &VersionActionInput,
    ) -> Result<Self, ApiError> {
        Self::action(client, input, "deactivate").await
    }

    /// Copies a version into a new, unlocked one.
    ///
    /// # Errors
    ///
    /// Same as [`Version::get`].
    pub async fn clone_version(
        client: &RestClient,
        input: &VersionActionInput,
    ) -> Result<Self, ApiError> {
        Self::action(client, input, "clone").await
    }

    /// Locks a version against further edits.
    ///
    /// # Errors
    ///
    /// Same as [`Version::get`].
    pub async fn lock(client: &RestClient, input: &VersionActionInput) -> Result<Self, ApiError> {
        Self::action(client, input, "lock").await
    }

    /// Checks a version's configuration without activating it.
    ///
    /// # Errors
    ///
    /// Same as [`Version::get`]. An invalid configuration is not an error:
    /// inspect [`VersionValidation::is_valid`].
    pub async fn validate(
        client: &RestClient,
        input: &VersionActionInput,
    ) -> Result<VersionValidation, ApiError> {
        let path = version_path(&input.service_id, input.service_version, Some("validate"))?;
        resource::get(client, &path, None).await
    }

    async fn action(
        client: &RestClient,
        input: &VersionActionInput,
        action: &str,
    ) -> Result<Self, ApiError> {
        let path = version_path(&input.service_id, input.service_version, Some(action))?;
        resource::put_empty(client, &path).await
    }
}
