//! Services, the top-level delivery configuration objects.
//!
//! | Operation | Verb | Path |
//! |-----------|------|------|
//! | [`Service::create`] | POST | `/service` |
//! | [`Service::list`] | GET | `/service` |
//! | [`Service::get`] | GET | `/service/{id}` |
//! | [`Service::get_details`] | GET | `/service/{id}/details` |
//! | [`Service::update`] | PUT | `/service/{id}` |
//! | [`Service::delete`] | DELETE | `/service/{id}` |
//! | [`Service::search`] | GET | `/service/search?name=` |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PageParams, Version};
use crate::clients::RestClient;
use crate::rest::errors::require;
use crate::rest::{encode_query, join_path, resource, ApiError, ValidationError};

/// Whether a service runs VCL or a compiled Wasm package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Vcl,
    Wasm,
    #[serde(other)]
    Unknown,
}

/// A service as returned by create, get, list and search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default, rename = "type")]
    pub service_type: Option<ServiceType>,
    /// Number of the active version, if any.
    #[serde(default, rename = "version")]
    pub active_version: Option<u32>,
    #[serde(default)]
    pub versions: Vec<Version>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A service with its active and requested versions expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceDetail {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default, rename = "type")]
    pub service_type: Option<ServiceType>,
    #[serde(default)]
    pub active_version: Option<Version>,
    /// The requested version, or the latest one.
    #[serde(default)]
    pub version: Option<Version>,
    #[serde(default)]
    pub versions: Vec<Version>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input of [`Service::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateServiceInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
}

/// Input of [`Service::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetServiceInput {
    pub service_id: String,
}

/// Input of [`Service::get_details`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetServiceDetailsInput {
    #[serde(skip)]
    pub service_id: String,
    /// Version to expand instead of the latest one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// Input of [`Service::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListServicesInput {
    pub page: PageParams,
}

/// Input of [`Service::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateServiceInput {
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Input of [`Service::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteServiceInput {
    pub service_id: String,
}

/// Input of [`Service::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchServiceInput {
    pub name: String,
}

fn service_path(service_id: &str, tail: &[&str]) -> Result<String, ValidationError> {
    require(service_id, ValidationError::MissingServiceId)?;
    let mut segments = vec!["service", service_id];
    segments.extend_from_slice(tail);
    Ok(join_path(&segments))
}

impl Service {
    /// Creates a service.
    ///
    /// # Errors
    ///
    /// Returns any error of the round trip.
    pub async fn create(client: &RestClient, input: &CreateServiceInput) -> Result<Self, ApiError> {
        resource::post(client, &join_path(&["service"]), input).await
    }

    /// Fetches a service.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id, otherwise
    /// any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetServiceInput) -> Result<Self, ApiError> {
        let path = service_path(&input.service_id, &[])?;
        resource::get(client, &path, None).await
    }

    /// Fetches a service with its versions expanded.
    ///
    /// # Errors
    ///
    /// Same as [`Service::get`].
    pub async fn get_details(
        client: &RestClient,
        input: &GetServiceDetailsInput,
    ) -> Result<ServiceDetail, ApiError> {
        let path = service_path(&input.service_id, &["details"])?;
        let query = encode_query(input)?;
        resource::get(client, &path, Some(query)).await
    }

    /// Lists one page of services.
    ///
    /// # Errors
    ///
    /// Returns any error of the round trip.
    pub async fn list(client: &RestClient, input: &ListServicesInput) -> Result<Vec<Self>, ApiError> {
        let query = encode_query(&input.page)?;
        resource::get(client, &join_path(&["service"]), Some(query)).await
    }

    /// Renames a service or changes its comment.
    ///
    /// # Errors
    ///
    /// Same as [`Service::get`].
    pub async fn update(client: &RestClient, input: &UpdateServiceInput) -> Result<Self, ApiError> {
        let path = service_path(&input.service_id, &[])?;
        resource::put(client, &path, Some(input)).await
    }

    /// Deletes a service.
    ///
    /// # Errors
    ///
    /// Same as [`Service::get`]; any status but 204 is an error.
    pub async fn delete(client: &RestClient, input: &DeleteServiceInput) -> Result<(), ApiError> {
        let path = service_path(&input.service_id, &[])?;
        resource::delete(client, &path).await
    }

    /// Finds a service by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing name, otherwise any
    /// error of the round trip.
    pub async fn search(client: &RestClient, input: &SearchServiceInput) -> Result<Self, ApiError> {
        require(&input.name, ValidationError::MissingName)?;
        let query = encode_query(input)?;
        resource::get(client, &join_path(&["service", "search"]), Some(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_path() {
        assert_eq!(service_path("SVC", &[]).unwrap(), "/service/SVC");
        assert_eq!(
            service_path("SVC", &["details"]).unwrap(),
            "/service/SVC/details"
        );
        assert_eq!(
            service_path("", &[]),
            Err(ValidationError::MissingServiceId)
        );
    }

    #[test]
    fn test_create_service_body() {
        let input = CreateServiceInput {
            name: Some("my-site".to_string()),
            comment: None,
            service_type: Some(ServiceType::Wasm),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"name": "my-site", "type": "wasm"})
        );
    }

    #[test]
    fn test_service_detail_deserializes_versions() {
        let detail: ServiceDetail = serde_json::from_str(
            r#"{
                "id": "SVC",
                "name": "my-site",
                "type": "vcl",
                "active_version": {"number": 2, "active": true, "locked": true},
                "version": {"number": 3, "active": false, "locked": false},
                "versions": [{"number": 1}, {"number": 2}, {"number": 3}]
            }"#,
        )
        .unwrap();

        assert_eq!(detail.service_type, Some(ServiceType::Vcl));
        assert_eq!(detail.active_version.and_then(|v| v.number), Some(2));
        assert_eq!(detail.version.and_then(|v| v.number), Some(3));
        assert_eq!(detail.versions.len(), 3);
    }

    #[test]
    fn test_unknown_service_type_is_tolerated() {
        let service: Service = serde_json::from_str(r#"{"type":"edge"}"#).unwrap();
        assert_eq!(service.service_type, Some(ServiceType::Unknown));
    }

    #[test]
    fn test_details_query_holds_version_only() {
        let input = GetServiceDetailsInput {
            service_id: "SVC".to_string(),
            version: Some(4),
        };
        assert_eq!(
            encode_query(&input).unwrap(),
            vec![("version".to_string(), "4".to_string())]
        );
    }
}
