//! Resources of the delivery (legacy) API.
//!
//! Configuration objects such as ACLs, backends, dictionaries and domains
//! belong to one version of one service and are addressed by name:
//!
//! ```text
//! /service/{service_id}/version/{version}/{collection}[/{name}]
//! ```
//!
//! ACL entries and dictionary items are versionless and hang off their
//! container's id instead.
//!
//! Required fields are checked before any I/O, first failure wins:
//!
//! - create and list: service id, then version
//! - get, update and delete: name, then service id, then version

use serde::{Deserialize, Serialize};

use crate::rest::errors::{require, require_version};
use crate::rest::{join_path, ValidationError};

pub mod acl;
pub mod acl_entry;
pub mod backend;
pub mod dictionary;
pub mod dictionary_item;
pub mod domain;
pub mod service;
pub mod version;

pub use acl::{Acl, CreateAclInput, DeleteAclInput, GetAclInput, ListAclsInput, UpdateAclInput};
pub use acl_entry::{
    AclEntry, AclEntryBatchOperation, BatchModifyAclEntriesInput, CreateAclEntryInput,
    DeleteAclEntryInput, GetAclEntryInput, ListAclEntriesInput, UpdateAclEntryInput,
};
pub use backend::{
    Backend, BackendAttributes, CreateBackendInput, DeleteBackendInput, GetBackendInput,
    ListBackendsInput, UpdateBackendInput,
};
pub use dictionary::{
    CreateDictionaryInput, DeleteDictionaryInput, Dictionary, GetDictionaryInput,
    ListDictionariesInput, UpdateDictionaryInput,
};
pub use dictionary_item::{
    BatchModifyDictionaryItemsInput, CreateDictionaryItemInput, DeleteDictionaryItemInput,
    DictionaryItem, DictionaryItemBatchOperation, GetDictionaryItemInput,
    ListDictionaryItemsInput, UpdateDictionaryItemInput,
};
pub use domain::{
    CreateDomainInput, DeleteDomainInput, Domain, GetDomainInput, ListDomainsInput,
    UpdateDomainInput,
};
pub use service::{
    CreateServiceInput, DeleteServiceInput, GetServiceDetailsInput, GetServiceInput,
    ListServicesInput, SearchServiceInput, Service, ServiceDetail, ServiceType,
    UpdateServiceInput,
};
pub use version::{
    CreateVersionInput, GetVersionInput, ListVersionsInput, UpdateVersionInput, Version,
    VersionActionInput, VersionValidation,
};

/// Pagination and ordering for the paged list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

/// Sort order of a paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascend,
    Descend,
}

/// Operation of one element of a batch update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchOperation {
    Create,
    Update,
    Upsert,
    Delete,
}

/// Acknowledgement returned by the batch endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BatchStatus {
    #[serde(default)]
    pub status: String,
}

impl BatchStatus {
    /// Returns `true` if the API reported `"ok"`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Path of a versioned collection, after checking service id then version.
pub(crate) fn collection_path(
    service_id: &str,
    service_version: u32,
    collection: &str,
) -> Result<String, ValidationError> {
    require(service_id, ValidationError::MissingServiceId)?;
    require_version(service_version)?;
    let number = service_version.to_string();
    Ok(join_path(&[
        "service",
        service_id,
        "version",
        number.as_str(),
        collection,
    ]))
}

/// Path of a named object in a versioned collection, after checking name,
/// service id, then version.
pub(crate) fn named_path(
    name: &str,
    service_id: &str,
    service_version: u32,
    collection: &str,
) -> Result<String, ValidationError> {
    require(name, ValidationError::MissingName)?;
    require(service_id, ValidationError::MissingServiceId)?;
    require_version(service_version)?;
    let number = service_version.to_string();
    Ok(join_path(&[
        "service",
        service_id,
        "version",
        number.as_str(),
        collection,
        name,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_path() {
        assert_eq!(
            collection_path("SVC", 3, "backend").unwrap(),
            "/service/SVC/version/3/backend"
        );
    }

    #[test]
    fn test_collection_path_validation_order() {
        assert_eq!(
            collection_path("", 0, "acl"),
            Err(ValidationError::MissingServiceId)
        );
        assert_eq!(
            collection_path("SVC", 0, "acl"),
            Err(ValidationError::MissingServiceVersion)
        );
    }

    #[test]
    fn test_named_path_validation_order() {
        assert_eq!(
            named_path("", "", 0, "domain"),
            Err(ValidationError::MissingName)
        );
        assert_eq!(
            named_path("www.example.com", "", 0, "domain"),
            Err(ValidationError::MissingServiceId)
        );
        assert_eq!(
            named_path("www.example.com", "SVC", 0, "domain"),
            Err(ValidationError::MissingServiceVersion)
        );
        assert_eq!(
            named_path("my acl", "SVC", 2, "acl").unwrap(),
            "/service/SVC/version/2/acl/my%20acl"
        );
    }

    #[test]
    fn test_page_params_wire_names() {
        let params = PageParams {
            page: Some(2),
            per_page: Some(100),
            sort: Some("created".to_string()),
            direction: Some(SortDirection::Descend),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({"page": 2, "per_page": 100, "sort": "created", "direction": "descend"})
        );
    }

    #[test]
    fn test_batch_status() {
        let status: BatchStatus = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(status.is_ok());
    }
}
