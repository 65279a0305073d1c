//! IP entries of an access control list.
//!
//! Entries are not versioned: they live under the ACL's id and changes take
//! effect immediately.
//!
//! | Operation | Verb | Path |
//! |-----------|------|------|
//! | create | POST | `/service/{service_id}/acl/{acl_id}/entry` |
//! | get, update, delete | GET, PATCH, DELETE | `/service/{service_id}/acl/{acl_id}/entry/{id}` |
//! | list | GET | `/service/{service_id}/acl/{acl_id}/entries` |
//! | batch modify | PATCH | `/service/{service_id}/acl/{acl_id}/entries` |
//!
//! Required fields are checked in the order ACL id, service id, then the
//! entry id or IP.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BatchOperation, BatchStatus, PageParams};
use crate::clients::RestClient;
use crate::rest::errors::require;
use crate::rest::{encode_query, join_path, resource, ApiError, ValidationError};

/// One IP address or subnet of an ACL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AclEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub acl_id: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub subnet: Option<u8>,
    #[serde(default)]
    pub negated: Option<bool>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input of [`AclEntry::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAclEntryInput {
    #[serde(skip)]
    pub acl_id: String,
    #[serde(skip)]
    pub service_id: String,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Input of [`AclEntry::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAclEntryInput {
    pub acl_id: String,
    pub service_id: String,
    pub entry_id: String,
}

/// Input of [`AclEntry::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAclEntriesInput {
    pub acl_id: String,
    pub service_id: String,
    pub page: PageParams,
}

/// Input of [`AclEntry::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateAclEntryInput {
    #[serde(skip)]
    pub acl_id: String,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub entry_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Input of [`AclEntry::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteAclEntryInput {
    pub acl_id: String,
    pub service_id: String,
    pub entry_id: String,
}

/// One element of a batch update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AclEntryBatchOperation {
    pub op: BatchOperation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Input of [`AclEntry::batch_modify`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchModifyAclEntriesInput {
    #[serde(skip)]
    pub acl_id: String,
    #[serde(skip)]
    pub service_id: String,
    pub entries: Vec<AclEntryBatchOperation>,
}

fn acl_path(acl_id: &str, service_id: &str, tail: &[&str]) -> Result<String, ValidationError> {
    require(acl_id, ValidationError::MissingAclId)?;
    require(service_id, ValidationError::MissingServiceId)?;
    let mut segments = vec!["service", service_id, "acl", acl_id];
    segments.extend_from_slice(tail);
    Ok(join_path(&segments))
}

fn entry_path(acl_id: &str, service_id: &str, entry_id: &str) -> Result<String, ValidationError> {
    let path = acl_path(acl_id, service_id, &["entry", entry_id])?;
    require(entry_id, ValidationError::MissingEntryId)?;
    Ok(path)
}

impl AclEntry {
    /// Adds an entry to an ACL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing ACL id, service id or
    /// IP, otherwise any error of the round trip.
    pub async fn create(
        client: &RestClient,
        input: &CreateAclEntryInput,
    ) -> Result<Self, ApiError> {
        let path = acl_path(&input.acl_id, &input.service_id, &["entry"])?;
        require(&input.ip, ValidationError::MissingIp)?;
        resource::post(client, &path, input).await
    }

    /// Fetches one entry.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing ACL id, service id or
    /// entry id, otherwise any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetAclEntryInput) -> Result<Self, ApiError> {
        let path = entry_path(&input.acl_id, &input.service_id, &input.entry_id)?;
        resource::get(client, &path, None).await
    }

    /// Lists one page of entries.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing ACL id or service id,
    /// otherwise any error of the round trip.
    pub async fn list(
        client: &RestClient,
        input: &ListAclEntriesInput,
    ) -> Result<Vec<Self>, ApiError> {
        let path = acl_path(&input.acl_id, &input.service_id, &["entries"])?;
        let query = encode_query(&input.page)?;
        resource::get(client, &path, Some(query)).await
    }

    /// Updates one entry.
    ///
    /// # Errors
    ///
    /// Same as [`AclEntry::get`].
    pub async fn update(
        client: &RestClient,
        input: &UpdateAclEntryInput,
    ) -> Result<Self, ApiError> {
        let path = entry_path(&input.acl_id, &input.service_id, &input.entry_id)?;
        resource::patch(client, &path, input).await
    }

    /// Removes one entry.
    ///
    /// # Errors
    ///
    /// Same as [`AclEntry::get`]; any status but 204 is an error.
    pub async fn delete(client: &RestClient, input: &DeleteAclEntryInput) -> Result<(), ApiError> {
        let path = entry_path(&input.acl_id, &input.service_id, &input.entry_id)?;
        resource::delete(client, &path).await
    }

    /// Applies several create/update/delete operations in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing ACL id or service id,
    /// or for an empty `entries` list, otherwise any error of the round trip.
    pub async fn batch_modify(
        client: &RestClient,
        input: &BatchModifyAclEntriesInput,
    ) -> Result<BatchStatus, ApiError> {
        let path = acl_path(&input.acl_id, &input.service_id, &["entries"])?;
        if input.entries.is_empty() {
            return Err(ValidationError::MissingEntries.into());
        }
        resource::patch(client, &path, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_path_validation_order() {
        assert_eq!(
            entry_path("", "", ""),
            Err(ValidationError::MissingAclId)
        );
        assert_eq!(
            entry_path("ACL", "", ""),
            Err(ValidationError::MissingServiceId)
        );
        assert_eq!(
            entry_path("ACL", "SVC", ""),
            Err(ValidationError::MissingEntryId)
        );
        assert_eq!(
            entry_path("ACL", "SVC", "E1").unwrap(),
            "/service/SVC/acl/ACL/entry/E1"
        );
    }

    #[test]
    fn test_create_entry_body() {
        let input = CreateAclEntryInput {
            acl_id: "ACL".to_string(),
            service_id: "SVC".to_string(),
            ip: "192.0.2.0".to_string(),
            subnet: Some(24),
            negated: Some(false),
            comment: None,
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"ip": "192.0.2.0", "subnet": 24, "negated": false})
        );
    }

    #[test]
    fn test_batch_body_shape() {
        let input = BatchModifyAclEntriesInput {
            acl_id: "ACL".to_string(),
            service_id: "SVC".to_string(),
            entries: vec![
                AclEntryBatchOperation {
                    op: BatchOperation::Create,
                    id: None,
                    ip: Some("198.51.100.1".to_string()),
                    subnet: None,
                    negated: None,
                    comment: Some("office".to_string()),
                },
                AclEntryBatchOperation {
                    op: BatchOperation::Delete,
                    id: Some("E1".to_string()),
                    ip: None,
                    subnet: None,
                    negated: None,
                    comment: None,
                },
            ],
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"entries": [
                {"op": "create", "ip": "198.51.100.1", "comment": "office"},
                {"op": "delete", "id": "E1"}
            ]})
        );
    }

    #[test]
    fn test_entry_deserializes() {
        let entry: AclEntry = serde_json::from_str(
            r#"{"id":"E1","acl_id":"ACL","ip":"192.0.2.0","subnet":24,"negated":true,"comment":""}"#,
        )
        .unwrap();
        assert_eq!(entry.subnet, Some(24));
        assert_eq!(entry.negated, Some(true));
    }
}
