//! Edge dictionaries of a service version.
//!
//! The dictionary container is versioned; its key/value items are not (see
//! [`dictionary_item`](super::dictionary_item)).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{collection_path, named_path};
use crate::clients::RestClient;
use crate::rest::{resource, ApiError};

const COLLECTION: &str = "dictionary";

/// A key/value container readable from edge code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Dictionary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Items of a write-only dictionary cannot be read back.
    #[serde(default)]
    pub write_only: Option<bool>,
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

/// Input of [`Dictionary::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDictionaryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub service_version: u32,
}

/// Input of [`Dictionary::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDictionaryInput {
    pub name: String,
    pub service_id: String,
    pub service_version: u32,
}

/// Input of [`Dictionary::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDictionariesInput {
    pub service_id: String,
    pub service_version: u32,
}

/// Input of [`Dictionary::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateDictionaryInput {
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_only: Option<bool>,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub service_version: u32,
}

/// Input of [`Dictionary::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDictionaryInput {
    pub name: String,
    pub service_id: String,
    pub service_version: u32,
}

impl Dictionary {
    /// Creates a dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id or version,
    /// otherwise any error of the round trip.
    pub async fn create(
        client: &RestClient,
        input: &CreateDictionaryInput,
    ) -> Result<Self, ApiError> {
        let path = collection_path(&input.service_id, input.service_version, COLLECTION)?;
        resource::post(client, &path, input).await
    }

    /// Fetches a dictionary by name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing name, service id or
    /// version, otherwise any error of the round trip.
    pub async fn get(client: &RestClient, input: &GetDictionaryInput) -> Result<Self, ApiError> {
        let path = named_path(&input.name, &input.service_id, input.service_version, COLLECTION)?;
        resource::get(client, &path, None).await
    }

    /// Lists the dictionaries of a service version.
    ///
    /// # Errors
    ///
    /// Same as [`Dictionary::create`].
    pub async fn list(
        client: &RestClient,
        input: &ListDictionariesInput,
    ) -> Result<Vec<Self>, ApiError> {
        let path = collection_path(&input.service_id, input.service_version, COLLECTION)?;
        resource::get(client, &path, None).await
    }

    /// Updates a dictionary.
    ///
    /// # Errors
    ///
    /// Same as [`Dictionary::get`].
    pub async fn update(
        client: &RestClient,
        input: &UpdateDictionaryInput,
    ) -> Result<Self, ApiError> {
        let path = named_path(&input.name, &input.service_id, input.service_version, COLLECTION)?;
        resource::put(client, &path, Some(input)).await
    }

    /// Deletes a dictionary.
    ///
    /// # Errors
    ///
    /// Same as [`Dictionary::get`]; any status but 204 is an error.
    pub async fn delete(
        client: &RestClient,
        input: &DeleteDictionaryInput,
    ) -> Result<(), ApiError> {
        let path = named_path(&input.name, &input.service_id, input.service_version, COLLECTION)?;
        resource::delete(client, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dictionary_body() {
        let input = CreateDictionaryInput {
            name: Some("geo".to_string()),
            write_only: Some(true),
            service_id: "SVC".to_string(),
            service_version: 1,
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({"name": "geo", "write_only": true})
        );
    }

    #[test]
    fn test_dictionary_deserializes() {
        let dictionary: Dictionary =
            serde_json::from_str(r#"{"id":"D1","name":"geo","write_only":false,"version":2}"#)
                .unwrap();
        assert_eq!(dictionary.id.as_deref(), Some("D1"));
        assert_eq!(dictionary.write_only, Some(false));
    }
}
