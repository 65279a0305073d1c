//! Key/value items of an edge dictionary.
//!
//! Items are versionless and addressed by key under the dictionary's id:
//! `/service/{service_id}/dictionary/{dictionary_id}/item[/{key}]`, with the
//! plural `items` collection used for listing and batch updates.
//!
//! Required fields are checked in the order dictionary id, service id, then
//! item key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BatchOperation, BatchStatus, PageParams};
use crate::clients::RestClient;
use crate::rest::errors::require;
use crate::rest::{encode_query, join_path, resource, ApiError, ValidationError};

/// One key/value pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DictionaryItem {
    #[serde(default)]
    pub dictionary_id: Option<String>,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub item_key: Option<String>,
    #[serde(default)]
    pub item_value: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input of [`DictionaryItem::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateDictionaryItemInput {
    #[serde(skip)]
    pub dictionary_id: String,
    #[serde(skip)]
    pub service_id: String,
    pub item_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_value: Option<String>,
}

/// Input of [`DictionaryItem::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetDictionaryItemInput {
    pub dictionary_id: String,
    pub service_id: String,
    pub item_key: String,
}

/// Input of [`DictionaryItem::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDictionaryItemsInput {
    pub dictionary_id: String,
    pub service_id: String,
    pub page: PageParams,
}

/// Input of [`DictionaryItem::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateDictionaryItemInput {
    #[serde(skip)]
    pub dictionary_id: String,
    #[serde(skip)]
    pub service_id: String,
    #[serde(skip)]
    pub item_key: String,
    pub item_value: String,
}

/// Input of [`DictionaryItem::delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDictionaryItemInput {
    pub dictionary_id: String,
    pub service_id: String,
    pub item_key: String,
}

/// One element of a batch update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryItemBatchOperation {
    pub op: BatchOperation,
    pub item_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_value: Option<String>,
}

/// Input of [`DictionaryItem::batch_modify`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchModifyDictionaryItemsInput {
    #[serde(skip)]
    pub dictionary_id: String,
    #[serde(skip)]
    pub service_id: String,
    pub items: Vec<DictionaryItemBatchOperation>,
}

fn dictionary_path(
    dictionary_id: &str,
    service_id: &str,
    tail: &[&str],
) -> Result<String, ValidationError> {
    require(dictionary_id, ValidationError::MissingDictionaryId)?;
    require(service_id, ValidationError::MissingServiceId)?;
    let mut segments = vec!["service", service_id, "dictionary", dictionary_id];
    segments.extend_from_slice(tail);
    Ok(join_path(&segments))
}

fn item_path(
    dictionary_id: &str,
    service_id: &str,
    item_key: &str,
) -> Result<String, ValidationError> {
    let path = dictionary_path(dictionary_id, service_id, &["item", item_key])?;
    require(item_key, ValidationError::MissingItemKey)?;
    Ok(path)
}

impl DictionaryItem {
    /// Adds an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing dictionary id, service
    /// id or item key, otherwise any error of the round trip.
    pub async fn create(
        client: &RestClient,
        input: &CreateDictionaryItemInput,
    ) -> Result<Self, ApiError> {
        let path = dictionary_path(&input.dictionary_id, &input.service_id, &["item"])?;
        require(&input.item_key, ValidationError::MissingItemKey)?;
        resource::post(client, &path, input).await
    }

    /// Fetches an item by key.
    ///
    /// # Errors
    ///
    /// Same as [`DictionaryItem::create`].
    pub async fn get(
        client: &RestClient,
        input: &GetDictionaryItemInput,
    ) -> Result<Self, ApiError> {
        let path = item_path(&input.dictionary_id, &input.service_id, &input.item_key)?;
        resource::get(client, &path, None).await
    }

    /// Lists one page of items.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing dictionary id or
    /// service id, otherwise any error of the round trip.
    pub async fn list(
        client: &RestClient,
        input: &ListDictionaryItemsInput,
    ) -> Result<Vec<Self>, ApiError> {
        let path = dictionary_path(&input.dictionary_id, &input.service_id, &["items"])?;
        let query = encode_query(&input.page)?;
        resource::get(client, &path, Some(query)).await
    }

    /// Replaces the value of an item.
    ///
    /// # Errors
    ///
    /// Same as [`DictionaryItem::create`].
    pub async fn update(
        client: &RestClient,
        input: &UpdateDictionaryItemInput,
    ) -> Result<Self, ApiError> {
        let path = item_path(&input.dictionary_id, &input.service_id, &input.item_key)?;
        resource::patch(client, &path, input).await
    }

    /// Removes an item.
    ///
    /// # Errors
    ///
    /// Same as [`DictionaryItem::create`]; any status but 204 is an error.
    pub async fn delete(
        client: &RestClient,
        input: &DeleteDictionaryItemInput,
    ) -> Result<(), ApiError> {
        let path = item_path(&input.dictionary_id, &input.service_id, &input.item_key)?;
        resource::delete(client, &path).await
    }

    /// Applies several item operations in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing dictionary id or
    /// service id, or for an empty `items` list, otherwise any error of the
    /// round trip.
    pub async fn batch_modify(
        client: &RestClient,
        input: &BatchModifyDictionaryItemsInput,
    ) -> Result<BatchStatus, ApiError> {
        let path = dictionary_path(&input.dictionary_id, &input.service_id, &["items"])?;
        if input.items.is_empty() {
            return Err(ValidationError::MissingItems.into());
        }
        resource::patch(client, &path, input).await
    }
}
