//! Generic operations on the product enablement API.
//!
//! Every product (Brotli compression, bot management, NGWAF, ...) is enabled,
//! inspected, configured and disabled through the same four calls:
//!
//! | Operation | Verb | Path |
//! |-----------|------|------|
//! | [`get`] | GET | `/enabled-products/v1/{product}/services/{service}` |
//! | [`put`] | PUT | same, optional JSON body |
//! | [`patch`] | PATCH | same plus extra components, JSON body |
//! | [`delete`] | DELETE | same, `204 No Content` expected |
//!
//! They are generic over the output type `O` (and the input type `I`), so
//! each product module only declares its own shapes.
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::product::{self, ProductRequest};
//! use fastly_api::rest::resources::products::EnableOutput;
//!
//! let request = ProductRequest::new("brotli_compression", "SVC123");
//! let enabled: EnableOutput = product::put::<_, ()>(&client, &request, None).await?;
//! product::delete(&client, &request).await?;
//! ```

use serde::{de::DeserializeOwned, Serialize};

use crate::clients::RestClient;
use crate::rest::errors::require;
use crate::rest::{join_path, resource, ApiError, ValidationError};

/// Addresses one product on one service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRequest {
    /// The product identifier, e.g. `"ngwaf"`.
    pub product_id: String,
    /// The service the product is enabled on.
    pub service_id: String,
    /// Extra path components after the service, e.g. `["configuration"]`.
    pub url_components: Vec<String>,
}

impl ProductRequest {
    /// Creates a request for the product's base path.
    #[must_use]
    pub fn new(product_id: impl Into<String>, service_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            service_id: service_id.into(),
            url_components: Vec::new(),
        }
    }

    /// Appends a path component.
    #[must_use]
    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.url_components.push(component.into());
        self
    }

    /// Checks the product id, then the service id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingProductId`] or
    /// [`ValidationError::MissingServiceId`], whichever is missing first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.product_id, ValidationError::MissingProductId)?;
        require(&self.service_id, ValidationError::MissingServiceId)
    }

    /// Builds the request path after validating it.
    ///
    /// # Errors
    ///
    /// Returns the first missing identifier as a [`ValidationError`].
    pub fn path(&self) -> Result<String, ValidationError> {
        self.validate()?;
        let mut segments = vec![
            "enabled-products",
            "v1",
            self.product_id.as_str(),
            "services",
            self.service_id.as_str(),
        ];
        segments.extend(self.url_components.iter().map(String::as_str));
        Ok(join_path(&segments))
    }
}

/// Fetches the product state (or configuration) as `O`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] before any I/O when an identifier is
/// missing, [`ApiError::Http`] on a failed round trip and
/// [`ApiError::Decode`] on a malformed body.
pub async fn get<O: DeserializeOwned>(
    client: &RestClient,
    request: &ProductRequest,
) -> Result<O, ApiError> {
    let path = request.path()?;
    resource::get(client, &path, None).await
}

/// Enables the product, sending `input` as the body when present.
///
/// # Errors
///
/// Same as [`get`], plus [`ApiError::Encode`] if `input` fails to serialize.
pub async fn put<O, I>(
    client: &RestClient,
    request: &ProductRequest,
    input: Option<&I>,
) -> Result<O, ApiError>
where
    O: DeserializeOwned,
    I: Serialize,
{
    let path = request.path()?;
    resource::put(client, &path, input).await
}

/// Updates the product (typically its configuration) with `input`.
///
/// # Errors
///
/// Same as [`put`].
pub async fn patch<O, I>(
    client: &RestClient,
    request: &ProductRequest,
    input: &I,
) -> Result<O, ApiError>
where
    O: DeserializeOwned,
    I: Serialize,
{
    let path = request.path()?;
    resource::patch(client, &path, input).await
}

/// Disables the product.
///
/// # Errors
///
/// Any status other than `204 No Content`, 200 included, is returned as
/// [`ApiError::Http`] carrying the structured response error.
pub async fn delete(client: &RestClient, request: &ProductRequest) -> Result<(), ApiError> {
    let path = request.path()?;
    resource::delete(client, &path).await
}
