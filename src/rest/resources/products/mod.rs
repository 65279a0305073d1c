//! Product enablement.
//!
//! Each product is a unit type implementing [`EnabledProduct`], which turns
//! the generic operations of [`crate::rest::product`] into `get`, `enable`
//! and `disable` calls for that product. Products with settings also
//! implement [`ConfigurableProduct`].
//!
//! # Example
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::products::{BrotliCompression, EnabledProduct};
//!
//! let output = BrotliCompression::enable(&client, "SVC123", None).await?;
//! assert_eq!(output.product.id.as_deref(), Some("brotli_compression"));
//!
//! BrotliCompression::disable(&client, "SVC123").await?;
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::product::{self, ProductRequest};
use crate::rest::{ApiError, ValidationError};

pub mod api_discovery;
pub mod bot_management;
pub mod brotli_compression;
pub mod ddos_protection;
pub mod domain_inspector;
pub mod fanout;
pub mod image_optimizer;
pub mod log_explorer_insights;
pub mod ngwaf;
pub mod origin_inspector;
pub mod websockets;

pub use api_discovery::ApiDiscovery;
pub use bot_management::BotManagement;
pub use brotli_compression::BrotliCompression;
pub use ddos_protection::{
    DdosProtection, DdosProtectionConfiguration, DdosProtectionConfigureInput,
};
pub use domain_inspector::DomainInspector;
pub use fanout::Fanout;
pub use image_optimizer::ImageOptimizer;
pub use log_explorer_insights::LogExplorerInsights;
pub use ngwaf::{Ngwaf, NgwafConfiguration, NgwafConfigureInput, NgwafEnableInput};
pub use origin_inspector::OriginInspector;
pub use websockets::WebSockets;

/// Sub-path holding a product's settings.
pub const CONFIGURATION: &str = "configuration";

/// Reference to the product in an enablement response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
}

/// Reference to the service in an enablement response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
}

/// Hypermedia links of an enablement response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Links {
    #[serde(default, rename = "self")]
    pub this: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
}

/// Answer of `get` and `enable`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnableOutput {
    #[serde(default)]
    pub product: ProductRef,
    #[serde(default)]
    pub service: ServiceRef,
    #[serde(default, rename = "_links")]
    pub links: Links,
}

/// Answer of `get_configuration` and `update_configuration`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigureOutput<C> {
    #[serde(default)]
    pub product: ProductRef,
    #[serde(default)]
    pub service: ServiceRef,
    #[serde(default = "Option::default")]
    pub configuration: Option<C>,
    #[serde(default, rename = "_links")]
    pub links: Links,
}

/// A product that can be enabled on a service.
///
/// Every method validates the service id before any I/O. Implementors only
/// supply the product id and, when enabling takes settings, the input type.
#[allow(async_fn_in_trait)]
pub trait EnabledProduct {
    /// Identifier of the product in the enablement API.
    const PRODUCT_ID: &'static str;

    /// Body sent when enabling. `()` for products enabled without settings.
    type EnableInput: Serialize;

    /// Checks the enable input. Runs after the service id check.
    ///
    /// # Errors
    ///
    /// Returns the first missing field as a [`ValidationError`].
    fn validate_enable(_input: Option<&Self::EnableInput>) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Builds the request addressing this product on `service_id`.
    #[must_use]
    fn request(service_id: &str) -> ProductRequest {
        ProductRequest::new(Self::PRODUCT_ID, service_id)
    }

    /// Returns the enablement status of the product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id, otherwise
    /// any error of the round trip. A product that is not enabled answers
    /// 404 (see [`ApiError::is_not_found`]).
    async fn get(client: &RestClient, service_id: &str) -> Result<EnableOutput, ApiError> {
        product::get(client, &Self::request(service_id)).await
    }

    /// Enables the product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id or invalid
    /// input, otherwise any error of the round trip.
    async fn enable(
        client: &RestClient,
        service_id: &str,
        input: Option<&Self::EnableInput>,
    ) -> Result<EnableOutput, ApiError> {
        let request = Self::request(service_id);
        request.validate()?;
        Self::validate_enable(input)?;
        product::put(client, &request, input).await
    }

    /// Disables the product.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id. Any status
    /// but 204 is an error.
    async fn disable(client: &RestClient, service_id: &str) -> Result<(), ApiError> {
        product::delete(client, &Self::request(service_id)).await
    }
}

/// A product with settings under its `configuration` sub-path.
#[allow(async_fn_in_trait)]
pub trait ConfigurableProduct: EnabledProduct {
    /// Settings as returned by the API.
    type Configuration: DeserializeOwned;

    /// Body of a configuration update.
    type ConfigureInput: Serialize;

    /// Checks the configuration input. Runs after the service id check.
    ///
    /// # Errors
    ///
    /// Returns the first missing field as a [`ValidationError`].
    fn validate_configure(_input: &Self::ConfigureInput) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Returns the product's settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id, otherwise
    /// any error of the round trip.
    async fn get_configuration(
        client: &RestClient,
        service_id: &str,
    ) -> Result<ConfigureOutput<Self::Configuration>, ApiError> {
        let request = Self::request(service_id).component(CONFIGURATION);
        product::get(client, &request).await
    }

    /// Updates the product's settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] for a missing service id or invalid
    /// input, otherwise any error of the round trip.
    async fn update_configuration(
        client: &RestClient,
        service_id: &str,
        input: &Self::ConfigureInput,
    ) -> Result<ConfigureOutput<Self::Configuration>, ApiError> {
        let request = Self::request(service_id).component(CONFIGURATION);
        request.validate()?;
        Self::validate_configure(input)?;
        product::patch(client, &request, input).await
    }
}
