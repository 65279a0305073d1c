//! API Discovery: finds the API endpoints a service exposes by observing its traffic.

use super::EnabledProduct;

/// The API Discovery product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApiDiscovery;

impl EnabledProduct for ApiDiscovery {
    const PRODUCT_ID: &'static str = "api_discovery";
    type EnableInput = ();
}

