//! Domain Inspector: real-time metrics per domain of a service.

use super::EnabledProduct;

/// The Domain Inspector product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainInspector;

impl EnabledProduct for DomainInspector {
    const PRODUCT_ID: &'static str = "domain_inspector";
    type EnableInput = ();
}

