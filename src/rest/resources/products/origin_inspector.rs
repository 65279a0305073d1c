//! Origin Inspector: real-time metrics per origin of a service.

use super::EnabledProduct;

/// The Origin Inspector product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OriginInspector;

impl EnabledProduct for OriginInspector {
    const PRODUCT_ID: &'static str = "origin_inspector";
    type EnableInput = ();
}

