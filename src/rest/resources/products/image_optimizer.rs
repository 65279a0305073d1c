//! Image Optimizer: transforms and re-encodes images at the edge.

use super::EnabledProduct;

/// The Image Optimizer product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOptimizer;

impl EnabledProduct for ImageOptimizer {
    const PRODUCT_ID: &'static str = "image_optimizer";
    type EnableInput = ();
}
