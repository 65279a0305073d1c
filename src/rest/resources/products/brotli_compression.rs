//! Brotli compression: compresses responses with Brotli at the edge.

use super::EnabledProduct;

/// The Brotli compression product.
///
/// Applies to responses whose `Accept-Encoding` allows `br`; others are
/// served with the encoding they asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrotliCompression;

impl EnabledProduct for BrotliCompression {
    const PRODUCT_ID: &'static str = "brotli_compression";
    type EnableInput = ();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brotli_compression_request_path() {
        assert_eq!(
            BrotliCompression::request("SVC123").path().unwrap(),
            "/enabled-products/v1/brotli_compression/services/SVC123"
        );
    }
}
