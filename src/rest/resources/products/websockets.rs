//! WebSockets passthrough to the origin.

use super::EnabledProduct;

/// The WebSockets product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebSockets;

impl EnabledProduct for WebSockets {
    const PRODUCT_ID: &'static str = "websockets";
    type EnableInput = ();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_websockets_request_path() {
        assert_eq!(
            WebSockets::request("SVC123").path().unwrap(),
            "/enabled-products/v1/websockets/services/SVC123"
        );
    }
}
