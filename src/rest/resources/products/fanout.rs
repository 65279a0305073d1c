//! Fanout: publish/subscribe message fan-out over long-lived connections.

use super::EnabledProduct;

/// The Fanout product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fanout;

impl EnabledProduct for Fanout {
    const PRODUCT_ID: &'static str = "fanout";
    type EnableInput = ();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fanout_request_path() {
        assert_eq!(
            Fanout::request("SVC123").path().unwrap(),
            "/enabled-products/v1/fanout/services/SVC123"
        );
    }
}
