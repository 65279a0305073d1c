//! Bot Management: classifies automated clients hitting a service.

use super::EnabledProduct;

/// The Bot Management product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BotManagement;

impl EnabledProduct for BotManagement {
    const PRODUCT_ID: &'static str = "bot_management";
    type EnableInput = ();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_management_request_path() {
        assert_eq!(
            BotManagement::request("SVC123").path().unwrap(),
            "/enabled-products/v1/bot_management/services/SVC123"
        );
    }
}
