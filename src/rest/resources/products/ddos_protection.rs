//! DDoS Protection and its operating mode.

use serde::{Deserialize, Serialize};

use super::{ConfigurableProduct, EnabledProduct};
use crate::rest::errors::require;
use crate::rest::ValidationError;

/// The DDoS Protection product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DdosProtection;

/// Current settings of DDoS Protection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DdosProtectionConfiguration {
    /// `off`, `log` or `block`.
    #[serde(default)]
    pub mode: Option<String>,
}

/// Body of [`DdosProtection::update_configuration`](ConfigurableProduct::update_configuration).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DdosProtectionConfigureInput {
    pub mode: String,
}

impl EnabledProduct for DdosProtection {
    const PRODUCT_ID: &'static str = "ddos_protection";
    type EnableInput = ();
}

impl ConfigurableProduct for DdosProtection {
    type Configuration = DdosProtectionConfiguration;
    type ConfigureInput = DdosProtectionConfigureInput;

    fn validate_configure(input: &Self::ConfigureInput) -> Result<(), ValidationError> {
        require(&input.mode, ValidationError::MissingMode)
    }
}
