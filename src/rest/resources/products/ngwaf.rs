//! Next-Gen WAF on a service.
//!
//! Enabling links the service to an NGWAF workspace, so the workspace id is
//! required. The traffic ramp is the percentage of requests inspected.

use serde::{Deserialize, Serialize};

use super::{ConfigurableProduct, EnabledProduct};
use crate::rest::errors::require;
use crate::rest::ValidationError;

/// The Next-Gen WAF product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ngwaf;

/// Body of [`Ngwaf::enable`](EnabledProduct::enable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NgwafEnableInput {
    pub workspace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_ramp: Option<String>,
}

/// Current settings of NGWAF on a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NgwafConfiguration {
    #[serde(default)]
    pub workspace_id: Option<String>,
    #[serde(default)]
    pub traffic_ramp: Option<String>,
}

/// Body of [`Ngwaf::update_configuration`](ConfigurableProduct::update_configuration).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NgwafConfigureInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_ramp: Option<String>,
}

impl EnabledProduct for Ngwaf {
    const PRODUCT_ID: &'static str = "ngwaf";
    type EnableInput = NgwafEnableInput;

    fn validate_enable(input: Option<&Self::EnableInput>) -> Result<(), ValidationError> {
        let workspace_id = input.map_or("", |i| i.workspace_id.as_str());
        require(workspace_id, ValidationError::MissingWorkspaceId)
    }
}

impl ConfigurableProduct for Ngwaf {
    type Configuration = NgwafConfiguration;
    type ConfigureInput = NgwafConfigureInput;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enable_requires_workspace() {
        assert_eq!(
            Ngwaf::validate_enable(None),
            Err(ValidationError::MissingWorkspaceId)
        );
        assert_eq!(
            Ngwaf::validate_enable(Some(&NgwafEnableInput::default())),
            Err(ValidationError::MissingWorkspaceId)
        );
        let input = NgwafEnableInput {
            workspace_id: "ws1".to_string(),
            traffic_ramp: None,
        };
        assert!(Ngwaf::validate_enable(Some(&input)).is_ok());
    }

    #[test]
    fn test_configure_body_skips_unset_fields() {
        let input = NgwafConfigureInput {
            workspace_id: None,
            traffic_ramp: Some("50".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({"traffic_ramp": "50"})
        );
    }
}
