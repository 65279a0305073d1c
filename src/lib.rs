//! # Fastly API Rust SDK
//!
//! A Rust SDK for the Fastly management API: services and their versioned
//! configuration, Next-Gen WAF resources and product enablement.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`FastlyConfig`] and [`FastlyConfigBuilder`]
//! - Validated newtypes for the API token and endpoint
//! - An async HTTP client sending the `Fastly-Key` header on every request
//! - Typed `Input`/`Output` structs and async operations per resource
//! - Generic enable/configure/disable operations for every product
//! - NGWAF paths chosen from a workspace or account [`Scope`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fastly_api::{ApiToken, FastlyConfig};
//!
//! let config = FastlyConfig::builder()
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(config.endpoint().as_ref(), "https://api.fastly.com");
//! ```
//!
//! Or from the environment (`FASTLY_API_TOKEN`, optional `FASTLY_API_URL`):
//!
//! ```rust,ignore
//! let config = fastly_api::FastlyConfig::from_env()?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use fastly_api::{FastlyConfig, RestClient};
//! use fastly_api::rest::resources::delivery::{Acl, CreateAclInput};
//!
//! let client = RestClient::new(&FastlyConfig::from_env()?)?;
//!
//! let acl = Acl::create(&client, &CreateAclInput {
//!     name: Some("blocklist".to_string()),
//!     service_id: "SVC123".to_string(),
//!     service_version: 3,
//! }).await?;
//! ```
//!
//! ## NGWAF Scopes
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::ngwaf::{ListRulesInput, Rule};
//! use fastly_api::Scope;
//!
//! // GET /ngwaf/v1/workspaces/ws1/rules
//! let rules = Rule::list(&client, &ListRulesInput {
//!     scope: Some(Scope::workspace("ws1")),
//!     ..Default::default()
//! }).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction and
//!   required input fields are checked before any I/O
//! - **Thread-safe**: Clients and errors are `Send + Sync`
//! - **One call, one request**: No retries, no caching, no hidden timeouts;
//!   dropping a future cancels its request

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, Endpoint, FastlyConfig, FastlyConfigBuilder};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ErrorDetail, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, RateLimit, RestClient,
};

// Re-export resource layer types
pub use rest::{ApiError, Scope, ScopeError, ScopeType, ValidationError};
