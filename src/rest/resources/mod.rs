//! Resource families of the Fastly API.
//!
//! - [`delivery`]: services, versions and their versioned configuration
//!   (ACLs, backends, dictionaries, domains) plus the versionless ACL
//!   entries and dictionary items
//! - [`ngwaf`]: Next-Gen WAF workspaces, rules, lists, signals, thresholds
//!   and redactions
//! - [`products`]: enabling, disabling and configuring products on a
//!   service
//!
//! Every operation is an associated `async fn` of the resource type taking
//! the [`RestClient`](crate::clients::RestClient) and an input struct:
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::delivery::{Domain, ListDomainsInput};
//!
//! let domains = Domain::list(&client, &ListDomainsInput {
//!     service_id: "SVC123".to_string(),
//!     service_version: 3,
//! }).await?;
//! ```

pub mod delivery;
pub mod ngwaf;
pub mod products;
