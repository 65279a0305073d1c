//! Resource operations of the Fastly API.
//!
//! This module holds everything between a typed input struct and one HTTP
//! round trip:
//!
//! - [`join_path`] and [`build_scoped_path`]: URL path construction, the
//!   latter picking workspace or account paths from an NGWAF [`Scope`]
//! - [`encode_query`]: form-encoded query parameters for list filters
//! - [`product`]: operations generic over input and output types, shared by
//!   every product of the enablement API
//! - [`resources`]: the per-resource operations
//! - [`ApiError`] and [`ValidationError`]: what those operations return
//!
//! # Flow of a call
//!
//! Every operation runs the same steps: check required fields (first missing
//! field wins, no I/O), build the path, serialize the input, send one
//! request, decode the answer. There is no retry and no caching.
//!
//! ```rust,ignore
//! use fastly_api::rest::resources::delivery::{Acl, CreateAclInput};
//! use fastly_api::rest::{ApiError, ValidationError};
//!
//! match Acl::create(&client, &CreateAclInput::default()).await {
//!     Err(ApiError::Validation(ValidationError::MissingServiceId)) => {}
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

mod errors;
mod path;
pub mod product;
mod query;
mod resource;
pub mod resources;

pub use errors::{ApiError, ScopeError, ValidationError};
pub use path::{build_scoped_path, join_path, Scope, ScopeType, NGWAF_PREFIX};
pub use product::ProductRequest;
pub use query::encode_query;
