//! HTTP client types for Fastly API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client performing one round trip per call
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API, with its raw body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`RestClient`]: Verb helpers used by the resource modules
//! - [`HttpError`] / [`HttpResponseError`]: Transport and remote API errors
//!
//! # No retries
//!
//! The client never retries, never backs off, and imposes no timeout of its
//! own. Dropping the returned future cancels the in-flight request; callers
//! wanting a deadline wrap the call themselves.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{ErrorDetail, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_TOKEN_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};

pub use rest::RestClient;
