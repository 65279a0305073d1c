//! REST API client for the Fastly API.
//!
//! [`RestClient`] is the handle passed to every resource operation. It is a
//! thin layer over [`HttpClient`](crate::clients::HttpClient) offering one
//! method per HTTP verb.

mod client;

pub use client::RestClient;
