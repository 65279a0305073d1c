//! Request plumbing shared by every resource operation.
//!
//! A resource operation validates its input, builds a path, then hands off to
//! one of the helpers here. Each helper performs exactly one round trip
//! through [`RestClient`] and turns the outcome into `Result<T, ApiError>`:
//!
//! - the input is serialized with serde into a JSON body
//! - a 2xx body is decoded into the requested output type
//! - a non-2xx answer surfaces as [`ApiError::Http`]
//! - an undecodable body surfaces as [`ApiError::Decode`]
//!
//! Deletes are stricter than the other verbs: only `204 No Content` counts as
//! success.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::{HttpResponse, HttpResponseError, RestClient};
use crate::rest::ApiError;

/// Serializes an input struct into a JSON body.
pub(crate) fn to_body<I: Serialize + ?Sized>(input: &I) -> Result<Value, ApiError> {
    serde_json::to_value(input).map_err(|source| ApiError::Encode { source })
}

/// Decodes a response body into `O`.
pub(crate) fn decode<O: DeserializeOwned>(response: &HttpResponse) -> Result<O, ApiError> {
    response.json().map_err(|source| {
        tracing::debug!(status = response.code, error = %source, "response body did not decode");
        ApiError::Decode { source }
    })
}

/// Fails unless the response is `204 No Content`.
pub(crate) fn expect_no_content(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_no_content() {
        Ok(())
    } else {
        Err(HttpResponseError::from_body(response.code, &response.body).into())
    }
}

/// GET `path` with optional query parameters and decode the body.
pub(crate) async fn get<O: DeserializeOwned>(
    client: &RestClient,
    path: &str,
    query: Option<Vec<(String, String)>>,
) -> Result<O, ApiError> {
    let response = client.get(path, query).await?;
    decode(&response)
}

/// POST `input` as JSON to `path` and decode the body.
pub(crate) async fn post<O, I>(client: &RestClient, path: &str, input: &I) -> Result<O, ApiError>
where
    O: DeserializeOwned,
    I: Serialize + ?Sized,
{
    let body = to_body(input)?;
    let response = client.post(path, body).await?;
    decode(&response)
}

/// PUT `path`, with a JSON body when `input` is given, and decode the body.
pub(crate) async fn put<O, I>(
    client: &RestClient,
    path: &str,
    input: Option<&I>,
) -> Result<O, ApiError>
where
    O: DeserializeOwned,
    I: Serialize + ?Sized,
{
    let body = input.map(to_body).transpose()?;
    let response = client.put(path, body).await?;
    decode(&response)
}

/// PATCH `input` as JSON to `path` and decode the body.
pub(crate) async fn patch<O, I>(client: &RestClient, path: &str, input: &I) -> Result<O, ApiError>
where
    O: DeserializeOwned,
    I: Serialize + ?Sized,
{
    let body = to_body(input)?;
    let response = client.patch(path, body).await?;
    decode(&response)
}

/// DELETE `path`, succeeding only on `204 No Content`.
pub(crate) async fn delete(client: &RestClient, path: &str) -> Result<(), ApiError> {
    let response = client.delete(path).await?;
    expect_no_content(&response)
}

/// Body-less PUT used by the version actions (activate, lock, ...).
pub(crate) async fn put_empty<O: DeserializeOwned>(
    client: &RestClient,
    path: &str,
) -> Result<O, ApiError> {
    put::<O, Value>(client, path, None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_expect_no_content_accepts_204() {
        assert!(expect_no_content(&response(204, "")).is_ok());
    }

    #[test]
    fn test_expect_no_content_rejects_200() {
        let error = expect_no_content(&response(200, r#"{"status":"ok"}"#)).unwrap_err();
        assert_eq!(error.status(), Some(200));
    }

    #[test]
    fn test_decode_reports_malformed_json() {
        let error = decode::<Value>(&response(200, "{not json")).unwrap_err();
        assert!(matches!(error, ApiError::Decode { .. }));
        assert!(error
            .to_string()
            .starts_with("failed to decode json response"));
    }

    #[test]
    fn test_to_body_serializes_struct() {
        #[derive(Serialize)]
        struct Input {
            name: &'static str,
        }
        let body = to_body(&Input { name: "x" }).unwrap();
        assert_eq!(body, serde_json::json!({"name": "x"}));
    }
}
