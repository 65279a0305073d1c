//! HTTP response types for the Fastly API SDK.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// Rate limit information parsed from the `Fastly-RateLimit-Remaining`
/// and `Fastly-RateLimit-Reset` headers.
///
/// Only mutating requests are rate limited, so read responses usually carry
/// neither header.
///
/// # Example
///
/// ```rust
/// use fastly_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("998", Some("1700000000")).unwrap();
/// assert_eq!(limit.remaining, 998);
/// assert_eq!(limit.reset, Some(1_700_000_000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests left in the current window.
    pub remaining: u32,
    /// Unix timestamp at which the window resets.
    pub reset: Option<i64>,
}

impl RateLimit {
    /// Parses the header values. Returns `None` if `remaining` is not a number.
    #[must_use]
    pub fn parse(remaining: &str, reset: Option<&str>) -> Option<Self> {
        let remaining = remaining.trim().parse().ok()?;
        let reset = reset.and_then(|value| value.trim().parse().ok());
        Some(Self { remaining, reset })
    }
}

/// An HTTP response from the Fastly API.
///
/// The body is kept as the raw text the server sent. Use
/// [`HttpResponse::json`] to decode it into a typed value.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Rate limit information, when the server reported it.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let rate_limit = first_header(&headers, "fastly-ratelimit-remaining").and_then(|remaining| {
            RateLimit::parse(remaining, first_header(&headers, "fastly-ratelimit-reset"))
        });

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response status is 204 No Content.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        self.code == 204
    }

    /// Returns the first value of a header, by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        first_header(&self.headers, &name.to_ascii_lowercase())
    }

    /// Returns the deprecation notice of the endpoint, if the server sent one.
    ///
    /// Looks at the `Deprecation` header first, then `Sunset`.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("deprecation").or_else(|| self.header("sunset"))
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the [`serde_json::Error`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

fn first_header<'a>(headers: &'a HashMap<String, Vec<String>>, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|values| values.first())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            map.entry((*key).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), String::new());
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 404, 429, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), String::new());
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_no_content_is_only_204() {
        assert!(HttpResponse::new(204, HashMap::new(), String::new()).is_no_content());
        assert!(!HttpResponse::new(200, HashMap::new(), String::new()).is_no_content());
    }

    #[test]
    fn test_rate_limit_headers_are_parsed() {
        let response = HttpResponse::new(
            200,
            headers(&[
                ("fastly-ratelimit-remaining", "999"),
                ("fastly-ratelimit-reset", "1452032384"),
            ]),
            String::new(),
        );
        assert_eq!(
            response.rate_limit,
            Some(RateLimit {
                remaining: 999,
                reset: Some(1_452_032_384)
            })
        );
    }

    #[test]
    fn test_rate_limit_parse_rejects_garbage() {
        assert!(RateLimit::parse("many", None).is_none());
        assert_eq!(
            RateLimit::parse("5", Some("soon")),
            Some(RateLimit {
                remaining: 5,
                reset: None
            })
        );
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("sunset", "Sat, 1 Nov 2025")]), String::new());
        assert_eq!(response.header("Sunset"), Some("Sat, 1 Nov 2025"));
        assert_eq!(response.deprecation_reason(), Some("Sat, 1 Nov 2025"));
    }

    #[test]
    fn test_deprecation_reason_absent() {
        let response = HttpResponse::new(200, HashMap::new(), String::new());
        assert!(response.deprecation_reason().is_none());
    }

    #[test]
    fn test_json_decodes_body() {
        #[derive(Deserialize)]
        struct Named {
            name: String,
        }

        let response = HttpResponse::new(200, HashMap::new(), r#"{"name":"acl"}"#.to_string());
        let named: Named = response.json().unwrap();
        assert_eq!(named.name, "acl");

        let response = HttpResponse::new(200, HashMap::new(), "not json".to_string());
        assert!(response.json::<Named>().is_err());
    }
}
