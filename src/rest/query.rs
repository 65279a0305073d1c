//! Form-encoded query parameters for list and search operations.
//!
//! Filter structs derive `Serialize`; their serde renames decide the
//! parameter names. [`encode_query`] flattens such a struct into key/value
//! pairs which the HTTP layer then form-encodes onto the URL.

use serde::Serialize;
use serde_json::Value;

use crate::rest::ApiError;

/// Flattens a serializable filter struct into query parameters.
///
/// `None` fields are skipped. Arrays become comma-separated values. Nested
/// objects are passed as their JSON text. Parameters come out sorted by
/// name.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if the value cannot be serialized.
pub fn encode_query<T: Serialize>(params: &T) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(params).map_err(|source| ApiError::Encode { source })?;

    let Value::Object(map) = value else {
        return Ok(Vec::new());
    };

    let mut query = Vec::with_capacity(map.len());
    for (key, val) in map {
        let encoded = match val {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(items) => {
                let values: Vec<String> = items
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect();
                if values.is_empty() {
                    continue;
                }
                values.join(",")
            }
            Value::Object(_) => val.to_string(),
        };
        query.push((key, encoded));
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct Filter {
        #[serde(skip_serializing_if = "Option::is_none")]
        page: Option<u32>,
        #[serde(rename = "per_page", skip_serializing_if = "Option::is_none")]
        per_page: Option<u32>,
        #[serde(rename = "filter[service_id]", skip_serializing_if = "Option::is_none")]
        service_id: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        ids: Vec<String>,
        deleted: bool,
    }

    #[test]
    fn test_encode_query_skips_none_fields() {
        let query = encode_query(&Filter::default()).unwrap();
        assert_eq!(query, vec![("deleted".to_string(), "false".to_string())]);
    }

    #[test]
    fn test_encode_query_uses_serde_names() {
        let filter = Filter {
            page: Some(2),
            per_page: Some(50),
            service_id: Some("SVC".to_string()),
            ids: vec!["a".to_string(), "b".to_string()],
            deleted: true,
        };
        let query = encode_query(&filter).unwrap();

        assert!(query.contains(&("page".to_string(), "2".to_string())));
        assert!(query.contains(&("per_page".to_string(), "50".to_string())));
        assert!(query.contains(&("filter[service_id]".to_string(), "SVC".to_string())));
        assert!(query.contains(&("ids".to_string(), "a,b".to_string())));
        assert!(query.contains(&("deleted".to_string(), "true".to_string())));
    }

    #[test]
    fn test_encode_query_of_unit_is_empty() {
        assert!(encode_query(&()).unwrap().is_empty());
    }
}
