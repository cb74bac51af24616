use std::collections::BTreeMap;

use serde_json::Value;
use url::form_urlencoded;

/// Ordered parameter mapping for installed-query invocation. The ordering
/// makes the encoded string deterministic (key order).
pub type QueryParams = BTreeMap<String, Value>;

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Encode query parameters for the remote's installed-query endpoint.
///
/// Entries with null, empty-string, or empty-array values are dropped
/// entirely. List values expand to one `key=value` pair per element: the
/// service rejects array-suffix (`key[]`) naming, so repeated plain keys are
/// what goes on the wire.
pub fn encode_query(params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        if is_blank(value) {
            continue;
        }
        match value {
            Value::Array(items) => {
                for item in items {
                    serializer.append_pair(name, &scalar(item));
                }
            }
            other => {
                serializer.append_pair(name, &scalar(other));
            }
        }
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encodes_in_key_order() {
        let mut params = QueryParams::new();
        params.insert("foo".to_string(), json!("bar"));
        params.insert("bar".to_string(), json!("baz"));

        assert_eq!(encode_query(&params), "bar=baz&foo=bar");
    }

    #[test]
    fn test_drops_blank_values() {
        let mut params = QueryParams::new();
        params.insert("bar".to_string(), json!("baz"));
        params.insert("foobar".to_string(), Value::Null);
        params.insert("empty".to_string(), json!(""));
        params.insert("none".to_string(), json!([]));

        assert_eq!(encode_query(&params), "bar=baz");
    }

    #[test]
    fn test_lists_expand_to_repeated_keys() {
        let mut params = QueryParams::new();
        params.insert("ids".to_string(), json!(["1", "2", "3"]));

        let encoded = encode_query(&params);
        assert_eq!(encoded, "ids=1&ids=2&ids=3");
        assert!(!encoded.contains("%5B%5D"));
        assert!(!encoded.contains("[]"));
    }

    #[test]
    fn test_non_string_scalars() {
        let mut params = QueryParams::new();
        params.insert("limit".to_string(), json!(25));
        params.insert("strict".to_string(), json!(true));

        assert_eq!(encode_query(&params), "limit=25&strict=true");
    }

    #[test]
    fn test_percent_escapes_reserved_characters() {
        let mut params = QueryParams::new();
        params.insert("name".to_string(), json!("a b&c"));

        assert_eq!(encode_query(&params), "name=a+b%26c");
    }

    #[test]
    fn test_empty_params() {
        assert_eq!(encode_query(&QueryParams::new()), "");
    }
}
