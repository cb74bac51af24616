use serde::Deserialize;
use serde_json::Value;

use crate::codes;

/// Parsed response body: `{"code"?: string, "message"?: string, "results"?: any}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<Value>,
}

/// Failure reported by the graph service inside a response envelope.
#[derive(Debug, Clone, thiserror::Error)]
#[error("graph error {code}: {message}")]
pub struct GraphError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parse a raw response body and classify its embedded status code.
///
/// An envelope with no `code`, or with a code on the [`codes::GOOD_CODES`]
/// allow-list, is returned as-is. Anything else becomes a [`GraphError`]
/// carrying the envelope's `code` and `message`.
pub fn decode(body: &str) -> Result<Envelope, EnvelopeError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if let Some(code) = envelope.code.as_deref() {
        if !codes::is_good_code(code) {
            return Err(GraphError {
                code: code.to_string(),
                message: envelope.message.clone().unwrap_or_default(),
            }
            .into());
        }
    }
    Ok(envelope)
}

/// The version endpoint returns slightly malformed JSON: a trailing stray
/// byte and raw embedded newlines. Strip the final character and escape the
/// newlines so the body parses. Applies to that endpoint only.
pub fn sanitize_version_body(raw: &str) -> String {
    let trimmed = match raw.char_indices().next_back() {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    };
    trimmed.replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_without_code() {
        let envelope = decode(r#"{"results": [{"v_id": "12345"}]}"#).unwrap();
        assert!(envelope.code.is_none());
        assert_eq!(envelope.results.unwrap()[0]["v_id"], "12345");
    }

    #[test]
    fn test_decode_good_code() {
        let envelope = decode(r#"{"code": "REST-0001", "results": []}"#).unwrap();
        assert_eq!(envelope.code.as_deref(), Some("REST-0001"));
    }

    #[test]
    fn test_decode_bad_code() {
        let err = decode(
            r#"{"code": "REST-1004", "message": "The graph name 'occcc' parsed from the url = '/graph/occcc/vertices/entity/54321' is not found, please provide a valid graph name."}"#,
        )
        .unwrap_err();
        match err {
            EnvelopeError::Graph(graph_err) => {
                assert_eq!(graph_err.code, "REST-1004");
                assert!(graph_err.message.starts_with("The graph name 'occcc'"));
            }
            other => panic!("expected graph error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_bad_code_without_message() {
        let err = decode(r#"{"code": "601"}"#).unwrap_err();
        match err {
            EnvelopeError::Graph(graph_err) => {
                assert_eq!(graph_err.code, "601");
                assert_eq!(graph_err.message, "");
            }
            other => panic!("expected graph error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_invalid_json() {
        assert!(matches!(decode("not json"), Err(EnvelopeError::Parse(_))));
    }

    #[test]
    fn test_sanitize_version_body() {
        let raw = "{\"message\": \"TigerGraph RESTPP\nversion 2.4\"}\0";
        assert_eq!(
            sanitize_version_body(raw),
            "{\"message\": \"TigerGraph RESTPP\\nversion 2.4\"}"
        );
    }

    #[test]
    fn test_sanitized_version_body_parses() {
        let raw = "{\"message\": \"line one\nline two\"}\n";
        let value: serde_json::Value = serde_json::from_str(&sanitize_version_body(raw)).unwrap();
        assert_eq!(value["message"], "line one\nline two");
    }

    #[test]
    fn test_sanitize_empty_body() {
        assert_eq!(sanitize_version_body(""), "");
    }
}
