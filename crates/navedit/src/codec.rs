//! Text boundary for the persisted navigation document.
//!
//! The on-disk form is pretty-printed JSON. The top-level value must be an
//! object with an array-valued `"navigationItems"` key; anything else is a
//! load-time error surfaced to the caller.

use serde_json::Value;
use thiserror::Error;

/// Required top-level key of a navigation document.
pub const NAVIGATION_ITEMS_KEY: &str = "navigationItems";

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid JSON in navigation document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("navigation document has no array-valued \"navigationItems\" key")]
    Schema,
}

/// Parse persisted bytes into a navigation tree.
pub fn parse_document_bytes(bytes: &[u8]) -> Result<Value, CodecError> {
    let tree: Value = serde_json::from_slice(bytes)?;
    match tree.get(NAVIGATION_ITEMS_KEY) {
        Some(Value::Array(_)) => Ok(tree),
        _ => Err(CodecError::Schema),
    }
}

/// Parse persisted text into a navigation tree.
pub fn parse_document(text: &str) -> Result<Value, CodecError> {
    parse_document_bytes(text.as_bytes())
}

/// Serialize a tree to its canonical persisted form (pretty JSON, 2-space
/// indent). Key order is preserved from the tree.
pub fn format_document(tree: &Value) -> String {
    // Serializing an in-memory Value to a String does not fail.
    serde_json::to_string_pretty(tree).expect("JSON value serialization")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_document() {
        let tree = parse_document(r#"{"navigationItems": [{"title": "Main"}]}"#).unwrap();
        assert_eq!(tree["navigationItems"][0]["title"], json!("Main"));
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        let result = parse_document("{not json");
        assert!(matches!(result, Err(CodecError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_missing_key() {
        let result = parse_document(r#"{"items": []}"#);
        assert!(matches!(result, Err(CodecError::Schema)));
    }

    #[test]
    fn test_parse_rejects_non_array_key() {
        let result = parse_document(r#"{"navigationItems": {"title": "Main"}}"#);
        assert!(matches!(result, Err(CodecError::Schema)));
    }

    #[test]
    fn test_format_preserves_key_order() {
        let text = r#"{"navigationItems": [], "zeta": 1, "alpha": 2}"#;
        let tree = parse_document(text).unwrap();
        let formatted = format_document(&tree);
        let zeta = formatted.find("zeta").unwrap();
        let alpha = formatted.find("alpha").unwrap();
        assert!(zeta < alpha, "insertion order lost: {formatted}");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let tree = json!({"navigationItems": [{"title": "Main", "url": "/"}]});
        let reparsed = parse_document(&format_document(&tree)).unwrap();
        assert_eq!(reparsed, tree);
    }
}
