//! Dotted-path addressing for navigation document trees.
//!
//! A path is a sequence of [`Step`]s: `Key` steps descend into objects,
//! `Index` steps descend into arrays. The string form joins key steps with
//! `.` and renders index steps as a bracketed numeral with no separator, so
//! `a.b[2].c` addresses `doc["a"]["b"][2]["c"]`. The root is the empty
//! string.
//!
//! # Example
//!
//! ```
//! use navedit_path::{decode, encode, get, Step};
//!
//! let path = decode("a.b[2].c").unwrap();
//! assert_eq!(
//!     path,
//!     vec![Step::key("a"), Step::key("b"), Step::index(2), Step::key("c")]
//! );
//! assert_eq!(encode(&path).unwrap(), "a.b[2].c");
//!
//! let doc = serde_json::json!({"a": {"b": [0, 0, {"c": 42}]}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(42)));
//! ```
//!
//! # Grammar limits
//!
//! Keys containing `.`, `[` or `]`, and the empty key, are outside the
//! supported grammar: [`encode`] rejects them with
//! [`PathError::UnsupportedKey`] instead of producing a string that would
//! not round-trip. Within the grammar, `decode(encode(p)) == p` holds for
//! every path.

use thiserror::Error;

pub mod types;
pub use types::{Path, Step};

pub mod resolve;
pub use resolve::{get, get_mut};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("malformed path {text:?}: {reason}")]
    Malformed { text: String, reason: &'static str },
    #[error("key {key:?} cannot appear in a path (empty, or contains '.', '[' or ']')")]
    UnsupportedKey { key: String },
}

fn malformed(text: &str, reason: &'static str) -> PathError {
    PathError::Malformed {
        text: text.to_string(),
        reason,
    }
}

/// Encode a path into its string form.
///
/// The root (empty path) encodes to the empty string.
///
/// # Example
///
/// ```
/// use navedit_path::{encode, Step};
///
/// assert_eq!(encode(&[]).unwrap(), "");
/// assert_eq!(
///     encode(&[Step::key("items"), Step::index(3), Step::key("url")]).unwrap(),
///     "items[3].url"
/// );
/// ```
pub fn encode(path: &[Step]) -> Result<String, PathError> {
    let mut out = String::new();
    for step in path {
        match step {
            Step::Key(key) => {
                if key.is_empty() || key.contains(['.', '[', ']']) {
                    return Err(PathError::UnsupportedKey { key: key.clone() });
                }
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            Step::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    Ok(out)
}

/// Decode the string form of a path.
///
/// The empty string decodes to the root (empty path). Each dot-separated
/// segment is a key followed by zero or more `[n]` index groups; a segment
/// consisting purely of index groups contributes no key step.
///
/// # Errors
///
/// Empty segments, unterminated or empty brackets, non-numeric or
/// zero-padded indices, and text trailing an index group are all
/// [`PathError::Malformed`].
///
/// # Example
///
/// ```
/// use navedit_path::{decode, Step};
///
/// assert_eq!(decode("").unwrap(), vec![]);
/// assert_eq!(
///     decode("items[3].url").unwrap(),
///     vec![Step::key("items"), Step::index(3), Step::key("url")]
/// );
/// assert!(decode("items[3").is_err());
/// ```
pub fn decode(text: &str) -> Result<Path, PathError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let mut path = Vec::new();
    for segment in text.split('.') {
        if segment.is_empty() {
            return Err(malformed(text, "empty segment"));
        }
        let (key, mut rest) = match segment.find('[') {
            Some(pos) => (&segment[..pos], &segment[pos..]),
            None => (segment, ""),
        };
        if key.contains(']') {
            return Err(malformed(text, "']' outside an index group"));
        }
        if !key.is_empty() {
            path.push(Step::Key(key.to_string()));
        }
        while !rest.is_empty() {
            if !rest.starts_with('[') {
                return Err(malformed(text, "text after an index group"));
            }
            let close = match rest.find(']') {
                Some(pos) => pos,
                None => return Err(malformed(text, "unterminated index group")),
            };
            let digits = &rest[1..close];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed(text, "index must be a non-negative integer"));
            }
            if digits.len() > 1 && digits.starts_with('0') {
                return Err(malformed(text, "index has a leading zero"));
            }
            let index: usize = digits
                .parse()
                .map_err(|_| malformed(text, "index out of range"))?;
            path.push(Step::Index(index));
            rest = &rest[close + 1..];
        }
    }
    Ok(path)
}

/// Check if a path addresses the root value.
pub fn is_root(path: &[Step]) -> bool {
    path.is_empty()
}
