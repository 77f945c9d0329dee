//! Resolution of paths against a live JSON tree.

use serde_json::Value;

use crate::types::Step;

/// Get the value at `path`, if it exists.
///
/// Returns `None` for a key step into an array, an index step into an
/// object, a missing key, an out-of-range index, or any step taken through
/// a scalar.
///
/// # Example
///
/// ```
/// use navedit_path::{get, Step};
/// use serde_json::json;
///
/// let doc = json!({"items": [{"title": "Main"}]});
/// let path = [Step::key("items"), Step::index(0), Step::key("title")];
/// assert_eq!(get(&doc, &path), Some(&json!("Main")));
/// assert_eq!(get(&doc, &[Step::key("missing")]), None);
/// ```
pub fn get<'a>(val: &'a Value, path: &[Step]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match (step, current) {
            (Step::Key(key), Value::Object(map)) => map.get(key)?,
            (Step::Index(index), Value::Array(arr)) => arr.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to the value at `path`, if it exists.
///
/// Resolution rules are the same as [`get`].
pub fn get_mut<'a>(val: &'a mut Value, path: &[Step]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = match (step, current) {
            (Step::Key(key), Value::Object(map)) => map.get_mut(key)?,
            (Step::Index(index), Value::Array(arr)) => arr.get_mut(*index)?,
            _ => return None,
        };
    }
    Some(current)
}
