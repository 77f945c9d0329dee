//! In-place, path-addressed mutation of a navigation tree.
//!
//! Both operations are synchronous and leave the tree untouched on any
//! error, so a failed edit is always recoverable at the caller.

use navedit_path::{get_mut, Step};
use serde_json::Value;
use thiserror::Error;

use crate::project::TypeTag;

#[derive(Debug, Error, PartialEq)]
pub enum MutateError {
    #[error("path does not resolve to an existing node")]
    PathNotFound,
    #[error("stale edit: expected a {expected} at the target, found a {actual}")]
    TypeMismatch { expected: TypeTag, actual: TypeTag },
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

/// Replace the scalar at `path` with `new_value`, returning the displaced
/// value.
///
/// `expected` is the type tag the caller read off the projection it is
/// editing; if the live value's tag differs at mutation time the edit fails
/// with [`MutateError::TypeMismatch`] instead of clobbering a node the
/// caller never saw.
///
/// # Errors
///
/// - [`MutateError::InvalidOperation`] — empty path (the root is not a
///   scalar slot), container `new_value`, or container `expected` tag.
/// - [`MutateError::PathNotFound`] — any step missing, out of range, or of
///   the wrong kind for the container it lands in.
pub fn set_scalar(
    doc: &mut Value,
    path: &[Step],
    new_value: Value,
    expected: TypeTag,
) -> Result<Value, MutateError> {
    if path.is_empty() {
        return Err(MutateError::InvalidOperation(
            "cannot replace the document root",
        ));
    }
    if TypeTag::of(&new_value).is_container() {
        return Err(MutateError::InvalidOperation(
            "replacement value must be a scalar",
        ));
    }
    if expected.is_container() {
        return Err(MutateError::InvalidOperation(
            "containers cannot be edited as scalars",
        ));
    }
    let target = get_mut(doc, path).ok_or(MutateError::PathNotFound)?;
    let actual = TypeTag::of(target);
    if actual != expected {
        return Err(MutateError::TypeMismatch { expected, actual });
    }
    Ok(std::mem::replace(target, new_value))
}

/// Remove the node at `path` from its parent, returning the removed value.
///
/// Object parents drop the key with insertion order of the remaining keys
/// preserved; array parents shift later elements down one index, so every
/// path computed before the delete is invalidated and callers re-project.
///
/// # Errors
///
/// - [`MutateError::InvalidOperation`] — empty path (the root has no
///   parent to remove it from).
/// - [`MutateError::PathNotFound`] — the parent does not resolve, the
///   final step is missing, or its kind does not match the parent.
pub fn delete_at(doc: &mut Value, path: &[Step]) -> Result<Value, MutateError> {
    let (last, parent_path) = path
        .split_last()
        .ok_or(MutateError::InvalidOperation("cannot delete the document root"))?;
    let parent = get_mut(doc, parent_path).ok_or(MutateError::PathNotFound)?;
    match (last, parent) {
        (Step::Key(key), Value::Object(map)) => {
            // shift_remove keeps the remaining keys in insertion order,
            // which re-serialization depends on.
            map.shift_remove(key).ok_or(MutateError::PathNotFound)
        }
        (Step::Index(index), Value::Array(arr)) => {
            if *index >= arr.len() {
                return Err(MutateError::PathNotFound);
            }
            Ok(arr.remove(*index))
        }
        _ => Err(MutateError::PathNotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navedit_path::decode;
    use serde_json::json;

    fn path(text: &str) -> Vec<Step> {
        decode(text).unwrap()
    }

    #[test]
    fn test_set_scalar() {
        let mut doc = json!({"navigationItems": [{"title": "Main", "url": "/"}]});
        let old = set_scalar(
            &mut doc,
            &path("navigationItems[0].title"),
            json!("Home"),
            TypeTag::String,
        )
        .unwrap();
        assert_eq!(old, json!("Main"));
        assert_eq!(doc["navigationItems"][0]["title"], json!("Home"));
    }

    #[test]
    fn test_set_scalar_type_mismatch_on_stale_row() {
        let mut doc = json!({"count": 3});
        let result = set_scalar(&mut doc, &path("count"), json!("three"), TypeTag::String);
        assert_eq!(
            result,
            Err(MutateError::TypeMismatch {
                expected: TypeTag::String,
                actual: TypeTag::Number,
            })
        );
        assert_eq!(doc, json!({"count": 3}), "failed edit must not mutate");
    }

    #[test]
    fn test_set_scalar_path_not_found() {
        let mut doc = json!({"a": [1, 2], "b": {"c": 1}});
        for bad in ["missing", "a[5]", "a.x", "b[0]", "b.c.d"] {
            let result = set_scalar(&mut doc, &path(bad), json!(0), TypeTag::Number);
            assert_eq!(result, Err(MutateError::PathNotFound), "path {bad:?}");
        }
    }

    #[test]
    fn test_set_scalar_rejects_root_and_containers() {
        let mut doc = json!({"a": 1});
        assert!(matches!(
            set_scalar(&mut doc, &[], json!(2), TypeTag::Number),
            Err(MutateError::InvalidOperation(_))
        ));
        assert!(matches!(
            set_scalar(&mut doc, &path("a"), json!({"b": 2}), TypeTag::Number),
            Err(MutateError::InvalidOperation(_))
        ));
        assert!(matches!(
            set_scalar(&mut doc, &path("a"), json!(2), TypeTag::Object),
            Err(MutateError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_delete_object_key_keeps_order() {
        let mut doc = json!({"a": 1, "b": 2, "c": 3});
        let removed = delete_at(&mut doc, &path("b")).unwrap();
        assert_eq!(removed, json!(2));
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn test_delete_array_element_shifts_left() {
        let mut doc = json!({"items": ["a", "b", "c"]});
        let removed = delete_at(&mut doc, &path("items[1]")).unwrap();
        assert_eq!(removed, json!("b"));
        assert_eq!(doc["items"], json!(["a", "c"]));
    }

    #[test]
    fn test_delete_root_rejected() {
        let mut doc = json!({"a": 1});
        let result = delete_at(&mut doc, &[]);
        assert!(matches!(result, Err(MutateError::InvalidOperation(_))));
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn test_delete_path_not_found() {
        let mut doc = json!({"a": [1], "b": {"c": 1}});
        for bad in ["missing", "a[3]", "a.x", "b[0]", "missing.deeper"] {
            let result = delete_at(&mut doc, &path(bad));
            assert_eq!(result, Err(MutateError::PathNotFound), "path {bad:?}");
        }
        assert_eq!(doc, json!({"a": [1], "b": {"c": 1}}));
    }

    #[test]
    fn test_delete_subtree() {
        let mut doc = json!({"navigationItems": [{"title": "Main"}, {"title": "Docs"}]});
        delete_at(&mut doc, &path("navigationItems[0]")).unwrap();
        assert_eq!(doc["navigationItems"], json!([{"title": "Docs"}]));
    }
}
