//! Flattening of a navigation tree into display rows.
//!
//! [`project`] walks the tree in pre-order and yields one [`Row`] per node:
//! a container row first, then its children in insertion/index order. Rows
//! are a display-only projection; they carry no identity and every edit
//! goes back through a path-addressed operation.

use std::fmt;

use navedit_path::{Path, Step};
use serde_json::Value;

/// The runtime kind of a tree node, as shown in the type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Object,
    Array,
    String,
    Boolean,
    Number,
    Null,
}

impl TypeTag {
    /// Classify a value.
    pub fn of(value: &Value) -> TypeTag {
        match value {
            Value::Object(_) => TypeTag::Object,
            Value::Array(_) => TypeTag::Array,
            Value::String(_) => TypeTag::String,
            // Boolean is matched ahead of Number: hosts where booleans are
            // also numeric must never tag a boolean as Number.
            Value::Bool(_) => TypeTag::Boolean,
            Value::Number(_) => TypeTag::Number,
            Value::Null => TypeTag::Null,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Object => "object",
            TypeTag::Array => "array",
            TypeTag::String => "string",
            TypeTag::Boolean => "boolean",
            TypeTag::Number => "number",
            TypeTag::Null => "null",
        }
    }

    /// True for objects and arrays.
    pub fn is_container(&self) -> bool {
        matches!(self, TypeTag::Object | TypeTag::Array)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One display row of the flattened tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Structured path of the node; the string form is a codec concern.
    pub path: Path,
    /// Key within the parent object, or `[i]` within the parent array.
    pub display_key: String,
    /// Canonical scalar form, or a structural summary for containers.
    pub display_value: String,
    pub type_tag: TypeTag,
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{{{} entries}}", map.len()),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
    }
}

struct Pending<'a> {
    path: Path,
    display_key: String,
    value: &'a Value,
}

/// Lazy pre-order row iterator returned by [`project`].
pub struct Rows<'a> {
    stack: Vec<Pending<'a>>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let Pending {
            path,
            display_key,
            value,
        } = self.stack.pop()?;
        push_children(&mut self.stack, &path, value);
        Some(Row {
            display_key,
            display_value: display_value(value),
            type_tag: TypeTag::of(value),
            path,
        })
    }
}

fn push_children<'a>(stack: &mut Vec<Pending<'a>>, path: &[Step], value: &'a Value) {
    // Children are pushed in reverse so the stack pops them in order.
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter().rev() {
                let mut child_path = path.to_vec();
                child_path.push(Step::key(key));
                stack.push(Pending {
                    path: child_path,
                    display_key: key.clone(),
                    value: child,
                });
            }
        }
        Value::Array(arr) => {
            for (index, child) in arr.iter().enumerate().rev() {
                let mut child_path = path.to_vec();
                child_path.push(Step::index(index));
                stack.push(Pending {
                    path: child_path,
                    display_key: format!("[{index}]"),
                    value: child,
                });
            }
        }
        _ => {}
    }
}

/// Flatten a tree into display rows, in pre-order.
///
/// The root container itself gets no row; rows start at its children. A
/// scalar root projects to nothing. Purely reads the tree.
///
/// # Example
///
/// ```
/// use navedit::project::{project, TypeTag};
///
/// let doc = serde_json::json!({"navigationItems": [{"title": "Main"}]});
/// let rows: Vec<_> = project(&doc).collect();
/// assert_eq!(rows[0].display_key, "navigationItems");
/// assert_eq!(rows[0].type_tag, TypeTag::Array);
/// assert_eq!(rows[2].display_value, "Main");
/// ```
pub fn project(tree: &Value) -> Rows<'_> {
    let mut stack = Vec::new();
    push_children(&mut stack, &[], tree);
    Rows { stack }
}
