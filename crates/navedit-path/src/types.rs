//! Type definitions for tree paths.

/// A single step of a path.
///
/// Descends either into a mapping by key or into a sequence by index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Descend into an object by key.
    Key(String),
    /// Descend into an array by index.
    Index(usize),
}

impl Step {
    /// Construct a key step.
    pub fn key(key: impl Into<String>) -> Self {
        Step::Key(key.into())
    }

    /// Construct an index step.
    pub fn index(index: usize) -> Self {
        Step::Index(index)
    }

    /// The key, if this is a key step.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Step::Key(key) => Some(key),
            Step::Index(_) => None,
        }
    }

    /// The index, if this is an index step.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Step::Key(_) => None,
            Step::Index(index) => Some(*index),
        }
    }
}

/// A path into a tree.
///
/// The empty path addresses the root value.
pub type Path = Vec<Step>;
