//! The in-memory navigation document and its dirty-state baseline.

use serde_json::Value;

use crate::codec;

/// Owns the live tree plus the serialized form captured at the last load or
/// save. Dirty state is recomputed on demand by re-serializing, never
/// maintained incrementally; edits arrive at human pace.
#[derive(Debug)]
pub struct Document {
    tree: Value,
    baseline: String,
}

impl Document {
    /// Create a document from a freshly parsed tree, with `persisted_form`
    /// as the clean baseline.
    pub fn new(tree: Value, persisted_form: String) -> Self {
        Document {
            tree,
            baseline: persisted_form,
        }
    }

    /// Replace the whole document. No incremental reconciliation: the old
    /// tree is dropped wholesale and the baseline reset.
    pub fn load(&mut self, tree: Value, persisted_form: String) {
        self.tree = tree;
        self.baseline = persisted_form;
    }

    pub fn tree(&self) -> &Value {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Value {
        &mut self.tree
    }

    /// The serialized form captured at the last load or save.
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Canonical persisted form of the current tree.
    pub fn serialize(&self) -> String {
        codec::format_document(&self.tree)
    }

    /// True iff a fresh serialization differs byte-for-byte from the
    /// baseline.
    pub fn is_dirty(&self) -> bool {
        self.serialize() != self.baseline
    }

    /// Reset the baseline after a successful save.
    pub fn mark_persisted(&mut self, persisted_form: String) {
        self.baseline = persisted_form;
    }
}
