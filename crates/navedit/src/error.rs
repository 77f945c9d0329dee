//! Session-level error taxonomy.

use std::io;

use thiserror::Error;

use crate::backup::BackupError;
use crate::codec::CodecError;
use crate::mutate::MutateError;
use navedit_path::PathError;

/// Every failure a user-facing operation can report. All of these are
/// recovered at the call boundary: the in-memory tree stays in its
/// last-known-good state and the session remains usable.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Malformed persisted text, or the required top-level key is missing.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// Bad path syntax in an edit or delete request.
    #[error(transparent)]
    Path(#[from] PathError),
    /// Path resolution failure, stale-type edit, or delete-root.
    #[error(transparent)]
    Mutate(#[from] MutateError),
    /// Unknown backup id, or backup storage I/O failure.
    #[error(transparent)]
    Backup(#[from] BackupError),
    /// I/O failure on the document file itself.
    #[error("document I/O failed: {0}")]
    Storage(#[from] io::Error),
    /// The operation would discard unsaved edits; save or discard first.
    #[error("unsaved changes; save or discard them before continuing")]
    UnsavedChanges,
}
