//! The editor session: the one handle the presentation layer holds.
//!
//! The session owns the document, the backup coordinator, and the document
//! path; callers address nodes by path string and get `Result`s back, never
//! references into the tree. Operations that would discard unsaved edits
//! (`load`, `restore_backup`, `close`) refuse while dirty; the caller
//! decides whether to [`Session::save`] or [`Session::discard_changes`]
//! and retry.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::backup::{BackupId, Coordinator, DirStore};
use crate::codec;
use crate::document::Document;
use crate::error::EditorError;
use crate::mutate;
use crate::project::{project, Row, Rows, TypeTag};

/// Name of the backup directory kept next to the document.
pub const BACKUP_DIR_NAME: &str = "backups";

pub struct Session {
    document_path: PathBuf,
    document: Document,
    backups: Coordinator<DirStore>,
}

impl Session {
    /// Open the document at `document_path`, keeping backups in a
    /// `backups/` directory beside it.
    pub fn open(document_path: impl Into<PathBuf>) -> Result<Session, EditorError> {
        let document_path = document_path.into();
        let backup_dir = document_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(BACKUP_DIR_NAME);
        Session::open_with_backup_dir(document_path, backup_dir)
    }

    /// Open the document with an explicit backup directory.
    pub fn open_with_backup_dir(
        document_path: impl Into<PathBuf>,
        backup_dir: impl Into<PathBuf>,
    ) -> Result<Session, EditorError> {
        let document_path = document_path.into();
        let document = read_document(&document_path)?;
        log::info!("opened {}", document_path.display());
        Ok(Session {
            document_path,
            document,
            backups: Coordinator::new(DirStore::new(backup_dir)),
        })
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Re-read the document from disk, replacing the in-memory tree.
    ///
    /// Refuses with [`EditorError::UnsavedChanges`] while dirty.
    pub fn load(&mut self) -> Result<(), EditorError> {
        if self.is_dirty() {
            return Err(EditorError::UnsavedChanges);
        }
        self.document = read_document(&self.document_path)?;
        log::info!("reloaded {}", self.document_path.display());
        Ok(())
    }

    /// Drop all unsaved edits, reverting the tree to the baseline captured
    /// at the last load or save.
    pub fn discard_changes(&mut self) -> Result<(), EditorError> {
        let baseline = self.document.baseline().to_string();
        let tree = codec::parse_document(&baseline)?;
        self.document.load(tree, baseline);
        Ok(())
    }

    /// Persist the current tree.
    ///
    /// The bytes already on disk are snapshotted before the file is
    /// overwritten; that ordering is the only recovery mechanism for a bad
    /// save. Returns the id of the backup taken.
    pub fn save(&mut self) -> Result<BackupId, EditorError> {
        let on_disk = fs::read(&self.document_path)?;
        let backup_id = self.backups.snapshot(&on_disk)?;
        let text = self.document.serialize();
        fs::write(&self.document_path, &text)?;
        self.document.mark_persisted(text);
        log::info!("saved {}", self.document_path.display());
        Ok(backup_id)
    }

    /// Snapshot the persisted bytes on demand, without saving.
    pub fn create_backup(&mut self) -> Result<BackupId, EditorError> {
        let on_disk = fs::read(&self.document_path)?;
        Ok(self.backups.snapshot(&on_disk)?)
    }

    /// Known backups, newest first.
    pub fn list_backups(&self) -> Result<Vec<BackupId>, EditorError> {
        Ok(self.backups.list()?)
    }

    /// Replace the document file and the in-memory tree with backup `id`.
    ///
    /// Refuses with [`EditorError::UnsavedChanges`] while dirty. The
    /// pre-restore file is snapshotted first, so a restore can itself be
    /// undone. The restored bytes go through the normal parse and schema
    /// checks before anything on disk is overwritten.
    pub fn restore_backup(&mut self, id: &BackupId) -> Result<(), EditorError> {
        if self.is_dirty() {
            return Err(EditorError::UnsavedChanges);
        }
        let on_disk = fs::read(&self.document_path)?;
        let bytes = self.backups.restore(id, &on_disk)?;
        let tree = codec::parse_document_bytes(&bytes)?;
        fs::write(&self.document_path, &bytes)?;
        let baseline = codec::format_document(&tree);
        self.document.load(tree, baseline);
        Ok(())
    }

    /// Flattened display rows of the live tree, in pre-order.
    pub fn rows(&self) -> Rows<'_> {
        project(self.document.tree())
    }

    /// Collected [`rows`](Session::rows), for callers that want a `Vec`.
    pub fn row_list(&self) -> Vec<Row> {
        self.rows().collect()
    }

    /// Replace the scalar addressed by `path_text` with `new_value`.
    ///
    /// `expected` is the type tag from the row being edited; a stale row
    /// fails with a type mismatch instead of clobbering the live value.
    /// Returns the displaced value.
    pub fn edit_scalar_at(
        &mut self,
        path_text: &str,
        new_value: Value,
        expected: TypeTag,
    ) -> Result<Value, EditorError> {
        let path = navedit_path::decode(path_text)?;
        Ok(mutate::set_scalar(
            self.document.tree_mut(),
            &path,
            new_value,
            expected,
        )?)
    }

    /// Delete the node addressed by `path_text`, returning the removed
    /// value. Paths computed before an array delete are invalidated;
    /// callers re-project.
    pub fn delete_at(&mut self, path_text: &str) -> Result<Value, EditorError> {
        let path = navedit_path::decode(path_text)?;
        Ok(mutate::delete_at(self.document.tree_mut(), &path)?)
    }

    pub fn is_dirty(&self) -> bool {
        self.document.is_dirty()
    }

    /// Closing guard: refuses with [`EditorError::UnsavedChanges`] while
    /// dirty, so the caller can offer save / discard / abort before
    /// dropping the session.
    pub fn close(&self) -> Result<(), EditorError> {
        if self.is_dirty() {
            return Err(EditorError::UnsavedChanges);
        }
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<Document, EditorError> {
    let text = fs::read_to_string(path)?;
    let tree = codec::parse_document(&text)?;
    let baseline = codec::format_document(&tree);
    Ok(Document::new(tree, baseline))
}
