//! Timestamped snapshots of the persisted document.
//!
//! The [`Coordinator`] owns naming and ordering; byte storage sits behind
//! the [`BlobStore`] seam so tests can drive the coordinator without a
//! filesystem. Snapshots are immutable once written and only external
//! housekeeping ever deletes them.

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Local;
use thiserror::Error;

/// Blob name prefix: `navigation_<YYYYMMDD_HHMMSS>.json`.
pub const BACKUP_PREFIX: &str = "navigation_";
pub const BACKUP_SUFFIX: &str = ".json";

const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Identifier of one stored snapshot. The stamp is fixed width and zero
/// padded, so descending lexical order is newest-first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BackupId(String);

impl BackupId {
    pub fn new(name: impl Into<String>) -> Self {
        BackupId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BackupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("no backup named {0:?}")]
    NotFound(String),
    #[error("backup storage failed: {0}")]
    Storage(#[from] io::Error),
}

/// Versioned blob store: `put`/`list`/`get` over a flat namespace.
pub trait BlobStore {
    fn put(&mut self, id: &str, bytes: &[u8]) -> io::Result<()>;
    fn list(&self) -> io::Result<Vec<String>>;
    fn get(&self, id: &str) -> io::Result<Option<Vec<u8>>>;

    fn contains(&self, id: &str) -> io::Result<bool> {
        Ok(self.get(id)?.is_some())
    }
}

/// One file per blob, in a backup directory created on demand.
#[derive(Debug)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirStore { dir: dir.into() }
    }
}

impl BlobStore for DirStore {
    fn put(&mut self, id: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(id), bytes)
    }

    fn list(&self) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn get(&self, id: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.dir.join(id)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn contains(&self, id: &str) -> io::Result<bool> {
        Ok(self.dir.join(id).exists())
    }
}

fn is_backup_name(name: &str) -> bool {
    name.starts_with(BACKUP_PREFIX) && name.ends_with(BACKUP_SUFFIX)
}

/// Orchestrates snapshot capture and restoration over a [`BlobStore`].
#[derive(Debug)]
pub struct Coordinator<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> Coordinator<S> {
    pub fn new(store: S) -> Self {
        Coordinator { store }
    }

    /// Store `bytes` under a fresh wall-clock identifier.
    ///
    /// Second-resolution stamps collide under rapid consecutive saves; a
    /// zero-padded counter suffix (`navigation_<ts>_<nn>.json`) keeps every
    /// snapshot distinct and still sorted after the uncounted name, so no
    /// snapshot is ever silently overwritten.
    pub fn snapshot(&mut self, bytes: &[u8]) -> Result<BackupId, BackupError> {
        let stamp = Local::now().format(STAMP_FORMAT).to_string();
        let mut name = format!("{BACKUP_PREFIX}{stamp}{BACKUP_SUFFIX}");
        let mut seq = 0u32;
        while self.store.contains(&name)? {
            seq += 1;
            name = format!("{BACKUP_PREFIX}{stamp}_{seq:02}{BACKUP_SUFFIX}");
        }
        self.store.put(&name, bytes)?;
        log::info!("backup written: {name}");
        Ok(BackupId(name))
    }

    /// All known snapshots, newest first. Foreign files in the namespace
    /// are ignored.
    pub fn list(&self) -> Result<Vec<BackupId>, BackupError> {
        let mut ids: Vec<BackupId> = self
            .store
            .list()?
            .into_iter()
            .filter(|name| is_backup_name(name))
            .map(BackupId)
            .collect();
        ids.sort_by(|a, b| b.cmp(a));
        Ok(ids)
    }

    /// Fetch the bytes of snapshot `id`, snapshotting `current` first so
    /// the restore is itself undoable. The pre-restore snapshot must land
    /// before the caller is handed anything to overwrite with.
    pub fn restore(&mut self, id: &BackupId, current: &[u8]) -> Result<Vec<u8>, BackupError> {
        let bytes = self
            .store
            .get(id.as_str())?
            .ok_or_else(|| BackupError::NotFound(id.to_string()))?;
        self.snapshot(current)?;
        log::info!("restored backup: {id}");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// In-memory store used to drive the coordinator in tests.
    #[derive(Default)]
    struct MemStore {
        blobs: BTreeMap<String, Vec<u8>>,
    }

    impl BlobStore for MemStore {
        fn put(&mut self, id: &str, bytes: &[u8]) -> io::Result<()> {
            self.blobs.insert(id.to_string(), bytes.to_vec());
            Ok(())
        }

        fn list(&self) -> io::Result<Vec<String>> {
            Ok(self.blobs.keys().cloned().collect())
        }

        fn get(&self, id: &str) -> io::Result<Option<Vec<u8>>> {
            Ok(self.blobs.get(id).cloned())
        }
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut coordinator = Coordinator::new(MemStore::default());
        let id = coordinator.snapshot(b"payload").unwrap();
        assert!(id.as_str().starts_with(BACKUP_PREFIX));
        assert!(id.as_str().ends_with(BACKUP_SUFFIX));
        let bytes = coordinator.restore(&id, b"current").unwrap();
        assert_eq!(bytes, b"payload");
    }

    #[test]
    fn test_same_second_snapshots_all_survive() {
        let mut coordinator = Coordinator::new(MemStore::default());
        let a = coordinator.snapshot(b"one").unwrap();
        let b = coordinator.snapshot(b"two").unwrap();
        let c = coordinator.snapshot(b"three").unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_eq!(coordinator.list().unwrap().len(), 3);
    }

    #[test]
    fn test_list_newest_first_ignores_foreign_files() {
        let mut store = MemStore::default();
        store.put("navigation_20240101_120000.json", b"old").unwrap();
        store.put("navigation_20250601_080000.json", b"new").unwrap();
        store.put("README.txt", b"not a backup").unwrap();
        let coordinator = Coordinator::new(store);
        let ids = coordinator.list().unwrap();
        assert_eq!(
            ids,
            vec![
                BackupId::new("navigation_20250601_080000.json"),
                BackupId::new("navigation_20240101_120000.json"),
            ]
        );
    }

    #[test]
    fn test_restore_unknown_id() {
        let mut coordinator = Coordinator::new(MemStore::default());
        let result = coordinator.restore(&BackupId::new("navigation_19990101_000000.json"), b"x");
        assert!(matches!(result, Err(BackupError::NotFound(_))));
        // A failed restore must not leave a stray pre-restore snapshot.
        assert!(coordinator.list().unwrap().is_empty());
    }

    #[test]
    fn test_restore_snapshots_pre_restore_state() {
        let mut coordinator = Coordinator::new(MemStore::default());
        let id = coordinator.snapshot(b"saved").unwrap();
        let before = coordinator.list().unwrap().len();
        coordinator.restore(&id, b"live edits").unwrap();
        assert_eq!(coordinator.list().unwrap().len(), before + 1);
    }

    #[test]
    fn test_dir_store() {
        let dir = tempfile::tempdir().unwrap();
        let backups = dir.path().join("backups");
        let mut store = DirStore::new(&backups);
        // Missing directory lists empty and is created on first put.
        assert!(store.list().unwrap().is_empty());
        store.put("navigation_20240101_120000.json", b"bytes").unwrap();
        assert!(store.contains("navigation_20240101_120000.json").unwrap());
        assert_eq!(
            store.get("navigation_20240101_120000.json").unwrap(),
            Some(b"bytes".to_vec())
        );
        assert_eq!(store.get("navigation_other.json").unwrap(), None);
        assert_eq!(store.list().unwrap(), vec!["navigation_20240101_120000.json"]);
    }
}
