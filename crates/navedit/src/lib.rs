//! Core editing engine for NavSphere navigation documents.
//!
//! A navigation document is a JSON tree: an object whose required
//! `navigationItems` array holds arbitrarily nested sections and link
//! entries. This crate is everything below the UI of the editor tool:
//!
//! - [`document`] — the in-memory tree plus the baseline used for
//!   dirty-state tracking;
//! - [`codec`] — the text boundary (parse, schema check, canonical
//!   formatting);
//! - [`project`] — flattening the tree into display rows addressed by
//!   structured paths;
//! - [`mutate`] — path-addressed in-place edits (set scalar, delete);
//! - [`backup`] — timestamped snapshots with restore, behind a blob-store
//!   seam;
//! - [`session`] — the single handle a presentation layer drives, wiring
//!   the above together with unsaved-changes guards.
//!
//! Paths themselves live in the [`navedit_path`] crate.
//!
//! # Example
//!
//! ```
//! use navedit::mutate::set_scalar;
//! use navedit::project::{project, TypeTag};
//! use navedit_path::decode;
//!
//! let mut doc = serde_json::json!({"navigationItems": [{"title": "Main", "url": "/"}]});
//!
//! let rows: Vec<_> = project(&doc).collect();
//! assert_eq!(rows[2].display_key, "title");
//! assert_eq!(rows[2].display_value, "Main");
//!
//! let path = decode("navigationItems[0].title").unwrap();
//! set_scalar(&mut doc, &path, "Home".into(), TypeTag::String).unwrap();
//! assert_eq!(doc["navigationItems"][0]["title"], "Home");
//! ```

pub mod backup;
pub mod codec;
pub mod document;
pub mod error;
pub mod mutate;
pub mod project;
pub mod session;

pub use backup::{BackupError, BackupId, BlobStore, Coordinator, DirStore};
pub use codec::CodecError;
pub use document::Document;
pub use error::EditorError;
pub use mutate::MutateError;
pub use project::{project, Row, Rows, TypeTag};
pub use session::Session;
