//! core::storage
//!
//! The persisted configuration store.
//!
//! # Lifecycle
//!
//! One `Store` is constructed at process start and threaded through the
//! execution context. The document is loaded lazily on first read,
//! memoized for the process lifetime, and persisted after each mutation.
//!
//! # Failure policy
//!
//! Availability over durability: read, parse, and write errors are
//! swallowed. A missing or corrupt file loads as the empty document and
//! a failed save is a no-op. The tool must never crash because of the
//! configuration file; command correctness does not depend on it.
//!
//! # Concurrency
//!
//! The store is `Clone` (shared interior state) and safe within one
//! process. There is no cross-process locking: concurrent invocations
//! against the same file race with last-writer-wins semantics, accepted
//! for an interactive single-user tool.

pub mod schema;

pub use schema::{Document, SchemaError};

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::core::paths;

/// Handle to the persisted configuration document.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    /// Target file; `None` when no home directory resolves, in which
    /// case the store is memory-only.
    path: Option<PathBuf>,
    /// Lazily loaded document. `None` until first read.
    document: Option<Document>,
}

impl Store {
    /// Open the store at the default per-user location.
    pub fn open_default() -> Self {
        Self::new(paths::storage_path())
    }

    /// Open the store at an explicit path. Intended for tests, which
    /// must never touch the real per-user file.
    pub fn at_path(path: PathBuf) -> Self {
        Self::new(Some(path))
    }

    fn new(path: Option<PathBuf>) -> Self {
        Store {
            inner: Arc::new(Mutex::new(Inner {
                path,
                document: None,
            })),
        }
    }

    /// Current document, loading from disk on first access.
    ///
    /// Returns a deep copy; mutating it never affects store state.
    pub fn get(&self) -> Document {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.loaded().clone()
    }

    /// Apply `f` to a copy of the current document.
    ///
    /// The result is validated against the schema: on success it becomes
    /// the new state and is persisted; on failure the attempted update
    /// is discarded and the previous document is returned unchanged.
    pub fn update<F>(&self, f: F) -> Document
    where
        F: FnOnce(Document) -> Document,
    {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let current = inner.loaded().clone();
        let updated = f(current.clone());
        if updated.validate().is_err() {
            return current;
        }
        inner.document = Some(updated.clone());
        inner.save();
        updated
    }

    /// Reset to the empty document and persist it.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.document = Some(Document::default());
        inner.save();
    }
}

impl Inner {
    fn loaded(&mut self) -> &Document {
        if self.document.is_none() {
            self.document = Some(self.load());
        }
        self.document.as_ref().unwrap_or_else(|| unreachable!())
    }

    fn load(&self) -> Document {
        let Some(path) = &self.path else {
            return Document::default();
        };
        let Ok(data) = fs::read_to_string(path) else {
            return Document::default();
        };
        match serde_json::from_str::<Document>(&data) {
            Ok(doc) if doc.validate().is_ok() => doc,
            _ => Document::default(),
        }
    }

    /// Best-effort persistence: failures are swallowed.
    fn save(&self) {
        let (Some(path), Some(doc)) = (&self.path, &self.document) else {
            return;
        };
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        if let Ok(data) = serde_json::to_string_pretty(doc) {
            let _ = fs::write(path, data);
        }
    }
}
