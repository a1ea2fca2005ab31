//! In-process document store

use super::{DocumentStore, StoreError};
use crate::core::models::DocumentKind;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Keeps document text in memory. Single-threaded, like the rest of the crate.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<HashMap<DocumentKind, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn read(&self, kind: DocumentKind) -> Result<String, StoreError> {
        self.documents
            .borrow()
            .get(&kind)
            .cloned()
            .ok_or_else(|| StoreError::Missing {
                kind,
                path: PathBuf::from(kind.file_name()),
            })
    }

    fn write(&self, kind: DocumentKind, contents: &str) -> Result<(), StoreError> {
        self.documents
            .borrow_mut()
            .insert(kind, contents.to_string());
        Ok(())
    }

    fn exists(&self, kind: DocumentKind) -> bool {
        self.documents.borrow().contains_key(&kind)
    }
}
