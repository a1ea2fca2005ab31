//! Directory-backed document store

use super::{DocumentStore, StoreError};
use crate::core::models::DocumentKind;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores each document as `<dir>/<file_name>`
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`. The directory is created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the documents
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a document
    #[must_use]
    pub fn path_of(&self, kind: DocumentKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}

impl DocumentStore for FileStore {
    fn read(&self, kind: DocumentKind) -> Result<String, StoreError> {
        let path = self.path_of(kind);
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StoreError::Missing { kind, path }
            } else {
                StoreError::Io { kind, source }
            }
        })
    }

    fn write(&self, kind: DocumentKind, contents: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io { kind, source })?;
        fs::write(self.path_of(kind), contents).map_err(|source| StoreError::Io { kind, source })
    }

    fn exists(&self, kind: DocumentKind) -> bool {
        self.path_of(kind).is_file()
    }
}
