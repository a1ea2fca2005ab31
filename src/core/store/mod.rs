//! Configuration store
//!
//! Documents are whole JSON objects addressed by [`DocumentKind`]. A store
//! only moves text; parsing and pretty-printing live in [`load_document`] and
//! [`save_document`] so every backend writes the same bytes.

pub mod file;
pub mod memory;

use crate::core::models::DocumentKind;
use crate::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised while reading or writing configuration documents
#[derive(Debug, Error)]
pub enum StoreError {
    /// The document has never been written
    #[error("{kind} not found at {}", path.display())]
    Missing {
        /// Document that was requested
        kind: DocumentKind,
        /// Where it was expected
        path: PathBuf,
    },

    /// Underlying I/O failure
    #[error("failed to access {kind}: {source}")]
    Io {
        /// Document being accessed
        kind: DocumentKind,
        /// I/O error
        source: std::io::Error,
    },

    /// The document exists but is not a valid mapping
    #[error("{kind} is malformed: {source}")]
    Malformed {
        /// Document being parsed
        kind: DocumentKind,
        /// Parse error with line and column
        source: serde_json::Error,
    },

    /// The in-memory mapping could not be encoded
    #[error("failed to encode {kind}: {source}")]
    Encode {
        /// Document being written
        kind: DocumentKind,
        /// Encoding error
        source: serde_json::Error,
    },
}

/// Backend holding the raw text of each document
pub trait DocumentStore {
    /// Read the full text of a document
    ///
    /// # Errors
    /// Returns [`StoreError::Missing`] when the document does not exist, or
    /// [`StoreError::Io`] when it cannot be read.
    fn read(&self, kind: DocumentKind) -> Result<String, StoreError>;

    /// Replace the full text of a document
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] when the document cannot be written.
    fn write(&self, kind: DocumentKind, contents: &str) -> Result<(), StoreError>;

    /// Whether the document has been written
    fn exists(&self, kind: DocumentKind) -> bool;
}

/// Load and parse one document.
///
/// # Errors
/// Propagates read failures; invalid JSON or an unexpected value type is
/// reported as [`StoreError::Malformed`].
pub fn load_document<V: DeserializeOwned>(
    store: &dyn DocumentStore,
    kind: DocumentKind,
) -> Result<V, StoreError> {
    let text = store.read(kind)?;
    let document =
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed { kind, source })?;
    debug!("Loaded {kind} ({} bytes)", text.len());
    Ok(document)
}

/// Serialize one document and overwrite it in the store.
///
/// Output is pretty-printed with two-space indentation, non-ASCII text kept
/// as-is, and a trailing newline.
///
/// # Errors
/// Returns [`StoreError::Encode`] or the backend's write error.
pub fn save_document<V: Serialize>(
    store: &dyn DocumentStore,
    kind: DocumentKind,
    document: &V,
) -> Result<(), StoreError> {
    let mut text = serde_json::to_string_pretty(document)
        .map_err(|source| StoreError::Encode { kind, source })?;
    text.push('\n');
    store.write(kind, &text)?;
    debug!("Saved {kind} ({} bytes)", text.len());
    Ok(())
}

/// Bundled sample documents used to initialise an empty store
const SEED_DOCUMENTS: [(DocumentKind, &str); 5] = [
    (
        DocumentKind::Boards,
        include_str!("../../../assets/seed/boards.json"),
    ),
    (
        DocumentKind::Streams,
        include_str!("../../../assets/seed/streams.json"),
    ),
    (
        DocumentKind::CourseCategories,
        include_str!("../../../assets/seed/course_categories.json"),
    ),
    (
        DocumentKind::Courses,
        include_str!("../../../assets/seed/courses.json"),
    ),
    (
        DocumentKind::EligibilityRules,
        include_str!("../../../assets/seed/eligibility_rules.json"),
    ),
];

/// Write the bundled sample documents into `store`.
///
/// Documents that already exist are left alone unless `overwrite` is set.
/// Returns the documents that were written.
///
/// # Errors
/// Propagates the first write failure.
pub fn seed(store: &dyn DocumentStore, overwrite: bool) -> Result<Vec<DocumentKind>, StoreError> {
    let mut written = Vec::new();
    for (kind, contents) in SEED_DOCUMENTS {
        if !overwrite && store.exists(kind) {
            debug!("Keeping existing {kind}");
            continue;
        }
        store.write(kind, contents)?;
        written.push(kind);
    }
    info!("Seeded {} document(s)", written.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Mapping};

    #[test]
    fn test_seed_documents_parse() {
        let store = MemoryStore::new();
        seed(&store, false).unwrap();
        let catalog = Catalog::load(&store).unwrap();

        assert_eq!(
            catalog.boards.keys().map(String::as_str).collect::<Vec<_>>(),
            ["CBSE", "ICSE", "State Board"]
        );
        assert_eq!(catalog.eligibility.get("BCA"), Some(&45));
        assert_eq!(catalog.eligibility.get("B.Sc Computer Science"), Some(&60));
    }

    #[test]
    fn test_seed_keeps_existing_documents() {
        let store = MemoryStore::new();
        store.write(DocumentKind::Boards, "{}").unwrap();

        let written = seed(&store, false).unwrap();
        assert!(!written.contains(&DocumentKind::Boards));
        assert_eq!(written.len(), 4);
        assert_eq!(store.read(DocumentKind::Boards).unwrap(), "{}");

        let written = seed(&store, true).unwrap();
        assert_eq!(written.len(), 5);
        assert_ne!(store.read(DocumentKind::Boards).unwrap(), "{}");
    }

    #[test]
    fn test_save_document_is_pretty_and_unescaped() {
        let store = MemoryStore::new();
        let mut doc: Mapping<Vec<String>> = Mapping::new();
        doc.insert("विज्ञान".into(), vec!["भौतिकी".to_string()]);
        save_document(&store, DocumentKind::Streams, &doc).unwrap();

        let text = store.read(DocumentKind::Streams).unwrap();
        assert_eq!(text, "{\n  \"विज्ञान\": [\n    \"भौतिकी\"\n  ]\n}\n");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let store = MemoryStore::new();
        store.write(DocumentKind::Courses, "{ not json").unwrap();

        let result: Result<Mapping<Vec<String>>, _> =
            load_document(&store, DocumentKind::Courses);
        assert!(matches!(
            result,
            Err(StoreError::Malformed {
                kind: DocumentKind::Courses,
                ..
            })
        ));
    }

    #[test]
    fn test_wrong_value_type_is_malformed() {
        let store = MemoryStore::new();
        store
            .write(DocumentKind::EligibilityRules, r#"{"BCA": "forty"}"#)
            .unwrap();

        let result: Result<Mapping<u8>, _> = load_document(&store, DocumentKind::EligibilityRules);
        assert!(matches!(result, Err(StoreError::Malformed { .. })));
    }
}
