//! Catalog snapshot and the documents it is built from

use super::Mapping;
use crate::core::store::{load_document, save_document, DocumentStore, StoreError};
use std::fmt;

/// Names listed under a key (streams of a board, courses of a category, ...)
pub type NameList = Vec<String>;

/// Minimum percentage required for baseline eligibility
pub type MinScore = u8;

/// The five named configuration documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Board → streams offered
    Boards,
    /// Stream → subject combinations
    Streams,
    /// Subject combination → course categories
    CourseCategories,
    /// Category → courses
    Courses,
    /// Course → minimum score
    EligibilityRules,
}

impl DocumentKind {
    /// Every document, in load order
    pub const ALL: [Self; 5] = [
        Self::Boards,
        Self::Streams,
        Self::CourseCategories,
        Self::Courses,
        Self::EligibilityRules,
    ];

    /// File name used when the document is stored on disk
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Boards => "boards.json",
            Self::Streams => "streams.json",
            Self::CourseCategories => "course_categories.json",
            Self::Courses => "courses.json",
            Self::EligibilityRules => "eligibility_rules.json",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// In-memory snapshot of all configuration documents.
///
/// The engine and the query facade only ever read a snapshot; reloading is
/// the caller's decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Board → streams
    pub boards: Mapping<NameList>,
    /// Stream → subject combinations
    pub streams: Mapping<NameList>,
    /// Subject combination → categories
    pub categories: Mapping<NameList>,
    /// Category → courses
    pub courses: Mapping<NameList>,
    /// Course → minimum score
    pub eligibility: Mapping<MinScore>,
}

impl Catalog {
    /// Load every document from `store`.
    ///
    /// # Errors
    /// Fails on the first document that is missing, unreadable or malformed.
    pub fn load(store: &dyn DocumentStore) -> Result<Self, StoreError> {
        Ok(Self {
            boards: load_document(store, DocumentKind::Boards)?,
            streams: load_document(store, DocumentKind::Streams)?,
            categories: load_document(store, DocumentKind::CourseCategories)?,
            courses: load_document(store, DocumentKind::Courses)?,
            eligibility: load_document(store, DocumentKind::EligibilityRules)?,
        })
    }

    /// Write every document to `store`, overwriting what was there.
    ///
    /// # Errors
    /// Fails on the first document that cannot be encoded or written.
    pub fn save(&self, store: &dyn DocumentStore) -> Result<(), StoreError> {
        save_document(store, DocumentKind::Boards, &self.boards)?;
        save_document(store, DocumentKind::Streams, &self.streams)?;
        save_document(store, DocumentKind::CourseCategories, &self.categories)?;
        save_document(store, DocumentKind::Courses, &self.courses)?;
        save_document(store, DocumentKind::EligibilityRules, &self.eligibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = DocumentKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DocumentKind::ALL.len());
    }

    #[test]
    fn test_display_uses_file_name() {
        assert_eq!(
            DocumentKind::CourseCategories.to_string(),
            "course_categories.json"
        );
    }
}
