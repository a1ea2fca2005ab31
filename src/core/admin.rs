//! Administrative editing of the configuration documents
//!
//! Every mutation is a read-modify-write of whole documents: the affected
//! document is loaded fresh from the store, changed, and written back in
//! full. There is no locking; two admins editing the same document at once
//! will lose one of the edits.
//!
//! Removals are gated on an explicit confirmation and may cascade into a
//! second document (a subject combination's categories, a course's
//! eligibility rule).

use crate::core::engine::MAX_SCORE;
use crate::core::models::{Catalog, DocumentKind, Mapping, MinScore, NameList};
use crate::core::query::{self, Overview};
use crate::core::store::{load_document, save_document, DocumentStore, StoreError};
use crate::{info, warn};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Static username/password pair guarding admin access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Admin username
    pub username: String,
    /// Admin password
    pub password: String,
}

impl Credentials {
    /// Create a credential pair
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Constant-time comparison against a login attempt
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let user_ok = self.username.as_bytes().ct_eq(username.as_bytes());
        let pass_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (user_ok & pass_ok).into()
    }
}

/// Errors raised by admin operations
#[derive(Debug, Error)]
pub enum AdminError {
    /// Username or password did not match
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Eligibility thresholds are percentages
    #[error("Minimum score {0} is out of range (0-100)")]
    ScoreOutOfRange(MinScore),

    /// Reading or writing a document failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What an admin operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The change was written
    Applied,
    /// Nothing to do: duplicate addition, absent target, or blank name
    Unchanged,
    /// A removal was requested without confirmation; nothing was written
    NeedsConfirmation,
}

impl Outcome {
    /// Whether a document was written
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

fn clean(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn contains(list: &[String], value: &str) -> bool {
    list.iter().any(|item| item == value)
}

fn list_contains(doc: &Mapping<NameList>, key: &str, value: &str) -> bool {
    doc.get(key).is_some_and(|list| contains(list, value))
}

/// Remove the first occurrence of `value` under `key`
fn remove_from_list(doc: &mut Mapping<NameList>, key: &str, value: &str) -> bool {
    let Some(list) = doc.get_mut(key) else {
        return false;
    };
    match list.iter().position(|item| item == value) {
        Some(idx) => {
            list.remove(idx);
            true
        }
        None => false,
    }
}

/// Authenticated handle for editing a store
pub struct Admin<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> Admin<'a> {
    /// Check credentials and open an admin session on `store`.
    ///
    /// # Errors
    /// Returns [`AdminError::InvalidCredentials`] on mismatch.
    pub fn login(
        store: &'a dyn DocumentStore,
        expected: &Credentials,
        username: &str,
        password: &str,
    ) -> Result<Self, AdminError> {
        if expected.verify(username, password) {
            info!("Admin login for '{username}'");
            Ok(Self { store })
        } else {
            warn!("Rejected admin login for '{username}'");
            Err(AdminError::InvalidCredentials)
        }
    }

    /// Fresh snapshot of every document
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn catalog(&self) -> Result<Catalog, AdminError> {
        Ok(Catalog::load(self.store)?)
    }

    /// Dashboard counts
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn overview(&self) -> Result<Overview, AdminError> {
        Ok(query::overview(&self.catalog()?))
    }

    fn lists(&self, kind: DocumentKind) -> Result<Mapping<NameList>, AdminError> {
        Ok(load_document(self.store, kind)?)
    }

    fn write<V: serde::Serialize>(
        &self,
        kind: DocumentKind,
        doc: &Mapping<V>,
    ) -> Result<(), AdminError> {
        Ok(save_document(self.store, kind, doc)?)
    }

    /// Append `value` to the list under `key`, creating the key if needed
    fn append(&self, kind: DocumentKind, key: &str, value: &str) -> Result<Outcome, AdminError> {
        let (Some(key), Some(value)) = (clean(key), clean(value)) else {
            return Ok(Outcome::Unchanged);
        };
        let mut doc = self.lists(kind)?;
        if list_contains(&doc, key, value) {
            return Ok(Outcome::Unchanged);
        }
        doc.entry(key.to_string()).or_default().push(value.to_string());
        self.write(kind, &doc)?;
        info!("Added '{value}' under '{key}' in {kind}");
        Ok(Outcome::Applied)
    }

    /// Remove `value` from the list under `key`, without cascading
    fn detach(
        &self,
        kind: DocumentKind,
        key: &str,
        value: &str,
        confirmed: bool,
    ) -> Result<Outcome, AdminError> {
        let (Some(key), Some(value)) = (clean(key), clean(value)) else {
            return Ok(Outcome::Unchanged);
        };
        let mut doc = self.lists(kind)?;
        if !list_contains(&doc, key, value) {
            return Ok(Outcome::Unchanged);
        }
        if !confirmed {
            return Ok(Outcome::NeedsConfirmation);
        }
        remove_from_list(&mut doc, key, value);
        self.write(kind, &doc)?;
        info!("Removed '{value}' from '{key}' in {kind}");
        Ok(Outcome::Applied)
    }

    /// Register a new board with no streams
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn add_board(&self, board: &str) -> Result<Outcome, AdminError> {
        let Some(board) = clean(board) else {
            return Ok(Outcome::Unchanged);
        };
        let mut doc = self.lists(DocumentKind::Boards)?;
        if doc.contains_key(board) {
            return Ok(Outcome::Unchanged);
        }
        doc.insert(board.to_string(), Vec::new());
        self.write(DocumentKind::Boards, &doc)?;
        info!("Added board '{board}'");
        Ok(Outcome::Applied)
    }

    /// Remove a board and its stream list
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn remove_board(&self, board: &str, confirmed: bool) -> Result<Outcome, AdminError> {
        let Some(board) = clean(board) else {
            return Ok(Outcome::Unchanged);
        };
        let mut doc = self.lists(DocumentKind::Boards)?;
        if !doc.contains_key(board) {
            return Ok(Outcome::Unchanged);
        }
        if !confirmed {
            return Ok(Outcome::NeedsConfirmation);
        }
        doc.shift_remove(board);
        self.write(DocumentKind::Boards, &doc)?;
        info!("Removed board '{board}'");
        Ok(Outcome::Applied)
    }

    /// Offer a stream under a board.
    ///
    /// The stream also gets an (empty) entry in the streams document so its
    /// subject combinations can be edited.
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn add_stream(&self, board: &str, stream: &str) -> Result<Outcome, AdminError> {
        let outcome = self.append(DocumentKind::Boards, board, stream)?;
        if let (true, Some(stream)) = (outcome.is_applied(), clean(stream)) {
            let mut streams = self.lists(DocumentKind::Streams)?;
            if !streams.contains_key(stream) {
                streams.insert(stream.to_string(), Vec::new());
                self.write(DocumentKind::Streams, &streams)?;
            }
        }
        Ok(outcome)
    }

    /// Stop offering a stream under a board. The stream's subject
    /// combinations stay, since other boards may share it.
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn remove_stream(
        &self,
        board: &str,
        stream: &str,
        confirmed: bool,
    ) -> Result<Outcome, AdminError> {
        self.detach(DocumentKind::Boards, board, stream, confirmed)
    }

    /// Add a subject combination to a stream
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn add_subject_combination(&self, stream: &str, subject: &str) -> Result<Outcome, AdminError> {
        self.append(DocumentKind::Streams, stream, subject)
    }

    /// Remove a subject combination from a stream, together with its
    /// category mapping
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn remove_subject_combination(
        &self,
        stream: &str,
        subject: &str,
        confirmed: bool,
    ) -> Result<Outcome, AdminError> {
        let outcome = self.detach(DocumentKind::Streams, stream, subject, confirmed)?;
        if let (true, Some(subject)) = (outcome.is_applied(), clean(subject)) {
            let mut categories = self.lists(DocumentKind::CourseCategories)?;
            if categories.shift_remove(subject).is_some() {
                self.write(DocumentKind::CourseCategories, &categories)?;
                info!("Removed categories of '{subject}'");
            }
        }
        Ok(outcome)
    }

    /// Map a category to a subject combination
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn add_category(&self, subject: &str, category: &str) -> Result<Outcome, AdminError> {
        self.append(DocumentKind::CourseCategories, subject, category)
    }

    /// Unmap a category from a subject combination
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn remove_category(
        &self,
        subject: &str,
        category: &str,
        confirmed: bool,
    ) -> Result<Outcome, AdminError> {
        self.detach(DocumentKind::CourseCategories, subject, category, confirmed)
    }

    /// Add a course to a category
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn add_course(&self, category: &str, course: &str) -> Result<Outcome, AdminError> {
        self.append(DocumentKind::Courses, category, course)
    }

    /// Remove a course from a category, together with its eligibility rule
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn remove_course(
        &self,
        category: &str,
        course: &str,
        confirmed: bool,
    ) -> Result<Outcome, AdminError> {
        let outcome = self.detach(DocumentKind::Courses, category, course, confirmed)?;
        if let (true, Some(course)) = (outcome.is_applied(), clean(course)) {
            let mut rules: Mapping<MinScore> = load_document(self.store, DocumentKind::EligibilityRules)?;
            if rules.shift_remove(course).is_some() {
                self.write(DocumentKind::EligibilityRules, &rules)?;
                info!("Removed eligibility rule of '{course}'");
            }
        }
        Ok(outcome)
    }

    /// Create or update a course's minimum score
    ///
    /// # Errors
    /// Returns [`AdminError::ScoreOutOfRange`] above 100, or store errors.
    pub fn set_eligibility(&self, course: &str, min_score: MinScore) -> Result<Outcome, AdminError> {
        if min_score > MAX_SCORE {
            return Err(AdminError::ScoreOutOfRange(min_score));
        }
        let Some(course) = clean(course) else {
            return Ok(Outcome::Unchanged);
        };
        let mut rules: Mapping<MinScore> = load_document(self.store, DocumentKind::EligibilityRules)?;
        if rules.get(course) == Some(&min_score) {
            return Ok(Outcome::Unchanged);
        }
        rules.insert(course.to_string(), min_score);
        self.write(DocumentKind::EligibilityRules, &rules)?;
        info!("Set minimum score of '{course}' to {min_score}");
        Ok(Outcome::Applied)
    }

    /// Drop a course's eligibility rule, reverting it to the default minimum
    ///
    /// # Errors
    /// Propagates store errors.
    pub fn remove_eligibility(&self, course: &str, confirmed: bool) -> Result<Outcome, AdminError> {
        let Some(course) = clean(course) else {
            return Ok(Outcome::Unchanged);
        };
        let mut rules: Mapping<MinScore> = load_document(self.store, DocumentKind::EligibilityRules)?;
        if !rules.contains_key(course) {
            return Ok(Outcome::Unchanged);
        }
        if !confirmed {
            return Ok(Outcome::NeedsConfirmation);
        }
        rules.shift_remove(course);
        self.write(DocumentKind::EligibilityRules, &rules)?;
        info!("Removed eligibility rule of '{course}'");
        Ok(Outcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_requires_both_fields() {
        let creds = Credentials::new("admin", "admin123");
        assert!(creds.verify("admin", "admin123"));
        assert!(!creds.verify("admin", "admin12"));
        assert!(!creds.verify("Admin", "admin123"));
        assert!(!creds.verify("", ""));
    }

    #[test]
    fn test_clean_rejects_blank_names() {
        assert_eq!(clean("  BCA "), Some("BCA"));
        assert_eq!(clean("   "), None);
    }

    #[test]
    fn test_remove_from_list_drops_first_match_only() {
        let mut doc: Mapping<NameList> = Mapping::new();
        doc.insert(
            "Data & IT".into(),
            vec!["BCA".to_string(), "MCA".to_string(), "BCA".to_string()],
        );
        assert!(remove_from_list(&mut doc, "Data & IT", "BCA"));
        assert_eq!(
            doc.get("Data & IT").unwrap(),
            &vec!["MCA".to_string(), "BCA".to_string()]
        );
        assert!(!remove_from_list(&mut doc, "Missing", "BCA"));
    }
}
