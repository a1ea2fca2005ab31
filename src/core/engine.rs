//! Recommendation engine
//!
//! Maps a subject combination and an expected score to three tiers of
//! courses. Every course reachable through the subject combination's
//! categories is compared against its minimum score:
//!
//! - `score >= min + 10` is a best fit
//! - `min <= score < min + 10` is a safe option
//! - `score < min` is a backup option
//!
//! Courses without an eligibility rule use [`DEFAULT_MIN_SCORE`]. Missing
//! categories or courses simply contribute nothing.

use crate::core::models::{Catalog, MinScore};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Minimum score assumed for courses without an eligibility rule
pub const DEFAULT_MIN_SCORE: MinScore = 50;

/// Points above the minimum needed for a best fit
pub const BEST_FIT_MARGIN: u16 = 10;

/// Highest meaningful expected score (a percentage)
pub const MAX_SCORE: u8 = 100;

/// Eligibility tier of one course for one score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Below the minimum score
    Backup,
    /// At or above the minimum, within the margin
    Safe,
    /// Comfortably above the minimum
    BestFit,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BestFit => write!(f, "best fit"),
            Self::Safe => write!(f, "safe"),
            Self::Backup => write!(f, "backup"),
        }
    }
}

/// Classify an expected score against a course's minimum score
#[must_use]
pub fn classify(expected_score: u8, min_score: MinScore) -> Tier {
    let expected = u16::from(expected_score);
    let min = u16::from(min_score);
    if expected >= min + BEST_FIT_MARGIN {
        Tier::BestFit
    } else if expected >= min {
        Tier::Safe
    } else {
        Tier::Backup
    }
}

/// Effective minimum score of a course
#[must_use]
pub fn min_score(catalog: &Catalog, course: &str) -> MinScore {
    catalog
        .eligibility
        .get(course)
        .copied()
        .unwrap_or(DEFAULT_MIN_SCORE)
}

/// Tiered recommendation result.
///
/// Tiers keep duplicates: a course listed under two reachable categories
/// appears twice. Only [`Recommendation::alternate`] deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Courses comfortably within reach
    pub best_fit: Vec<String>,
    /// Courses just within reach
    pub safe: Vec<String>,
    /// Courses below the expected score
    pub backup: Vec<String>,
}

impl Recommendation {
    /// Courses in the given tier
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::BestFit => &self.best_fit,
            Tier::Safe => &self.safe,
            Tier::Backup => &self.backup,
        }
    }

    fn push(&mut self, tier: Tier, course: &str) {
        let list = match tier {
            Tier::BestFit => &mut self.best_fit,
            Tier::Safe => &mut self.safe,
            Tier::Backup => &mut self.backup,
        };
        list.push(course.to_string());
    }

    /// Union of safe and backup courses without duplicates, in first-seen order
    #[must_use]
    pub fn alternate(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.safe
            .iter()
            .chain(&self.backup)
            .filter(|course| seen.insert(course.as_str()))
            .cloned()
            .collect()
    }

    /// Total number of entries across all tiers, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.best_fit.len() + self.safe.len() + self.backup.len()
    }

    /// Whether every tier is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Recommend courses for a subject combination and expected score
#[must_use]
pub fn recommend(catalog: &Catalog, subject_combination: &str, expected_score: u8) -> Recommendation {
    let mut result = Recommendation::default();

    let categories = catalog
        .categories
        .get(subject_combination)
        .map_or(&[][..], Vec::as_slice);

    for category in categories {
        let courses = catalog.courses.get(category).map_or(&[][..], Vec::as_slice);
        for course in courses {
            let tier = classify(expected_score, min_score(catalog, course));
            result.push(tier, course);
        }
    }

    crate::debug!(
        "Recommendation for '{subject_combination}' at {expected_score}%: {} best fit, {} safe, {} backup",
        result.best_fit.len(),
        result.safe.len(),
        result.backup.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Mapping;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn data_it_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog
            .categories
            .insert("Mathematics + Computer Science".into(), names(&["Data & IT"]));
        catalog
            .courses
            .insert("Data & IT".into(), names(&["BCA", "B.Sc Computer Science"]));
        catalog.eligibility = [("BCA", 45), ("B.Sc Computer Science", 60)]
            .into_iter()
            .map(|(course, min)| (course.to_string(), min))
            .collect::<Mapping<MinScore>>();
        catalog
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(70, 60), Tier::BestFit);
        assert_eq!(classify(69, 60), Tier::Safe);
        assert_eq!(classify(60, 60), Tier::Safe);
        assert_eq!(classify(59, 60), Tier::Backup);
    }

    #[test]
    fn test_classify_does_not_overflow() {
        assert_eq!(classify(255, 250), Tier::Safe);
        assert_eq!(classify(100, 255), Tier::Backup);
        assert_eq!(classify(0, 0), Tier::Safe);
    }

    #[test]
    fn test_min_score_defaults_to_fifty() {
        let catalog = data_it_catalog();
        assert_eq!(min_score(&catalog, "BCA"), 45);
        assert_eq!(min_score(&catalog, "Unlisted"), DEFAULT_MIN_SCORE);
    }

    #[test]
    fn test_high_score_puts_everything_in_best_fit() {
        let result = recommend(&data_it_catalog(), "Mathematics + Computer Science", 70);
        assert_eq!(result.best_fit, names(&["BCA", "B.Sc Computer Science"]));
        assert!(result.safe.is_empty());
        assert!(result.backup.is_empty());
    }

    #[test]
    fn test_middle_score_splits_safe_and_backup() {
        let result = recommend(&data_it_catalog(), "Mathematics + Computer Science", 50);
        assert!(result.best_fit.is_empty());
        assert_eq!(result.safe, names(&["BCA"]));
        assert_eq!(result.backup, names(&["B.Sc Computer Science"]));
    }

    #[test]
    fn test_unknown_subject_combination_is_empty() {
        let result = recommend(&data_it_catalog(), "Underwater Basket Weaving", 90);
        assert!(result.is_empty());
    }

    #[test]
    fn test_missing_category_contributes_nothing() {
        let mut catalog = data_it_catalog();
        catalog.categories.insert(
            "Mathematics + Computer Science".into(),
            names(&["Ghost Category", "Data & IT"]),
        );
        let result = recommend(&catalog, "Mathematics + Computer Science", 70);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_overlapping_categories_keep_duplicates() {
        let mut catalog = data_it_catalog();
        catalog.categories.insert(
            "Mathematics + Computer Science".into(),
            names(&["Data & IT", "Computing"]),
        );
        catalog.courses.insert("Computing".into(), names(&["BCA", "Data Science"]));

        let result = recommend(&catalog, "Mathematics + Computer Science", 50);
        assert_eq!(result.safe, names(&["BCA", "BCA", "Data Science"]));
        assert_eq!(result.backup, names(&["B.Sc Computer Science"]));
        assert_eq!(
            result.alternate(),
            names(&["BCA", "Data Science", "B.Sc Computer Science"])
        );
    }

    #[test]
    fn test_order_follows_categories_then_courses() {
        let mut catalog = Catalog::default();
        catalog.categories.insert("S".into(), names(&["Second", "First"]));
        catalog.courses.insert("First".into(), names(&["a", "b"]));
        catalog.courses.insert("Second".into(), names(&["z", "y"]));

        let result = recommend(&catalog, "S", 100);
        assert_eq!(result.best_fit, names(&["z", "y", "a", "b"]));
    }

    #[test]
    fn test_recommendation_serializes_tiers() {
        let result = recommend(&data_it_catalog(), "Mathematics + Computer Science", 50);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["safe"][0], "BCA");
        assert_eq!(json["backup"][0], "B.Sc Computer Science");
        assert!(json["best_fit"].as_array().unwrap().is_empty());
    }
}
