//! Property tests for score classification and recommendation

use career_guide::engine::{classify, min_score, recommend, Tier, DEFAULT_MIN_SCORE};
use career_guide::models::{Catalog, DocumentKind, Mapping, MinScore, NameList};
use career_guide::store::{load_document, save_document, MemoryStore};
use proptest::prelude::*;

fn catalog_with(courses: &[String], rules: &[(String, MinScore)]) -> Catalog {
    let mut catalog = Catalog::default();
    catalog.categories.insert("S".into(), vec!["C".to_string()]);
    catalog.courses.insert("C".into(), courses.to_vec());
    for (course, min) in rules {
        catalog.eligibility.insert(course.clone(), *min);
    }
    catalog
}

proptest! {
    #[test]
    fn exactly_one_tier_matches_the_thresholds(expected in any::<u8>(), min in any::<u8>()) {
        let (e, m) = (u16::from(expected), u16::from(min));
        let tier = classify(expected, min);
        prop_assert_eq!(tier == Tier::BestFit, e >= m + 10);
        prop_assert_eq!(tier == Tier::Safe, e >= m && e < m + 10);
        prop_assert_eq!(tier == Tier::Backup, e < m);
    }

    #[test]
    fn raising_the_score_never_lowers_the_tier(expected in 0u8..100, bump in 1u8..=100, min in 0u8..=100) {
        let higher = expected.saturating_add(bump);
        prop_assert!(classify(higher, min) >= classify(expected, min));
    }

    #[test]
    fn courses_without_rules_use_the_default(course in "[A-Za-z .&]{1,24}") {
        let catalog = catalog_with(&[course.clone()], &[]);
        prop_assert_eq!(min_score(&catalog, &course), DEFAULT_MIN_SCORE);
        prop_assert_eq!(min_score(&catalog, &course), 50);
    }

    #[test]
    fn every_course_lands_in_exactly_one_tier(
        courses in prop::collection::vec("[A-E]{1,2}", 0..12),
        score in 0u8..=100,
    ) {
        let catalog = catalog_with(&courses, &[]);
        let result = recommend(&catalog, "S", score);
        prop_assert_eq!(result.len(), courses.len());

        let alternate = result.alternate();
        let mut unique = alternate.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), alternate.len());
    }

    #[test]
    fn save_then_load_reproduces_the_mapping(
        entries in prop::collection::vec(("\\PC{1,12}", prop::collection::vec("\\PC{0,12}", 0..4)), 0..8)
    ) {
        let mut doc: Mapping<NameList> = Mapping::new();
        for (key, values) in entries {
            doc.insert(key, values);
        }

        let store = MemoryStore::new();
        save_document(&store, DocumentKind::Courses, &doc).unwrap();
        let loaded: Mapping<NameList> = load_document(&store, DocumentKind::Courses).unwrap();
        prop_assert!(loaded.iter().eq(doc.iter()));
    }
}

#[test]
fn scenario_high_score_is_all_best_fit() {
    let catalog = catalog_with(
        &["BCA".to_string(), "B.Sc Computer Science".to_string()],
        &[("BCA".to_string(), 45), ("B.Sc Computer Science".to_string(), 60)],
    );
    let result = recommend(&catalog, "S", 70);
    assert_eq!(result.best_fit, ["BCA", "B.Sc Computer Science"]);
    assert!(result.safe.is_empty());
    assert!(result.backup.is_empty());
}

#[test]
fn scenario_middle_score_splits() {
    let catalog = catalog_with(
        &["BCA".to_string(), "B.Sc Computer Science".to_string()],
        &[("BCA".to_string(), 45), ("B.Sc Computer Science".to_string(), 60)],
    );
    let result = recommend(&catalog, "S", 50);
    assert!(result.best_fit.is_empty());
    assert_eq!(result.safe, ["BCA"]);
    assert_eq!(result.backup, ["B.Sc Computer Science"]);
}
