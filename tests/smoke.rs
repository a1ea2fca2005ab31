//! Integration smoke tests for `career_guide`

use career_guide::engine::recommend;
use career_guide::get_version;
use career_guide::models::Catalog;
use career_guide::store::{seed, MemoryStore};

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn seeded_catalog_answers_a_recommendation() {
    let store = MemoryStore::new();
    seed(&store, false).unwrap();
    let catalog = Catalog::load(&store).unwrap();

    let result = recommend(&catalog, "Mathematics + Computer Science", 70);
    assert!(result.best_fit.iter().any(|c| c == "BCA"));
    assert!(!result.is_empty());
}
