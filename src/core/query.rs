//! Read-only lookups over a catalog snapshot
//!
//! Every accessor returns an empty slice for an unknown key.

use crate::core::models::{Catalog, Mapping, NameList};
use serde::Serialize;

fn lookup<'a>(mapping: &'a Mapping<NameList>, key: &str) -> &'a [String] {
    mapping.get(key).map_or(&[][..], Vec::as_slice)
}

/// Board names in stored order
pub fn boards(catalog: &Catalog) -> impl Iterator<Item = &str> {
    catalog.boards.keys().map(String::as_str)
}

/// Streams offered by a board
#[must_use]
pub fn streams_by_board<'a>(catalog: &'a Catalog, board: &str) -> &'a [String] {
    lookup(&catalog.boards, board)
}

/// Subject combinations available under a stream
#[must_use]
pub fn subject_combinations_by_stream<'a>(catalog: &'a Catalog, stream: &str) -> &'a [String] {
    lookup(&catalog.streams, stream)
}

/// Course categories reachable from a subject combination
#[must_use]
pub fn categories_by_subject_combination<'a>(
    catalog: &'a Catalog,
    subject_combination: &str,
) -> &'a [String] {
    lookup(&catalog.categories, subject_combination)
}

/// Courses listed under a category
#[must_use]
pub fn courses_by_category<'a>(catalog: &'a Catalog, category: &str) -> &'a [String] {
    lookup(&catalog.courses, category)
}

/// One row of the "available courses" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableCourse<'a> {
    /// Category the course was reached through
    pub category: &'a str,
    /// Course name
    pub course: &'a str,
}

/// Every `(category, course)` pair reachable from a subject combination
#[must_use]
pub fn available_courses<'a>(
    catalog: &'a Catalog,
    subject_combination: &str,
) -> Vec<AvailableCourse<'a>> {
    categories_by_subject_combination(catalog, subject_combination)
        .iter()
        .flat_map(|category| {
            courses_by_category(catalog, category)
                .iter()
                .map(move |course| AvailableCourse {
                    category: category.as_str(),
                    course: course.as_str(),
                })
        })
        .collect()
}

/// Size of the catalog, as shown on the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Overview {
    /// Number of boards
    pub boards: usize,
    /// Number of streams
    pub streams: usize,
    /// Subject combinations summed over all streams
    pub subject_combinations: usize,
    /// Categories summed over all subject combinations
    pub categories: usize,
    /// Courses summed over all categories
    pub courses: usize,
    /// Number of explicit eligibility rules
    pub eligibility_rules: usize,
}

/// Count the catalog's contents
#[must_use]
pub fn overview(catalog: &Catalog) -> Overview {
    let total = |mapping: &Mapping<NameList>| -> usize { mapping.values().map(Vec::len).sum() };
    Overview {
        boards: catalog.boards.len(),
        streams: catalog.streams.len(),
        subject_combinations: total(&catalog.streams),
        categories: total(&catalog.categories),
        courses: total(&catalog.courses),
        eligibility_rules: catalog.eligibility.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.boards.insert("CBSE".into(), names(&["Science", "Commerce"]));
        catalog.boards.insert("ICSE".into(), names(&["Science"]));
        catalog
            .streams
            .insert("Science".into(), names(&["PCM", "Mathematics + Computer Science"]));
        catalog.categories.insert(
            "Mathematics + Computer Science".into(),
            names(&["Data & IT", "Emerging Technology"]),
        );
        catalog
            .courses
            .insert("Data & IT".into(), names(&["BCA", "B.Sc Computer Science"]));
        catalog
            .courses
            .insert("Emerging Technology".into(), names(&["AI & ML"]));
        catalog.eligibility.insert("BCA".into(), 45);
        catalog
    }

    #[test]
    fn test_accessors_return_stored_lists() {
        let catalog = catalog();
        assert_eq!(boards(&catalog).collect::<Vec<_>>(), ["CBSE", "ICSE"]);
        assert_eq!(streams_by_board(&catalog, "CBSE"), ["Science", "Commerce"]);
        assert_eq!(
            subject_combinations_by_stream(&catalog, "Science"),
            ["PCM", "Mathematics + Computer Science"]
        );
        assert_eq!(
            categories_by_subject_combination(&catalog, "Mathematics + Computer Science"),
            ["Data & IT", "Emerging Technology"]
        );
        assert_eq!(
            courses_by_category(&catalog, "Data & IT"),
            ["BCA", "B.Sc Computer Science"]
        );
    }

    #[test]
    fn test_unknown_keys_are_empty() {
        let catalog = catalog();
        assert!(streams_by_board(&catalog, "Unknown Board").is_empty());
        assert!(subject_combinations_by_stream(&catalog, "Arts").is_empty());
        assert!(categories_by_subject_combination(&catalog, "PCM").is_empty());
        assert!(courses_by_category(&catalog, "Medical").is_empty());
        assert!(available_courses(&catalog, "PCM").is_empty());
    }

    #[test]
    fn test_available_courses_flatten_categories() {
        let catalog = catalog();
        let rows = available_courses(&catalog, "Mathematics + Computer Science");
        let pairs: Vec<_> = rows.iter().map(|r| (r.category, r.course)).collect();
        assert_eq!(
            pairs,
            [
                ("Data & IT", "BCA"),
                ("Data & IT", "B.Sc Computer Science"),
                ("Emerging Technology", "AI & ML"),
            ]
        );
    }

    #[test]
    fn test_overview_counts() {
        let summary = overview(&catalog());
        assert_eq!(
            summary,
            Overview {
                boards: 2,
                streams: 1,
                subject_combinations: 2,
                categories: 2,
                courses: 3,
                eligibility_rules: 1,
            }
        );
    }
}
