//! Report generation module for course recommendations
//!
//! This module renders a student's recommendation as a Markdown, HTML or PDF
//! document. Every format shows the same content: the student profile, the
//! recommended (best fit) courses and the alternate career options.

pub mod details;
pub mod formats;

use crate::core::engine::Recommendation;
use std::error::Error;
use std::path::Path;

pub use details::course_detail;
pub use formats::{HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat};

/// Message shown when no course is a best fit
pub const NO_RECOMMENDED: &str = "No courses meet this score range.";

/// Message shown when there are no alternate options
pub const NO_ALTERNATE: &str = "No alternate career options available.";

/// Student inputs echoed at the top of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    /// Student name
    pub name: String,
    /// Education board
    pub board: String,
    /// Stream within the board
    pub stream: String,
    /// Chosen subject combination
    pub subject_combination: String,
    /// Expected percentage
    pub expected_score: u8,
}

/// One row of a course table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    /// 1-based serial number
    pub number: usize,
    /// Course name
    pub name: String,
    /// Short description
    pub details: &'static str,
}

fn rows(courses: &[String]) -> Vec<CourseRow> {
    courses
        .iter()
        .enumerate()
        .map(|(idx, course)| CourseRow {
            number: idx + 1,
            name: course.clone(),
            details: course_detail(course),
        })
        .collect()
}

/// Data context for report generation
///
/// Aggregates everything a template needs so the formats agree on content.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Student inputs
    pub profile: &'a StudentProfile,
    /// Categories reachable from the subject combination
    pub categories: &'a [String],
    /// Best fit courses, duplicates kept
    pub recommended: Vec<CourseRow>,
    /// Safe and backup courses, deduplicated
    pub alternate: Vec<CourseRow>,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(
        profile: &'a StudentProfile,
        categories: &'a [String],
        recommendation: &Recommendation,
    ) -> Self {
        Self {
            profile,
            categories,
            recommended: rows(&recommendation.best_fit),
            alternate: rows(&recommendation.alternate()),
        }
    }

    /// One-sentence summary of the categories the student suits
    #[must_use]
    pub fn summary(&self) -> String {
        if self.categories.is_empty() {
            return "No course categories are configured for this subject combination.".to_string();
        }
        format!(
            "Based on your academic profile, you are well suited for {}-related courses.",
            self.categories.join(", ")
        )
    }
}

/// Default report file name: `<name>_Career_Recommendation_Report.<ext>`
///
/// The student name is reduced to ASCII letters, digits, `-` and `_`, with
/// whitespace turned into `_`. An empty result becomes `Student`.
#[must_use]
pub fn default_file_name(student_name: &str, format: ReportFormat) -> String {
    let stem: String = student_name
        .trim()
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();
    let stem = if stem.is_empty() { "Student" } else { &stem };
    format!(
        "{stem}_Career_Recommendation_Report.{}",
        format.extension()
    )
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> StudentProfile {
        StudentProfile {
            name: "Asha Rao".to_string(),
            board: "CBSE".to_string(),
            stream: "Science".to_string(),
            subject_combination: "Mathematics + Computer Science".to_string(),
            expected_score: 50,
        }
    }

    #[test]
    fn test_context_numbers_rows_and_dedups_alternate() {
        let profile = profile();
        let categories = vec!["Data & IT".to_string()];
        let recommendation = Recommendation {
            best_fit: vec![],
            safe: vec!["BCA".to_string(), "BCA".to_string()],
            backup: vec!["B.Sc Computer Science".to_string()],
        };
        let ctx = ReportContext::new(&profile, &categories, &recommendation);

        assert!(ctx.recommended.is_empty());
        let names: Vec<_> = ctx.alternate.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["BCA", "B.Sc Computer Science"]);
        assert_eq!(ctx.alternate[1].number, 2);
        assert_eq!(ctx.alternate[0].details, course_detail("BCA"));
    }

    #[test]
    fn test_summary_lists_categories() {
        let profile = profile();
        let categories = vec!["Data & IT".to_string(), "Emerging Technology".to_string()];
        let ctx = ReportContext::new(&profile, &categories, &Recommendation::default());
        assert_eq!(
            ctx.summary(),
            "Based on your academic profile, you are well suited for Data & IT, Emerging Technology-related courses."
        );
    }

    #[test]
    fn test_default_file_name_sanitizes() {
        assert_eq!(
            default_file_name("Asha Rao", ReportFormat::Pdf),
            "Asha_Rao_Career_Recommendation_Report.pdf"
        );
        assert_eq!(
            default_file_name("../etc/passwd", ReportFormat::Markdown),
            "etcpasswd_Career_Recommendation_Report.md"
        );
        assert_eq!(
            default_file_name("  ", ReportFormat::Html),
            "Student_Career_Recommendation_Report.html"
        );
    }
}
