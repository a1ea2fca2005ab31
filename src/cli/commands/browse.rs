//! Browse command handler
//!
//! Read-only views over the configuration documents. Unknown names print an
//! empty result rather than an error.

use super::{load_catalog, open_store, print_list};
use crate::args::BrowseSubcommand;
use career_guide::config::Config;
use career_guide::engine::{min_score, DEFAULT_MIN_SCORE};
use career_guide::models::Catalog;
use career_guide::query;

/// Dispatch browse subcommands
pub fn run(subcommand: BrowseSubcommand, config: &Config) {
    let catalog = load_catalog(&open_store(config));

    match subcommand {
        BrowseSubcommand::Boards => {
            let boards: Vec<String> = query::boards(&catalog).map(str::to_string).collect();
            println!("Boards:");
            print_list(&boards, "  (no boards configured)");
        }
        BrowseSubcommand::Streams { board } => {
            println!("Streams offered by {board}:");
            print_list(
                query::streams_by_board(&catalog, &board),
                "  (none)",
            );
        }
        BrowseSubcommand::Subjects { stream } => {
            println!("Subject combinations under {stream}:");
            print_list(
                query::subject_combinations_by_stream(&catalog, &stream),
                "  (none)",
            );
        }
        BrowseSubcommand::Categories { subjects } => {
            println!("Course categories for {subjects}:");
            print_list(
                query::categories_by_subject_combination(&catalog, &subjects),
                "  (none)",
            );
        }
        BrowseSubcommand::Courses { category } => {
            println!("Courses in {category}:");
            print_list(query::courses_by_category(&catalog, &category), "  (none)");
        }
        BrowseSubcommand::Available { subjects } => show_available(&catalog, &subjects),
        BrowseSubcommand::Eligibility { course } => {
            let min = min_score(&catalog, &course);
            if catalog.eligibility.contains_key(&course) {
                println!("{course}: minimum {min}%");
            } else {
                println!("{course}: minimum {DEFAULT_MIN_SCORE}% (default, no rule configured)");
            }
        }
    }
}

/// Print the category/course table for a subject combination
fn show_available(catalog: &Catalog, subjects: &str) {
    let rows = query::available_courses(catalog, subjects);
    println!("Available courses for {subjects}:");
    if rows.is_empty() {
        println!("  (none)");
        return;
    }

    let width = rows
        .iter()
        .map(|row| row.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Course Category".len());
    println!("  {:<width$}  Course Name", "Course Category");
    println!("  {:-<width$}  {:-<11}", "", "");
    for row in rows {
        println!("  {:<width$}  {}", row.category, row.course);
    }
}
