//! Recommend command handler

use super::{load_catalog, open_store};
use career_guide::config::Config;
use career_guide::engine::{recommend, Recommendation};
use career_guide::error;
use career_guide::query::categories_by_subject_combination;
use serde::Serialize;

/// JSON shape of `recommend --json`
#[derive(Serialize)]
struct RecommendOutput<'a> {
    subject_combination: &'a str,
    expected_score: u8,
    categories: &'a [String],
    #[serde(flatten)]
    tiers: &'a Recommendation,
    alternate: Vec<String>,
}

/// Run the recommendation engine and print the tiers
pub fn run(subjects: &str, score: u8, json: bool, config: &Config) {
    let catalog = load_catalog(&open_store(config));
    let categories = categories_by_subject_combination(&catalog, subjects);
    let result = recommend(&catalog, subjects, score);

    if json {
        let output = RecommendOutput {
            subject_combination: subjects,
            expected_score: score,
            categories,
            tiers: &result,
            alternate: result.alternate(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!("Failed to encode recommendation: {e}");
                eprintln!("✗ Failed to encode recommendation: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if categories.is_empty() {
        println!("No course categories are configured for '{subjects}'.");
        return;
    }

    println!("\n=== Recommendation for {subjects} at {score}% ===\n");
    println!("Categories: {}\n", categories.join(", "));
    print_tier("Best fit", &result.best_fit);
    print_tier("Safe options", &result.safe);
    print_tier("Backup options", &result.backup);
}

fn print_tier(title: &str, courses: &[String]) {
    println!("{title} ({}):", courses.len());
    if courses.is_empty() {
        println!("  -");
    }
    for course in courses {
        println!("  • {course}");
    }
    println!();
}
