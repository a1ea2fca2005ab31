//! Integration tests for report export

use career_guide::engine::recommend;
use career_guide::models::Catalog;
use career_guide::query::categories_by_subject_combination;
use career_guide::report::{
    default_file_name, HtmlReporter, MarkdownReporter, ReportContext, ReportFormat,
    ReportGenerator, StudentProfile, NO_ALTERNATE, NO_RECOMMENDED,
};
use career_guide::store::{seed, MemoryStore};
use std::fs;
use tempfile::TempDir;

fn seeded_catalog() -> Catalog {
    let store = MemoryStore::new();
    seed(&store, false).unwrap();
    Catalog::load(&store).unwrap()
}

fn profile(score: u8) -> StudentProfile {
    StudentProfile {
        name: "Priya Nair".to_string(),
        board: "State Board".to_string(),
        stream: "Science".to_string(),
        subject_combination: "Mathematics + Computer Science".to_string(),
        expected_score: score,
    }
}

#[test]
fn test_markdown_report_written_to_default_name() {
    let catalog = seeded_catalog();
    let profile = profile(95);
    let categories = categories_by_subject_combination(&catalog, &profile.subject_combination);
    let recommendation = recommend(&catalog, &profile.subject_combination, profile.expected_score);
    let ctx = ReportContext::new(&profile, categories, &recommendation);

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir
        .path()
        .join(default_file_name(&profile.name, ReportFormat::Markdown));
    MarkdownReporter::new().generate(&ctx, &path).unwrap();

    assert!(path.ends_with("Priya_Nair_Career_Recommendation_Report.md"));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("| **Name** | Priya Nair |"));
    assert!(text.contains("| **Subject Combination** | Mathematics + Computer Science |"));
    assert!(text.contains("| **Expected Marks** | 95% |"));
    assert!(text.contains("## Recommended Courses"));
    assert!(text.contains("## Alternate Career Options"));
    assert!(text.contains("| 1 | BCA |"));
}

#[test]
fn test_low_score_report_has_empty_recommended_table() {
    let catalog = seeded_catalog();
    let profile = profile(0);
    let categories = categories_by_subject_combination(&catalog, &profile.subject_combination);
    let recommendation = recommend(&catalog, &profile.subject_combination, profile.expected_score);
    let ctx = ReportContext::new(&profile, categories, &recommendation);

    let html = HtmlReporter::new().render(&ctx).unwrap();
    assert!(html.contains(NO_RECOMMENDED));
    assert!(!html.contains(NO_ALTERNATE));
    assert!(html.contains("Priya Nair"));
}

#[test]
fn test_unknown_subject_combination_reports_both_empty_messages() {
    let catalog = seeded_catalog();
    let mut profile = profile(80);
    profile.subject_combination = "Astrology".to_string();
    let categories = categories_by_subject_combination(&catalog, &profile.subject_combination);
    let recommendation = recommend(&catalog, &profile.subject_combination, profile.expected_score);
    let ctx = ReportContext::new(&profile, categories, &recommendation);

    let md = MarkdownReporter::new().render(&ctx).unwrap();
    assert!(md.contains(NO_RECOMMENDED));
    assert!(md.contains(NO_ALTERNATE));
}

#[test]
fn test_askama_template_dirs_hold_the_report_templates() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let settings: toml::Value =
        toml::from_str(&fs::read_to_string(root.join("askama.toml")).unwrap()).unwrap();
    let dirs = settings["general"]["dirs"].as_array().unwrap();

    assert_eq!(dirs.len(), 1);
    let dir = root.join(dirs[0].as_str().unwrap());
    assert!(dir.join("report.html").is_file());
    assert!(dir.join("report.md").is_file());
    assert!(!root.join("templates").exists());
}
