//! Report command handler
//!
//! Generates a career recommendation report in Markdown, HTML or PDF.

use super::{load_catalog, open_store};
use career_guide::config::Config;
use career_guide::engine::recommend;
use career_guide::models::Catalog;
use career_guide::query::{categories_by_subject_combination, streams_by_board, subject_combinations_by_stream};
use career_guide::report::{
    default_file_name, HtmlReporter, MarkdownReporter, PdfReporter, ReportContext, ReportFormat,
    ReportGenerator, StudentProfile,
};
use career_guide::{error, info, verbose, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `profile` - Student inputs shown in the report
/// * `format_str` - Report format (markdown, html, pdf)
/// * `output_file` - Optional output path
/// * `config` - Configuration with data and reports directories
pub fn run(profile: &StudentProfile, format_str: &str, output_file: Option<&Path>, config: &Config) {
    match generate_report(profile, format_str, output_file, config) {
        Ok(path) => println!("✓ Report generated: {}", path.display()),
        Err(err) => {
            error!("Report generation failed for '{}': {err}", profile.name);
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Warn when the profile does not follow the board/stream/subject hierarchy
fn check_profile(catalog: &Catalog, profile: &StudentProfile) {
    let offers = |list: &[String], item: &str| list.iter().any(|s| s == item);

    if !offers(streams_by_board(catalog, &profile.board), &profile.stream) {
        warn!(
            "Stream '{}' is not offered by board '{}'",
            profile.stream, profile.board
        );
        eprintln!(
            "⚠ Stream '{}' is not offered by board '{}'",
            profile.stream, profile.board
        );
    }
    if !offers(
        subject_combinations_by_stream(catalog, &profile.stream),
        &profile.subject_combination,
    ) {
        warn!(
            "Subject combination '{}' is not listed under stream '{}'",
            profile.subject_combination, profile.stream
        );
        eprintln!(
            "⚠ Subject combination '{}' is not listed under stream '{}'",
            profile.subject_combination, profile.stream
        );
    }
}

/// Resolve the output path: explicit file, or the reports directory
fn output_path(
    profile: &StudentProfile,
    format: ReportFormat,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output_file {
        return Ok(path.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(default_file_name(&profile.name, format)))
}

/// Build the report and write it in the requested format
fn generate_report(
    profile: &StudentProfile,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;

    let catalog = load_catalog(&open_store(config));
    check_profile(&catalog, profile);

    let categories = categories_by_subject_combination(&catalog, &profile.subject_combination);
    let recommendation = recommend(&catalog, &profile.subject_combination, profile.expected_score);
    let ctx = ReportContext::new(profile, categories, &recommendation);
    verbose!(
        "Preparing {format} report: {} recommended, {} alternate",
        ctx.recommended.len(),
        ctx.alternate.len()
    );

    let path = output_path(profile, format, output_file, config)?;
    write_report(&ctx, format, &path, config)?;
    info!("Wrote {format} report to {}", path.display());
    Ok(path)
}

/// Write the report to a file in the specified format
fn write_report(
    ctx: &ReportContext,
    format: ReportFormat,
    output_path: &Path,
    config: &Config,
) -> Result<(), String> {
    match format {
        ReportFormat::Markdown => MarkdownReporter::new()
            .generate(ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate Markdown report: {e}")),
        ReportFormat::Html => HtmlReporter::new()
            .generate(ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate HTML report: {e}")),
        ReportFormat::Pdf => PdfReporter::with_converter(&config.report.pdf_converter)
            .generate(ctx, output_path)
            .map_err(|e| format!("✗ Failed to generate PDF report: {e}")),
    }
}
