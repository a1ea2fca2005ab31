//! Markdown report generator
//!
//! Generates recommendation reports as Markdown tables. These reports render
//! well in GitHub, GitLab, and VS Code.

use crate::core::report::{CourseRow, ReportContext, ReportGenerator, NO_ALTERNATE, NO_RECOMMENDED};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape characters that would break a table cell
    fn escape(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Generate a course table, or an italic note when there are no rows
    fn course_table(rows: &[CourseRow], empty_message: &str) -> String {
        if rows.is_empty() {
            return format!("_{empty_message}_");
        }

        let mut table = String::new();
        table.push_str("| S.No | Course Name | Course Details |\n");
        table.push_str("|---|---|---|\n");
        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} |",
                row.number,
                Self::escape(&row.name),
                Self::escape(row.details)
            );
        }
        table.trim_end().to_string()
    }

    /// Value for a template placeholder
    fn placeholder(ctx: &ReportContext, key: &str) -> Option<String> {
        let profile = ctx.profile;
        let value = match key {
            "name" => Self::escape(&profile.name),
            "board" => Self::escape(&profile.board),
            "stream" => Self::escape(&profile.stream),
            "subject_combination" => Self::escape(&profile.subject_combination),
            "expected_score" => profile.expected_score.to_string(),
            "summary" => ctx.summary(),
            "recommended" => Self::course_table(&ctx.recommended, NO_RECOMMENDED),
            "alternate" => Self::course_table(&ctx.alternate, NO_ALTERNATE),
            _ => return None,
        };
        Some(value)
    }

    /// Render the report using template substitution
    ///
    /// Placeholders are replaced in a single pass so substituted values are
    /// never themselves scanned for placeholders.
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = String::with_capacity(MARKDOWN_TEMPLATE.len() * 2);
        let mut rest = MARKDOWN_TEMPLATE;

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = &after[..end];
                    match Self::placeholder(ctx, key) {
                        Some(value) => output.push_str(&value),
                        None => {
                            output.push_str("{{");
                            output.push_str(key);
                            output.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    output.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        output.push_str(rest);
        output
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
