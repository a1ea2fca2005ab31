//! HTML report generator
//!
//! Generates self-contained HTML reports with embedded CSS. The print
//! stylesheet repeats table headers across pages so the same file converts
//! cleanly to PDF.

use crate::core::report::{ReportContext, ReportGenerator, NO_ALTERNATE, NO_RECOMMENDED};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Compiled `report.html` template; values are HTML-escaped by askama
#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReport<'a> {
    ctx: &'a ReportContext<'a>,
    summary: String,
    no_recommended: &'static str,
    no_alternate: &'static str,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let page = HtmlReport {
            ctx,
            summary: ctx.summary(),
            no_recommended: NO_RECOMMENDED,
            no_alternate: NO_ALTERNATE,
        };
        Ok(page.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Recommendation;
    use crate::core::report::StudentProfile;

    #[test]
    fn test_render_escapes_user_input() {
        let profile = StudentProfile {
            name: "<script>alert(1)</script>".to_string(),
            board: "CBSE".to_string(),
            stream: "Science".to_string(),
            subject_combination: "Mathematics + Computer Science".to_string(),
            expected_score: 50,
        };
        let categories = vec!["Data & IT".to_string()];
        let recommendation = Recommendation {
            best_fit: vec![],
            safe: vec!["BCA".to_string()],
            backup: vec!["B.Sc Computer Science".to_string()],
        };
        let ctx = ReportContext::new(&profile, &categories, &recommendation);
        let html = HtmlReporter::new().render(&ctx).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(NO_RECOMMENDED));
        assert!(html.contains("B.Sc Computer Science"));
        assert!(html.contains("50%"));
    }
}
