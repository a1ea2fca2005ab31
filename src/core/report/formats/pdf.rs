//! PDF report generator via HTML-to-PDF conversion
//!
//! Renders the HTML report to a temporary file and prints it with headless
//! Chrome/Chromium. Unicode names and descriptions survive unchanged because
//! the browser does the typesetting.

use super::html::HtmlReporter;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::{debug, info};
use std::error::Error;
use std::path::Path;
use std::process::{Command, Stdio};

/// PDF report generator using HTML-to-PDF conversion
pub struct PdfReporter {
    /// Optional custom PDF converter command
    converter: Option<String>,
}

impl PdfReporter {
    /// Create a new PDF reporter that auto-detects Chrome/Chromium
    #[must_use]
    pub const fn new() -> Self {
        Self { converter: None }
    }

    /// Create a PDF reporter with a custom converter.
    /// An empty string means auto-detect.
    #[must_use]
    pub fn with_converter(converter: &str) -> Self {
        let converter = converter.trim();
        Self {
            converter: (!converter.is_empty()).then(|| converter.to_owned()),
        }
    }

    /// Detect available Chrome/Chromium browser
    fn detect_chrome() -> Option<String> {
        let candidates = [
            "google-chrome",
            "chrome",
            "chromium",
            "chromium-browser",
            "google-chrome-stable",
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
            "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
        ];

        candidates.into_iter().find_map(|candidate| {
            Command::new(candidate)
                .arg("--version")
                .output()
                .ok()
                .filter(|output| output.status.success())
                .map(|_| candidate.to_owned())
        })
    }

    /// Print an HTML file to PDF with Chrome/Chromium
    fn html_to_pdf_chrome(
        chrome_cmd: &str,
        html_path: &Path,
        pdf_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        debug!("Converting {} with {chrome_cmd}", html_path.display());

        // The report is static HTML, so no JavaScript time budget is needed
        let status = Command::new(chrome_cmd)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--no-pdf-header-footer")
            .arg("--run-all-compositor-stages-before-draw")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.canonicalize()?.display()))
            .stderr(Stdio::null())
            .stdout(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(format!("PDF conversion with '{chrome_cmd}' failed ({status})").into());
        }

        Ok(())
    }

    /// Convert HTML report to PDF
    fn convert_html_to_pdf(&self, html_path: &Path, pdf_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(converter) = &self.converter {
            return Self::html_to_pdf_chrome(converter, html_path, pdf_path);
        }

        if let Some(chrome) = Self::detect_chrome() {
            info!("Using {chrome} for PDF conversion");
            return Self::html_to_pdf_chrome(&chrome, html_path, pdf_path);
        }

        Err("PDF conversion failed: Chrome/Chromium not found.\n\
            \n\
            To generate PDF reports, install Chrome or Chromium:\n\
            \n\
            • Ubuntu/Debian:  sudo apt install chromium-browser\n\
            • Fedora/RHEL:    sudo dnf install chromium\n\
            • macOS:          brew install --cask google-chrome\n\
            • Windows:        Download from https://www.google.com/chrome/\n\
            \n\
            Alternatively, specify a custom PDF converter:\n\
              --pdf-converter /path/to/chrome\n\
            or export the report as HTML or Markdown with --format.\n\
            "
        .into())
    }
}

impl Default for PdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PdfReporter {
    /// Generate PDF report via HTML-to-PDF conversion
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let html_path =
            std::env::temp_dir().join(format!("careerguide_report_{}.html", std::process::id()));

        HtmlReporter::new().generate(ctx, &html_path)?;
        let result = self.convert_html_to_pdf(&html_path, output_path);
        let _ = std::fs::remove_file(&html_path);

        result
    }

    /// PDF output is binary; only a note is rendered as text
    fn render(&self, _ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(String::from(
            "PDF reports are generated via HTML-to-PDF conversion.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_converter_means_auto_detect() {
        assert!(PdfReporter::with_converter("  ").converter.is_none());
        assert_eq!(
            PdfReporter::with_converter("chromium").converter.as_deref(),
            Some("chromium")
        );
    }

    #[test]
    fn test_missing_converter_reports_error() {
        use crate::core::engine::Recommendation;
        use crate::core::report::StudentProfile;

        let dir = tempfile::tempdir().unwrap();
        let profile = StudentProfile {
            name: "Asha".to_string(),
            board: "CBSE".to_string(),
            stream: "Science".to_string(),
            subject_combination: "PCM".to_string(),
            expected_score: 80,
        };
        let ctx = ReportContext::new(&profile, &[], &Recommendation::default());
        let reporter = PdfReporter::with_converter("/nonexistent/careerguide-chrome");

        let out = dir.path().join("report.pdf");
        assert!(reporter.generate(&ctx, &out).is_err());
        assert!(!out.exists());
    }
}
