//! Headless-browser PDF rendering.
//!
//! The exporter holds launch configuration only. Each call to
//! [`PdfExporter::export`] spawns its own Chromium process and tears it down
//! again before returning. Nothing browser-related survives a request, so
//! exports pay full startup latency but can never leak a wedged browser
//! between requests.

use std::path::PathBuf;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use thiserror::Error;
use tracing::info;

use crate::config::Config;

// US letter with half-inch margins on all sides, in inches.
const LETTER_WIDTH_IN: f64 = 8.5;
const LETTER_HEIGHT_IN: f64 = 11.0;
const MARGIN_IN: f64 = 0.5;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("browser launch failed: {0}")]
    Launch(String),

    #[error("page load failed: {0}")]
    PageLoad(String),

    #[error("print to PDF failed: {0}")]
    Print(String),

    #[error("render task failed: {0}")]
    Task(String),
}

/// Renders an HTML document to PDF bytes through a short-lived Chromium.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    chrome_path: Option<PathBuf>,
    user_data_dir: Option<PathBuf>,
}

impl PdfExporter {
    pub fn new(config: &Config) -> Self {
        Self {
            chrome_path: config.chrome_path.clone(),
            user_data_dir: config.chrome_user_data_dir.clone(),
        }
    }

    /// Renders `html` to a PDF byte stream.
    ///
    /// Browser control is synchronous, so the whole render runs on the
    /// blocking thread pool while the caller awaits the handle.
    pub async fn export(&self, html: &str) -> Result<Vec<u8>, PdfError> {
        let exporter = self.clone();
        let html = html.to_string();

        tokio::task::spawn_blocking(move || exporter.render_blocking(&html))
            .await
            .map_err(|e| PdfError::Task(e.to_string()))?
    }

    fn render_blocking(&self, html: &str) -> Result<Vec<u8>, PdfError> {
        let launch = LaunchOptions::default_builder()
            .headless(true)
            .path(self.chrome_path.clone())
            .user_data_dir(self.user_data_dir.clone())
            .build()
            .map_err(|e| PdfError::Launch(e.to_string()))?;

        // Dropping `browser` kills the Chromium child. Every return path
        // below, error or success, passes through that drop.
        let browser = Browser::new(launch).map_err(|e| PdfError::Launch(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| PdfError::Launch(e.to_string()))?;

        tab.navigate_to(&data_url(html))
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| PdfError::PageLoad(e.to_string()))?;

        let pdf = tab
            .print_to_pdf(Some(letter_print_options()))
            .map_err(|e| PdfError::Print(e.to_string()))?;

        info!("Rendered PDF ({} bytes)", pdf.len());
        Ok(pdf)
    }
}

/// Encodes the document as a base64 data URL so the page loads without a
/// server or a temp file.
fn data_url(html: &str) -> String {
    format!("data:text/html;base64,{}", STANDARD.encode(html))
}

fn letter_print_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(true),
        paper_width: Some(LETTER_WIDTH_IN),
        paper_height: Some(LETTER_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        margin_left: Some(MARGIN_IN),
        margin_right: Some(MARGIN_IN),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_round_trips() {
        let html = "<html><body><h1>Resume</h1></body></html>";
        let url = data_url(html);

        let encoded = url
            .strip_prefix("data:text/html;base64,")
            .expect("data URL prefix");
        let decoded = STANDARD.decode(encoded).expect("valid base64");
        assert_eq!(decoded, html.as_bytes());
    }

    #[test]
    fn test_data_url_handles_multibyte_content() {
        let html = "<p>Résumé — 简历 📄</p>";
        let url = data_url(html);

        let encoded = url.strip_prefix("data:text/html;base64,").unwrap();
        let decoded = STANDARD.decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), html);
    }

    #[test]
    fn test_print_options_use_letter_layout() {
        let options = letter_print_options();
        assert_eq!(options.paper_width, Some(8.5));
        assert_eq!(options.paper_height, Some(11.0));
        assert_eq!(options.print_background, Some(true));
    }

    #[test]
    fn test_print_options_set_half_inch_margins() {
        let options = letter_print_options();
        assert_eq!(options.margin_top, Some(0.5));
        assert_eq!(options.margin_bottom, Some(0.5));
        assert_eq!(options.margin_left, Some(0.5));
        assert_eq!(options.margin_right, Some(0.5));
    }

    #[test]
    fn test_print_options_leave_orientation_default() {
        let options = letter_print_options();
        assert_eq!(options.landscape, None);
        assert_eq!(options.page_ranges, None);
    }

    /// Needs a local Chromium install; run with `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore]
    async fn test_export_produces_pdf_bytes() {
        let exporter = PdfExporter::default();
        let pdf = exporter
            .export("<html><body><h1>Hello</h1></body></html>")
            .await
            .unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
