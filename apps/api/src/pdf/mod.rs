// PDF export via a headless Chromium instance.
// Implements: data-URL page load, print-to-PDF with a fixed letter layout.
// Every export launches a fresh browser that is torn down before returning.

pub mod exporter;
pub mod handlers;

pub use exporter::{PdfError, PdfExporter};
