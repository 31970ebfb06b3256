//! Axum route handler for the PDF export endpoint.

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// `html` deserializes as an option so an absent key and an explicit null
/// both reach the validator instead of failing deserialization.
#[derive(Debug, Deserialize)]
pub struct GeneratePdfRequest {
    pub html: Option<String>,
}

/// POST /generate-pdf
///
/// Prints a self-contained HTML document to PDF and returns the bytes as a
/// downloadable attachment.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(request): Json<GeneratePdfRequest>,
) -> Result<impl IntoResponse, AppError> {
    let html = request.html.unwrap_or_default();
    if html.trim().is_empty() {
        return Err(AppError::Validation("Missing HTML content.".to_string()));
    }

    info!("Generating PDF from {} bytes of HTML", html.len());
    let pdf = state.pdf.export(&html).await?;

    Ok((
        [
            (CONTENT_TYPE, "application/pdf"),
            (
                CONTENT_DISPOSITION,
                "attachment; filename=tailored_resume.pdf",
            ),
        ],
        Bytes::from(pdf),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_html_field() {
        let request: GeneratePdfRequest =
            serde_json::from_str(r#"{"html":"<h1>Resume</h1>"}"#).unwrap();
        assert_eq!(request.html.as_deref(), Some("<h1>Resume</h1>"));
    }

    #[test]
    fn test_missing_html_deserializes_to_none() {
        // Absent key must not be a deserialization error; validation owns it.
        let request: GeneratePdfRequest = serde_json::from_str("{}").unwrap();
        assert!(request.html.is_none());
    }

    #[test]
    fn test_null_html_deserializes_to_none() {
        // Explicit null behaves exactly like an absent key.
        let request: GeneratePdfRequest = serde_json::from_str(r#"{"html":null}"#).unwrap();
        assert!(request.html.is_none());
    }
}
