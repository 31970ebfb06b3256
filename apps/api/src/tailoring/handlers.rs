//! Axum route handler for the tailoring endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::markdown::render_markdown;
use crate::tailoring::tier::select_model;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Wire field names are camelCase. Fields deserialize as options so that an
/// absent key and an explicit null both reach the validator and come back as
/// a 400 instead of a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    pub resume: Option<String>,
    pub job_description: Option<String>,
    pub is_premium: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorResponse {
    pub tailored_resume_markdown: String,
    pub tailored_resume_html: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /tailor
///
/// Rewrites a resume against a job description and returns the result both
/// as Markdown and as rendered HTML.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(request): Json<TailorRequest>,
) -> Result<Json<TailorResponse>, AppError> {
    let resume = request.resume.unwrap_or_default();
    let job_description = request.job_description.unwrap_or_default();

    if resume.trim().is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume and job description are required.".to_string(),
        ));
    }

    let is_premium = request.is_premium.unwrap_or(false);
    let model = select_model(is_premium);
    info!(
        "Tailoring resume with model {} (premium: {})",
        model, is_premium
    );

    let tailored_resume_markdown = state
        .completion
        .tailor(&resume, &job_description, model)
        .await?;

    let tailored_resume_html = render_markdown(&tailored_resume_markdown);

    Ok(Json(TailorResponse {
        tailored_resume_markdown,
        tailored_resume_html,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_camel_case() {
        let request: TailorRequest = serde_json::from_str(
            r#"{"resume":"my resume","jobDescription":"the role","isPremium":true}"#,
        )
        .unwrap();
        assert_eq!(request.resume.as_deref(), Some("my resume"));
        assert_eq!(request.job_description.as_deref(), Some("the role"));
        assert_eq!(request.is_premium, Some(true));
    }

    #[test]
    fn test_missing_fields_deserialize_to_none() {
        // Absent keys must not be a deserialization error; validation owns them.
        let request: TailorRequest = serde_json::from_str("{}").unwrap();
        assert!(request.resume.is_none());
        assert!(request.job_description.is_none());
        assert!(request.is_premium.is_none());
    }

    #[test]
    fn test_null_fields_deserialize_to_none() {
        // Explicit nulls behave exactly like absent keys.
        let request: TailorRequest = serde_json::from_str(
            r#"{"resume":null,"jobDescription":null,"isPremium":null}"#,
        )
        .unwrap();
        assert!(request.resume.is_none());
        assert!(request.job_description.is_none());
        assert!(request.is_premium.is_none());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = TailorResponse {
            tailored_resume_markdown: "# SUMMARY".to_string(),
            tailored_resume_html: "<h1>SUMMARY</h1>".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("tailoredResumeMarkdown").is_some());
        assert!(json.get("tailoredResumeHtml").is_some());
        assert!(json.get("tailored_resume_markdown").is_none());
    }
}
