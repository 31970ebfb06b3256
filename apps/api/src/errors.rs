use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::completion::CompletionError;
use crate::pdf::PdfError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every error renders as a flat `{"error": message}` JSON body. Full detail
/// is logged server-side; clients only ever see the message selected here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            // Upstream failures are logged with full detail where they arise.
            AppError::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                message,
            ),
            AppError::PdfGeneration(detail) => {
                tracing::error!("PDF generation failed: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate PDF.".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        match err {
            // Relay the service-supplied message and status to the caller.
            CompletionError::Api { status, message } if !message.trim().is_empty() => {
                AppError::Upstream {
                    status,
                    message: format!("OpenAI API Error: {message}"),
                }
            }
            CompletionError::Api { status, .. } => AppError::Upstream {
                status,
                message: "Failed to tailor resume with OpenAI.".to_string(),
            },
            CompletionError::EmptyContent => {
                tracing::error!("Completion response contained no usable content");
                AppError::Upstream {
                    status: 500,
                    message: "No tailored content received".to_string(),
                }
            }
            CompletionError::Http(e) => {
                // Transport detail stays in the server logs only.
                tracing::error!("Completion transport error: {e}");
                AppError::Upstream {
                    status: 500,
                    message: "Failed to tailor resume with OpenAI.".to_string(),
                }
            }
        }
    }
}

impl From<PdfError> for AppError {
    fn from(err: PdfError) -> Self {
        AppError::PdfGeneration(err.to_string())
    }
}
