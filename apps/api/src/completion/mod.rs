//! Completion gateway: the single point of entry for chat-completion calls.
//!
//! ARCHITECTURAL RULE: no other module may talk to the OpenAI API directly.
//! All completion traffic goes through a `CompletionBackend`, selected once
//! at startup (real client, or the canned stub in mock mode).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod prompts;

use prompts::build_tailor_messages;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Fixed generation parameters, identical for every tailoring call.
const TEMPERATURE: f32 = 0.5;
const MAX_TOKENS: u32 = 1500;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Completion service returned empty content")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (OpenAI chat completions)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// A role-tagged chat message as sent on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    // The service may return choices with no text content.
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Backend trait
// ────────────────────────────────────────────────────────────────────────────

/// The generation-backend seam. Implement this to swap what answers a
/// tailoring request without touching the handler.
///
/// Carried in `AppState` as `Arc<dyn CompletionBackend>`.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Produces tailored resume Markdown for the given inputs, using the
    /// given model identifier.
    async fn tailor(
        &self,
        resume: &str,
        job_description: &str,
        model: &str,
    ) -> Result<String, CompletionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAiCompletion: the real backend
// ────────────────────────────────────────────────────────────────────────────

/// Calls the OpenAI chat-completions endpoint. One attempt per invocation
/// with no retry and no caching, so identical requests bill twice.
#[derive(Clone)]
pub struct OpenAiCompletion {
    client: Client,
    api_key: String,
}

impl OpenAiCompletion {
    pub fn new(api_key: String) -> Self {
        Self {
            // No request timeout is configured; the call runs until the
            // service answers or the connection dies.
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiCompletion {
    async fn tailor(
        &self,
        resume: &str,
        job_description: &str,
        model: &str,
    ) -> Result<String, CompletionError> {
        let request_body = ChatCompletionRequest {
            model: model.to_string(),
            messages: build_tailor_messages(resume, job_description),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAI API returned {}: {}", status, body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message: parse_error_message(&body),
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let content = extract_content(parsed)?;
        debug!("Completion call succeeded ({} chars)", content.len());
        Ok(content)
    }
}

/// Pulls the first choice's message content out of a chat response.
/// Absent or blank content is a hard failure, never an empty success.
fn extract_content(response: ChatCompletionResponse) -> Result<String, CompletionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(CompletionError::EmptyContent)
}

/// Pulls the service's own message out of a failure body. Bodies that are
/// not the documented `{"error": {"message"}}` shape (proxy HTML pages,
/// truncated JSON) yield an empty message; only a message the service
/// actually wrote may travel back to a client.
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<OpenAiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// CannedCompletion: mock mode / test stub
// ────────────────────────────────────────────────────────────────────────────

/// Mock-mode backend. Returns a fixed canned response without touching the
/// network; doubles as the stub implementation in tests.
pub struct CannedCompletion;

#[async_trait]
impl CompletionBackend for CannedCompletion {
    async fn tailor(
        &self,
        _resume: &str,
        job_description: &str,
        _model: &str,
    ) -> Result<String, CompletionError> {
        info!("Mock mode: returning canned tailored resume");
        Ok(canned_response(job_description))
    }
}

/// The canned body echoes the first 40 characters of the job description so
/// callers can tell their own response apart.
fn canned_response(job_description: &str) -> String {
    let preview: String = job_description.chars().take(40).collect();
    format!(
        "📄 MOCKED (Server): Tailored resume for \"{preview}...\" ✅\n\n- Improved efficiency by 25%\n- Reduced costs by 15%"
    )
}
