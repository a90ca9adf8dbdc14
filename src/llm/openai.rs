//! `OpenAI` chat-completions gateway

use super::types::{Completion, Usage};
use super::{CompletionGateway, LlmError};
use crate::config::LlmConfig;
use crate::transcript::Transcript;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// Provider bodies kept in error messages; the full body goes to the log
const BODY_EXCERPT_CHARS: usize = 200;

/// Chat-completions client bound to one model
pub struct OpenAIGateway {
    client: Client,
    /// `None` when no credential was configured; every call then fails with an auth error
    api_key: Option<String>,
    /// Full chat-completions endpoint
    url: String,
    model: String,
}

impl OpenAIGateway {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let base = config.base_url.as_deref().unwrap_or(OPENAI_API_BASE);
        let url = format!("{}/chat/completions", base.trim_end_matches('/'));

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.openai_api_key.clone(),
            url,
            model: config.model.clone(),
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn translate_request(&self, transcript: &Transcript) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: transcript
                .turns()
                .iter()
                .map(|turn| OpenAIMessage {
                    role: turn.role.as_str().to_string(),
                    content: Some(turn.content.clone()),
                })
                .collect(),
            stream: false,
        }
    }

    fn normalize_response(resp: OpenAIResponse) -> Result<Completion, LlmError> {
        let choice = resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::unknown("No choices in response"))?;

        // Empty content is still a reply; only missing content is an error
        let text = choice
            .message
            .content
            .ok_or_else(|| LlmError::unknown("Response contained no message content"))?;

        let usage = resp.usage.map_or_else(Usage::default, |u| Usage {
            input_tokens: u64::from(u.prompt_tokens),
            output_tokens: u64::from(u.completion_tokens),
        });

        Ok(Completion { text, usage })
    }

    fn classify_error(status: StatusCode, body: &str) -> LlmError {
        let Ok(error_resp) = serde_json::from_str::<OpenAIErrorResponse>(body) else {
            tracing::warn!(%status, body, "Provider returned an unreadable error body");
            return LlmError::unknown(format!("HTTP {status} error: {}", excerpt(body)));
        };
        let message = error_resp.error.message;
        match status.as_u16() {
            401 | 403 => LlmError::auth(format!("Authentication failed: {message}")),
            429 => LlmError::rate_limit(format!("Rate limit exceeded: {message}")),
            400 => LlmError::invalid_request(format!("Invalid request: {message}")),
            500..=599 => LlmError::server_error(format!("Server error: {message}")),
            _ => LlmError::unknown(format!("HTTP {status}: {message}")),
        }
    }
}

#[async_trait]
impl CompletionGateway for OpenAIGateway {
    async fn complete(&self, transcript: &Transcript) -> Result<Completion, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::auth("OPENAI_API_KEY is not set"))?;

        let openai_request = self.translate_request(transcript);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {e}"))
                } else {
                    LlmError::unknown(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::classify_error(status, &body));
        }

        let openai_response: OpenAIResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, body, "Provider response did not match the expected shape");
            LlmError::unknown(format!("Failed to parse response: {e}"))
        })?;

        Self::normalize_response(openai_response)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

/// First `BODY_EXCERPT_CHARS` characters of `body`, marked when cut
fn excerpt(body: &str) -> String {
    let mut chars = body.chars();
    let mut out: String = chars.by_ref().take(BODY_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
    #[serde(default)]
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Debug, Deserialize)]
#[allow(clippy::struct_field_names)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorResponse {
    error: OpenAIError,
}

#[derive(Debug, Deserialize)]
struct OpenAIError {
    message: String,
}
