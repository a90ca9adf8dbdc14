//! Completion gateway abstraction
//!
//! The boundary between a chat request and the external model provider.

mod error;
mod openai;
#[cfg(test)]
pub mod testing;
mod types;

pub use error::LlmError;
#[cfg(test)]
pub use error::LlmErrorKind;
pub use openai::OpenAIGateway;
pub use types::Completion;

use crate::transcript::Transcript;
use async_trait::async_trait;
use std::sync::Arc;

/// Obtains the next assistant reply for a transcript
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Complete a transcript that ends in a user turn.
    ///
    /// The transcript is borrowed; the caller decides what to append.
    async fn complete(&self, transcript: &Transcript) -> Result<Completion, LlmError>;

    /// Model identifier sent with every request
    fn model_id(&self) -> &str;
}

/// Logging wrapper for completion gateways
pub struct LoggingGateway {
    inner: Arc<dyn CompletionGateway>,
    model_id: String,
}

impl LoggingGateway {
    pub fn new(inner: Arc<dyn CompletionGateway>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl CompletionGateway for LoggingGateway {
    async fn complete(&self, transcript: &Transcript) -> Result<Completion, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.complete(transcript).await;
        let duration = start.elapsed();

        match &result {
            Ok(completion) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    turns = transcript.len(),
                    input_tokens = completion.usage.input_tokens,
                    output_tokens = completion.usage.output_tokens,
                    "Completion request finished"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    turns = transcript.len(),
                    kind = ?e.kind,
                    error = %e.message,
                    "Completion request failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
