//! Mock gateway for tests
//!
//! Replies are served from a queue; every transcript it is asked to
//! complete is recorded.

use super::{Completion, CompletionGateway, LlmError};
use crate::transcript::Transcript;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct MockGateway {
    responses: Mutex<VecDeque<Result<Completion, LlmError>>>,
    model_id: String,
    /// Record of all transcripts sent
    pub requests: Mutex<Vec<Transcript>>,
}

impl MockGateway {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            model_id: model_id.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful reply
    pub fn queue_reply(&self, text: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(Completion::from_text(text)));
    }

    /// Queue a provider failure
    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_requests(&self) -> Vec<Transcript> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for MockGateway {
    async fn complete(&self, transcript: &Transcript) -> Result<Completion, LlmError> {
        self.requests.lock().unwrap().push(transcript.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
