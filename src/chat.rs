//! One chat turn: decode history, append, complete, append
//!
//! Everything here is request-local. The transcript travels in from the
//! form and back out in the outcome; nothing is shared between requests.

use crate::llm::{CompletionGateway, LlmError};
use crate::transcript::{decode, MalformedTranscript, Role, Transcript, Turn};

/// What a send produced. Each variant carries the transcript the next
/// request should receive.
#[derive(Debug)]
pub enum SendOutcome {
    /// Blank message; nothing happened
    Unchanged(Transcript),
    /// User turn and assistant reply were both appended
    Replied(Transcript),
    /// The gateway failed. Only the user turn was appended.
    Failed {
        transcript: Transcript,
        error: LlmError,
    },
    /// The resubmitted history was unreadable
    Malformed(MalformedTranscript),
}

impl SendOutcome {
    /// Transcript to embed in the next form, if one survived
    pub fn transcript(&self) -> Option<&Transcript> {
        match self {
            SendOutcome::Unchanged(t) | SendOutcome::Replied(t) => Some(t),
            SendOutcome::Failed { transcript, .. } => Some(transcript),
            SendOutcome::Malformed(_) => None,
        }
    }
}

/// Whether a submitted message should reach the gateway at all
pub fn is_blank(message: &str) -> bool {
    message.trim().is_empty()
}

/// Run one send against `gateway`.
///
/// Blank messages short-circuit before the gateway is touched. The gateway
/// is called at most once; its first failure is final.
pub async fn send(gateway: &dyn CompletionGateway, history: &str, message: &str) -> SendOutcome {
    let mut transcript = match decode(history) {
        Ok(t) => t,
        Err(e) => return SendOutcome::Malformed(e),
    };

    if is_blank(message) {
        return SendOutcome::Unchanged(transcript);
    }

    transcript.push(Turn::user(message));
    debug_assert_eq!(transcript.last().role, Role::User);

    match gateway.complete(&transcript).await {
        Ok(completion) => {
            transcript.push(Turn::assistant(completion.text));
            SendOutcome::Replied(transcript)
        }
        Err(error) => SendOutcome::Failed { transcript, error },
    }
}
