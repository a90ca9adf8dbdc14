//! Conversation transcript carried by the page
//!
//! A transcript is the ordered, append-only list of turns for one page
//! view. It lives in the browser between requests (see [`codec`]).

mod codec;
#[cfg(test)]
pub(crate) mod strategies;

pub use codec::{decode, encode, MalformedTranscript};

use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that can answer questions and help with tasks.";
pub const DEFAULT_GREETING: &str = "Hello! I'm the AI Chat Assistant. How can I help you today?";

/// Who authored a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Wire name, as sent to the provider
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Capitalized label shown above a bubble
    pub fn label(self) -> &'static str {
        match self {
            Role::System => "System",
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// One message in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Non-empty, append-only sequence of turns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Start a transcript from its first turn
    pub fn new(first: Turn) -> Self {
        Self { turns: vec![first] }
    }

    /// The two-turn seed every page view starts from
    pub fn seeded(system_prompt: impl Into<String>, greeting: impl Into<String>) -> Self {
        let mut transcript = Self::new(Turn::system(system_prompt));
        transcript.push(Turn::assistant(greeting));
        transcript
    }

    /// Rebuild a transcript from decoded turns. `None` when `turns` is empty.
    pub fn from_turns(turns: Vec<Turn>) -> Option<Self> {
        if turns.is_empty() {
            None
        } else {
            Some(Self { turns })
        }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn last(&self) -> &Turn {
        // Non-empty by construction
        &self.turns[self.turns.len() - 1]
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::seeded(DEFAULT_SYSTEM_PROMPT, DEFAULT_GREETING)
    }
}
