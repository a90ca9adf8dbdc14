//! Process configuration, read once from the environment at startup

use crate::transcript::{Transcript, DEFAULT_GREETING, DEFAULT_SYSTEM_PROMPT};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Provider settings handed to the gateway at construction
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub openai_api_key: Option<String>,
    /// `OpenAI`-compatible API root, e.g. `http://localhost:11434/v1`
    pub base_url: Option<String>,
    pub model: String,
    /// Unset means wait for the provider indefinitely
    pub timeout: Option<Duration>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

impl LlmConfig {
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            openai_api_key: var("OPENAI_API_KEY").filter(|k| !k.is_empty()),
            base_url: var("OPENAI_BASE_URL").filter(|u| !u.is_empty()),
            model: var("CHAT_MODEL")
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: var("LLM_TIMEOUT_SECS")
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }
}

/// Everything `main` needs to start serving
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub system_prompt: String,
    pub greeting: String,
    pub llm: LlmConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: var("RELAY_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            system_prompt: var("CHAT_SYSTEM_PROMPT")
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            greeting: var("CHAT_GREETING").unwrap_or_else(|| DEFAULT_GREETING.to_string()),
            llm: LlmConfig::from_lookup(&var),
        }
    }

    /// Transcript every new page view starts from
    pub fn seed(&self) -> Transcript {
        Transcript::seeded(self.system_prompt.clone(), self.greeting.clone())
    }
}
