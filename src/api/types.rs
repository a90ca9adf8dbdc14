//! Form payloads

use serde::Deserialize;

/// Fields posted by the chat input form
#[derive(Debug, Deserialize)]
pub struct SendForm {
    #[serde(default)]
    pub message: String,
    /// Encoded transcript from the hidden field
    #[serde(default)]
    pub history: String,
}
