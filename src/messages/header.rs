//! Interactive message headers.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Header content displayed above an interactive message body.
///
/// Serializes to the Cloud API header object, e.g.
/// `{"type": "text", "text": "Flow message header"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Header {
    /// Plain text header.
    Text { text: String },
}

impl Header {
    /// Create a text header.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Serializable body of the header.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Text { text } => json!({ "type": "text", "text": text }),
        }
    }
}
