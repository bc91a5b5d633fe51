//! Status requests for inbound messages.
//!
//! Bodies for the `/messages` endpoint that report on a received
//! message instead of sending a new one: read receipts, and the typing
//! indicator shown while a reply is being prepared.

use serde_json::{json, Value};

use crate::messages::MESSAGING_PRODUCT;

/// Marks an inbound message as read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReadRequest {
    message_id: String,
}

impl MessageReadRequest {
    /// Create a read receipt for the given message id.
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }

    /// The raw request body.
    pub fn body(&self) -> Value {
        json!({
            "messaging_product": MESSAGING_PRODUCT,
            "status": "read",
            "message_id": self.message_id,
        })
    }
}

/// Marks an inbound message as read and shows a typing indicator.
///
/// The indicator is dismissed when a reply is sent or when the
/// platform times it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingIndicatorRequest {
    message_id: String,
}

impl TypingIndicatorRequest {
    /// Create a typing indicator for the given message id.
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
        }
    }

    /// The raw request body.
    pub fn body(&self) -> Value {
        json!({
            "messaging_product": MESSAGING_PRODUCT,
            "status": "read",
            "message_id": self.message_id,
            "typing_indicator": { "type": "text" },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_request_body() {
        let request = MessageReadRequest::new("wamid.abc123");
        assert_eq!(
            request.body(),
            json!({
                "messaging_product": "whatsapp",
                "status": "read",
                "message_id": "wamid.abc123",
            })
        );
    }

    #[test]
    fn test_typing_indicator_body() {
        let request = TypingIndicatorRequest::new("wamid.abc123");
        assert_eq!(
            request.body(),
            json!({
                "messaging_product": "whatsapp",
                "status": "read",
                "message_id": "wamid.abc123",
                "typing_indicator": { "type": "text" },
            })
        );
    }
}
