//! Outbound message construction
//!
//! Typed builders for Cloud API `/messages` payloads. Every message
//! variant is an immutable value object implementing [`Message`];
//! cross-field validation happens when the request body is rendered,
//! not at construction.

pub mod flow;
pub mod header;

pub use flow::{FlowAction, FlowMessage};
pub use header::Header;

use serde_json::{json, Value};

/// Value of the `messaging_product` field sent with every request.
pub const MESSAGING_PRODUCT: &str = "whatsapp";

/// Errors raised while rendering a message into its wire form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    /// A flow action was rendered without a flow name or flow id.
    #[error("flow name or flow id is required")]
    MissingFlowIdentifier,
}

/// Common contract for outbound Cloud API messages.
///
/// Rendering is a pure computation over constructor-supplied data and
/// is the only place a validation error can surface.
pub trait Message {
    /// Recipient WhatsApp ID.
    fn to(&self) -> &str;

    /// ID of the message being replied to, if any.
    fn reply_to(&self) -> Option<&str> {
        None
    }

    /// Wire value of the variant's type field, e.g. `"flow"`.
    fn message_type(&self) -> &str;

    /// Render the full `/messages` request body.
    fn request_body(&self) -> Result<Value, MessageError>;
}

/// Build the envelope shared by every outbound message.
///
/// `wire_type` is the envelope-level type field, which differs from
/// [`Message::message_type`] for interactive variants. The caller fills
/// in its type-specific object on top of this.
pub(crate) fn envelope(message: &impl Message, wire_type: &str) -> Value {
    let mut body = json!({
        "recipient_type": "individual",
        "messaging_product": MESSAGING_PRODUCT,
        "to": message.to(),
        "type": wire_type,
    });
    if let Some(reply_to) = message.reply_to() {
        body["context"] = json!({ "message_id": reply_to });
    }
    body
}
