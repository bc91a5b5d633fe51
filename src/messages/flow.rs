//! Interactive flow messages.
//!
//! A flow message invites the recipient into a platform-hosted flow (a
//! multi-screen form) through a call-to-action button. The flow is
//! referenced by name or by id; which one was supplied is only checked
//! when the message is rendered for sending.

use serde_json::{json, Value};
use tracing::warn;

use super::header::Header;
use super::{envelope, Message, MessageError};

/// Default value of `flow_message_version`.
const FLOW_MESSAGE_VERSION: &str = "3";

/// The `action` object of an interactive flow message.
///
/// Immutable once built. `flow_cta` is the only required field; the
/// flow name/id requirement is enforced by [`FlowAction::parameters`],
/// not by the constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowAction {
    flow_message_version: String,
    flow_name: Option<String>,
    flow_id: Option<String>,
    flow_cta: String,
    flow_action: Option<String>,
    flow_action_payload: Option<Value>,
}

impl FlowAction {
    /// Create an action with the given call-to-action button label.
    pub fn new(flow_cta: impl Into<String>) -> Self {
        Self {
            flow_message_version: FLOW_MESSAGE_VERSION.to_string(),
            flow_name: None,
            flow_id: None,
            flow_cta: flow_cta.into(),
            flow_action: None,
            flow_action_payload: None,
        }
    }

    /// Reference the flow by its published name.
    pub fn with_flow_name(mut self, name: impl Into<String>) -> Self {
        self.flow_name = Some(name.into());
        self
    }

    /// Reference the flow by its id.
    pub fn with_flow_id(mut self, id: impl Into<String>) -> Self {
        self.flow_id = Some(id.into());
        self
    }

    /// Set the flow action type, e.g. `"navigate"`.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.flow_action = Some(action.into());
        self
    }

    /// Attach a free-form action payload (entry screen, seed data).
    ///
    /// The value reaches the wire untouched.
    pub fn with_action_payload(mut self, payload: Value) -> Self {
        self.flow_action_payload = Some(payload);
        self
    }

    /// Override the flow message version (defaults to `"3"`).
    pub fn with_message_version(mut self, version: impl Into<String>) -> Self {
        self.flow_message_version = version.into();
        self
    }

    /// Wire name of the action, always `"flow"`.
    pub fn name(&self) -> &'static str {
        "flow"
    }

    /// Build the wire parameter map.
    ///
    /// Fails with [`MessageError::MissingFlowIdentifier`] when neither
    /// a flow name nor a flow id was supplied. `flow_token` mirrors the
    /// identifier's value; when both identifiers are present the id is
    /// applied last, so its value wins.
    pub fn parameters(&self) -> Result<Value, MessageError> {
        if self.flow_name.is_none() && self.flow_id.is_none() {
            return Err(MessageError::MissingFlowIdentifier);
        }
        if self.flow_name.is_some() && self.flow_id.is_some() {
            warn!("flow action carries both flow_name and flow_id; flow_token takes the id");
        }

        let mut parameters = json!({
            "flow_message_version": self.flow_message_version,
            "flow_cta": self.flow_cta,
        });

        if let Some(name) = &self.flow_name {
            parameters["flow_name"] = json!(name);
            parameters["flow_token"] = json!(name);
        }
        if let Some(id) = &self.flow_id {
            parameters["flow_id"] = json!(id);
            parameters["flow_token"] = json!(id);
        }
        if let Some(action) = &self.flow_action {
            parameters["flow_action"] = json!(action);
        }
        if let Some(payload) = &self.flow_action_payload {
            parameters["flow_action_payload"] = payload.clone();
        }

        Ok(parameters)
    }

    /// Build the full action object, `{"name": "flow", "parameters": ...}`.
    pub fn to_value(&self) -> Result<Value, MessageError> {
        Ok(json!({
            "name": self.name(),
            "parameters": self.parameters()?,
        }))
    }
}

/// An outbound interactive flow message.
///
/// Owns its [`FlowAction`]; header, body text, and footer text are
/// optional. Rendering delegates to the action, so an action missing
/// its flow identifier only fails when the message is actually
/// serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowMessage {
    to: String,
    action: FlowAction,
    header: Option<Header>,
    body: Option<String>,
    footer: Option<String>,
    reply_to: Option<String>,
}

impl FlowMessage {
    /// Create a flow message for the given recipient.
    pub fn new(to: impl Into<String>, action: FlowAction) -> Self {
        Self {
            to: to.into(),
            action,
            header: None,
            body: None,
            footer: None,
            reply_to: None,
        }
    }

    /// Set the message header.
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    /// Set the body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the footer text.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Mark the message as a reply to an earlier message.
    pub fn in_reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.reply_to = Some(message_id.into());
        self
    }

    /// Header body, or `None` when no header was supplied.
    pub fn header(&self) -> Option<Value> {
        self.header.as_ref().map(Header::to_value)
    }

    /// Body text.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Footer text.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// The rendered flow action object.
    pub fn action(&self) -> Result<Value, MessageError> {
        self.action.to_value()
    }
}

impl Message for FlowMessage {
    fn to(&self) -> &str {
        &self.to
    }

    fn reply_to(&self) -> Option<&str> {
        self.reply_to.as_deref()
    }

    fn message_type(&self) -> &str {
        "flow"
    }

    fn request_body(&self) -> Result<Value, MessageError> {
        let action = self.action.to_value()?;

        let mut interactive = json!({ "type": self.message_type() });
        if let Some(header) = self.header() {
            interactive["header"] = header;
        }
        if let Some(body) = &self.body {
            interactive["body"] = json!({ "text": body });
        }
        if let Some(footer) = &self.footer {
            interactive["footer"] = json!({ "text": footer });
        }
        interactive["action"] = action;

        let mut request = envelope(self, "interactive");
        request["interactive"] = interactive;
        Ok(request)
    }
}
