//! Payload builders for the WhatsApp Cloud API
//!
//! Strongly-typed construction of outbound `/messages` request bodies:
//! interactive flow messages plus read-receipt and typing-indicator
//! status requests. Transport, authentication, and response parsing are
//! the caller's concern; this crate only produces the JSON the API
//! expects and enforces its field-presence rules.

pub mod messages;
pub mod requests;
