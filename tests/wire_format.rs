//! Wire format tests
//!
//! Builds complete messages and checks the exact `/messages` request
//! bodies against the Cloud API's documented shapes.

use serde_json::json;

use whatsapp_cloud_messages::messages::{FlowAction, FlowMessage, Header, Message, MessageError};
use whatsapp_cloud_messages::requests::TypingIndicatorRequest;

#[test]
fn flow_message_request_body_matches_api_sample() {
    let action = FlowAction::new("Book!")
        .with_flow_id("123456")
        .with_action("navigate")
        .with_action_payload(json!({
            "screen": "APPOINTMENT",
            "data": {
                "product_name": "name",
                "product_description": "description",
                "product_price": 100,
            },
        }));
    let message = FlowMessage::new("16315551234", action)
        .with_header(Header::text("Flow message header"))
        .with_body("Flow message body")
        .with_footer("Flow message footer");

    assert_eq!(
        message.request_body().unwrap(),
        json!({
            "recipient_type": "individual",
            "messaging_product": "whatsapp",
            "to": "16315551234",
            "type": "interactive",
            "interactive": {
                "type": "flow",
                "header": { "type": "text", "text": "Flow message header" },
                "body": { "text": "Flow message body" },
                "footer": { "text": "Flow message footer" },
                "action": {
                    "name": "flow",
                    "parameters": {
                        "flow_message_version": "3",
                        "flow_cta": "Book!",
                        "flow_id": "123456",
                        "flow_token": "123456",
                        "flow_action": "navigate",
                        "flow_action_payload": {
                            "screen": "APPOINTMENT",
                            "data": {
                                "product_name": "name",
                                "product_description": "description",
                                "product_price": 100,
                            },
                        },
                    },
                },
            },
        })
    );
}

#[test]
fn minimal_flow_message_request_body() {
    let message = FlowMessage::new(
        "16315551234",
        FlowAction::new("Sign up").with_flow_name("signup_v2"),
    );

    assert_eq!(
        message.request_body().unwrap(),
        json!({
            "recipient_type": "individual",
            "messaging_product": "whatsapp",
            "to": "16315551234",
            "type": "interactive",
            "interactive": {
                "type": "flow",
                "action": {
                    "name": "flow",
                    "parameters": {
                        "flow_message_version": "3",
                        "flow_cta": "Sign up",
                        "flow_name": "signup_v2",
                        "flow_token": "signup_v2",
                    },
                },
            },
        })
    );
}

#[test]
fn reply_adds_context_to_envelope() {
    let message = FlowMessage::new(
        "16315551234",
        FlowAction::new("Book!").with_flow_id("123456"),
    )
    .in_reply_to("wamid.abc123");

    let body = message.request_body().unwrap();
    assert_eq!(body["context"], json!({ "message_id": "wamid.abc123" }));
}

#[test]
fn unidentified_flow_fails_before_any_payload_is_produced() {
    let message = FlowMessage::new("16315551234", FlowAction::new("Book!"));
    assert_eq!(
        message.request_body().unwrap_err(),
        MessageError::MissingFlowIdentifier
    );
}

#[test]
fn typing_indicator_request_body() {
    assert_eq!(
        TypingIndicatorRequest::new("wamid.abc123").body(),
        json!({
            "messaging_product": "whatsapp",
            "status": "read",
            "message_id": "wamid.abc123",
            "typing_indicator": { "type": "text" },
        })
    );
}
