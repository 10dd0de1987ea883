//! WASM-target tests for sidechat-types.
//!
//! Mirrors the native unit tests but runs under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use sidechat_types::message::*;
use sidechat_types::session::*;
use sidechat_types::config::*;
use sidechat_types::event::*;
use sidechat_types::error::*;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn message_user() {
    let msg = Message::user("Hello");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "Hello");
}

#[wasm_bindgen_test]
fn message_assistant() {
    let msg = Message::assistant("I can help");
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "I can help");
}

#[wasm_bindgen_test]
fn role_serialization() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
    assert_eq!(
        serde_json::to_string(&Role::Assistant).unwrap(),
        r#""assistant""#
    );
}

// ─── Conversation Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn conversation_fresh() {
    let conv = Conversation::fresh();
    assert!(conv.id.starts_with("chat_"));
    assert!(conv.messages.is_empty());
    assert!(!conv.created_at.is_empty());
}

// ─── Config Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn config_default() {
    let config = ChatConfig::default();
    assert_eq!(config.model, "gemini-2.0-flash");
}

// ─── Event Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn chat_event_roundtrip() {
    let event = ChatEvent::SendFailed { message: "no response".to_string() };
    let json = serde_json::to_string(&event).unwrap();
    let deserialized: ChatEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, event);
}

// ─── Error Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn error_display() {
    assert_eq!(ChatError::MissingKey.to_string(), "API key missing");
    assert_eq!(ChatError::InvalidKey.to_string(), "invalid API key");
    assert_eq!(
        ChatError::Transport("detail".to_string()).to_string(),
        "error fetching response"
    );
    assert_eq!(ChatError::EmptyReply.to_string(), "no response");
}
