//! WASM-target tests for sidechat-platform (Node.js runtime).
//!
//! Covers the Gemini wire helpers and MemoryStorage under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! LocalStorage and WindowPrompt need a browser window and are exercised
//! manually.

use wasm_bindgen_test::*;

use sidechat_core::ports::StoragePort;
use sidechat_platform::llm::gemini::{build_request_body, parse_reply, ApiResponse};
use sidechat_platform::storage::MemoryStorage;
use sidechat_types::message::Message;
use sidechat_types::ChatError;
use serde_json::json;

// ─── Request body tests ──────────────────────────────────

#[wasm_bindgen_test]
fn request_body_maps_roles_and_parts() {
    let history = vec![Message::user("hi"), Message::assistant("hello")];
    let body = build_request_body(&history);

    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 2);

    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[0]["parts"][0]["text"], "hi");

    // Assistant messages go out under the API's "model" role
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[1]["parts"][0]["text"], "hello");
}

#[wasm_bindgen_test]
fn request_body_empty_history() {
    let body = build_request_body(&[]);
    assert_eq!(body["contents"].as_array().unwrap().len(), 0);
}

// ─── Reply parsing tests ─────────────────────────────────

fn response(value: serde_json::Value) -> ApiResponse {
    serde_json::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn parse_reply_extracts_first_text_part() {
    let data = response(json!({
        "candidates": [{
            "content": { "parts": [{ "text": "  Hello!  " }, { "text": "second" }] }
        }]
    }));
    assert_eq!(parse_reply(data).unwrap(), "Hello!");
}

#[wasm_bindgen_test]
fn parse_reply_invalid_key() {
    let data = response(json!({
        "error": {
            "code": 400,
            "message": "API key not valid.",
            "status": "INVALID_ARGUMENT",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                "reason": "API_KEY_INVALID"
            }]
        }
    }));
    assert_eq!(parse_reply(data), Err(ChatError::InvalidKey));
}

#[wasm_bindgen_test]
fn parse_reply_other_error_is_transport() {
    let data = response(json!({
        "error": {
            "code": 429,
            "message": "Resource has been exhausted",
            "status": "RESOURCE_EXHAUSTED"
        }
    }));
    assert!(matches!(parse_reply(data), Err(ChatError::Transport(_))));
}

#[wasm_bindgen_test]
fn parse_reply_no_candidates() {
    let data = response(json!({}));
    assert_eq!(parse_reply(data), Err(ChatError::EmptyReply));
}

#[wasm_bindgen_test]
fn parse_reply_blank_text() {
    let data = response(json!({
        "candidates": [{ "content": { "parts": [{ "text": "   " }] } }]
    }));
    assert_eq!(parse_reply(data), Err(ChatError::EmptyReply));
}

#[wasm_bindgen_test]
fn parse_reply_candidate_without_content() {
    let data = response(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
    assert_eq!(parse_reply(data), Err(ChatError::EmptyReply));
}

// ─── MemoryStorage tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    let result = storage.get("nonexistent").await.unwrap();
    assert!(result.is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("gemini_api_key", "sk-1").await.unwrap();
    let result = storage.get("gemini_api_key").await.unwrap();
    assert_eq!(result.as_deref(), Some("sk-1"));
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", "v1").await.unwrap();
    storage.set("key", "v2").await.unwrap();
    let result = storage.get("key").await.unwrap();
    assert_eq!(result.as_deref(), Some("v2"));
}

#[wasm_bindgen_test]
async fn memory_storage_delete() {
    let storage = MemoryStorage::new();
    storage.set("key", "val").await.unwrap();
    storage.delete("key").await.unwrap();
    assert!(storage.get("key").await.unwrap().is_none());
}
