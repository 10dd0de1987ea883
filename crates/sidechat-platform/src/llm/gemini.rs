//! Gemini adapter for the generative-language API.
//!
//! One non-streaming `generateContent` call per send, credential passed
//! as a query parameter. Uses browser `fetch()` via gloo-net for WASM
//! compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use sidechat_core::ports::LlmPort;
use sidechat_types::{
    config::ChatConfig,
    message::{Message, Role},
    ChatError, Result,
};

const INVALID_KEY_REASON: &str = "API_KEY_INVALID";

pub struct GeminiClient {
    config: ChatConfig,
}

impl GeminiClient {
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.api_base, self.config.model, api_key
        )
    }
}

#[async_trait(?Send)]
impl LlmPort for GeminiClient {
    async fn reply(&self, history: &[Message], api_key: &str) -> Result<String> {
        if api_key.is_empty() {
            return Err(ChatError::MissingKey);
        }

        let response = Request::post(&self.endpoint(api_key))
            .header("Content-Type", "application/json")
            .json(&build_request_body(history))
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;

        // The invalid-key descriptor arrives in the body of a 400, so the
        // body is parsed regardless of HTTP status.
        let data: ApiResponse = response.json().await.map_err(transport)?;
        parse_reply(data)
    }
}

fn transport(e: gloo_net::Error) -> ChatError {
    log::error!("generateContent request failed: {}", e);
    ChatError::Transport(e.to_string())
}

// ─── Wire format ─────────────────────────────────────────────

/// `{"contents": [{"role": ..., "parts": [{"text": ...}]}]}` — one entry
/// per history message.
pub fn build_request_body(history: &[Message]) -> Value {
    let contents: Vec<Value> = history.iter().map(message_to_json).collect();
    json!({ "contents": contents })
}

fn message_to_json(msg: &Message) -> Value {
    json!({
        "role": wire_role(msg.role),
        "parts": [{ "text": msg.content }],
    })
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        // The API's name for the assistant side
        Role::Assistant => "model",
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    error: Option<ApiErrorBody>,
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    reason: String,
}

#[derive(Deserialize)]
struct ApiCandidate {
    #[serde(default)]
    content: Option<ApiContent>,
}

#[derive(Deserialize)]
struct ApiContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Deserialize)]
struct ApiPart {
    #[serde(default)]
    text: String,
}

/// Interpret a decoded response: invalid-key descriptor, other error
/// descriptor, or the first candidate's first text part (trimmed).
pub fn parse_reply(data: ApiResponse) -> Result<String> {
    if let Some(err) = data.error {
        if err.details.iter().any(|d| d.reason == INVALID_KEY_REASON) {
            return Err(ChatError::InvalidKey);
        }
        log::error!("generateContent error: {} {}", err.status, err.message);
        return Err(ChatError::Transport(err.message));
    }

    let text = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyReply);
    }
    Ok(text.to_string())
}
