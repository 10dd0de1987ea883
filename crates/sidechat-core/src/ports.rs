//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `sidechat-core` (pure Rust).
//! Implementations live in `sidechat-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use sidechat_types::{message::Message, Result};

// ─── LLM Port ────────────────────────────────────────────────

/// One-shot reply from the generative-language API.
///
/// Contract: an empty `api_key` returns `ChatError::MissingKey` without a
/// network call; an error descriptor naming an invalid credential returns
/// `ChatError::InvalidKey`; transport and parse failures collapse into
/// `ChatError::Transport`; a response with no extractable text returns
/// `ChatError::EmptyReply`. No retry, backoff, or timeout lives here —
/// the caller owns the credential-refresh loop.
#[async_trait(?Send)]
pub trait LlmPort {
    async fn reply(&self, history: &[Message], api_key: &str) -> Result<String>;
}

// ─── Storage Port ────────────────────────────────────────────

/// String key-value storage, shaped after the browser localStorage API.
#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}

// ─── Prompt Port ─────────────────────────────────────────────

/// Interactive credential entry, decoupled from any prompt mechanism.
/// `retry` selects the wording used after an invalid-key rejection.
/// Returns `None` when the user cancels; blank entries count as cancel.
#[async_trait(?Send)]
pub trait PromptPort {
    async fn request_key(&self, retry: bool) -> Option<String>;
}
