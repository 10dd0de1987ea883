//! Credential flow: durable storage composed with an interactive prompt.
//!
//! One key lives under [`API_KEY_STORAGE_KEY`]. It is read lazily, written
//! whenever the user enters a new value, and shared by every send. Storage
//! write failures are logged and tolerated — the key in hand is still used
//! for the current request.

use std::rc::Rc;
use crate::ports::{PromptPort, StoragePort};

/// Storage key for the API credential.
pub const API_KEY_STORAGE_KEY: &str = "gemini_api_key";

pub struct KeyStore {
    storage: Rc<dyn StoragePort>,
    prompt: Rc<dyn PromptPort>,
}

impl KeyStore {
    pub fn new(storage: Rc<dyn StoragePort>, prompt: Rc<dyn PromptPort>) -> Self {
        Self { storage, prompt }
    }

    /// The stored key, if any. Storage errors read as "no key".
    pub async fn stored(&self) -> Option<String> {
        match self.storage.get(API_KEY_STORAGE_KEY).await {
            Ok(Some(key)) if !key.is_empty() => Some(key),
            Ok(_) => None,
            Err(e) => {
                log::warn!("failed to read stored API key: {}", e);
                None
            }
        }
    }

    /// Prompt for a key and persist it. `retry` selects the wording used
    /// after an invalid-key rejection. `None` means the user cancelled.
    pub async fn acquire(&self, retry: bool) -> Option<String> {
        let key = self.prompt.request_key(retry).await?;
        if let Err(e) = self.storage.set(API_KEY_STORAGE_KEY, &key).await {
            log::warn!("failed to persist API key: {}", e);
        }
        Some(key)
    }

    /// Stored key, else one interactive prompt.
    pub async fn stored_or_prompt(&self) -> Option<String> {
        match self.stored().await {
            Some(key) => Some(key),
            None => self.acquire(false).await,
        }
    }
}
