//! localStorage backend.
//! Durable across page reloads; this is where the API key lives.

use async_trait::async_trait;
use sidechat_core::ports::StoragePort;
use sidechat_types::{ChatError, Result};

pub struct LocalStorage {
    store: web_sys::Storage,
}

impl LocalStorage {
    /// Grab the window's localStorage handle. Fails outside a browser
    /// context or when storage access is denied.
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| ChatError::Storage("no window object".to_string()))?;
        let store = window
            .local_storage()
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ChatError::Storage("localStorage not available".to_string()))?;
        Ok(Self { store })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.store
            .get_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        // Quota exceeded and privacy-mode denials surface here
        self.store
            .set_item(key, value)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store
            .remove_item(key)
            .map_err(|e| ChatError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
