use serde::{Deserialize, Serialize};

/// Plugin configuration. The defaults match the endpoint the plugin ships
/// against; a JSON override may be present in storage under
/// [`CONFIG_STORAGE_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    pub model: String,
    pub api_base: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

/// Storage key for the persisted config override.
pub const CONFIG_STORAGE_KEY: &str = "sidechat:config";
