use serde::{Deserialize, Serialize};
use crate::message::Message;

/// One conversation: an ordered message list under a timestamp-derived id.
/// Held only in process memory; gone on unmount or page reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub messages: Vec<Message>,
    pub created_at: String,
}

impl Conversation {
    pub fn new(id: String) -> Self {
        Self {
            id,
            messages: Vec::new(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Fresh conversation with a `chat_<unix-millis>` id.
    pub fn fresh() -> Self {
        Self::new(format!("chat_{}", chrono::Utc::now().timestamp_millis()))
    }
}
