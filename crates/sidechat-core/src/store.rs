//! Session store — owns every conversation for the lifetime of the plugin.
//!
//! Constructed at plugin init, owned by the runtime, dropped at unmount.
//! Nothing here is persisted; a reload starts empty.

use std::collections::HashMap;
use sidechat_types::message::Message;
use sidechat_types::session::Conversation;

pub struct SessionStore {
    sessions: HashMap<String, Conversation>,
    current_id: String,
}

impl SessionStore {
    /// Start with one fresh, empty conversation.
    pub fn new() -> Self {
        let conv = Conversation::fresh();
        let current_id = conv.id.clone();
        let mut sessions = HashMap::new();
        sessions.insert(current_id.clone(), conv);
        Self {
            sessions,
            current_id,
        }
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    /// The active conversation's messages, in send order.
    pub fn history(&self) -> &[Message] {
        &self.sessions[&self.current_id].messages
    }

    /// Append to the active conversation.
    pub fn push(&mut self, msg: Message) {
        self.sessions
            .get_mut(&self.current_id)
            .expect("current conversation exists")
            .messages
            .push(msg);
    }

    /// Replace the active conversation with a fresh empty one.
    /// The previous conversation stays in the map (in-memory only).
    pub fn new_chat(&mut self) -> &str {
        let conv = Conversation::fresh();
        self.current_id = conv.id.clone();
        self.sessions.insert(self.current_id.clone(), conv);
        &self.current_id
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
