//! UI-level state that drives rendering.
//! A read-only projection of the runtime's event stream, updated each
//! frame by draining the EventBus. The UI never appends entries on its
//! own authority.

use sidechat_types::event::ChatEvent;

/// State visible to the popup panel
pub struct UiState {
    /// Displayed chat entries (user + assistant + inline failures)
    pub entries: Vec<ChatEntry>,
    /// Whether the popup window is shown. One window identity; repeated
    /// show requests only flip this flag.
    pub popup_open: bool,
    /// A send is in flight — show the placeholder, disable Send.
    pub pending: bool,
    /// Input field content
    pub input_text: String,
    /// Status line text
    pub status_text: String,
}

/// A chat entry for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: EntryRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRole {
    User,
    Assistant,
    Error,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            popup_open: false,
            pending: false,
            input_text: String::new(),
            status_text: "Ready".to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::PopupRequested => {
                    self.popup_open = true;
                }
                ChatEvent::SendStarted { text } => {
                    self.entries.push(ChatEntry {
                        role: EntryRole::User,
                        content: text,
                    });
                    self.pending = true;
                    self.status_text = "Waiting for reply...".to_string();
                }
                ChatEvent::ReplyReceived { text } => {
                    self.pending = false;
                    self.entries.push(ChatEntry {
                        role: EntryRole::Assistant,
                        content: text,
                    });
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::SendFailed { message } => {
                    self.pending = false;
                    self.entries.push(ChatEntry {
                        role: EntryRole::Error,
                        content: message,
                    });
                    self.status_text = "Ready".to_string();
                }
                ChatEvent::ConversationCleared => {
                    self.entries.clear();
                    self.pending = false;
                    self.status_text = "Ready".to_string();
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
