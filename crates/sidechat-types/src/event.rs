use serde::{Deserialize, Serialize};

/// Events emitted by the chat runtime (and the sidebar button).
/// The UI is a pure projection of this stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// The sidebar button was clicked; reveal the popup.
    /// Idempotent while the popup is already open.
    PopupRequested,

    /// A send passed the blank check and credential acquisition;
    /// the user message is now part of the conversation.
    SendStarted { text: String },

    /// The API returned a reply (already fence-wrapped where applicable).
    ReplyReceived { text: String },

    /// The send attempt is over with no reply; `message` is the inline
    /// line to show in its place.
    SendFailed { message: String },

    /// A new chat replaced the current conversation.
    ConversationCleared,
}
