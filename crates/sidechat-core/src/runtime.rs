//! Chat runtime — the send flow.
//!
//! One send is: blank check → credential acquisition → append user message
//! → API call → re-prompt loop on an invalid key → reply or inline failure.
//! The runtime owns the session store and emits every visible change as a
//! `ChatEvent`; the UI renders nothing on its own authority.

use sidechat_types::{event::ChatEvent, message::Message, ChatError};

use crate::event_bus::EventBus;
use crate::fence;
use crate::keys::KeyStore;
use crate::ports::LlmPort;
use crate::store::SessionStore;

/// Inline line shown when the re-prompt loop ends in a cancel.
const CANCELLED_MESSAGE: &str = "Message not sent due to missing API key.";

pub struct ChatRuntime {
    pub store: SessionStore,
    pub event_bus: EventBus,
    pub state: SendState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Waiting,
}

impl ChatRuntime {
    pub fn new(event_bus: EventBus) -> Self {
        Self {
            store: SessionStore::new(),
            event_bus,
            state: SendState::Idle,
        }
    }

    /// Run one send. All outcomes surface as events; nothing is thrown
    /// to the host.
    ///
    /// Async and must be spawned via `wasm_bindgen_futures::spawn_local`;
    /// it will not block the UI thread.
    pub async fn run_send(&mut self, input: &str, llm: &dyn LlmPort, keys: &KeyStore) {
        let text = input.trim();
        if text.is_empty() {
            return;
        }

        // Credential first: a declined prompt leaves the conversation
        // untouched and makes no network call.
        let mut api_key = match keys.stored_or_prompt().await {
            Some(key) => key,
            None => {
                log::info!("send aborted: no API key entered");
                return;
            }
        };

        self.state = SendState::Waiting;
        self.store.push(Message::user(text));
        self.event_bus.emit(ChatEvent::SendStarted {
            text: text.to_string(),
        });

        loop {
            match llm.reply(self.store.history(), &api_key).await {
                Ok(reply) => {
                    let reply = fence::wrap_if_code(reply);
                    self.store.push(Message::assistant(reply.clone()));
                    self.event_bus.emit(ChatEvent::ReplyReceived { text: reply });
                    break;
                }
                Err(ChatError::InvalidKey) => {
                    // Same request, same history — only the key changes.
                    match keys.acquire(true).await {
                        Some(key) => api_key = key,
                        None => {
                            self.event_bus.emit(ChatEvent::SendFailed {
                                message: CANCELLED_MESSAGE.to_string(),
                            });
                            break;
                        }
                    }
                }
                Err(e) => {
                    self.event_bus.emit(ChatEvent::SendFailed {
                        message: e.to_string(),
                    });
                    break;
                }
            }
        }

        self.state = SendState::Idle;
    }

    /// Replace the active conversation with a fresh empty one.
    pub fn new_chat(&mut self) {
        let id = self.store.new_chat();
        log::info!("started conversation {}", id);
        self.event_bus.emit(ChatEvent::ConversationCleared);
    }
}
