//! `window.prompt()` adapter for interactive credential entry.

use async_trait::async_trait;
use sidechat_core::ports::PromptPort;

const FIRST_PROMPT: &str = "Enter your Gemini API key:";
const RETRY_PROMPT: &str = "Invalid API key. Enter a new Gemini API key:";

pub struct WindowPrompt;

#[async_trait(?Send)]
impl PromptPort for WindowPrompt {
    async fn request_key(&self, retry: bool) -> Option<String> {
        let window = web_sys::window()?;
        let message = if retry { RETRY_PROMPT } else { FIRST_PROMPT };
        match window.prompt_with_message(message) {
            Ok(Some(entry)) => {
                let entry = entry.trim();
                if entry.is_empty() {
                    None
                } else {
                    Some(entry.to_string())
                }
            }
            // Cancelled, or prompting blocked by the browser
            _ => None,
        }
    }
}
