//! Browser platform adapters.
//!
//! Implements the `sidechat-core` port traits against the browser:
//! fetch for the Gemini API, localStorage for the credential, and
//! `window.prompt()` for interactive key entry.

pub mod llm;
pub mod storage;
pub mod prompt;
