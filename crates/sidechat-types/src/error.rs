use thiserror::Error;

/// Outcome taxonomy for the send flow. Callers branch on the variant;
/// the display strings are the user-facing lines for the inline chat view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// No credential was available; no network call was made.
    #[error("API key missing")]
    MissingKey,

    /// The API rejected the credential. Triggers the re-prompt loop.
    #[error("invalid API key")]
    InvalidKey,

    /// Transport or parse failure. The detail is logged, not displayed.
    #[error("error fetching response")]
    Transport(String),

    /// A well-formed response with no extractable text.
    #[error("no response")]
    EmptyReply,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
