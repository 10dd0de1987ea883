#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::session::*;
    use crate::config::*;
    use crate::event::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.content, "I can help");
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("test input");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, msg);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, r#""user""#);

        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
    }

    #[test]
    fn test_role_deserialization() {
        let role: Role = serde_json::from_str(r#""assistant""#).unwrap();
        assert_eq!(role, Role::Assistant);
    }

    // ─── Conversation Tests ──────────────────────────────────

    #[test]
    fn test_conversation_new() {
        let conv = Conversation::new("chat_1".to_string());
        assert_eq!(conv.id, "chat_1");
        assert!(conv.messages.is_empty());
        assert!(!conv.created_at.is_empty());
    }

    #[test]
    fn test_conversation_fresh_id_scheme() {
        let conv = Conversation::fresh();
        assert!(conv.id.starts_with("chat_"));
        assert!(conv.id["chat_".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_conversation_serialization() {
        let mut conv = Conversation::new("c1".to_string());
        conv.messages.push(Message::user("hi"));
        let json = serde_json::to_string(&conv).unwrap();
        let deserialized: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, "c1");
        assert_eq!(deserialized.messages.len(), 1);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.api_base, "https://generativelanguage.googleapis.com");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = ChatConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ChatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_event_serialization() {
        let event = ChatEvent::SendStarted { text: "hi".to_string() };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("SendStarted"));
        assert!(json.contains("hi"));
    }

    #[test]
    fn test_chat_event_roundtrip() {
        let event = ChatEvent::ReplyReceived { text: "Hello world".to_string() };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ChatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(ChatError::MissingKey.to_string(), "API key missing");
        assert_eq!(ChatError::InvalidKey.to_string(), "invalid API key");
        assert_eq!(ChatError::EmptyReply.to_string(), "no response");

        // The transport detail is carried for logging but kept out of the
        // user-facing line.
        let err = ChatError::Transport("dns failure".to_string());
        assert_eq!(err.to_string(), "error fetching response");
    }

    #[test]
    fn test_error_from_serde() {
        let bad_json = "{{invalid}}";
        let serde_err = serde_json::from_str::<serde_json::Value>(bad_json).unwrap_err();
        let chat_err: ChatError = serde_err.into();
        assert!(matches!(chat_err, ChatError::Serialization(_)));
    }

    #[test]
    fn test_error_clone_eq() {
        let err = ChatError::InvalidKey;
        assert_eq!(err.clone(), err);
        assert_ne!(ChatError::InvalidKey, ChatError::MissingKey);
    }
}
