//! Message types
//!
//! Defines chat message structures and roles.

use chrono::Local;
use uuid::Uuid;

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Message typed by the user
    User,
    /// Reply from the remote assistant
    Assistant,
}

/// A single chat message
///
/// The `id` is stable for the lifetime of the message and is what the
/// typewriter reveal task uses to find its target, so a message can be
/// located even after other messages were appended behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    /// Display-formatted creation time. Empty while the assistant is typing.
    pub time: String,
    /// True only for the transient "assistant is composing" placeholder.
    pub is_typing: bool,
}

impl Message {
    /// Create a user message stamped with the current local time
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            time: display_time(),
            is_typing: false,
        }
    }

    /// Create the transient typing placeholder shown while a request is in flight
    pub fn typing_placeholder() -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: String::new(),
            time: String::new(),
            is_typing: true,
        }
    }

    /// Create an empty assistant message for the typewriter reveal to fill
    pub fn assistant_empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: String::new(),
            time: display_time(),
            is_typing: false,
        }
    }
}

/// Current local time formatted for display in the message footer
fn display_time() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = Message::user("Hello, world!");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello, world!");
        assert!(!msg.is_typing);
        assert!(!msg.time.is_empty());
    }

    #[test]
    fn test_typing_placeholder() {
        let msg = Message::typing_placeholder();
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.is_typing);
        assert!(msg.content.is_empty());
        assert!(msg.time.is_empty());
    }

    #[test]
    fn test_assistant_empty_is_not_typing() {
        let msg = Message::assistant_empty();
        assert_eq!(msg.role, Role::Assistant);
        assert!(!msg.is_typing);
        assert!(msg.content.is_empty());
        assert!(!msg.time.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(Message::user("a").id, Message::user("a").id);
    }
}
