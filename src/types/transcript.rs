//! Conversation transcript
//!
//! The ordered message store behind the chat view. Messages are only ever
//! appended (insertion order is display order); the one exception is the
//! transient typing placeholder, which is removed when a real response
//! arrives or the request fails. Search never touches the store itself,
//! it only narrows what gets rendered.

use uuid::Uuid;

use crate::types::message::Message;

/// Ordered sequence of messages for the current session
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a user message. Whitespace-only input is rejected and the
    /// store is left untouched; the trimmed text is returned otherwise.
    pub fn push_user(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(Message::user(trimmed));
        Some(trimmed.to_string())
    }

    /// Insert the typing placeholder and return its id.
    ///
    /// Invariant: at most one placeholder exists at any time, so any
    /// leftover placeholder is dropped first.
    pub fn begin_typing(&mut self) -> Uuid {
        self.clear_typing();
        let placeholder = Message::typing_placeholder();
        let id = placeholder.id;
        self.messages.push(placeholder);
        id
    }

    /// Remove the typing placeholder, if present
    pub fn clear_typing(&mut self) {
        self.messages.retain(|m| !m.is_typing);
    }

    /// Whether a typing placeholder is currently shown
    pub fn is_typing(&self) -> bool {
        self.messages.iter().any(|m| m.is_typing)
    }

    /// Replace the placeholder with an empty assistant message ready for
    /// the typewriter reveal, returning the new message's id
    pub fn begin_reply(&mut self) -> Uuid {
        self.clear_typing();
        let reply = Message::assistant_empty();
        let id = reply.id;
        self.messages.push(reply);
        id
    }

    /// Look up a message by its stable id
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }

    /// Messages whose content matches `term`, case-insensitively.
    ///
    /// An empty term matches everything. The typing placeholder has empty
    /// content, so it naturally stays visible only for an empty term.
    pub fn filtered(&self, term: &str) -> Vec<&Message> {
        if term.is_empty() {
            return self.messages.iter().collect();
        }
        let needle = term.to_lowercase();
        self.messages
            .iter()
            .filter(|m| m.content.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::message::Role;

    #[test]
    fn test_blank_input_never_appends() {
        let mut t = Transcript::new();
        assert!(t.push_user("").is_none());
        assert!(t.push_user("   \n\t ").is_none());
        assert!(t.is_empty());
    }

    #[test]
    fn test_push_user_trims() {
        let mut t = Transcript::new();
        let sent = t.push_user("  hello  ").unwrap();
        assert_eq!(sent, "hello");
        assert_eq!(t.messages()[0].content, "hello");
        assert_eq!(t.messages()[0].role, Role::User);
    }

    #[test]
    fn test_single_placeholder_invariant() {
        let mut t = Transcript::new();
        t.push_user("one");
        t.begin_typing();
        t.begin_typing();
        assert_eq!(
            t.messages().iter().filter(|m| m.is_typing).count(),
            1,
            "only one typing placeholder may exist"
        );
    }

    #[test]
    fn test_failure_path_removes_placeholder() {
        let mut t = Transcript::new();
        t.push_user("hi");
        t.begin_typing();
        t.clear_typing();
        assert_eq!(t.len(), 1);
        assert!(!t.is_typing());
        assert!(t.messages().iter().all(|m| m.role == Role::User));
    }

    #[test]
    fn test_begin_reply_swaps_placeholder() {
        let mut t = Transcript::new();
        t.push_user("hi");
        t.begin_typing();
        let id = t.begin_reply();
        assert_eq!(t.len(), 2);
        assert!(!t.is_typing());
        let reply = t.get_mut(id).unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert!(reply.content.is_empty());
        assert!(!reply.is_typing);
    }

    #[test]
    fn test_get_mut_by_id_survives_later_appends() {
        let mut t = Transcript::new();
        t.push_user("first");
        let id = t.begin_reply();
        t.push_user("second");
        t.get_mut(id).unwrap().content.push_str("partial");
        assert_eq!(t.messages()[1].content, "partial");
    }

    #[test]
    fn test_filter_empty_term_returns_all() {
        let mut t = Transcript::new();
        t.push_user("hello world");
        t.push_user("goodbye");
        assert_eq!(t.filtered("").len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut t = Transcript::new();
        t.push_user("hello world");
        let hits = t.filtered("HELLO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content, "hello world");
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let mut t = Transcript::new();
        t.push_user("hello world");
        assert!(t.filtered("zebra").is_empty());
    }

    #[test]
    fn test_filter_leaves_store_untouched() {
        let mut t = Transcript::new();
        t.push_user("alpha");
        t.push_user("beta");
        let _ = t.filtered("alpha");
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut t = Transcript::new();
        t.push_user("one");
        t.begin_reply();
        t.push_user("two");
        let contents: Vec<_> = t.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "", "two"]);
    }
}
