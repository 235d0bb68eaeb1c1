//! Bounded conversation message history.

use crate::types::ChatMessage;

/// Most messages kept in history.
pub const MAX_HISTORY: usize = 20;

/// A conversation's message history, capped at a fixed length.
///
/// When a push takes the history over its cap, the oldest messages are
/// dropped until only the most recent `max_messages` remain.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    max_messages: usize,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::with_limit(MAX_HISTORY)
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_messages: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_messages,
        }
    }

    /// Add a user message.
    pub fn add_user_message(&mut self, text: impl Into<String>) {
        self.add_message(ChatMessage::user(text));
    }

    /// Add an assistant message.
    pub fn add_assistant_message(&mut self, text: impl Into<String>) {
        self.add_message(ChatMessage::assistant(text));
    }

    /// Add a raw message, trimming the oldest entries if over the cap.
    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.trim();
    }

    fn trim(&mut self) {
        if self.messages.len() > self.max_messages {
            let excess = self.messages.len() - self.max_messages;
            self.messages.drain(..excess);
        }
    }

    /// Get all messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Clear all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
