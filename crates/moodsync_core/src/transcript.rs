//! In-memory chat transcript: append-only, seeded with the assistant greeting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Greeting shown before the user has said anything.
pub const GREETING: &str = "Hello! I'm your wellness companion. I'm here to help with \
    meditation guidance, stress management, and mental wellness support. How are you \
    feeling today?";

/// Prompt suggestions shown while the transcript only holds the greeting.
pub const SUGGESTED_PROMPTS: [&str; 4] = [
    "I'm feeling stressed today",
    "Can you guide me through meditation?",
    "Help me with breathing exercises",
    "I'm having trouble sleeping",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }
}

/// Ordered chat history. Append-only; cleared only by process exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// A transcript seeded with the fixed greeting message.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
        }
    }

    /// An empty transcript (no greeting) for one-shot CLI use.
    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// True while only the greeting is present (suggestions still shown).
    pub fn only_greeting(&self) -> bool {
        self.messages.len() == 1 && self.messages[0].sender == Sender::Bot
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
