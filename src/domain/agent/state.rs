//! Chat state container — app-owned, SDK-provided update logic.

use super::ChatMessage;

pub const GREETING: &str = "Hi, I'm your assistant. How can I help?";

/// Shown in place of an answer when the agent request fails.
pub const FAILURE_REPLY: &str = "There was an error querying the agent. Check the server logs.";

/// Conversation transcript, seeded with the agent greeting.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::agent(GREETING)],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// A question is waiting for its answer.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a user question.
    ///
    /// Returns the trimmed question and the history *before* it, which is what
    /// the agent receives. Blank input is ignored.
    pub fn begin_question(&mut self, input: &str) -> Option<(String, Vec<ChatMessage>)> {
        let question = input.trim();
        if question.is_empty() {
            return None;
        }
        let history = self.messages.clone();
        self.messages.push(ChatMessage::user(question));
        self.pending = true;
        Some((question.to_string(), history))
    }

    pub fn record_answer(&mut self, answer: impl Into<String>) {
        self.messages.push(ChatMessage::agent(answer));
        self.pending = false;
    }

    pub fn record_failure(&mut self) {
        self.record_answer(FAILURE_REPLY);
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}
