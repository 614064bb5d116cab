//! Conversions between wire and domain types for the agent.

use super::wire::{AgentMessage, AgentReply};
use super::ChatMessage;

/// Shown when the agent replies without an answer.
pub const NO_ANSWER_FALLBACK: &str = "I couldn't generate an answer right now.";

impl From<&ChatMessage> for AgentMessage {
    fn from(m: &ChatMessage) -> Self {
        Self {
            from_role: m.from.as_str().to_string(),
            text: m.text.clone(),
        }
    }
}

impl AgentReply {
    pub fn into_answer(self) -> String {
        let answer = match self {
            AgentReply::Text(text) => Some(text),
            AgentReply::Object { answer } => answer,
        };
        answer
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_reply() {
        let reply: AgentReply = serde_json::from_str(r#""Boca ganó 3 partidos""#).unwrap();
        assert_eq!(reply.into_answer(), "Boca ganó 3 partidos");
    }

    #[test]
    fn test_object_reply() {
        let reply: AgentReply =
            serde_json::from_str(r#"{"answer": "Juega en Boca Juniors.", "sources": []}"#).unwrap();
        assert_eq!(reply.into_answer(), "Juega en Boca Juniors.");
    }

    #[test]
    fn test_object_without_answer_uses_fallback() {
        let reply: AgentReply = serde_json::from_str(r#"{"detail": "x"}"#).unwrap();
        assert_eq!(reply.into_answer(), NO_ANSWER_FALLBACK);
    }

    #[test]
    fn test_history_uses_from_role() {
        let msg = AgentMessage::from(&ChatMessage::user("hola"));
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"from_role": "user", "text": "hola"}));
    }
}
