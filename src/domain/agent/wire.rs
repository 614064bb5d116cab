//! Wire types for `POST /agent`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRequest {
    pub question: String,
    pub history: Vec<AgentMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentMessage {
    pub from_role: String,
    pub text: String,
}

/// The agent answers either with a bare JSON string or `{"answer": ...}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AgentReply {
    Text(String),
    Object {
        #[serde(default)]
        answer: Option<String>,
    },
}
