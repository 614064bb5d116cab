//! Agent sub-client — conversational queries.

use crate::client::ClubdashClient;
use crate::domain::agent::wire::{AgentMessage, AgentReply, AgentRequest};
use crate::domain::agent::{ChatMessage, ChatSession};
use crate::error::SdkError;

pub struct Agent<'a> {
    pub(crate) client: &'a ClubdashClient,
}

impl<'a> Agent<'a> {
    /// Ask a question with the conversation so far.
    pub async fn query(&self, question: &str, history: &[ChatMessage]) -> Result<String, SdkError> {
        let body = AgentRequest {
            question: question.to_string(),
            history: history.iter().map(AgentMessage::from).collect(),
        };
        let reply: AgentReply = self.client.http.post("/agent", &body).await?;
        Ok(reply.into_answer())
    }

    /// Run one exchange on `session`: record the question, query the agent and
    /// record its answer (or a failure reply). Returns the agent message, or
    /// `None` when the input was blank.
    pub async fn ask<'s>(&self, session: &'s mut ChatSession, input: &str) -> Option<&'s ChatMessage> {
        let (question, history) = session.begin_question(input)?;
        match self.query(&question, &history).await {
            Ok(answer) => session.record_answer(answer),
            Err(e) => {
                tracing::warn!(error = %e, "agent query failed");
                session.record_failure();
            }
        }
        session.last()
    }
}
