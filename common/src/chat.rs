//! Chat bridge state: request validation, the in-flight guard and the transcript.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Body of `POST /api/ai-chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub selected_resource_ids: Vec<String>,
}

/// `{reply}` on success, `{error}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn into_result(self) -> Result<String, String> {
        match (self.reply, self.error) {
            (_, Some(error)) => Err(error),
            (Some(reply), None) => Ok(reply),
            (None, None) => Err("The assistant returned an empty response.".to_string()),
        }
    }
}

pub fn validate_query(text: &str) -> Result<&str, CatalogError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::EmptyChatQuery);
    }
    Ok(trimmed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
    pending: bool,
}

impl ChatTranscript {
    /// Send control is disabled while this is true.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Validates locally and, on success, records the user message and marks
    /// the transcript pending. Nothing is sent when this returns an error.
    pub fn begin_send(&mut self, text: &str, context_ids: &[String]) -> Result<ChatRequest, CatalogError> {
        if self.pending {
            return Err(CatalogError::ChatBusy);
        }
        let query = validate_query(text)?.to_string();
        self.messages.push(ChatMessage { role: ChatRole::User, text: query.clone() });
        self.pending = true;
        Ok(ChatRequest { query, selected_resource_ids: context_ids.to_vec() })
    }

    /// Appends the reply or a visible error and re-enables sending.
    pub fn finish(&mut self, result: Result<ChatResponse, String>) {
        self.pending = false;
        let message = match result.and_then(ChatResponse::into_result) {
            Ok(reply) => ChatMessage { role: ChatRole::Assistant, text: reply },
            Err(error) => ChatMessage { role: ChatRole::Error, text: format!("Error: {error}") },
        };
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_rejected_locally() {
        let mut transcript = ChatTranscript::default();
        assert_eq!(transcript.begin_send("   \n\t", &[]), Err(CatalogError::EmptyChatQuery));
        assert!(transcript.messages.is_empty());
        assert!(!transcript.is_pending());
    }

    #[test]
    fn send_is_blocked_until_the_reply_arrives() {
        let mut transcript = ChatTranscript::default();
        let request = transcript.begin_send(" which datasets cover Kenya? ", &["r-1".to_string()]).expect("request");
        assert_eq!(request.query, "which datasets cover Kenya?");
        assert_eq!(request.selected_resource_ids, vec!["r-1"]);
        assert!(transcript.is_pending());
        assert_eq!(transcript.begin_send("again", &[]), Err(CatalogError::ChatBusy));

        transcript.finish(Ok(ChatResponse { reply: Some("Two.".to_string()), error: None }));
        assert!(!transcript.is_pending());
        assert_eq!(transcript.messages.last().map(|m| m.role), Some(ChatRole::Assistant));
    }

    #[test]
    fn failures_become_visible_messages() {
        let mut transcript = ChatTranscript::default();
        transcript.begin_send("hi", &[]).expect("request");
        transcript.finish(Ok(ChatResponse { reply: None, error: Some("model offline".to_string()) }));
        transcript.begin_send("hi", &[]).expect("request");
        transcript.finish(Err("502 Bad Gateway".to_string()));
        transcript.begin_send("hi", &[]).expect("request");
        transcript.finish(Ok(ChatResponse::default()));

        let errors: Vec<&str> = transcript
            .messages
            .iter()
            .filter(|m| m.role == ChatRole::Error)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], "Error: model offline");
        assert!(!transcript.is_pending());
    }
}
