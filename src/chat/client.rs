use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    reply: String,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request to chat endpoint failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("chat endpoint returned an unreadable reply: {0}")]
    Parse(#[source] reqwest::Error),
}

/// HTTP client for the career assistant backend. The backend is an opaque
/// collaborator: `POST {"message": text}` is expected to come back as
/// `{"reply": text}`.
#[derive(Debug, Clone)]
pub struct ChatClient {
    endpoint: String,
    http: reqwest::Client,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one message and returns the backend's reply text.
    ///
    /// The body is parsed without checking the HTTP status first: the
    /// original backend answers errors without a usable `reply` field, so a
    /// non-2xx response with a well-formed body still counts as a reply.
    pub async fn send(&self, message: &str) -> Result<String, ChatError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(ChatError::Request)?;

        let reply: ChatReply = response.json().await.map_err(ChatError::Parse)?;
        Ok(reply.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let json = serde_json::to_string(&ChatRequest { message: "Hello" }).unwrap();
        assert_eq!(json, r#"{"message":"Hello"}"#);
    }

    #[test]
    fn test_reply_payload_shape() {
        let reply: ChatReply = serde_json::from_str(r#"{"reply":"Hi there!"}"#).unwrap();
        assert_eq!(reply.reply, "Hi there!");
    }

    #[test]
    fn test_reply_missing_field_is_rejected() {
        assert!(serde_json::from_str::<ChatReply>(r#"{"error":"boom"}"#).is_err());
    }
}
