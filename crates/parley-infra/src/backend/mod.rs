//! HttpChatBackend -- concrete [`ChatBackend`] implementation over HTTP.
//!
//! Sends requests to the remote chat backend: `POST {base}/chat/new` to
//! create a session and `POST {base}/chat` for a message turn. Non-2xx
//! statuses and transport failures map to [`BackendError`]; neither is
//! retried here.

mod types;

use std::time::Duration;

use parley_core::backend::{ChatBackend, ChatReply};
use parley_types::error::BackendError;

pub use types::{ChatTurnRequest, ChatTurnResponse, NewChatResponse};

/// HTTP client for the remote chat backend.
pub struct HttpChatBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatBackend {
    /// Create a backend client for the given base URL.
    ///
    /// `timeout` bounds each outbound call; the relay adds no timeout of
    /// its own.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Check the status and parse the JSON body of a backend response.
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Deserialization(e.to_string()))
    }
}

impl ChatBackend for HttpChatBackend {
    async fn create_session(&self) -> Result<String, BackendError> {
        let response = self
            .client
            .post(self.url("/chat/new"))
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let body: NewChatResponse = Self::parse(response).await?;
        body.chat_id.ok_or(BackendError::MissingSessionId)
    }

    async fn send_turn(
        &self,
        session_id: Option<&str>,
        message: &str,
        model: &str,
    ) -> Result<ChatReply, BackendError> {
        let payload = ChatTurnRequest {
            id: session_id,
            msg: message,
            model,
        };

        let response = self
            .client
            .post(self.url("/chat"))
            .json(&payload)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let body: ChatTurnResponse = Self::parse(response).await?;
        match body.response {
            Some(text) if !text.is_empty() => Ok(ChatReply {
                response: text,
                chat_id: body.chat_id,
            }),
            _ => Err(BackendError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_backend() -> HttpChatBackend {
        HttpChatBackend::new(
            "https://ai-abhinav.onrender.com/api",
            Duration::from_secs(30),
        )
    }

    #[test]
    fn test_url_building() {
        let backend = make_backend();
        assert_eq!(
            backend.url("/chat/new"),
            "https://ai-abhinav.onrender.com/api/chat/new"
        );
    }

    #[test]
    fn test_url_building_trims_trailing_slash() {
        let backend =
            HttpChatBackend::new("http://localhost:9000/api/", Duration::from_secs(30));
        assert_eq!(backend.url("/chat"), "http://localhost:9000/api/chat");
    }

    #[test]
    fn test_base_url_override() {
        let backend = make_backend().with_base_url("http://localhost:8080".to_string());
        assert_eq!(backend.url("/chat"), "http://localhost:8080/chat");
    }
}
