//! Wire types for the remote chat backend API.
//!
//! The backend is a black box with two endpoints: `POST /chat/new` issuing
//! an opaque session id, and `POST /chat` accepting `{id?, msg, model}` and
//! returning `{response, chat_id?}`.

use serde::{Deserialize, Serialize};

/// Response body of `POST /chat/new`.
#[derive(Debug, Deserialize)]
pub struct NewChatResponse {
    /// Absent means the backend refused to open a session.
    pub chat_id: Option<String>,
}

/// Request body of `POST /chat`.
///
/// `id` is omitted entirely on the first turn of a fresh session.
#[derive(Debug, Serialize)]
pub struct ChatTurnRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    pub msg: &'a str,
    pub model: &'a str,
}

/// Response body of `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatTurnResponse {
    /// The assistant's reply text. Absent or empty counts as a failure.
    pub response: Option<String>,
    /// Re-issued session id; when present it supersedes the one sent.
    pub chat_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_request_omits_absent_id() {
        let payload = ChatTurnRequest {
            id: None,
            msg: "hello",
            model: "gpt-4o-mini",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"msg": "hello", "model": "gpt-4o-mini"})
        );
    }

    #[test]
    fn test_turn_request_includes_known_id() {
        let payload = ChatTurnRequest {
            id: Some("abc"),
            msg: "hello",
            model: "gpt-4o-mini",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], "abc");
    }

    #[test]
    fn test_new_chat_response_parses() {
        let body: NewChatResponse = serde_json::from_str(r#"{"chat_id": "abc"}"#).unwrap();
        assert_eq!(body.chat_id.as_deref(), Some("abc"));

        let empty: NewChatResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.chat_id.is_none());
    }

    #[test]
    fn test_turn_response_parses_without_chat_id() {
        let body: ChatTurnResponse =
            serde_json::from_str(r#"{"response": "**hi**"}"#).unwrap();
        assert_eq!(body.response.as_deref(), Some("**hi**"));
        assert!(body.chat_id.is_none());
    }
}
