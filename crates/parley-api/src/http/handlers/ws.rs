//! WebSocket handler: the realtime transport adapter around the relay.
//!
//! `GET /ws` upgrades the connection. The correlation key is the `chat_id`
//! cookie when present (surviving reconnects), otherwise a fresh
//! connection id whose session entry is dropped on disconnect.
//!
//! One event type comes in (`send_message`, plus `new_chat` and `ping`);
//! each non-empty message produces the user echo, a typing indicator, and
//! exactly one of `message` or `error`. Malformed frames are logged and
//! ignored. Backend failures never close the connection or crash the
//! process.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use parley_types::chat::OutboundMessage;

use parley_core::relay::RelayReply;

use crate::http::handlers::chat_id_cookie;
use crate::state::AppState;

/// Incoming event from a WebSocket client.
///
/// Clients send JSON-encoded text frames matching one of these variants.
/// Unknown or malformed frames are logged and ignored.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientEvent {
    /// Relay a user message, optionally naming a model.
    SendMessage {
        message: String,
        #[serde(default)]
        model: Option<String>,
    },
    /// Drop the current session, start a fresh one, clear the transcript.
    NewChat,
    /// Keep-alive ping. Server responds with `{"type":"pong"}`.
    Ping,
}

/// Outgoing event pushed to a WebSocket client.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ServerEvent {
    /// A transcript entry: the user echo or a rendered reply.
    Message(OutboundMessage),
    /// Typing indicator around the backend call.
    Typing { is_typing: bool },
    /// A relay failure, surfaced once per failed message.
    Error { message: String },
    /// Instruct the client to clear its transcript after `new_chat`.
    ClearChat,
    /// Reply to `ping`.
    Pong,
}

/// Upgrade an HTTP request to the chat WebSocket.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    // Correlation must be read before the upgrade consumes the request.
    let cookie_key = chat_id_cookie(&headers);
    ws.on_upgrade(move |socket| handle_ws_connection(socket, state, cookie_key))
}

/// Core WebSocket connection handler.
async fn handle_ws_connection(mut socket: WebSocket, state: AppState, cookie_key: Option<String>) {
    let (key, connection_scoped) = match cookie_key {
        Some(key) => (key, false),
        None => (Uuid::now_v7().to_string(), true),
    };

    while let Some(msg) = socket.recv().await {
        match msg {
            Ok(Message::Text(text)) => {
                let event: ClientEvent = match serde_json::from_str(&text) {
                    Ok(event) => event,
                    Err(err) => {
                        tracing::warn!(
                            raw = %text,
                            error = %err,
                            "Ignoring malformed WebSocket event"
                        );
                        continue;
                    }
                };
                if handle_event(&mut socket, &state, &key, event).await.is_err() {
                    // Client went away mid-send
                    break;
                }
            }
            Ok(Message::Close(_)) => break,
            Err(err) => {
                tracing::debug!("WebSocket receive error: {err}");
                break;
            }
            // Ignore binary, ping, pong protocol frames (handled by axum/tungstenite)
            Ok(_) => {}
        }
    }

    if connection_scoped {
        state.relay.forget(&key);
    }
    tracing::debug!("WebSocket connection closed");
}

/// Process a single client event, pushing the resulting events back.
async fn handle_event(
    socket: &mut WebSocket,
    state: &AppState,
    key: &str,
    event: ClientEvent,
) -> Result<(), axum::Error> {
    match event {
        ClientEvent::SendMessage { message, model } => {
            let trimmed = message.trim();
            if trimmed.is_empty() {
                // Validation failure: silently dropped, no error surfaced.
                return Ok(());
            }

            send_event(socket, &ServerEvent::Message(OutboundMessage::user(trimmed))).await?;
            send_event(socket, &ServerEvent::Typing { is_typing: true }).await?;

            match state.relay.handle(key, &message, model.as_deref()).await {
                Ok(Some(reply)) => {
                    let html = match reply {
                        RelayReply::Chat { html, .. } => html,
                        RelayReply::Image { html, .. } => html,
                    };
                    send_event(socket, &ServerEvent::Message(OutboundMessage::assistant(html)))
                        .await?;
                }
                Ok(None) => {}
                Err(err) => {
                    send_event(
                        socket,
                        &ServerEvent::Error {
                            message: err.to_string(),
                        },
                    )
                    .await?;
                }
            }

            send_event(socket, &ServerEvent::Typing { is_typing: false }).await?;
        }

        ClientEvent::NewChat => match state.relay.reset_session(key).await {
            Ok(_) => {
                send_event(socket, &ServerEvent::ClearChat).await?;
                send_event(
                    socket,
                    &ServerEvent::Message(OutboundMessage::assistant("New chat started!")),
                )
                .await?;
            }
            Err(err) => {
                send_event(
                    socket,
                    &ServerEvent::Error {
                        message: err.to_string(),
                    },
                )
                .await?;
            }
        },

        ClientEvent::Ping => {
            send_event(socket, &ServerEvent::Pong).await?;
        }
    }

    Ok(())
}

/// Serialize and push one server event.
async fn send_event(socket: &mut WebSocket, event: &ServerEvent) -> Result<(), axum::Error> {
    match serde_json::to_string(event) {
        Ok(json) => socket.send(Message::Text(json.into())).await,
        Err(err) => {
            tracing::warn!("Failed to serialize server event: {err}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_event_parses() {
        let event: ClientEvent =
            serde_json::from_str(r#"{"type":"send_message","message":"hello"}"#).unwrap();
        match event {
            ClientEvent::SendMessage { message, model } => {
                assert_eq!(message, "hello");
                assert!(model.is_none());
            }
            other => panic!("expected send_message, got {other:?}"),
        }
    }

    #[test]
    fn test_send_message_event_with_model() {
        let event: ClientEvent = serde_json::from_str(
            r#"{"type":"send_message","message":"hello","model":"reka-core"}"#,
        )
        .unwrap();
        match event {
            ClientEvent::SendMessage { model, .. } => {
                assert_eq!(model.as_deref(), Some("reka-core"));
            }
            other => panic!("expected send_message, got {other:?}"),
        }
    }

    #[test]
    fn test_new_chat_event_parses() {
        let event: ClientEvent = serde_json::from_str(r#"{"type":"new_chat"}"#).unwrap();
        assert!(matches!(event, ClientEvent::NewChat));
    }

    #[test]
    fn test_malformed_event_is_rejected() {
        assert!(serde_json::from_str::<ClientEvent>(r#"{"type":"shout"}"#).is_err());
        assert!(serde_json::from_str::<ClientEvent>("not json").is_err());
    }

    #[test]
    fn test_message_event_shape() {
        let event = ServerEvent::Message(OutboundMessage {
            message: "<strong>hi</strong>".to_string(),
            is_user: false,
            timestamp: "12:34".to_string(),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "message",
                "message": "<strong>hi</strong>",
                "is_user": false,
                "timestamp": "12:34"
            })
        );
    }

    #[test]
    fn test_typing_event_shape() {
        let json = serde_json::to_value(ServerEvent::Typing { is_typing: true }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "typing", "is_typing": true}));
    }

    #[test]
    fn test_clear_chat_event_shape() {
        let json = serde_json::to_value(ServerEvent::ClearChat).unwrap();
        assert_eq!(json, serde_json::json!({"type": "clear_chat"}));
    }

    #[test]
    fn test_error_event_shape() {
        let json = serde_json::to_value(ServerEvent::Error {
            message: "server error: 500".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "error", "message": "server error: 500"})
        );
    }
}
