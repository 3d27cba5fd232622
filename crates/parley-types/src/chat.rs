//! Transient chat message shape pushed to clients.
//!
//! Messages exist only for transport and rendering; nothing here is
//! persisted. The timestamp is a locale time-of-day string because that is
//! all the transcript view displays.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// A single rendered message pushed to a client.
///
/// `message` carries a markup fragment for the web transport (rendered
/// HTML or an `<img>` tag) and raw text for the user echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub message: String,
    pub is_user: bool,
    pub timestamp: String,
}

impl OutboundMessage {
    /// Echo of a user-typed message, stamped with the current local time.
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_user: true,
            timestamp: now_timestamp(),
        }
    }

    /// An assistant reply (or image fragment), stamped with the current local time.
    pub fn assistant(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_user: false,
            timestamp: now_timestamp(),
        }
    }
}

/// Local time-of-day in `HH:MM`, matching what the transcript view shows.
fn now_timestamp() -> String {
    Local::now().format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_flags() {
        let msg = OutboundMessage::user("hello");
        assert_eq!(msg.message, "hello");
        assert!(msg.is_user);
    }

    #[test]
    fn test_assistant_message_flags() {
        let msg = OutboundMessage::assistant("<strong>hi</strong>");
        assert!(!msg.is_user);
    }

    #[test]
    fn test_timestamp_is_time_of_day() {
        let msg = OutboundMessage::assistant("hi");
        // "HH:MM"
        assert_eq!(msg.timestamp.len(), 5);
        assert_eq!(msg.timestamp.as_bytes()[2], b':');
    }

    #[test]
    fn test_serde_shape() {
        let msg = OutboundMessage {
            message: "hi".to_string(),
            is_user: false,
            timestamp: "12:34".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "hi", "is_user": false, "timestamp": "12:34"})
        );
    }
}
