use thiserror::Error;

/// Errors from the remote chat backend.
///
/// Every failure is caught at the transport boundary and converted to a
/// client-facing error message; none of these crash the serving process,
/// and none are retried.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("server error: {status}")]
    Status { status: u16, body: String },

    /// The backend answered 2xx but the body did not parse.
    #[error("failed to parse response: {0}")]
    Deserialization(String),

    /// Session creation returned no `chat_id`.
    #[error("no chat id returned from server")]
    MissingSessionId,

    /// A message turn returned no `response` text.
    #[error("no response from server")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_client_message() {
        let err = BackendError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "server error: 500");
    }

    #[test]
    fn test_empty_response_display() {
        assert_eq!(
            BackendError::EmptyResponse.to_string(),
            "no response from server"
        );
    }
}
