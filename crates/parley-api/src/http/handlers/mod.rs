//! HTTP and WebSocket handlers.

pub mod index;
pub mod ws;

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Extract the `chat_id` cookie from request headers, if present.
///
/// The cookie carries the client's correlation key across page loads and
/// WebSocket reconnects.
pub(crate) fn chat_id_cookie(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?.to_str().ok()?;
    header
        .split(';')
        .find_map(|pair| pair.trim().strip_prefix("chat_id=").map(str::to_string))
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_missing_cookie_header() {
        assert_eq!(chat_id_cookie(&HeaderMap::new()), None);
    }

    #[test]
    fn test_single_cookie() {
        let headers = headers_with_cookie("chat_id=abc123");
        assert_eq!(chat_id_cookie(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_cookie_among_others() {
        let headers = headers_with_cookie("theme=dark; chat_id=abc123; lang=en");
        assert_eq!(chat_id_cookie(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_unrelated_cookies_only() {
        let headers = headers_with_cookie("theme=dark; lang=en");
        assert_eq!(chat_id_cookie(&headers), None);
    }
}
