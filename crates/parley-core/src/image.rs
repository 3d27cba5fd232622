//! Image-URL synthesis for `image:`-prefixed messages.
//!
//! Messages starting with the literal prefix `image:` (case-insensitive)
//! never reach the chat backend. The remainder is trimmed, percent-encoded,
//! and appended to a fixed image-hosting base URL; the client receives an
//! `<img>` fragment embedding that URL.

const IMAGE_PREFIX: &str = "image:";

/// Extract the prompt from an `image:`-prefixed message.
///
/// Returns `None` when the message does not carry the prefix. The prefix
/// match is case-insensitive; the remainder is trimmed and may be empty.
pub fn image_prompt(message: &str) -> Option<&str> {
    let head = message.get(..IMAGE_PREFIX.len())?;
    if head.eq_ignore_ascii_case(IMAGE_PREFIX) {
        Some(message[IMAGE_PREFIX.len()..].trim())
    } else {
        None
    }
}

/// Synthesize the image-hosting URL for a prompt.
pub fn image_url(base: &str, prompt: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), urlencoding::encode(prompt))
}

/// Build the `<img>` markup fragment embedding a synthesized URL.
pub fn image_fragment(url: &str) -> String {
    format!(r#"<img src="{url}" alt="Generated Image" style="max-width:100%; height:auto;">"#)
}
