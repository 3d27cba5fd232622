//! Markdown-to-HTML rendering for the web transport.
//!
//! Replies from the backend arrive as markdown. The web transport pushes
//! HTML fragments, so the text goes through one rendering pass here. Soft
//! line breaks are promoted to hard breaks, so every newline in the reply
//! becomes an explicit `<br>` (trailing double-space newlines already are).

use pulldown_cmark::{Event, Options, Parser, html};

/// Render a markdown reply to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_renders_to_strong() {
        let out = markdown_to_html("**hi**");
        assert!(out.contains("<strong>hi</strong>"), "got: {out}");
    }

    #[test]
    fn test_plain_newline_becomes_line_break() {
        let out = markdown_to_html("one\ntwo");
        assert!(out.contains("<br"), "got: {out}");
    }

    #[test]
    fn test_trailing_double_space_becomes_line_break() {
        let out = markdown_to_html("one  \ntwo");
        assert!(out.contains("<br"), "got: {out}");
    }

    #[test]
    fn test_code_span() {
        let out = markdown_to_html("use `cargo`");
        assert!(out.contains("<code>cargo</code>"), "got: {out}");
    }

    #[test]
    fn test_plain_text_wrapped_in_paragraph() {
        let out = markdown_to_html("hello");
        assert!(out.contains("<p>hello</p>"), "got: {out}");
    }
}
