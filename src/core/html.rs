//! Event bodies rendered as HTML snippets for TimelineJS.

use std::sync::OnceLock;

use regex::Regex;
use tracing::error;

use crate::adapters::MarkupRenderer;

static CLASS_NAME: OnceLock<Regex> = OnceLock::new();

fn class_name_pattern() -> &'static Regex {
    CLASS_NAME.get_or_init(|| Regex::new(r"\bclassName\b").expect("className pattern is valid"))
}

/// Rewrite JSX `className` attributes to HTML `class`
pub fn rewrite_class_attributes(html: &str) -> String {
    class_name_pattern().replace_all(html, "class").into_owned()
}

/// Escape text for inclusion in HTML element content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Snippet shown in place of a body that failed to render
pub fn fallback_fragment(file_name: &str, body: &str) -> String {
    format!(
        "<p style=\"color: red;\">Error processing markdown for {}.</p><pre>{}</pre>",
        escape_html(file_name),
        escape_html(body)
    )
}

/// Render a trimmed body to HTML, degrading to [`fallback_fragment`]
/// when the renderer fails.
pub fn render_body(renderer: &dyn MarkupRenderer, file_name: &str, body: &str) -> String {
    let body = body.trim();
    match renderer.render(body) {
        Ok(html) => rewrite_class_attributes(&html),
        Err(e) => {
            error!(
                file = %file_name,
                renderer = renderer.name(),
                "Error processing markdown: {:#}",
                e
            );
            fallback_fragment(file_name, body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::CommonMarkRenderer;

    struct FailingRenderer;

    impl MarkupRenderer for FailingRenderer {
        fn name(&self) -> &str {
            "failing"
        }

        fn render(&self, _markup: &str) -> anyhow::Result<String> {
            anyhow::bail!("unbalanced markup")
        }
    }

    #[test]
    fn test_rewrites_whole_word_only() {
        assert_eq!(
            rewrite_class_attributes(r#"<div className="a"><span classNames="b">"#),
            r#"<div class="a"><span classNames="b">"#
        );
    }

    #[test]
    fn test_render_body_trims_and_rewrites() {
        let html = render_body(
            &CommonMarkRenderer::new(),
            "1-event-1.mdx",
            "\n<div className=\"quote\">\nRead!\n</div>\n\n",
        );
        assert_eq!(html, "<div class=\"quote\">\nRead!\n</div>");
    }

    #[test]
    fn test_failure_falls_back_to_escaped_body() {
        let html = render_body(&FailingRenderer, "2-event-3.mdx", "  a < b & \"c\"  ");
        assert_eq!(
            html,
            "<p style=\"color: red;\">Error processing markdown for 2-event-3.mdx.</p>\
             <pre>a &lt; b &amp; &quot;c&quot;</pre>"
        );
    }
}
