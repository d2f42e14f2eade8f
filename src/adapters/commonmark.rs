//! CommonMark rendering via `pulldown-cmark`.
//!
//! Raw HTML in the source (JSX-ish tags in MDX bodies included) is passed
//! through untouched, matching what the site's own pipeline does.

use anyhow::Result;
use pulldown_cmark::{html, Options, Parser};

use super::MarkupRenderer;

/// Plain CommonMark, no extensions
#[derive(Debug, Clone)]
pub struct CommonMarkRenderer {
    options: Options,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self {
            options: Options::empty(),
        }
    }
}

impl CommonMarkRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MarkupRenderer for CommonMarkRenderer {
    fn name(&self) -> &str {
        "commonmark"
    }

    fn render(&self, markup: &str) -> Result<String> {
        let parser = Parser::new_ext(markup, self.options);
        let mut out = String::with_capacity(markup.len() * 3 / 2);
        html::push_html(&mut out, parser);

        let trimmed_len = out.trim_end().len();
        out.truncate(trimmed_len);
        Ok(out)
    }
}
