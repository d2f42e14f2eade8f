//! Frontmatter extraction.
//!
//! A content file may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: The first revelation
//! age: 40
//! ---
//! Body text in Markdown.
//! ```
//!
//! Files without the opening fence have an empty header and the whole
//! file as body.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

const FENCE: &str = "---";

/// Errors from splitting or parsing a frontmatter block
#[derive(Debug, Error)]
pub enum FrontmatterError {
    #[error("frontmatter block is not closed")]
    Unterminated,

    #[error("frontmatter is not a key/value mapping")]
    NotAMapping,

    #[error("invalid YAML in frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Header values of a content file, with explicit optional access
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header(Mapping);

impl Header {
    /// Scalar value rendered as text.
    ///
    /// Strings come back unchanged, numbers and booleans in their YAML
    /// spelling. Null, sequences and mappings have no text form.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Tagged(tagged) => match &tagged.value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            },
            Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
        }
    }
}

/// A content file split into header and body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    pub header: Header,
    pub body: String,
}

impl Frontmatter {
    /// Split `content` into its header mapping and body text
    pub fn parse(content: &str) -> Result<Self, FrontmatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let Some(rest) = strip_fence_line(content) else {
            return Ok(Self {
                header: Header::default(),
                body: content.to_string(),
            });
        };

        let (yaml, body) = split_at_closing_fence(rest).ok_or(FrontmatterError::Unterminated)?;

        let header = if yaml.trim().is_empty() {
            Mapping::new()
        } else {
            match serde_yaml::from_str::<Value>(yaml)? {
                Value::Mapping(map) => map,
                Value::Null => Mapping::new(),
                _ => return Err(FrontmatterError::NotAMapping),
            }
        };

        Ok(Self {
            header: Header(header),
            body: body.to_string(),
        })
    }
}

/// If `text` starts with a fence line, return what follows it
fn strip_fence_line(text: &str) -> Option<&str> {
    let (first, rest) = match text.find('\n') {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => (text, ""),
    };
    (first.trim_end() == FENCE).then_some(rest)
}

/// Find the closing fence line; returns (yaml, body)
fn split_at_closing_fence(text: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return Some((&text[..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
