//! Reading the content tree.
//!
//! # Layout
//!
//! ```text
//! content/
//! └── <content_type>/          # seerah, quiz, glossary, references, timeline
//!     └── <locale>/            # en, ar, ur, bn, ...
//!         ├── intro.mdx
//!         └── 610-event-1.mdx  # timeline naming
//! ```
//!
//! Absent directories read as empty; only a missing content root is fatal
//! and that check belongs to the callers.

pub mod frontmatter;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use crate::domain::{slug_from_file, ContentType, Locale};
use crate::error::IndexResult;

pub use frontmatter::{Frontmatter, FrontmatterError, Header};

/// One `.mdx` file found in a locale directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    /// File name including extension
    pub file_name: String,

    /// File name without extension
    pub slug: String,

    /// Full path on disk
    pub path: PathBuf,
}

impl ContentFile {
    /// Read and split the file into frontmatter and body.
    ///
    /// Windows (`\r\n`) and classic Mac (`\r`) line endings are folded to
    /// `\n` first so downstream output does not depend on how the file was
    /// checked out.
    pub async fn read(&self) -> Result<Frontmatter> {
        let raw = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read content file: {}", self.path.display()))?;
        let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");

        Frontmatter::parse(&normalized)
            .with_context(|| format!("Failed to parse frontmatter: {}", self.file_name))
    }
}

/// Directory holding one content type in one locale
pub fn locale_dir(root: &Path, content_type: ContentType, locale: &Locale) -> PathBuf {
    root.join(content_type.dir_name()).join(locale.as_str())
}

/// List content files in `dir`, ordered by file name.
///
/// A missing directory yields an empty list.
pub async fn list_content_files(dir: &Path) -> IndexResult<Vec<ContentFile>> {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        tracing::debug!(dir = %dir.display(), "Directory absent, treating as empty");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if let Some(slug) = slug_from_file(&name) {
            files.push(ContentFile {
                slug: slug.to_string(),
                file_name: name,
                path: entry.path(),
            });
        }
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

/// Subdirectory names of `dir` (empty if `dir` is absent)
pub async fn list_subdirs(dir: &Path) -> IndexResult<Vec<String>> {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    let mut entries = fs::read_dir(dir).await?;

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }

    names.sort();
    Ok(names)
}
