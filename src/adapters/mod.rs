//! Adapter interfaces for external collaborators.
//!
//! Adapters keep third-party formats (currently Markdown rendering) behind
//! a small trait so the indexer can be driven with a stand-in in tests.

pub mod commonmark;

use anyhow::Result;

// Re-export the CommonMark renderer
pub use commonmark::CommonMarkRenderer;

/// Converts lightweight markup to an HTML fragment
pub trait MarkupRenderer: Send + Sync {
    /// Human-readable renderer name
    fn name(&self) -> &str;

    /// Render `markup` to HTML.
    ///
    /// Failures are per document; callers substitute fallback content and
    /// carry on with the rest of the batch.
    fn render(&self, markup: &str) -> Result<String>;
}
