//! Core indexing logic.
//!
//! This module contains:
//! - Paths: navigation indexes per locale and content type
//! - Events: timeline event extraction and validation
//! - Html: body rendering for TimelineJS
//! - Generator: complete runs that write artifacts

pub mod events;
pub mod generator;
pub mod html;
pub mod paths;

// Re-export commonly used types
pub use events::{extract_events, Details, Extraction, SkipReason, SkippedFile};
pub use generator::{ensure_content_root, EventArtifact, GeneratedFile, Generator, Report};
pub use html::{escape_html, fallback_fragment, render_body, rewrite_class_attributes};
pub use paths::{index_content_type, index_locale, resolve_locales};
