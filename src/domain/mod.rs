//! Domain types for the content indexer.
//!
//! This module contains the core data structures:
//! - Content: content types, locales and slugs
//! - Timeline: `{year}-event-{id}` file names and their ordering
//! - Event: frontmatter-backed timeline events
//! - Index: per-locale navigation indexes

pub mod content;
pub mod event;
pub mod index;
pub mod timeline;

// Re-export commonly used types
pub use content::{
    slug_from_file, supported_locales, ContentType, Locale, LocaleError, CONTENT_EXTENSION,
    SUPPORTED_LOCALES,
};
pub use event::{sort_events, Event, EventFields, EventList, Validation, REQUIRED_FIELDS};
pub use index::{group_by_year, CombinedIndex, LocaleIndex, PartialIndex, YearGroups};
pub use timeline::{NameMatch, TimelineName};
