//! content-indexer - Build-time indexes for a multilingual MDX content tree
//!
//! Scans `content/{type}/{locale}/*.mdx` and writes the derived artifacts
//! the website consumes at build time.
//!
//! # Artifacts
//!
//! - Navigation indexes: slugs per content type, timeline slugs grouped
//!   by year (`paths/{locale}.json` or one combined file)
//! - Event lists: timeline frontmatter sorted by year and event number
//!   (`Output/geojson-*.json`, `Output/storymap-*.json`)
//! - TimelineJS spreadsheet with HTML bodies (`Output/timelinejs-*.csv`)
//!
//! # Modules
//!
//! - `adapters`: Markup-to-HTML rendering (CommonMark)
//! - `content`: Directory listing and frontmatter parsing
//! - `core`: Indexing, extraction and artifact generation
//! - `domain`: Data structures (ContentType, Locale, Event, LocaleIndex)
//! - `export`: JSON / CSV serialization and atomic writes
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Navigation indexes for every locale
//! content-indexer paths
//!
//! # Urdu TimelineJS sheet
//! content-indexer timelinejs -l ur
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod error;
pub mod export;

// Re-export main types at crate root for convenience
pub use config::{LocaleSource, OutputMode, ResolvedConfig};
pub use crate::core::{EventArtifact, Generator, Report};
pub use domain::{ContentType, Event, Locale, LocaleIndex};
pub use error::{IndexError, IndexResult};
