//! Event extraction from a timeline locale directory.
//!
//! Every `{year}-event-{id}.mdx` file whose frontmatter carries the
//! required fields becomes one [`Event`]. Files that fail the name pattern
//! are ignored without comment. Files that fail to read, parse or validate,
//! and well-formed names whose year is out of range, are reported as
//! [`SkippedFile`]s and logged.

use std::fmt;
use std::path::Path;

use tracing::{debug, warn};

use crate::adapters::MarkupRenderer;
use crate::content::{list_content_files, locale_dir};
use crate::domain::{
    sort_events, ContentType, Event, EventFields, Locale, NameMatch, TimelineName, Validation,
};
use crate::error::IndexResult;

use super::html::render_body;

/// What goes into an event's `details`
#[derive(Clone, Copy)]
pub enum Details<'a> {
    /// No body
    Omit,

    /// Trimmed Markdown body
    Raw,

    /// Body rendered to HTML
    Html(&'a dyn MarkupRenderer),
}

impl fmt::Debug for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Details::Omit => f.write_str("Omit"),
            Details::Raw => f.write_str("Raw"),
            Details::Html(r) => write!(f, "Html({})", r.name()),
        }
    }
}

/// Why a timeline file was left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Frontmatter lacks required fields
    MissingFields(Vec<&'static str>),

    /// File could not be read or its frontmatter could not be parsed
    Unreadable(String),

    /// Year prefix does not fit in a `u64`
    YearOutOfRange,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingFields(fields) => {
                write!(f, "missing frontmatter fields: {}", fields.join(", "))
            }
            SkipReason::Unreadable(e) => write!(f, "{}", e),
            SkipReason::YearOutOfRange => f.write_str("year out of range"),
        }
    }
}

/// A timeline file excluded from the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: SkipReason,
}

/// Events of one locale plus the files that were dropped
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Sorted by year, event number, slug
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedFile>,
}

/// Extract and sort the events of `{root}/timeline/{locale}`.
///
/// A missing locale directory yields an empty extraction.
pub async fn extract_events(
    root: &Path,
    locale: &Locale,
    details: Details<'_>,
) -> IndexResult<Extraction> {
    let dir = locale_dir(root, ContentType::Timeline, locale);
    let files = list_content_files(&dir).await?;

    let mut extraction = Extraction::default();

    for file in files {
        let skip = |reason: SkipReason| {
            warn!(file = %file.file_name, "Skipping event: {}", reason);
            SkippedFile {
                file_name: file.file_name.clone(),
                reason,
            }
        };

        let name = match TimelineName::parse(&file.file_name) {
            NameMatch::Timeline(name) => name,
            NameMatch::YearOutOfRange => {
                extraction.skipped.push(skip(SkipReason::YearOutOfRange));
                continue;
            }
            NameMatch::Other => continue,
        };

        let doc = match file.read().await {
            Ok(doc) => doc,
            Err(e) => {
                extraction
                    .skipped
                    .push(skip(SkipReason::Unreadable(format!("{:#}", e))));
                continue;
            }
        };

        let fields = match EventFields::validate(&doc.header) {
            Validation::Valid(fields) => fields,
            Validation::Missing(missing) => {
                extraction.skipped.push(skip(SkipReason::MissingFields(missing)));
                continue;
            }
        };

        let event = Event::new(name, fields);
        let event = match details {
            Details::Omit => event,
            Details::Raw => event.with_details(doc.body.trim()),
            Details::Html(renderer) => {
                event.with_details(render_body(renderer, &file.file_name, &doc.body))
            }
        };
        extraction.events.push(event);
    }

    sort_events(&mut extraction.events);
    debug!(
        %locale,
        events = extraction.events.len(),
        skipped = extraction.skipped.len(),
        "Extracted timeline events"
    );

    Ok(extraction)
}
