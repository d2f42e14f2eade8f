//! Navigation indexes: which slugs exist per locale and content type.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::LocaleSource;
use crate::content::{list_content_files, list_subdirs, locale_dir, ContentFile};
use crate::domain::{
    group_by_year, ContentType, Locale, LocaleIndex, NameMatch, PartialIndex, TimelineName,
};
use crate::error::IndexResult;

/// Index one content type in one locale
pub async fn index_content_type(
    root: &Path,
    content_type: ContentType,
    locale: &Locale,
) -> IndexResult<PartialIndex> {
    let files = list_content_files(&locale_dir(root, content_type, locale)).await?;

    let part = match content_type {
        ContentType::Timeline => {
            PartialIndex::Timeline(group_by_year(timeline_names(&files, locale)))
        }
        other => PartialIndex::Slugs(other, files.into_iter().map(|f| f.slug).collect()),
    };

    Ok(part)
}

/// Timeline names among `files`; other names are ignored
fn timeline_names(files: &[ContentFile], locale: &Locale) -> Vec<TimelineName> {
    files
        .iter()
        .filter_map(|f| match TimelineName::parse(&f.file_name) {
            NameMatch::Timeline(name) => Some(name),
            NameMatch::YearOutOfRange => {
                warn!(%locale, file = %f.file_name, "Skipping timeline file: year out of range");
                None
            }
            NameMatch::Other => None,
        })
        .collect()
}

/// Index every configured content type of one locale
pub async fn index_locale(
    root: &Path,
    content_types: &[ContentType],
    locale: &Locale,
) -> IndexResult<LocaleIndex> {
    let mut parts = Vec::with_capacity(content_types.len());
    for &content_type in content_types {
        let part = index_content_type(root, content_type, locale).await?;
        if part.is_empty() {
            debug!(%locale, %content_type, "No content");
        }
        parts.push(part);
    }

    Ok(LocaleIndex::from_parts(parts))
}

/// Locales to index.
///
/// `Fixed` returns the allow-list unchanged. `Discover` keeps the
/// allow-listed locales that exist as a directory under at least one of
/// the content types, in allow-list order.
pub async fn resolve_locales(
    root: &Path,
    content_types: &[ContentType],
    allowed: &[Locale],
    source: LocaleSource,
) -> IndexResult<Vec<Locale>> {
    if source == LocaleSource::Fixed {
        return Ok(allowed.to_vec());
    }

    let mut on_disk = Vec::new();
    for content_type in content_types {
        on_disk.extend(list_subdirs(&root.join(content_type.dir_name())).await?);
    }

    let found: Vec<Locale> = allowed
        .iter()
        .filter(|locale| on_disk.iter().any(|d| d == locale.as_str()))
        .cloned()
        .collect();

    for dir in &on_disk {
        if !allowed.iter().any(|l| l.as_str() == dir) {
            debug!(locale = %dir, "Ignoring locale directory outside the allow-list");
        }
    }

    Ok(found)
}
