//! Artifact generation.
//!
//! Each public method is one complete run: check the content root, build
//! everything in memory, then write. A missing content root fails before
//! any file is touched.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::adapters::{CommonMarkRenderer, MarkupRenderer};
use crate::config::{OutputMode, ResolvedConfig};
use crate::domain::{CombinedIndex, EventList, Locale};
use crate::error::{IndexError, IndexResult};
use crate::export::{to_pretty_json, to_timelinejs_csv, write_atomic};

use super::events::{extract_events, Details, Extraction, SkippedFile};
use super::paths::{index_locale, resolve_locales};

/// Event artifact flavours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventArtifact {
    /// `geojson-{locale}-events.json`, no bodies
    GeoJson,

    /// `storymap-{locale}-events.json`, raw bodies
    StoryMap,

    /// `timelinejs-{locale}-events.csv`, HTML bodies
    TimelineJs,
}

impl EventArtifact {
    pub fn file_prefix(self) -> &'static str {
        match self {
            EventArtifact::GeoJson => "geojson",
            EventArtifact::StoryMap => "storymap",
            EventArtifact::TimelineJs => "timelinejs",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            EventArtifact::TimelineJs => "csv",
            EventArtifact::GeoJson | EventArtifact::StoryMap => "json",
        }
    }
}

/// One file written by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,

    /// Slugs (indexes) or events (event artifacts) written
    pub entries: usize,
}

/// Summary of a run
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub files: Vec<GeneratedFile>,

    /// Timeline files left out of event artifacts
    pub skipped: Vec<SkippedFile>,
}

/// Fail unless the content root exists
pub fn ensure_content_root(root: &Path) -> IndexResult<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(IndexError::MissingContentRoot(root.to_path_buf()))
    }
}

/// Produces navigation indexes and event artifacts from a content tree
pub struct Generator {
    config: ResolvedConfig,
    renderer: Box<dyn MarkupRenderer>,
}

impl Generator {
    /// Generator using the CommonMark renderer
    pub fn new(config: ResolvedConfig) -> Self {
        Self::with_renderer(config, Box::new(CommonMarkRenderer::new()))
    }

    pub fn with_renderer(config: ResolvedConfig, renderer: Box<dyn MarkupRenderer>) -> Self {
        Self { config, renderer }
    }

    /// Build and write the navigation index in the configured output mode
    #[instrument(skip(self), fields(root = %self.config.content_root.display()))]
    pub async fn generate_paths(&self) -> IndexResult<Report> {
        let cfg = &self.config;
        ensure_content_root(&cfg.content_root)?;

        let locales = resolve_locales(
            &cfg.content_root,
            &cfg.content_types,
            &cfg.locales,
            cfg.locale_source,
        )
        .await?;

        let mut indexes = Vec::with_capacity(locales.len());
        for locale in locales {
            let index = index_locale(&cfg.content_root, &cfg.content_types, &locale).await?;
            if !index.has_content() {
                info!(%locale, "No content found for locale");
            }
            indexes.push((locale, index));
        }

        let mut report = Report::default();
        match cfg.output_mode {
            OutputMode::PerLocale => {
                for (locale, index) in &indexes {
                    let path = cfg.locale_index_path(locale);
                    write_atomic(&path, &to_pretty_json(index)?)?;
                    info!(path = %path.display(), "Generated");
                    report.files.push(GeneratedFile {
                        path,
                        entries: index.len(),
                    });
                }
            }
            OutputMode::Combined => {
                let entries: usize = indexes.iter().map(|(_, index)| index.len()).sum();
                let combined: CombinedIndex = indexes.into_iter().collect();
                let path = cfg.combined_index_path();
                write_atomic(&path, &to_pretty_json(&combined)?)?;
                info!(path = %path.display(), locales = combined.len(), "Generated");
                report.files.push(GeneratedFile { path, entries });
            }
        }

        Ok(report)
    }

    /// Extract one locale's timeline and write it as `artifact`
    #[instrument(skip(self, locale), fields(%locale))]
    pub async fn generate_events(
        &self,
        artifact: EventArtifact,
        locale: &Locale,
    ) -> IndexResult<Report> {
        let cfg = &self.config;
        ensure_content_root(&cfg.content_root)?;

        let details = match artifact {
            EventArtifact::GeoJson => Details::Omit,
            EventArtifact::StoryMap => Details::Raw,
            EventArtifact::TimelineJs => Details::Html(self.renderer.as_ref()),
        };
        let Extraction { events, skipped } =
            extract_events(&cfg.content_root, locale, details).await?;

        let count = events.len();

        let contents = match artifact {
            EventArtifact::TimelineJs => to_timelinejs_csv(&events, locale)?,
            EventArtifact::GeoJson | EventArtifact::StoryMap => {
                to_pretty_json(&EventList { events })?
            }
        };

        let path = cfg.events_path(artifact.file_prefix(), locale, artifact.extension());
        write_atomic(&path, &contents)?;
        info!(path = %path.display(), events = count, "Created");

        Ok(Report {
            files: vec![GeneratedFile {
                path,
                entries: count,
            }],
            skipped,
        })
    }
}
