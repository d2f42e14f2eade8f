//! Content categories, locales and slugs.

use std::path::{Component, Path};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extension of every indexable content file
pub const CONTENT_EXTENSION: &str = "mdx";

/// Locales built into the default configuration
pub const SUPPORTED_LOCALES: [&str; 4] = ["en", "ar", "ur", "bn"];

/// Category of content, one subdirectory of the content root each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Biography chapters
    Seerah,

    /// Quizzes
    Quiz,

    /// Glossary entries
    Glossary,

    /// Bibliography / reference pages
    References,

    /// Dated events, named `{year}-event-{id}.mdx`
    Timeline,
}

impl ContentType {
    /// Every content type, in output order
    pub const ALL: [ContentType; 5] = [
        ContentType::Seerah,
        ContentType::Quiz,
        ContentType::Glossary,
        ContentType::References,
        ContentType::Timeline,
    ];

    /// Subdirectory name under the content root
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentType::Seerah => "seerah",
            ContentType::Quiz => "quiz",
            ContentType::Glossary => "glossary",
            ContentType::References => "references",
            ContentType::Timeline => "timeline",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl std::str::FromStr for ContentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "seerah" => Ok(ContentType::Seerah),
            "quiz" => Ok(ContentType::Quiz),
            "glossary" => Ok(ContentType::Glossary),
            "references" => Ok(ContentType::References),
            "timeline" => Ok(ContentType::Timeline),
            _ => anyhow::bail!("Unknown content type: {}", s),
        }
    }
}

/// Rejected locale code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale code is empty")]
    Empty,

    #[error("locale code {0:?} is not a single directory name")]
    NotADirectoryName(String),
}

/// Language code, one subdirectory of a content type directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Validated locale from user input.
    ///
    /// The code becomes a path component under the content root and the
    /// output directory, so it must name exactly one plain directory.
    pub fn parse(code: &str) -> Result<Self, LocaleError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut components = Path::new(code).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal || code.contains(['/', '\\']) {
            return Err(LocaleError::NotADirectoryName(code.to_string()));
        }

        Ok(Self::new(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// The default locale allow-list
pub fn supported_locales() -> Vec<Locale> {
    SUPPORTED_LOCALES.iter().map(|l| Locale::from(*l)).collect()
}

/// Slug of a content file: its name without the content extension.
///
/// Returns `None` for anything that is not a content file.
pub fn slug_from_file(file_name: &str) -> Option<&str> {
    let slug = file_name.strip_suffix(CONTENT_EXTENSION)?.strip_suffix('.')?;
    if slug.is_empty() {
        None
    } else {
        Some(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_strips_extension() {
        assert_eq!(slug_from_file("intro.mdx"), Some("intro"));
        assert_eq!(slug_from_file("610-event-3.mdx"), Some("610-event-3"));
        assert_eq!(slug_from_file("notes.md"), None);
        assert_eq!(slug_from_file("archive.mdx.bak"), None);
        assert_eq!(slug_from_file(".mdx"), None);
        assert_eq!(slug_from_file("weirdmdx"), None);
    }

    #[test]
    fn test_locale_parse_accepts_codes() {
        assert_eq!(Locale::parse("en").unwrap().as_str(), "en");
        assert_eq!(Locale::parse(" pt-BR ").unwrap().as_str(), "pt-BR");
        assert_eq!(Locale::parse("zh_Hant").unwrap().as_str(), "zh_Hant");
    }

    #[test]
    fn test_locale_parse_rejects_paths() {
        assert_eq!(Locale::parse("  "), Err(LocaleError::Empty));
        for bad in ["..", ".", "../x", "en/../../etc", "/tmp", "a/b", "en/", "a\\b"] {
            assert!(
                matches!(Locale::parse(bad), Err(LocaleError::NotADirectoryName(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_content_type_round_trip() {
        for ct in ContentType::ALL {
            assert_eq!(ct.dir_name().parse::<ContentType>().unwrap(), ct);
        }
        assert_eq!("Quiz".parse::<ContentType>().unwrap(), ContentType::Quiz);
        assert!("videos".parse::<ContentType>().is_err());
    }
}
