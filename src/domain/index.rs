//! Navigation indexes: slugs per content type for one locale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::content::{ContentType, Locale};
use super::timeline::TimelineName;

/// Timeline slugs grouped by year, years ascending
pub type YearGroups = BTreeMap<u64, Vec<String>>;

/// Result of indexing one content type in one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartialIndex {
    Slugs(ContentType, Vec<String>),
    Timeline(YearGroups),
}

impl PartialIndex {
    pub fn is_empty(&self) -> bool {
        match self {
            PartialIndex::Slugs(_, slugs) => slugs.is_empty(),
            PartialIndex::Timeline(groups) => groups.is_empty(),
        }
    }
}

/// Group timeline names by year, each group ordered by event number then slug
pub fn group_by_year(names: impl IntoIterator<Item = TimelineName>) -> YearGroups {
    let mut by_year: BTreeMap<u64, Vec<TimelineName>> = BTreeMap::new();
    for name in names {
        by_year.entry(name.year).or_default().push(name);
    }

    by_year
        .into_iter()
        .map(|(year, mut names)| {
            names.sort_by(TimelineName::cmp_within_year);
            (year, names.into_iter().map(|n| n.slug).collect())
        })
        .collect()
}

/// All slugs of one locale, in the per-locale JSON shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleIndex {
    pub seerah: Vec<String>,
    pub quiz: Vec<String>,
    pub glossary: Vec<String>,
    pub references: Vec<String>,
    pub timeline: YearGroups,
}

impl LocaleIndex {
    /// Fold partial results into one index
    pub fn from_parts(parts: impl IntoIterator<Item = PartialIndex>) -> Self {
        parts.into_iter().fold(Self::default(), Self::with_part)
    }

    fn with_part(self, part: PartialIndex) -> Self {
        match part {
            PartialIndex::Slugs(ContentType::Seerah, seerah) => Self { seerah, ..self },
            PartialIndex::Slugs(ContentType::Quiz, quiz) => Self { quiz, ..self },
            PartialIndex::Slugs(ContentType::Glossary, glossary) => Self { glossary, ..self },
            PartialIndex::Slugs(ContentType::References, references) => {
                Self { references, ..self }
            }
            PartialIndex::Slugs(ContentType::Timeline, _) => self,
            PartialIndex::Timeline(timeline) => Self { timeline, ..self },
        }
    }

    pub fn has_content(&self) -> bool {
        !(self.seerah.is_empty()
            && self.quiz.is_empty()
            && self.glossary.is_empty()
            && self.references.is_empty()
            && self.timeline.is_empty())
    }

    /// Total number of slugs across all content types
    pub fn len(&self) -> usize {
        self.seerah.len()
            + self.quiz.len()
            + self.glossary.len()
            + self.references.len()
            + self.timeline.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_content()
    }
}

/// Every locale's index in one document, keyed by locale code
pub type CombinedIndex = BTreeMap<Locale, LocaleIndex>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NameMatch;

    fn names(files: &[&str]) -> Vec<TimelineName> {
        files
            .iter()
            .filter_map(|f| match TimelineName::parse(f) {
                NameMatch::Timeline(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_group_by_year() {
        let groups = group_by_year(names(&[
            "622-event-10.mdx",
            "610-event-1.mdx",
            "622-event-2.mdx",
            "622-event-1.mdx",
        ]));

        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), [610, 622]);
        assert_eq!(groups[&622], ["622-event-1", "622-event-2", "622-event-10"]);
    }

    #[test]
    fn test_fold_parts() {
        let index = LocaleIndex::from_parts([
            PartialIndex::Slugs(ContentType::Quiz, vec!["q1".into()]),
            PartialIndex::Slugs(ContentType::Seerah, vec![]),
            PartialIndex::Timeline(group_by_year(names(&["1-event-1.mdx"]))),
        ]);

        assert_eq!(index.quiz, ["q1"]);
        assert!(index.seerah.is_empty());
        assert_eq!(index.timeline[&1], ["1-event-1"]);
        assert_eq!(index.len(), 2);
        assert!(index.has_content());
    }

    #[test]
    fn test_empty_index_json_shape() {
        let json = serde_json::to_string(&LocaleIndex::default()).unwrap();
        assert_eq!(
            json,
            r#"{"seerah":[],"quiz":[],"glossary":[],"references":[],"timeline":{}}"#
        );
    }

    #[test]
    fn test_year_keys_serialize_as_strings() {
        let index = LocaleIndex::from_parts([PartialIndex::Timeline(group_by_year(names(&[
            "9-event-1.mdx",
            "10-event-1.mdx",
        ])))]);
        let json = serde_json::to_string(&index.timeline).unwrap();
        assert_eq!(json, r#"{"9":["9-event-1"],"10":["10-event-1"]}"#);
    }
}
