//! Timeline file names: `{year}-event-{id}.mdx`.

use std::cmp::Ordering;
use std::sync::OnceLock;

use regex::Regex;

static TIMELINE_NAME: OnceLock<Regex> = OnceLock::new();

fn timeline_name_pattern() -> &'static Regex {
    TIMELINE_NAME.get_or_init(|| {
        Regex::new(r"^(\d+)-event-(\d+)\.mdx$").expect("timeline name pattern is valid")
    })
}

/// Fields parsed from a well-formed timeline file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineName {
    /// Year prefix
    pub year: u64,

    /// Event number within the year
    pub event_id: u64,

    /// File name without extension
    pub slug: String,
}

/// Result of matching a file name against the timeline scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// Well-formed name with a usable year
    Timeline(TimelineName),

    /// Well-formed name whose year does not fit in a `u64`
    YearOutOfRange,

    /// Not a timeline file name
    Other,
}

impl TimelineName {
    /// Match a file name against `{year}-event-{id}.mdx`.
    ///
    /// An event number too large to represent sorts as 0. A year too large
    /// to represent is reported as [`NameMatch::YearOutOfRange`] so callers
    /// can say which file was left out.
    pub fn parse(file_name: &str) -> NameMatch {
        let Some(caps) = timeline_name_pattern().captures(file_name) else {
            return NameMatch::Other;
        };
        let Ok(year) = caps[1].parse() else {
            return NameMatch::YearOutOfRange;
        };
        let event_id = caps[2].parse().unwrap_or(0);
        let slug = match file_name.strip_suffix(".mdx") {
            Some(slug) => slug.to_string(),
            None => return NameMatch::Other,
        };

        NameMatch::Timeline(Self {
            year,
            event_id,
            slug,
        })
    }

    /// Order inside one year group: event number, then slug
    pub fn cmp_within_year(&self, other: &Self) -> Ordering {
        self.event_id
            .cmp(&other.event_id)
            .then_with(|| self.slug.cmp(&other.slug))
    }
}

impl PartialOrd for TimelineName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimelineName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.cmp_within_year(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(file_name: &str) -> Option<TimelineName> {
        match TimelineName::parse(file_name) {
            NameMatch::Timeline(name) => Some(name),
            _ => None,
        }
    }

    #[test]
    fn test_parse_well_formed() {
        let name = timeline("610-event-12.mdx").unwrap();
        assert_eq!(name.year, 610);
        assert_eq!(name.event_id, 12);
        assert_eq!(name.slug, "610-event-12");
    }

    #[test]
    fn test_parse_rejects_other_names() {
        for bad in [
            "notes.mdx",
            "abc-event-1.mdx",
            "610-event-.mdx",
            "610-event-1.md",
            "610-Event-1.mdx",
            "x610-event-1.mdx",
            "610-event-1.mdx.orig",
        ] {
            assert_eq!(TimelineName::parse(bad), NameMatch::Other, "{bad} should not parse");
        }
    }

    #[test]
    fn test_oversized_event_id_sorts_first() {
        let name = timeline("1-event-99999999999999999999999.mdx").unwrap();
        assert_eq!(name.event_id, 0);
    }

    #[test]
    fn test_oversized_year_is_reported() {
        assert_eq!(
            TimelineName::parse("99999999999999999999-event-1.mdx"),
            NameMatch::YearOutOfRange
        );
        assert_eq!(timeline("18446744073709551615-event-1.mdx").unwrap().year, u64::MAX);
    }

    #[test]
    fn test_ordering() {
        let mut names: Vec<_> = ["2-event-1.mdx", "1-event-10.mdx", "1-event-2.mdx", "1-event-02.mdx"]
            .into_iter()
            .filter_map(timeline)
            .collect();
        names.sort();

        let slugs: Vec<_> = names.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(slugs, ["1-event-02", "1-event-2", "1-event-10", "2-event-1"]);
    }
}
