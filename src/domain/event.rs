//! Timeline events extracted from frontmatter.

use serde::{Deserialize, Serialize};

use crate::content::Header;

use super::timeline::TimelineName;

/// Frontmatter keys every event must carry
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "location", "date", "age"];

/// The four required header values of an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub title: String,
    pub location: String,
    pub date: String,
    pub age: String,
}

/// Outcome of checking a header for the required event fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(EventFields),
    Missing(Vec<&'static str>),
}

impl EventFields {
    /// Classify a header.
    ///
    /// `title`, `location` and `date` must be non-empty scalars. `age` only
    /// has to be present and non-null, so an age of `0` is accepted.
    pub fn validate(header: &Header) -> Validation {
        let non_empty = |key: &str| header.text(key).filter(|s| !s.is_empty());

        let title = non_empty("title");
        let location = non_empty("location");
        let date = non_empty("date");
        let age = header.text("age");

        match (title, location, date, age) {
            (Some(title), Some(location), Some(date), Some(age)) => Validation::Valid(Self {
                title,
                location,
                date,
                age,
            }),
            (title, location, date, age) => {
                let present = [title.is_some(), location.is_some(), date.is_some(), age.is_some()];
                let missing = REQUIRED_FIELDS
                    .iter()
                    .zip(present)
                    .filter(|(_, ok)| !ok)
                    .map(|(key, _)| *key)
                    .collect();
                Validation::Missing(missing)
            }
        }
    }
}

/// One dated event, as written to the event-list outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub location: String,
    pub date: String,
    pub age: String,
    pub year: u64,
    pub event_id: u64,

    /// Body text, raw or rendered, when the output carries it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Source slug, kept for ordering ties
    #[serde(skip)]
    pub slug: String,
}

impl Event {
    pub fn new(name: TimelineName, fields: EventFields) -> Self {
        Self {
            title: fields.title,
            location: fields.location,
            date: fields.date,
            age: fields.age,
            year: name.year,
            event_id: name.event_id,
            details: None,
            slug: name.slug,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Sort by year, then event number, then slug
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| {
        a.year
            .cmp(&b.year)
            .then_with(|| a.event_id.cmp(&b.event_id))
            .then_with(|| a.slug.cmp(&b.slug))
    });
}

/// Top-level shape of the event JSON files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Frontmatter;
    use crate::domain::NameMatch;

    fn header(yaml: &str) -> Header {
        Frontmatter::parse(&format!("---\n{yaml}---\n")).unwrap().header
    }

    #[test]
    fn test_all_fields_present() {
        let h = header("title: A\nlocation: Mecca\ndate: 610\nage: 40\n");
        let Validation::Valid(fields) = EventFields::validate(&h) else {
            panic!("expected valid header");
        };
        assert_eq!(fields.date, "610");
        assert_eq!(fields.age, "40");
    }

    #[test]
    fn test_reports_missing_fields() {
        let h = header("title: A\nlocation: ''\ndate: 610\n");
        assert_eq!(
            EventFields::validate(&h),
            Validation::Missing(vec!["location", "age"])
        );
    }

    #[test]
    fn test_zero_age_is_valid() {
        let h = header("title: Birth\nlocation: Mecca\ndate: 570\nage: 0\n");
        assert!(matches!(EventFields::validate(&h), Validation::Valid(_)));
    }

    #[test]
    fn test_null_age_is_missing() {
        let h = header("title: A\nlocation: B\ndate: C\nage: ~\n");
        assert_eq!(EventFields::validate(&h), Validation::Missing(vec!["age"]));
    }

    #[test]
    fn test_event_json_shape() {
        let NameMatch::Timeline(name) = TimelineName::parse("1-event-2.mdx") else {
            panic!("expected a timeline name");
        };
        let h = header("title: B\nlocation: Medina\ndate: '622'\nage: 52\n");
        let Validation::Valid(fields) = EventFields::validate(&h) else {
            panic!("expected valid header");
        };
        let event = Event::new(name, fields);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "B",
                "location": "Medina",
                "date": "622",
                "age": "52",
                "year": 1,
                "eventId": 2
            })
        );

        let with_body = serde_json::to_value(event.with_details("text")).unwrap();
        assert_eq!(with_body["details"], "text");
    }
}
