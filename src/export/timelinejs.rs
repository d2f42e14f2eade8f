//! TimelineJS spreadsheet export.
//!
//! One header row and one row per event. Columns this tool does not fill
//! (month, day, media, ...) stay empty for editors to complete by hand.
//! Fields are quoted only when they contain a comma, a double quote or a
//! newline; embedded quotes are doubled.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::{Event, Locale};
use crate::error::IndexResult;

/// Column order expected by the TimelineJS Google Sheets template
pub const TIMELINEJS_HEADERS: [&str; 16] = [
    "Year",
    "Month",
    "Day",
    "Display Date",
    "Age",
    "Location",
    "Headline",
    "Text",
    "Media",
    "Media Credit",
    "Media Caption",
    "Media Thumbnail",
    "Alt Text",
    "Type",
    "Group",
    "Background",
];

/// Age caption per locale; `{age}` is replaced with the event's age
pub const AGE_PHRASES: [(&str, &str); 3] = [
    ("ur", "رسول ﷺ کی عمر مبارک : {age}"),
    ("en", "Age of Hazrat Muhammad S.A.W : {age}"),
    ("ar", "عمر النبي ﷺ المباركة : {age}"),
];

/// Localized age caption, empty for locales without a phrase
pub fn age_phrase(locale: &Locale, age: &str) -> String {
    AGE_PHRASES
        .iter()
        .find(|(code, _)| *code == locale.as_str())
        .map(|(_, template)| template.replace("{age}", age))
        .unwrap_or_default()
}

/// Render sorted events as TimelineJS CSV (rows separated by `\n`)
pub fn to_timelinejs_csv(events: &[Event], locale: &Locale) -> IndexResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(TIMELINEJS_HEADERS)?;

    for event in events {
        let year = event.year.to_string();
        let age = age_phrase(locale, &event.age);
        let text = event.details.as_deref().unwrap_or_default();

        writer.write_record([
            year.as_str(),
            "",
            "",
            event.date.as_str(),
            age.as_str(),
            event.location.as_str(),
            event.title.as_str(),
            text,
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())?;
    let mut out = String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}
