use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::dom::{Document, Node};

use super::labeled_row;

/// Info-panel labels that carry a date, most specific first.
const DATE_LABELS: &[&str] = &["Release date", "Published", "Updated"];

const DATE_FORMATS: &[&str] = &[
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
];

const LOOSE_DATE_FORMATS: &[&str] = &["%B %d %Y", "%d %B, %Y"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Release date from the labelled info-panel rows, else from the first
/// `abbr[title]` on the page.
pub fn parse_release_date(doc: &Document) -> Option<NaiveDate> {
    let root = doc.root();
    DATE_LABELS
        .iter()
        .find_map(|label| labeled_date(root, label))
        .or_else(|| {
            root.select_first("abbr[title]")
                .and_then(|abbr| abbr.attr("title"))
                .and_then(parse_date)
        })
}

fn labeled_date(root: Node<'_>, label: &str) -> Option<NaiveDate> {
    let cells = labeled_row(root, label)?;
    let value = cells.get(1).or_else(|| cells.last())?;
    let date = parse_date(&value.text());
    if date.is_none() {
        tracing::debug!("Unparsable {:?} value: {:?}", label, value.text());
    }
    date
}

/// Parses a displayed date. Anything from the first `@` on (a time of day)
/// is ignored.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.split('@').next().unwrap_or(text).trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| parse_loose(text))
}

fn parse_loose(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            LOOSE_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
}
