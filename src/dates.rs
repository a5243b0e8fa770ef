//! Publication-date scanning and normalization.
//!
//! Two concerns live here:
//! - [`find_date`]: locate the first date-shaped substring in a page's text
//! - [`normalize`]: parse such a substring against an ordered list of accepted
//!   formats and reformat it as ISO-8601 (`YYYY-MM-DD`)
//!
//! The accepted formats are numeric `DD.MM.YYYY` and `D. Monat YYYY` with the
//! month name spelled out in German, matching the sites the default URL list
//! points at. Anything else collapses to the invalid-format sentinel; parser
//! diagnostics never leak into the output.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::INVALID_DATE_FORMAT;

/// Matches either `DD.MM.YYYY` or `D[D]. Monthname YYYY` inside running text.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{2}\.\d{2}\.\d{4}|\d{1,2}\.\s+\w+\s+\d{4})\b").unwrap());

/// Captures day, month name, and year of a spelled-out date.
static MONTH_NAME_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\.\s+(\w+)\s+(\d{4})$").unwrap());

/// German month names in calendar order, compared case-insensitively.
const MONTH_NAMES: [&str; 12] = [
    "januar",
    "februar",
    "märz",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "dezember",
];

/// Find the first date-shaped substring in `text`, if any.
///
/// Returns the raw matched text; it still has to pass [`normalize`] before
/// it is a calendar date.
pub fn find_date(text: &str) -> Option<&str> {
    DATE_PATTERN.find(text).map(|m| m.as_str())
}

/// Normalize a raw date token to `YYYY-MM-DD`.
///
/// Accepted formats are tried in fixed order: numeric `DD.MM.YYYY` first,
/// then `D. Monat YYYY`. The first successful parse wins. Tokens matching
/// neither format, and tokens that match a format but name an impossible
/// calendar date, both yield the `"Invalid date format"` sentinel.
pub fn normalize(raw: &str) -> String {
    let parsers: [fn(&str) -> Option<NaiveDate>; 2] = [parse_numeric, parse_month_name];
    for parse in parsers {
        if let Some(date) = parse(raw) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    debug!(%raw, "Date token matched no accepted format");
    INVALID_DATE_FORMAT.to_string()
}

fn parse_numeric(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%d.%m.%Y").ok()
}

fn parse_month_name(raw: &str) -> Option<NaiveDate> {
    let caps = MONTH_NAME_DATE.captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    let wanted = caps[2].to_lowercase();
    let month = MONTH_NAMES.iter().position(|name| *name == wanted)? as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, day)
}
