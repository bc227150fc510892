//! Parsing and Russian-language formatting of entry dates.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Parses the date forms the content API is known to emit.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps
/// and bare `YYYY-MM-DD` dates. Returns `None` for anything else.
pub fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Formats a date as `5 марта 2024`.
pub fn format_long(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Formats a date as `05.03.2024`.
pub fn format_short(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
