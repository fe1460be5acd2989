// src/data/datetime.rs

//! Functions to transform log line datetime strings to chrono
//! [`NaiveDateTime`] instances, and to format those instances for the report.
//!
//! A log line carries its timestamp as two tokens, a date and a time, without
//! any timezone. The pair is joined with a single space and passed to
//! [`datetime_parse_str`] which tries each pattern in
//! [`DATETIME_PARSE_PATTERNS`] and then each pattern in
//! [`DATE_PARSE_PATTERNS`].
//!
//! The most relevant document to understand this file is the
//! `chrono` crate [`strftime`] format.
//!
//! [`NaiveDateTime`]: https://docs.rs/chrono/0.4.40/chrono/naive/struct.NaiveDateTime.html
//! [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html

#![allow(non_camel_case_types)]

#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

#[doc(hidden)]
pub use ::chrono::{
    NaiveDate,
    NaiveDateTime,
    NaiveTime,
};
use ::si_trace_print::{defn, defo, defx};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DateTime parsing and strftime formatting
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Crate `chrono` [`strftime`] formatting pattern, passed to
/// chrono [`NaiveDateTime::parse_from_str`].
///
/// [`strftime`]: https://docs.rs/chrono/0.4.40/chrono/format/strftime/index.html
/// [`NaiveDateTime::parse_from_str`]: https://docs.rs/chrono/0.4.40/chrono/naive/struct.NaiveDateTime.html#method.parse_from_str
pub type DateTimePattern_str = str;

/// The chrono datetime type of a log [`Record`].
///
/// Naive: log lines have no timezone and none is assumed.
///
/// [`Record`]: crate::data::record::Record
pub type DateTimeR = NaiveDateTime;
pub type DateTimeROpt = Option<DateTimeR>;

/// Patterns for a date token followed by a time token.
///
/// Tried in order, the first successful parse wins.
pub const DATETIME_PARSE_PATTERNS: [&DateTimePattern_str; 9] = [
    // 2024-03-05 14:03:09
    "%Y-%m-%d %H:%M:%S",
    // 2024-03-05 14:03:09.123
    "%Y-%m-%d %H:%M:%S%.f",
    // 2024-03-05T14:03:09
    "%Y-%m-%dT%H:%M:%S",
    // 2024-03-05T14:03:09.123
    "%Y-%m-%dT%H:%M:%S%.f",
    // 2024-03-05 14:03
    "%Y-%m-%d %H:%M",
    // 2024/03/05 14:03:09
    "%Y/%m/%d %H:%M:%S",
    // 03/05/2024 14:03:09 (American order)
    "%m/%d/%Y %H:%M:%S",
    // 05-03-2024 14:03:09
    "%d-%m-%Y %H:%M:%S",
    // 05.03.2024 14:03:09
    "%d.%m.%Y %H:%M:%S",
];

/// Patterns for a lone date token. The time of day becomes midnight.
pub const DATE_PARSE_PATTERNS: [&DateTimePattern_str; 5] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
];

/// Report output format, e.g. `Tue, March 05 2024, 14:03:09`.
///
/// chrono always uses English names for `%a` and `%B` so this does not vary
/// with host locale.
pub const DATETIME_REPORT_FORMAT: &DateTimePattern_str = "%a, %B %d %Y, %H:%M:%S";

/// Join a date token and a time token the way a log line carries them.
///
/// A missing time token is passed as `""`, the result then has a trailing
/// space.
pub fn datetime_tokens_join(
    date: &str,
    time: &str,
) -> String {
    let mut s: String = String::with_capacity(date.len() + time.len() + 1);
    s.push_str(date);
    s.push(' ');
    s.push_str(time);

    s
}

/// Parse `data` with the one `pattern` as a date and time.
pub fn datetime_parse_from_str(
    data: &str,
    pattern: &DateTimePattern_str,
) -> DateTimeROpt {
    match NaiveDateTime::parse_from_str(data, pattern) {
        Ok(val) => Some(val),
        Err(_err) => {
            defo!("NaiveDateTime::parse_from_str({:?}, {:?}) failed ParseError: {}", data, pattern, _err);

            None
        }
    }
}

/// Parse `data` with the one `pattern` as a date, at midnight.
pub fn date_parse_from_str(
    data: &str,
    pattern: &DateTimePattern_str,
) -> DateTimeROpt {
    match NaiveDate::parse_from_str(data, pattern) {
        Ok(val) => Some(val.and_time(NaiveTime::MIN)),
        Err(_err) => {
            defo!("NaiveDate::parse_from_str({:?}, {:?}) failed ParseError: {}", data, pattern, _err);

            None
        }
    }
}

/// Parse a log line timestamp string to a [`DateTimeR`].
///
/// Surrounding whitespace is ignored. Every pattern in
/// [`DATETIME_PARSE_PATTERNS`] is tried, then every pattern in
/// [`DATE_PARSE_PATTERNS`]. Returns `None` if nothing matches.
pub fn datetime_parse_str(data: &str) -> DateTimeROpt {
    defn!("({:?})", str_to_String_noraw(data));
    let data_ = data.trim();
    if data_.is_empty() {
        defx!("empty, return None");
        return None;
    }
    for pattern in DATETIME_PARSE_PATTERNS.iter() {
        if let Some(dt) = datetime_parse_from_str(data_, pattern) {
            defx!("pattern {:?} return {:?}", pattern, dt);
            return Some(dt);
        }
    }
    for pattern in DATE_PARSE_PATTERNS.iter() {
        if let Some(dt) = date_parse_from_str(data_, pattern) {
            defx!("date-only pattern {:?} return {:?}", pattern, dt);
            return Some(dt);
        }
    }
    defx!("no pattern matched, return None");

    None
}

/// Format `dt` per [`DATETIME_REPORT_FORMAT`].
pub fn datetime_format_report(dt: &DateTimeR) -> String {
    dt.format(DATETIME_REPORT_FORMAT).to_string()
}

/// Helper to create a [`DateTimeR`]. Panics on invalid values.
///
/// only intended to aid testing
#[cfg(test)]
pub fn ymdhms(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTimeR {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}
