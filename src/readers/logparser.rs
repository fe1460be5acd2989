// src/readers/logparser.rs

//! Implements a [`LogParser`], the driver of deriving [`Record`]s from lines
//! of an access log.
//!
//! Each line is split on runs of whitespace into tokens:
//!
//! | token | field            |
//! |-------|------------------|
//! | 0     | `id`             |
//! | 1     | `user_id`        |
//! | 2     | `bytes_sent`     |
//! | 3     | `bytes_received` |
//! | 4     | date             |
//! | 5     | time             |
//!
//! Lines with fewer than [`TOKENS_MIN`] tokens are skipped. A line with
//! exactly `TOKENS_MIN` tokens has no time token; the time is then `""` and
//! the timestamp is the date at midnight.
//! Tokens after the time token are ignored.
//!
//! A timestamp that cannot be parsed stops all parsing with an error.
//!
//! [`Record`]: crate::data::record::Record

use crate::common::{ByteCount, Count};
use crate::data::datetime::datetime_tokens_join;
use crate::data::record::{Record, Records};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

use std::fmt;
use std::io::{Error, Result};

use ::si_trace_print::{defn, defo, defx, defñ};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// token helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Minimum count of whitespace-separated tokens for a line to become a
/// [`Record`]. Lines with fewer tokens are skipped.
pub const TOKENS_MIN: usize = 5;

pub const TOKEN_ID: usize = 0;
pub const TOKEN_USER_ID: usize = 1;
pub const TOKEN_BYTES_SENT: usize = 2;
pub const TOKEN_BYTES_RECEIVED: usize = 3;
pub const TOKEN_DATE: usize = 4;
pub const TOKEN_TIME: usize = 5;

/// Convert a token to a [`ByteCount`], permissively.
///
/// The leading numeric prefix of `token` is converted: an optional `+` or `-`
/// followed by ASCII digits. Anything after the prefix is ignored.
/// A token without a numeric prefix is `0`.
/// Values too large saturate at `ByteCount::MAX` (or `ByteCount::MIN`).
///
/// For example, `"12xyz"` is `12`, `"abc"` is `0`, `"-5"` is `-5`.
pub fn bytecount_from_token(token: &str) -> ByteCount {
    let bytes: &[u8] = token.trim_start().as_bytes();
    let (negative, digits): (bool, &[u8]) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    let mut value: ByteCount = 0;
    for byte_ in digits.iter() {
        if !byte_.is_ascii_digit() {
            break;
        }
        let digit: ByteCount = (byte_ - b'0') as ByteCount;
        value = match negative {
            true => value.saturating_mul(10).saturating_sub(digit),
            false => value.saturating_mul(10).saturating_add(digit),
        };
    }

    value
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parse one `line` into a [`Record`].
///
/// Returns `Ok(None)` if the line has fewer than [`TOKENS_MIN`] tokens.
/// Returns `Err` if the timestamp cannot be parsed.
pub fn parse_line(line: &str) -> Result<Option<Record>> {
    defn!("({:?})", str_to_String_noraw(line));
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < TOKENS_MIN {
        defx!("only {} tokens, skip line", tokens.len());
        return Ok(None);
    }
    let time: &str = tokens.get(TOKEN_TIME).copied().unwrap_or("");
    let timestamp: String = datetime_tokens_join(tokens[TOKEN_DATE], time);
    let record = Record::new(
        tokens[TOKEN_ID],
        tokens[TOKEN_USER_ID],
        bytecount_from_token(tokens[TOKEN_BYTES_SENT]),
        bytecount_from_token(tokens[TOKEN_BYTES_RECEIVED]),
        timestamp.as_str(),
    )?;
    defx!("return {:?}", record);

    Ok(Some(record))
}

/// Parse all `lines` into [`Records`], in the same order.
///
/// Short lines are skipped. The first unparseable timestamp is returned
/// as an error; no `Records` are returned in that case.
///
/// Shorthand for [`LogParser::parse`] when statistics are not wanted.
pub fn parse_lines<S>(lines: &[S]) -> Result<Records>
where
    S: AsRef<str>,
{
    LogParser::new().parse(lines)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LogParser
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Statistics about a [`LogParser`], for CLI option `--summary`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SummaryLogParser {
    /// count of lines passed to the parser
    pub lines_processed: Count,
    /// count of lines skipped for having too few tokens
    pub lines_skipped: Count,
    /// count of `Record`s created
    pub records: Count,
}

impl fmt::Display for SummaryLogParser {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(
            f,
            "lines processed: {}, lines skipped: {}, records: {}",
            self.lines_processed, self.lines_skipped, self.records,
        )
    }
}

/// A `LogParser` turns lines into [`Records`] and counts what it did.
#[derive(Debug, Default)]
pub struct LogParser {
    summary: SummaryLogParser,
}

impl LogParser {
    pub fn new() -> LogParser {
        defñ!();
        LogParser::default()
    }

    /// Parse all `lines` into [`Records`], in the same order.
    ///
    /// See [`parse_line`]. An error message is prefixed with the 1-based
    /// index of the failing line within `lines`.
    pub fn parse<S>(
        &mut self,
        lines: &[S],
    ) -> Result<Records>
    where
        S: AsRef<str>,
    {
        defn!("({} lines)", lines.len());
        let mut records: Records = Records::with_capacity(lines.len());
        for line in lines.iter() {
            self.summary.lines_processed += 1;
            match parse_line(line.as_ref()) {
                Ok(Some(record)) => {
                    self.summary.records += 1;
                    records.push(record);
                }
                Ok(None) => {
                    self.summary.lines_skipped += 1;
                }
                Err(err) => {
                    defx!("line {} error {}", self.summary.lines_processed, err);
                    return Err(Error::new(
                        err.kind(),
                        format!("line {}: {}", self.summary.lines_processed, err),
                    ));
                }
            }
        }
        defo!("{}", self.summary);
        defx!("return {} records", records.len());

        Ok(records)
    }

    /// Return a copy of the statistics gathered so far.
    pub const fn summary(&self) -> SummaryLogParser {
        self.summary
    }
}
