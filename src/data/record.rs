// src/data/record.rs

//! Implements a [`Record`] struct, one parsed access log line.
//!
//! [`Record`]: crate::data::record::Record

use crate::common::ByteCount;
use crate::data::bytecount::format_bytes;
use crate::data::datetime::{
    datetime_format_report,
    datetime_parse_str,
    DateTimeR,
};

use std::fmt;
use std::io::{Error, ErrorKind, Result};

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

// ------
// Record

/// A `Record` is one access log event: who did it, how many bytes moved each
/// way, and when.
///
/// A `Record` never changes after creation. There are no setters.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record {
    /// Opaque identifier of the event. Not necessarily unique.
    id: String,
    /// Identifier of the acting user.
    user_id: String,
    bytes_sent: ByteCount,
    bytes_received: ByteCount,
    /// Parsed timestamp, no timezone.
    timestamp: DateTimeR,
}

/// Sequence of [`Record`]s, in input file order.
pub type Records = Vec<Record>;

impl Record {
    /// Create a `Record`, parsing `timestamp` with [`datetime_parse_str`].
    ///
    /// Returns an [`ErrorKind::InvalidData`] error if `timestamp` cannot be
    /// parsed.
    ///
    /// [`datetime_parse_str`]: crate::data::datetime::datetime_parse_str
    pub fn new(
        id: &str,
        user_id: &str,
        bytes_sent: ByteCount,
        bytes_received: ByteCount,
        timestamp: &str,
    ) -> Result<Record> {
        defn!("({:?}, {:?}, {}, {}, {:?})", id, user_id, bytes_sent, bytes_received, timestamp);
        let dt: DateTimeR = match datetime_parse_str(timestamp) {
            Some(val) => val,
            None => {
                defx!("failed to parse timestamp {:?}", timestamp);
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("record id {:?} has an unparseable timestamp {:?}", id, timestamp),
                ));
            }
        };
        defx!("dt {:?}", dt);

        Ok(Record::from_parts(id, user_id, bytes_sent, bytes_received, dt))
    }

    /// Create a `Record` from an already parsed timestamp.
    pub fn from_parts(
        id: &str,
        user_id: &str,
        bytes_sent: ByteCount,
        bytes_received: ByteCount,
        timestamp: DateTimeR,
    ) -> Record {
        Record {
            id: String::from(id),
            user_id: String::from(user_id),
            bytes_sent,
            bytes_received,
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    pub const fn bytes_sent(&self) -> ByteCount {
        self.bytes_sent
    }

    pub const fn bytes_received(&self) -> ByteCount {
        self.bytes_received
    }

    /// Return a reference to `self.timestamp`
    pub const fn timestamp(&self) -> &DateTimeR {
        &self.timestamp
    }

    /// The pipe-delimited form written to the first report section, e.g.
    /// `alice|1,500|2,300|Tue, March 05 2024, 14:03:09|001`.
    pub fn to_pipe_delimited(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.user_id,
            format_bytes(self.bytes_sent),
            format_bytes(self.bytes_received),
            datetime_format_report(&self.timestamp),
            self.id,
        )
    }
}

impl fmt::Display for Record {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        write!(f, "{}", self.to_pipe_delimited())
    }
}
