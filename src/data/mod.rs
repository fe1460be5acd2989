// src/data/mod.rs

//! The `data` module is specialized data containers for parsed access log
//! [`Record`]s and their timestamps.
//!
//! ## Definitions of data
//!
//! ### Line
//!
//! A "line" is a sequence of characters in the input file that:
//!
//! * begin after a prior "line" or the beginning of a file.
//! * end with a newline character `'\n'` or the end of a file.
//!
//! Empty lines are dropped by the [`LineReader`] functions.
//!
//! ### Record
//!
//! A "record" is a "line" with at least five whitespace-separated tokens:
//!
//! ```text
//! <id> <userId> <bytesSent> <bytesReceived> <date> <time>
//! ```
//!
//! A "record" is represented by a [`Record`] and created by a [`LogParser`].
//!
//! [`LineReader`]: crate::readers::linereader
//! [`Record`]: crate::data::record::Record
//! [`LogParser`]: crate::readers::logparser::LogParser

pub mod bytecount;
pub mod datetime;
pub mod record;
