// src/readers/mod.rs

//! "Readers" for _alrlib_.
//!
//! ## Overview of readers
//!
//! * [`read_lines`] reads a file into non-empty lines.
//! * A [`LogParser`] derives [`Record`s] from those lines.
//!
//! [`read_lines`]: crate::readers::linereader::read_lines
//! [`LogParser`]: crate::readers::logparser::LogParser
//! [`Record`s]: crate::data::record::Record

pub mod linereader;
pub mod logparser;
