// src/lib.rs

//! _alrlib_ parses an access log into [`Record`]s and renders a three
//! section report from them.
//!
//! The processing pipeline is:
//!
//! 1. [`read_lines`] reads the input file into non-empty lines.
//! 2. [`parse_lines`] turns lines into [`Record`]s, skipping short lines.
//! 3. [`render`] builds the report text.
//! 4. [`write_report`] writes the report text to the output file.
//!
//! [`Record`]: crate::data::record::Record
//! [`read_lines`]: crate::readers::linereader::read_lines
//! [`parse_lines`]: crate::readers::logparser::parse_lines
//! [`render`]: crate::printer::report::render
//! [`write_report`]: crate::printer::writer::write_report

pub mod common;
pub mod data;
pub mod debug;
pub mod printer;
pub mod readers;
#[cfg(test)]
pub mod tests;
