// src/printer/mod.rs

//! The `printer` module renders [`Record`s] into the report text and writes
//! that text to a file.
//!
//! [`Record`s]: crate::data::record::Record

pub mod report;
pub mod writer;
