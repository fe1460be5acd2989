// src/printer/report.rs

//! Render [`Record`s] into the report text.
//!
//! The report has three sections, each begun by a header line:
//!
//! 1. [`SECTION1_HEADER`], every `Record` in input order, pipe-delimited.
//! 2. [`SECTION2_HEADER`], every `Record` id, sorted.
//! 3. [`SECTION3_HEADER`], every distinct user id, sorted and numbered.
//!
//! An empty line precedes the headers of sections 2 and 3.
//!
//! All sorting is by byte order of the UTF-8 strings, independent of host
//! locale.
//!
//! [`Record`s]: crate::data::record::Record

use crate::common::{
    LineStr,
    LineStrs,
    NLs,
};
use crate::data::record::Record;

use ::itertools::Itertools; // for `sorted`, `unique`
use ::si_trace_print::{defn, defx};

pub const SECTION1_HEADER: &str = "Section 1: Pipe-delimited logs";
pub const SECTION2_HEADER: &str = "Section 2: Sorted list of IDs";
pub const SECTION3_HEADER: &str = "Section 3: Unique UserIDs sorted, numbered";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// report sections
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Section 1 body, one pipe-delimited line per `Record`, in input order.
pub fn section_pipe_delimited(records: &[Record]) -> LineStrs {
    records
        .iter()
        .map(Record::to_pipe_delimited)
        .collect()
}

/// Section 2 body, every `Record` id sorted. Duplicates are kept.
pub fn section_ids_sorted(records: &[Record]) -> LineStrs {
    records
        .iter()
        .map(Record::id)
        .sorted()
        .map(LineStr::from)
        .collect()
}

/// Section 3 body, each distinct user id sorted and numbered from 1,
/// e.g. `[1] alice`.
pub fn section_user_ids_numbered(records: &[Record]) -> LineStrs {
    records
        .iter()
        .map(Record::user_id)
        .unique()
        .sorted()
        .enumerate()
        .map(|(index, user_id)| format!("[{}] {}", index + 1, user_id))
        .collect()
}

/// Render `records` to the ordered sequence of report lines.
pub fn render_lines(records: &[Record]) -> LineStrs {
    defn!("({} records)", records.len());
    let mut lines: LineStrs = LineStrs::with_capacity(records.len() * 3 + 5);

    lines.push(LineStr::from(SECTION1_HEADER));
    lines.extend(section_pipe_delimited(records));

    lines.push(LineStr::new());
    lines.push(LineStr::from(SECTION2_HEADER));
    lines.extend(section_ids_sorted(records));

    lines.push(LineStr::new());
    lines.push(LineStr::from(SECTION3_HEADER));
    lines.extend(section_user_ids_numbered(records));

    defx!("return {} lines", lines.len());

    lines
}

/// Render `records` to the report text.
///
/// Lines are joined with `'\n'`. There is no newline after the last line.
pub fn render(records: &[Record]) -> String {
    render_lines(records).join(NLs)
}
