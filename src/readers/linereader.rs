// src/readers/linereader.rs

//! Functions to read a file into a sequence of non-empty lines.
//!
//! A file is read entirely into memory; the log is small and the
//! [`LogParser`] needs every line before the report may be rendered.
//!
//! [`LogParser`]: crate::readers::logparser::LogParser

use crate::common::{
    FPath,
    FileOpenOptions,
    LineStr,
    LineStrs,
    CRc,
    NLc,
};

use std::io::{Read, Result};

use ::si_trace_print::{defn, defo, defx};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LineReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Split `data` into lines.
///
/// Lines end at `'\n'`. A `'\r'` immediately before the `'\n'` (or before the
/// end of `data`) is removed. Lines that are then empty are dropped.
/// Lines of only whitespace are kept.
pub fn lines_from_str(data: &str) -> LineStrs {
    let mut lines: LineStrs = LineStrs::new();
    for line in data.split(NLc) {
        let line: &str = line.strip_suffix(CRc).unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        lines.push(LineStr::from(line));
    }

    lines
}

/// Read the file at `path` and return its non-empty lines, per
/// [`lines_from_str`].
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
/// Errors from opening or reading the file are returned unchanged.
pub fn read_lines(path: &FPath) -> Result<LineStrs> {
    defn!("({:?})", path);
    let mut open_options = FileOpenOptions::new();
    let mut file = match open_options
        .read(true)
        .open(path)
    {
        Ok(val) => val,
        Err(err) => {
            defx!("open({:?}) error {}", path, err);
            return Err(err);
        }
    };
    let mut buffer: Vec<u8> = Vec::new();
    if let Err(err) = file.read_to_end(&mut buffer) {
        defx!("read_to_end error {}", err);
        return Err(err);
    }
    defo!("read {} bytes", buffer.len());
    let lines: LineStrs = lines_from_str(&String::from_utf8_lossy(&buffer));
    defx!("return {} lines", lines.len());

    Ok(lines)
}
