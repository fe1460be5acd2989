// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling, command-line parsing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub use std::fs::File;
pub use std::path::Path;

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FileOpenOptions = std::fs::OpenOptions;

/// Input log file processed when no path is passed.
pub const INPUT_FPATH_DEFAULT: &str = "sample-log.txt";
/// Report file written when no path is passed.
pub const OUTPUT_FPATH_DEFAULT: &str = "output.txt";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// counting
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// general purpose counting type, used for statistics
pub type Count = u64;

/// A count of bytes transmitted or received, as written in a log line.
///
/// Signed, the permissive token conversion keeps a leading `-`.
pub type ByteCount = i64;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lines and LineReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// NewLine as char
#[allow(dead_code, non_upper_case_globals)]
pub const NLc: char = '\n';
/// NewLine as `str`, the one line separator used in all written output,
/// regardless of host platform.
#[allow(non_upper_case_globals)]
pub const NLs: &str = "\n";
/// Carriage Return as char, stripped from the end of read lines.
#[allow(non_upper_case_globals)]
pub const CRc: char = '\r';

/// A single line of text, line terminators already removed.
pub type LineStr = String;
/// Sequence of [`LineStr`].
pub type LineStrs = Vec<LineStr>;
