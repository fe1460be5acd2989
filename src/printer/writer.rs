// src/printer/writer.rs

//! Write the report text to a file.

use crate::common::{FPath, FileOpenOptions};
use crate::debug::printers::de_err;

use std::io::{Result, Write};

use ::si_trace_print::{defn, defo, defx};

/// Write `text` verbatim to the file at `path`, replacing any prior content.
///
/// The file is created if missing and truncated if present. A symbolic link
/// at `path` is followed; the link target receives the text.
pub fn write_report(
    path: &FPath,
    text: &str,
) -> Result<()> {
    defn!("({:?}, {} bytes)", path, text.len());
    let mut open_options = FileOpenOptions::new();
    let mut file = match open_options
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
    {
        Ok(val) => val,
        Err(err) => {
            de_err!("open({:?}) error {}", path, err);
            defx!();
            return Err(err);
        }
    };
    defo!("write_all {} bytes", text.len());
    file.write_all(text.as_bytes())?;
    file.flush()?;
    defx!();

    Ok(())
}
