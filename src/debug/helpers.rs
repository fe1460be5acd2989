// src/debug/helpers.rs

//! Miscellaneous helper functions for testing.

use crate::common::FPath;

use std::fs::read_to_string;
#[allow(unused_imports)] // XXX: clippy wrongly marks this as unused
use std::io::Write; // for `NamedTempFile.write_all`

use ::lazy_static::lazy_static;
use ::si_trace_print::{defo, defñ};

#[doc(hidden)]
pub use ::tempfile::NamedTempFile;
#[doc(hidden)]
pub use ::tempfile::TempDir;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// temporary file helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// NamedTempFile instances default to this file name prefix.
///
/// A known prefix eases cleanup of temporary files left after testing.
/// See <https://github.com/Stebalien/tempfile/issues/183>.
pub const STR_TEMPFILE_PREFIX: &str = "tmp-alr-test-";

lazy_static! {
    pub static ref STRING_TEMPFILE_PREFIX: String = String::from(STR_TEMPFILE_PREFIX);
}

/// Small helper function for copying `NamedTempFile` path to a `FPath`.
pub fn ntf_fpath(ntf: &NamedTempFile) -> FPath {
    FPath::from(ntf.path().to_str().unwrap())
}

/// Testing helper function to write a `str` to a temporary file.
pub fn create_temp_file(data: &str) -> NamedTempFile {
    create_temp_file_bytes(data.as_bytes())
}

/// Testing helper function to write a `[u8]` to a temporary file.
pub fn create_temp_file_bytes(data: &[u8]) -> NamedTempFile {
    let mut ntf = match ::tempfile::Builder::new()
        // use known prefix for easier cleanup
        .prefix::<str>(&STRING_TEMPFILE_PREFIX)
        .tempfile()
    {
        Ok(val) => val,
        Err(err) => {
            panic!("NamedTempFile::new() return Err {}", err);
        }
    };
    match ntf.write_all(data) {
        Ok(_) => {}
        Err(err) => {
            panic!("NamedTempFile::write_all() return Err {}", err);
        }
    }
    defo!("created {:?} ({} bytes)", ntf.path(), data.len());

    ntf
}

/// Create a temporary directory
pub fn create_temp_dir() -> TempDir {
    defñ!();
    ::tempfile::Builder::new()
        .prefix::<str>(&STRING_TEMPFILE_PREFIX)
        .tempdir()
        .unwrap()
}

/// Path of a not-yet-existing file named `name` within `tempdir`.
pub fn fpath_in_tmpdir(
    name: &str,
    tempdir: &TempDir,
) -> FPath {
    FPath::from(tempdir.path().join(name).to_str().unwrap())
}

/// Read the entire file at `path`, panic on failure.
pub fn file_to_string(path: &FPath) -> String {
    match read_to_string(path) {
        Ok(val) => val,
        Err(err) => panic!("read_to_string({:?}) error {}", path, err),
    }
}
