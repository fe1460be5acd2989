// src/data/bytecount.rs

//! Format a [`ByteCount`] for display, with thousands grouping.
//!
//! Grouping is always by three digits with a `,`, regardless of host locale.
//!
//! [`ByteCount`]: crate::common::ByteCount

use crate::common::ByteCount;

use ::numtoa::NumToA; // adds `numtoa` method to numbers

/// size of the `[u8]` buffer used for `numtoa` conversions
/// good up to `i64::MAX` or `i64::MIN` plus a little "just in case" head room
pub const NUMTOA_BUF_SZ: usize = 22;

/// Digits per group in [`format_bytes`].
const GROUP_DIGITS: usize = 3;
/// Separator between digit groups in [`format_bytes`].
const GROUP_SEPARATOR: char = ',';

/// Format `value` with thousands grouping, e.g. `1234567` is `"1,234,567"`.
///
/// A negative `value` keeps its leading `-`, e.g. `-1500` is `"-1,500"`.
pub fn format_bytes(value: ByteCount) -> String {
    let mut buffer_num = [0u8; NUMTOA_BUF_SZ];
    // `unsigned_abs` so `ByteCount::MIN` does not overflow
    let digits: &[u8] = value.unsigned_abs().numtoa(10, &mut buffer_num);
    let mut s: String = String::with_capacity(digits.len() + digits.len() / GROUP_DIGITS + 1);
    if value < 0 {
        s.push('-');
    }
    for (at, digit) in digits.iter().enumerate() {
        if at != 0 && (digits.len() - at) % GROUP_DIGITS == 0 {
            s.push(GROUP_SEPARATOR);
        }
        s.push(*digit as char);
    }

    s
}
