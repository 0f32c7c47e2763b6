//! Escape decoding for LTSV values.
//!
//! Raw values may embed `\t`, `\n`, and `\\` for tab, newline, and
//! backslash. Decoding runs in two memchr-driven passes: the first
//! validates and counts the escape pairs, the second copies verbatim
//! runs in bulk into a buffer sized exactly at
//! `input length - escape count`. A value with no escapes is returned
//! borrowed, untouched.

use std::borrow::Cow;
use std::fmt;

use memchr::memchr;

/// Escape introducer inside raw values.
pub const ESCAPE: u8 = b'\\';

/// A malformed escape sequence in a raw value.
///
/// Recoverable: the caller can drop the field or the whole record and
/// keep consuming the stream. `at` is the byte offset of the escape
/// introducer within the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnescapeError {
    /// `\` as the last byte of the value, with nothing to interpret.
    DanglingEscape { at: usize },
    /// `\` followed by a byte other than `t`, `n`, or `\`.
    UnsupportedEscape { found: u8, at: usize },
}

impl fmt::Display for UnescapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingEscape { at } => {
                write!(f, "no character after escape at byte {at}")
            }
            Self::UnsupportedEscape { found, at } => write!(
                f,
                "unsupported escape character {:?} at byte {at}",
                char::from(*found)
            ),
        }
    }
}

impl std::error::Error for UnescapeError {}

/// Decode the escape sequences in a raw value.
///
/// Returns the input slice unchanged (no allocation) when it contains
/// no `\`. Labels never go through here - they are compared raw.
pub fn unescape(raw_value: &[u8]) -> Result<Cow<'_, [u8]>, UnescapeError> {
    let escapes = count_escapes(raw_value)?;
    if escapes == 0 {
        return Ok(Cow::Borrowed(raw_value));
    }

    let mut value = Vec::with_capacity(raw_value.len() - escapes);
    let mut offset = 0;
    while let Some(i) = memchr(ESCAPE, &raw_value[offset..]) {
        let at = offset + i;
        value.extend_from_slice(&raw_value[offset..at]);
        // count_escapes validated every pair, so the next byte exists
        value.push(translate(raw_value[at + 1]));
        offset = at + 2;
    }
    value.extend_from_slice(&raw_value[offset..]);
    Ok(Cow::Owned(value))
}

/// Count the two-byte escape sequences in `raw_value`, validating
/// each pair.
fn count_escapes(raw_value: &[u8]) -> Result<usize, UnescapeError> {
    let mut escapes = 0;
    let mut offset = 0;
    while let Some(i) = memchr(ESCAPE, &raw_value[offset..]) {
        let at = offset + i;
        match raw_value.get(at + 1) {
            Some(&b't') | Some(&b'n') | Some(&ESCAPE) => escapes += 1,
            Some(&found) => return Err(UnescapeError::UnsupportedEscape { found, at }),
            None => return Err(UnescapeError::DanglingEscape { at }),
        }
        offset = at + 2;
    }
    Ok(escapes)
}

#[inline]
fn translate(escaped: u8) -> u8 {
    match escaped {
        b't' => b'\t',
        b'n' => b'\n',
        _ => ESCAPE,
    }
}
