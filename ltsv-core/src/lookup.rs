//! Direct label lookup over a full line.
//!
//! A linear left-to-right scan that never materializes the field
//! list: each non-matching field costs one label scan and one
//! separator scan, so the whole lookup is a single forward pass over
//! the line no matter which field matches.

use std::borrow::Cow;

use crate::cut::{cut_label, cut_raw_value};
use crate::unescape::{unescape, UnescapeError};

/// Look up the decoded value for `label`.
///
/// Labels are compared raw: exact bytes, case-sensitive, no
/// trimming. First match wins when a label repeats. Returns
/// `Ok(None)` when the label does not occur in `input`; `Err` only
/// when the matched value holds a malformed escape.
pub fn value_for_label<'a>(
    input: &'a [u8],
    label: &[u8],
) -> Result<Option<Cow<'a, [u8]>>, UnescapeError> {
    match raw_value_for_label(input, label) {
        Some(raw_value) => unescape(raw_value).map(Some),
        None => Ok(None),
    }
}

/// Look up the raw (possibly escaped) value for `label`.
///
/// Same scan as [`value_for_label`] without the decode step.
pub fn raw_value_for_label<'a>(input: &'a [u8], label: &[u8]) -> Option<&'a [u8]> {
    let mut rest = input;
    loop {
        let (candidate, tail) = cut_label(rest)?;
        let (raw_value, tail) = cut_raw_value(tail);
        if candidate == label {
            return Some(raw_value);
        }
        rest = tail;
    }
}
