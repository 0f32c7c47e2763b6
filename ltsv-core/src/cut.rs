//! Stateless cut primitives over a single LTSV line.
//!
//! Each function takes the unconsumed tail of a line and returns the
//! next lexical unit together with the remaining tail; the caller
//! threads the remainder through successive calls. Nothing here
//! allocates or copies - every returned slice borrows from the input.

use memchr::memchr;

/// Field separator between `label:value` pairs.
pub const FIELD_SEPARATOR: u8 = b'\t';

/// Separator between a label and its value within a field.
pub const LABEL_SEPARATOR: u8 = b':';

/// Cut the next label off the front of `input`.
///
/// Returns the label and the tail after the `:`, or `None` when no
/// separator remains. An empty label (`:value`) is still `Some`;
/// `None` means the line has no further fields.
#[inline]
pub fn cut_label(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = memchr(LABEL_SEPARATOR, input)?;
    Some((&input[..i], &input[i + 1..]))
}

/// Cut the next raw value off the front of `input`.
///
/// The value runs to the next tab or to the end of the line, escape
/// sequences included. Never fails: end of line terminates the last
/// value, and a trailing tab yields an empty final value.
#[inline]
pub fn cut_raw_value(input: &[u8]) -> (&[u8], &[u8]) {
    match memchr(FIELD_SEPARATOR, input) {
        Some(i) => (&input[..i], &input[i + 1..]),
        None => (input, &[]),
    }
}

/// Skip past `n` field separators.
///
/// Returns the tail after the `n`th tab, or `None` when fewer than
/// `n` separators remain. `n = 0` returns `input` unchanged.
pub fn skip_n_fields(mut input: &[u8], n: usize) -> Option<&[u8]> {
    for _ in 0..n {
        let i = memchr(FIELD_SEPARATOR, input)?;
        input = &input[i + 1..];
    }
    Some(input)
}

/// Iterate over the `(label, raw_value)` pairs of a line.
///
/// Values are raw: escape sequences are not decoded. Iteration stops
/// at the first position with no label separator left, so trailing
/// bytes without a `:` are not yielded.
#[inline]
pub fn fields(line: &[u8]) -> Fields<'_> {
    Fields { rest: line }
}

/// Iterator over the raw fields of a line, created by [`fields`].
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Fields<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let (label, rest) = cut_label(self.rest)?;
        let (raw_value, rest) = cut_raw_value(rest);
        self.rest = rest;
        Some((label, raw_value))
    }
}
