//! Stateful cursor over a single LTSV line.
//!
//! Same grammar as the stateless primitives in [`cut`](crate::cut),
//! with the read position threaded internally so a caller alternating
//! label and value extraction does no slice bookkeeping.

use std::borrow::Cow;

use crate::cut::{cut_label, cut_raw_value};
use crate::unescape::{unescape, UnescapeError};

/// Cursor over one LTSV line.
///
/// Holds the line and the current read offset. A cutter is intended
/// to live outside a per-line loop and be pointed at each new line
/// with [`set_line`](Cutter::set_line). One instance per processing
/// path: the position mutates in place, so concurrent callers each
/// own their own cutter.
///
/// # Example
///
/// ```
/// use ltsv_core::Cutter;
///
/// let mut cutter = Cutter::new(b"a:1\tb:2");
/// while let Some(label) = cutter.next_label() {
///     let value = cutter.next_unescaped_value().unwrap();
///     println!("{}={}",
///         String::from_utf8_lossy(label),
///         String::from_utf8_lossy(&value));
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Cutter<'a> {
    line: &'a [u8],
    pos: usize,
}

impl<'a> Cutter<'a> {
    /// Create a cutter positioned at the start of `line`.
    pub fn new(line: &'a [u8]) -> Self {
        Self { line, pos: 0 }
    }

    /// Replace the held line and reset the position to 0.
    #[inline]
    pub fn set_line(&mut self, line: &'a [u8]) {
        self.line = line;
        self.pos = 0;
    }

    /// Next label, or `None` when no label separator remains.
    ///
    /// The position does not advance on `None`, so repeated calls at
    /// end of record keep returning `None`.
    pub fn next_label(&mut self) -> Option<&'a [u8]> {
        let (label, rest) = cut_label(&self.line[self.pos..])?;
        self.pos = self.line.len() - rest.len();
        Some(label)
    }

    /// Next raw value, escape sequences included.
    ///
    /// Runs to the next tab or to end of line; the position advances
    /// past the consumed separator.
    pub fn next_raw_value(&mut self) -> &'a [u8] {
        let (raw_value, rest) = cut_raw_value(&self.line[self.pos..]);
        self.pos = self.line.len() - rest.len();
        raw_value
    }

    /// Next value with escape sequences decoded.
    pub fn next_unescaped_value(&mut self) -> Result<Cow<'a, [u8]>, UnescapeError> {
        unescape(self.next_raw_value())
    }
}
