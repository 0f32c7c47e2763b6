//! Integration tests over full access-log style lines.
//!
//! Exercises the stateless primitives, the stateful cutter, and the
//! label lookup against the same realistic line, including escaped
//! values and malformed escapes.

use std::borrow::Cow;

use pretty_assertions::assert_eq;

use ltsv_core::{
    cut_label, cut_raw_value, fields, raw_value_for_label, skip_n_fields, unescape,
    value_for_label, Cutter, UnescapeError,
};

/// An access-log line whose last value embeds all three escapes.
const LINE: &[u8] = b"time:2024-01-30T15:23:46.123Z\treq:GET / HTTP/1.1\tstatus:200\tua:name with escaped \\ttab, \\\\backslash, and \\nnewline";

/// The `ua` value after decoding: real tab, one backslash, real newline.
const UA_DECODED: &[u8] = b"name with escaped \ttab, \\backslash, and \nnewline";

// =============================================================================
// Stateless primitives
// =============================================================================

#[test]
fn cut_and_skip_across_a_line() {
    let (label, rest) = cut_label(LINE).expect("first label");
    assert_eq!(label, b"time");

    let (raw_value, rest) = cut_raw_value(rest);
    assert_eq!(
        unescape(raw_value).unwrap().as_ref(),
        b"2024-01-30T15:23:46.123Z"
    );

    let rest = skip_n_fields(rest, 2).expect("two more fields");
    let (label, rest) = cut_label(rest).expect("ua label");
    assert_eq!(label, b"ua");

    let (raw_value, rest) = cut_raw_value(rest);
    assert_eq!(unescape(raw_value).unwrap().as_ref(), UA_DECODED);
    assert_eq!(rest, b"");
}

#[test]
fn fields_iterator_yields_every_pair() {
    let labels: Vec<_> = fields(LINE).map(|(label, _)| label).collect();
    assert_eq!(labels, vec![&b"time"[..], &b"req"[..], &b"status"[..], &b"ua"[..]]);

    let (_, raw_ua) = fields(LINE).last().unwrap();
    assert_eq!(unescape(raw_ua).unwrap().as_ref(), UA_DECODED);
}

#[test]
fn value_containing_colons_needs_no_escaping() {
    // Only the first colon in a field delimits label from value.
    let (label, rest) = cut_label(b"time:15:23:46\tstatus:200").unwrap();
    assert_eq!(label, b"time");
    let (raw_value, _) = cut_raw_value(rest);
    assert_eq!(raw_value, b"15:23:46");
}

#[test]
fn trailing_tab_yields_empty_final_field() {
    let mut it = fields(b"a:1\tb:\t");
    assert_eq!(it.next(), Some((&b"a"[..], &b"1"[..])));
    assert_eq!(it.next(), Some((&b"b"[..], &b""[..])));
    assert_eq!(it.next(), None);
}

// =============================================================================
// Stateful cutter
// =============================================================================

#[test]
fn cutter_walks_the_whole_line() {
    let mut cutter = Cutter::new(LINE);
    let mut pairs = Vec::new();
    while let Some(label) = cutter.next_label() {
        let value = cutter.next_unescaped_value().expect("valid escapes");
        pairs.push((label.to_vec(), value.into_owned()));
    }

    assert_eq!(pairs.len(), 4);
    assert_eq!(pairs[0], (b"time".to_vec(), b"2024-01-30T15:23:46.123Z".to_vec()));
    assert_eq!(pairs[2], (b"status".to_vec(), b"200".to_vec()));
    assert_eq!(pairs[3], (b"ua".to_vec(), UA_DECODED.to_vec()));
}

#[test]
fn cutter_is_reusable_across_lines() {
    let mut cutter = Cutter::new(b"a:1\tb:2");
    assert_eq!(cutter.next_label(), Some(&b"a"[..]));
    assert_eq!(cutter.next_unescaped_value().unwrap().as_ref(), b"1");
    assert_eq!(cutter.next_label(), Some(&b"b"[..]));
    assert_eq!(cutter.next_unescaped_value().unwrap().as_ref(), b"2");
    assert_eq!(cutter.next_label(), None);

    // Pointing at a fresh line fully resets the position.
    cutter.set_line(b"time:12:34");
    cutter.set_line(b"x:y");
    assert_eq!(cutter.next_label(), Some(&b"x"[..]));
    assert_eq!(cutter.next_raw_value(), b"y");
}

// =============================================================================
// Label lookup
// =============================================================================

#[test]
fn lookup_finds_values_anywhere_in_the_line() {
    let value = value_for_label(LINE, b"ua").unwrap().expect("ua present");
    assert_eq!(value.as_ref(), UA_DECODED);

    let raw = raw_value_for_label(LINE, b"ua").expect("ua present");
    assert_eq!(raw, &b"name with escaped \\ttab, \\\\backslash, and \\nnewline"[..]);

    let value = value_for_label(LINE, b"status").unwrap().expect("status present");
    assert_eq!(value.as_ref(), b"200");
}

#[test]
fn lookup_misses_return_none() {
    assert_eq!(value_for_label(LINE, b"no_such_label").unwrap(), None);
    assert_eq!(raw_value_for_label(LINE, b"no_such_label"), None);
}

#[test]
fn lookup_without_escapes_borrows_from_the_line() {
    match value_for_label(LINE, b"status") {
        Ok(Some(Cow::Borrowed(value))) => assert_eq!(value, b"200"),
        other => panic!("expected borrowed value, got {other:?}"),
    }
}

// =============================================================================
// Malformed escapes are recoverable
// =============================================================================

#[test]
fn unsupported_escape_is_an_error() {
    assert_eq!(
        unescape(b"bad\\q"),
        Err(UnescapeError::UnsupportedEscape { found: b'q', at: 3 })
    );
    assert!(value_for_label(b"k:bad\\q", b"k").is_err());
}

#[test]
fn dangling_escape_is_an_error() {
    assert_eq!(
        unescape(b"trailing\\"),
        Err(UnescapeError::DanglingEscape { at: 8 })
    );
    assert!(value_for_label(b"k:trailing\\", b"k").is_err());
}

#[test]
fn one_bad_field_does_not_poison_the_rest() {
    // A consumer can skip the malformed field and keep cutting.
    let mut cutter = Cutter::new(b"bad:oops\\q\tgood:fine");

    assert_eq!(cutter.next_label(), Some(&b"bad"[..]));
    assert!(cutter.next_unescaped_value().is_err());

    assert_eq!(cutter.next_label(), Some(&b"good"[..]));
    assert_eq!(cutter.next_unescaped_value().unwrap().as_ref(), b"fine");
}
