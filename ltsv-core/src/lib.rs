//! LTSV Core Cutter
//!
//! Zero-copy extraction of labeled values from LTSV (Labeled Tab
//! Separated Values) lines. Operates on one line at a time: the
//! caller owns the line buffer, and everything returned borrows from
//! it unless an escape sequence forces a decoded copy.
//!
//! # Architecture
//!
//! - **cut.rs** - Stateless cut/skip primitives over a byte slice
//! - **cutter.rs** - Stateful cursor over a single line
//! - **lookup.rs** - Direct label -> value lookup
//! - **unescape.rs** - Escape decoding, shared by all access paths
//!
//! # Example
//!
//! ```
//! use ltsv_core::{fields, unescape};
//!
//! let line = b"time:2024-01-30T15:23:46.123Z\tstatus:200";
//! for (label, raw_value) in fields(line) {
//!     let value = unescape(raw_value).unwrap();
//!     println!("{}={}",
//!         String::from_utf8_lossy(label),
//!         String::from_utf8_lossy(&value));
//! }
//! ```

pub mod cut;
pub mod cutter;
pub mod lookup;
pub mod unescape;

pub use cut::{cut_label, cut_raw_value, fields, skip_n_fields, Fields};
pub use cutter::Cutter;
pub use lookup::{raw_value_for_label, value_for_label};
pub use unescape::{unescape, UnescapeError};
