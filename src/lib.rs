// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `charconv-utils`
//!
//! A `no_std`, allocation-free layer of `from_chars` / `to_chars` style
//! number conversions over character containers, **with no `unsafe`**.
//!
//! Every conversion works on a caller-supplied byte buffer and reports a
//! [`Conversion`]: how far into the buffer it got (`pos`) and whether it
//! failed (`error`). There is no locale, no allocation and no leading
//! whitespace handling.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You parse numbers out of larger byte streams and need to know where the
//!   numeral ended.
//! - You format into fixed, preallocated storage and need a precise
//!   "does not fit" signal instead of truncation.
//! - You need `printf`-compatible float text (`%f`, `%e`, `%a`, `%g`) or
//!   integers in any radix `2..=36`.
//!
//! ## Buffers
//!
//! The functions at the crate root (from [`container`]) accept any
//! contiguous byte container: `[u8]`, `str`, `Vec<u8>`, `String`,
//! `Box<[u8]>`, or a user type implementing `AsRef<[u8]>` / `AsMut<[u8]>`
//! (see [`CharSource`] / [`CharSink`]). The [`array`] module offers the same
//! operations for `[u8; N]`.
//!
//! In both cases the buffer is exactly the container's current contents;
//! nothing before or after it is ever read or written.
//!
//! ## Values
//!
//! | Value type              | Extra parameter      | Default              |
//! |-------------------------|----------------------|----------------------|
//! | all primitive integers  | radix (`u32`)        | `10`                 |
//! | `f32`, `f64`            | [`Notation`]         | [`Notation::General`]|
//! | `f32`, `f64`            | notation + precision | (none)               |
//!
//! Other types, and precision on integers, are compile errors.
//!
//! ## High-level semantics
//!
//! - **Parse** consumes the longest valid prefix. On success `out` is
//!   assigned and `pos` is one past the last consumed byte. An unrecognized
//!   prefix (including an empty buffer) reports [`Error::InvalidFormat`] at
//!   `pos == 0`; a well-formed but unrepresentable value reports
//!   [`Error::OutOfRange`] with `pos` past the numeral. `out` is left
//!   unchanged on any failure.
//! - **Format** writes to the front of the buffer. On success `pos` is the
//!   text length. If the text does not fit, [`Error::OutOfRange`] is reported
//!   with `pos == len` and the buffer is left untouched.
//! - Without a precision, floats are formatted with the shortest digits that
//!   parse back to the same value.
//! - A radix outside `2..=36` is a caller bug and panics.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for [`Notation`] and [`Error`] as
//!     lowercase names.
//!
//! - `tracing`
//!   - Emits a `trace`-level event for every failed conversion with the
//!     operation, buffer length, position and error name.
//!
//! ## Example
//!
//! ```rust
//! use charconv_utils::{format_to_text_precision, parse_from_text, Error, Notation};
//!
//! let mut x = 0.0f64;
//! let res = parse_from_text("3.14xyz", &mut x);
//! assert_eq!((x, res.pos, res.error), (3.14, 4, None));
//!
//! let mut buf = [0u8; 8];
//! let n = format_to_text_precision(&mut buf[..], x, Notation::Scientific, 2).pos;
//! assert_eq!(&buf[..n], b"3.14e+00");
//!
//! let mut tiny = [0u8; 3];
//! let res = format_to_text_precision(&mut tiny[..], x, Notation::Scientific, 2);
//! assert_eq!(res.error, Some(Error::OutOfRange));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
pub mod array;
mod buffer;
pub mod container;
mod error;
mod notation;
mod primitive;
mod result;
#[cfg(feature = "serde")]
mod serde;
mod trace;
mod value;

// Public exports (crate API surface)
pub use buffer::{CharSink, CharSource};
pub use container::{
    format_to_text, format_to_text_precision, format_to_text_with, parse_from_text,
    parse_from_text_with,
};
pub use error::Error;
pub use notation::Notation;
pub use result::Conversion;
pub use value::{FromText, Integer, ToText, ToTextPrecision};
