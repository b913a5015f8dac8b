// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversion primitive.
//!
//! Locale-independent `from_chars` / `to_chars` over explicit byte slices:
//!
//! - parsing consumes the longest prefix matching the requested grammar and
//!   reports where it stopped;
//! - formatting writes into the front of the slice and reports where the text
//!   ends, or fails with [`Error::OutOfRange`](crate::Error::OutOfRange) when
//!   the text does not fit.
//!
//! Failure never writes the destination value, and a failed format never
//! touches the destination buffer.
//!
//! Everything above this module only computes slice bounds and forwards.

mod float;
mod int;
mod writer;

pub(crate) use float::{from_chars_float, to_chars_float};
pub(crate) use int::{from_chars_int, to_chars_int};

// Crate imports
use crate::{error::Error, result::Conversion};

/// Reports a radix outside `2..=36`, a caller bug.
#[cold]
#[track_caller]
pub(crate) fn radix_out_of_range(radix: u32) -> ! {
    panic!("radix must be in 2..=36, got {radix}")
}

/// Number of leading bytes of `s` satisfying `pred`.
#[inline]
pub(crate) fn count_while(s: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    s.iter().take_while(|&&b| pred(b)).count()
}

/// Copies `text` to the front of `dst`, or reports that it does not fit.
#[inline]
pub(crate) fn copy_out(dst: &mut [u8], text: &[u8]) -> Conversion {
    match dst.get_mut(..text.len()) {
        Some(head) => {
            head.copy_from_slice(text);
            Conversion::ok(text.len())
        }
        None => Conversion::fail(dst.len(), Error::OutOfRange),
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{copy_out, count_while, radix_out_of_range};
    use crate::Error;

    #[test]
    fn test_copy_out_fits_exactly() {
        let mut buf = [b'#'; 3];
        let res = copy_out(&mut buf, b"abc");
        assert_eq!(res.into_result(), Ok(3));
        assert_eq!(&buf, b"abc");
    }

    #[test]
    fn test_copy_out_too_long_leaves_buffer() {
        let mut buf = [b'#'; 3];
        let res = copy_out(&mut buf, b"abcd");
        assert_eq!(res.error, Some(Error::OutOfRange));
        assert_eq!(res.pos, 3);
        assert_eq!(&buf, b"###");
    }

    #[test]
    fn test_count_while() {
        assert_eq!(count_while(b"123x4", |b| b.is_ascii_digit()), 3);
        assert_eq!(count_while(b"", |b| b.is_ascii_digit()), 0);
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn test_radix_one_panics() {
        radix_out_of_range(1);
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn test_radix_zero_parse_panics() {
        let mut v = 0u8;
        let _ = super::from_chars_int(b"1", &mut v, 0);
    }
}
