// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters for fixed-length character arrays.
//!
//! The buffer is exactly `[0, N)`: conversions never read or write past the
//! array, even when it is a view into a larger allocation. The behavior is
//! the same as the [`container`](crate::container) adapters; these exist so
//! a `&[u8; N]` can be passed without naming a slice.

// Crate imports
use crate::{
    notation::Notation,
    result::Conversion,
    trace::{Op, observe},
    value::{FromText, Integer, ToText, ToTextPrecision},
};

/// Parses the front of `buffer` with the default parameter.
///
/// # Examples
///
/// ```rust
/// use charconv_utils::array;
///
/// let mut v = 0u8;
/// let res = array::parse_from_text(b"255", &mut v);
/// assert_eq!((v, res.pos), (255, 3));
/// ```
#[inline]
pub fn parse_from_text<T: FromText, const N: usize>(buffer: &[u8; N], out: &mut T) -> Conversion {
    parse_from_text_with(buffer, out, T::DEFAULT_PARAM)
}

/// Parses the front of `buffer` with an explicit radix or notation.
///
/// # Panics
///
/// Panics if an integer radix is not in `2..=36`.
#[inline]
#[track_caller]
pub fn parse_from_text_with<T: FromText, const N: usize>(
    buffer: &[u8; N],
    out: &mut T,
    param: T::Param,
) -> Conversion {
    observe(Op::Parse, N, T::from_text(&buffer[..], out, param))
}

/// Formats an integer in radix 10 into the front of `buffer`.
///
/// # Examples
///
/// ```rust
/// use charconv_utils::{array, Error};
///
/// let mut buf = [0u8; 3];
/// assert_eq!(array::format_to_text(&mut buf, 1000i32).error, Some(Error::OutOfRange));
/// assert_eq!(array::format_to_text(&mut buf, 999i32).pos, 3);
/// assert_eq!(&buf, b"999");
/// ```
#[inline]
pub fn format_to_text<T: Integer, const N: usize>(buffer: &mut [u8; N], value: T) -> Conversion {
    format_to_text_with(buffer, value, 10)
}

/// Formats a value into the front of `buffer` with an explicit radix or
/// notation.
///
/// # Panics
///
/// Panics if an integer radix is not in `2..=36`.
#[inline]
#[track_caller]
pub fn format_to_text_with<T: ToText, const N: usize>(
    buffer: &mut [u8; N],
    value: T,
    param: T::Param,
) -> Conversion {
    observe(Op::Format, N, T::to_text(&mut buffer[..], value, param))
}

/// Formats a float into the front of `buffer` with an explicit precision.
///
/// # Examples
///
/// ```rust
/// use charconv_utils::{array, Notation};
///
/// let mut buf = [0u8; 12];
/// let n = array::format_to_text_precision(&mut buf, 0.000123f64, Notation::General, 2).pos;
/// assert_eq!(&buf[..n], b"0.00012");
/// ```
#[inline]
pub fn format_to_text_precision<T: ToTextPrecision, const N: usize>(
    buffer: &mut [u8; N],
    value: T,
    notation: Notation,
    precision: usize,
) -> Conversion {
    observe(
        Op::Format,
        N,
        T::to_text_precision(&mut buffer[..], value, notation, precision),
    )
}
