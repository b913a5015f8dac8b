// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters for random-access character containers.
//!
//! Each function takes the container's whole contents, `[0, len)` at call
//! time, as the buffer and forwards everything else to the conversion
//! primitive. The returned [`Conversion`] is the primitive's, unchanged.
//!
//! These are re-exported at the crate root.

// Crate imports
use crate::{
    buffer::{CharSink, CharSource},
    notation::Notation,
    result::Conversion,
    trace::{Op, observe},
    value::{FromText, Integer, ToText, ToTextPrecision},
};

/// Parses the front of `buffer` with the default parameter (radix 10 for
/// integers, [`Notation::General`] for floats).
///
/// `out` is written only on success.
///
/// # Examples
///
/// ```rust
/// use charconv_utils::parse_from_text;
///
/// let mut n = 0i32;
/// let res = parse_from_text("-42 apples", &mut n);
/// assert_eq!((n, res.pos), (-42, 3));
///
/// let mut x = 0f64;
/// let mut text = b"3.14xyz".to_vec();
/// text.push(0);
/// let res = parse_from_text(&text, &mut x);
/// assert_eq!((x, res.pos), (3.14, 4));
/// ```
#[inline]
pub fn parse_from_text<C, T>(buffer: &C, out: &mut T) -> Conversion
where
    C: ?Sized + CharSource,
    T: FromText,
{
    parse_from_text_with(buffer, out, T::DEFAULT_PARAM)
}

/// Parses the front of `buffer` with an explicit radix (integers) or
/// notation (floats).
///
/// `out` is written only on success.
///
/// # Panics
///
/// Panics if an integer radix is not in `2..=36`.
///
/// # Examples
///
/// ```rust
/// use charconv_utils::{parse_from_text_with, Notation};
///
/// let mut n = 0u16;
/// let res = parse_from_text_with(&b"ff"[..], &mut n, 16);
/// assert_eq!((n, res.pos), (255, 2));
///
/// let mut x = 0f32;
/// let res = parse_from_text_with("1.8p+1", &mut x, Notation::Hex);
/// assert_eq!((x, res.pos), (3.0, 6));
/// ```
#[inline]
#[track_caller]
pub fn parse_from_text_with<C, T>(buffer: &C, out: &mut T, param: T::Param) -> Conversion
where
    C: ?Sized + CharSource,
    T: FromText,
{
    let bytes = buffer.char_slice();
    observe(Op::Parse, bytes.len(), T::from_text(bytes, out, param))
}

/// Formats an integer in radix 10 into the front of `buffer`.
///
/// Fails with [`Error::OutOfRange`](crate::Error::OutOfRange) and
/// `pos == buffer.len()` when the text does not fit; the buffer is then left
/// untouched.
///
/// # Examples
///
/// ```rust
/// use charconv_utils::{format_to_text, Error};
///
/// let mut buf = vec![b' '; 4];
/// let res = format_to_text(&mut buf, 1000u32);
/// assert_eq!(res.into_result(), Ok(4));
/// assert_eq!(buf, b"1000");
///
/// let mut small = vec![b' '; 3];
/// assert_eq!(format_to_text(&mut small, 1000u32).error, Some(Error::OutOfRange));
/// ```
#[inline]
pub fn format_to_text<C, T>(buffer: &mut C, value: T) -> Conversion
where
    C: ?Sized + CharSink,
    T: Integer,
{
    format_to_text_with(buffer, value, 10)
}

/// Formats a value into the front of `buffer` with an explicit radix
/// (integers) or notation (floats, shortest round-trip digits).
///
/// # Panics
///
/// Panics if an integer radix is not in `2..=36`.
///
/// # Examples
///
/// ```rust
/// use charconv_utils::{format_to_text_with, Notation};
///
/// let mut buf = [0u8; 16];
/// let n = format_to_text_with(&mut buf[..], -255i32, 16).pos;
/// assert_eq!(&buf[..n], b"-ff");
///
/// let n = format_to_text_with(&mut buf[..], 1234.5f64, Notation::Scientific).pos;
/// assert_eq!(&buf[..n], b"1.2345e+03");
/// ```
#[inline]
#[track_caller]
pub fn format_to_text_with<C, T>(buffer: &mut C, value: T, param: T::Param) -> Conversion
where
    C: ?Sized + CharSink,
    T: ToText,
{
    let bytes = buffer.char_slice_mut();
    let len = bytes.len();
    observe(Op::Format, len, T::to_text(bytes, value, param))
}

/// Formats a float into the front of `buffer` with `precision` digits after
/// the point (`Fixed`, `Scientific`, `Hex`) or significant digits (`General`).
///
/// # Examples
///
/// ```rust
/// use charconv_utils::{format_to_text_precision, Notation};
///
/// let mut buf = [0u8; 16];
/// let n = format_to_text_precision(&mut buf[..], 3.14159f64, Notation::Fixed, 2).pos;
/// assert_eq!(&buf[..n], b"3.14");
/// ```
#[inline]
pub fn format_to_text_precision<C, T>(
    buffer: &mut C,
    value: T,
    notation: Notation,
    precision: usize,
) -> Conversion
where
    C: ?Sized + CharSink,
    T: ToTextPrecision,
{
    let bytes = buffer.char_slice_mut();
    let len = bytes.len();
    observe(
        Op::Format,
        len,
        T::to_text_precision(bytes, value, notation, precision),
    )
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{
        format_to_text, format_to_text_precision, format_to_text_with, parse_from_text,
        parse_from_text_with,
    };
    use crate::{Error, Notation};
    use alloc::{boxed::Box, string::String, vec, vec::Vec};
    use proptest::prelude::*;

    /// A user container exposing only part of its storage.
    struct Field {
        storage: [u8; 16],
        len: usize,
    }

    impl AsRef<[u8]> for Field {
        fn as_ref(&self) -> &[u8] {
            &self.storage[..self.len]
        }
    }

    impl AsMut<[u8]> for Field {
        fn as_mut(&mut self) -> &mut [u8] {
            &mut self.storage[..self.len]
        }
    }

    #[test]
    fn test_parse_int_prefix_from_vec() {
        let text: Vec<u8> = b"123abc".to_vec();
        let mut v = 0i64;
        let res = parse_from_text(&text, &mut v);
        assert!(res.is_ok());
        assert_eq!(v, 123);
        assert_eq!(res.pos, 3);
        assert_eq!(text[res.pos], b'a');
    }

    #[test]
    fn test_parse_float_from_padded_container() {
        let mut text = vec![0u8; 8];
        text[..7].copy_from_slice(b"3.14xyz");
        let mut x = 0.0f64;
        let res = parse_from_text_with(&text, &mut x, Notation::General);
        assert_eq!(res.into_result(), Ok(4));
        assert_eq!(x, 3.14);
        assert_eq!(text[res.pos], b'x');
    }

    #[test]
    fn test_parse_empty_containers() {
        let empty = String::new();
        let mut i = 5u32;
        let res = parse_from_text(&empty, &mut i);
        assert_eq!((res.pos, res.error, i), (0, Some(Error::InvalidFormat), 5));

        let mut f = 5.0f32;
        let res = parse_from_text(&Vec::<u8>::new(), &mut f);
        assert_eq!((res.pos, res.error, f), (0, Some(Error::InvalidFormat), 5.0));
    }

    #[test]
    fn test_parse_str_and_boxed_slice() {
        let mut v = 0u8;
        assert_eq!(parse_from_text_with("z", &mut v, 36).into_result(), Ok(1));
        assert_eq!(v, 35);

        let boxed: Box<[u8]> = Box::from(&b"0777"[..]);
        let mut o = 0u16;
        assert_eq!(parse_from_text_with(&boxed, &mut o, 8).into_result(), Ok(4));
        assert_eq!(o, 0o777);
    }

    #[test]
    fn test_bounds_follow_container_len() {
        // The storage past `len` holds more digits that must not be read.
        let mut field = Field {
            storage: *b"12345678\0\0\0\0\0\0\0\0",
            len: 4,
        };
        let mut v = 0u32;
        assert_eq!(parse_from_text(&field, &mut v).into_result(), Ok(4));
        assert_eq!(v, 1234);

        let res = format_to_text(&mut field, 99_999u32);
        assert_eq!((res.pos, res.error), (4, Some(Error::OutOfRange)));
        assert_eq!(&field.storage[..8], b"12345678");

        assert_eq!(format_to_text(&mut field, 9_999u32).into_result(), Ok(4));
        assert_eq!(&field.storage[..8], b"99995678");
    }

    #[test]
    fn test_format_exact_fit_and_one_short() {
        let mut exact = vec![0u8; 4];
        assert_eq!(format_to_text(&mut exact, -123i16).into_result(), Ok(4));
        assert_eq!(exact, b"-123");

        let mut short = vec![b'?'; 3];
        let res = format_to_text(&mut short, -123i16);
        assert_eq!((res.pos, res.error), (3, Some(Error::OutOfRange)));
        assert_eq!(short, b"???");

        let mut exact = vec![0u8; 9];
        let res = format_to_text_with(&mut exact, 1.0e-7f64, Notation::Fixed);
        assert_eq!(res.into_result(), Ok(9));
        assert_eq!(exact, b"0.0000001");
        let mut short = vec![0u8; 8];
        let res = format_to_text_with(&mut short, 1.0e-7f64, Notation::Fixed);
        assert_eq!(res.error, Some(Error::OutOfRange));
    }

    #[test]
    fn test_format_precision_into_vec() {
        let mut buf = vec![0u8; 32];
        let n = format_to_text_precision(&mut buf, 2.0f32 / 3.0, Notation::Scientific, 4).pos;
        assert_eq!(&buf[..n], b"6.6667e-01");

        let n = format_to_text_precision(&mut buf, 255.5f64, Notation::Hex, 2).pos;
        assert_eq!(&buf[..n], b"1.ffp+7");
    }

    #[test]
    fn test_precision_beyond_buffer_never_panics() {
        for p in [70_000, usize::MAX] {
            for notation in [Notation::Fixed, Notation::Scientific, Notation::Hex] {
                let mut buf = vec![b'#'; 16];
                let res = format_to_text_precision(&mut buf, 1.0f64, notation, p);
                assert_eq!((res.pos, res.error), (16, Some(Error::OutOfRange)));
                assert_eq!(buf, [b'#'; 16]);
            }
            let mut buf = vec![0u8; 16];
            let res = format_to_text_precision(&mut buf, 1.0f64, Notation::General, p);
            assert_eq!(res.into_result(), Ok(1));
            assert_eq!(buf[0], b'1');
        }
    }

    #[test]
    #[should_panic(expected = "radix must be in 2..=36")]
    fn test_bad_radix_panics() {
        let mut v = 0u8;
        let _ = parse_from_text_with("1", &mut v, 0);
    }

    proptest! {
        #[test]
        fn prop_int_roundtrip(
            v in any::<i64>(),
            radix in prop::sample::select(vec![2u32, 8, 10, 16]),
        ) {
            let mut buf = vec![0u8; 70];
            let written = format_to_text_with(&mut buf, v, radix).into_result().unwrap();
            let mut back = 0i64;
            let res = parse_from_text_with(&buf[..written], &mut back, radix);
            prop_assert_eq!(res.into_result(), Ok(written));
            prop_assert_eq!(back, v);
        }

        #[test]
        fn prop_uint_roundtrip_any_radix(v in any::<u128>(), radix in 2u32..=36) {
            let mut buf = vec![0u8; 130];
            let written = format_to_text_with(&mut buf, v, radix).into_result().unwrap();
            let mut back = 0u128;
            let res = parse_from_text_with(&buf[..written], &mut back, radix);
            prop_assert_eq!(res.into_result(), Ok(written));
            prop_assert_eq!(back, v);
        }

        #[test]
        fn prop_fixed_precision_roundtrip(v in -1.0e9f64..1.0e9, p in 0usize..12) {
            let mut buf = vec![0u8; 64];
            let written = format_to_text_precision(&mut buf, v, Notation::Fixed, p)
                .into_result()
                .unwrap();
            let mut back = f64::NAN;
            let res = parse_from_text_with(&buf[..written], &mut back, Notation::Fixed);
            prop_assert_eq!(res.into_result(), Ok(written));
            let tolerance = 0.5 * 10f64.powi(-(p as i32)) + v.abs() * 4.0 * f64::EPSILON;
            prop_assert!((back - v).abs() <= tolerance, "{} -> {}", v, back);
        }

        #[test]
        fn prop_shortest_roundtrip_every_notation(
            v in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO,
            notation in prop::sample::select(Notation::ALL.to_vec()),
        ) {
            let mut buf = vec![0u8; 400];
            let written = format_to_text_with(&mut buf, v, notation).into_result().unwrap();
            let mut back = f64::NAN;
            let res = parse_from_text_with(&buf[..written], &mut back, notation);
            prop_assert_eq!(res.into_result(), Ok(written));
            prop_assert_eq!(back.to_bits(), v.to_bits());
        }

        #[test]
        fn prop_exact_fit_boundary(v in any::<u64>()) {
            let mut scratch = vec![0u8; 20];
            let need = format_to_text(&mut scratch, v).into_result().unwrap();

            let mut exact = vec![0u8; need];
            prop_assert_eq!(format_to_text(&mut exact, v).into_result(), Ok(need));

            let mut short = vec![0u8; need - 1];
            prop_assert_eq!(format_to_text(&mut short, v).into_result(), Err(Error::OutOfRange));
        }
    }
}
