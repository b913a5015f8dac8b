// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Floating-point parsing and formatting.
//!
//! Accepted text, for every notation: an optional `-`, then either a special
//! value (`inf`, `infinity`, `nan`, `nan(chars)`, any case) or a numeral:
//!
//! - `Fixed`: `digits[.digits]`, no exponent is consumed;
//! - `Scientific`: the same mantissa followed by a mandatory `e[+-]digits`;
//! - `General`: the exponent is optional;
//! - `Hex`: hex digits with an optional `.`, then an optional `p[+-]digits`.
//!
//! The numeral is matched here; `lexical-core` converts it, with a power of
//! two exponent base for `Hex`. A result that rounds to infinity, or a
//! nonzero numeral that rounds to zero, is out of range.

mod format;
mod hex;

// Crate imports
use super::{count_while, writer::{Counter, SliceWriter}};
use crate::{error::Error, notation::Notation, result::Conversion};

// Core imports
use core::{fmt, num::NonZeroU8};

// External imports - lexical
use lexical_core::{
    FromLexicalWithOptions, NumberFormatBuilder, ParseFloatOptions, parse_float_options,
};

/// `%a` mantissa digits with a decimal power-of-two exponent.
const HEX_FORMAT: u128 = NumberFormatBuilder::new()
    .mantissa_radix(16)
    .exponent_base(NonZeroU8::new(2))
    .exponent_radix(NonZeroU8::new(10))
    .build_strict();

/// Longest precision handed to `core::fmt`. Past it every printed digit of
/// an `f64` is an exact zero, and `core::fmt` rejects precisions above
/// `u16::MAX`.
pub(super) const EXACT_DIGITS: usize = 1100;

/// IEEE binary floating-point types the conversion primitive supports.
pub(crate) trait Float:
    Copy
    + PartialEq
    + fmt::Display
    + fmt::LowerExp
    + lexical_core::FromLexical
    + FromLexicalWithOptions<Options = ParseFloatOptions>
{
    /// Explicit fraction bits.
    const MANT_BITS: u32;
    /// Exponent field width.
    const EXP_BITS: u32;
    const INFINITY: Self;
    const NAN: Self;

    fn to_bits_u64(self) -> u64;
    fn from_bits_u64(bits: u64) -> Self;

    #[inline]
    fn sign_mask() -> u64 {
        1 << (Self::MANT_BITS + Self::EXP_BITS)
    }

    #[inline]
    fn is_negative(self) -> bool {
        self.to_bits_u64() & Self::sign_mask() != 0
    }

    #[inline]
    fn negate(self) -> Self {
        Self::from_bits_u64(self.to_bits_u64() ^ Self::sign_mask())
    }

    #[inline]
    fn exp_field(self) -> u64 {
        (self.to_bits_u64() >> Self::MANT_BITS) & ((1 << Self::EXP_BITS) - 1)
    }

    #[inline]
    fn frac_field(self) -> u64 {
        self.to_bits_u64() & ((1 << Self::MANT_BITS) - 1)
    }

    #[inline]
    fn is_nan(self) -> bool {
        self.exp_field() == (1 << Self::EXP_BITS) - 1 && self.frac_field() != 0
    }

    #[inline]
    fn is_infinite(self) -> bool {
        self.exp_field() == (1 << Self::EXP_BITS) - 1 && self.frac_field() == 0
    }

    /// Whether `|self| >= 2^MANT_BITS`, where every value is an integer.
    #[inline]
    fn has_integral_ulp(self) -> bool {
        let bias = (1 << (Self::EXP_BITS - 1)) - 1;
        self.exp_field() >= bias + u64::from(Self::MANT_BITS)
    }

    #[inline]
    fn is_zero(self) -> bool {
        self.to_bits_u64() & !Self::sign_mask() == 0
    }
}

impl Float for f32 {
    const MANT_BITS: u32 = 23;
    const EXP_BITS: u32 = 8;
    const INFINITY: Self = f32::INFINITY;
    const NAN: Self = f32::NAN;

    #[inline]
    fn to_bits_u64(self) -> u64 {
        u64::from(self.to_bits())
    }

    #[inline]
    fn from_bits_u64(bits: u64) -> Self {
        // Callers only pass patterns built from `MANT_BITS` / `EXP_BITS`.
        f32::from_bits(bits as u32)
    }
}

impl Float for f64 {
    const MANT_BITS: u32 = 52;
    const EXP_BITS: u32 = 11;
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;

    #[inline]
    fn to_bits_u64(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_bits_u64(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

/// Parses the longest float prefix of `bytes` in `notation` into `value`.
pub(crate) fn from_chars_float<T: Float>(
    bytes: &[u8],
    value: &mut T,
    notation: Notation,
) -> Conversion {
    let negative = bytes.first() == Some(&b'-');
    let start = usize::from(negative);
    let body = &bytes[start..];

    if let Some((special, len)) = scan_special::<T>(body) {
        *value = if negative { special.negate() } else { special };
        return Conversion::ok(start + len);
    }

    let scanned = match notation {
        Notation::Hex => hex::scan(body),
        _ => scan_decimal(body, notation),
    };
    let Some((len, nonzero)) = scanned else {
        return Conversion::fail(0, Error::InvalidFormat);
    };
    let parsed = match notation {
        Notation::Hex => lexical_core::parse_with_options::<T, HEX_FORMAT>(
            &body[..len],
            &parse_float_options::HEX_FLOAT,
        ),
        _ => lexical_core::parse(&body[..len]),
    };
    let parsed = parsed
        .map_err(|_| Error::InvalidFormat)
        .and_then(|v| in_range(v, nonzero));

    let end = start + len;
    match parsed {
        Ok(v) => {
            *value = if negative { v.negate() } else { v };
            Conversion::ok(end)
        }
        Err(Error::InvalidFormat) => Conversion::fail(0, Error::InvalidFormat),
        Err(e) => Conversion::fail(end, e),
    }
}

/// Writes `value` in `notation` to the front of `bytes`.
///
/// Without `precision` the shortest text that parses back to `value` is
/// produced. The text is measured before anything is written.
pub(crate) fn to_chars_float<T: Float>(
    bytes: &mut [u8],
    value: T,
    notation: Notation,
    precision: Option<usize>,
) -> Conversion {
    // Fixed, scientific and hex text is longer than its precision.
    let finite = !value.is_nan() && !value.is_infinite();
    if let Some(p) = precision {
        if finite && notation != Notation::General && p >= bytes.len() {
            return Conversion::fail(bytes.len(), Error::OutOfRange);
        }
    }

    let mut counter = Counter::default();
    if format::render(&mut counter, value, notation, precision).is_err()
        || counter.len > bytes.len()
    {
        return Conversion::fail(bytes.len(), Error::OutOfRange);
    }

    let len = bytes.len();
    let mut w = SliceWriter::new(bytes);
    match format::render(&mut w, value, notation, precision) {
        Ok(()) => Conversion::ok(w.len()),
        Err(fmt::Error) => Conversion::fail(len, Error::OutOfRange),
    }
}

/// Matches `inf`, `infinity`, `nan` or `nan(chars)`, case-insensitively.
fn scan_special<T: Float>(body: &[u8]) -> Option<(T, usize)> {
    let starts_with = |word: &[u8]| {
        body.len() >= word.len() && body[..word.len()].eq_ignore_ascii_case(word)
    };

    if starts_with(b"infinity") {
        return Some((T::INFINITY, 8));
    }
    if starts_with(b"inf") {
        return Some((T::INFINITY, 3));
    }
    if starts_with(b"nan") {
        let rest = &body[3..];
        if rest.first() == Some(&b'(') {
            let inner = count_while(&rest[1..], |b| b.is_ascii_alphanumeric() || b == b'_');
            if rest.get(1 + inner) == Some(&b')') {
                return Some((T::NAN, 3 + inner + 2));
            }
        }
        return Some((T::NAN, 3));
    }
    None
}

/// Length of `digits[.digits]` at the front of `body` and whether a
/// nonzero digit occurs in it.
pub(super) fn scan_mantissa(body: &[u8], is_digit: fn(&u8) -> bool) -> Option<(usize, bool)> {
    let int_digits = count_while(body, |b| is_digit(&b));
    let mut len = int_digits;
    let mut frac_digits = 0;
    if body.get(len) == Some(&b'.') {
        frac_digits = count_while(&body[len + 1..], |b| is_digit(&b));
        if int_digits + frac_digits > 0 {
            len += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    let nonzero = body[..len].iter().any(|&b| b != b'0' && b != b'.');
    Some((len, nonzero))
}

/// Length of the decimal numeral at the front of `body` and whether its
/// mantissa has a nonzero digit.
fn scan_decimal(body: &[u8], notation: Notation) -> Option<(usize, bool)> {
    let (mut len, nonzero) = scan_mantissa(body, u8::is_ascii_digit)?;
    if notation != Notation::Fixed {
        match scan_exponent(&body[len..], b'e') {
            Some(exp_len) => len += exp_len,
            None if notation == Notation::Scientific => return None,
            None => {}
        }
    }
    Some((len, nonzero))
}

/// Length of `<marker>[+-]digits` at the front of `s`, if present.
pub(super) fn scan_exponent(s: &[u8], marker: u8) -> Option<usize> {
    if !s.first()?.eq_ignore_ascii_case(&marker) {
        return None;
    }
    let sign = usize::from(matches!(s.get(1), Some(b'+' | b'-')));
    let digits = count_while(&s[1 + sign..], |b| b.is_ascii_digit());
    (digits > 0).then_some(1 + sign + digits)
}

/// Rejects infinities and nonzero numerals that rounded to zero.
fn in_range<T: Float>(v: T, nonzero: bool) -> Result<T, Error> {
    if v.is_infinite() || (nonzero && v.is_zero()) {
        return Err(Error::OutOfRange);
    }
    Ok(v)
}
