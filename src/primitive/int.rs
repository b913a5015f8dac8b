// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integer parsing and formatting.
//!
//! Grammar: an optional `-` (signed types only) followed by one or more
//! digits valid in the radix. Letters are accepted in either case. There is
//! no `+`, no whitespace skipping and no `0x` / `0b` prefix.
//!
//! The digit run is matched here; `lexical-core` converts it in the
//! requested radix. Its output uses uppercase letters, which are lowered.

// Crate imports
use super::{copy_out, count_while, radix_out_of_range};
use crate::{error::Error, result::Conversion};

// External imports - lexical
use lexical_core::{
    Error as LexicalError, FromLexicalWithOptions, NumberFormatBuilder, ParseIntegerOptions,
    ToLexicalWithOptions, WriteIntegerOptions,
};

const PARSE_OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
const WRITE_OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();

/// Primitive integer types the conversion primitive supports.
pub(crate) trait Int:
    Copy
    + FromLexicalWithOptions<Options = ParseIntegerOptions>
    + ToLexicalWithOptions<Options = WriteIntegerOptions>
{
    const SIGNED: bool;
}

macro_rules! impl_int {
    ($signed:literal: $($t:ty),*) => {
        $(
            impl Int for $t {
                const SIGNED: bool = $signed;
            }
        )*
    };
}

impl_int!(true: i8, i16, i32, i64, i128, isize);
impl_int!(false: u8, u16, u32, u64, u128, usize);

/// Calls `$f::<$t, FORMAT>$args` with the lexical number format for a
/// runtime radix, panicking outside `2..=36`.
macro_rules! in_radix {
    (@arms $radix:expr, $f:ident, $t:ident, $args:tt; $($r:literal)*) => {
        match $radix {
            $( $r => $f::<$t, { NumberFormatBuilder::from_radix($r) }> $args, )*
            other => radix_out_of_range(other),
        }
    };
    ($radix:expr, $f:ident::<$t:ident> $args:tt) => {
        in_radix!(@arms $radix, $f, $t, $args;
            2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19
            20 21 22 23 24 25 26 27 28 29 30 31 32 33 34 35 36)
    };
}

/// Parses the longest integer prefix of `bytes` into `value`.
///
/// # Panics
///
/// Panics if `radix` is not in `2..=36`.
#[track_caller]
pub(crate) fn from_chars_int<T: Int>(bytes: &[u8], value: &mut T, radix: u32) -> Conversion {
    in_radix!(radix, parse_in::<T>(bytes, value, radix))
}

/// Writes `value` in `radix` to the front of `bytes`.
///
/// # Panics
///
/// Panics if `radix` is not in `2..=36`.
#[track_caller]
pub(crate) fn to_chars_int<T: Int>(bytes: &mut [u8], value: T, radix: u32) -> Conversion {
    in_radix!(radix, write_in::<T>(bytes, value))
}

fn parse_in<T: Int, const FORMAT: u128>(bytes: &[u8], value: &mut T, radix: u32) -> Conversion {
    let start = usize::from(T::SIGNED && bytes.first() == Some(&b'-'));
    let digits = count_while(&bytes[start..], |b| char::from(b).is_digit(radix));
    if digits == 0 {
        return Conversion::fail(0, Error::InvalidFormat);
    }
    let end = start + digits;

    // Overflow still consumes the whole digit run.
    match lexical_core::parse_with_options::<T, FORMAT>(&bytes[..end], &PARSE_OPTIONS) {
        Ok(v) => {
            *value = v;
            Conversion::ok(end)
        }
        Err(LexicalError::Overflow(_) | LexicalError::Underflow(_)) => {
            Conversion::fail(end, Error::OutOfRange)
        }
        Err(_) => Conversion::fail(0, Error::InvalidFormat),
    }
}

fn write_in<T: Int, const FORMAT: u128>(bytes: &mut [u8], value: T) -> Conversion {
    let mut scratch = [0u8; lexical_core::BUFFER_SIZE];
    let text = lexical_core::write_with_options::<T, FORMAT>(value, &mut scratch, &WRITE_OPTIONS);
    text.make_ascii_lowercase();
    copy_out(bytes, text)
}
