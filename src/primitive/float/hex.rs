// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hexadecimal floats (`%a` without the `0x` prefix).

// Crate imports
use super::{Float, scan_exponent, scan_mantissa};
use crate::primitive::writer::write_zeros;

// Core imports
use core::fmt::{self, Write};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Length of the unsigned hex numeral at the front of `body` and whether its
/// mantissa has a nonzero digit. An exponent without digits is not consumed.
pub(super) fn scan(body: &[u8]) -> Option<(usize, bool)> {
    let (mut len, nonzero) = scan_mantissa(body, u8::is_ascii_hexdigit)?;
    if let Some(exp_len) = scan_exponent(&body[len..], b'p') {
        len += exp_len;
    }
    Some((len, nonzero))
}

/// Writes the magnitude and sign of a finite `value` as `h[.hhh]p[+-]d`.
///
/// Without `precision` trailing zero nibbles are trimmed; with it the
/// fraction is rounded half-to-even to exactly that many nibbles.
pub(super) fn write<T: Float, W: Write>(
    w: &mut W,
    value: T,
    precision: Option<usize>,
) -> fmt::Result {
    if value.is_negative() {
        w.write_char('-')?;
    }

    let bias = (1i64 << (T::EXP_BITS - 1)) - 1;
    let exp_field = value.exp_field();
    let frac = value.frac_field();

    let nibbles = T::MANT_BITS.div_ceil(4) as usize;
    let aligned = frac << (nibbles as u32 * 4 - T::MANT_BITS);

    let (mut lead, exp) = match (exp_field, frac) {
        (0, 0) => (0u64, 0i64),
        (0, _) => (0, 1 - bias),
        (e, _) => (1, e as i64 - bias),
    };

    let (digits, shown, pad) = match precision {
        None => {
            let trailing = if aligned == 0 {
                nibbles
            } else {
                (aligned.trailing_zeros() / 4) as usize
            };
            let shown = nibbles - trailing;
            (aligned >> (trailing * 4), shown, 0)
        }
        Some(p) if p >= nibbles => (aligned, nibbles, p - nibbles),
        Some(p) => {
            let drop = (nibbles - p) * 4;
            let mut kept = aligned >> drop;
            let rem = aligned & ((1 << drop) - 1);
            let half = 1 << (drop - 1);
            let odd = if p == 0 { lead & 1 == 1 } else { kept & 1 == 1 };
            if rem > half || (rem == half && odd) {
                kept += 1;
                if kept == 1 << (p * 4) {
                    lead += 1;
                    kept = 0;
                }
            }
            (kept, p, 0)
        }
    };

    w.write_char(char::from(HEX_DIGITS[lead as usize]))?;
    if shown + pad > 0 {
        w.write_char('.')?;
    }
    for i in (0..shown).rev() {
        let nibble = (digits >> (i * 4)) & 0xf;
        w.write_char(char::from(HEX_DIGITS[nibble as usize]))?;
    }
    write_zeros(w, pad)?;
    write!(w, "p{}{}", if exp < 0 { '-' } else { '+' }, exp.unsigned_abs())
}
