// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `printf`-style rendering on top of `core::fmt`.
//!
//! `core::fmt` already produces correctly rounded digits (shortest round-trip
//! for `{}` / `{:e}`, exact for `{:.N}` / `{:.Ne}`); this module only picks the
//! style and rewrites exponents and trailing zeros. Precisions past
//! [`EXACT_DIGITS`] are rendered at that precision and padded with zeros.

// Crate imports
use super::{EXACT_DIGITS, Float, hex};
use crate::{
    notation::Notation,
    primitive::writer::{Counter, ExpCapture, ExpFixup, TrimZeros, write_zeros},
};

// Core imports
use core::fmt::{self, Write};

pub(super) fn render<T: Float, W: Write>(
    w: &mut W,
    value: T,
    notation: Notation,
    precision: Option<usize>,
) -> fmt::Result {
    if value.is_nan() {
        return w.write_str(if value.is_negative() { "-nan" } else { "nan" });
    }
    if value.is_infinite() {
        return w.write_str(if value.is_negative() { "-inf" } else { "inf" });
    }

    match (notation, precision) {
        (Notation::Fixed, None) => fixed_shortest(w, value),
        (Notation::Fixed, Some(p)) => {
            let exact = p.min(EXACT_DIGITS);
            write!(w, "{value:.exact$}")?;
            write_zeros(w, p - exact)
        }
        (Notation::Scientific, None) => scientific(w, format_args!("{value:e}")),
        (Notation::Scientific, Some(p)) => {
            let exact = p.min(EXACT_DIGITS);
            let mut fix = ExpFixup::new(w);
            write!(fix, "{value:.exact$e}")?;
            fix.pad_mantissa(p - exact)?;
            fix.finish()
        }
        (Notation::Hex, p) => hex::write(w, value, p),
        (Notation::General, None) => general_shortest(w, value),
        // Trailing zeros are trimmed, so the clamp does not change the text.
        (Notation::General, Some(p)) => general_precision(w, value, p.min(EXACT_DIGITS)),
    }
}

/// Shortest `%f`. Among equally short candidates the one closest to `value`
/// wins, which for integers past the mantissa is their exact expansion.
fn fixed_shortest<T: Float, W: Write>(w: &mut W, value: T) -> fmt::Result {
    if value.has_integral_ulp() {
        write!(w, "{value:.0}")
    } else {
        write!(w, "{value}")
    }
}

fn scientific<W: Write>(w: &mut W, args: fmt::Arguments<'_>) -> fmt::Result {
    let mut fix = ExpFixup::new(w);
    fix.write_fmt(args)?;
    fix.finish()
}

/// `%f` or `%e`, whichever is shorter; `%f` on a tie.
fn general_shortest<T: Float, W: Write>(w: &mut W, value: T) -> fmt::Result {
    let mut fixed = Counter::default();
    fixed_shortest(&mut fixed, value)?;
    let mut sci = Counter::default();
    scientific(&mut sci, format_args!("{value:e}"))?;

    if sci.len < fixed.len {
        scientific(w, format_args!("{value:e}"))
    } else {
        fixed_shortest(w, value)
    }
}

/// `%.Pg`: `P` significant digits, style chosen by the decimal exponent,
/// trailing zeros removed.
fn general_precision<T: Float, W: Write>(w: &mut W, value: T, precision: usize) -> fmt::Result {
    let p = precision.max(1);
    let sig = p - 1;

    let mut cap = ExpCapture::default();
    write!(cap, "{value:.sig$e}")?;
    let x = i64::from(cap.exponent());

    if x >= -4 && x < p as i64 {
        let frac = (p as i64 - 1 - x) as usize;
        let mut trim = TrimZeros::new(w);
        write!(trim, "{value:.frac$}")?;
        let _ = trim.finish();
        Ok(())
    } else {
        let mut fix = ExpFixup::new(w);
        let mut trim = TrimZeros::new(&mut fix);
        write!(trim, "{value:.sig$e}")?;
        let _ = trim.finish();
        fix.finish()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::render;
    use crate::{Notation, primitive::writer::SliceWriter};
    use alloc::string::String;

    fn render_str(value: f64, notation: Notation, precision: Option<usize>) -> String {
        let mut buf = [0u8; 2048];
        let mut w = SliceWriter::new(&mut buf);
        render(&mut w, value, notation, precision).unwrap();
        let n = w.len();
        String::from_utf8(buf[..n].to_vec()).unwrap()
    }

    #[test]
    fn test_general_shortest_prefers_fixed_on_tie() {
        // "1e-04" (5) is shorter than "0.0001" (6).
        assert_eq!(render_str(0.0001, Notation::General, None), "1e-04");
        // Five characters either way.
        assert_eq!(render_str(0.001, Notation::General, None), "0.001");
        assert_eq!(render_str(10000.0, Notation::General, None), "10000");
        assert_eq!(render_str(100000.0, Notation::General, None), "1e+05");
        // "12000" (5) vs "1.2e+04" (7).
        assert_eq!(render_str(12000.0, Notation::General, None), "12000");
    }

    #[test]
    fn test_general_precision_switches_style() {
        assert_eq!(render_str(123456.0, Notation::General, Some(6)), "123456");
        assert_eq!(render_str(1234567.0, Notation::General, Some(6)), "1.23457e+06");
        assert_eq!(render_str(0.0001, Notation::General, Some(6)), "0.0001");
        assert_eq!(render_str(0.00001, Notation::General, Some(6)), "1e-05");
        // Rounding up crosses into the next decade.
        assert_eq!(render_str(9.9999, Notation::General, Some(2)), "10");
        assert_eq!(render_str(99.99, Notation::General, Some(2)), "1e+02");
    }

    #[test]
    fn test_fixed_large_precision() {
        let s = render_str(0.5, Notation::Fixed, Some(20));
        assert_eq!(s, "0.50000000000000000000");
    }

    #[test]
    fn test_precision_past_exact_digits_pads_zeros() {
        let s = render_str(0.1, Notation::Fixed, Some(1105));
        assert_eq!(s.len(), 2 + 1105);
        assert!(s.starts_with("0.1000000000000000055511151231257827021181583404541015625000"));
        assert!(s.ends_with("00000"));

        let s = render_str(-0.1, Notation::Scientific, Some(1200));
        assert_eq!(s.len(), 1 + 2 + 1200 + 4);
        assert!(s.starts_with("-1.000000000000000055511151231257827021181583404541015625000"));
        assert!(s.ends_with("0e-01"));

        assert_eq!(
            render_str(0.1, Notation::General, Some(70_000)),
            "0.1000000000000000055511151231257827021181583404541015625"
        );
        assert_eq!(render_str(1.0, Notation::General, Some(usize::MAX)), "1");
    }

    #[test]
    fn test_fixed_shortest_large_integers_are_exact() {
        assert_eq!(
            render_str(2f64.powi(60), Notation::Fixed, None),
            "1152921504606846976"
        );
        assert_eq!(render_str(9007199254740993.0, Notation::Fixed, None), "9007199254740992");
        assert_eq!(render_str(123.25, Notation::Fixed, None), "123.25");
    }

    #[test]
    fn test_scientific_negative() {
        assert_eq!(render_str(-0.015, Notation::Scientific, None), "-1.5e-02");
        // -0.015 is stored slightly below the tie.
        assert_eq!(render_str(-0.015, Notation::Scientific, Some(0)), "-1e-02");
    }
}
