// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Allocation-free `fmt::Write` sinks and filters used by float formatting.
//!
//! Float text is rendered twice: once into a [`Counter`] to learn its length,
//! then, only if it fits, into a [`SliceWriter`]. The filters rewrite
//! `core::fmt` output into `printf` conventions on the fly.

// Core imports
use core::fmt::{self, Write};

/// Counts bytes without storing them.
#[derive(Debug, Default)]
pub(crate) struct Counter {
    pub(crate) len: usize,
}

impl Write for Counter {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

/// Writes into a borrowed byte slice; errors instead of truncating.
#[derive(Debug)]
pub(crate) struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceWriter<'a> {
    #[inline]
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        let dst = self.buf.get_mut(self.len..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

/// Writes `n` zeros.
pub(crate) fn write_zeros<W: Write + ?Sized>(w: &mut W, mut n: usize) -> fmt::Result {
    const ZEROS: &str = "0000000000000000";
    while n > 0 {
        let k = n.min(ZEROS.len());
        w.write_str(&ZEROS[..k])?;
        n -= k;
    }
    Ok(())
}

/// Rewrites a Rust exponent (`e3`, `e-7`) as a C exponent (`e+03`, `e-07`).
///
/// Everything before the `e` passes through. Call [`finish`](Self::finish)
/// once the inner formatting is done.
#[derive(Debug)]
pub(crate) struct ExpFixup<W> {
    inner: W,
    in_exp: bool,
    negative: bool,
    digits: [u8; 8],
    n: usize,
}

impl<W: Write> ExpFixup<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            in_exp: false,
            negative: false,
            digits: [0; 8],
            n: 0,
        }
    }

    /// Appends `zeros` mantissa digits ahead of the held-back exponent.
    pub(crate) fn pad_mantissa(&mut self, zeros: usize) -> fmt::Result {
        write_zeros(&mut self.inner, zeros)
    }

    pub(crate) fn finish(mut self) -> fmt::Result {
        if !self.in_exp {
            return Ok(());
        }
        self.inner
            .write_str(if self.negative { "e-" } else { "e+" })?;
        if self.n < 2 {
            self.inner.write_char('0')?;
        }
        for &d in &self.digits[..self.n] {
            self.inner.write_char(char::from(d))?;
        }
        Ok(())
    }
}

impl<W: Write> Write for ExpFixup<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut rest = s;
        if !self.in_exp {
            match rest.find('e') {
                Some(i) => {
                    self.inner.write_str(&rest[..i])?;
                    self.in_exp = true;
                    rest = &rest[i + 1..];
                }
                None => return self.inner.write_str(rest),
            }
        }
        for b in rest.bytes() {
            match b {
                b'-' => self.negative = true,
                b'+' => {}
                _ => {
                    let slot = self.digits.get_mut(self.n).ok_or(fmt::Error)?;
                    *slot = b;
                    self.n += 1;
                }
            }
        }
        Ok(())
    }
}

/// Drops trailing zeros of the fractional part, and the `.` when nothing is
/// left after it (the `%g` rule).
#[derive(Debug)]
pub(crate) struct TrimZeros<W> {
    inner: W,
    in_fraction: bool,
    done: bool,
    pending_dot: bool,
    pending_zeros: usize,
}

impl<W: Write> TrimZeros<W> {
    pub(crate) fn new(inner: W) -> Self {
        Self {
            inner,
            in_fraction: false,
            done: false,
            pending_dot: false,
            pending_zeros: 0,
        }
    }

    /// Discards anything still pending and returns the inner writer.
    pub(crate) fn finish(self) -> W {
        self.inner
    }

    fn flush_pending(&mut self) -> fmt::Result {
        if self.pending_dot {
            self.inner.write_char('.')?;
            self.pending_dot = false;
        }
        while self.pending_zeros > 0 {
            self.inner.write_char('0')?;
            self.pending_zeros -= 1;
        }
        Ok(())
    }
}

impl<W: Write> Write for TrimZeros<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.done || (!self.in_fraction && c != '.') {
                self.inner.write_char(c)?;
                continue;
            }
            match c {
                '.' => {
                    self.in_fraction = true;
                    self.pending_dot = true;
                }
                '0' => self.pending_zeros += 1,
                '1'..='9' => {
                    self.flush_pending()?;
                    self.inner.write_char(c)?;
                }
                _ => {
                    self.pending_dot = false;
                    self.pending_zeros = 0;
                    self.done = true;
                    self.inner.write_char(c)?;
                }
            }
        }
        Ok(())
    }
}

/// Captures the decimal exponent of `{:e}` output and discards the rest.
#[derive(Debug, Default)]
pub(crate) struct ExpCapture {
    in_exp: bool,
    negative: bool,
    value: i32,
}

impl ExpCapture {
    pub(crate) fn exponent(&self) -> i32 {
        if self.negative { -self.value } else { self.value }
    }
}

impl Write for ExpCapture {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            if !self.in_exp {
                self.in_exp = b == b'e';
                continue;
            }
            match b {
                b'-' => self.negative = true,
                b'0'..=b'9' => {
                    self.value = self.value.saturating_mul(10).saturating_add(i32::from(b - b'0'));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
