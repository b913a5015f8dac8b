// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The value returned by every parse and format call.

// Crate imports
use crate::error::Error;

/// Outcome of a single conversion.
///
/// Mirrors the primitive's result verbatim: the adapters never inspect or
/// rewrite it.
///
/// - `pos` is an index into the buffer view. For a parse it is one past the
///   last byte of the matched numeral (or `0` when nothing matched); for a
///   format it is one past the last byte written (or the buffer length when
///   the text did not fit).
/// - `error` is `None` on success.
///
/// # Examples
///
/// ```rust
/// use charconv_utils::{parse_from_text, Error};
///
/// let mut v = 0u32;
/// let res = parse_from_text(b"123abc", &mut v);
/// assert!(res.is_ok());
/// assert_eq!((v, res.pos), (123, 3));
///
/// let res = parse_from_text(b"abc", &mut v);
/// assert_eq!(res.into_result(), Err(Error::InvalidFormat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a conversion may fail; check `error` or call `into_result`"]
pub struct Conversion {
    /// Stopped-at position, relative to the start of the buffer.
    pub pos: usize,
    /// `None` on success.
    pub error: Option<Error>,
}

impl Conversion {
    #[inline]
    pub(crate) const fn ok(pos: usize) -> Self {
        Self { pos, error: None }
    }

    #[inline]
    pub(crate) const fn fail(pos: usize, error: Error) -> Self {
        Self {
            pos,
            error: Some(error),
        }
    }

    /// Returns `true` if no error indicator is set.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns `true` if an error indicator is set.
    #[inline]
    pub const fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Converts into a `Result`, keeping `pos` on success only.
    ///
    /// # Errors
    ///
    /// Returns the error indicator if one is set.
    #[inline]
    pub const fn into_result(self) -> Result<usize, Error> {
        match self.error {
            None => Ok(self.pos),
            Some(e) => Err(e),
        }
    }
}

impl From<Conversion> for Result<usize, Error> {
    #[inline]
    fn from(c: Conversion) -> Self {
        c.into_result()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Conversion;
    use crate::Error;

    #[test]
    fn test_ok_and_fail() {
        let ok = Conversion::ok(4);
        assert!(ok.is_ok());
        assert!(!ok.is_err());
        assert_eq!(ok.into_result(), Ok(4));

        let bad = Conversion::fail(2, Error::OutOfRange);
        assert!(bad.is_err());
        assert_eq!(bad.pos, 2);
        assert_eq!(bad.into_result(), Err(Error::OutOfRange));
    }

    #[test]
    fn test_into_result_via_from() {
        let r: Result<usize, Error> = Conversion::fail(0, Error::InvalidFormat).into();
        assert_eq!(r, Err(Error::InvalidFormat));
    }
}
