// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error indicators reported by the conversion primitive.
//!
//! These are carried inside a [`Conversion`](crate::Conversion) as values.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Why a conversion did not succeed.
///
/// Success is represented by the *absence* of an error
/// (`Conversion::error == None`), not by a variant of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The leading bytes are not a valid representation of the requested
    /// numeric type, radix or notation.
    ///
    /// Also reported for an empty buffer.
    InvalidFormat,
    /// Parse: the text is well formed but its value is not representable in
    /// the destination type.
    ///
    /// Format: the text does not fit in the destination buffer.
    OutOfRange,
}

impl Error {
    /// Short lowercase name, also used by the `serde` representation.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::OutOfRange => "out_of_range",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => f.write_str("invalid format"),
            Self::OutOfRange => f.write_str("result out of range"),
        }
    }
}

impl CoreError for Error {}
