// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Floating-point text notations.

// Core imports
use core::fmt;

/// Textual style of a floating-point number.
///
/// Every notation also parses `inf`, `infinity`, `nan` and `nan(chars)` in
/// any case, with an optional leading `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// `printf` `%f`: `-1.5`. Parsing never consumes an exponent.
    Fixed,
    /// `printf` `%e`: `-1.5e+03`. Parsing requires the exponent.
    Scientific,
    /// `printf` `%a` without the `0x` prefix: `-1.8p+1`. Parsing rejects the
    /// prefix.
    Hex,
    /// `printf` `%g`: fixed or scientific, whichever the value calls for.
    /// Parsing accepts both.
    #[default]
    General,
}

impl Notation {
    /// All notations, in declaration order.
    pub const ALL: [Notation; 4] = [Self::Fixed, Self::Scientific, Self::Hex, Self::General];

    /// Lowercase name, also used by the `serde` representation.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Scientific => "scientific",
            Self::Hex => "hex",
            Self::General => "general",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == name)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
