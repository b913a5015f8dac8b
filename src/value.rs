// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value-category dispatch.
//!
//! The adapters are generic over the value type; these sealed traits decide
//! at compile time which primitive a call reaches and what the extra
//! parameter means:
//!
//! | Value type                      | `Param`    | Default               |
//! |---------------------------------|------------|-----------------------|
//! | `i8`..`i128`, `isize`, `u8`..`u128`, `usize` | `u32` radix | `10`   |
//! | `f32`, `f64`                    | [`Notation`] | [`Notation::General`] |
//!
//! Any other value type is rejected at build time.

// Crate imports
use crate::{notation::Notation, primitive, result::Conversion};

mod private {
    pub trait Sealed {}
}

/// Types that can be parsed from text.
///
/// This trait is sealed and cannot be implemented outside this crate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an integer or floating-point type",
    label = "cannot be parsed from text",
    note = "only the primitive integer types, `f32` and `f64` are supported"
)]
pub trait FromText: private::Sealed + Copy {
    /// Radix (`u32`) for integers, [`Notation`] for floats.
    type Param: Copy;

    /// The parameter used when none is given.
    const DEFAULT_PARAM: Self::Param;

    #[doc(hidden)]
    fn from_text(bytes: &[u8], out: &mut Self, param: Self::Param) -> Conversion;
}

/// Types that can be formatted as text.
///
/// This trait is sealed and cannot be implemented outside this crate.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an integer or floating-point type",
    label = "cannot be formatted as text",
    note = "only the primitive integer types, `f32` and `f64` are supported"
)]
pub trait ToText: private::Sealed + Copy {
    /// Radix (`u32`) for integers, [`Notation`] for floats.
    type Param: Copy;

    #[doc(hidden)]
    fn to_text(bytes: &mut [u8], value: Self, param: Self::Param) -> Conversion;
}

/// Floating-point types, which additionally accept a precision when
/// formatting.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a floating-point type",
    label = "precision only applies to `f32` and `f64`"
)]
pub trait ToTextPrecision: ToText<Param = Notation> {
    #[doc(hidden)]
    fn to_text_precision(
        bytes: &mut [u8],
        value: Self,
        notation: Notation,
        precision: usize,
    ) -> Conversion;
}

/// Integer types: radix-parameterized, radix 10 by default.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an integer type",
    label = "radix formatting only applies to integers",
    note = "floats need an explicit `Notation`: use `format_to_text_with`"
)]
pub trait Integer: FromText<Param = u32> + ToText<Param = u32> {}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl FromText for $t {
                type Param = u32;
                const DEFAULT_PARAM: u32 = 10;

                #[inline]
                #[track_caller]
                fn from_text(bytes: &[u8], out: &mut Self, radix: u32) -> Conversion {
                    primitive::from_chars_int(bytes, out, radix)
                }
            }

            impl ToText for $t {
                type Param = u32;

                #[inline]
                #[track_caller]
                fn to_text(bytes: &mut [u8], value: Self, radix: u32) -> Conversion {
                    primitive::to_chars_int(bytes, value, radix)
                }
            }

            impl Integer for $t {}
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl FromText for $t {
                type Param = Notation;
                const DEFAULT_PARAM: Notation = Notation::General;

                #[inline]
                fn from_text(bytes: &[u8], out: &mut Self, notation: Notation) -> Conversion {
                    primitive::from_chars_float(bytes, out, notation)
                }
            }

            impl ToText for $t {
                type Param = Notation;

                #[inline]
                fn to_text(bytes: &mut [u8], value: Self, notation: Notation) -> Conversion {
                    primitive::to_chars_float(bytes, value, notation, None)
                }
            }

            impl ToTextPrecision for $t {
                #[inline]
                fn to_text_precision(
                    bytes: &mut [u8],
                    value: Self,
                    notation: Notation,
                    precision: usize,
                ) -> Conversion {
                    primitive::to_chars_float(bytes, value, notation, Some(precision))
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);
