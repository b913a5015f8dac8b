// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Character-container capabilities.
//!
//! A container qualifies when it exposes its contents as one contiguous
//! `[u8]`: `[u8; N]`, `[u8]`, `str`, `Vec<u8>`, `String`, `Box<[u8]>`, and
//! any user type implementing `AsRef<[u8]>` / `AsMut<[u8]>`. Containers of
//! any other element type are rejected at build time.

/// Read access to a contiguous byte sequence.
#[diagnostic::on_unimplemented(
    message = "container value type must be `u8`",
    label = "`{Self}` does not expose a contiguous `[u8]`",
    note = "implement `AsRef<[u8]>` for the container"
)]
pub trait CharSource {
    /// The whole sequence, `[0, len)`.
    fn char_slice(&self) -> &[u8];
}

impl<C: ?Sized + AsRef<[u8]>> CharSource for C {
    #[inline]
    fn char_slice(&self) -> &[u8] {
        self.as_ref()
    }
}

/// Write access to a contiguous byte sequence.
#[diagnostic::on_unimplemented(
    message = "container value type must be `u8`",
    label = "`{Self}` does not expose a mutable contiguous `[u8]`",
    note = "implement `AsMut<[u8]>` for the container"
)]
pub trait CharSink {
    /// The whole sequence, `[0, len)`.
    fn char_slice_mut(&mut self) -> &mut [u8];
}

impl<C: ?Sized + AsMut<[u8]>> CharSink for C {
    #[inline]
    fn char_slice_mut(&mut self) -> &mut [u8] {
        self.as_mut()
    }
}
