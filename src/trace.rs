// This file is part of charconv-utils.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional `tracing` events for failed conversions.
//!
//! With the `tracing` feature disabled this compiles to the identity.

// Crate imports
use crate::result::Conversion;

/// Which adapter produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Parse,
    Format,
}

#[cfg(feature = "tracing")]
impl Op {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Format => "format",
        }
    }
}

/// Passes `res` through, emitting a `trace!` event if it carries an error.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn observe(op: Op, len: usize, res: Conversion) -> Conversion {
    if let Some(err) = res.error {
        tracing::trace!(
            op = op.as_str(),
            len,
            pos = res.pos,
            error = err.as_str(),
            "conversion failed"
        );
    }
    res
}

/// Passes `res` through.
#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn observe(_op: Op, _len: usize, res: Conversion) -> Conversion {
    res
}


#[cfg(all(test, feature = "tracing"))]
mod events {
    // Imports
    use crate::{Notation, format_to_text, parse_from_text_with};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_failure_emits_trace_event() {
        let mut roomy = [0u8; 8];
        assert!(format_to_text(&mut roomy[..], 1000u32).is_ok());
        assert!(!logs_contain("conversion failed"));

        let mut small = [0u8; 3];
        assert!(format_to_text(&mut small[..], 1000u32).is_err());
        assert!(logs_contain("conversion failed"));
        assert!(logs_contain("out_of_range"));
        assert!(logs_contain("op=\"format\""));
    }

    #[test]
    #[traced_test]
    fn test_parse_failure_names_error() {
        let mut x = 0.0f64;
        assert!(parse_from_text_with("1.5", &mut x, Notation::Scientific).is_err());
        assert!(logs_contain("invalid_format"));
        assert!(logs_contain("op=\"parse\""));
    }
}
