//! Error types for number parsing and formatting.
//!
//! Every parse failure is reported as a structured [`Error`] carrying the
//! kind of violation and the byte offset at which it was detected, relative
//! to the start of the input slice passed to that call. There is no recovery
//! or retry inside the library: an error is terminal for its call and is
//! surfaced to the caller unchanged, so diagnostics like "invalid digit at
//! byte 3" can be produced without re-scanning the input.
//!
//! Builder failures (an inconsistent [`NumberFormat`](crate::NumberFormat) or
//! options configuration) are deliberately *not* represented here: builders
//! return `Option::None`, keeping construction failures structurally distinct
//! from errors that arise while examining input.
//!
//! ## Examples
//!
//! ```rust
//! use numform::{parse, ErrorKind};
//!
//! let err = parse::<i32>(b"10a").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidDigit);
//! assert_eq!(err.index(), 2);
//! ```

use thiserror::Error;

/// The kind of failure detected while parsing a number.
///
/// This is a closed set: each variant corresponds to exactly one grammar or
/// range violation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// The value overflowed the target integer type.
    #[error("value overflowed the target type")]
    Overflow,
    /// The value underflowed the target integer type.
    #[error("value underflowed the target type")]
    Underflow,
    /// An invalid digit was found before the input ended.
    #[error("invalid digit found")]
    InvalidDigit,
    /// The input was empty.
    #[error("empty input")]
    Empty,
    /// No mantissa digits were found.
    #[error("empty mantissa")]
    EmptyMantissa,
    /// An exponent was present without required exponent digits.
    #[error("empty exponent")]
    EmptyExponent,
    /// Required integer digits were missing.
    #[error("empty integer")]
    EmptyInteger,
    /// Required fraction digits were missing after a decimal point.
    #[error("empty fraction")]
    EmptyFraction,
    /// A positive mantissa sign was present but not allowed.
    #[error("positive mantissa sign not allowed")]
    InvalidPositiveMantissaSign,
    /// A mantissa sign was required but missing.
    #[error("required mantissa sign missing")]
    MissingMantissaSign,
    /// Exponent notation was present but not allowed.
    #[error("exponent notation not allowed")]
    InvalidExponent,
    /// A positive exponent sign was present but not allowed.
    #[error("positive exponent sign not allowed")]
    InvalidPositiveExponentSign,
    /// An exponent sign was required but missing.
    #[error("required exponent sign missing")]
    MissingExponentSign,
    /// An exponent was present without a fraction component.
    #[error("exponent without fraction not allowed")]
    ExponentWithoutFraction,
    /// The integer component had disallowed leading zeros.
    #[error("leading zeros not allowed")]
    InvalidLeadingZeros,
}

/// A parse failure: what went wrong, and where.
///
/// The index is a byte offset into the input slice the failing call received,
/// so `input[err.index()]` is the offending byte whenever the index is in
/// bounds (end-of-input conditions report the input length, or 0 for empty
/// input).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at byte {index}")]
pub struct Error {
    kind: ErrorKind,
    index: usize,
}

impl Error {
    /// Creates an error of the given kind at the given byte offset.
    pub(crate) const fn new(kind: ErrorKind, index: usize) -> Self {
        Error { kind, index }
    }

    /// The kind of failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset at which the failure was detected, relative to the start
    /// of the input slice.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

/// Result of a complete parse: the value, or a positioned [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Result of a partial parse: on success, the value together with the number
/// of input bytes consumed; trailing unrecognized bytes are not an error.
pub type PartialResult<T> = std::result::Result<(T, usize), Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_reports_kind_and_index() {
        let err = Error::new(ErrorKind::InvalidDigit, 3);
        assert_eq!(err.kind(), ErrorKind::InvalidDigit);
        assert_eq!(err.index(), 3);
        assert_eq!(err.to_string(), "invalid digit found at byte 3");
    }

    #[test]
    fn errors_compare_structurally() {
        assert_eq!(
            Error::new(ErrorKind::Empty, 0),
            Error::new(ErrorKind::Empty, 0)
        );
        assert_ne!(
            Error::new(ErrorKind::Empty, 0),
            Error::new(ErrorKind::Empty, 1)
        );
        assert_ne!(
            Error::new(ErrorKind::Overflow, 4),
            Error::new(ErrorKind::Underflow, 4)
        );
    }
}
