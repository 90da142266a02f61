//! Error type

use core::fmt::{self, Display};

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Verification errors.
///
/// A signature which simply does not check out is *not* an error: it is
/// reported as [`Verification::Invalid`][`crate::Verification::Invalid`].
/// These variants describe malformed input or a broken internal invariant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// An input byte string has the wrong length for the target curve.
    Decode {
        /// Length required by the curve.
        expected: usize,

        /// Length which was supplied.
        actual: usize,
    },

    /// A value does not fit in the requested encoding length.
    Encode,

    /// Attempted to invert zero modulo a prime.
    NotInvertible,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode { expected, actual } => write!(
                f,
                "decode error: expected {expected} bytes, got {actual}"
            ),
            Error::Encode => f.write_str("encode error: value too large for output length"),
            Error::NotInvertible => f.write_str("internal error: inverse of zero requested"),
        }
    }
}

impl core::error::Error for Error {}
