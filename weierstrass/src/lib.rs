#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## `serde` support
//!
//! When the `serde` feature of this crate is enabled, [`CurveId`] is
//! (de)serialized as its lowercase SEC 2 name, e.g. `"secp256r1"`.

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod ecdsa;

mod affine;
mod curve;
mod error;
mod modular;
mod named;
mod projective;
mod uint;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

pub use crate::{
    affine::AffinePoint,
    curve::CurveGroup,
    ecdsa::{Digest, Signature, Verification, VerifyingKey},
    error::{Error, Result},
    modular::Modulus,
    named::{CurveId, SECP192R1, SECP256R1, UnknownCurve},
    uint::{BigInt, FieldBytes, LIMBS, MAX_BYTES},
};
pub use subtle;

/// Verify an ECDSA signature over a 32-byte digest on a named curve.
///
/// `r`, `s`, `x` and `y` are fixed-length big-endian encodings whose length
/// is the byte length of the curve's field elements (24 for P-192, 32 for
/// P-256). Wrong lengths are reported as [`Error::Decode`]; a signature that
/// does not check out is `Ok(Verification::Invalid)`.
pub fn verify(
    curve: CurveId,
    digest: &Digest,
    r: &[u8],
    s: &[u8],
    x: &[u8],
    y: &[u8],
) -> Result<Verification> {
    ecdsa::verify(curve.curve(), digest, r, s, x, y)
}
