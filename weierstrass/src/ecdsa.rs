//! Elliptic Curve Digital Signature Algorithm (ECDSA) verification.
//!
//! Verification follows [SEC 1] § 4.1.4 (a.k.a. [FIPS 186-5] § 6.4.2): given
//! a prehashed message `e`, a signature `(r, s)` and a public key `Q`,
//!
//! ```text
//! w  = s⁻¹ mod n
//! u₁ = e·w mod n
//! u₂ = r·w mod n
//! R  = u₁·G + u₂·Q
//! ```
//!
//! and the signature is valid iff `R ≠ O` and `R.x mod n = r`.
//!
//! Only verification is provided. A signature which does not check out is an
//! ordinary [`Verification::Invalid`] outcome, never an [`Error`][`crate::Error`].
//!
//! [SEC 1]: https://www.secg.org/sec1-v2.pdf
//! [FIPS 186-5]: https://csrc.nist.gov/publications/detail/fips/186/5/final

use crate::{AffinePoint, BigInt, CurveGroup, Result, uint::FieldBytes};
use core::fmt;
use subtle::ConstantTimeEq;

/// Size of a [`Digest`] in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Message digest computed by an external hash function (e.g. SHA-256).
pub type Digest = [u8; DIGEST_SIZE];

/// Outcome of a well-formed verification.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Verification {
    /// The signature was produced by the holder of the key.
    Valid,

    /// The signature does not check out.
    Invalid,
}

impl Verification {
    /// Is this [`Verification::Valid`]?
    pub const fn is_valid(self) -> bool {
        matches!(self, Verification::Valid)
    }
}

impl From<bool> for Verification {
    fn from(valid: bool) -> Self {
        if valid {
            Verification::Valid
        } else {
            Verification::Invalid
        }
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::Valid => f.write_str("valid"),
            Verification::Invalid => f.write_str("invalid"),
        }
    }
}

/// ECDSA signature `(r, s)`.
///
/// The components are stored as decoded. Range checking against the group
/// order happens at verification time so an out-of-range signature is
/// reported as [`Verification::Invalid`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    r: BigInt,
    s: BigInt,
}

impl Signature {
    /// Decode a signature from big-endian `r` and `s`, each exactly
    /// [`CurveGroup::field_bytes`] long.
    pub fn from_bytes(curve: &CurveGroup, r: &[u8], s: &[u8]) -> Result<Self> {
        Ok(Self {
            r: curve.decode_field_element(r)?,
            s: curve.decode_field_element(s)?,
        })
    }

    /// Create a signature from its integer components.
    pub const fn from_scalars(r: BigInt, s: BigInt) -> Self {
        Self { r, s }
    }

    /// The `r` component.
    pub const fn r(&self) -> &BigInt {
        &self.r
    }

    /// The `s` component.
    pub const fn s(&self) -> &BigInt {
        &self.s
    }

    /// Encode `(r, s)` as fixed-length big-endian byte strings for `curve`.
    pub fn to_bytes(&self, curve: &CurveGroup) -> Result<(FieldBytes, FieldBytes)> {
        let len = curve.field_bytes();
        Ok((self.r.to_be_bytes(len)?, self.s.to_be_bytes(len)?))
    }
}

/// ECDSA verifying key (i.e. public key) bound to the curve it lives on.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey<'a> {
    curve: &'a CurveGroup,
    point: AffinePoint,
}

impl<'a> VerifyingKey<'a> {
    /// Wrap a public point. Curve membership is checked by
    /// [`VerifyingKey::verify_prehash`], not here.
    pub const fn from_affine(curve: &'a CurveGroup, point: AffinePoint) -> Self {
        Self { curve, point }
    }

    /// Decode a public key from big-endian affine coordinates, each exactly
    /// [`CurveGroup::field_bytes`] long.
    pub fn from_affine_coordinates(curve: &'a CurveGroup, x: &[u8], y: &[u8]) -> Result<Self> {
        Ok(Self::from_affine(curve, curve.decode_point(x, y)?))
    }

    /// Curve this key belongs to.
    pub const fn curve(&self) -> &'a CurveGroup {
        self.curve
    }

    /// Borrow the public point.
    pub const fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Verify `signature` over a prehashed message of any length.
    ///
    /// Returns `Err` only for internal invariant failures; every property of
    /// the inputs themselves is reflected in the returned [`Verification`].
    pub fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> Result<Verification> {
        let curve = self.curve;
        let n = curve.order();
        let (r, s) = (signature.r(), signature.s());

        // 1. Reject unless r, s ∈ [1, n - 1].
        if r.is_zero() || s.is_zero() || !n.contains(r) || !n.contains(s) {
            return Ok(Verification::Invalid);
        }

        // 2. Reject the identity and points off the curve.
        if self.point.is_identity() || !curve.is_on_curve(&self.point) {
            return Ok(Verification::Invalid);
        }

        // 3. w = s⁻¹ mod n
        let w = n.inv_mod(s)?;

        // 4. u₁ = e·w mod n, u₂ = r·w mod n
        let e = prehash_to_scalar(curve, prehash)?;
        let u1 = n.mul_mod(&e, &w);
        let u2 = n.mul_mod(r, &w);

        // 5. R = u₁·G + u₂·Q
        let point = curve.lincomb(&u1, curve.generator(), &u2, &self.point);

        // 6. Reject R = O.
        let Some(x) = point.x() else {
            return Ok(Verification::Invalid);
        };

        // 7. Accept iff R.x mod n = r.
        Ok(bool::from(n.reduce(x).ct_eq(r)).into())
    }

    /// Verify `signature` over a 32-byte message digest.
    pub fn verify_digest(&self, digest: &Digest, signature: &Signature) -> Result<Verification> {
        self.verify_prehash(digest, signature)
    }
}

/// Convert a prehash into a scalar mod `n`.
///
/// Keeps the leftmost `⌈bits(n) / 8⌉` bytes, drops any remaining excess bits
/// from the right and reduces the result mod `n` ([SEC 1] § 4.1.3 step 5).
///
/// [SEC 1]: https://www.secg.org/sec1-v2.pdf
pub fn prehash_to_scalar(curve: &CurveGroup, prehash: &[u8]) -> Result<BigInt> {
    let n = curve.order();
    let len = prehash.len().min(n.byte_len());
    let mut e = BigInt::from_be_slice(&prehash[..len])?;

    let excess = (len * 8).saturating_sub(n.bits());
    if excess > 0 {
        e = e.shr(excess);
    }

    Ok(n.reduce(&e))
}

/// Decode and verify in one call.
///
/// `r`, `s`, `x` and `y` are big-endian and exactly as long as the curve's
/// field elements; anything else is an
/// [`Error::Decode`][`crate::Error::Decode`].
pub fn verify(
    curve: &CurveGroup,
    digest: &Digest,
    r: &[u8],
    s: &[u8],
    x: &[u8],
    y: &[u8],
) -> Result<Verification> {
    let signature = Signature::from_bytes(curve, r, s)?;
    let key = VerifyingKey::from_affine_coordinates(curve, x, y)?;
    key.verify_digest(digest, &signature)
}
