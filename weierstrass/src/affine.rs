//! Affine curve points.

use crate::BigInt;
use subtle::{Choice, ConstantTimeEq};

/// Point on a short Weierstrass curve in affine coordinates, or the point at
/// infinity.
///
/// A point does not know which curve it belongs to: it is only meaningful
/// together with the [`CurveGroup`][`crate::CurveGroup`] which produced or
/// validated it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: BigInt,

    /// y-coordinate
    pub(crate) y: BigInt,

    /// Is this point the point at infinity?
    pub(crate) infinity: bool,
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: BigInt::ZERO,
        y: BigInt::ZERO,
        infinity: true,
    };

    /// Create an affine point from its coordinates.
    ///
    /// No curve membership check is performed; see
    /// [`CurveGroup::is_on_curve`][`crate::CurveGroup::is_on_curve`].
    pub const fn from_coordinates(x: BigInt, y: BigInt) -> Self {
        Self {
            x,
            y,
            infinity: false,
        }
    }

    /// Is this point the point at infinity?
    pub const fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Affine coordinates `(x, y)`, or `None` for the identity.
    pub const fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        if self.infinity {
            None
        } else {
            Some((&self.x, &self.y))
        }
    }

    /// Affine x-coordinate, or `None` for the identity.
    pub const fn x(&self) -> Option<&BigInt> {
        if self.infinity { None } else { Some(&self.x) }
    }

    /// Affine y-coordinate, or `None` for the identity.
    pub const fn y(&self) -> Option<&BigInt> {
        if self.infinity { None } else { Some(&self.y) }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x)
            & self.y.ct_eq(&other.y)
            & u8::from(self.infinity).ct_eq(&u8::from(other.infinity))
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}
