//! Short Weierstrass curve groups.

use crate::{
    AffinePoint, BigInt, Error, Modulus, Result,
    projective::PointArithmetic,
    uint::FieldBytes,
};

/// Group of points on a short Weierstrass curve `y² = x³ + a·x + b` over the
/// prime field of order `p`, with a base point of prime order `n`.
///
/// A `CurveGroup` is immutable and binds every point and scalar operation to
/// its own moduli, so values from different curves are never mixed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurveGroup {
    name: &'static str,
    field: Modulus,
    order: Modulus,
    a: BigInt,
    b: BigInt,
    generator: AffinePoint,
}

impl CurveGroup {
    /// Define a curve from its parameters.
    ///
    /// Only well-known standard curves are expected here: beyond the moduli
    /// being odd, the parameters are not validated.
    pub const fn new(
        name: &'static str,
        p: BigInt,
        a: BigInt,
        b: BigInt,
        n: BigInt,
        generator: (BigInt, BigInt),
    ) -> Self {
        Self {
            name,
            field: Modulus::new(p),
            order: Modulus::new(n),
            a,
            b,
            generator: AffinePoint::from_coordinates(generator.0, generator.1),
        }
    }

    /// Name of the curve.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Base field modulus `p`.
    pub const fn field(&self) -> &Modulus {
        &self.field
    }

    /// Group order `n`, the modulus of scalars.
    pub const fn order(&self) -> &Modulus {
        &self.order
    }

    /// Coefficient `a` in the curve equation.
    pub const fn equation_a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub const fn equation_b(&self) -> &BigInt {
        &self.b
    }

    /// Base point `G`.
    pub const fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Encoded length `L` of field elements, in bytes.
    pub const fn field_bytes(&self) -> usize {
        self.field.byte_len()
    }

    /// Decode a big-endian field element of exactly [`Self::field_bytes`]
    /// bytes. The value is not range checked.
    pub fn decode_field_element(&self, bytes: &[u8]) -> Result<BigInt> {
        let expected = self.field_bytes();
        if bytes.len() != expected {
            return Err(Error::Decode {
                expected,
                actual: bytes.len(),
            });
        }
        BigInt::from_be_slice(bytes)
    }

    /// Decode an affine point from big-endian coordinates.
    ///
    /// Only lengths are checked; use [`Self::is_on_curve`] for membership.
    pub fn decode_point(&self, x: &[u8], y: &[u8]) -> Result<AffinePoint> {
        Ok(AffinePoint::from_coordinates(
            self.decode_field_element(x)?,
            self.decode_field_element(y)?,
        ))
    }

    /// Encode the coordinates of an affine point as fixed-length big-endian
    /// byte strings. The identity has no affine encoding.
    pub fn encode_point(&self, point: &AffinePoint) -> Result<(FieldBytes, FieldBytes)> {
        let (x, y) = point.coordinates().ok_or(Error::Encode)?;
        let len = self.field_bytes();
        Ok((x.to_be_bytes(len)?, y.to_be_bytes(len)?))
    }

    /// Does `point` satisfy `y² = x³ + a·x + b (mod p)` with both coordinates
    /// in `[0, p)`? The identity is always on the curve.
    pub fn is_on_curve(&self, point: &AffinePoint) -> bool {
        let Some((x, y)) = point.coordinates() else {
            return true;
        };

        let f = &self.field;
        if !f.contains(x) || !f.contains(y) {
            return false;
        }

        let lhs = f.mul_mod(y, y);
        let x3 = f.mul_mod(&f.mul_mod(x, x), x);
        let rhs = f.add_mod(&f.add_mod(&x3, &f.mul_mod(&self.a, x)), &self.b);
        lhs == rhs
    }

    /// Returns `-point`.
    pub fn negate(&self, point: &AffinePoint) -> AffinePoint {
        match point.coordinates() {
            None => AffinePoint::IDENTITY,
            Some((x, y)) => AffinePoint::from_coordinates(*x, self.field.neg_mod(y)),
        }
    }

    /// Returns `p + q` using the affine chord-and-tangent law.
    ///
    /// Both operands must be on this curve. Coordinates are reduced mod `p`
    /// first, so the result is always canonical.
    pub fn add(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        let Some(p) = self.canonical(p) else {
            return self.canonical(q).unwrap_or(AffinePoint::IDENTITY);
        };
        let Some(q) = self.canonical(q) else {
            return p;
        };
        let (px, py) = (&p.x, &p.y);
        let (qx, qy) = (&q.x, &q.y);

        if px == qx {
            // Same x: either q = p or q = -p.
            return if py == qy {
                self.double(&p)
            } else {
                AffinePoint::IDENTITY
            };
        }

        let f = &self.field;
        let lambda = f.mul_mod(
            &f.sub_mod(qy, py),
            &f.invert_vartime(&f.sub_mod(qx, px)),
        );
        self.chord_point(&lambda, px, py, qx)
    }

    /// Returns `2·p`.
    pub fn double(&self, p: &AffinePoint) -> AffinePoint {
        let Some(p) = self.canonical(p) else {
            return AffinePoint::IDENTITY;
        };
        let (x, y) = (&p.x, &p.y);
        if y.is_zero() {
            return AffinePoint::IDENTITY;
        }

        let f = &self.field;
        let xx = f.mul_mod(x, x);
        let numerator = f.add_mod(&f.add_mod(&f.add_mod(&xx, &xx), &xx), &self.a);
        let lambda = f.mul_mod(&numerator, &f.invert_vartime(&f.add_mod(y, y)));
        self.chord_point(&lambda, x, y, x)
    }

    /// `point` with both coordinates reduced mod `p`, or `None` for the
    /// identity.
    fn canonical(&self, point: &AffinePoint) -> Option<AffinePoint> {
        let (x, y) = point.coordinates()?;
        Some(AffinePoint::from_coordinates(
            self.field.reduce(x),
            self.field.reduce(y),
        ))
    }

    /// Third intersection of the line of slope `lambda` through `(px, py)`
    /// and a point with x-coordinate `qx`, reflected over the x-axis.
    fn chord_point(&self, lambda: &BigInt, px: &BigInt, py: &BigInt, qx: &BigInt) -> AffinePoint {
        let f = &self.field;
        let x3 = f.sub_mod(&f.sub_mod(&f.mul_mod(lambda, lambda), px), qx);
        let y3 = f.sub_mod(&f.mul_mod(lambda, &f.sub_mod(px, &x3)), py);
        AffinePoint::from_coordinates(x3, y3)
    }

    /// Returns `k·p`.
    ///
    /// Scans `k` from the most significant bit down, doubling and then adding
    /// `p` for every set bit. `k` is not reduced, so `k = n` yields the
    /// identity for points of order `n`.
    ///
    /// **This operation is variable time with respect to `k`.** It is meant
    /// for public scalars only.
    pub fn scalar_multiply(&self, k: &BigInt, p: &AffinePoint) -> AffinePoint {
        let arith = self.point_arithmetic();
        let p = arith.from_affine(p);
        arith.to_affine(&arith.mul_vartime(&p, k))
    }

    /// Returns `k1·p1 + k2·p2`.
    ///
    /// **This operation is variable time with respect to `k1` and `k2`.**
    pub fn lincomb(
        &self,
        k1: &BigInt,
        p1: &AffinePoint,
        k2: &BigInt,
        p2: &AffinePoint,
    ) -> AffinePoint {
        let arith = self.point_arithmetic();
        let p1 = arith.from_affine(p1);
        let p2 = arith.from_affine(p2);
        arith.to_affine(&arith.lincomb_vartime(&p1, k1, &p2, k2))
    }

    fn point_arithmetic(&self) -> PointArithmetic<'_> {
        PointArithmetic::new(&self.field, &self.a, &self.b)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AffinePoint, BigInt, SECP192R1, SECP256R1};

    #[test]
    fn generators_on_curve() {
        for curve in [&SECP192R1, &SECP256R1] {
            assert!(curve.is_on_curve(curve.generator()), "{}", curve.name());
        }
    }

    #[test]
    fn identity_on_curve() {
        assert!(SECP256R1.is_on_curve(&AffinePoint::IDENTITY));
    }

    #[test]
    fn off_curve_point() {
        let g = SECP256R1.generator();
        let (x, y) = g.coordinates().unwrap();
        let bumped = SECP256R1.field().add_mod(y, &BigInt::ONE);
        assert!(!SECP256R1.is_on_curve(&AffinePoint::from_coordinates(*x, bumped)));
    }

    #[test]
    fn unreduced_coordinate_rejected() {
        // (x + p, y) satisfies the equation modulo p but is not canonical.
        let curve = &SECP192R1;
        let (x, y) = curve.generator().coordinates().unwrap();
        let (x_plus_p, carry) = x.overflowing_add(curve.field().value());
        assert_eq!(carry, 0);
        assert!(!curve.is_on_curve(&AffinePoint::from_coordinates(x_plus_p, *y)));
    }

    #[test]
    fn add_inverse_is_identity() {
        let g = SECP256R1.generator();
        let minus_g = SECP256R1.negate(g);
        assert_eq!(SECP256R1.add(g, &minus_g), AffinePoint::IDENTITY);
    }

    #[test]
    fn add_self_is_double() {
        let g = SECP192R1.generator();
        assert_eq!(SECP192R1.add(g, g), SECP192R1.double(g));
    }

    #[test]
    fn unreduced_coordinates_give_canonical_results() {
        let curve = &SECP192R1;
        let g = curve.generator();
        let (x, y) = g.coordinates().unwrap();
        let (x_plus_p, carry) = x.overflowing_add(curve.field().value());
        assert_eq!(carry, 0);
        let unreduced = AffinePoint::from_coordinates(x_plus_p, *y);

        let g2 = curve.double(g);
        assert_eq!(curve.double(&unreduced), g2);
        assert_eq!(curve.add(&unreduced, g), g2);
        assert_eq!(curve.add(g, &unreduced), g2);
        assert_eq!(curve.add(&unreduced, &AffinePoint::IDENTITY), *g);
        assert_eq!(curve.add(&AffinePoint::IDENTITY, &unreduced), *g);
        assert_eq!(curve.scalar_multiply(&BigInt::from_u64(2), &unreduced), g2);
        assert_eq!(curve.add(&unreduced, &curve.negate(g)), AffinePoint::IDENTITY);
    }

    #[test]
    fn double_two_torsion_is_identity() {
        let p = AffinePoint::from_coordinates(BigInt::from_u64(5), BigInt::ZERO);
        assert_eq!(SECP256R1.double(&p), AffinePoint::IDENTITY);
    }

    #[test]
    fn scalar_multiply_small() {
        let curve = &SECP256R1;
        let g = curve.generator();
        let g2 = curve.double(g);
        let g3 = curve.add(&g2, g);
        assert_eq!(curve.scalar_multiply(&BigInt::from_u64(1), g), *g);
        assert_eq!(curve.scalar_multiply(&BigInt::from_u64(2), g), g2);
        assert_eq!(curve.scalar_multiply(&BigInt::from_u64(3), g), g3);
    }

    #[test]
    fn order_annihilates_generator() {
        for curve in [&SECP192R1, &SECP256R1] {
            let g = curve.generator();
            let n = curve.order().value();
            assert_eq!(curve.scalar_multiply(n, g), AffinePoint::IDENTITY);

            let n_minus_1 = curve.order().neg_mod(&BigInt::ONE);
            assert_eq!(curve.scalar_multiply(&n_minus_1, g), curve.negate(g));
        }
    }

    #[test]
    fn lincomb_matches_separate_products() {
        let curve = &SECP192R1;
        let g = curve.generator();
        let q = curve.scalar_multiply(&BigInt::from_u64(0xdead_beef), g);
        let k1 = BigInt::from_be_hex("7a929ade789bb9be10ed359dd39a72c11b60961f49397eee");
        let k2 = BigInt::from_be_hex("2dfbc1b372d89a1188c09c52e0eec61fce52032ab1022e8e");

        let expected = curve.add(&curve.scalar_multiply(&k1, g), &curve.scalar_multiply(&k2, &q));
        assert_eq!(curve.lincomb(&k1, g, &k2, &q), expected);
    }

    #[test]
    fn encode_decode_round_trip() {
        let curve = &SECP256R1;
        let (x, y) = curve.encode_point(curve.generator()).unwrap();
        assert_eq!(x.len(), 32);
        let decoded = curve.decode_point(x.as_slice(), y.as_slice()).unwrap();
        assert_eq!(&decoded, curve.generator());
    }

    #[test]
    fn decode_wrong_length() {
        let err = SECP192R1.decode_field_element(&[0u8; 32]).unwrap_err();
        assert_eq!(
            err,
            crate::Error::Decode {
                expected: 24,
                actual: 32
            }
        );
    }
}
