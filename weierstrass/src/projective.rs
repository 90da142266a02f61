//! Projective curve points.
//!
//! Homogeneous coordinates `(X : Y : Z)` with `x = X/Z`, `y = Y/Z`, stored in
//! Montgomery form. The identity is `(0 : 1 : 0)`. Addition and doubling use
//! the exception-free formulas of [Renes-Costello-Batina 2015] for arbitrary
//! `a`, so no operand needs special casing.
//!
//! [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060

use crate::{AffinePoint, BigInt, Modulus};

#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: BigInt,
    y: BigInt,
    z: BigInt,
}

/// Point arithmetic for one curve: the base field and the curve equation
/// coefficients converted to Montgomery form.
pub(crate) struct PointArithmetic<'a> {
    field: &'a Modulus,
    a: BigInt,
    b3: BigInt,
}

impl<'a> PointArithmetic<'a> {
    pub(crate) fn new(field: &'a Modulus, a: &BigInt, b: &BigInt) -> Self {
        let b3 = field.add_mod(&field.add_mod(b, b), b);
        Self {
            field,
            a: field.to_montgomery(a),
            b3: field.to_montgomery(&b3),
        }
    }

    pub(crate) fn identity(&self) -> ProjectivePoint {
        ProjectivePoint {
            x: BigInt::ZERO,
            y: *self.field.montgomery_one(),
            z: BigInt::ZERO,
        }
    }

    pub(crate) fn from_affine(&self, p: &AffinePoint) -> ProjectivePoint {
        match p.coordinates() {
            None => self.identity(),
            Some((x, y)) => ProjectivePoint {
                x: self.field.to_montgomery(x),
                y: self.field.to_montgomery(y),
                z: *self.field.montgomery_one(),
            },
        }
    }

    pub(crate) fn to_affine(&self, p: &ProjectivePoint) -> AffinePoint {
        let f = self.field;
        let z = f.from_montgomery(&p.z);
        if z.is_zero() {
            return AffinePoint::IDENTITY;
        }

        let zinv = f.invert_vartime(&z);
        AffinePoint::from_coordinates(
            f.mul_mod(&f.from_montgomery(&p.x), &zinv),
            f.mul_mod(&f.from_montgomery(&p.y), &zinv),
        )
    }

    /// Implements complete addition for any curve
    ///
    /// Algorithm 1 of Renes-Costello-Batina 2015. The comments after each line
    /// indicate which algorithm steps are being performed.
    pub(crate) fn add(&self, lhs: &ProjectivePoint, rhs: &ProjectivePoint) -> ProjectivePoint {
        let f = self.field;
        let mul = |a: &BigInt, b: &BigInt| f.mont_mul(a, b);
        let add = |a: &BigInt, b: &BigInt| f.add_mod(a, b);
        let sub = |a: &BigInt, b: &BigInt| f.sub_mod(a, b);

        let t0 = mul(&lhs.x, &rhs.x); // 1
        let t1 = mul(&lhs.y, &rhs.y); // 2
        let t2 = mul(&lhs.z, &rhs.z); // 3
        let t3 = add(&lhs.x, &lhs.y); // 4
        let t4 = add(&rhs.x, &rhs.y); // 5
        let t3 = mul(&t3, &t4); // 6
        let t4 = add(&t0, &t1); // 7
        let t3 = sub(&t3, &t4); // 8
        let t4 = add(&lhs.x, &lhs.z); // 9
        let t5 = add(&rhs.x, &rhs.z); // 10
        let t4 = mul(&t4, &t5); // 11
        let t5 = add(&t0, &t2); // 12
        let t4 = sub(&t4, &t5); // 13
        let t5 = add(&lhs.y, &lhs.z); // 14
        let x3 = add(&rhs.y, &rhs.z); // 15
        let t5 = mul(&t5, &x3); // 16
        let x3 = add(&t1, &t2); // 17
        let t5 = sub(&t5, &x3); // 18
        let z3 = mul(&self.a, &t4); // 19
        let x3 = mul(&self.b3, &t2); // 20
        let z3 = add(&x3, &z3); // 21
        let x3 = sub(&t1, &z3); // 22
        let z3 = add(&t1, &z3); // 23
        let y3 = mul(&x3, &z3); // 24
        let t1 = add(&t0, &t0); // 25
        let t1 = add(&t1, &t0); // 26
        let t2 = mul(&self.a, &t2); // 27
        let t4 = mul(&self.b3, &t4); // 28
        let t1 = add(&t1, &t2); // 29
        let t2 = sub(&t0, &t2); // 30
        let t2 = mul(&self.a, &t2); // 31
        let t4 = add(&t4, &t2); // 32
        let t0 = mul(&t1, &t4); // 33
        let y3 = add(&y3, &t0); // 34
        let t0 = mul(&t5, &t4); // 35
        let x3 = mul(&t3, &x3); // 36
        let x3 = sub(&x3, &t0); // 37
        let t0 = mul(&t3, &t1); // 38
        let z3 = mul(&t5, &z3); // 39
        let z3 = add(&z3, &t0); // 40

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Implements point doubling for curves with any `a`
    ///
    /// Algorithm 3 of Renes-Costello-Batina 2015.
    pub(crate) fn double(&self, point: &ProjectivePoint) -> ProjectivePoint {
        let f = self.field;
        let mul = |a: &BigInt, b: &BigInt| f.mont_mul(a, b);
        let add = |a: &BigInt, b: &BigInt| f.add_mod(a, b);
        let sub = |a: &BigInt, b: &BigInt| f.sub_mod(a, b);

        let t0 = mul(&point.x, &point.x); // 1
        let t1 = mul(&point.y, &point.y); // 2
        let t2 = mul(&point.z, &point.z); // 3
        let t3 = mul(&point.x, &point.y); // 4
        let t3 = add(&t3, &t3); // 5
        let z3 = mul(&point.x, &point.z); // 6
        let z3 = add(&z3, &z3); // 7
        let x3 = mul(&self.a, &z3); // 8
        let y3 = mul(&self.b3, &t2); // 9
        let y3 = add(&x3, &y3); // 10
        let x3 = sub(&t1, &y3); // 11
        let y3 = add(&t1, &y3); // 12
        let y3 = mul(&x3, &y3); // 13
        let x3 = mul(&t3, &x3); // 14
        let z3 = mul(&self.b3, &z3); // 15
        let t2 = mul(&self.a, &t2); // 16
        let t3 = sub(&t0, &t2); // 17
        let t3 = mul(&self.a, &t3); // 18
        let t3 = add(&t3, &z3); // 19
        let z3 = add(&t0, &t0); // 20
        let t0 = add(&z3, &t0); // 21
        let t0 = add(&t0, &t2); // 22
        let t0 = mul(&t0, &t3); // 23
        let y3 = add(&y3, &t0); // 24
        let t2 = mul(&point.y, &point.z); // 25
        let t2 = add(&t2, &t2); // 26
        let t0 = mul(&t2, &t3); // 27
        let x3 = sub(&x3, &t0); // 28
        let z3 = mul(&t2, &t1); // 29
        let z3 = add(&z3, &z3); // 30
        let z3 = add(&z3, &z3); // 31

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `[k] p` by left-to-right double-and-add.
    ///
    /// **This operation is variable time with respect to `k`.** Only public
    /// scalars (such as the ECDSA verification coefficients) may be used.
    pub(crate) fn mul_vartime(&self, p: &ProjectivePoint, k: &BigInt) -> ProjectivePoint {
        let mut acc = self.identity();
        for i in (0..k.bits()).rev() {
            acc = self.double(&acc);
            if k.bit(i) {
                acc = self.add(&acc, p);
            }
        }
        acc
    }

    /// Returns `[k1] p1 + [k2] p2` with a single shared doubling chain
    /// (Shamir's trick).
    ///
    /// **This operation is variable time with respect to `k1` and `k2`.**
    pub(crate) fn lincomb_vartime(
        &self,
        p1: &ProjectivePoint,
        k1: &BigInt,
        p2: &ProjectivePoint,
        k2: &BigInt,
    ) -> ProjectivePoint {
        let both = self.add(p1, p2);
        let mut acc = self.identity();
        for i in (0..k1.bits().max(k2.bits())).rev() {
            acc = self.double(&acc);
            match (k1.bit(i), k2.bit(i)) {
                (true, true) => acc = self.add(&acc, &both),
                (true, false) => acc = self.add(&acc, p1),
                (false, true) => acc = self.add(&acc, p2),
                (false, false) => (),
            }
        }
        acc
    }
}
