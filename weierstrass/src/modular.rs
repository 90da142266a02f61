//! Modular arithmetic modulo an odd runtime modulus.
//!
//! All public operations take and return canonical residues in `[0, m)`.
//! Multiplication is implemented with Montgomery reduction over the number of
//! limbs the modulus actually spans, so a 192-bit modulus works on three
//! words and a 256-bit one on four.

use crate::{
    BigInt, Error, Result,
    uint::{LIMBS, WORD_BITS, Word, adc, mac, sbb},
};

/// An odd modulus `m > 1` together with its Montgomery constants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Modulus {
    value: BigInt,
    bits: usize,

    /// Number of limbs spanned by `value`; fixes `R = 2^(64·limbs)`.
    limbs: usize,

    /// `-m⁻¹ mod 2⁶⁴`
    m_inv: Word,

    /// `R mod m`, i.e. one in Montgomery form
    r: BigInt,

    /// `R² mod m`
    r2: BigInt,

    /// `m - 2`, the Fermat inversion exponent
    m_minus_2: BigInt,
}

impl Modulus {
    /// Precompute the Montgomery constants for `value`.
    ///
    /// Panics if `value` is even or not greater than one; in `const` context
    /// this is a compile-time error.
    pub const fn new(value: BigInt) -> Self {
        assert!(value.is_odd(), "modulus must be odd");
        assert!(value.bits() > 1, "modulus must be greater than one");

        let bits = value.bits();
        let limbs = bits.div_ceil(WORD_BITS);

        // Newton iteration: each step doubles the number of correct low bits.
        let m0 = value.limb(0);
        let mut inv: Word = 1;
        let mut i = 0;
        while i < 6 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(m0.wrapping_mul(inv)));
            i += 1;
        }

        let mut r = BigInt::ONE;
        let mut i = 0;
        while i < limbs * WORD_BITS {
            r = add_inner(&r, &r, &value);
            i += 1;
        }

        let mut r2 = r;
        let mut i = 0;
        while i < limbs * WORD_BITS {
            r2 = add_inner(&r2, &r2, &value);
            i += 1;
        }

        Self {
            value,
            bits,
            limbs,
            m_inv: inv.wrapping_neg(),
            r,
            r2,
            m_minus_2: value.borrowing_sub(&BigInt::from_u64(2)).0,
        }
    }

    /// The modulus itself.
    pub const fn value(&self) -> &BigInt {
        &self.value
    }

    /// Bit length of the modulus.
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Byte length of the modulus, i.e. the fixed encoding width of residues.
    pub const fn byte_len(&self) -> usize {
        self.bits.div_ceil(8)
    }

    /// Is `x` a canonical residue, i.e. `x < m`?
    pub fn contains(&self, x: &BigInt) -> bool {
        *x < self.value
    }

    /// Returns `a + b mod m`.
    ///
    /// Operands outside `[0, m)` are reduced first.
    pub fn add_mod(&self, a: &BigInt, b: &BigInt) -> BigInt {
        add_inner(&self.reduce(a), &self.reduce(b), &self.value)
    }

    /// Returns `a - b mod m`.
    ///
    /// Operands outside `[0, m)` are reduced first.
    pub fn sub_mod(&self, a: &BigInt, b: &BigInt) -> BigInt {
        sub_inner(&self.reduce(a), &self.reduce(b), &self.value)
    }

    /// Returns `-a mod m`.
    pub fn neg_mod(&self, a: &BigInt) -> BigInt {
        self.sub_mod(&BigInt::ZERO, a)
    }

    /// Returns `a * b mod m`.
    ///
    /// Operands outside `[0, m)` are reduced first.
    pub fn mul_mod(&self, a: &BigInt, b: &BigInt) -> BigInt {
        // (a·b·R⁻¹)·R²·R⁻¹ = a·b
        let ab = self.mont_mul(&self.reduce(a), &self.reduce(b));
        self.mont_mul(&ab, &self.r2)
    }

    /// Returns `a⁻¹ mod m`.
    ///
    /// Uses Fermat's little theorem, so the modulus must be prime.
    pub fn inv_mod(&self, a: &BigInt) -> Result<BigInt> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::NotInvertible);
        }
        Ok(self.invert_vartime(&a))
    }

    /// Returns `base^exp mod m`.
    ///
    /// **This operation is variable time with respect to the exponent.**
    pub fn pow_vartime(&self, base: &BigInt, exp: &BigInt) -> BigInt {
        let base = self.to_montgomery(&self.reduce(base));
        let mut acc = self.r;
        for i in (0..exp.bits()).rev() {
            acc = self.mont_mul(&acc, &acc);
            if exp.bit(i) {
                acc = self.mont_mul(&acc, &base);
            }
        }
        self.from_montgomery(&acc)
    }

    /// Reduces an arbitrary value into `[0, m)`.
    pub fn reduce(&self, x: &BigInt) -> BigInt {
        if self.contains(x) {
            return *x;
        }

        // Binary long division, most significant bit first.
        let mut rem = BigInt::ZERO;
        for i in (0..x.bits()).rev() {
            rem = add_inner(&rem, &rem, &self.value);
            if x.bit(i) {
                rem = add_inner(&rem, &BigInt::ONE, &self.value);
            }
        }
        rem
    }

    /// Inverse of a reduced, non-zero `a`. Maps zero to zero.
    pub(crate) fn invert_vartime(&self, a: &BigInt) -> BigInt {
        self.pow_vartime(a, &self.m_minus_2)
    }

    /// `a·R mod m`
    pub(crate) fn to_montgomery(&self, a: &BigInt) -> BigInt {
        self.mont_mul(&self.reduce(a), &self.r2)
    }

    /// `a·R⁻¹ mod m`
    pub(crate) fn from_montgomery(&self, a: &BigInt) -> BigInt {
        self.mont_mul(a, &BigInt::ONE)
    }

    /// One in Montgomery form.
    pub(crate) const fn montgomery_one(&self) -> &BigInt {
        &self.r
    }

    /// Montgomery product `a·b·R⁻¹ mod m` of reduced operands.
    pub(crate) fn mont_mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        let n = self.limbs;
        let mut wide = [0; 2 * LIMBS];

        // Schoolbook multiplication.
        for i in 0..n {
            let mut carry = 0;
            for j in 0..n {
                let (w, c) = mac(wide[i + j], a.limb(i), b.limb(j), carry);
                wide[i + j] = w;
                carry = c;
            }
            wide[i + n] = carry;
        }

        self.montgomery_reduce(&wide)
    }

    /// Montgomery reduction of a double-width value `t < m·R`.
    fn montgomery_reduce(&self, wide: &[Word; 2 * LIMBS]) -> BigInt {
        let n = self.limbs;
        let m = &self.value;

        let mut r = [0; LIMBS + 1];
        r[..n].copy_from_slice(&wide[..n]);

        for i in 0..n {
            let u = r[0].wrapping_mul(self.m_inv);
            let (_, mut carry) = mac(r[0], u, m.limb(0), 0);
            for j in 1..n {
                let (w, c) = mac(r[j], u, m.limb(j), carry);
                r[j - 1] = w;
                carry = c;
            }
            let (w, c) = adc(wide[i + n], r[n], carry);
            r[n - 1] = w;
            r[n] = c;
        }

        // r < 2m: subtract m once unless that underflows.
        let mut diff = [0; LIMBS];
        let mut borrow = 0;
        for (j, d) in diff.iter_mut().enumerate() {
            let (w, b) = sbb(r[j], m.limb(j), borrow);
            *d = w;
            borrow = b;
        }
        let (_, borrow) = sbb(r[LIMBS], 0, borrow);

        let candidate = BigInt::from_limbs([r[0], r[1], r[2], r[3]]);
        BigInt::select(&BigInt::from_limbs(diff), &candidate, borrow)
    }
}

/// `a + b mod m` for `a, b < m`.
const fn add_inner(a: &BigInt, b: &BigInt, m: &BigInt) -> BigInt {
    let (sum, carry) = a.overflowing_add(b);
    let (diff, borrow) = sum.borrowing_sub(m);
    // Keep the plain sum only if it neither overflowed nor reached m.
    let keep_sum = borrow & carry.wrapping_sub(1);
    BigInt::select(&diff, &sum, keep_sum)
}

/// `a - b mod m` for `a, b < m`.
const fn sub_inner(a: &BigInt, b: &BigInt, m: &BigInt) -> BigInt {
    let (diff, borrow) = a.borrowing_sub(b);
    let (wrapped, _) = diff.overflowing_add(m);
    BigInt::select(&diff, &wrapped, borrow)
}
