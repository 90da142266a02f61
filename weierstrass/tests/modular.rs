//! Modular arithmetic tests.

use proptest::prelude::*;
use weierstrass::{BigInt, Error, Modulus, SECP192R1, SECP256R1};

/// 2^61 - 1
const M61: u64 = 0x1fff_ffff_ffff_ffff;

/// 2^127 - 1
const M127: u128 = (1 << 127) - 1;

fn from_u128(n: u128) -> BigInt {
    BigInt::from_be_slice(&n.to_be_bytes()).unwrap()
}

prop_compose! {
    fn wide()(bytes in any::<[u8; 32]>()) -> BigInt {
        BigInt::from_be_slice(&bytes).unwrap()
    }
}

proptest! {
    #[test]
    fn one_limb_matches_u128(a in 0..M61, b in 0..M61) {
        let m = Modulus::new(BigInt::from_u64(M61));
        let (a128, b128, m128) = (a as u128, b as u128, M61 as u128);
        let (x, y) = (BigInt::from_u64(a), BigInt::from_u64(b));

        prop_assert_eq!(m.add_mod(&x, &y), from_u128((a128 + b128) % m128));
        prop_assert_eq!(m.sub_mod(&x, &y), from_u128((a128 + m128 - b128) % m128));
        prop_assert_eq!(m.mul_mod(&x, &y), from_u128(a128 * b128 % m128));
    }

    #[test]
    fn two_limbs_match_u128(a in 0..M127, b in 0..M127) {
        let m = Modulus::new(from_u128(M127));
        let (x, y) = (from_u128(a), from_u128(b));

        prop_assert_eq!(m.add_mod(&x, &y), from_u128((a + b) % M127));
        prop_assert_eq!(m.sub_mod(&x, &y), from_u128((a + (M127 - b)) % M127));
    }

    #[test]
    fn inverse_is_inverse(x in wide()) {
        for m in [
            SECP192R1.field(),
            SECP192R1.order(),
            SECP256R1.field(),
            SECP256R1.order(),
        ] {
            let a = m.reduce(&x);
            prop_assume!(!a.is_zero());
            let inv = m.inv_mod(&a).unwrap();
            prop_assert_eq!(m.mul_mod(&a, &inv), BigInt::ONE);
        }
    }

    #[test]
    fn reduce_is_canonical(x in wide()) {
        for m in [SECP192R1.field(), SECP256R1.order()] {
            let r = m.reduce(&x);
            prop_assert!(m.contains(&r));
            prop_assert_eq!(m.reduce(&r), r);
        }
    }

    #[test]
    fn mul_distributes_over_add(a in wide(), b in wide(), c in wide()) {
        let m = SECP192R1.field();
        let (a, b, c) = (m.reduce(&a), m.reduce(&b), m.reduce(&c));
        prop_assert_eq!(
            m.mul_mod(&a, &m.add_mod(&b, &c)),
            m.add_mod(&m.mul_mod(&a, &b), &m.mul_mod(&a, &c))
        );
    }
}

#[test]
fn fermat_little_theorem() {
    let p = SECP256R1.field();
    let p_minus_1 = p.neg_mod(&BigInt::ONE);
    let base = BigInt::from_u64(0xdead_beef);
    assert_eq!(p.pow_vartime(&base, &p_minus_1), BigInt::ONE);
    assert_eq!(p.pow_vartime(&base, &BigInt::ZERO), BigInt::ONE);
}

#[test]
fn zero_is_not_invertible() {
    let n = SECP192R1.order();
    assert_eq!(n.inv_mod(&BigInt::ZERO), Err(Error::NotInvertible));
    assert_eq!(n.inv_mod(n.value()), Err(Error::NotInvertible));
}
