//! Fixed-capacity unsigned big integers.
//!
//! [`BigInt`] stores up to 256 bits as little-endian 64-bit limbs. It has no
//! notion of a modulus: the working width of modular operations is decided by
//! the [`Modulus`][`crate::Modulus`] they run under.

use crate::{Error, Result};
use core::{cmp::Ordering, fmt};
use subtle::{Choice, ConstantTimeEq};

pub(crate) type Word = u64;
pub(crate) type DoubleWord = u128;
pub(crate) const WORD_BITS: usize = Word::BITS as usize;
const WORD_BYTES: usize = WORD_BITS / 8;

/// Number of limbs in a [`BigInt`].
pub const LIMBS: usize = 4;

/// Largest encoded size of a [`BigInt`] in bytes.
pub const MAX_BYTES: usize = LIMBS * WORD_BYTES;

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let ret = (a as DoubleWord) + (b as DoubleWord) + (carry as DoubleWord);
    (ret as Word, (ret >> WORD_BITS) as Word)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
///
/// The borrow is a mask: either `0` or `Word::MAX`.
#[inline(always)]
pub(crate) const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let t = (borrow >> (WORD_BITS - 1)) as DoubleWord;
    let ret = (a as DoubleWord).wrapping_sub((b as DoubleWord) + t);
    (ret as Word, (ret >> WORD_BITS) as Word)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: Word, b: Word, c: Word, carry: Word) -> (Word, Word) {
    let ret = (a as DoubleWord) + (b as DoubleWord) * (c as DoubleWord) + (carry as DoubleWord);
    (ret as Word, (ret >> WORD_BITS) as Word)
}

/// Unsigned integer of at most 256 bits.
#[derive(Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct BigInt {
    limbs: [Word; LIMBS],
}

impl BigInt {
    /// Zero.
    pub const ZERO: Self = Self { limbs: [0; LIMBS] };

    /// One.
    pub const ONE: Self = Self::from_u64(1);

    /// Create a [`BigInt`] from a `u64`.
    pub const fn from_u64(n: u64) -> Self {
        let mut limbs = [0; LIMBS];
        limbs[0] = n;
        Self { limbs }
    }

    pub(crate) const fn from_limbs(limbs: [Word; LIMBS]) -> Self {
        Self { limbs }
    }

    pub(crate) const fn limb(&self, i: usize) -> Word {
        self.limbs[i]
    }

    /// Parse a big-endian hex string of at most 64 digits.
    ///
    /// Intended for curve constants: panics (at compile time, in `const`
    /// context) on a non-hex digit or an over-long string.
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(bytes.len() <= MAX_BYTES * 2, "hex string too long");

        let mut limbs = [0; LIMBS];
        let mut i = 0;
        while i < bytes.len() {
            let nibble = match bytes[bytes.len() - 1 - i] {
                b @ b'0'..=b'9' => b - b'0',
                b @ b'a'..=b'f' => b - b'a' + 10,
                b @ b'A'..=b'F' => b - b'A' + 10,
                _ => panic!("invalid hex digit"),
            };
            limbs[i / 16] |= (nibble as Word) << ((i % 16) * 4);
            i += 1;
        }
        Self { limbs }
    }

    /// Decode a big-endian byte string of at most [`MAX_BYTES`] bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_BYTES {
            return Err(Error::Decode {
                expected: MAX_BYTES,
                actual: bytes.len(),
            });
        }

        let mut limbs = [0; LIMBS];
        for (i, byte) in bytes.iter().rev().enumerate() {
            limbs[i / WORD_BYTES] |= Word::from(*byte) << ((i % WORD_BYTES) * 8);
        }
        Ok(Self { limbs })
    }

    /// Encode as exactly `len` big-endian bytes, left-padded with zeros.
    pub fn to_be_bytes(&self, len: usize) -> Result<FieldBytes> {
        if len > MAX_BYTES || self.bits() > len * 8 {
            return Err(Error::Encode);
        }

        let mut out = FieldBytes {
            bytes: [0; MAX_BYTES],
            len,
        };
        for (i, byte) in out.bytes[..len].iter_mut().rev().enumerate() {
            *byte = (self.limbs[i / WORD_BYTES] >> ((i % WORD_BYTES) * 8)) as u8;
        }
        Ok(out)
    }

    /// Number of significant bits.
    pub const fn bits(&self) -> usize {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if self.limbs[i] != 0 {
                return i * WORD_BITS + (WORD_BITS - self.limbs[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Value of bit `i` (bit 0 is the least significant).
    pub const fn bit(&self, i: usize) -> bool {
        if i >= LIMBS * WORD_BITS {
            return false;
        }
        (self.limbs[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1
    }

    /// Is this value zero?
    pub const fn is_zero(&self) -> bool {
        let mut acc = 0;
        let mut i = 0;
        while i < LIMBS {
            acc |= self.limbs[i];
            i += 1;
        }
        acc == 0
    }

    /// Is this value odd?
    pub const fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Logical right shift.
    pub const fn shr(&self, shift: usize) -> Self {
        let words = shift / WORD_BITS;
        let bits = shift % WORD_BITS;

        let mut limbs = [0; LIMBS];
        let mut i = 0;
        while i + words < LIMBS {
            let lo = self.limbs[i + words] >> bits;
            let hi = if bits > 0 && i + words + 1 < LIMBS {
                self.limbs[i + words + 1] << (WORD_BITS - bits)
            } else {
                0
            };
            limbs[i] = lo | hi;
            i += 1;
        }
        Self { limbs }
    }

    /// Computes `self + rhs`, returning the wrapped sum and the carry (0 or 1).
    pub(crate) const fn overflowing_add(&self, rhs: &Self) -> (Self, Word) {
        let mut limbs = [0; LIMBS];
        let mut carry = 0;
        let mut i = 0;
        while i < LIMBS {
            let (w, c) = adc(self.limbs[i], rhs.limbs[i], carry);
            limbs[i] = w;
            carry = c;
            i += 1;
        }
        (Self { limbs }, carry)
    }

    /// Computes `self - rhs`, returning the wrapped difference and the borrow
    /// mask (`0` or `Word::MAX`).
    pub(crate) const fn borrowing_sub(&self, rhs: &Self) -> (Self, Word) {
        let mut limbs = [0; LIMBS];
        let mut borrow = 0;
        let mut i = 0;
        while i < LIMBS {
            let (w, b) = sbb(self.limbs[i], rhs.limbs[i], borrow);
            limbs[i] = w;
            borrow = b;
            i += 1;
        }
        (Self { limbs }, borrow)
    }

    /// Returns `b` where `mask` is all ones and `a` where it is zero.
    pub(crate) const fn select(a: &Self, b: &Self, mask: Word) -> Self {
        let mut limbs = [0; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            limbs[i] = a.limbs[i] ^ (mask & (a.limbs[i] ^ b.limbs[i]));
            i += 1;
        }
        Self { limbs }
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .iter()
            .rev()
            .zip(other.limbs.iter().rev())
            .map(|(a, b)| a.cmp(b))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ConstantTimeEq for BigInt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs
            .iter()
            .zip(other.limbs.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt(0x{self:x})")
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            write!(f, "{limb:016X}")?;
        }
        Ok(())
    }
}

/// Fixed-length big-endian encoding of a [`BigInt`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldBytes {
    bytes: [u8; MAX_BYTES],
    len: usize,
}

impl FieldBytes {
    /// Encoded bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the encoding empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for FieldBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::{BigInt, MAX_BYTES};
    use crate::Error;
    use hex_literal::hex;

    #[test]
    fn hex_matches_bytes() {
        let bytes = hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012");
        let a = BigInt::from_be_hex("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012");
        let b = BigInt::from_be_slice(&bytes).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_be_bytes(24).unwrap().as_slice(), &bytes);
    }

    #[test]
    fn leading_zeros_round_trip() {
        let bytes = hex!("00661474e00644666f3b8c3b2d05f6d5b25de4856c6138c5b121de2b44f51362");
        let n = BigInt::from_be_slice(&bytes).unwrap();
        assert_eq!(n.bits(), 247);
        assert_eq!(n.to_be_bytes(32).unwrap().as_slice(), &bytes);
    }

    #[test]
    fn encode_too_short() {
        let n = BigInt::from_be_hex("0100");
        assert_eq!(n.to_be_bytes(1), Err(Error::Encode));
        assert_eq!(n.to_be_bytes(2).unwrap().as_slice(), &[1, 0]);
    }

    #[test]
    fn decode_too_long() {
        let bytes = [0u8; MAX_BYTES + 1];
        assert_eq!(
            BigInt::from_be_slice(&bytes),
            Err(Error::Decode {
                expected: MAX_BYTES,
                actual: MAX_BYTES + 1
            })
        );
    }

    #[test]
    fn shifts() {
        let n = BigInt::from_be_hex("8000000000000000000000000000000000000000000000000000000000000001");
        assert_eq!(n.shr(255), BigInt::ONE);
        assert_eq!(n.shr(64), BigInt::from_be_hex("800000000000000000000000000000000000000000000000"));
        assert_eq!(n.shr(256), BigInt::ZERO);
        assert_eq!(n.shr(0), n);
    }

    #[test]
    fn bits_and_parity() {
        assert_eq!(BigInt::ZERO.bits(), 0);
        assert_eq!(BigInt::ONE.bits(), 1);
        assert!(BigInt::ONE.is_odd());
        assert!(BigInt::from_u64(1 << 63).bit(63));
        assert!(!BigInt::from_u64(1 << 63).bit(62));
        assert!(!BigInt::ONE.bit(1000));
    }

    #[test]
    fn ordering_uses_high_limbs() {
        let small = BigInt::from_be_hex("ffffffffffffffff");
        let large = BigInt::from_be_hex("010000000000000000");
        assert!(small < large);
        assert_eq!(large.cmp(&large), core::cmp::Ordering::Equal);
    }

    #[test]
    fn add_and_sub_carry() {
        let max = BigInt::from_be_hex(
            "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        );
        let (sum, carry) = max.overflowing_add(&BigInt::ONE);
        assert_eq!((sum, carry), (BigInt::ZERO, 1));

        let (diff, borrow) = BigInt::ZERO.borrowing_sub(&BigInt::ONE);
        assert_eq!((diff, borrow), (max, u64::MAX));
    }
}
