//! Named curves.
//!
//! Parameters are taken from [SP 800-186] § 3.2.1 (a.k.a. [FIPS 186-4]
//! § D.1.2): NIST P-192 and P-256.
//!
//! [SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
//! [FIPS 186-4]: https://csrc.nist.gov/publications/detail/fips/186/4/final

use crate::{BigInt, CurveGroup};
use core::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// NIST P-192 (a.k.a. secp192r1).
///
/// ```text
/// p  = 2¹⁹² − 2⁶⁴ − 1
/// a  = −3
/// b  = 0x64210519 e59c80e7 0fa7e9ab 72243049 feb8deec c146b9b1
/// n  = 0xffffffff ffffffff ffffffff 99def836 146bc9b1 b4d22831
/// Gₓ = 0x188da80e b03090f6 7cbf20eb 43a18800 f4ff0afd 82ff1012
/// Gᵧ = 0x07192b95 ffc8da78 631011ed 6b24cdd5 73f977a1 1e794811
/// ```
pub static SECP192R1: CurveGroup = CurveGroup::new(
    "secp192r1",
    BigInt::from_be_hex("fffffffffffffffffffffffffffffffeffffffffffffffff"),
    BigInt::from_be_hex("fffffffffffffffffffffffffffffffefffffffffffffffc"),
    BigInt::from_be_hex("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
    BigInt::from_be_hex("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
    (
        BigInt::from_be_hex("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
        BigInt::from_be_hex("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
    ),
);

/// NIST P-256 (a.k.a. secp256r1, prime256v1).
///
/// ```text
/// p  = 2²²⁴(2³² − 1) + 2¹⁹² + 2⁹⁶ − 1
/// a  = −3
/// b  = 0x5ac635d8 aa3a93e7 b3ebbd55 769886bc 651d06b0 cc53b0f6 3bce3c3e 27d2604b
/// n  = 0xffffffff 00000000 ffffffff ffffffff bce6faad a7179e84 f3b9cac2 fc632551
/// Gₓ = 0x6b17d1f2 e12c4247 f8bce6e5 63a440f2 77037d81 2deb33a0 f4a13945 d898c296
/// Gᵧ = 0x4fe342e2 fe1a7f9b 8ee7eb4a 7c0f9e16 2bce3357 6b315ece cbb64068 37bf51f5
/// ```
pub static SECP256R1: CurveGroup = CurveGroup::new(
    "secp256r1",
    BigInt::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    BigInt::from_be_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
    BigInt::from_be_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
    BigInt::from_be_hex("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
    (
        BigInt::from_be_hex("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        BigInt::from_be_hex("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    ),
);

/// Identifier of a supported curve.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveId {
    /// NIST P-192
    Secp192r1,

    /// NIST P-256
    Secp256r1,
}

impl CurveId {
    /// All supported curves.
    pub const ALL: [CurveId; 2] = [CurveId::Secp192r1, CurveId::Secp256r1];

    /// Curve group parameters.
    pub fn curve(self) -> &'static CurveGroup {
        match self {
            CurveId::Secp192r1 => &SECP192R1,
            CurveId::Secp256r1 => &SECP256R1,
        }
    }

    /// SEC 2 name of the curve.
    pub fn name(self) -> &'static str {
        self.curve().name()
    }

    /// Size of the curve's prime field in bits.
    pub fn bits(self) -> usize {
        self.curve().field().bits()
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized curve name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnknownCurve;

impl fmt::Display for UnknownCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown curve")
    }
}

impl core::error::Error for UnknownCurve {}

impl FromStr for CurveId {
    type Err = UnknownCurve;

    fn from_str(s: &str) -> Result<Self, UnknownCurve> {
        const P192: [&str; 4] = ["secp192r1", "p192", "p-192", "prime192v1"];
        const P256: [&str; 4] = ["secp256r1", "p256", "p-256", "prime256v1"];

        if P192.iter().any(|name| name.eq_ignore_ascii_case(s)) {
            Ok(CurveId::Secp192r1)
        } else if P256.iter().any(|name| name.eq_ignore_ascii_case(s)) {
            Ok(CurveId::Secp256r1)
        } else {
            Err(UnknownCurve)
        }
    }
}
