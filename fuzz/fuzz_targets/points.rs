#![no_main]
// Group law consistency for points reached from fuzzed scalars.
use libfuzzer_sys::fuzz_target;
use weierstrass::{AffinePoint, BigInt, CurveId};

fuzz_target!(|data: &[u8]| {
    if data.len() < 65 {
        return;
    }

    let curve = CurveId::ALL[usize::from(data[0]) % CurveId::ALL.len()].curve();
    let n = curve.order();
    let k1 = n.reduce(&BigInt::from_be_slice(&data[1..33]).unwrap());
    let k2 = n.reduce(&BigInt::from_be_slice(&data[33..65]).unwrap());

    let g = curve.generator();
    let p1 = curve.scalar_multiply(&k1, g);
    let p2 = curve.scalar_multiply(&k2, g);
    assert!(curve.is_on_curve(&p1));

    // Projective and affine group laws agree.
    let sum = curve.add(&p1, &p2);
    assert_eq!(curve.scalar_multiply(&n.add_mod(&k1, &k2), g), sum);
    assert_eq!(curve.lincomb(&k1, g, &k2, g), sum);
    assert_eq!(curve.add(&p1, &p1), curve.double(&p1));
    assert_eq!(curve.add(&sum, &curve.negate(&sum)), AffinePoint::IDENTITY);

    // Encoding round trip.
    if let Ok((x, y)) = curve.encode_point(&p1) {
        assert_eq!(curve.decode_point(x.as_slice(), y.as_slice()).unwrap(), p1);
    }
});
