#![no_main]
// Arbitrary signatures and keys must decode and verify without panicking,
// and never surface an internal error.
use libfuzzer_sys::fuzz_target;
use weierstrass::{CurveId, Error};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let curve = CurveId::ALL[usize::from(selector) % CurveId::ALL.len()];
    let len = curve.curve().field_bytes();

    if rest.len() < 32 + 4 * len {
        return;
    }
    let (digest, rest) = rest.split_at(32);
    let digest: [u8; 32] = digest.try_into().unwrap();
    let (r, rest) = rest.split_at(len);
    let (s, rest) = rest.split_at(len);
    let (x, y) = rest.split_at(len);

    // Trailing bytes land in `y`, exercising the length check as well.
    match weierstrass::verify(curve, &digest, r, s, x, y) {
        Ok(_) => assert_eq!(y.len(), len),
        Err(Error::Decode { expected, actual }) => {
            assert_eq!(expected, len);
            assert_eq!(actual, y.len());
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
