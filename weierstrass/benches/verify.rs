//! ECDSA verification benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use std::hint::black_box;
use weierstrass::{CurveGroup, SECP192R1, SECP256R1, Signature, VerifyingKey};

const DIGEST: [u8; 32] = hex!("0caa08b4f089d345bb5598d9c2e9655d7ea3a9c3cd69b1cf91be5810fe80656e");

fn bench_verify<'a, M: Measurement>(
    group: &mut BenchmarkGroup<'a, M>,
    name: &str,
    curve: &'static CurveGroup,
    (x, y): (&[u8], &[u8]),
    (r, s): (&[u8], &[u8]),
) {
    let key = VerifyingKey::from_affine_coordinates(curve, x, y).unwrap();
    let sig = Signature::from_bytes(curve, r, s).unwrap();
    group.bench_function(name, |b| {
        b.iter(|| key.verify_digest(black_box(&DIGEST), black_box(&sig)))
    });
}

fn bench_scalar_multiply<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let curve = &SECP256R1;
    let k = curve.order().neg_mod(&weierstrass::BigInt::ONE);
    group.bench_function("P-256 scalar_multiply", |b| {
        b.iter(|| curve.scalar_multiply(black_box(&k), curve.generator()))
    });
}

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECDSA verification");
    bench_verify(
        &mut group,
        "P-192",
        &SECP192R1,
        (
            &hex!("d03f6fe75daaf4c01e637b82ab2333347459565d21109cb1"),
            &hex!("85fc76cb65bcc4be7409fdf374dcc2de7e4b23ad465c87c2"),
        ),
        (
            &hex!("2b8a182fb27526b71ce1e26daae7742c42c8d5094fb7ee9f"),
            &hex!("1a74b405f428a5b6ceeda5ffa860062ff6eb245924305b12"),
        ),
    );
    bench_verify(
        &mut group,
        "P-256",
        &SECP256R1,
        (
            &hex!("cb59de9cbb28aaac7206c3432a6582cc68017668fcecf591d19ebfcf677d7dbe"),
            &hex!("00661474e00644666f3b8c3b2d05f6d5b25de4856c6138c5b121de2b44f51362"),
        ),
        (
            &hex!("261a0fbda5e51ee7b3c3b709d14a7a2a16694baf765cd40e9357b867f9a1e5e8"),
            &hex!("6359c03b6ac2c4c4af475ce66d433ba7915115627e460e6884ce72a0d88b69d5"),
        ),
    );
    bench_scalar_multiply(&mut group);
    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
