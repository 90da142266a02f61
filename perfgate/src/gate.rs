//! Timed verification checked against a [`PerfBudget`].

use crate::{Clock, PerfBudget, Result, SystemClock};
use core::fmt;
use log::{info, warn};
use weierstrass::{
    CurveId, Digest, Signature, Verification, VerifyingKey,
    test_vectors::{DIGEST, P192_VERIFY, P256_VERIFY, TestVector},
};

/// Name under which the verification time of `curve` is reported.
pub fn metric_name(curve: CurveId) -> &'static str {
    match curve {
        CurveId::Secp192r1 => "ECDSA_P192_VERIFY_OP",
        CurveId::Secp256r1 => "ECDSA_P256_VERIFY_OP",
    }
}

/// Result of [`PerfGate::measure_and_check`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Measurement<T> {
    /// Value returned by the measured operation.
    pub output: T,

    /// Elapsed time in microseconds.
    pub elapsed_us: u64,

    /// Budget the measurement was checked against, if any.
    pub limit_us: Option<u64>,

    /// Was `elapsed_us` strictly below the limit? Always `true` when exempt.
    pub within_budget: bool,
}

/// One verification to run: a curve, a 32-byte digest and the fixed-length
/// big-endian encodings of `r`, `s` and the public key coordinates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationRequest {
    /// Curve to verify on.
    pub curve: CurveId,

    /// Message digest.
    pub digest: Digest,

    /// Signature `r` component.
    pub r: Vec<u8>,

    /// Signature `s` component.
    pub s: Vec<u8>,

    /// Public key x-coordinate.
    pub x: Vec<u8>,

    /// Public key y-coordinate.
    pub y: Vec<u8>,
}

impl VerificationRequest {
    /// Built-in scenario for `curve`: a known-good signature over a fixed
    /// SHA-256 digest.
    pub fn builtin(curve: CurveId) -> Self {
        let vector = match curve {
            CurveId::Secp192r1 => &P192_VERIFY,
            CurveId::Secp256r1 => &P256_VERIFY,
        };
        Self::from_vector(curve, DIGEST, vector)
    }

    fn from_vector(curve: CurveId, digest: Digest, vector: &TestVector) -> Self {
        Self {
            curve,
            digest,
            r: vector.r.to_vec(),
            s: vector.s.to_vec(),
            x: vector.q_x.to_vec(),
            y: vector.q_y.to_vec(),
        }
    }
}

/// Functional and performance outcome of one verification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Report {
    /// Curve the verification ran on.
    pub curve: CurveId,

    /// Functional outcome.
    pub verification: Verification,

    /// Time spent in the verification call, in microseconds.
    pub elapsed_us: u64,

    /// Budget for the curve, if any.
    pub limit_us: Option<u64>,

    /// Was the verification strictly faster than the budget?
    pub within_budget: bool,
}

impl Report {
    /// Valid signature and within budget.
    pub fn passed(&self) -> bool {
        self.verification.is_valid() && self.within_budget
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Performance][{}]: {} us",
            metric_name(self.curve),
            self.elapsed_us
        )
    }
}

/// Times operations and checks them against a per-curve budget.
#[derive(Clone, Debug, Default)]
pub struct PerfGate<C = SystemClock> {
    budget: PerfBudget,
    clock: C,
}

impl PerfGate<SystemClock> {
    /// Gate measuring wall-clock time.
    pub fn new(budget: PerfBudget) -> Self {
        Self::with_clock(budget, SystemClock::new())
    }
}

impl<C: Clock> PerfGate<C> {
    /// Gate reading elapsed time from `clock`.
    pub fn with_clock(budget: PerfBudget, clock: C) -> Self {
        Self { budget, clock }
    }

    /// Budget in effect.
    pub fn budget(&self) -> &PerfBudget {
        &self.budget
    }

    /// Run `op` exactly once between two clock readings and compare the
    /// elapsed time with the budget for `curve`.
    pub fn measure_and_check<T, F>(&self, curve: CurveId, op: F) -> Measurement<T>
    where
        F: FnOnce() -> T,
    {
        let start = self.clock.now_micros();
        let output = op();
        let end = self.clock.now_micros();

        let elapsed_us = end.saturating_sub(start);
        let limit_us = self.budget.limit(curve);
        let within_budget = limit_us.is_none_or(|limit| elapsed_us < limit);

        Measurement {
            output,
            elapsed_us,
            limit_us,
            within_budget,
        }
    }

    /// Decode `request`, then time the verification alone.
    ///
    /// Malformed input is an error; an invalid signature or an exceeded
    /// budget is reported in the returned [`Report`].
    pub fn verify(&self, request: &VerificationRequest) -> Result<Report> {
        let curve = request.curve.curve();
        let signature = Signature::from_bytes(curve, &request.r, &request.s)?;
        let key = VerifyingKey::from_affine_coordinates(curve, &request.x, &request.y)?;

        let measurement = self.measure_and_check(request.curve, || {
            key.verify_digest(&request.digest, &signature)
        });

        let report = Report {
            curve: request.curve,
            verification: measurement.output?,
            elapsed_us: measurement.elapsed_us,
            limit_us: measurement.limit_us,
            within_budget: measurement.within_budget,
        };

        info!("{report}");
        if let Some(limit) = report.limit_us.filter(|_| !report.within_budget) {
            warn!(
                "{} over budget: {} us (limit {} us)",
                metric_name(report.curve),
                report.elapsed_us,
                limit
            );
        }

        Ok(report)
    }
}
