//! Performance gate tests with a deterministic clock.

use perfgate::{Clock, Error, PerfBudget, PerfGate, VerificationRequest};
use std::cell::Cell;
use weierstrass::{CurveId, Verification};

/// Clock advancing by a fixed step on every reading.
struct StepClock {
    now: Cell<u64>,
    step: u64,
}

impl StepClock {
    fn new(step: u64) -> Self {
        Self {
            now: Cell::new(1_000),
            step,
        }
    }
}

impl Clock for StepClock {
    fn now_micros(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

fn gate(step: u64, budget: PerfBudget) -> PerfGate<StepClock> {
    PerfGate::with_clock(budget, StepClock::new(step))
}

fn p256_budget(micros: u64) -> PerfBudget {
    PerfBudget::new().with_limit(CurveId::Secp256r1, micros)
}

#[test]
fn within_budget() {
    let report = gate(10, p256_budget(100))
        .verify(&VerificationRequest::builtin(CurveId::Secp256r1))
        .unwrap();

    assert_eq!(report.verification, Verification::Valid);
    assert_eq!(report.elapsed_us, 10);
    assert_eq!(report.limit_us, Some(100));
    assert!(report.within_budget);
    assert!(report.passed());
    assert_eq!(report.to_string(), "[Performance][ECDSA_P256_VERIFY_OP]: 10 us");
}

#[test]
fn correct_but_slow() {
    let report = gate(500, p256_budget(100))
        .verify(&VerificationRequest::builtin(CurveId::Secp256r1))
        .unwrap();

    assert_eq!(report.verification, Verification::Valid);
    assert_eq!(report.elapsed_us, 500);
    assert!(!report.within_budget);
    assert!(!report.passed());
}

#[test]
fn limit_is_exclusive() {
    let report = gate(100, p256_budget(100))
        .verify(&VerificationRequest::builtin(CurveId::Secp256r1))
        .unwrap();
    assert!(!report.within_budget);
}

#[test]
fn curve_without_budget_is_exempt() {
    let report = gate(1_000_000, p256_budget(1))
        .verify(&VerificationRequest::builtin(CurveId::Secp192r1))
        .unwrap();

    assert_eq!(report.verification, Verification::Valid);
    assert_eq!(report.limit_us, None);
    assert!(report.within_budget);
    assert_eq!(report.to_string(), "[Performance][ECDSA_P192_VERIFY_OP]: 1000000 us");
}

#[test]
fn invalid_but_fast() {
    let mut request = VerificationRequest::builtin(CurveId::Secp256r1);
    request.digest[0] ^= 0x80;

    let report = gate(10, p256_budget(100)).verify(&request).unwrap();
    assert_eq!(report.verification, Verification::Invalid);
    assert!(report.within_budget);
    assert!(!report.passed());
}

#[test]
fn decode_error_is_not_timed() {
    let clock = StepClock::new(10);
    let gate = PerfGate::with_clock(p256_budget(100), &clock);

    let mut request = VerificationRequest::builtin(CurveId::Secp256r1);
    request.x.pop();

    let err = gate.verify(&request).unwrap_err();
    assert!(matches!(
        err,
        Error::Verify(weierstrass::Error::Decode {
            expected: 32,
            actual: 31
        })
    ));
    assert_eq!(clock.now_micros(), 1_000);
}

#[test]
fn measure_runs_operation_once() {
    let calls = Cell::new(0);
    let measurement = gate(7, PerfBudget::new()).measure_and_check(CurveId::Secp192r1, || {
        calls.set(calls.get() + 1);
        "done"
    });

    assert_eq!(calls.get(), 1);
    assert_eq!(measurement.output, "done");
    assert_eq!(measurement.elapsed_us, 7);
    assert!(measurement.within_budget);
}

#[test]
fn both_curves_from_one_budget() {
    let budget = PerfBudget::from_json_str(r#"{"secp192r1": 50, "secp256r1": 20}"#).unwrap();
    let gate = gate(30, budget);

    let p192 = gate.verify(&VerificationRequest::builtin(CurveId::Secp192r1)).unwrap();
    let p256 = gate.verify(&VerificationRequest::builtin(CurveId::Secp256r1)).unwrap();

    assert!(p192.passed());
    assert!(p256.verification.is_valid());
    assert!(!p256.passed());
}
