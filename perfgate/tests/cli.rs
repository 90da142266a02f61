//! Tests for the `perfgate` binary.

use std::process::{Command, Output};

fn perfgate(args: &[&str], rust_log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_perfgate"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .env_remove("PERFGATE_P192_VERIFY_US")
        .env_remove("PERFGATE_P256_VERIFY_US")
        .output()
        .expect("failed to run perfgate")
}

#[test]
fn exempt_run_passes() {
    let output = perfgate(&[], "info");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Performance][ECDSA_P192_VERIFY_OP]: "));
    assert!(stdout.contains("[Performance][ECDSA_P256_VERIFY_OP]: "));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[Performance][ECDSA_P192_VERIFY_OP]: "), "{stderr}");
    assert!(stderr.contains("[Performance][ECDSA_P256_VERIFY_OP]: "), "{stderr}");
}

#[test]
fn zero_budget_fails_and_warns() {
    let output = perfgate(&["--p192-us", "0"], "warn");
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("secp192r1: over budget (0 us)"), "{stdout}");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ECDSA_P192_VERIFY_OP over budget"), "{stderr}");
    assert!(!stderr.contains("ECDSA_P256_VERIFY_OP over budget"), "{stderr}");
}

#[test]
fn unreadable_budget_file() {
    let output = perfgate(&["--budget", "/nonexistent/perfgate.json"], "off");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read /nonexistent/perfgate.json"), "{stderr}");
}
