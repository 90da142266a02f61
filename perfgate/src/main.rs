use clap::Parser;
use env_logger::Env;
use perfgate::{PerfBudget, PerfGate, Result, VerificationRequest};
use std::{fs, path::PathBuf, process::ExitCode};
use weierstrass::CurveId;

/// Verify the built-in P-192 and P-256 signatures and check each
/// verification against its time budget.
///
/// Budgets are read from `PERFGATE_P192_VERIFY_US` and
/// `PERFGATE_P256_VERIFY_US`, then overridden by `--budget` and finally by
/// the per-curve flags. A curve without a budget is only checked for
/// correctness.
///
/// Measurements are logged at `info` level and budget overruns at `warn`;
/// set `RUST_LOG` to change the filter.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON file mapping curve names to microseconds
    #[arg(short, long)]
    budget: Option<PathBuf>,
    /// P-192 budget in microseconds
    #[arg(long)]
    p192_us: Option<u64>,
    /// P-256 budget in microseconds
    #[arg(long)]
    p256_us: Option<u64>,
    /// Number of timed verifications per curve
    #[arg(short, long, default_value_t = 1)]
    repeat: u32,
}

impl Cli {
    fn budget(&self) -> Result<PerfBudget> {
        let mut budget = PerfBudget::from_env()?;

        if let Some(path) = &self.budget {
            let json = fs::read_to_string(path).map_err(|source| perfgate::Error::Io {
                path: path.clone(),
                source,
            })?;
            budget.merge(&PerfBudget::from_json_str(&json)?);
        }

        for (curve, flag) in [
            (CurveId::Secp192r1, self.p192_us),
            (CurveId::Secp256r1, self.p256_us),
        ] {
            if let Some(micros) = flag {
                budget = budget.with_limit(curve, micros);
            }
        }

        Ok(budget)
    }

    fn run(&self) -> Result<bool> {
        let gate = PerfGate::new(self.budget()?);
        let mut passed = true;

        for curve in CurveId::ALL {
            let request = VerificationRequest::builtin(curve);
            for _ in 0..self.repeat {
                let report = gate.verify(&request)?;
                println!("{report}");

                if !report.verification.is_valid() {
                    println!("{curve}: signature {}", report.verification);
                }
                if let Some(limit) = report.limit_us.filter(|_| !report.within_budget) {
                    println!("{curve}: over budget ({limit} us)");
                }
                passed &= report.passed();
            }
        }

        Ok(passed)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
