#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

mod budget;
mod clock;
mod error;
mod gate;

pub use crate::{
    budget::{ENV_VARS, PerfBudget},
    clock::{Clock, SystemClock},
    error::{Error, Result},
    gate::{Measurement, PerfGate, Report, VerificationRequest, metric_name},
};
pub use weierstrass;
