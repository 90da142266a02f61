//! Per-curve elapsed-time budgets.

use crate::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, env};
use weierstrass::CurveId;

/// Environment variable holding the budget for each curve, in microseconds.
pub const ENV_VARS: [(CurveId, &str); 2] = [
    (CurveId::Secp192r1, "PERFGATE_P192_VERIFY_US"),
    (CurveId::Secp256r1, "PERFGATE_P256_VERIFY_US"),
];

/// Maximum elapsed time, in microseconds, allowed for one verification on
/// each curve. Curves without an entry are exempt from the check.
///
/// The JSON form is an object keyed by curve name:
///
/// ```json
/// { "secp192r1": 15000, "secp256r1": 20000 }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PerfBudget {
    limits: BTreeMap<CurveId, u64>,
}

impl PerfBudget {
    /// Budget with no entries: every curve is exempt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit for `curve`.
    pub fn with_limit(mut self, curve: CurveId, micros: u64) -> Self {
        self.limits.insert(curve, micros);
        self
    }

    /// Limit for `curve`, if any.
    pub fn limit(&self, curve: CurveId) -> Option<u64> {
        self.limits.get(&curve).copied()
    }

    /// Is there no limit at all?
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Override entries of `self` with those present in `other`.
    pub fn merge(&mut self, other: &PerfBudget) {
        self.limits.extend(other.limits.iter().map(|(k, v)| (*k, *v)));
    }

    /// Parse the JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read [`ENV_VARS`] from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read [`ENV_VARS`] through `lookup`. Unset variables leave the curve
    /// exempt; values which are not unsigned integers are an error.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut budget = Self::new();
        for (curve, var) in ENV_VARS {
            let Some(value) = lookup(var) else {
                continue;
            };
            let micros = value
                .trim()
                .parse()
                .map_err(|_| Error::InvalidEnv { var, value })?;
            debug!("{var}: {curve} budget {micros} us");
            budget.limits.insert(curve, micros);
        }
        Ok(budget)
    }
}
