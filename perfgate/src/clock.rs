//! Elapsed-time sources.

use std::time::Instant;

/// Monotonic source of timestamps in microseconds.
///
/// Only differences between two readings are meaningful.
pub trait Clock {
    /// Current reading in microseconds.
    fn now_micros(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_micros(&self) -> u64 {
        (**self).now_micros()
    }
}

/// Wall clock backed by [`Instant`], counting from its own creation.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_micros(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_micros()).unwrap_or(u64::MAX)
    }
}
