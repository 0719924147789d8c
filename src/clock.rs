//! Monotonic high-resolution clock abstraction.

use crate::error::Error;
use std::time::Instant;

/// A monotonic tick source with a fixed frequency.
///
/// The engine records one tick value per completed read and converts tick
/// deltas to seconds through [`frequency`](MonotonicClock::frequency).
/// Keeping the clock behind a trait lets tests replay a scripted tick
/// sequence and get bit-identical throughput figures on every run.
pub trait MonotonicClock {
    /// Ticks per second, or [`Error::ClockUnavailable`] if the platform has
    /// no usable high-resolution counter.
    fn frequency(&self) -> Result<u64, Error>;

    /// Current tick count. Never decreases over the lifetime of the clock.
    fn now(&self) -> u64;
}

/// Clock backed by [`std::time::Instant`].
///
/// Ticks are nanoseconds elapsed since the clock was created, so the
/// frequency is exactly 1 GHz.
#[derive(Debug)]
pub struct PerfClock {
    origin: Instant,
}

const NANOS_PER_SEC: u64 = 1_000_000_000;

impl PerfClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for PerfClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for PerfClock {
    fn frequency(&self) -> Result<u64, Error> {
        Ok(NANOS_PER_SEC)
    }

    fn now(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}
