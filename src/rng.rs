//! Injectable integer sources for sequence construction.
//!
//! The builder never reaches for global randomness directly; it draws from an
//! [`IntegerSource`] so tests can substitute deterministic sources without
//! patching shared state.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source with inclusive bounds.
pub trait IntegerSource {
    /// Returns a value in `[low, high]`.
    fn random_int(&mut self, low: i64, high: i64) -> i64;
}

/// Default source backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl IntegerSource for ThreadRngSource {
    fn random_int(&mut self, low: i64, high: i64) -> i64 {
        rand::rng().random_range(low..=high)
    }
}

/// Deterministic source wrapping `rand::StdRng` with a fixed seed.
///
/// Equal seeds yield equal draw sequences, so two builds from the same seed
/// produce identical structures.
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IntegerSource for SeededSource {
    fn random_int(&mut self, low: i64, high: i64) -> i64 {
        self.rng.random_range(low..=high)
    }
}

/// Fully predictable source for asserting flattened output.
///
/// Slot draws (`low == 0`) always land on the last slot, so the nested
/// continuation sits at the end of each level. Value draws ignore the
/// requested range and emit consecutive integers starting at 1. A build of
/// effective depth `D` therefore flattens to `1..=4*(D-1)+5` in order.
#[derive(Debug, Default)]
pub struct CountingSource {
    next: i64,
}

impl CountingSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IntegerSource for CountingSource {
    fn random_int(&mut self, low: i64, high: i64) -> i64 {
        if low == 0 {
            high
        } else {
            self.next += 1;
            self.next
        }
    }
}
