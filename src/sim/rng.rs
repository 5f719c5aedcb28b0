//! Seed-threaded random values
//!
//! Every random draw in the crate is a [`SeededValue`]: a deterministic
//! computation from a seed to a value plus the successor seed. Sequencing
//! two computations feeds the left one's output seed into the right one,
//! which is the sole ordering mechanism for randomness — running the same
//! pipeline from the same seed reproduces bit-identical output.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Opaque deterministic RNG state. Consuming a draw always yields a new seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed(Pcg32);

impl Seed {
    pub fn from_u64(n: u64) -> Self {
        Seed(Pcg32::seed_from_u64(n))
    }
}

/// A deterministic computation `Seed -> (T, Seed)`.
///
/// Built from the primitive draws [`int_in`] and [`float_in`] and composed
/// with [`map`](Self::map), [`and_then`](Self::and_then),
/// [`zip`](Self::zip), and [`sequence`].
pub struct SeededValue<T> {
    step: Box<dyn FnOnce(Seed) -> (T, Seed)>,
}

impl<T: 'static> SeededValue<T> {
    pub fn new(f: impl FnOnce(Seed) -> (T, Seed) + 'static) -> Self {
        Self { step: Box::new(f) }
    }

    /// A computation that yields `value` without consuming the seed.
    pub fn constant(value: T) -> Self {
        Self::new(move |seed| (value, seed))
    }

    /// Run the computation, returning the value and the successor seed.
    pub fn run(self, seed: Seed) -> (T, Seed) {
        (self.step)(seed)
    }

    /// Run the computation and discard the successor seed.
    pub fn eval(self, seed: Seed) -> T {
        self.run(seed).0
    }

    pub fn map<U: 'static>(self, f: impl FnOnce(T) -> U + 'static) -> SeededValue<U> {
        SeededValue::new(move |seed| {
            let (value, next) = self.run(seed);
            (f(value), next)
        })
    }

    pub fn and_then<U: 'static>(
        self,
        f: impl FnOnce(T) -> SeededValue<U> + 'static,
    ) -> SeededValue<U> {
        SeededValue::new(move |seed| {
            let (value, next) = self.run(seed);
            f(value).run(next)
        })
    }

    /// Sequence two computations, pairing their results (self draws first).
    pub fn zip<U: 'static>(self, other: SeededValue<U>) -> SeededValue<(T, U)> {
        SeededValue::new(move |seed| {
            let (t, seed) = self.run(seed);
            let (u, seed) = other.run(seed);
            ((t, u), seed)
        })
    }
}

/// Run each computation in order, collecting the results.
pub fn sequence<T: 'static>(items: Vec<SeededValue<T>>) -> SeededValue<Vec<T>> {
    SeededValue::new(move |mut seed| {
        let mut values = Vec::with_capacity(items.len());
        for item in items {
            let (value, next) = item.run(seed);
            values.push(value);
            seed = next;
        }
        (values, seed)
    })
}

/// Uniform integer draw in `[lo, hi]` (inclusive).
pub fn int_in(lo: u32, hi: u32) -> SeededValue<u32> {
    SeededValue::new(move |mut seed| {
        let value = seed.0.random_range(lo..=hi);
        (value, seed)
    })
}

/// Uniform float draw between `lo` and `hi`.
///
/// Implemented as a lerp of a unit draw, so reversed endpoints (the speed
/// range for large tiers) still yield a uniform draw between the two values.
pub fn float_in(lo: f32, hi: f32) -> SeededValue<f32> {
    SeededValue::new(move |mut seed| {
        let u: f32 = seed.0.random();
        (lo + (hi - lo) * u, seed)
    })
}
