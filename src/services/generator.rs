//! Sample generation behind an injectable source.
//!
//! Production runs draw from a `rand` RNG; tests and `--replay` runs plug in
//! a [`ScriptedSource`] so the aggregation path sees a known sequence.

use crate::domain::models::{SampleRange, SampleSequence};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

pub trait SampleSource {
    /// Draw one value. Range-honoring sources return a value in `range`.
    fn sample(&mut self, range: &SampleRange) -> i64;

    fn kind(&self) -> &'static str;
}

/// Uniform draws from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
    kind: &'static str,
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self {
            rng: rand::thread_rng(),
            kind: "thread_rng",
        }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            kind: "seeded",
        }
    }
}

impl<R: Rng> SampleSource for RngSource<R> {
    fn sample(&mut self, range: &SampleRange) -> i64 {
        self.rng.gen_range(range.min()..=range.max())
    }

    fn kind(&self) -> &'static str {
        self.kind
    }
}

/// Returns a fixed list of values in order, cycling once exhausted.
///
/// The requested range is ignored so fixtures can hold any value.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<i64>,
    index: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, index: 0 }
    }
}

impl SampleSource for ScriptedSource {
    fn sample(&mut self, range: &SampleRange) -> i64 {
        if self.values.is_empty() {
            return range.min();
        }
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }

    fn kind(&self) -> &'static str {
        "scripted"
    }
}

pub fn generate<S: SampleSource + ?Sized>(
    source: &mut S,
    count: usize,
    range: &SampleRange,
) -> SampleSequence {
    tracing::debug!(count, %range, source = source.kind(), "generating samples");
    (0..count).map(|_| source.sample(range)).collect()
}
