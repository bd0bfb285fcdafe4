// Random sources consumed by the board generators

use rand::Rng;

/// Source of uniform random numbers used when generating boards.
///
/// Every `rand::Rng` is a `RandomSource`, so `rand::thread_rng()` or a seeded
/// `StdRng` can be passed straight to the generators. Tests can use
/// [`SequenceSource`] to script exact draws.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Next uniform index in `[0, bound)`. `bound` must be positive.
    fn next_index(&mut self, bound: usize) -> usize {
        let scaled = (self.next_unit() * bound as f64) as usize;
        scaled.min(bound.saturating_sub(1))
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.gen_range(0..bound)
    }
}

/// Deterministic source that replays a fixed list of draws, cycling forever
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Values are clamped into `[0, 1)`; an empty list always yields `0.0`
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, ONE_MINUS_EPSILON) })
            .collect();
        Self { values, position: 0 }
    }

    /// Source that always returns the same draw
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.position
    }
}

const ONE_MINUS_EPSILON: f64 = 1.0 - f64::EPSILON;

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.position += 1;
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
