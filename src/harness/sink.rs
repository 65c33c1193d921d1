//! Anti-elision sink for timed loops.

use std::hint::black_box;

/// Consumes kernel output so the optimizer cannot drop a timed call.
///
/// The last element of each consumed `y` goes through [`black_box`] and
/// into a running total that the bench reports when it finishes.
#[derive(Debug, Clone, Default)]
pub struct Sink {
    total: f64,
    samples: u64,
}

impl Sink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the final element of `y`. An empty `y` only counts a sample.
    #[inline]
    pub fn consume(&mut self, y: &[f64]) {
        if let Some(&last) = y.last() {
            self.total += black_box(last);
        }
        self.samples += 1;
    }

    /// Sum of every consumed final element.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of [`consume`](Self::consume) calls.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Mean of the consumed final elements, `None` before the first sample.
    pub fn mean(&self) -> Option<f64> {
        (self.samples > 0).then(|| self.total / self.samples as f64)
    }
}
