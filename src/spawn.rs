//! Randomness used when spawning particles.
//!
//! Field construction draws every random attribute through [`RandomSource`].
//! Any [`rand::Rng`] works as a source, so production code just hands in
//! `rand::thread_rng()`. Tests use [`SequenceSource`] to pin every draw.

use rand::Rng;

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Next sample, uniformly distributed in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Sample uniformly in `[min, min + span)`.
    ///
    /// `span` may be zero or negative; the result is then simply
    /// `min + u * span`, with no range check.
    #[inline]
    fn span(&mut self, min: f32, span: f32) -> f32 {
        min + self.unit() * span
    }
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.gen()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
///
/// ```ignore
/// let mut src = SequenceSource::new(vec![0.0, 0.5]);
/// assert_eq!(src.unit(), 0.0);
/// assert_eq!(src.unit(), 0.5);
/// assert_eq!(src.unit(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Values outside `[0, 1)` are clamped into it. An empty list behaves
    /// like a constant `0.0`.
    pub fn new(values: Vec<f32>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}
