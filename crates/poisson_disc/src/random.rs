//! Random number source used by the sampler.
//!
//! Every random draw of the algorithm goes through [`RandomSource::random_range`], so
//! tests can swap in a deterministic source without touching the sampling loop.
use rand::Rng;

/// Source of uniformly distributed integer steps in a half-open range.
pub trait RandomSource {
    /// Returns `floor(u * (max - min)) + min` for a uniform `u` in `[0, 1)`.
    ///
    /// For integer bounds this is a uniformly distributed integer in `[min, max)`.
    fn random_range(&mut self, min: f32, max: f32) -> f32;

    /// Returns a uniformly distributed index in `[0, len)`; `len` must be non-zero.
    fn random_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "random_index requires a non-empty range");
        let idx = self.random_range(0.0, len as f32);
        (idx.max(0.0) as usize).min(len - 1)
    }
}

impl<F> RandomSource for F
where
    F: FnMut(f32, f32) -> f32,
{
    #[inline]
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self(min, max)
    }
}

/// Adapts any [`Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        let span = f64::from(max) - f64::from(min);
        ((rand01(&mut self.rng) * span).floor() + f64::from(min)) as f32
    }

    #[inline]
    fn random_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "random_index requires a non-empty range");
        ((rand01(&mut self.rng) * len as f64) as usize).min(len - 1)
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // 53 random mantissa bits keep the upper bound exclusive.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}
