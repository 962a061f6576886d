//! Reservoir-backed histogram for fast percentile estimates
//!
//! [`FastHistogram`] keeps a uniform random sample of at most `capacity`
//! raw values (Algorithm R) together with the exact count, minimum and
//! maximum of everything it has seen. Percentile queries sort a copy of the
//! sample and pick the nearest rank.
//!
//! # Thread Safety
//!
//! `FastHistogram` is `Send` but **not `Sync`**: queries reuse an internal
//! scratch buffer behind a `RefCell`. Share one instance across threads only
//! behind a `Mutex`, or hand it between workers through a
//! [`HistogramPool`](crate::pool::HistogramPool).

use super::minmax::MinMax;
use super::rank;
use crate::config::HistogramConfig;
use crate::error::ConfigError;
use crate::sampling::ReservoirSampler;
use crate::traits::{QuantileSketch, SamplingSketch, Sketch};
use core::cell::RefCell;

/// Streaming histogram with bounded memory
///
/// Memory is bounded by the reservoir capacity regardless of how many
/// values are recorded. Results are reproducible: after
/// [`reset`](Self::reset), replaying the same values yields bit-identical
/// quantiles.
///
/// # Example
///
/// ```
/// use fasthist::quantiles::FastHistogram;
///
/// let mut h = FastHistogram::new();
/// for i in 0..10_000 {
///     h.update(i as f64);
/// }
///
/// assert_eq!(h.quantile(0.0), 0.0);
/// assert_eq!(h.quantile(1.0), 9999.0);
///
/// let p50 = h.quantile(0.5);
/// assert!(p50 > 4000.0 && p50 < 6000.0);
/// ```
#[derive(Debug)]
pub struct FastHistogram {
    /// Retained values and total count
    sampler: ReservoirSampler<f64>,
    /// Exact extremes over every recorded value
    extremes: MinMax,
    /// Sorted copy of the sample, rebuilt on every query
    scratch: RefCell<Vec<f64>>,
}

impl Clone for FastHistogram {
    fn clone(&self) -> Self {
        Self {
            sampler: self.sampler.clone(),
            extremes: self.extremes,
            scratch: RefCell::new(Vec::new()),
        }
    }
}

impl Default for FastHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl FastHistogram {
    /// Create an empty histogram with the default capacity and seed
    pub fn new() -> Self {
        let cfg = HistogramConfig::default();
        Self::from_parts(cfg.capacity, cfg.seed)
    }

    /// Create an empty histogram from a config
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config fails
    /// [`HistogramConfig::validate`].
    pub fn with_config(config: &HistogramConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config.capacity, config.seed))
    }

    /// Build without validation; callers hold an already validated config
    pub(crate) fn from_parts(capacity: usize, seed: u64) -> Self {
        Self {
            sampler: ReservoirSampler::with_seed(capacity, seed),
            extremes: MinMax::new(),
            scratch: RefCell::new(Vec::new()),
        }
    }

    /// Record one observation
    ///
    /// NaN is counted and may be sampled, but never becomes the minimum or
    /// maximum.
    #[inline]
    pub fn update(&mut self, value: f64) {
        self.extremes.update(value);
        self.sampler.add(value);
    }

    /// Estimate the value at quantile `phi`
    ///
    /// Returns NaN if nothing was recorded or `phi` is NaN. `phi <= 0`
    /// returns the exact minimum, `phi >= 1` the exact maximum.
    pub fn quantile(&self, phi: f64) -> f64 {
        let mut scratch = self.scratch.borrow_mut();
        self.load_sorted(&mut scratch);
        rank::nearest_rank(&scratch, &self.extremes, phi)
    }

    /// Append the estimate for each of `phis` to `dst`
    ///
    /// The sample is sorted once for the whole batch.
    pub fn quantiles_into(&self, dst: &mut Vec<f64>, phis: &[f64]) {
        let mut scratch = self.scratch.borrow_mut();
        self.load_sorted(&mut scratch);
        rank::nearest_ranks(&scratch, &self.extremes, dst, phis);
    }

    /// Estimate several quantiles at once
    pub fn quantiles(&self, phis: &[f64]) -> Vec<f64> {
        let mut dst = Vec::with_capacity(phis.len());
        self.quantiles_into(&mut dst, phis);
        dst
    }

    fn load_sorted(&self, scratch: &mut Vec<f64>) {
        scratch.clear();
        scratch.extend_from_slice(self.sampler.sample());
        rank::sort_samples(scratch);
    }

    /// Return to the freshly constructed state
    ///
    /// The sampler is reseeded to its configured seed. If anything had been
    /// sampled, the sample and scratch allocations are released.
    pub fn reset(&mut self) {
        if !self.sampler.is_empty() {
            let released = self.size_bytes();
            *self.scratch.get_mut() = Vec::new();
            tracing::trace!(released_bytes = released, "histogram reset released sample memory");
        }
        self.sampler.clear();
        self.extremes = MinMax::new();
    }

    /// Total number of values recorded since construction or reset
    pub fn count(&self) -> u64 {
        self.sampler.items_seen()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Exact minimum, if any value was recorded
    ///
    /// `Some(+inf)` if only NaN values were recorded.
    pub fn min(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.extremes.min())
    }

    /// Exact maximum, if any value was recorded
    ///
    /// `Some(-inf)` if only NaN values were recorded.
    pub fn max(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.extremes.max())
    }

    /// Retained values in sampler order
    pub fn sample(&self) -> &[f64] {
        self.sampler.sample()
    }

    /// Maximum number of retained values
    pub fn capacity(&self) -> usize {
        self.sampler.capacity()
    }

    /// Probability that any given recorded value is in the sample
    pub fn sampling_probability(&self) -> f64 {
        self.sampler.sampling_probability()
    }

    /// Heap memory held by the sample and the scratch buffer
    pub fn size_bytes(&self) -> usize {
        self.sampler.size_bytes()
            + self.scratch.borrow().capacity() * core::mem::size_of::<f64>()
    }

    pub(crate) fn seed(&self) -> u64 {
        self.sampler.seed()
    }

    pub(crate) fn extremes(&self) -> &MinMax {
        &self.extremes
    }
}

impl Sketch for FastHistogram {
    type Item = f64;

    fn update(&mut self, item: &f64) {
        FastHistogram::update(self, *item);
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn size_bytes(&self) -> usize {
        FastHistogram::size_bytes(self)
    }

    fn count(&self) -> u64 {
        FastHistogram::count(self)
    }
}

impl QuantileSketch for FastHistogram {
    fn quantile(&self, phi: f64) -> f64 {
        FastHistogram::quantile(self, phi)
    }

    fn quantiles_into(&self, dst: &mut Vec<f64>, phis: &[f64]) {
        FastHistogram::quantiles_into(self, dst, phis);
    }

    fn min(&self) -> Option<f64> {
        FastHistogram::min(self)
    }

    fn max(&self) -> Option<f64> {
        FastHistogram::max(self)
    }
}

impl SamplingSketch for FastHistogram {
    type Sample = f64;

    fn sample(&self) -> &[f64] {
        FastHistogram::sample(self)
    }

    fn capacity(&self) -> usize {
        FastHistogram::capacity(self)
    }
}
