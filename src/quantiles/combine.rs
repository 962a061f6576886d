//! Cross-shard quantiles over several histograms
//!
//! [`combine`] concatenates the retained samples of every input and takes
//! the min/max across their exact extremes. The result is a read-only
//! [`CombinedHistogram`]; inputs are never modified.
//!
//! # Accuracy
//!
//! Samples are concatenated as-is, not re-weighted by each input's count.
//! An input that saw 1,000 values contributes as many samples as one that
//! saw 1,000,000, so low-volume shards are over-represented when volumes
//! differ widely.

use super::fast::FastHistogram;
use super::minmax::MinMax;
use super::rank;
use crate::traits::QuantileSketch;

/// Read-only union of several histograms' samples
///
/// Unlike [`FastHistogram`] its sample is not bounded by a capacity: it
/// holds every retained value of every input, sorted.
///
/// # Example
///
/// ```
/// use fasthist::quantiles::{combine, FastHistogram};
///
/// let mut a = FastHistogram::new();
/// let mut b = FastHistogram::new();
/// for i in 0..100 {
///     a.update(i as f64);
///     b.update((i + 100) as f64);
/// }
///
/// let merged = combine([&a, &b]);
/// assert_eq!(merged.len(), 200);
/// assert_eq!(merged.quantile(0.0), 0.0);
/// assert_eq!(merged.quantile(1.0), 199.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CombinedHistogram {
    /// Concatenated samples, sorted
    sorted: Vec<f64>,
    /// Extremes across all inputs
    extremes: MinMax,
}

impl CombinedHistogram {
    /// Estimate the value at quantile `phi`
    ///
    /// Same rules as [`FastHistogram::quantile`].
    pub fn quantile(&self, phi: f64) -> f64 {
        rank::nearest_rank(&self.sorted, &self.extremes, phi)
    }

    /// Append the estimate for each of `phis` to `dst`
    pub fn quantiles_into(&self, dst: &mut Vec<f64>, phis: &[f64]) {
        rank::nearest_ranks(&self.sorted, &self.extremes, dst, phis);
    }

    /// Estimate several quantiles at once
    pub fn quantiles(&self, phis: &[f64]) -> Vec<f64> {
        let mut dst = Vec::with_capacity(phis.len());
        self.quantiles_into(&mut dst, phis);
        dst
    }

    /// Number of retained values across all inputs
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Check if no input retained any value
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// All retained values, sorted ascending with NaN first
    pub fn sample(&self) -> &[f64] {
        &self.sorted
    }

    /// Smallest exact minimum across inputs
    pub fn min(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.extremes.min())
    }

    /// Largest exact maximum across inputs
    pub fn max(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.extremes.max())
    }
}

impl QuantileSketch for CombinedHistogram {
    fn quantile(&self, phi: f64) -> f64 {
        CombinedHistogram::quantile(self, phi)
    }

    fn quantiles_into(&self, dst: &mut Vec<f64>, phis: &[f64]) {
        CombinedHistogram::quantiles_into(self, dst, phis);
    }

    fn min(&self) -> Option<f64> {
        CombinedHistogram::min(self)
    }

    fn max(&self) -> Option<f64> {
        CombinedHistogram::max(self)
    }
}

/// Merge several histograms into a read-only view
pub fn combine<'a, I>(histograms: I) -> CombinedHistogram
where
    I: IntoIterator<Item = &'a FastHistogram>,
{
    let histograms: Vec<&FastHistogram> = histograms.into_iter().collect();
    let total: usize = histograms.iter().map(|h| h.sample().len()).sum();

    let mut sorted = Vec::with_capacity(total);
    let mut extremes = MinMax::new();
    for h in &histograms {
        sorted.extend_from_slice(h.sample());
        extremes.update_from_other(h.extremes());
    }
    rank::sort_samples(&mut sorted);

    tracing::trace!(inputs = histograms.len(), samples = total, "combined histograms");
    CombinedHistogram { sorted, extremes }
}

/// Estimate quantile `phi` across several histograms
pub fn quantile<'a, I>(histograms: I, phi: f64) -> f64
where
    I: IntoIterator<Item = &'a FastHistogram>,
{
    combine(histograms).quantile(phi)
}

/// Append estimates for each of `phis` across several histograms to `dst`
pub fn quantiles_into<'a, I>(histograms: I, dst: &mut Vec<f64>, phis: &[f64])
where
    I: IntoIterator<Item = &'a FastHistogram>,
{
    combine(histograms).quantiles_into(dst, phis);
}

/// Estimate several quantiles across several histograms
pub fn quantiles<'a, I>(histograms: I, phis: &[f64]) -> Vec<f64>
where
    I: IntoIterator<Item = &'a FastHistogram>,
{
    combine(histograms).quantiles(phis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lo: usize, hi: usize) -> FastHistogram {
        let mut h = FastHistogram::new();
        for i in lo..hi {
            h.update(i as f64);
        }
        h
    }

    #[test]
    fn test_combine_disjoint() {
        let h1 = range(0, 10_000);
        let h2 = range(10_000, 20_000);

        let q50 = quantile([&h1, &h2], 0.5);
        assert!((9000.0..=11000.0).contains(&q50), "p50={}", q50);

        let qs = quantiles([&h1, &h2], &[0.0, 0.5, 1.0]);
        assert_eq!(qs.len(), 3);
        assert_eq!(qs[0], 0.0);
        assert_eq!(qs[1], q50);
        assert_eq!(qs[2], 19999.0);
    }

    #[test]
    fn test_combine_is_not_resampled() {
        let h1 = range(0, 5000);
        let h2 = range(5000, 10_000);
        let merged = combine([&h1, &h2]);
        assert_eq!(merged.len(), h1.sample().len() + h2.sample().len());
        assert_eq!(merged.len(), 2000);
    }

    #[test]
    fn test_combine_leaves_inputs_untouched() {
        let h1 = range(0, 3000);
        let before = h1.sample().to_vec();
        let _ = combine([&h1, &h1]);
        assert_eq!(h1.sample(), before.as_slice());
        assert_eq!(h1.count(), 3000);
    }

    #[test]
    fn test_combine_empty() {
        let merged = combine(core::iter::empty::<&FastHistogram>());
        assert!(merged.is_empty());
        assert!(merged.quantile(0.5).is_nan());
        assert_eq!(merged.min(), None);

        let e1 = FastHistogram::new();
        let e2 = FastHistogram::new();
        assert!(quantile([&e1, &e2], 0.0).is_nan());
    }

    #[test]
    fn test_combine_with_empty_input() {
        let h = range(0, 100);
        let e = FastHistogram::new();
        let merged = combine(vec![&h, &e]);
        assert_eq!(merged.min(), Some(0.0));
        assert_eq!(merged.max(), Some(99.0));
        assert_eq!(merged.quantile(0.5), h.quantile(0.5));
    }

    #[test]
    fn test_combine_minmax() {
        let mut h1 = range(10, 20);
        let mut h2 = range(0, 5);
        h1.update(-7.5);
        h2.update(1e6);

        let merged = combine(&[h1, h2]);
        assert_eq!(merged.min(), Some(-7.5));
        assert_eq!(merged.max(), Some(1e6));
        assert_eq!(merged.quantile(0.0), -7.5);
        assert_eq!(merged.quantile(1.0), 1e6);
    }

    #[test]
    fn test_combine_sample_is_sorted() {
        let h1 = range(500, 1000);
        let h2 = range(0, 500);
        let merged = combine([&h1, &h2]);
        assert!(merged.sample().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_combine_single_pass_iterator() {
        let shards = [range(0, 100), range(100, 200)];
        let mut next = 0;
        let once = core::iter::from_fn(|| {
            let h = shards.get(next);
            next += 1;
            h
        });

        let merged = combine(once);
        assert_eq!(merged.len(), 200);
        assert_eq!(merged.min(), Some(0.0));
        assert_eq!(merged.max(), Some(199.0));

        let mut it = shards.iter();
        let q = quantile(core::iter::from_fn(move || it.next()), 1.0);
        assert_eq!(q, 199.0);
    }

    #[test]
    fn test_quantiles_into_appends() {
        let h = range(0, 10);
        let mut dst = vec![7.0];
        quantiles_into([&h], &mut dst, &[f64::NAN, 1.0]);
        assert_eq!(dst.len(), 3);
        assert_eq!(dst[0], 7.0);
        assert!(dst[1].is_nan());
        assert_eq!(dst[2], 9.0);
    }
}
