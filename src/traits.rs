//! Core traits for streaming histograms
//!
//! Mutable estimators implement [`Sketch`]. Anything that can answer
//! percentile queries, including read-only merged views, implements
//! [`QuantileSketch`].

use core::fmt::Debug;

/// Core trait for mutable streaming sketches
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Heap memory held by the sketch in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Percentile queries over `f64` observations
///
/// Queries never fail. An empty sketch or a NaN `phi` yields `f64::NAN`;
/// `phi <= 0` yields the exact minimum and `phi >= 1` the exact maximum.
pub trait QuantileSketch {
    /// Estimate the value at quantile `phi`
    fn quantile(&self, phi: f64) -> f64;

    /// Append the estimate for each of `phis` to `dst`, in order
    ///
    /// Results are identical to calling [`quantile`](Self::quantile) once per
    /// entry; implementations only share the sorting work.
    fn quantiles_into(&self, dst: &mut Vec<f64>, phis: &[f64]);

    /// Estimate several quantiles at once
    fn quantiles(&self, phis: &[f64]) -> Vec<f64> {
        let mut dst = Vec::with_capacity(phis.len());
        self.quantiles_into(&mut dst, phis);
        dst
    }

    /// Exact minimum seen, if any value was observed
    fn min(&self) -> Option<f64>;

    /// Exact maximum seen, if any value was observed
    fn max(&self) -> Option<f64>;

    /// Get median (50th percentile)
    fn median(&self) -> f64 {
        self.quantile(0.5)
    }
}

/// Sketches backed by a bounded random sample
pub trait SamplingSketch {
    /// The sampled item type
    type Sample;

    /// Get current sample
    fn sample(&self) -> &[Self::Sample];

    /// Sample size limit
    fn capacity(&self) -> usize;

    /// Current sample size
    fn sample_size(&self) -> usize {
        self.sample().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default)]
    struct Sorted(Vec<f64>);

    impl QuantileSketch for Sorted {
        fn quantile(&self, phi: f64) -> f64 {
            if self.0.is_empty() || phi.is_nan() {
                return f64::NAN;
            }
            let idx = (phi.clamp(0.0, 1.0) * (self.0.len() - 1) as f64).round() as usize;
            self.0[idx]
        }

        fn quantiles_into(&self, dst: &mut Vec<f64>, phis: &[f64]) {
            dst.extend(phis.iter().map(|&phi| self.quantile(phi)));
        }

        fn min(&self) -> Option<f64> {
            self.0.first().copied()
        }

        fn max(&self) -> Option<f64> {
            self.0.last().copied()
        }
    }

    #[test]
    fn test_default_methods() {
        let s = Sorted(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(s.median(), 3.0);
        assert_eq!(s.quantiles(&[0.0, 1.0]), vec![1.0, 5.0]);
    }

    #[test]
    fn test_quantiles_appends() {
        let s = Sorted(vec![1.0, 2.0]);
        let mut dst = vec![42.0];
        s.quantiles_into(&mut dst, &[0.0, 1.0]);
        assert_eq!(dst, vec![42.0, 1.0, 2.0]);
    }
}
