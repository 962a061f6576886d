//! Sorting and nearest-rank lookup shared by histograms and merged views

use super::minmax::MinMax;
use core::cmp::Ordering;

/// Ascending order with every NaN placed before every number
#[inline]
fn nan_first(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort samples in place for rank lookups
pub(crate) fn sort_samples(values: &mut [f64]) {
    values.sort_unstable_by(nan_first);
}

/// Nearest-rank quantile over an already sorted sample
///
/// `phi` at or beyond the unit interval returns the exact extremes rather
/// than the sample's own first or last element.
pub(crate) fn nearest_rank(sorted: &[f64], extremes: &MinMax, phi: f64) -> f64 {
    if sorted.is_empty() || phi.is_nan() {
        return f64::NAN;
    }
    if phi <= 0.0 {
        return extremes.min();
    }
    if phi >= 1.0 {
        return extremes.max();
    }
    let last = sorted.len() - 1;
    // Round half up, then clamp.
    let idx = ((phi * last as f64 + 0.5) as usize).min(last);
    sorted[idx]
}

/// Evaluate each of `phis` against one sorted sample, appending to `dst`
pub(crate) fn nearest_ranks(sorted: &[f64], extremes: &MinMax, dst: &mut Vec<f64>, phis: &[f64]) {
    dst.reserve(phis.len());
    dst.extend(phis.iter().map(|&phi| nearest_rank(sorted, extremes, phi)));
}
