//! Exact running extremes, tracked independently of the sample
//!
//! Comparisons use plain IEEE semantics: any comparison against NaN is false,
//! so NaN never displaces a recorded minimum or maximum.

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MinMax {
    min: f64,
    max: f64,
}

impl Default for MinMax {
    fn default() -> Self {
        Self::new()
    }
}

impl MinMax {
    pub(crate) const fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    #[inline]
    pub(crate) fn update(&mut self, value: f64) {
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    pub(crate) fn update_from_other(&mut self, other: &MinMax) {
        if other.max > self.max {
            self.max = other.max;
        }
        if other.min < self.min {
            self.min = other.min;
        }
    }

    /// Raw minimum; `+inf` until a number is recorded
    pub(crate) fn min(&self) -> f64 {
        self.min
    }

    /// Raw maximum; `-inf` until a number is recorded
    pub(crate) fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let m = MinMax::new();
        assert_eq!(m.min(), f64::INFINITY);
        assert_eq!(m.max(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_single_value() {
        let mut m = MinMax::new();
        m.update(7.0);
        assert_eq!(m.min(), 7.0);
        assert_eq!(m.max(), 7.0);
    }

    #[test]
    fn test_nan_never_displaces() {
        let mut m = MinMax::new();
        m.update(f64::NAN);
        assert_eq!(m.min(), f64::INFINITY);
        assert_eq!(m.max(), f64::NEG_INFINITY);

        m.update(3.0);
        m.update(f64::NAN);
        m.update(-1.0);
        assert_eq!(m.min(), -1.0);
        assert_eq!(m.max(), 3.0);
    }

    #[test]
    fn test_infinities() {
        let mut m = MinMax::new();
        m.update(f64::NEG_INFINITY);
        m.update(f64::INFINITY);
        assert_eq!(m.min(), f64::NEG_INFINITY);
        assert_eq!(m.max(), f64::INFINITY);
    }

    #[test]
    fn test_update_from_other() {
        let mut m1 = MinMax::new();
        m1.update(5.0);
        m1.update(6.0);

        let mut m2 = MinMax::new();
        m2.update(1.0);
        m2.update(8.0);

        m1.update_from_other(&m2);
        assert_eq!(m1.min(), 1.0);
        assert_eq!(m1.max(), 8.0);

        m1.update_from_other(&MinMax::new());
        assert_eq!(m1.min(), 1.0);
        assert_eq!(m1.max(), 8.0);
    }
}
