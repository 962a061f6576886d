//! Error types for fasthist
//!
//! Ingest and query never fail: degenerate input yields a NaN estimate.
//! The only fallible step is building a histogram or pool from configuration.

use thiserror::Error;

/// Error raised when a [`HistogramConfig`](crate::config::HistogramConfig)
/// cannot be used to build a histogram
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Reservoir capacity was zero
    #[error("reservoir capacity must be positive")]
    ZeroCapacity,

    /// Reservoir capacity exceeds the supported maximum
    #[error("reservoir capacity {found} exceeds maximum of {max}")]
    CapacityTooLarge {
        /// Requested capacity
        found: usize,
        /// Largest accepted capacity
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigError::ZeroCapacity.to_string(),
            "reservoir capacity must be positive"
        );
        let err = ConfigError::CapacityTooLarge { found: 10, max: 5 };
        assert_eq!(err.to_string(), "reservoir capacity 10 exceeds maximum of 5");
    }
}
