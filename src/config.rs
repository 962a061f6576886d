//! Configuration for histograms and histogram pools
//!
//! Both structs are plain values with builder-style setters. With the `serde`
//! feature enabled they can be embedded in an application config file; any
//! field left out takes its default.

use crate::error::ConfigError;

/// Default number of raw values retained per histogram
pub const DEFAULT_CAPACITY: usize = 1000;

/// Largest accepted reservoir capacity
///
/// Queries sort the full reservoir, so very large reservoirs turn every
/// percentile read into a multi-megabyte sort.
pub const MAX_CAPACITY: usize = 1 << 24;

/// Seed the sampler returns to on every reset
pub const DEFAULT_SEED: u64 = 1;

/// Default number of idle histograms a pool keeps around
pub const DEFAULT_MAX_IDLE: usize = 64;

/// Settings for a single [`FastHistogram`](crate::quantiles::FastHistogram)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HistogramConfig {
    /// Maximum number of raw values retained (K)
    pub capacity: usize,
    /// Sampler seed restored on construction and on every reset
    pub seed: u64,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            seed: DEFAULT_SEED,
        }
    }
}

impl HistogramConfig {
    /// Create a config with default capacity and seed
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reservoir capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the sampler seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that a histogram can be built from this config
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] or
    /// [`ConfigError::CapacityTooLarge`] when `capacity` is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                found: self.capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

/// Settings for a [`HistogramPool`](crate::pool::HistogramPool)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoolConfig {
    /// Idle histograms kept for reuse; extras are dropped on release.
    /// Zero disables parking entirely.
    pub max_idle: usize,
    /// Config used for every histogram the pool builds
    pub histogram: HistogramConfig,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle: DEFAULT_MAX_IDLE,
            histogram: HistogramConfig::default(),
        }
    }
}

impl PoolConfig {
    /// Create a config with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the idle limit
    pub fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = max_idle;
        self
    }

    /// Set the per-histogram config
    pub fn with_histogram(mut self, histogram: HistogramConfig) -> Self {
        self.histogram = histogram;
        self
    }

    /// Check that a pool can be built from this config
    ///
    /// # Errors
    ///
    /// Returns the error from [`HistogramConfig::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.histogram.validate()
    }
}
