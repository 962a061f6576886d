//! Reuse of histograms across reporting intervals
//!
//! A pool hands out reset histograms and takes them back when the caller is
//! done, so a long-running pipeline reuses histogram instances and their
//! configuration across intervals. Sample buffers are not carried over:
//! releasing resets the histogram, which frees them, and they regrow on the
//! next interval's updates. The pool only guarantees that each histogram has a single
//! owner at a time; it does not make a histogram safe to share.
//!
//! # Example
//!
//! ```
//! use fasthist::pool;
//!
//! let mut h = pool::acquire();
//! h.update(3.5);
//! assert_eq!(h.quantile(0.5), 3.5);
//! pool::release(h);
//! ```

use crate::config::PoolConfig;
use crate::error::ConfigError;
use crate::quantiles::FastHistogram;
use core::ops::{Deref, DerefMut};
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

static DEFAULT_POOL: Lazy<HistogramPool> =
    Lazy::new(|| HistogramPool::with_valid_config(PoolConfig::default()));

/// Process-wide pool using [`PoolConfig::default`]
pub fn global() -> &'static HistogramPool {
    &DEFAULT_POOL
}

/// Take a reset histogram from the process-wide pool
pub fn acquire() -> FastHistogram {
    DEFAULT_POOL.acquire()
}

/// Reset `histogram` and return it to the process-wide pool
pub fn release(histogram: FastHistogram) {
    DEFAULT_POOL.release(histogram);
}

/// Thread-safe free list of [`FastHistogram`]s
#[derive(Debug)]
pub struct HistogramPool {
    config: PoolConfig,
    idle: Mutex<Vec<FastHistogram>>,
}

impl HistogramPool {
    /// Create an empty pool
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the histogram config is invalid.
    pub fn new(config: PoolConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: PoolConfig) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Pool configuration
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Number of histograms waiting for reuse
    pub fn idle(&self) -> usize {
        self.lock().len()
    }

    /// Take a reset histogram, reusing an idle one when available
    pub fn acquire(&self) -> FastHistogram {
        if let Some(h) = self.lock().pop() {
            tracing::trace!("reusing pooled histogram");
            return h;
        }
        let cfg = &self.config.histogram;
        tracing::debug!(capacity = cfg.capacity, "allocating histogram for pool");
        FastHistogram::from_parts(cfg.capacity, cfg.seed)
    }

    /// Take a histogram that returns itself to the pool when dropped
    pub fn acquire_guard(&self) -> PooledHistogram<'_> {
        PooledHistogram {
            pool: self,
            histogram: self.acquire(),
        }
    }

    /// Reset `histogram` and park it for reuse
    ///
    /// Histograms built with a different capacity or seed than the pool's
    /// config are dropped, as is anything beyond `max_idle`.
    pub fn release(&self, mut histogram: FastHistogram) {
        let cfg = &self.config.histogram;
        if histogram.capacity() != cfg.capacity || histogram.seed() != cfg.seed {
            tracing::debug!(
                capacity = histogram.capacity(),
                "dropping histogram with foreign config"
            );
            return;
        }
        histogram.reset();

        let mut idle = self.lock();
        if idle.len() < self.config.max_idle {
            idle.push(histogram);
        } else {
            tracing::trace!(max_idle = self.config.max_idle, "pool full, dropping histogram");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<FastHistogram>> {
        // The free list stays consistent even if a holder panicked.
        self.idle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistogramPool {
    fn default() -> Self {
        Self::with_valid_config(PoolConfig::default())
    }
}

/// Histogram on loan from a [`HistogramPool`]
///
/// Dereferences to [`FastHistogram`] and is released back to its pool on drop.
#[derive(Debug)]
pub struct PooledHistogram<'p> {
    pool: &'p HistogramPool,
    histogram: FastHistogram,
}

impl Deref for PooledHistogram<'_> {
    type Target = FastHistogram;

    fn deref(&self) -> &FastHistogram {
        &self.histogram
    }
}

impl DerefMut for PooledHistogram<'_> {
    fn deref_mut(&mut self) -> &mut FastHistogram {
        &mut self.histogram
    }
}

impl Drop for PooledHistogram<'_> {
    fn drop(&mut self) {
        let histogram = core::mem::take(&mut self.histogram);
        self.pool.release(histogram);
    }
}
