//! # fasthist
//!
//! Bounded-memory streaming percentiles for metrics pipelines.
//!
//! fasthist summarizes an unbounded stream of `f64` observations in fixed
//! memory and answers "what value is at percentile φ?" from a uniform random
//! sample. It is built for pipelines that record millions of samples per
//! second, reuse histograms across reporting intervals, and merge per-worker
//! histograms into a global view.
//!
//! ## Features
//!
//! - **Bounded memory**: at most `capacity` raw values per histogram (default 1000)
//! - **Exact extremes**: count, minimum and maximum are tracked exactly
//! - **Reproducible**: a fixed-seed sampler, reseeded on every reset
//! - **Cross-shard queries**: [`combine`](quantiles::combine) several histograms
//! - **Pooling**: acquire/release reuse across reporting intervals
//!
//! ## Quick Start
//!
//! ```rust
//! use fasthist::prelude::*;
//!
//! let mut latency = FastHistogram::new();
//! for ms in [12.0, 15.0, 11.0, 240.0, 13.0] {
//!     latency.update(ms);
//! }
//!
//! let p = latency.quantiles(&[0.5, 0.99, 1.0]);
//! assert_eq!(p[0], 13.0);
//! assert_eq!(p[2], 240.0);
//! ```
//!
//! ## Degenerate Input
//!
//! Queries never fail. An empty histogram or a NaN `phi` returns NaN,
//! `phi <= 0` returns the exact minimum, and `phi >= 1` the exact maximum.
//!
//! ## Feature Flags
//!
//! - `serde`: (de)serialize [`HistogramConfig`](config::HistogramConfig) and
//!   [`PoolConfig`](config::PoolConfig)

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod pool;
pub mod quantiles;
pub mod sampling;
pub mod traits;

pub mod prelude {
    pub use crate::config::{HistogramConfig, PoolConfig};
    pub use crate::error::ConfigError;
    pub use crate::pool::{HistogramPool, PooledHistogram};
    pub use crate::quantiles::{combine, CombinedHistogram, FastHistogram};
    pub use crate::traits::*;
}

pub use config::{HistogramConfig, PoolConfig};
pub use error::ConfigError;
pub use pool::HistogramPool;
pub use quantiles::{combine, CombinedHistogram, FastHistogram};
