//! Quantile estimation over bounded samples
//!
//! # Types
//!
//! - [`FastHistogram`]: per-stream estimator backed by a reservoir sample
//! - [`CombinedHistogram`]: read-only union of several histograms, built by
//!   [`combine`]
//!
//! # Example
//!
//! ```
//! use fasthist::quantiles::{self, FastHistogram};
//!
//! let mut shard1 = FastHistogram::new();
//! let mut shard2 = FastHistogram::new();
//!
//! for i in 0..10_000 {
//!     shard1.update(i as f64);
//!     shard2.update((i + 10_000) as f64);
//! }
//!
//! let p = quantiles::quantiles([&shard1, &shard2], &[0.0, 0.5, 1.0]);
//! assert_eq!(p[0], 0.0);
//! assert_eq!(p[2], 19_999.0);
//! ```

mod combine;
mod fast;
mod minmax;
mod rank;

pub use combine::{combine, quantile, quantiles, quantiles_into, CombinedHistogram};
pub use fast::FastHistogram;
