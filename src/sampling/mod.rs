//! Stream sampling algorithms
//!
//! This module provides the bounded uniform sampler that backs every
//! histogram. It is public so callers can sample arbitrary item types with
//! the same reproducible generator.
//!
//! # Example
//!
//! ```
//! use fasthist::sampling::ReservoirSampler;
//!
//! let mut sampler = ReservoirSampler::<i32>::new(10);
//!
//! // Stream millions of items, keep uniform sample of 10
//! for i in 0..1_000_000 {
//!     sampler.add(i);
//! }
//!
//! // Each item had equal probability of being sampled
//! let sample = sampler.sample();
//! assert_eq!(sample.len(), 10);
//! ```

mod reservoir;

pub use reservoir::ReservoirSampler;
