//! Reservoir sampling for uniform random sampling from streams
//!
//! Reservoir sampling maintains a fixed-size uniform random sample from
//! a stream of unknown length. Each item in the stream has equal probability
//! of being in the sample. The generator is seeded from a constant and
//! returns to that seed on every [`clear`](ReservoirSampler::clear), so
//! replaying a stream after a reset retains exactly the same items.

use crate::traits::{SamplingSketch, Sketch};

/// Seed substituted for zero, which is a fixed point of xorshift
const ZERO_SEED_REPLACEMENT: u64 = 0x853c_49e6_748f_ea9b;

/// Small reservoirs grow in steps of at least this many slots
const MIN_GROWTH: usize = 8;

/// Xorshift64 PRNG: fast, non-cryptographic, reseedable to a fixed state
#[derive(Clone, Debug)]
pub(crate) struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_REPLACEMENT } else { seed },
        }
    }

    pub(crate) fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate random u64 in [0, bound)
    ///
    /// `bound` must be non-zero.
    pub(crate) fn next_bounded(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        // Rejection sampling removes modulo bias.
        // threshold = 2^64 % bound (using wrapping_neg trick)
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next();
            if r >= threshold {
                return r % bound;
            }
        }
    }
}

/// Reservoir sampler using Algorithm R
///
/// Maintains a uniform random sample of fixed size from a stream of arbitrary length.
/// Each item in the stream has probability k/n of being in the sample,
/// where k is the reservoir size and n is the total number of items seen.
///
/// # Algorithm
///
/// Algorithm R (Vitter, 1985):
/// 1. Fill reservoir with first k items
/// 2. For each subsequent item i (1-indexed):
///    - Generate random j in [0, i)
///    - If j < k, replace reservoir[j] with item i
///
/// # Memory
///
/// The reservoir grows on demand up to `capacity` and never beyond it.
/// Clearing a non-empty sampler releases the reservoir's allocation.
///
/// # Example
///
/// ```
/// use fasthist::sampling::ReservoirSampler;
///
/// let mut sampler = ReservoirSampler::<i32>::new(5);
///
/// // Stream 100 items
/// for i in 0..100 {
///     sampler.add(i);
/// }
///
/// // Get uniform random sample of 5 items
/// let sample = sampler.sample();
/// assert_eq!(sample.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct ReservoirSampler<T: Clone + core::fmt::Debug> {
    /// Maximum sample size
    capacity: usize,
    /// Current sample
    reservoir: Vec<T>,
    /// Number of items seen
    count: u64,
    /// Seed restored on clear
    seed: u64,
    /// Random number generator
    rng: Xorshift64,
}

impl<T: Clone + core::fmt::Debug> ReservoirSampler<T> {
    /// Create a new reservoir sampler with given capacity
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_seed(capacity, crate::config::DEFAULT_SEED)
    }

    /// Create a new reservoir sampler with given capacity and seed
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of items to sample
    /// * `seed` - Seed for random number generator (for reproducibility)
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_seed(capacity: usize, seed: u64) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        Self {
            capacity,
            reservoir: Vec::new(),
            count: 0,
            seed,
            rng: Xorshift64::new(seed),
        }
    }

    /// Add an item to the sampler
    #[inline]
    pub fn add(&mut self, item: T) {
        self.count += 1;

        if self.reservoir.len() < self.capacity {
            self.grow();
            self.reservoir.push(item);
        } else {
            let j = self.rng.next_bounded(self.count);
            if j < self.capacity as u64 {
                self.reservoir[j as usize] = item;
            }
        }
    }

    /// Reserve room for the next push without overshooting `capacity`
    #[inline]
    fn grow(&mut self) {
        let len = self.reservoir.len();
        if len == self.reservoir.capacity() {
            let step = len.max(MIN_GROWTH).min(self.capacity - len);
            self.reservoir.reserve_exact(step);
        }
    }

    /// Get the current sample
    pub fn sample(&self) -> &[T] {
        &self.reservoir
    }

    /// Consume the sampler and return the sample
    pub fn into_sample(self) -> Vec<T> {
        self.reservoir
    }

    /// Get the reservoir capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the seed restored on clear
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current sample size
    pub fn len(&self) -> usize {
        self.reservoir.len()
    }

    /// Check if reservoir is empty
    pub fn is_empty(&self) -> bool {
        self.reservoir.is_empty()
    }

    /// Check if reservoir is full
    pub fn is_full(&self) -> bool {
        self.reservoir.len() >= self.capacity
    }

    /// Get the number of items seen
    pub fn items_seen(&self) -> u64 {
        self.count
    }

    /// Get the sampling probability for the current state
    ///
    /// This is the probability that any given item from the stream
    /// is in the current sample.
    pub fn sampling_probability(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            ((self.capacity as f64) / (self.count as f64)).min(1.0)
        }
    }

    /// Return to the empty state and reseed the generator
    ///
    /// A non-empty reservoir gives its allocation back, so a long-lived
    /// sampler does not hold on to its peak footprint.
    pub fn clear(&mut self) {
        if !self.reservoir.is_empty() {
            self.reservoir = Vec::new();
        }
        self.count = 0;
        self.rng = Xorshift64::new(self.seed);
    }
}

impl<T: Clone + core::fmt::Debug> Sketch for ReservoirSampler<T> {
    type Item = T;

    fn update(&mut self, item: &Self::Item) {
        self.add(item.clone());
    }

    fn clear(&mut self) {
        ReservoirSampler::clear(self);
    }

    fn size_bytes(&self) -> usize {
        self.reservoir.capacity() * core::mem::size_of::<T>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

impl<T: Clone + core::fmt::Debug> SamplingSketch for ReservoirSampler<T> {
    type Sample = T;

    fn sample(&self) -> &[T] {
        &self.reservoir
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
