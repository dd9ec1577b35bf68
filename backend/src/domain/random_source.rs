//! Source of uniform random indices for the selection draw.
//!
//! Non-cryptographic. Production code uses the thread RNG; tests inject a
//! seeded small RNG to make draws reproducible.

use std::sync::{Mutex, PoisonError};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Draws an unbiased index in `0..len`.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Return an index uniformly distributed over `0..len`.
    ///
    /// Callers must pass `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Pick one element of `items` uniformly at random.
pub fn pick<'a, T>(source: &dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(source.pick_index(items.len()))
}

/// Thread-local RNG backed source.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source for reproducible draws.
///
/// # Examples
/// ```
/// use recitation_backend::domain::{RandomSource, SeededRandomSource};
///
/// let a = SeededRandomSource::new(7);
/// let b = SeededRandomSource::new(7);
/// assert_eq!(a.pick_index(10), b.pick_index(10));
/// ```
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<SmallRng>,
}

impl SeededRandomSource {
    /// Build a source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn pick_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}
