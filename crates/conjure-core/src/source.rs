//! The random source every generator draws from.
//!
//! A [`Source`] is handed to each [`Generator::generate_one`] call instead of
//! living in process-wide state, so two sources seeded with the same value
//! replay the same draws. For call sites that do not want to thread a source
//! around, each thread also owns a default source reachable through
//! [`seed`] and [`with_thread_source`].
//!
//! [`Generator::generate_one`]: crate::Generator::generate_one

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::cell::RefCell;

/// A seedable source of uniformly distributed integers and floats.
#[derive(Debug, Clone)]
pub struct Source {
    rng: StdRng,
}

impl Source {
    /// Create a source whose draws are fully determined by `seed`.
    pub fn seeded(seed: i64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }

    /// Create a source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reset the source so it replays the sequence for `seed` from the start.
    pub fn reseed(&mut self, seed: i64) {
        self.rng = StdRng::seed_from_u64(seed as u64);
    }

    /// Uniform value in `[0, n)`. Returns 0 when `n == 0`.
    pub fn below_u32(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform value in `[0, n)`. Returns 0 when `n == 0`.
    pub fn below_u64(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform index in `[0, n)`. Returns 0 when `n == 0`.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// A full-width random 32-bit word.
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// A full-width random 64-bit word.
    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit_f32(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::from_entropy()
    }
}

thread_local! {
    static THREAD_SOURCE: RefCell<Source> = RefCell::new(Source::from_entropy());
}

/// Reseed the calling thread's default source.
///
/// Affects every later draw made through [`with_thread_source`] on this
/// thread, including draws by generators that were built before the call.
pub fn seed(value: i64) {
    THREAD_SOURCE.with(|source| source.borrow_mut().reseed(value));
    tracing::debug!(seed = value, "Reseeded thread source");
}

/// Run `f` with exclusive access to the calling thread's default source.
///
/// # Panics
///
/// Panics if called re-entrantly from inside another `with_thread_source`
/// closure on the same thread, for example by calling `sample()` inside a
/// generator that is itself being sampled. Nested generators should draw
/// from the `&mut Source` they are handed instead.
pub fn with_thread_source<R>(f: impl FnOnce(&mut Source) -> R) -> R {
    THREAD_SOURCE.with(|source| match source.try_borrow_mut() {
        Ok(mut src) => f(&mut src),
        Err(_) => panic!(
            "thread source is already lent out: sample() was called from inside a \
             generator that is itself being sampled; draw from the &mut Source \
             passed to generate_one instead"
        ),
    })
}
