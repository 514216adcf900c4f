//! Randomness for the engine.
//!
//! All randomness flows through a single [`RandomSource`], which is
//! dependency-injected into the engine so tests can substitute scripted
//! sources and replay exact scenarios.
//!
//! The shipped implementation is [`GameRng`], a seeded ChaCha8 generator:
//! the same seed always produces the same game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

/// Object-safe source of randomness.
///
/// The engine only ever needs small integer draws and probability checks,
/// so the surface is deliberately minimal. Test doubles implement this to
/// force specific outcomes (always-live chambers, never-misfire, etc.).
pub trait RandomSource {
    /// Generate a random `u32` in the half-open range.
    fn gen_range_u32(&mut self, range: Range<u32>) -> u32;

    /// Generate a random `usize` in the half-open range.
    fn gen_range_usize(&mut self, range: Range<usize>) -> usize;

    /// Return `true` with the given probability.
    fn gen_bool(&mut self, probability: f64) -> bool;
}

/// Choose a random element from a slice.
pub fn choose<'a, R, T>(rng: &mut R, slice: &'a [T]) -> Option<&'a T>
where
    R: RandomSource + ?Sized,
{
    if slice.is_empty() {
        None
    } else {
        Some(&slice[rng.gen_range_usize(0..slice.len())])
    }
}

/// Deterministic RNG backing real games.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the OS entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn gen_range_u32(&mut self, range: Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }

    fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
