//! The chamber: an ordered shell sequence plus a firing cursor.
//!
//! Each load draws every shell independently: a uniform roll over `0..50`
//! whose parity decides the outcome (odd is live). The cursor advances on
//! consumed trigger-pulls; when it reaches capacity the chamber is
//! exhausted and the engine reloads it rather than ending the game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::rng::RandomSource;
use crate::error::EngineError;

/// Range whose parity decides a shell's outcome.
const SHELL_ROLL_RANGE: std::ops::Range<u32> = 0..50;

/// Outcome of a single chamber position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shell {
    /// A click. Nothing happens.
    Safe,
    /// A live round. One point of damage on a non-misfired pull.
    Live,
}

/// Ordered shell outcomes plus the current firing position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chamber {
    shells: SmallVec<[Shell; 6]>,
    position: usize,
}

impl Chamber {
    /// Create a freshly loaded chamber.
    pub fn new<R: RandomSource + ?Sized>(capacity: usize, rng: &mut R) -> Self {
        let mut chamber = Self {
            shells: SmallVec::new(),
            position: 0,
        };
        chamber.load(capacity, rng);
        chamber
    }

    /// (Re)generate `capacity` shells and reset the position to 0.
    pub fn load<R: RandomSource + ?Sized>(&mut self, capacity: usize, rng: &mut R) {
        self.shells.clear();
        for _ in 0..capacity {
            let roll = rng.gen_range_u32(SHELL_ROLL_RANGE);
            self.shells.push(if roll % 2 == 1 {
                Shell::Live
            } else {
                Shell::Safe
            });
        }
        self.position = 0;
    }

    /// The outcome at the current position, without advancing.
    ///
    /// Fails with [`EngineError::OutOfAmmo`] when the chamber is
    /// exhausted; callers reload first.
    pub fn draw_next(&self) -> Result<Shell, EngineError> {
        self.shells
            .get(self.position)
            .copied()
            .ok_or(EngineError::OutOfAmmo)
    }

    /// Advance the position by one, capped at capacity.
    ///
    /// Callers check [`Chamber::is_exhausted`] after advancing.
    pub fn advance(&mut self) {
        self.position = (self.position + 1).min(self.shells.len());
    }

    /// Has every position been consumed?
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.shells.len()
    }

    /// Shells per load.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.shells.len()
    }

    /// Current firing position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Positions not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.shells.len() - self.position
    }

    /// The full shell sequence (for status displays).
    #[must_use]
    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;
    use proptest::prelude::*;

    #[test]
    fn test_new_chamber_is_full() {
        let mut rng = GameRng::new(42);
        let chamber = Chamber::new(6, &mut rng);

        assert_eq!(chamber.capacity(), 6);
        assert_eq!(chamber.position(), 0);
        assert_eq!(chamber.remaining(), 6);
        assert!(!chamber.is_exhausted());
    }

    #[test]
    fn test_draw_does_not_advance() {
        let mut rng = GameRng::new(42);
        let chamber = Chamber::new(6, &mut rng);

        let first = chamber.draw_next().unwrap();
        assert_eq!(chamber.draw_next().unwrap(), first);
        assert_eq!(chamber.position(), 0);
    }

    #[test]
    fn test_advance_to_exhaustion() {
        let mut rng = GameRng::new(42);
        let mut chamber = Chamber::new(3, &mut rng);

        for remaining in (1..=3).rev() {
            assert_eq!(chamber.remaining(), remaining);
            chamber.draw_next().unwrap();
            chamber.advance();
        }

        assert!(chamber.is_exhausted());
        assert_eq!(chamber.draw_next(), Err(EngineError::OutOfAmmo));

        // Advancing past capacity is capped.
        chamber.advance();
        assert_eq!(chamber.position(), 3);
    }

    #[test]
    fn test_reload_resets_position() {
        let mut rng = GameRng::new(42);
        let mut chamber = Chamber::new(2, &mut rng);

        chamber.advance();
        chamber.advance();
        assert!(chamber.is_exhausted());

        chamber.load(2, &mut rng);
        assert_eq!(chamber.position(), 0);
        assert_eq!(chamber.capacity(), 2);
        assert!(chamber.draw_next().is_ok());
    }

    #[test]
    fn test_shell_mix_over_many_loads() {
        // Each shell is live with probability 1/2; over many loads both
        // outcomes must appear in roughly equal measure.
        let mut rng = GameRng::new(7);
        let mut live = 0usize;
        let mut total = 0usize;

        let mut chamber = Chamber::new(6, &mut rng);
        for _ in 0..2000 {
            chamber.load(6, &mut rng);
            live += chamber.shells().iter().filter(|&&s| s == Shell::Live).count();
            total += chamber.capacity();
        }

        let ratio = live as f64 / total as f64;
        assert!((0.45..0.55).contains(&ratio), "live ratio was {}", ratio);
    }

    proptest! {
        #[test]
        fn prop_load_has_exact_capacity(capacity in 1usize..32, seed in any::<u64>()) {
            let mut rng = GameRng::new(seed);
            let chamber = Chamber::new(capacity, &mut rng);

            prop_assert_eq!(chamber.capacity(), capacity);
            prop_assert_eq!(chamber.position(), 0);
            prop_assert_eq!(chamber.remaining(), capacity);
        }

        #[test]
        fn prop_reload_after_exhaustion(capacity in 1usize..16, seed in any::<u64>()) {
            let mut rng = GameRng::new(seed);
            let mut chamber = Chamber::new(capacity, &mut rng);

            for _ in 0..capacity {
                chamber.advance();
            }
            prop_assert!(chamber.is_exhausted());
            prop_assert_eq!(chamber.draw_next(), Err(EngineError::OutOfAmmo));

            chamber.load(capacity, &mut rng);
            prop_assert_eq!(chamber.position(), 0);
            prop_assert_eq!(chamber.capacity(), capacity);
            prop_assert!(chamber.draw_next().is_ok());
        }
    }
}
