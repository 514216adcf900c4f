//! The game state aggregate.
//!
//! One explicit value owns everything a round touches: the roster, the
//! chamber, the hazard cooldown, and the round counter. The engine takes
//! it by mutable reference; there are no ambient globals.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::player::{Player, Roster, SeatId};
use super::rng::RandomSource;
use crate::chamber::Chamber;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// All participants.
    pub roster: Roster,

    /// The shared chamber.
    pub chamber: Chamber,

    /// Rounds until a hazard may fire again. Hazards only trigger at 0.
    pub hazard_cooldown: u32,

    /// Completed-round counter, incremented at round start.
    pub turn_number: u32,
}

impl GameState {
    /// Create a fresh game: two named participants with the configured
    /// starting lives and a loaded chamber.
    pub fn new<R: RandomSource + ?Sized>(
        config: &GameConfig,
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        rng: &mut R,
    ) -> Self {
        let roster = Roster::new(
            Player::new(first_name, config.starting_lives),
            Player::new(second_name, config.starting_lives),
        );
        Self {
            roster,
            chamber: Chamber::new(config.chamber_capacity, rng),
            hazard_cooldown: 0,
            turn_number: 0,
        }
    }

    /// The game is over once at most one participant remains alive.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.roster.alive_count() <= 1
    }

    /// Seats that take a turn this round, in fixed order. Dead seats are
    /// included; the engine skips them, so the order never shifts
    /// mid-game.
    #[must_use]
    pub fn turn_order(&self) -> Vec<SeatId> {
        self.roster.seats().collect()
    }
}
