//! Seats, players, and the roster.
//!
//! ## SeatId
//!
//! Type-safe seat identifier. Seats 0 and 1 are fixed; seat 2 belongs to
//! the optional guest who may join mid-game through a special event.
//!
//! ## Player
//!
//! The mutable participant entity: lives plus timed status effects
//! (shield, drunkenness, a one-shot missed-turn flag). Players are never
//! destroyed; at 0 lives they become inert and take no further turns.
//!
//! ## Roster
//!
//! Owns all players and tracks whether the guest seat is occupied.

use serde::{Deserialize, Serialize};

use super::rng::{choose, RandomSource};

/// Seat identifier within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// The first fixed seat (conventionally the human).
    pub const FIRST: SeatId = SeatId(0);
    /// The second fixed seat (the primary opponent).
    pub const SECOND: SeatId = SeatId(1);
    /// The optional guest seat, empty until a recruit event fires.
    pub const GUEST: SeatId = SeatId(2);

    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A participant in the game.
///
/// Counters are unsigned and mutated with saturating arithmetic, so the
/// "never negative" invariant holds by construction. Shield and confusion
/// are derived: active iff their turn counter is above zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name. No uniqueness requirement.
    pub name: String,

    /// Remaining lives. May exceed the starting value via potion events.
    pub lives: u32,

    /// Damage instances the shield will still absorb.
    pub shield_turns: u32,

    /// Turns of confusion remaining.
    pub drunk_turns: u32,

    /// One-shot flag: the next turn is skipped, then the flag clears.
    pub misses_next_turn: bool,
}

impl Player {
    /// Create a player with the given name and lives.
    pub fn new(name: impl Into<String>, lives: u32) -> Self {
        Self {
            name: name.into(),
            lives,
            shield_turns: 0,
            drunk_turns: 0,
            misses_next_turn: false,
        }
    }

    /// A player is alive while they have lives left.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Shield is active iff there are absorb charges left.
    #[must_use]
    pub fn has_shield(&self) -> bool {
        self.shield_turns > 0
    }

    /// Confused iff drunk turns remain.
    #[must_use]
    pub fn is_confused(&self) -> bool {
        self.drunk_turns > 0
    }
}

const FIRST_NAMES: [&str; 10] = [
    "Bobbert", "Lulabelle", "Chuckles", "Fanny", "Doodle", "Waldo", "Binky", "Squeaky", "Muffet",
    "Gus",
];

const LAST_NAMES: [&str; 10] = [
    "Nedward", "Pippy", "Snuffy", "Trixie", "Jasperino", "Frodo", "Ziggy", "Bubbles", "Clumsy",
    "Wiggles",
];

/// Generate a random opponent name from the fixed name lists.
pub fn random_opponent_name<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let first = choose(rng, &FIRST_NAMES).copied().unwrap_or("Bobbert");
    let last = choose(rng, &LAST_NAMES).copied().unwrap_or("Nedward");
    format!("{} {}", first, last)
}

/// All participants plus guest-seat occupancy.
///
/// The two fixed seats always exist. The guest seat is empty until
/// [`Roster::join_guest`] fills it, exactly once per game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seats: Vec<Player>,
}

impl Roster {
    /// Create a roster with the two fixed participants.
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            seats: vec![first, second],
        }
    }

    /// Has the guest seat been filled?
    #[must_use]
    pub fn guest_joined(&self) -> bool {
        self.seats.len() > SeatId::GUEST.index()
    }

    /// Seat the guest. Returns `false` (and changes nothing) if the guest
    /// already joined.
    pub fn join_guest(&mut self, guest: Player) -> bool {
        if self.guest_joined() {
            return false;
        }
        self.seats.push(guest);
        true
    }

    /// Get a participant, `None` for an unoccupied guest seat.
    #[must_use]
    pub fn get(&self, seat: SeatId) -> Option<&Player> {
        self.seats.get(seat.index())
    }

    /// Get a participant mutably.
    pub fn get_mut(&mut self, seat: SeatId) -> Option<&mut Player> {
        self.seats.get_mut(seat.index())
    }

    /// Iterate over occupied seats in turn order.
    pub fn seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        (0..self.seats.len() as u8).map(SeatId)
    }

    /// Seats of currently-alive participants, in turn order.
    #[must_use]
    pub fn alive_seats(&self) -> Vec<SeatId> {
        self.seats()
            .filter(|&s| self.seats[s.index()].is_alive())
            .collect()
    }

    /// Number of participants still alive.
    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.seats.iter().filter(|p| p.is_alive()).count()
    }

    /// Alive seats among the two fixed participants only.
    #[must_use]
    pub fn alive_fixed_seats(&self) -> Vec<SeatId> {
        [SeatId::FIRST, SeatId::SECOND]
            .into_iter()
            .filter(|&s| self.seats[s.index()].is_alive())
            .collect()
    }
}
