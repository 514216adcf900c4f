//! Core types: seats, players, configuration, state, and randomness.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use player::{random_opponent_name, Player, Roster, SeatId};
pub use rng::{choose, GameRng, RandomSource};
pub use state::GameState;
