//! # roulette-royale
//!
//! Turn/state engine for a multiplayer Russian roulette party game:
//! randomized chamber outcomes, status effects (shields, drunkenness,
//! missed turns), ambient hazards, and special events, driven by a
//! strictly turn-sequential engine.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: the crate owns state transitions and
//!    probability contracts. Rendering, animation, and key capture are
//!    external collaborators that feed actions in and drain structured
//!    [`Outcome`]s out.
//!
//! 2. **One random source**: all randomness flows through an injected
//!    [`RandomSource`]; a seeded [`GameRng`] makes whole games
//!    reproducible, and tests script their own sources.
//!
//! 3. **Explicit state**: everything a round touches lives in one
//!    [`GameState`] aggregate passed by reference. No globals.
//!
//! ## Modules
//!
//! - `core`: seats, players, configuration, state, RNG
//! - `chamber`: shell sequence and firing cursor
//! - `effects`: damage and status-effect resolution
//! - `events`: the special-event and hazard catalogs
//! - `engine`: actions, providers, outcomes, and the turn engine
//! - `error`: the engine error taxonomy

pub mod chamber;
pub mod core;
pub mod effects;
pub mod engine;
pub mod error;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    choose, random_opponent_name, GameConfig, GameRng, GameState, Player, RandomSource, Roster,
    SeatId,
};

pub use crate::chamber::{Chamber, Shell};

pub use crate::effects::{DamageReport, EffectResolver};

pub use crate::events::{Hazard, LuckyEvent};

pub use crate::engine::{
    Action, ActionProvider, AiPolicy, FixedAction, GameResult, Outcome, TurnEngine, TurnView,
};

pub use crate::error::EngineError;
