//! Structured outcomes for the presentation layer.
//!
//! The engine never prints. Instead it appends [`Outcome`] values to a
//! log the presentation collaborator drains and renders however it likes
//! (text, animation, nothing). Every discrete state transition has a
//! variant.

use serde::Serialize;

use super::action::Action;
use super::turn::GameResult;
use crate::core::player::SeatId;
use crate::events::{Hazard, LuckyEvent};

/// A discrete, renderable engine outcome.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Outcome {
    /// An ambient hazard fired at round start.
    HazardStruck { hazard: Hazard },

    /// A "feeling lucky" event category was selected.
    EventFired { event: LuckyEvent },

    /// A confused actor's choice slipped to another action.
    ActionSlipped {
        seat: SeatId,
        intended: Action,
        actual: Action,
    },

    /// A turn was skipped because the miss flag was set.
    TurnSkipped { seat: SeatId },

    /// A live round went off at someone.
    Bang { shooter: SeatId, target: SeatId },

    /// The gun jammed: turn consumed, chamber position untouched.
    Misfire { seat: SeatId },

    /// A safe shell: nothing happened.
    Click { shooter: SeatId, target: SeatId },

    /// Lives were removed from a participant.
    DamageDealt {
        seat: SeatId,
        amount: u32,
        lives_left: u32,
    },

    /// A shield absorbed an entire damage instance.
    ShieldBlocked { seat: SeatId },

    /// A participant gained a life.
    LifeGained { seat: SeatId, lives: u32 },

    /// A shield was granted.
    ShieldGranted { seat: SeatId, turns: u32 },

    /// A participant became drunk.
    DrunkApplied { seat: SeatId, turns: u32 },

    /// A participant will miss their next turn.
    MissNextTurn { seat: SeatId },

    /// A wild animal attacked (flavor detail for the animal event).
    AnimalLoose {
        species: &'static str,
        target: SeatId,
    },

    /// The recruit event's duel sub-event resolved.
    DuelWon { winner: SeatId },

    /// The guest took the third seat.
    GuestJoined { seat: SeatId, name: String },

    /// The chamber was exhausted and transparently reloaded.
    ChamberReloaded { capacity: usize },

    /// Terminal state reached.
    GameOver { result: GameResult },
}
