//! Action providers: who decides what a participant does.
//!
//! The engine asks an [`ActionProvider`] for each acting seat's nominal
//! choice. A human-input collaborator implements this by reading keys
//! (via [`Action::from_key`]); [`AiPolicy`] is the shipped computer
//! opponent. Providers draw from the engine's shared random source, so a
//! seeded game is fully reproducible.

use crate::core::player::{Player, SeatId};
use crate::core::rng::{choose, RandomSource};

use super::action::Action;

/// Chance the AI tries to finish a target on their last life.
const FINISH_TARGET_CHANCE: f64 = 0.70;

/// Chance the AI plays aggressively while at full-ish health.
const AGGRESSIVE_CHANCE: f64 = 0.40;

/// Fallback chance the AI spins the event wheel.
const EVENT_CHANCE: f64 = 0.30;

/// What an acting participant can see when choosing.
#[derive(Debug)]
pub struct TurnView<'a> {
    /// The acting seat.
    pub seat: SeatId,
    /// The acting participant.
    pub actor: &'a Player,
    /// The seat a `FireAtTarget` would hit.
    pub target_seat: SeatId,
    /// The participant a `FireAtTarget` would hit.
    pub target: &'a Player,
    /// Chamber positions not yet consumed.
    pub shells_remaining: usize,
    /// Current round number.
    pub turn_number: u32,
}

/// Supplies the nominal action for a seat's turn.
///
/// The choice returned here is *nominal*: drunk misdirection is applied
/// by the engine afterwards, never by the provider.
pub trait ActionProvider {
    fn choose_action(&mut self, view: &TurnView<'_>, rng: &mut dyn RandomSource) -> Action;
}

/// A provider that always picks the same action. Useful for scripted
/// opponents and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedAction(pub Action);

impl ActionProvider for FixedAction {
    fn choose_action(&mut self, _view: &TurnView<'_>, _rng: &mut dyn RandomSource) -> Action {
        self.0
    }
}

/// The shipped computer opponent.
///
/// Decision ladder, top to bottom:
/// 1. confused: uniform over all three actions;
/// 2. own lives at 1: go for the event wheel;
/// 3. target at 1 life: fire at them 70% of the time;
/// 4. own lives at 3+: fire at them 40% of the time;
/// 5. otherwise 30% event wheel, else self-fire.
#[derive(Clone, Copy, Debug, Default)]
pub struct AiPolicy;

impl AiPolicy {
    /// Create the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ActionProvider for AiPolicy {
    fn choose_action(&mut self, view: &TurnView<'_>, rng: &mut dyn RandomSource) -> Action {
        if view.actor.is_confused() {
            return choose(rng, &Action::ALL).copied().unwrap_or(Action::SelfFire);
        }
        if view.actor.lives <= 1 {
            return Action::SpecialEvent;
        }
        if view.target.lives <= 1 && rng.gen_bool(FINISH_TARGET_CHANCE) {
            return Action::FireAtTarget;
        }
        if view.actor.lives >= 3 && rng.gen_bool(AGGRESSIVE_CHANCE) {
            return Action::FireAtTarget;
        }
        if rng.gen_bool(EVENT_CHANCE) {
            return Action::SpecialEvent;
        }
        Action::SelfFire
    }
}
