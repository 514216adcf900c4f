//! The three actions a participant can take on their turn.

use serde::{Deserialize, Serialize};

use crate::core::rng::RandomSource;
use crate::error::EngineError;

/// A participant's nominal choice for the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Pull the trigger on yourself.
    SelfFire,
    /// Pull the trigger on your target.
    FireAtTarget,
    /// Spin the event wheel instead of firing. Never touches the chamber.
    SpecialEvent,
}

impl Action {
    /// All actions, in menu order.
    pub const ALL: [Action; 3] = [Action::SelfFire, Action::FireAtTarget, Action::SpecialEvent];

    /// Parse a menu key from the input collaborator ('1'..'3').
    ///
    /// Anything else is an [`EngineError::InvalidAction`]; the caller
    /// re-prompts rather than crashing.
    pub fn from_key(key: char) -> Result<Action, EngineError> {
        match key {
            '1' => Ok(Action::SelfFire),
            '2' => Ok(Action::FireAtTarget),
            '3' => Ok(Action::SpecialEvent),
            other => Err(EngineError::InvalidAction(other)),
        }
    }

    /// The two actions that are not this one, in menu order.
    #[must_use]
    pub fn alternates(self) -> [Action; 2] {
        match self {
            Action::SelfFire => [Action::FireAtTarget, Action::SpecialEvent],
            Action::FireAtTarget => [Action::SelfFire, Action::SpecialEvent],
            Action::SpecialEvent => [Action::SelfFire, Action::FireAtTarget],
        }
    }

    /// Drunk misdirection: with probability `chance`, replace this action
    /// with a uniform pick over the two alternates.
    ///
    /// Returns `Some(actual)` when the action slipped, `None` when the
    /// nominal choice stands. Applied exactly once per turn, after the
    /// nominal choice is determined and before dispatch.
    pub fn misdirect<R: RandomSource + ?Sized>(self, chance: f64, rng: &mut R) -> Option<Action> {
        if !rng.gen_bool(chance) {
            return None;
        }
        let alternates = self.alternates();
        Some(alternates[rng.gen_range_usize(0..2)])
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Action::SelfFire => "self-fire",
            Action::FireAtTarget => "fire at target",
            Action::SpecialEvent => "special event",
        };
        write!(f, "{}", name)
    }
}
