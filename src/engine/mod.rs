//! Turn orchestration: actions, providers, outcomes, and the engine.

pub mod action;
pub mod outcome;
pub mod policy;
pub mod turn;

pub use action::Action;
pub use outcome::Outcome;
pub use policy::{ActionProvider, AiPolicy, FixedAction, TurnView};
pub use turn::{GameResult, TurnEngine};
