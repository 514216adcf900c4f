//! Engine error taxonomy.
//!
//! Errors here are recoverable conditions the caller handles: the engine
//! reloads on [`EngineError::OutOfAmmo`] and the input collaborator
//! re-prompts on [`EngineError::InvalidAction`]. Neither ever aborts a
//! game.

use thiserror::Error;

/// Errors surfaced by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Every chamber position has been consumed; reload before drawing.
    #[error("chamber is exhausted")]
    OutOfAmmo,

    /// The key does not map to any action on the menu.
    #[error("invalid action key: {0:?}")]
    InvalidAction(char),
}
