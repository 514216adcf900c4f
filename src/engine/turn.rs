//! The turn engine.
//!
//! Drives one round at a time: hazard check, then each seat's turn in
//! fixed order, with the win condition re-checked after every individual
//! turn so the game ends immediately once at most one participant is
//! alive, even mid-round.
//!
//! The engine owns the configuration, the random source, and the outcome
//! log; the [`GameState`] is passed in by the caller, which keeps state
//! freely inspectable by the presentation layer and by tests.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chamber::Shell;
use crate::core::config::GameConfig;
use crate::core::player::SeatId;
use crate::core::rng::{choose, RandomSource};
use crate::core::state::GameState;
use crate::effects::EffectResolver;
use crate::events::{self, hazard, lucky, LuckyEvent};

use super::action::Action;
use super::outcome::Outcome;
use super::policy::ActionProvider;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Sole survivor.
    Winner(SeatId),
    /// Nobody left alive.
    Draw,
    /// Defensive tie report for a game stopped with several survivors.
    Winners(Vec<SeatId>),
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: SeatId) -> bool {
        match self {
            GameResult::Winner(s) => *s == seat,
            GameResult::Winners(seats) => seats.contains(&seat),
            GameResult::Draw => false,
        }
    }

    /// Report a result for whoever is alive, however many that is.
    ///
    /// The engine itself only ever ends games at one survivor or none;
    /// the multi-winner arm reports games stopped early from outside.
    #[must_use]
    pub fn from_alive(alive: &[SeatId]) -> Self {
        match alive {
            [] => GameResult::Draw,
            [sole] => GameResult::Winner(*sole),
            many => GameResult::Winners(many.to_vec()),
        }
    }
}

/// Orchestrates rounds, turns, and win checks.
pub struct TurnEngine<R: RandomSource> {
    config: GameConfig,
    rng: R,
    outcomes: Vec<Outcome>,
    finished: bool,
}

impl<R: RandomSource> TurnEngine<R> {
    /// Create an engine with the given configuration and random source.
    pub fn new(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            outcomes: Vec::new(),
            finished: false,
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Create a fresh game state for this engine's configuration.
    pub fn new_game(
        &mut self,
        first_name: impl Into<String>,
        second_name: impl Into<String>,
    ) -> GameState {
        self.finished = false;
        self.outcomes.clear();
        GameState::new(&self.config, first_name, second_name, &mut self.rng)
    }

    /// Take all outcomes accumulated since the last drain, in order.
    pub fn drain_outcomes(&mut self) -> Vec<Outcome> {
        std::mem::take(&mut self.outcomes)
    }

    /// Check the win condition without mutating anything.
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        Self::compute_result(state)
    }

    /// Start a round: bump the round counter and run the hazard check.
    ///
    /// Returns the game result if the game is (or just became) over.
    pub fn begin_round(&mut self, state: &mut GameState) -> Option<GameResult> {
        if let Some(result) = self.check_terminal(state) {
            return Some(result);
        }

        state.turn_number += 1;
        debug!(round = state.turn_number, "round start");

        if let Some(hazard) =
            hazard::maybe_trigger(state, &self.config, &mut self.rng, &mut self.outcomes)
        {
            debug!(hazard = hazard.name(), "hazard struck");
        }

        self.check_terminal(state)
    }

    /// Run one seat's turn.
    ///
    /// Dead and unoccupied seats are no-ops. Returns the game result the
    /// moment the win condition holds, which may be before the seat acts
    /// (a hazard already ended the game) or right after (their action
    /// finished someone off).
    pub fn take_turn(
        &mut self,
        state: &mut GameState,
        seat: SeatId,
        provider: &mut dyn ActionProvider,
    ) -> Option<GameResult> {
        if let Some(result) = self.check_terminal(state) {
            return Some(result);
        }

        let Some(actor) = state.roster.get(seat) else {
            return None;
        };
        if !actor.is_alive() {
            return None;
        }

        // The miss flag is read here, consuming the skipped turn; decay
        // then clears it so the seat acts again next round.
        if actor.misses_next_turn {
            self.outcomes.push(Outcome::TurnSkipped { seat });
            if let Some(actor) = state.roster.get_mut(seat) {
                EffectResolver::decay_status(actor);
            }
            return self.check_terminal(state);
        }

        let target_seat = self.target_for(state, seat);

        let nominal = {
            let (Some(actor), Some(target)) =
                (state.roster.get(seat), state.roster.get(target_seat))
            else {
                return None;
            };
            let view = super::policy::TurnView {
                seat,
                actor,
                target_seat,
                target,
                shells_remaining: state.chamber.remaining(),
                turn_number: state.turn_number,
            };
            provider.choose_action(&view, &mut self.rng)
        };

        // Drunk misdirection: exactly once, after the nominal choice,
        // before dispatch.
        let confused = state
            .roster
            .get(seat)
            .map(|p| p.is_confused())
            .unwrap_or(false);
        let action = if confused {
            match nominal.misdirect(self.config.drunk_slip_chance, &mut self.rng) {
                Some(actual) => {
                    self.outcomes.push(Outcome::ActionSlipped {
                        seat,
                        intended: nominal,
                        actual,
                    });
                    actual
                }
                None => nominal,
            }
        } else {
            nominal
        };

        match action {
            Action::SelfFire => self.pull_trigger(state, seat, seat),
            Action::FireAtTarget => self.pull_trigger(state, seat, target_seat),
            Action::SpecialEvent => {
                let event = LuckyEvent::roll(&mut self.rng);
                debug!(event = event.name(), %seat, "event wheel");
                self.outcomes.push(Outcome::EventFired { event });
                lucky::resolve(event, state, &self.config, &mut self.rng, &mut self.outcomes);
            }
        }

        if let Some(actor) = state.roster.get_mut(seat) {
            EffectResolver::decay_status(actor);
        }

        // Exhaustion reloads the chamber; it never ends the game.
        if state.chamber.is_exhausted() {
            self.reload(state);
        }

        self.check_terminal(state)
    }

    /// Play one full round with a single provider serving every seat.
    ///
    /// Returns as soon as the game is over, skipping the remaining seats.
    pub fn play_round(
        &mut self,
        state: &mut GameState,
        provider: &mut dyn ActionProvider,
    ) -> Option<GameResult> {
        if let Some(result) = self.begin_round(state) {
            return Some(result);
        }

        for seat in state.turn_order() {
            if let Some(result) = self.take_turn(state, seat, provider) {
                return Some(result);
            }
        }

        None
    }

    /// Play rounds until the game ends or `max_rounds` elapse.
    pub fn play_to_completion(
        &mut self,
        state: &mut GameState,
        provider: &mut dyn ActionProvider,
        max_rounds: u32,
    ) -> Option<GameResult> {
        for _ in 0..max_rounds {
            if let Some(result) = self.play_round(state, provider) {
                return Some(result);
            }
        }
        self.result(state)
    }

    /// The seat a `FireAtTarget` from `seat` would hit: the fixed
    /// counterpart while they live, otherwise a uniform pick over the
    /// other alive seats. The guest always picks uniformly.
    pub fn target_for(&mut self, state: &GameState, seat: SeatId) -> SeatId {
        let preferred = match seat {
            SeatId::FIRST => Some(SeatId::SECOND),
            SeatId::SECOND => Some(SeatId::FIRST),
            _ => None,
        };

        if let Some(p) = preferred {
            if state.roster.get(p).map_or(false, |pl| pl.is_alive()) {
                return p;
            }
        }

        let others: Vec<SeatId> = state
            .roster
            .alive_seats()
            .into_iter()
            .filter(|&s| s != seat)
            .collect();
        choose(&mut self.rng, &others).copied().unwrap_or(SeatId::FIRST)
    }

    /// Resolve a trigger-pull from `shooter` against `victim`.
    fn pull_trigger(&mut self, state: &mut GameState, shooter: SeatId, victim: SeatId) {
        if state.chamber.is_exhausted() {
            self.reload(state);
        }
        let Ok(shell) = state.chamber.draw_next() else {
            // Unreachable after a reload; defensively consume the turn.
            return;
        };

        // A misfire consumes the turn but not the chamber position.
        if self.rng.gen_bool(self.config.misfire_chance) {
            self.outcomes.push(Outcome::Misfire { seat: shooter });
            return;
        }

        match shell {
            Shell::Live => {
                self.outcomes.push(Outcome::Bang {
                    shooter,
                    target: victim,
                });
                events::damage_seat(state, victim, 1, &mut self.outcomes);
            }
            Shell::Safe => {
                self.outcomes.push(Outcome::Click {
                    shooter,
                    target: victim,
                });
            }
        }

        state.chamber.advance();
    }

    fn reload(&mut self, state: &mut GameState) {
        state
            .chamber
            .load(self.config.chamber_capacity, &mut self.rng);
        debug!(capacity = self.config.chamber_capacity, "chamber reloaded");
        self.outcomes.push(Outcome::ChamberReloaded {
            capacity: self.config.chamber_capacity,
        });
    }

    fn compute_result(state: &GameState) -> Option<GameResult> {
        let alive = state.roster.alive_seats();
        if alive.len() > 1 {
            None
        } else {
            Some(GameResult::from_alive(&alive))
        }
    }

    fn check_terminal(&mut self, state: &GameState) -> Option<GameResult> {
        let result = Self::compute_result(state)?;
        if !self.finished {
            self.finished = true;
            debug!(?result, "game over");
            self.outcomes.push(Outcome::GameOver {
                result: result.clone(),
            });
        }
        Some(result)
    }
}
