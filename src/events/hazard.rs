//! Ambient hazards.
//!
//! Hazards are turn-external effects rolled once per round, before any
//! participant acts. They are gated by a cooldown counter: a hazard can
//! only fire when the cooldown has reached 0, and firing re-arms it to a
//! uniform value in the configured window. On every round without a
//! hazard the cooldown ticks down by one.

use serde::{Deserialize, Serialize};

use super::damage_seat;
use crate::core::config::GameConfig;
use crate::core::rng::{choose, RandomSource};
use crate::core::state::GameState;
use crate::effects::EffectResolver;
use crate::engine::outcome::Outcome;

/// Per-target chance the gas leak causes confusion.
const GAS_LEAK_CHANCE: f64 = 0.70;

/// Chance the power outage makes someone miss a turn.
const POWER_OUTAGE_CHANCE: f64 = 0.40;

/// Per-target chance the earthquake knocks someone down.
const EARTHQUAKE_CHANCE: f64 = 0.60;

/// An ambient hazard category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hazard {
    /// Lightning strikes one random alive participant for 1 damage.
    LightningStorm,
    /// Each alive participant has a 70% chance of getting drunk 1-3 turns.
    GasLeak,
    /// 40% chance one random alive participant misses their next turn.
    PowerOutage,
    /// Each alive participant has a 60% chance of taking 1 damage.
    Earthquake,
    /// Every alive participant takes 1 damage.
    ToxicRain,
}

impl Hazard {
    /// All categories.
    pub const ALL: [Hazard; 5] = [
        Hazard::LightningStorm,
        Hazard::GasLeak,
        Hazard::PowerOutage,
        Hazard::Earthquake,
        Hazard::ToxicRain,
    ];

    /// Select a category uniformly at random.
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }

    /// Category name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Hazard::LightningStorm => "lightning storm",
            Hazard::GasLeak => "gas leak",
            Hazard::PowerOutage => "power outage",
            Hazard::Earthquake => "earthquake",
            Hazard::ToxicRain => "toxic rain",
        }
    }
}

/// Roll the per-round hazard check, honoring the cooldown gate.
///
/// Returns the hazard that fired, if any. Cooldown bookkeeping happens
/// here: re-armed on fire, ticked down otherwise.
pub fn maybe_trigger<R: RandomSource + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    out: &mut Vec<Outcome>,
) -> Option<Hazard> {
    if state.hazard_cooldown == 0 && rng.gen_bool(config.hazard_chance) {
        let hazard = Hazard::roll(rng);
        out.push(Outcome::HazardStruck { hazard });
        resolve(hazard, state, rng, out);
        state.hazard_cooldown =
            rng.gen_range_u32(config.hazard_cooldown_min..config.hazard_cooldown_max + 1);
        Some(hazard)
    } else {
        state.hazard_cooldown = state.hazard_cooldown.saturating_sub(1);
        None
    }
}

/// Resolve one hazard against every eligible participant.
pub fn resolve<R: RandomSource + ?Sized>(
    hazard: Hazard,
    state: &mut GameState,
    rng: &mut R,
    out: &mut Vec<Outcome>,
) {
    match hazard {
        Hazard::LightningStorm => {
            let targets = state.roster.alive_seats();
            if let Some(&target) = choose(rng, &targets) {
                damage_seat(state, target, 1, out);
            }
        }

        Hazard::GasLeak => {
            for seat in state.roster.alive_seats() {
                if rng.gen_bool(GAS_LEAK_CHANCE) {
                    let turns = rng.gen_range_u32(1..4);
                    if let Some(player) = state.roster.get_mut(seat) {
                        EffectResolver::apply_drunk(player, turns);
                        out.push(Outcome::DrunkApplied { seat, turns });
                    }
                }
            }
        }

        Hazard::PowerOutage => {
            if rng.gen_bool(POWER_OUTAGE_CHANCE) {
                let targets = state.roster.alive_seats();
                if let Some(&seat) = choose(rng, &targets) {
                    if let Some(player) = state.roster.get_mut(seat) {
                        EffectResolver::apply_miss_next_turn(player);
                        out.push(Outcome::MissNextTurn { seat });
                    }
                }
            }
        }

        Hazard::Earthquake => {
            for seat in state.roster.alive_seats() {
                if rng.gen_bool(EARTHQUAKE_CHANCE) {
                    damage_seat(state, seat, 1, out);
                }
            }
        }

        Hazard::ToxicRain => {
            for seat in state.roster.alive_seats() {
                damage_seat(state, seat, 1, out);
            }
        }
    }
}
