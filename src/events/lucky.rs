//! The "feeling lucky" event catalog.
//!
//! Seven mutually exclusive categories, selected uniformly. Choosing the
//! special-event action costs the whole turn and never touches the
//! chamber.
//!
//! The recruit category is state-dependent: before the guest joins, a
//! 1-in-4 roll may seat them (created once, with full starting lives);
//! once joined, the category re-rolls uniformly over the three non-join
//! sub-events. The duel sub-event deals the guest 1 damage whenever a
//! joined guest exists; with no guest seated there is nobody to hit and
//! the duel is flavor only.

use serde::{Deserialize, Serialize};

use super::damage_seat;
use crate::core::config::GameConfig;
use crate::core::player::{Player, SeatId};
use crate::core::rng::{choose, RandomSource};
use crate::core::state::GameState;
use crate::effects::EffectResolver;
use crate::engine::outcome::Outcome;

/// Damage dealt by the mysterious man's two pistols.
const MYSTERIOUS_MAN_DAMAGE: u32 = 2;

/// Species the animal event picks from.
const ANIMAL_SPECIES: [&str; 5] = ["snake", "wolf", "bear", "lion", "alligator"];

/// A "feeling lucky" event category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuckyEvent {
    /// A stranger with two pistols: 2 damage to a random alive target.
    MysteriousMan,
    /// The wheel spins wildly and nothing happens.
    Nothing,
    /// A potion lands on one of the fixed seats, or explodes harmlessly.
    Potion,
    /// Both fixed seats lose a life to the shaking ground.
    Earthquake,
    /// A wild animal bites a random fixed seat for 1 damage.
    Animal,
    /// A random fixed seat gains a shield for 1-2 charges.
    Shield,
    /// The celebrity guest shows up; may join the game.
    Recruit,
}

impl LuckyEvent {
    /// All categories, in wheel order.
    pub const ALL: [LuckyEvent; 7] = [
        LuckyEvent::MysteriousMan,
        LuckyEvent::Nothing,
        LuckyEvent::Potion,
        LuckyEvent::Earthquake,
        LuckyEvent::Animal,
        LuckyEvent::Shield,
        LuckyEvent::Recruit,
    ];

    /// Select a category uniformly at random.
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }

    /// Category name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LuckyEvent::MysteriousMan => "mysterious man",
            LuckyEvent::Nothing => "nothing",
            LuckyEvent::Potion => "potion",
            LuckyEvent::Earthquake => "earthquake",
            LuckyEvent::Animal => "animal",
            LuckyEvent::Shield => "shield",
            LuckyEvent::Recruit => "recruit",
        }
    }
}

/// Resolve one event category against the game state.
pub fn resolve<R: RandomSource + ?Sized>(
    event: LuckyEvent,
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    out: &mut Vec<Outcome>,
) {
    match event {
        LuckyEvent::MysteriousMan => mysterious_man(state, rng, out),
        LuckyEvent::Nothing => {}
        LuckyEvent::Potion => potion(state, rng, out),
        LuckyEvent::Earthquake => earthquake(state, out),
        LuckyEvent::Animal => animal(state, rng, out),
        LuckyEvent::Shield => shield(state, rng, out),
        LuckyEvent::Recruit => recruit(state, config, rng, out),
    }
}

fn mysterious_man<R: RandomSource + ?Sized>(
    state: &mut GameState,
    rng: &mut R,
    out: &mut Vec<Outcome>,
) {
    let targets = state.roster.alive_seats();
    if let Some(&target) = choose(rng, &targets) {
        damage_seat(state, target, MYSTERIOUS_MAN_DAMAGE, out);
    }
}

fn potion<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R, out: &mut Vec<Outcome>) {
    let seat = match rng.gen_range_u32(1..4) {
        1 => SeatId::FIRST,
        2 => SeatId::SECOND,
        // The potion explodes harmlessly.
        _ => return,
    };

    if let Some(player) = state.roster.get_mut(seat) {
        if player.is_alive() {
            player.lives += 1;
            out.push(Outcome::LifeGained {
                seat,
                lives: player.lives,
            });
        }
    }
}

fn earthquake(state: &mut GameState, out: &mut Vec<Outcome>) {
    damage_seat(state, SeatId::FIRST, 1, out);
    damage_seat(state, SeatId::SECOND, 1, out);
}

fn animal<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R, out: &mut Vec<Outcome>) {
    let species = choose(rng, &ANIMAL_SPECIES).copied().unwrap_or("snake");
    let targets = state.roster.alive_fixed_seats();
    if let Some(&target) = choose(rng, &targets) {
        out.push(Outcome::AnimalLoose { species, target });
        damage_seat(state, target, 1, out);
    }
}

fn shield<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R, out: &mut Vec<Outcome>) {
    let targets = state.roster.alive_fixed_seats();
    if let Some(&seat) = choose(rng, &targets) {
        let turns = rng.gen_range_u32(1..3);
        if let Some(player) = state.roster.get_mut(seat) {
            EffectResolver::apply_shield(player, turns);
            out.push(Outcome::ShieldGranted { seat, turns });
        }
    }
}

fn recruit<R: RandomSource + ?Sized>(
    state: &mut GameState,
    config: &GameConfig,
    rng: &mut R,
    out: &mut Vec<Outcome>,
) {
    if !state.roster.guest_joined() {
        match rng.gen_range_u32(0..4) {
            0 => air_shot(state, rng, out),
            1 => double_shot(state, out),
            2 => duel(state, rng, out),
            _ => {
                let guest = Player::new(config.guest_name.clone(), config.starting_lives);
                if state.roster.join_guest(guest) {
                    out.push(Outcome::GuestJoined {
                        seat: SeatId::GUEST,
                        name: config.guest_name.clone(),
                    });
                }
            }
        }
    } else {
        match rng.gen_range_u32(0..3) {
            0 => air_shot(state, rng, out),
            1 => double_shot(state, out),
            _ => duel(state, rng, out),
        }
    }
}

fn air_shot<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R, out: &mut Vec<Outcome>) {
    // The celebratory shot falls back down on a random fixed seat.
    let targets = state.roster.alive_fixed_seats();
    if let Some(&target) = choose(rng, &targets) {
        damage_seat(state, target, 1, out);
    }
}

fn double_shot(state: &mut GameState, out: &mut Vec<Outcome>) {
    damage_seat(state, SeatId::FIRST, 1, out);
    damage_seat(state, SeatId::SECOND, 1, out);
}

fn duel<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R, out: &mut Vec<Outcome>) {
    let contenders = state.roster.alive_fixed_seats();
    if let Some(&winner) = choose(rng, &contenders) {
        out.push(Outcome::DuelWon { winner });
        // Consistent rule: the duel always hits the guest when one is
        // seated; before the join there is nobody to hit.
        if state.roster.guest_joined() {
            damage_seat(state, SeatId::GUEST, 1, out);
        }
    }
}
