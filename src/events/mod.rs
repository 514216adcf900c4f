//! Special events and ambient hazards.
//!
//! Both catalogs are fixed enumerations selected uniformly at random,
//! each category resolved by its own sub-resolver with its own internal
//! randomization. Category metadata (names, tables) is plain data;
//! behavior lives in the per-category resolver functions so each effect
//! is independently testable.

pub mod hazard;
pub mod lucky;

pub use hazard::Hazard;
pub use lucky::LuckyEvent;

use crate::core::player::SeatId;
use crate::core::state::GameState;
use crate::effects::EffectResolver;
use crate::engine::outcome::Outcome;

/// Damage an alive participant, recording the structured outcome.
///
/// Dead or unoccupied seats are untouched; they are permanently inert.
pub(crate) fn damage_seat(
    state: &mut GameState,
    seat: SeatId,
    amount: u32,
    out: &mut Vec<Outcome>,
) {
    let Some(player) = state.roster.get_mut(seat) else {
        return;
    };
    if !player.is_alive() {
        return;
    }

    let report = EffectResolver::apply_damage(player, amount);
    if report.blocked {
        out.push(Outcome::ShieldBlocked { seat });
    } else {
        out.push(Outcome::DamageDealt {
            seat,
            amount: report.dealt,
            lives_left: player.lives,
        });
    }
}
