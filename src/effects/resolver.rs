//! Applying damage and status effects to players.
//!
//! The resolver is the only code that mutates a player's counters, so the
//! shield/drunk/miss-flag lifecycle rules live in one place:
//!
//! - a shield absorbs the *whole* of one damage call per charge, consumed
//!   at the hit (not per elapsed turn);
//! - shield and drunk applications overwrite, they do not stack;
//! - the miss flag is read when a turn is skipped and cleared by the
//!   end-of-turn decay, so a skipped player acts again the turn after.

use crate::core::player::Player;

/// What a single `apply_damage` call actually did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    /// Lives actually removed. 0 when blocked or already at 0.
    pub dealt: u32,
    /// True when a shield absorbed the call.
    pub blocked: bool,
}

/// Resolves damage and status effects on players.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply damage to a player.
    ///
    /// An active shield absorbs the entire call and loses one charge.
    /// Otherwise lives drop by `amount`, never below 0; the report
    /// carries the lives actually removed.
    pub fn apply_damage(player: &mut Player, amount: u32) -> DamageReport {
        if player.has_shield() {
            player.shield_turns -= 1;
            return DamageReport {
                dealt: 0,
                blocked: true,
            };
        }

        let dealt = amount.min(player.lives);
        player.lives -= dealt;
        DamageReport {
            dealt,
            blocked: false,
        }
    }

    /// Grant a shield for the given number of charges (overwrites).
    pub fn apply_shield(player: &mut Player, turns: u32) {
        player.shield_turns = turns;
    }

    /// Make a player drunk for the given number of turns (overwrites).
    pub fn apply_drunk(player: &mut Player, turns: u32) {
        player.drunk_turns = turns;
    }

    /// Mark the player to skip their next turn.
    pub fn apply_miss_next_turn(player: &mut Player) {
        player.misses_next_turn = true;
    }

    /// End-of-turn status decay: one drunk turn elapses and the miss
    /// flag clears. Called once per participant at the end of each of
    /// their turns, skipped or not.
    pub fn decay_status(player: &mut Player) {
        player.drunk_turns = player.drunk_turns.saturating_sub(1);
        player.misses_next_turn = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_unshielded() {
        let mut player = Player::new("You", 3);

        let report = EffectResolver::apply_damage(&mut player, 1);
        assert_eq!(report, DamageReport { dealt: 1, blocked: false });
        assert_eq!(player.lives, 2);
    }

    #[test]
    fn test_damage_never_below_zero() {
        let mut player = Player::new("You", 1);

        let report = EffectResolver::apply_damage(&mut player, 2);
        assert_eq!(report.dealt, 1);
        assert_eq!(player.lives, 0);

        let report = EffectResolver::apply_damage(&mut player, 1);
        assert_eq!(report.dealt, 0);
        assert_eq!(player.lives, 0);
    }

    #[test]
    fn test_shield_absorbs_whole_call() {
        let mut player = Player::new("You", 3);
        EffectResolver::apply_shield(&mut player, 1);

        // Even multi-point damage is fully absorbed by one charge.
        let report = EffectResolver::apply_damage(&mut player, 2);
        assert_eq!(report, DamageReport { dealt: 0, blocked: true });
        assert_eq!(player.lives, 3);
        assert!(!player.has_shield());

        // Next hit lands.
        let report = EffectResolver::apply_damage(&mut player, 2);
        assert_eq!(report.dealt, 2);
        assert_eq!(player.lives, 1);
    }

    #[test]
    fn test_shield_charge_per_hit_not_per_turn() {
        let mut player = Player::new("You", 3);
        EffectResolver::apply_shield(&mut player, 2);

        // Decay does not consume shield charges.
        EffectResolver::decay_status(&mut player);
        assert_eq!(player.shield_turns, 2);

        EffectResolver::apply_damage(&mut player, 1);
        assert_eq!(player.shield_turns, 1);
        EffectResolver::apply_damage(&mut player, 1);
        assert_eq!(player.shield_turns, 0);
        assert_eq!(player.lives, 3);
    }

    #[test]
    fn test_shield_overwrites() {
        let mut player = Player::new("You", 3);
        EffectResolver::apply_shield(&mut player, 2);
        EffectResolver::apply_shield(&mut player, 1);
        assert_eq!(player.shield_turns, 1);
    }

    #[test]
    fn test_drunk_overwrites_and_decays() {
        let mut player = Player::new("You", 3);
        EffectResolver::apply_drunk(&mut player, 3);
        EffectResolver::apply_drunk(&mut player, 2);
        assert_eq!(player.drunk_turns, 2);
        assert!(player.is_confused());

        EffectResolver::decay_status(&mut player);
        assert!(player.is_confused());
        EffectResolver::decay_status(&mut player);
        assert!(!player.is_confused());

        // Decay at zero stays at zero.
        EffectResolver::decay_status(&mut player);
        assert_eq!(player.drunk_turns, 0);
    }

    #[test]
    fn test_miss_flag_cleared_by_decay() {
        let mut player = Player::new("You", 3);
        EffectResolver::apply_miss_next_turn(&mut player);
        assert!(player.misses_next_turn);

        EffectResolver::decay_status(&mut player);
        assert!(!player.misses_next_turn);
    }
}
