//! Game configuration.
//!
//! Every tunable probability and count lives here so the engine itself
//! contains no magic numbers. Defaults reproduce the classic ruleset:
//! 3 lives, a six-shell chamber, 10% misfires, 40% drunk slips, and
//! ambient hazards at 30% gated by a 3-5 turn cooldown.

use serde::{Deserialize, Serialize};

/// Configuration for a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lives each participant starts with (the guest joins with this many).
    pub starting_lives: u32,

    /// Shells per chamber load.
    pub chamber_capacity: usize,

    /// Chance a trigger-pull misfires, consuming the turn but no shell.
    pub misfire_chance: f64,

    /// Chance a confused actor's chosen action slips to another one.
    pub drunk_slip_chance: f64,

    /// Chance a hazard fires at round start once the cooldown reaches 0.
    pub hazard_chance: f64,

    /// Cooldown set after a hazard fires, drawn uniformly from
    /// `hazard_cooldown_min..=hazard_cooldown_max`.
    pub hazard_cooldown_min: u32,
    pub hazard_cooldown_max: u32,

    /// Display name for the late-joining guest participant.
    pub guest_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            chamber_capacity: 6,
            misfire_chance: 0.10,
            drunk_slip_chance: 0.40,
            hazard_chance: 0.30,
            hazard_cooldown_min: 3,
            hazard_cooldown_max: 5,
            guest_name: "Snoop Dogg".to_string(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting lives (builder pattern).
    #[must_use]
    pub fn with_starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Set chamber capacity (builder pattern).
    #[must_use]
    pub fn with_chamber_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Chamber capacity must be at least 1");
        self.chamber_capacity = capacity;
        self
    }

    /// Set the misfire chance (builder pattern).
    #[must_use]
    pub fn with_misfire_chance(mut self, chance: f64) -> Self {
        self.misfire_chance = chance;
        self
    }

    /// Set the drunk slip chance (builder pattern).
    #[must_use]
    pub fn with_drunk_slip_chance(mut self, chance: f64) -> Self {
        self.drunk_slip_chance = chance;
        self
    }

    /// Set the hazard chance (builder pattern).
    #[must_use]
    pub fn with_hazard_chance(mut self, chance: f64) -> Self {
        self.hazard_chance = chance;
        self
    }

    /// Set the hazard cooldown window (builder pattern).
    #[must_use]
    pub fn with_hazard_cooldown(mut self, min: u32, max: u32) -> Self {
        assert!(min <= max, "Cooldown min must not exceed max");
        self.hazard_cooldown_min = min;
        self.hazard_cooldown_max = max;
        self
    }

    /// Set the guest's display name (builder pattern).
    #[must_use]
    pub fn with_guest_name(mut self, name: impl Into<String>) -> Self {
        self.guest_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.chamber_capacity, 6);
        assert_eq!(config.misfire_chance, 0.10);
        assert_eq!(config.drunk_slip_chance, 0.40);
        assert_eq!(config.hazard_chance, 0.30);
        assert_eq!(config.hazard_cooldown_min, 3);
        assert_eq!(config.hazard_cooldown_max, 5);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_starting_lives(5)
            .with_chamber_capacity(8)
            .with_hazard_chance(0.0)
            .with_guest_name("The Stranger");

        assert_eq!(config.starting_lives, 5);
        assert_eq!(config.chamber_capacity, 8);
        assert_eq!(config.hazard_chance, 0.0);
        assert_eq!(config.guest_name, "The Stranger");
    }

    #[test]
    #[should_panic(expected = "Chamber capacity must be at least 1")]
    fn test_zero_capacity_rejected() {
        let _ = GameConfig::new().with_chamber_capacity(0);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
