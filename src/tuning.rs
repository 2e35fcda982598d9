//! Data-driven game balance
//!
//! All difficulty scaling lives here as curves over elapsed Playing time, so
//! a run's feel can be tuned from a JSON file without touching the sim. Every
//! curve is monotonic: score and the speed factors never decrease, the spawn
//! interval never increases and never drops below its floor.

use serde::{Deserialize, Serialize};

/// Difficulty curve constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seconds between spawns at t = 0
    pub base_spawn_interval: f32,
    /// Hard lower bound on the spawn interval
    pub spawn_interval_floor: f32,
    /// Seconds shaved off the spawn interval per elapsed second
    pub spawn_interval_decay: f32,
    /// Global speed gained per elapsed second (factor starts at 1)
    pub game_speed_rate: f32,
    /// Per-asteroid speed gained per elapsed second (factor starts at 1)
    pub speed_multiplier_rate: f32,
    /// Points awarded per elapsed second
    pub score_rate: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_spawn_interval: 1.5,
            spawn_interval_floor: 0.3,
            spawn_interval_decay: 0.02,
            game_speed_rate: 0.01,
            speed_multiplier_rate: 0.005,
            score_rate: 10.0,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Spawn interval after `secs` of play: linear decay, floor-clamped
    pub fn spawn_interval_at(&self, secs: f32) -> f32 {
        (self.base_spawn_interval - secs * self.spawn_interval_decay)
            .max(self.spawn_interval_floor)
    }

    /// Global fall-speed factor after `secs` of play
    pub fn game_speed_at(&self, secs: f32) -> f32 {
        1.0 + secs * self.game_speed_rate
    }

    /// Per-asteroid speed factor after `secs` of play
    pub fn speed_multiplier_at(&self, secs: f32) -> f32 {
        1.0 + secs * self.speed_multiplier_rate
    }

    /// Score after `secs` of play
    pub fn score_at(&self, secs: f32) -> u64 {
        (secs * self.score_rate) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_baselines_at_zero() {
        let t = Tuning::default();
        assert_eq!(t.spawn_interval_at(0.0), t.base_spawn_interval);
        assert_eq!(t.game_speed_at(0.0), 1.0);
        assert_eq!(t.speed_multiplier_at(0.0), 1.0);
        assert_eq!(t.score_at(0.0), 0);
    }

    #[test]
    fn test_from_json_partial_override() {
        let t = Tuning::from_json(r#"{"spawn_interval_floor": 0.5}"#).unwrap();
        assert_eq!(t.spawn_interval_floor, 0.5);
        assert_eq!(t.base_spawn_interval, Tuning::default().base_spawn_interval);
    }

    proptest! {
        #[test]
        fn spawn_interval_non_increasing_and_floored(
            t1 in 0.0f32..600.0, dt in 0.0f32..600.0,
        ) {
            let tuning = Tuning::default();
            let a = tuning.spawn_interval_at(t1);
            let b = tuning.spawn_interval_at(t1 + dt);
            prop_assert!(b <= a);
            prop_assert!(b >= tuning.spawn_interval_floor);
        }

        #[test]
        fn speed_factors_non_decreasing(t1 in 0.0f32..600.0, dt in 0.0f32..600.0) {
            let tuning = Tuning::default();
            prop_assert!(tuning.game_speed_at(t1 + dt) >= tuning.game_speed_at(t1));
            prop_assert!(tuning.speed_multiplier_at(t1 + dt) >= tuning.speed_multiplier_at(t1));
            prop_assert!(tuning.score_at(t1 + dt) >= tuning.score_at(t1));
        }
    }
}
