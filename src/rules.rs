//! Game rules and balance tunables
//!
//! Everything an embedder may want to retune lives here, so variants of the
//! game (shorter rounds, gentler punishment) are a config choice rather than
//! a fork. Defaults reproduce the original browser build.

use serde::{Deserialize, Serialize};

/// What happens when the avatar catches a word of the wrong category.
///
/// Both behaviors exist in the lineage of this game; the default is the
/// harsher one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MismatchRule {
    /// Consume the token, charge a time penalty and reset the combo
    #[default]
    ConsumePenalty,
    /// Leave the token alive: nudge it back above the avatar and let it keep
    /// falling, with no penalty
    Bounce,
}

/// Session rule set. `Default` matches the original 90-second game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ruleset {
    /// Round length and the upper clamp for time bonuses, seconds
    pub game_seconds: f32,
    /// Wrong-category catch behavior
    pub mismatch: MismatchRule,
    /// Time charged for a wrong-category catch (ConsumePenalty only), seconds
    pub wrong_word_penalty: f32,
    /// Time granted by a bonus pickup, seconds
    pub bonus_time: f32,
    /// Time charged by a hazard hit, seconds
    pub hazard_time: f32,
    /// Movement stun after a hazard hit, seconds
    pub hazard_stun: f32,
    /// Extra time granted when an important (glowing) word is caught, seconds
    pub important_bonus: f32,
    /// Combo counter cap
    pub combo_cap: u32,
    /// Maximum concurrent falling items
    pub max_items: usize,
    /// Items spawned up-front when a session starts
    pub initial_burst: usize,
    /// Probability a spawn roll produces a hazard
    pub hazard_chance: f32,
    /// Probability a spawn roll produces a bonus pickup
    pub bonus_chance: f32,
    /// Probability a word spawn uses the currently expected category
    pub expected_weight: f32,
    /// Probability a word spawn is fully random (the rest of a roll picks a
    /// distractor category that is not the expected one)
    pub wild_weight: f32,
    /// Spawn interval at combo 0, seconds
    pub spawn_interval_base: f32,
    /// Spawn interval floor, seconds
    pub spawn_interval_min: f32,
    /// Interval reduction per combo point, seconds
    pub spawn_interval_combo_step: f32,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            game_seconds: 90.0,
            mismatch: MismatchRule::ConsumePenalty,
            wrong_word_penalty: 2.0,
            bonus_time: 1.2,
            hazard_time: 2.5,
            hazard_stun: 0.45,
            important_bonus: 0.6,
            combo_cap: 20,
            max_items: 12,
            initial_burst: 7,
            hazard_chance: 0.10,
            bonus_chance: 0.12,
            expected_weight: 0.78,
            wild_weight: 0.04,
            spawn_interval_base: 0.62,
            spawn_interval_min: 0.34,
            spawn_interval_combo_step: 0.03,
        }
    }
}

impl Ruleset {
    /// Seconds between spawn decisions; tempo rises with combo
    pub fn spawn_interval(&self, combo: u32) -> f32 {
        (self.spawn_interval_base - combo as f32 * self.spawn_interval_combo_step)
            .clamp(self.spawn_interval_min, self.spawn_interval_base)
    }

    /// Score for one accepted word: glowing words are worth double, and the
    /// combo multiplies up to 3x
    pub fn score_for_word(&self, important: bool, combo: u32) -> f32 {
        let base = if important { 2.0 } else { 1.0 };
        let mult = (1.0 + (combo.saturating_sub(1)) as f32 * 0.25).clamp(1.0, 3.0);
        base * mult
    }
}
