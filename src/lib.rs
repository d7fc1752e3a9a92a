//! Word Forest - story-assembly engine for a falling-words catching game
//!
//! A player avatar moves along the ground and catches falling word bubbles.
//! Only the grammatical category the sentence template needs next is
//! accepted; five catches close a sentence, sentences accumulate into a short
//! story, all against a countdown clock spiced with bonus and hazard pickups.
//!
//! Core modules:
//! - `words`: static persona lexicons and the sentence template
//! - `rules`: session tunables and rule-variant switches
//! - `sim`: deterministic simulation (sampling, story assembly, spawning,
//!   collisions, the per-frame tick)
//!
//! Rendering, audio and input capture are the host's problem: the engine
//! consumes a [`sim::TickInput`] and returns a [`sim::TickResult`] of
//! abstract events each frame.

pub mod rules;
pub mod sim;
pub mod words;

pub use rules::{MismatchRule, Ruleset};
pub use sim::{ConfigError, GameEvent, GameState, HudSnapshot, TickInput, TickResult, tick};
pub use words::{Category, TEMPLATE, WordBank};

/// Game configuration constants
pub mod consts {
    /// Suggested fixed timestep for hosts without a frame clock (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Play field dimensions (logical pixels)
    pub const FIELD_W: f32 = 900.0;
    pub const FIELD_H: f32 = 520.0;

    /// Avatar geometry and movement
    pub const PLAYER_RADIUS: f32 = 46.0;
    pub const PLAYER_SPEED: f32 = 560.0;
    pub const PLAYER_BASE_Y: f32 = FIELD_H - 74.0;
    pub const PLAYER_GRAVITY: f32 = 1200.0;

    /// Hop impulses (negative is up)
    pub const CATCH_HOP: f32 = -340.0;
    pub const PICKUP_HOP: f32 = -290.0;

    /// Word bubble height; width scales with the text
    pub const WORD_HEIGHT: f32 = 38.0;

    /// Items this far below the field are discarded unconsumed
    pub const DESPAWN_MARGIN: f32 = 60.0;
}
