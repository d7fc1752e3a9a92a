//! Session state and core simulation types
//!
//! One `GameState` owns everything a round needs: the draw bags, the story,
//! the avatar, the falling items and the clock. A persona switch or restart
//! builds a fresh `GameState`; nothing is reused across sessions.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use thiserror::Error;

use super::bag::WordBag;
use super::spawn;
use super::story::Story;
use crate::consts::*;
use crate::rules::Ruleset;
use crate::words::{Category, WordBank};

/// Session configuration failure, surfaced synchronously at construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no word bank registered for persona `{0}`")]
    UnknownPersona(String),
    #[error("persona `{persona}` has an empty {category:?} word list")]
    EmptyCategory {
        persona: String,
        category: Category,
    },
}

/// What a falling item is; discriminates collision shape and outcome
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    /// A word bubble, axis-aligned rect
    Word {
        category: Category,
        text: String,
        /// Glowing words score double and grant bonus time
        important: bool,
        width: f32,
        height: f32,
    },
    /// Time pickup, circle
    Bonus { radius: f32 },
    /// Thorn, circle; costs time and stuns
    Hazard { radius: f32 },
}

/// A falling entity. Position is the rect's top-left corner for words and
/// the circle center for pickups.
#[derive(Debug, Clone, PartialEq)]
pub struct FallingItem {
    pub id: u32,
    pub kind: ItemKind,
    pub pos: Vec2,
    /// Vertical fall speed, px/s; items never move horizontally
    pub vel_y: f32,
    /// Render-side wobble phase; no gameplay effect
    pub wobble_phase: f32,
}

/// The player-controlled avatar, a circle on the ground line with a small
/// celebratory hop and a hazard stun timer
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub jump_v: f32,
    /// Seconds of remaining movement stun
    pub stun: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: FIELD_W * 0.5,
            y: PLAYER_BASE_Y,
            jump_v: 0.0,
            stun: 0.0,
        }
    }
}

impl Player {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Integrate one tick of movement. `dir` is -1/0/1 from key state,
    /// ignored while stunned; a drag position overrides keys (pointer drags
    /// move the avatar directly, stun or not).
    pub fn update(&mut self, dir: f32, drag_x: Option<f32>, dt: f32) {
        if self.stun > 0.0 {
            self.stun = (self.stun - dt).max(0.0);
        }

        if let Some(x) = drag_x {
            self.x = x;
        } else if self.stun <= 0.0 {
            self.x += dir * PLAYER_SPEED * dt;
        }
        self.x = self
            .x
            .clamp(PLAYER_RADIUS + 10.0, FIELD_W - PLAYER_RADIUS - 10.0);

        // Hop physics: gravity pulls the avatar back to the ground line.
        self.jump_v += PLAYER_GRAVITY * dt;
        self.y += self.jump_v * dt;
        if self.y > PLAYER_BASE_Y {
            self.y = PLAYER_BASE_Y;
            self.jump_v = 0.0;
        }
    }

    /// Kick off a hop if grounded
    pub fn hop(&mut self, impulse: f32) {
        if self.y >= PLAYER_BASE_Y - 0.5 {
            self.jump_v = impulse;
        }
    }
}

/// Complete session state (deterministic given seed and input sequence)
#[derive(Debug)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rules: Ruleset,
    pub bank: &'static WordBank,
    pub rng: Pcg32,
    pub bag: WordBag,
    pub story: Story,
    pub player: Player,
    /// Active falling items, spawn order
    pub items: Vec<FallingItem>,
    /// Countdown clock, seconds, clamped to [0, rules.game_seconds]
    pub time_left: f32,
    /// Consecutive-catch counter, reset by rejections and hazards
    pub combo: u32,
    /// Total words caught this session
    pub caught: u32,
    pub score: f32,
    /// Terminal flag; once set, ticks are no-ops
    pub over: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) spawn_acc: f32,
    next_id: u32,
}

impl GameState {
    /// Configure a session for a persona: validated bank, fresh bags, empty
    /// story, full clock, seeded RNG and the initial item burst.
    pub fn new(persona_id: &str, seed: u64, rules: Ruleset) -> Result<Self, ConfigError> {
        let bank = WordBank::builtin(persona_id)
            .ok_or_else(|| ConfigError::UnknownPersona(persona_id.to_string()))?;
        Self::with_bank(bank, seed, rules)
    }

    /// Configure a session over an explicit word bank
    pub fn with_bank(
        bank: &'static WordBank,
        seed: u64,
        rules: Ruleset,
    ) -> Result<Self, ConfigError> {
        if let Err(category) = WordBag::validate(bank) {
            return Err(ConfigError::EmptyCategory {
                persona: bank.id.to_string(),
                category,
            });
        }

        let mut state = Self {
            seed,
            time_left: rules.game_seconds,
            rules,
            bank,
            rng: Pcg32::seed_from_u64(seed),
            bag: WordBag::new(bank),
            story: Story::new(),
            player: Player::default(),
            items: Vec::new(),
            combo: 0,
            caught: 0,
            score: 0.0,
            over: false,
            time_ticks: 0,
            spawn_acc: 0.0,
            next_id: 1,
        };

        // Populate the field so the first seconds aren't empty.
        for _ in 0..state.rules.initial_burst {
            let item = spawn::roll_item(&mut state);
            state.items.push(item);
        }

        log::info!(
            "session configured: persona={} seed={} time={}s",
            bank.id,
            seed,
            state.rules.game_seconds
        );
        Ok(state)
    }

    /// Allocate a new item ID
    pub fn next_item_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// True once the clock has run out; terminal
    pub fn is_session_over(&self) -> bool {
        self.over
    }

    /// Manual story edit: drop the most recent word (reopening the last
    /// completed sentence when the frame is empty)
    pub fn request_undo(&mut self) {
        if self.story.undo() {
            self.caught = self.caught.saturating_sub(1);
        }
    }

    /// Manual story edit: discard the whole story
    pub fn request_clear(&mut self) {
        self.story.clear();
        self.caught = 0;
    }

    /// The composed story text, completed sentences plus the in-progress
    /// fragment
    pub fn compose_full_story(&self) -> String {
        self.story.compose()
    }
}
