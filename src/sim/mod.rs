//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by `tick(dt)` from an external clock
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod bag;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod story;
pub mod tick;

pub use bag::{DRAW_RETRY_LIMIT, RECENCY_WINDOW, WordBag};
pub use collision::{circle_circle_overlap, circle_rect_overlap};
pub use state::{ConfigError, FallingItem, GameState, ItemKind, Player};
pub use story::{Sentence, Story, Submit};
pub use tick::{GameEvent, HudSnapshot, TickInput, TickResult, tick};
