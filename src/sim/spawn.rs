//! Falling-item spawner
//!
//! Decides each tick whether a new item drops and what it is. Word spawns
//! lean heavily toward the category the template needs next, with a sprinkle
//! of distractors so the choice stays a challenge; a slice of the rolls are
//! bonus and hazard pickups instead of words.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::{FallingItem, GameState, ItemKind};
use crate::consts::*;
use crate::words::{Category, TEMPLATE};

/// Accumulate the spawn clock and roll a new item when it fires.
///
/// The interval shortens as the combo rises (the field tightens at high
/// tempo); the item cap keeps the field readable. The returned item has not
/// been inserted: the tick inserts it after collision resolution so nothing
/// spawned this tick can be caught this tick.
pub(crate) fn advance(state: &mut GameState, dt: f32) -> Option<FallingItem> {
    state.spawn_acc += dt;
    let every = state.rules.spawn_interval(state.combo);
    if state.spawn_acc < every {
        return None;
    }
    state.spawn_acc = 0.0;

    if state.items.len() >= state.rules.max_items {
        return None;
    }
    Some(roll_item(state))
}

/// Roll one item: hazard, bonus, or word
pub(crate) fn roll_item(state: &mut GameState) -> FallingItem {
    let id = state.next_item_id();
    let roll: f32 = state.rng.random();

    if roll < state.rules.hazard_chance {
        let radius = state.rng.random_range(14.0..18.0);
        return FallingItem {
            id,
            kind: ItemKind::Hazard { radius },
            pos: Vec2::new(state.rng.random_range(40.0..FIELD_W - 40.0), -30.0),
            vel_y: state.rng.random_range(170.0..250.0),
            wobble_phase: state.rng.random_range(0.0..std::f32::consts::TAU),
        };
    }

    if roll < state.rules.hazard_chance + state.rules.bonus_chance {
        let radius = state.rng.random_range(14.0..18.0);
        return FallingItem {
            id,
            kind: ItemKind::Bonus { radius },
            pos: Vec2::new(state.rng.random_range(40.0..FIELD_W - 40.0), -30.0),
            vel_y: state.rng.random_range(160.0..235.0),
            wobble_phase: state.rng.random_range(0.0..std::f32::consts::TAU),
        };
    }

    roll_word(state, id)
}

fn roll_word(state: &mut GameState, id: u32) -> FallingItem {
    let category = roll_category(state);
    let text = state.bag.draw(category, &mut state.rng).to_string();

    // Important categories always glow; any word can glow by luck.
    let important = category.is_important() || state.rng.random::<f32>() < 0.18;

    let width = word_bubble_width(&text);
    let height = WORD_HEIGHT;
    let x = state.rng.random_range(20.0..(FIELD_W - width - 20.0).max(21.0));
    let y = -height - state.rng.random_range(10.0..60.0);

    FallingItem {
        id,
        kind: ItemKind::Word {
            category,
            text,
            important,
            width,
            height,
        },
        pos: Vec2::new(x, y),
        vel_y: state.rng.random_range(125.0..215.0),
        wobble_phase: state.rng.random_range(0.0..std::f32::consts::TAU),
    }
}

/// Weighted category choice: mostly what the template needs now, sometimes a
/// useful distractor, rarely anything at all
fn roll_category(state: &mut GameState) -> Category {
    let need = state.story.expected();
    let r: f32 = state.rng.random();

    if r < state.rules.expected_weight {
        return need;
    }
    if r >= 1.0 - state.rules.wild_weight {
        return *TEMPLATE.choose(&mut state.rng).unwrap_or(&need);
    }
    let others: Vec<Category> = TEMPLATE.iter().copied().filter(|&c| c != need).collect();
    *others.choose(&mut state.rng).unwrap_or(&need)
}

/// Approximate text measurement for the bubble rect (the host renders the
/// real glyphs; gameplay only needs a plausible hit box)
fn word_bubble_width(text: &str) -> f32 {
    text.chars().count() as f32 * 11.0 + 28.0
}
