//! Headless demo driver
//!
//! Plays one bot-driven session from the terminal: every tick the bot chases
//! the lowest word of the category the template needs (detouring for bonus
//! pickups and dodging thorns), and the composed story plus a final HUD dump
//! are printed when the clock runs out. Handy for eyeballing balance without
//! a browser host.

use word_forest::consts::*;
use word_forest::sim::{GameEvent, GameState, ItemKind, TickInput, tick};
use word_forest::{Ruleset, WordBank};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let persona = args.next().unwrap_or_else(|| "nuve".to_string());
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0xC0FFEE);

    let mut state = match GameState::new(&persona, seed, Ruleset::default()) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("cannot start session: {err}");
            eprintln!(
                "personas: {}",
                WordBank::all()
                    .iter()
                    .map(|b| b.id)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            std::process::exit(1);
        }
    };

    println!("{}", state.bank.prompt);

    while !state.is_session_over() {
        let input = bot_input(&state);
        let result = tick(&mut state, &input, SIM_DT);

        for event in &result.events {
            match event {
                GameEvent::WordAccepted { text, category } => {
                    println!("  caught {:>9}: {text}", category.label());
                }
                GameEvent::SentenceCompleted(sentence) => println!("* {sentence}"),
                GameEvent::WordRejected => println!("  rejected (wrong slot)"),
                GameEvent::BonusCollected => println!("  +time"),
                GameEvent::HazardHit => println!("  ouch, thorn"),
                GameEvent::TimeUp => println!("-- time up --"),
            }
        }
    }

    let hud = state.hud();
    println!();
    println!("historia: {}", state.compose_full_story());
    match serde_json::to_string_pretty(&hud) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("hud serialization failed: {err}"),
    }
}

/// Steer toward the most urgent target, the way a patient kid would
fn bot_input(state: &GameState) -> TickInput {
    let expected = state.story.expected();

    // Lowest matching word on screen is the deadline.
    let target = state
        .items
        .iter()
        .filter_map(|item| match &item.kind {
            ItemKind::Word {
                category, width, ..
            } if *category == expected => Some((item.pos.y, item.pos.x + width / 2.0)),
            _ => None,
        })
        .max_by(|a, b| a.0.total_cmp(&b.0));

    // No needed word around: grab a bonus if one is falling.
    let fallback = state
        .items
        .iter()
        .filter_map(|item| match item.kind {
            ItemKind::Bonus { .. } => Some((item.pos.y, item.pos.x)),
            _ => None,
        })
        .max_by(|a, b| a.0.total_cmp(&b.0));

    let mut aim_x = match target.or(fallback) {
        Some((_, x)) => x,
        None => FIELD_W * 0.5,
    };

    // Sidestep thorns that are about to land on us.
    for item in &state.items {
        if let ItemKind::Hazard { radius } = item.kind {
            let close_y = item.pos.y > PLAYER_BASE_Y - 140.0;
            let close_x = (item.pos.x - aim_x).abs() < PLAYER_RADIUS + radius + 12.0;
            if close_y && close_x {
                aim_x += if item.pos.x < aim_x { 90.0 } else { -90.0 };
            }
        }
    }

    TickInput {
        drag_x: Some(aim_x.clamp(PLAYER_RADIUS + 10.0, FIELD_W - PLAYER_RADIUS - 10.0)),
        ..Default::default()
    }
}
