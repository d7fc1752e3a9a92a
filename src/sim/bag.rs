//! Low-repetition word sampling
//!
//! One shuffled draw pile per category, refilled from the full bank list when
//! it runs dry, plus a short cross-category recency window. Shuffling without
//! replacement bounds how often any one word can recur; the recency window
//! smooths the repeats a per-category pile cannot see (the same word drawn
//! right after a refill, or near-duplicates across categories).

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::words::{Category, TEMPLATE, WordBank};

/// How many recent draws are held for repeat suppression
pub const RECENCY_WINDOW: usize = 7;

/// Attempts to dodge a recent word before accepting the repeat
pub const DRAW_RETRY_LIMIT: usize = 10;

/// Per-session working draw piles for one persona's lexicon
#[derive(Debug)]
pub struct WordBag {
    bank: &'static WordBank,
    /// One pile per category, indexed by `Category::index`; drawn from the end
    piles: [Vec<&'static str>; 5],
    /// Texts of the last few draws across all categories, oldest first
    recent: VecDeque<&'static str>,
}

impl WordBag {
    pub fn new(bank: &'static WordBank) -> Self {
        Self {
            bank,
            piles: Default::default(),
            recent: VecDeque::with_capacity(RECENCY_WINDOW + 1),
        }
    }

    /// Draw one word of the given category.
    ///
    /// Never fails: an empty pile is refilled with a fresh shuffle of the
    /// category's full list, and a word already in the recency window is sent
    /// to the bottom of the pile and the draw retried, at most
    /// [`DRAW_RETRY_LIMIT`] times. If every attempt lands on a recent word the
    /// repeat is accepted rather than looping forever (categories with fewer
    /// distinct words than the window force this).
    pub fn draw<R: Rng>(&mut self, category: Category, rng: &mut R) -> &'static str {
        for attempt in 0..DRAW_RETRY_LIMIT {
            let pile = &mut self.piles[category.index()];
            if pile.is_empty() {
                pile.extend_from_slice(self.bank.list(category));
                pile.shuffle(rng);
            }
            let word = pile.pop().unwrap_or_else(|| self.bank.list(category)[0]);

            if attempt + 1 < DRAW_RETRY_LIMIT && self.recent.contains(&word) {
                // Send it to the bottom and try the next one.
                self.piles[category.index()].insert(0, word);
                continue;
            }

            self.note_recent(word);
            return word;
        }
        unreachable!("draw loop always returns on its final attempt")
    }

    fn note_recent(&mut self, word: &'static str) {
        self.recent.push_back(word);
        while self.recent.len() > RECENCY_WINDOW {
            self.recent.pop_front();
        }
    }

    /// Validate that every category list is non-empty. Checked once at
    /// session configuration so `draw` can be total afterwards.
    pub fn validate(bank: &WordBank) -> Result<(), Category> {
        for cat in TEMPLATE {
            if bank.list(cat).is_empty() {
                return Err(cat);
            }
        }
        Ok(())
    }
}
