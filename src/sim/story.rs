//! Sentence assembly and the story ledger
//!
//! The slot machine that gives the game its coherence: words are only
//! accepted in template order, a full frame closes into a sentence, and the
//! ledger keeps both the composed text and the raw slot words so undo can
//! restore exactly what was caught instead of re-parsing prose.

use serde::Serialize;

use crate::words::{Category, TEMPLATE};

/// Outcome of submitting one word to the current slot
#[derive(Debug, Clone, PartialEq)]
pub enum Submit {
    /// Word filled its slot; more slots remain
    Accepted,
    /// Word filled the last slot; the completed sentence text is returned
    /// and the frame has been reset
    Completed(String),
    /// Word's category does not match the expected slot; nothing changed
    Mismatch,
}

/// One completed sentence: display text plus the slot words it was built from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    pub text: String,
    words: Vec<String>,
}

/// The story under construction: completed sentences plus the in-progress
/// slot frame.
///
/// Frame invariant: the frame holds exactly the filled slots, in template
/// order, so its length *is* the expected-slot cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Story {
    sentences: Vec<Sentence>,
    frame: Vec<String>,
}

impl Story {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next unfilled slot, 0..5
    pub fn expected_index(&self) -> usize {
        self.frame.len()
    }

    /// Category the next caught word must have
    pub fn expected(&self) -> Category {
        TEMPLATE[self.frame.len()]
    }

    /// Words of the in-progress sentence, template order
    pub fn frame(&self) -> &[String] {
        &self.frame
    }

    /// Completed sentences, oldest first
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Total words currently held (completed sentences and frame)
    pub fn word_count(&self) -> usize {
        self.sentences.len() * TEMPLATE.len() + self.frame.len()
    }

    /// Offer a word for the current slot.
    ///
    /// A category mismatch is a pure no-op; the caller decides whether that
    /// costs anything. Filling the last slot composes the sentence, pushes it
    /// to the ledger and resets the frame in one step.
    pub fn submit(&mut self, category: Category, text: &str) -> Submit {
        if category != self.expected() {
            return Submit::Mismatch;
        }

        // The first word of a sentence gets capitalized at entry, so the
        // frame always reads as prose.
        if self.frame.is_empty() {
            self.frame.push(capitalize_first(text));
        } else {
            self.frame.push(text.to_string());
        }

        if self.frame.len() == TEMPLATE.len() {
            let words = std::mem::take(&mut self.frame);
            let text = compose_sentence(&words);
            self.sentences.push(Sentence {
                text: text.clone(),
                words,
            });
            return Submit::Completed(text);
        }
        Submit::Accepted
    }

    /// Remove the most recent word.
    ///
    /// A non-empty frame loses its last slot. An empty frame pops the last
    /// completed sentence back into the frame (from its retained slot words,
    /// never by splitting composed text) and then drops that sentence's final
    /// word. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.frame.pop().is_some() {
            return true;
        }
        if let Some(sentence) = self.sentences.pop() {
            self.frame = sentence.words;
            self.frame.pop();
            return true;
        }
        false
    }

    /// Drop everything: completed sentences and the frame
    pub fn clear(&mut self) {
        self.sentences.clear();
        self.frame.clear();
    }

    /// The full story so far: completed sentences followed by the in-progress
    /// fragment, terminal punctuation normalized, single-space joined.
    pub fn compose(&self) -> String {
        let mut parts: Vec<String> = self.sentences.iter().map(|s| s.text.clone()).collect();
        if !self.frame.is_empty() {
            parts.push(terminate(&self.frame.join(" ")));
        }
        parts.join(" ")
    }
}

/// Compose one full frame into display text.
///
/// The adjective closes the sentence with a ", muy" connective:
/// "Nuve flota una paz en el cielo, muy suave."
fn compose_sentence(words: &[String]) -> String {
    debug_assert_eq!(words.len(), TEMPLATE.len());
    format!(
        "{} {} {} {}, muy {}.",
        words[0], words[1], words[2], words[3], words[4]
    )
}

/// Append a "." unless the text already ends in terminal punctuation
fn terminate(text: &str) -> String {
    if text.ends_with(['.', '!', '?']) {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
