//! Chord line detection for traditional chords-above-lyrics blocks.
//!
//! This is a shape heuristic and cannot be exact: `A ti` or a one-word `Em`
//! lyric look like chords. All of the policy sits in [`is_chord_line`] and
//! its two [`RenderConfig`] knobs.

use tracing::trace;

use crate::chord::{is_chord_shaped, is_no_chord_mark};
use crate::config::RenderConfig;

/// Bar and hold marks (`|`, `||:`, `.`, `/`, `%`) are not counted either way.
fn is_bar_mark(word: &str) -> bool {
    word.chars()
        .all(|c| matches!(c, '|' | '/' | '-' | '%' | '.' | ':'))
}

/// Whether a bracket-free line is a line of chords.
pub fn is_chord_line(line: &str, config: &RenderConfig) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.chars().count() > config.max_chord_line_width {
        return false;
    }

    let words: Vec<&str> = trimmed
        .split_whitespace()
        .filter(|w| !is_bar_mark(w))
        .collect();
    if words.is_empty() {
        return false;
    }

    let chord_words = words
        .iter()
        .filter(|w| is_chord_shaped(w) || is_no_chord_mark(w))
        .count();
    let ratio = chord_words as f64 / words.len() as f64;
    let is_chord = ratio >= config.chord_line_threshold;
    trace!(line = trimmed, chord_words, words = words.len(), is_chord, "classified line");
    is_chord
}
