//! # Render Module
//!
//! Turns scanned lines into display rows with chords transposed and aligned.
//!
//! ## Alignment Strategies
//! The two chord notations are aligned by two separate strategies, chosen by
//! the scanner's classification:
//!
//! ### Offset-based (`inline`)
//! - Used for `InlineAnnotated` lines
//! - Each chord is written at the char offset recorded by the scanner
//! - Exact: a chord always sits over the character it annotates
//!
//! ### Column/word-based (`paired`)
//! - Used for `ChordLyricPair` lines
//! - `PairAlignment::Columns` keeps the authored chord columns
//! - `PairAlignment::Words` rebuilds both rows word by word
//! - Approximate: there is no explicit link between a chord and a syllable
//!
//! ## Spacing
//! - Leading and trailing blank lines are dropped
//! - A run of blank lines becomes at most `blank_run_cap` spacers
//! - A separator swallows the blank lines around it and is emitted once
//!
//! ## Example
//! ```rust
//! use chordsheet::{render_song, RenderedLine};
//!
//! let song = render_song("[G]Grande es tu [C]fidelidad", "G", 2);
//!
//! assert_eq!(song.current_key_label, "A");
//! assert_eq!(
//!     song.display_lines,
//!     vec![RenderedLine::Chords {
//!         chords: "A            D".to_string(),
//!         lyrics: Some("Grande es tu fidelidad".to_string()),
//!     }]
//! );
//! ```

mod format;
mod inline;
mod paired;
mod types;


pub use format::{escape_html, to_html, to_text};
pub use types::{RenderedLine, RenderedSong};

use crate::config::RenderConfig;
use crate::scanner::Line;

/// Render scanned lines, transposing every chord by `semitones`.
pub fn render_lines(lines: &[Line], semitones: i32, config: &RenderConfig) -> Vec<RenderedLine> {
    let mut out: Vec<RenderedLine> = Vec::new();
    let mut pending_blanks = 0;

    for line in lines {
        match line {
            Line::Blank => {
                pending_blanks += 1;
                continue;
            }
            Line::Separator => {
                pending_blanks = 0;
                if !matches!(out.last(), None | Some(RenderedLine::Separator)) {
                    out.push(RenderedLine::Separator);
                }
                continue;
            }
            _ => {}
        }

        if pending_blanks > 0 && !matches!(out.last(), None | Some(RenderedLine::Separator)) {
            for _ in 0..pending_blanks.min(config.blank_run_cap.max(1)) {
                out.push(RenderedLine::Spacer);
            }
        }
        pending_blanks = 0;
        out.push(render_line(line, semitones, config));
    }

    if matches!(out.last(), Some(RenderedLine::Separator)) {
        out.pop();
    }
    out
}

fn render_line(line: &Line, semitones: i32, config: &RenderConfig) -> RenderedLine {
    match line {
        Line::Blank => RenderedLine::Spacer,
        Line::Separator => RenderedLine::Separator,
        Line::SectionLabel(label) => RenderedLine::Section {
            label: label.clone(),
        },
        Line::InlineAnnotated { lyrics, chords } => inline::render(lyrics, chords, semitones),
        Line::ChordLyricPair { chords, lyrics } => {
            paired::render(chords, lyrics.as_deref(), semitones, config.pair_alignment)
        }
        Line::PlainText(text) => RenderedLine::Lyrics { text: text.clone() },
    }
}
