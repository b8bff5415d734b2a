//! Offset-based alignment for inline-annotated lines.
//!
//! Chords are written into a char grid at their recorded offsets. Chords that
//! sit too close simply overwrite the tail of the previous chord.

use super::RenderedLine;
use crate::chord::transpose_chord;
use crate::scanner::Annotation;

pub(crate) fn render(lyrics: &str, annotations: &[Annotation], semitones: i32) -> RenderedLine {
    let mut row: Vec<char> = Vec::new();

    for annotation in annotations {
        let chord = transpose_chord(&annotation.chord, semitones);
        let end = annotation.offset + chord.chars().count();
        if row.len() < end {
            row.resize(end, ' ');
        }
        for (i, c) in chord.chars().enumerate() {
            row[annotation.offset + i] = c;
        }
    }

    let chords: String = row.into_iter().collect();
    let lyrics = if lyrics.trim().is_empty() {
        None
    } else {
        Some(lyrics.to_string())
    };

    RenderedLine::Chords {
        chords: chords.trim_end().to_string(),
        lyrics,
    }
}
