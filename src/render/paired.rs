//! Word-based alignment for chords-above-lyrics pairs.
//!
//! There are no explicit offsets here, only the columns the author typed the
//! chords at. Alignment is therefore approximate; lines whose lyric words do
//! not line up one-to-one with the chords can drift.

use super::RenderedLine;
use crate::chord::transpose_chord;
use crate::config::PairAlignment;

pub(crate) fn render(
    chords: &str,
    lyrics: Option<&str>,
    semitones: i32,
    alignment: PairAlignment,
) -> RenderedLine {
    let chords = expand_tabs(chords);
    let lyrics = lyrics.map(expand_tabs);
    let words: Vec<(usize, String)> = words_with_columns(&chords)
        .into_iter()
        .map(|(column, word)| (column, transpose_chord(word, semitones)))
        .collect();

    let (chord_row, lyric_row) = match alignment {
        PairAlignment::Columns => (align_to_columns(&words), lyrics),
        PairAlignment::Words => {
            let (chord_row, lyric_row) = align_to_words(&words, lyrics.as_deref().unwrap_or(""));
            (chord_row, lyrics.map(|_| lyric_row))
        }
    };

    RenderedLine::Chords {
        chords: chord_row,
        lyrics: lyric_row.filter(|l| !l.trim().is_empty()),
    }
}

const TAB_WIDTH: usize = 8;

/// Replace tabs with spaces up to the next tab stop so columns are chars.
fn expand_tabs(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let next = (column / TAB_WIDTH + 1) * TAB_WIDTH;
            out.extend(std::iter::repeat(' ').take(next - column));
            column = next;
        } else {
            out.push(c);
            column += 1;
        }
    }
    out
}

/// Whitespace-separated words with the char column each starts at.
fn words_with_columns(line: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start: Option<(usize, usize)> = None;

    for (column, (byte, c)) in line.char_indices().enumerate() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some((column, byte)),
            (true, Some((col, from))) => {
                words.push((col, &line[from..byte]));
                start = None;
            }
            _ => {}
        }
    }
    if let Some((col, from)) = start {
        words.push((col, &line[from..]));
    }
    words
}

/// Keep each chord at its authored column, pushing right only when the
/// previous chord grew into it.
fn align_to_columns(words: &[(usize, String)]) -> String {
    let mut row = String::new();
    let mut width = 0;

    for (column, chord) in words {
        let start = if row.is_empty() {
            *column
        } else {
            (*column).max(width + 1)
        };
        pad_to(&mut row, &mut width, start);
        row.push_str(chord);
        width += chord.chars().count();
    }
    row
}

/// Re-lay both rows so chord `i` starts where lyric word `i` starts.
///
/// Lyric words keep their indentation and the gaps between them. A gap only
/// widens when the chord above the next word would run into the previous
/// chord. Chords past the last lyric word keep their authored spacing.
fn align_to_words(words: &[(usize, String)], lyrics: &str) -> (String, String) {
    let lyric_words = words_with_columns(lyrics);
    let columns = words.len().max(lyric_words.len());

    let mut chord_row = String::new();
    let mut chord_width = 0;
    let mut lyric_row = String::new();
    let mut lyric_width = 0;
    let mut shift = 0;

    for i in 0..columns {
        let chord = words.get(i);
        let word = lyric_words.get(i);
        let authored = word
            .map(|(column, _)| *column)
            .or_else(|| chord.map(|(column, _)| *column))
            .unwrap_or(0);
        let mut start = authored + shift;

        if let Some((_, chord)) = chord {
            if !chord_row.is_empty() {
                start = start.max(chord_width + 1);
            }
            shift = start - authored;
            pad_to(&mut chord_row, &mut chord_width, start);
            chord_row.push_str(chord);
            chord_width += chord.chars().count();
        }
        if let Some((_, word)) = word {
            pad_to(&mut lyric_row, &mut lyric_width, start);
            lyric_row.push_str(word);
            lyric_width += word.chars().count();
        }
    }

    (chord_row, lyric_row)
}

fn pad_to(row: &mut String, width: &mut usize, column: usize) {
    while *width < column {
        row.push(' ');
        *width += 1;
    }
}
