//! # Scanner Module
//!
//! Classifies every line of song content exactly once into a [`Line`].
//!
//! ## Line Forms
//! Song content mixes two chord notations plus structure:
//! ```text
//! {Coro}                          SectionLabel("Coro")
//! [G]Grande es tu [C]fidelidad    InlineAnnotated
//!                                 Blank
//! G        Em                     ChordLyricPair (chords above ...
//! Amazing grace                   ... the lyric line below)
//! ---                             Separator
//! Solo texto                      PlainText
//! ```
//!
//! ## Classification Order
//! blank → section label → inline brackets → separator → chord line →
//! plain text. A chord line takes the next line as its lyrics when that line
//! is plain text; otherwise it stands alone.
//!
//! ## Section Labels
//! - `{Label}` and ChordPro directives (`{c: Coro}`, `{soc}`, `{eoc}`)
//! - a whole line `[Label]` when the label starts with an uppercase letter
//!   and is not made of chords (`[Coro]`, `[Intro]`, but not `[G]` or `[N.C.]`)
//!
//! ChordPro metadata (`{title: ...}`, `{key: G}`) is not part of the body and
//! scans as a blank line.
//!
//! ## Related Modules
//! - `inline` - bracket extraction with char offsets
//! - `classify` - the chord line heuristic
//! - `render` - consumes `Line` without re-inspecting the text

mod classify;
mod inline;

pub use classify::is_chord_line;

use crate::chord::{is_chord_shaped, is_no_chord_mark};
use crate::config::RenderConfig;

/// A chord annotation at a char position of clean lyric text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub chord: String,
    pub offset: usize,
}

/// One classified line of song content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Blank,
    /// Decorative line made only of punctuation or dashes.
    Separator,
    SectionLabel(String),
    InlineAnnotated {
        lyrics: String,
        chords: Vec<Annotation>,
    },
    ChordLyricPair {
        chords: String,
        lyrics: Option<String>,
    },
    PlainText(String),
}

/// Scan song content into classified lines.
///
/// # Example
/// ```rust
/// use chordsheet::scanner::{scan, Line};
/// use chordsheet::RenderConfig;
///
/// let lines = scan("{Coro}\nG   D\nSanto, santo", &RenderConfig::default());
/// assert_eq!(lines[0], Line::SectionLabel("Coro".to_string()));
/// assert_eq!(
///     lines[1],
///     Line::ChordLyricPair {
///         chords: "G   D".to_string(),
///         lyrics: Some("Santo, santo".to_string()),
///     }
/// );
/// ```
pub fn scan(content: &str, config: &RenderConfig) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for raw in content.lines() {
        let line = scan_line(raw, config);
        if let (Line::PlainText(text), Some(Line::ChordLyricPair { lyrics, .. })) =
            (&line, lines.last_mut())
        {
            if lyrics.is_none() {
                *lyrics = Some(text.clone());
                continue;
            }
        }
        lines.push(line);
    }

    lines
}

fn scan_line(raw: &str, config: &RenderConfig) -> Line {
    let line = raw.trim_end();
    let trimmed = line.trim_start();

    if trimmed.is_empty() {
        return Line::Blank;
    }
    if let Some(label) = section_label(trimmed) {
        return label;
    }
    if trimmed.contains('[') && trimmed.contains(']') {
        if let Some((lyrics, chords)) = inline::extract(line) {
            return Line::InlineAnnotated { lyrics, chords };
        }
    }
    if is_separator(trimmed) {
        return Line::Separator;
    }
    if is_chord_line(trimmed, config) {
        return Line::ChordLyricPair {
            chords: line.to_string(),
            lyrics: None,
        };
    }
    Line::PlainText(line.to_string())
}

fn section_label(trimmed: &str) -> Option<Line> {
    if let Some(inner) = trimmed.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        let inner = inner.trim();
        if inner.is_empty() || inner.contains(['{', '}']) {
            return None;
        }
        return Some(directive(inner));
    }

    let inner = trimmed.strip_prefix('[')?.strip_suffix(']')?.trim();
    if inner.contains(['[', ']']) {
        return None;
    }
    let starts_upper = inner.chars().next().is_some_and(char::is_uppercase);
    let all_chords = inner
        .split_whitespace()
        .all(|w| is_chord_shaped(w) || is_no_chord_mark(w));
    if starts_upper && !all_chords {
        Some(Line::SectionLabel(inner.to_string()))
    } else {
        None
    }
}

/// Interpret the inside of a `{...}` line.
///
/// Comment and `start_of_*` directives label a section; `end_of_*` and
/// metadata directives (`title`, `artist`, `key`, ...) leave a blank line.
/// A brace line that is not a directive labels itself.
fn directive(inner: &str) -> Line {
    let (name, value) = match inner.split_once(':') {
        Some((name, value)) => (name.trim().to_ascii_lowercase(), Some(value.trim())),
        None => (inner.to_ascii_lowercase(), None),
    };

    let section = match name.as_str() {
        "soc" | "start_of_chorus" => Some("Chorus"),
        "sov" | "start_of_verse" => Some("Verse"),
        "sob" | "start_of_bridge" => Some("Bridge"),
        "sot" | "start_of_tab" => Some("Tab"),
        "sog" | "start_of_grid" => Some("Grid"),
        _ => None,
    };
    if let Some(default_label) = section {
        return match value {
            Some(value) if !value.is_empty() => Line::SectionLabel(value.to_string()),
            _ => Line::SectionLabel(default_label.to_string()),
        };
    }

    match (name.as_str(), value) {
        ("c" | "comment" | "ci" | "comment_italic" | "cb" | "comment_box", Some(value)) => {
            if value.is_empty() {
                Line::Blank
            } else {
                Line::SectionLabel(value.to_string())
            }
        }
        ("eoc" | "eov" | "eob" | "eot" | "eog", _) => Line::Blank,
        (name, Some(value)) if name.starts_with("start_of_") && !value.is_empty() => {
            Line::SectionLabel(value.to_string())
        }
        (name, _) if name.starts_with("end_of_") || name.starts_with("start_of_") => Line::Blank,
        (_, Some(_)) => Line::Blank,
        (_, None) if METADATA_DIRECTIVES.contains(&name.as_str()) => Line::Blank,
        (_, None) => Line::SectionLabel(inner.to_string()),
    }
}

/// ChordPro directives that describe the song rather than its body.
const METADATA_DIRECTIVES: [&str; 14] = [
    "title", "t", "subtitle", "st", "artist", "composer", "lyricist", "album", "year", "key",
    "tempo", "time", "capo", "copyright",
];

fn is_separator(trimmed: &str) -> bool {
    trimmed
        .chars()
        .all(|c| c.is_whitespace() || c.is_ascii_punctuation() || matches!(c, '—' | '–' | '…' | '·' | '•'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_default(content: &str) -> Vec<Line> {
        scan(content, &RenderConfig::default())
    }

    fn label(s: &str) -> Line {
        Line::SectionLabel(s.to_string())
    }

    #[test]
    fn test_empty_content() {
        assert!(scan_default("").is_empty());
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines = scan_default("Hola\n\n\n  \nAdios");
        assert_eq!(
            lines,
            vec![
                Line::PlainText("Hola".to_string()),
                Line::Blank,
                Line::Blank,
                Line::Blank,
                Line::PlainText("Adios".to_string()),
            ]
        );
    }

    #[test]
    fn test_brace_labels_and_directives() {
        let lines = scan_default(
            "{Chorus}\n{c: Coro 2}\n{soc}\n{eoc}\n{end_of_verse}\n{start_of_verse: Verso 2}\n{ci:}\n{start_of_intro: Intro}",
        );
        assert_eq!(
            lines,
            vec![
                label("Chorus"),
                label("Coro 2"),
                label("Chorus"),
                Line::Blank,
                Line::Blank,
                label("Verso 2"),
                Line::Blank,
                label("Intro"),
            ]
        );
    }

    #[test]
    fn test_metadata_directives_are_not_sections() {
        let lines = scan_default("{title: Santo}\n{artist: Anon}\n{Key: G}\n{capo: 2}\n{key}\n[G]Santo");
        assert_eq!(&lines[..5], &[Line::Blank, Line::Blank, Line::Blank, Line::Blank, Line::Blank]);
        assert!(matches!(lines[5], Line::InlineAnnotated { .. }));
    }

    #[test]
    fn test_bracket_labels_versus_chords() {
        assert_eq!(scan_default("[Coro]"), vec![label("Coro")]);
        assert_eq!(scan_default("  [Verso 1]  "), vec![label("Verso 1")]);
        assert!(matches!(scan_default("[G]")[0], Line::InlineAnnotated { .. }));
        assert!(matches!(scan_default("[xyz]")[0], Line::InlineAnnotated { .. }));
        assert!(matches!(scan_default("[G D]")[0], Line::InlineAnnotated { .. }));
        assert!(matches!(scan_default("[N.C.]")[0], Line::InlineAnnotated { .. }));
        assert!(matches!(scan_default("[NC]")[0], Line::InlineAnnotated { .. }));
    }

    #[test]
    fn test_inline_line() {
        let lines = scan_default("[G]Grande es tu [C]fidelidad");
        assert_eq!(
            lines,
            vec![Line::InlineAnnotated {
                lyrics: "Grande es tu fidelidad".to_string(),
                chords: vec![
                    Annotation { chord: "G".to_string(), offset: 0 },
                    Annotation { chord: "C".to_string(), offset: 13 },
                ],
            }]
        );
    }

    #[test]
    fn test_brackets_without_chords_are_plain_text() {
        assert_eq!(
            scan_default("a ] b [ c"),
            vec![Line::PlainText("a ] b [ c".to_string())]
        );
    }

    #[test]
    fn test_separators() {
        assert_eq!(scan_default("---"), vec![Line::Separator]);
        assert_eq!(scan_default(" - - - "), vec![Line::Separator]);
        assert_eq!(scan_default("——"), vec![Line::Separator]);
        assert_eq!(scan_default("{}"), vec![Line::Separator]);
    }

    #[test]
    fn test_chord_line_pairs_with_next_lyric() {
        let lines = scan_default("G        Em\nAmazing grace\nhow sweet");
        assert_eq!(
            lines,
            vec![
                Line::ChordLyricPair {
                    chords: "G        Em".to_string(),
                    lyrics: Some("Amazing grace".to_string()),
                },
                Line::PlainText("how sweet".to_string()),
            ]
        );
    }

    #[test]
    fn test_chord_line_without_partner() {
        let lines = scan_default("G  D\n\nHola\nC  G\nD  Em\n{Coro}");
        assert_eq!(
            lines,
            vec![
                Line::ChordLyricPair { chords: "G  D".to_string(), lyrics: None },
                Line::Blank,
                Line::PlainText("Hola".to_string()),
                Line::ChordLyricPair { chords: "C  G".to_string(), lyrics: None },
                Line::ChordLyricPair { chords: "D  Em".to_string(), lyrics: None },
                label("Coro"),
            ]
        );
    }

    #[test]
    fn test_chord_line_keeps_indentation() {
        let lines = scan_default("    D\nSanto");
        assert_eq!(
            lines,
            vec![Line::ChordLyricPair {
                chords: "    D".to_string(),
                lyrics: Some("Santo".to_string()),
            }]
        );
    }

    #[test]
    fn test_crlf_content() {
        let lines = scan_default("{Coro}\r\n[A]Hola\r\n");
        assert_eq!(lines[0], label("Coro"));
        assert_eq!(
            lines[1],
            Line::InlineAnnotated {
                lyrics: "Hola".to_string(),
                chords: vec![Annotation { chord: "A".to_string(), offset: 0 }],
            }
        );
    }
}
