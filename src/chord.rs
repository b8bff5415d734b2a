//! Chord symbol parsing and transposition.
//!
//! A chord token is split into a root note, a free-text quality suffix and an
//! optional slash bass: `F#m7b5/A` is root `F#`, quality `m7b5`, bass `A`.
//! Only the root and bass move when transposing. The quality is never
//! interpreted, so nonstandard annotations (`G(add9)`, `Dsus4-3`) survive
//! untouched.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pitch::NoteName;

/// Strict chord shape used to tell chord words from lyric words.
///
/// Unlike [`ChordToken::parse`], which accepts any suffix, this only allows
/// the usual chord vocabulary so that `Amazing` or `Coro` is not a chord.
static CHORD_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-G][#b]?(?:maj|min|dim|aug|sus|add|m|M|[0-9]|[#b+°ø()\-]|/[0-9]+)*(?:/[A-G][#b]?)?$",
    )
    .expect("chord shape pattern is valid")
});

/// Whether a whitespace-free word looks like a chord symbol.
///
/// # Examples
/// ```
/// use chordsheet::chord::is_chord_shaped;
///
/// assert!(is_chord_shaped("Am7"));
/// assert!(is_chord_shaped("F#m7b5/A"));
/// assert!(is_chord_shaped("C6/9"));
/// assert!(!is_chord_shaped("Amazing"));
/// assert!(!is_chord_shaped("grace"));
/// ```
pub fn is_chord_shaped(word: &str) -> bool {
    CHORD_SHAPE.is_match(word)
}

/// Whether a word is a "no chord" or repeat mark (`N.C.`, `NC`, `x`, `%`).
///
/// These sit in chord positions but are not chords, so they are left untouched
/// by transposition and never read as lyrics or labels.
pub fn is_no_chord_mark(word: &str) -> bool {
    matches!(word, "N.C." | "N.C" | "NC" | "n.c." | "x" | "X" | "%")
}

/// A parsed chord symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordToken {
    pub root: NoteName,
    pub quality: String,
    pub bass: Option<NoteName>,
}

impl ChordToken {
    /// Parse a chord symbol.
    ///
    /// Returns `None` when the text does not start with a recognized note
    /// name. A trailing `/X` is taken as the bass only when `X` is a note
    /// name; otherwise it stays in the quality (`C6/9`).
    pub fn parse(text: &str) -> Option<Self> {
        let root_len = note_prefix_len(text)?;
        let root = NoteName::parse(&text[..root_len])?;
        let rest = &text[root_len..];

        if let Some(slash) = rest.rfind('/') {
            if let Some(bass) = NoteName::parse(&rest[slash + 1..]) {
                return Some(ChordToken {
                    root,
                    quality: rest[..slash].to_string(),
                    bass: Some(bass),
                });
            }
        }

        Some(ChordToken {
            root,
            quality: rest.to_string(),
            bass: None,
        })
    }

    /// Shift root and bass by `semitones`, keeping quality and spellings.
    pub fn transpose(&self, semitones: i32) -> ChordToken {
        ChordToken {
            root: self.root.transpose(semitones),
            quality: self.quality.clone(),
            bass: self.bass.map(|b| b.transpose(semitones)),
        }
    }
}

impl fmt::Display for ChordToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality)?;
        if let Some(bass) = self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// Byte length of a leading `A-G` letter plus optional `#`/`b`.
fn note_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    match bytes.first()? {
        b'A'..=b'G' => {}
        _ => return None,
    }
    match bytes.get(1) {
        Some(b'#') | Some(b'b') => Some(2),
        _ => Some(1),
    }
}

/// Transpose a chord symbol's text.
///
/// Text that is not a chord comes back unchanged, as does any chord when the
/// offset is a whole number of octaves.
///
/// # Examples
/// ```
/// use chordsheet::transpose_chord;
///
/// assert_eq!(transpose_chord("F#m7b5/A", 1), "Gm7b5/A#");
/// assert_eq!(transpose_chord("Bb/D", 2), "C/E");
/// assert_eq!(transpose_chord("xyz", 5), "xyz");
/// ```
pub fn transpose_chord(text: &str, semitones: i32) -> String {
    if semitones.rem_euclid(12) == 0 {
        return text.to_string();
    }
    match ChordToken::parse(text) {
        Some(token) => token.transpose(semitones).to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKENS: [&str; 14] = [
        "C", "Am", "G7", "F#m7b5/A", "Bb/D", "Ebmaj7", "Dsus4", "C6/9", "Abm/Gb", "G(add9)",
        "E7#9", "C#dim", "Bbsus2/F", "D/F#",
    ];

    #[test]
    fn test_parse_parts() {
        let token = ChordToken::parse("F#m7b5/A").unwrap();
        assert_eq!(token.root.to_string(), "F#");
        assert_eq!(token.quality, "m7b5");
        assert_eq!(token.bass.unwrap().to_string(), "A");

        let six_nine = ChordToken::parse("C6/9").unwrap();
        assert_eq!(six_nine.quality, "6/9");
        assert!(six_nine.bass.is_none());

        let flat_root = ChordToken::parse("Bbm").unwrap();
        assert_eq!(flat_root.root.to_string(), "Bb");
        assert_eq!(flat_root.quality, "m");
    }

    #[test]
    fn test_parse_rejects_non_chords() {
        assert!(ChordToken::parse("xyz").is_none());
        assert!(ChordToken::parse("").is_none());
        assert!(ChordToken::parse("Cb").is_none());
        assert!(ChordToken::parse("hola").is_none());
    }

    #[test]
    fn test_display_reproduces_input() {
        for text in TOKENS {
            assert_eq!(ChordToken::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_transpose_examples() {
        assert_eq!(transpose_chord("F#m7b5/A", 1), "Gm7b5/A#");
        assert_eq!(transpose_chord("G", 2), "A");
        assert_eq!(transpose_chord("C", 2), "D");
        assert_eq!(transpose_chord("Em", -2), "Dm");
        assert_eq!(transpose_chord("Bb/D", 2), "C/E");
        assert_eq!(transpose_chord("Ebmaj7", 1), "Emaj7");
        assert_eq!(transpose_chord("D/F#", -2), "C/E");
        assert_eq!(transpose_chord("C6/9", 7), "G6/9");
    }

    #[test]
    fn test_malformed_passes_through() {
        for n in -11..=11 {
            assert_eq!(transpose_chord("xyz", n), "xyz");
            assert_eq!(transpose_chord("N.C.", n), "N.C.");
        }
    }

    #[test]
    fn test_token_round_trip() {
        for text in TOKENS {
            let token = ChordToken::parse(text).unwrap();
            for n in -24..=24 {
                assert_eq!(token.transpose(n).transpose(-n), token, "{} by {}", text, n);
            }
        }
    }

    #[test]
    fn test_text_round_trip_for_sharp_spellings() {
        for text in ["C", "F#m7b5/A", "D/F#", "C#dim", "G7", "E7#9"] {
            for n in -11..=11 {
                let back = transpose_chord(&transpose_chord(text, n), -n);
                assert_eq!(back, text, "{} by {}", text, n);
            }
        }
    }

    #[test]
    fn test_periodicity() {
        for text in TOKENS {
            for n in -12..=12 {
                assert_eq!(transpose_chord(text, n), transpose_chord(text, n + 12));
            }
        }
    }

    #[test]
    fn test_zero_offset_is_verbatim() {
        for text in TOKENS {
            assert_eq!(transpose_chord(text, 0), text);
        }
    }

    #[test]
    fn test_chord_shape() {
        for text in TOKENS {
            assert!(is_chord_shaped(text), "{}", text);
        }
        for word in ["Amazing", "Coro", "Grande", "Dios", "Bendito", "A-men", "xyz"] {
            assert!(!is_chord_shaped(word), "{}", word);
        }
    }

    #[test]
    fn test_no_chord_marks() {
        for word in ["N.C.", "NC", "x", "%"] {
            assert!(is_no_chord_mark(word), "{}", word);
            assert_eq!(transpose_chord(word, 3), word);
        }
        assert!(!is_no_chord_mark("Nada"));
        assert!(!is_no_chord_mark("G"));
    }
}
