//! # Pitch-Class Arithmetic
//!
//! Maps note names to one of the twelve pitch classes and back, and computes
//! the distance between two keys.
//!
//! ## Spelling
//! Every pitch class has a sharp spelling and a flat spelling:
//! ```text
//! index  0  1   2  3   4  5  6   7  8   9  10  11
//! sharp  C  C#  D  D#  E  F  F#  G  G#  A  A#  B
//! flat   C  Db  D  Eb  E  F  Gb  G  Ab  A  Bb  B
//! ```
//! Which table a transposed note is printed from depends only on the text the
//! note was written with: a `b` selects the flat table, anything else the
//! sharp one. There is no global key signature.
//!
//! ## Lenient lookups
//! Names outside the tables (`E#`, `Cb`, `H`, `Do`) never produce an error.
//! Distances involving them are 0 and transposing them returns the input.

use std::fmt;

pub static SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub static FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// One of the twelve pitch classes, 0 = C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class from any integer, wrapping modulo 12.
    pub fn new(index: i32) -> Self {
        PitchClass(index.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    pub fn name(self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharp => SHARP_NAMES[self.0 as usize],
            Spelling::Flat => FLAT_NAMES[self.0 as usize],
        }
    }
}

/// Accidental style used when printing a pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

impl Spelling {
    /// Spelling implied by a note's own text.
    pub fn of(name: &str) -> Self {
        if name.contains('b') {
            Spelling::Flat
        } else {
            Spelling::Sharp
        }
    }
}

/// A note name as written: a pitch class plus the spelling it was written in.
///
/// The spelling travels with the note through transposition, so a note that
/// lands on a natural (`Bb` up one is `B`) still comes back as `Bb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    pub pitch: PitchClass,
    pub spelling: Spelling,
}

impl NoteName {
    /// Parse a complete note name (`"C"`, `"F#"`, `"Bb"`).
    pub fn parse(name: &str) -> Option<Self> {
        let pitch = note_to_index(name)?;
        Some(NoteName {
            pitch,
            spelling: Spelling::of(name),
        })
    }

    pub fn transpose(self, semitones: i32) -> Self {
        NoteName {
            pitch: self.pitch.transpose(semitones),
            spelling: self.spelling,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pitch.name(self.spelling))
    }
}

/// Look a note name up in the sharp table, then the flat table.
///
/// # Examples
/// ```
/// use chordsheet::pitch::note_to_index;
///
/// assert_eq!(note_to_index("C#").map(|p| p.index()), Some(1));
/// assert_eq!(note_to_index("Db").map(|p| p.index()), Some(1));
/// assert_eq!(note_to_index("H"), None);
/// ```
pub fn note_to_index(name: &str) -> Option<PitchClass> {
    SHARP_NAMES
        .iter()
        .position(|n| *n == name)
        .or_else(|| FLAT_NAMES.iter().position(|n| *n == name))
        .map(|i| PitchClass(i as u8))
}

/// Semitones to move up from `from_key` to reach `to_key`, in `0..=11`.
///
/// Returns 0 when either key is not a recognized note name.
pub fn semitone_distance(from_key: &str, to_key: &str) -> u8 {
    match (note_to_index(from_key), note_to_index(to_key)) {
        (Some(from), Some(to)) => (to.index() as i32 - from.index() as i32).rem_euclid(12) as u8,
        _ => 0,
    }
}

/// Transpose a bare note name, keeping its spelling style.
///
/// Unrecognized names are returned unchanged.
pub fn transpose_note(name: &str, semitones: i32) -> String {
    match NoteName::parse(name) {
        Some(note) => note.transpose(semitones).to_string(),
        None => name.to_string(),
    }
}

/// A key field value: a note name with an optional minor `m` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub tonic: NoteName,
    pub minor: bool,
}

impl Key {
    /// Parse `"G"`, `"Bb"`, `"F#m"`; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if let Some(tonic) = NoteName::parse(trimmed) {
            return Some(Key { tonic, minor: false });
        }
        let tonic = NoteName::parse(trimmed.strip_suffix('m')?)?;
        Some(Key { tonic, minor: true })
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Key {
            tonic: self.tonic.transpose(semitones),
            minor: self.minor,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tonic)?;
        if self.minor {
            f.write_str("m")?;
        }
        Ok(())
    }
}

/// Offset to apply to a song in `original_key` so it sounds in `target_key`.
///
/// Accepts minor keys on either side. Unresolvable keys give 0.
///
/// # Examples
/// ```
/// use chordsheet::compute_offset_for_target_key;
///
/// assert_eq!(compute_offset_for_target_key("G", "A"), 2);
/// assert_eq!(compute_offset_for_target_key("A", "G"), 10);
/// assert_eq!(compute_offset_for_target_key("Em", "F#m"), 2);
/// assert_eq!(compute_offset_for_target_key("G", ""), 0);
/// ```
pub fn compute_offset_for_target_key(original_key: &str, target_key: &str) -> i32 {
    match (Key::parse(original_key), Key::parse(target_key)) {
        (Some(from), Some(to)) => {
            (to.tonic.pitch.index() as i32 - from.tonic.pitch.index() as i32).rem_euclid(12)
        }
        _ => 0,
    }
}

/// Label for the key a song sounds in after transposing by `semitones`.
///
/// Unrecognized keys are returned as written (trimmed).
pub fn key_label(original_key: &str, semitones: i32) -> String {
    match Key::parse(original_key) {
        Some(key) => key.transpose(semitones).to_string(),
        None => original_key.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_NAMES: [&str; 17] = [
        "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb",
        "B",
    ];

    #[test]
    fn test_note_lookup_both_tables() {
        assert_eq!(note_to_index("C").map(PitchClass::index), Some(0));
        assert_eq!(note_to_index("A#").map(PitchClass::index), Some(10));
        assert_eq!(note_to_index("Bb").map(PitchClass::index), Some(10));
        assert_eq!(note_to_index("B").map(PitchClass::index), Some(11));
        assert_eq!(note_to_index("E#"), None);
        assert_eq!(note_to_index("c"), None);
        assert_eq!(note_to_index(""), None);
    }

    #[test]
    fn test_semitone_distance() {
        assert_eq!(semitone_distance("G", "A"), 2);
        assert_eq!(semitone_distance("A", "G"), 10);
        assert_eq!(semitone_distance("C", "B"), 11);
        assert_eq!(semitone_distance("Db", "C#"), 0);
        assert_eq!(semitone_distance("G", "nope"), 0);
        assert_eq!(semitone_distance("", "A"), 0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for name in ALL_NAMES {
            assert_eq!(semitone_distance(name, name), 0, "{}", name);
        }
    }

    #[test]
    fn test_distance_is_antisymmetric_mod_12() {
        for a in ALL_NAMES {
            for b in ALL_NAMES {
                let there = semitone_distance(a, b) as u32;
                let back = semitone_distance(b, a) as u32;
                assert_eq!((there + back) % 12, 0, "{} -> {}", a, b);
                let same_pitch = note_to_index(a) == note_to_index(b);
                assert_eq!(there == 0, same_pitch, "{} -> {}", a, b);
            }
        }
    }

    #[test]
    fn test_transpose_note_keeps_spelling() {
        assert_eq!(transpose_note("G", 2), "A");
        assert_eq!(transpose_note("G", 1), "G#");
        assert_eq!(transpose_note("Bb", 1), "B");
        assert_eq!(transpose_note("Bb", 3), "Db");
        assert_eq!(transpose_note("C", -1), "B");
        assert_eq!(transpose_note("C", -13), "B");
        assert_eq!(transpose_note("Do", 5), "Do");
    }

    #[test]
    fn test_note_name_round_trip_through_natural() {
        let bb = NoteName::parse("Bb").unwrap();
        assert_eq!(bb.transpose(1).to_string(), "B");
        assert_eq!(bb.transpose(1).transpose(-1), bb);
        assert_eq!(bb.transpose(1).transpose(-1).to_string(), "Bb");
    }

    #[test]
    fn test_key_parse_and_label() {
        assert_eq!(Key::parse(" Em ").unwrap().to_string(), "Em");
        assert!(Key::parse("Em").unwrap().minor);
        assert!(Key::parse("Xm").is_none());
        assert_eq!(key_label("G", 2), "A");
        assert_eq!(key_label("Bbm", 2), "Cm");
        assert_eq!(key_label("Eb", -1), "D");
        assert_eq!(key_label("", 3), "");
        assert_eq!(key_label("Sol", 3), "Sol");
    }

    #[test]
    fn test_offset_for_target_key() {
        assert_eq!(compute_offset_for_target_key("G", "A"), 2);
        assert_eq!(compute_offset_for_target_key("G", "E"), 9);
        assert_eq!(compute_offset_for_target_key("Am", "Cm"), 3);
        assert_eq!(compute_offset_for_target_key("G", "G"), 0);
        assert_eq!(compute_offset_for_target_key("?", "G"), 0);
    }
}
