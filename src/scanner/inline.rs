//! Inline bracket extraction: `[G]Grande es tu [C]fidelidad`.

use super::Annotation;

/// Split a line into clean lyric text and the chords annotating it.
///
/// Each `[` is closed by the next `]` unless another `[` comes first.
/// Unclosed, empty and blank brackets stay in the lyric text. Offsets are
/// char positions in the clean text. Returns `None` when no chord was found.
pub(crate) fn extract(line: &str) -> Option<(String, Vec<Annotation>)> {
    let chars: Vec<char> = line.chars().collect();
    let mut lyrics = String::with_capacity(line.len());
    let mut annotations = Vec::new();
    let mut offset = 0;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '[' {
            if let Some(close) = find_close(&chars, i + 1) {
                if chars[i + 1..close].iter().any(|c| !c.is_whitespace()) {
                    annotations.push(Annotation {
                        chord: chars[i + 1..close].iter().collect(),
                        offset,
                    });
                    i = close + 1;
                    continue;
                }
            }
        }
        lyrics.push(chars[i]);
        offset += 1;
        i += 1;
    }

    if annotations.is_empty() {
        None
    } else {
        Some((lyrics, annotations))
    }
}

fn find_close(chars: &[char], from: usize) -> Option<usize> {
    for (j, &c) in chars.iter().enumerate().skip(from) {
        match c {
            ']' => return Some(j),
            '[' => return None,
            _ => {}
        }
    }
    None
}
