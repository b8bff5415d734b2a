//! # Song Records
//!
//! A song file is its content preceded by an optional YAML frontmatter block:
//!
//! ```text
//! ---
//! title: Grande es tu fidelidad
//! author: Thomas Chisholm
//! original-key: G
//! key-male: A
//! key-female: D
//! ---
//! [G]Grande es tu [C]fidelidad
//! ```
//!
//! The frontmatter must start on the first non-empty line. A `---` anywhere
//! else is content (a separator line).
//!
//! Key fields are kept as written. They only feed the recommended offsets and
//! the key label; an unrecognized or empty key means "no transposition".

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RenderConfig;
use crate::error::ChordsheetError;
use crate::pitch::compute_offset_for_target_key;
use crate::render::RenderedSong;

/// Which of a song's stored keys to play it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPreset {
    Original,
    Male,
    Female,
}

impl FromStr for KeyPreset {
    type Err = ChordsheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "original" => Ok(KeyPreset::Original),
            "male" => Ok(KeyPreset::Male),
            "female" => Ok(KeyPreset::Female),
            _ => Err(ChordsheetError::UnknownPreset(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub title: String,
    pub author: String,
    pub original_key: String,
    pub key_male: String,
    pub key_female: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct RawSongMetadata {
    title: Option<String>,
    author: Option<String>,
    original_key: Option<String>,
    key_male: Option<String>,
    key_female: Option<String>,
}

impl Song {
    /// Parse a song from source text with optional frontmatter.
    pub fn from_source(source: &str) -> Result<Song, ChordsheetError> {
        let (metadata, content) = extract_frontmatter(source);
        let raw = match metadata {
            Some(yaml) if !yaml.trim().is_empty() => serde_yaml::from_str::<RawSongMetadata>(&yaml)
                .map_err(|e| ChordsheetError::MetadataError(e.to_string()))?,
            _ => RawSongMetadata::default(),
        };

        Ok(Song {
            title: raw.title.unwrap_or_default(),
            author: raw.author.unwrap_or_default(),
            original_key: raw.original_key.unwrap_or_default().trim().to_string(),
            key_male: raw.key_male.unwrap_or_default().trim().to_string(),
            key_female: raw.key_female.unwrap_or_default().trim().to_string(),
            content,
        })
    }

    /// Read a song file. A missing title falls back to the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Song, ChordsheetError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ChordsheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut song = Song::from_source(&source)?;
        if song.title.is_empty() {
            if let Some(stem) = path.file_stem() {
                song.title = stem.to_string_lossy().into_owned();
            }
        }
        debug!(path = %path.display(), title = %song.title, key = %song.original_key, "loaded song");
        Ok(song)
    }

    /// The stored key for a preset. Empty male/female keys fall back to the
    /// original key.
    pub fn key_for(&self, preset: KeyPreset) -> &str {
        let key = match preset {
            KeyPreset::Original => &self.original_key,
            KeyPreset::Male => &self.key_male,
            KeyPreset::Female => &self.key_female,
        };
        if key.is_empty() {
            &self.original_key
        } else {
            key
        }
    }

    /// Offset that moves the song from its original key to a preset's key.
    pub fn offset_for(&self, preset: KeyPreset) -> i32 {
        compute_offset_for_target_key(&self.original_key, self.key_for(preset))
    }

    pub fn render(&self, semitones: i32, config: &RenderConfig) -> RenderedSong {
        crate::render_song_with_config(&self.content, &self.original_key, semitones, config)
    }
}

/// Split `---` frontmatter from the rest of the source.
///
/// Returns `(None, source)` when the source does not open with a closed
/// frontmatter block.
fn extract_frontmatter(source: &str) -> (Option<String>, String) {
    let lines: Vec<&str> = source.lines().collect();

    let start = match lines.iter().position(|l| !l.trim().is_empty()) {
        Some(i) if lines[i].trim() == "---" => i,
        _ => return (None, source.to_string()),
    };
    let end = match lines[start + 1..].iter().position(|l| l.trim() == "---") {
        Some(offset) => start + 1 + offset,
        None => return (None, source.to_string()),
    };

    let metadata = lines[start + 1..end].join("\n");
    let content = lines[end + 1..].join("\n");
    (Some(metadata), content)
}
