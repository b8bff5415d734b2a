//! Setlists: an ordered selection of songs for a service.
//!
//! ```yaml
//! name: Domingo
//! date: 2026-10-18
//! songs:
//!   - song: grande-es-tu-fidelidad.txt
//!     position: 1
//!     key: female
//!   - song: santo.txt
//!     position: 2
//!     semitones: -2
//!   - song: cuan-grande.txt
//!     key: Bb
//! ```
//!
//! Song paths are relative to the setlist file. Each entry picks its key by
//! `semitones`, a preset name (`original`, `male`, `female`) or a target key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RenderConfig;
use crate::error::ChordsheetError;
use crate::pitch::{compute_offset_for_target_key, Key};
use crate::render::RenderedSong;
use crate::song::{KeyPreset, Song};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Setlist {
    pub name: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub songs: Vec<SetlistEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SetlistEntry {
    pub song: PathBuf,
    #[serde(default)]
    pub position: Option<u32>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub semitones: Option<i32>,
}

/// How an entry chooses the key it is played in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyChoice {
    Semitones(i32),
    Preset(KeyPreset),
    Target(String),
}

impl SetlistEntry {
    pub fn key_choice(&self) -> Result<KeyChoice, ChordsheetError> {
        if let Some(semitones) = self.semitones {
            return Ok(KeyChoice::Semitones(semitones));
        }
        let Some(key) = self.key.as_deref() else {
            return Ok(KeyChoice::Preset(KeyPreset::Original));
        };
        if let Ok(preset) = key.parse::<KeyPreset>() {
            return Ok(KeyChoice::Preset(preset));
        }
        if Key::parse(key).is_some() {
            return Ok(KeyChoice::Target(key.trim().to_string()));
        }
        Err(ChordsheetError::SetlistError(format!(
            "unknown key '{}' for {}",
            key,
            self.song.display()
        )))
    }

    pub fn offset_for(&self, song: &Song) -> Result<i32, ChordsheetError> {
        Ok(match self.key_choice()? {
            KeyChoice::Semitones(semitones) => semitones,
            KeyChoice::Preset(preset) => song.offset_for(preset),
            KeyChoice::Target(key) => compute_offset_for_target_key(&song.original_key, &key),
        })
    }
}

/// One song of a rendered setlist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSetlistSong {
    pub position: usize,
    pub title: String,
    pub author: String,
    pub semitones: i32,
    #[serde(flatten)]
    pub rendered: RenderedSong,
}

impl Setlist {
    pub fn from_yaml_str(source: &str) -> Result<Self, ChordsheetError> {
        serde_yaml::from_str(source).map_err(|e| ChordsheetError::SetlistError(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordsheetError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ChordsheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let setlist = Self::from_yaml_str(&source)?;
        debug!(path = %path.display(), name = %setlist.name, songs = setlist.songs.len(), "loaded setlist");
        Ok(setlist)
    }

    /// Entries in play order: by `position`, then entries without one in
    /// file order.
    pub fn ordered(&self) -> Vec<&SetlistEntry> {
        let mut entries: Vec<&SetlistEntry> = self.songs.iter().collect();
        entries.sort_by_key(|e| (e.position.is_none(), e.position));
        entries
    }

    /// Load and render every song, resolving paths against `base_dir`.
    pub fn render(
        &self,
        base_dir: &Path,
        config: &RenderConfig,
    ) -> Result<Vec<RenderedSetlistSong>, ChordsheetError> {
        self.ordered()
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                let song = Song::load(base_dir.join(&entry.song))?;
                let semitones = entry.offset_for(&song)?;
                debug!(title = %song.title, semitones, "rendering setlist song");
                Ok(RenderedSetlistSong {
                    position: i + 1,
                    title: song.title.clone(),
                    author: song.author.clone(),
                    semitones,
                    rendered: song.render(semitones, config),
                })
            })
            .collect()
    }
}
