//! Render policy configuration.
//!
//! Every heuristic knob of the scanner and renderer lives here so that it can
//! be tuned per songbook without touching the algorithms. A config file is
//! plain YAML with kebab-case keys; missing keys keep their defaults:
//!
//! ```yaml
//! chord-line-threshold: 0.6
//! max-chord-line-width: 60
//! blank-run-cap: 2
//! pair-alignment: words
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChordsheetError;

/// How a chords-above-lyrics pair is re-aligned after transposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairAlignment {
    /// Keep each chord at the column the author put it in.
    #[default]
    Columns,
    /// Move chord *i* over lyric word *i*, widening lyric gaps only where a
    /// chord needs room.
    Words,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RenderConfig {
    /// Minimum fraction of chord-shaped words for a line to be a chord line.
    pub chord_line_threshold: f64,
    /// Lines wider than this (in chars, trimmed) are never chord lines.
    pub max_chord_line_width: usize,
    /// Maximum number of consecutive spacers emitted for a run of blank lines,
    /// at least 1.
    pub blank_run_cap: usize,
    pub pair_alignment: PairAlignment,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            chord_line_threshold: 0.5,
            max_chord_line_width: 80,
            blank_run_cap: 1,
            pair_alignment: PairAlignment::Columns,
        }
    }
}

impl RenderConfig {
    /// Parse and validate a YAML config document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ChordsheetError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: RenderConfig =
            serde_yaml::from_str(source).map_err(|e| ChordsheetError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChordsheetError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ChordsheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&source)?;
        debug!(path = %path.display(), ?config, "loaded render config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChordsheetError> {
        if !(self.chord_line_threshold > 0.0 && self.chord_line_threshold <= 1.0) {
            return Err(ChordsheetError::ConfigError(format!(
                "chord-line-threshold must be in (0, 1], got {}",
                self.chord_line_threshold
            )));
        }
        if self.blank_run_cap == 0 {
            return Err(ChordsheetError::ConfigError(
                "blank-run-cap must be at least 1".to_string(),
            ));
        }
        if self.max_chord_line_width == 0 {
            return Err(ChordsheetError::ConfigError(
                "max-chord-line-width must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
