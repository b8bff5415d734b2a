//! # Error Types
//!
//! This module defines the error types for the outer surfaces of chordsheet:
//! song files, setlists, and render configuration.
//!
//! The chord engine itself (pitch arithmetic, transposition, scanning and
//! layout) never fails. Malformed chords pass through unchanged, unknown keys
//! mean "no transposition", and broken brackets render as lyric text.
//!
//! ## Error Types
//! - `MetadataError` - Invalid YAML frontmatter in a song file
//! - `ConfigError` - Invalid render configuration
//! - `SetlistError` - Invalid setlist document or key choice
//! - `UnknownPreset` - A key preset name that is not `original`, `male` or `female`
//! - `Io` - A song, setlist or config file could not be read
//!
//! ## Usage
//! ```rust
//! use chordsheet::{ChordsheetError, Song};
//!
//! match Song::from_source("---\ntitle: [unclosed\n---\n[G]Hola") {
//!     Ok(song) => println!("{}", song.title),
//!     Err(ChordsheetError::MetadataError(message)) => eprintln!("Bad frontmatter: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChordsheetError {
    /// Invalid song frontmatter.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordsheetError;
    /// let err = ChordsheetError::MetadataError("title must be a string".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: title must be a string");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    /// Invalid render configuration, either malformed YAML or a policy value
    /// outside its allowed range.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordsheetError;
    /// let err = ChordsheetError::ConfigError("chord-line-threshold must be in (0, 1]".to_string());
    /// assert_eq!(err.to_string(), "Invalid config: chord-line-threshold must be in (0, 1]");
    /// ```
    #[error("Invalid config: {0}")]
    ConfigError(String),

    /// Invalid setlist document.
    #[error("Invalid setlist: {0}")]
    SetlistError(String),

    /// A key preset name other than `original`, `male` or `female`.
    #[error("Unknown key preset: {0}")]
    UnknownPreset(String),

    /// A file could not be read.
    #[error("Could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
