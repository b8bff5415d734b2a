//! Rendered output type definitions.

use serde::Serialize;

/// One display group handed to the presentation layer.
///
/// `Chords` carries two rows meant to be shown in a monospace font, the
/// chord row directly above the lyric row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderedLine {
    /// Vertical space between blocks.
    Spacer,
    /// Smaller fixed gap standing in for a decorative separator line.
    Separator,
    Section {
        label: String,
    },
    Chords {
        chords: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        lyrics: Option<String>,
    },
    Lyrics {
        text: String,
    },
}

/// A fully rendered song.
///
/// # Fields
/// - `display_lines`: rendered lines in display order
/// - `current_key_label`: key the song sounds in after transposition
/// - `original_key`: key as stored on the song record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSong {
    pub display_lines: Vec<RenderedLine>,
    pub current_key_label: String,
    pub original_key: String,
}
