pub mod chord;
pub mod config;
pub mod error;
pub mod pitch;
pub mod render;
pub mod scanner;
pub mod setlist;
pub mod song;

pub use chord::{transpose_chord, ChordToken};
pub use config::{PairAlignment, RenderConfig};
pub use error::*;
pub use pitch::{compute_offset_for_target_key, key_label, semitone_distance, transpose_note};
pub use render::{render_lines, to_html, to_text, RenderedLine, RenderedSong};
pub use scanner::scan;
pub use setlist::Setlist;
pub use song::{KeyPreset, Song};

/// Render song content transposed by `semitones`.
/// This is the main entry point for the library.
pub fn render_song(content: &str, original_key: &str, semitones: i32) -> RenderedSong {
    render_song_with_config(content, original_key, semitones, &RenderConfig::default())
}

/// Render with custom classifier and layout policy.
pub fn render_song_with_config(
    content: &str,
    original_key: &str,
    semitones: i32,
    config: &RenderConfig,
) -> RenderedSong {
    let lines = scan(content, config);
    RenderedSong {
        display_lines: render_lines(&lines, semitones, config),
        current_key_label: key_label(original_key, semitones),
        original_key: original_key.trim().to_string(),
    }
}
