use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ConfigError {
    message: String,
}

fn parse_config(config_yaml: Option<String>) -> Result<chordsheet::RenderConfig, JsValue> {
    match config_yaml {
        Some(yaml) => chordsheet::RenderConfig::from_yaml_str(&yaml).map_err(|e| {
            let error = ConfigError { message: e.to_string() };
            JsValue::from_str(&serde_json::to_string(&error).unwrap_or_else(|_| e.to_string()))
        }),
        None => Ok(chordsheet::RenderConfig::default()),
    }
}

/// Render song content; returns `{ displayLines, currentKeyLabel, originalKey }`
#[wasm_bindgen]
pub fn render_song(
    content: &str,
    original_key: &str,
    semitones: i32,
    config_yaml: Option<String>,
) -> Result<JsValue, JsValue> {
    let config = parse_config(config_yaml)?;
    let rendered = chordsheet::render_song_with_config(content, original_key, semitones, &config);
    serde_wasm_bindgen::to_value(&rendered).map_err(JsValue::from)
}

/// Render song content straight to an HTML fragment
#[wasm_bindgen]
pub fn render_song_html(
    content: &str,
    original_key: &str,
    semitones: i32,
    config_yaml: Option<String>,
) -> Result<String, JsValue> {
    let config = parse_config(config_yaml)?;
    let rendered = chordsheet::render_song_with_config(content, original_key, semitones, &config);
    Ok(chordsheet::to_html(&rendered.display_lines))
}

/// Offset for the "recommended key" shortcuts
#[wasm_bindgen]
pub fn compute_offset_for_target_key(original_key: &str, target_key: &str) -> i32 {
    chordsheet::compute_offset_for_target_key(original_key, target_key)
}

#[wasm_bindgen]
pub fn transpose_chord(chord: &str, semitones: i32) -> String {
    chordsheet::transpose_chord(chord, semitones)
}

#[wasm_bindgen]
pub fn key_label(original_key: &str, semitones: i32) -> String {
    chordsheet::key_label(original_key, semitones)
}
