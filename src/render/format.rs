//! Output formatters for rendered lines.

use super::RenderedLine;

/// Plain monospace text, one row per output line.
pub fn to_text(lines: &[RenderedLine]) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            RenderedLine::Spacer | RenderedLine::Separator => {}
            RenderedLine::Section { label } => out.push_str(label),
            RenderedLine::Chords { chords, lyrics } => {
                out.push_str(chords);
                if let Some(lyrics) = lyrics {
                    out.push('\n');
                    out.push_str(lyrics);
                }
            }
            RenderedLine::Lyrics { text } => out.push_str(text),
        }
        out.push('\n');
    }
    out
}

/// HTML fragment that keeps chord alignment in any markup surface.
///
/// Text is escaped and every space becomes `&nbsp;` so runs of spaces
/// do not collapse.
pub fn to_html(lines: &[RenderedLine]) -> String {
    let mut html = String::from("<div class=\"chord-sheet\">\n");
    for line in lines {
        match line {
            RenderedLine::Spacer => html.push_str("  <div class=\"spacer\"></div>\n"),
            RenderedLine::Separator => html.push_str("  <div class=\"separator\"></div>\n"),
            RenderedLine::Section { label } => {
                html.push_str(&format!("  <div class=\"section\">{}</div>\n", escape_html(label)));
            }
            RenderedLine::Chords { chords, lyrics } => {
                html.push_str("  <div class=\"line\">\n");
                html.push_str(&format!("    <div class=\"chords\">{}</div>\n", escape_html(chords)));
                if let Some(lyrics) = lyrics {
                    html.push_str(&format!("    <div class=\"lyrics\">{}</div>\n", escape_html(lyrics)));
                }
                html.push_str("  </div>\n");
            }
            RenderedLine::Lyrics { text } => {
                html.push_str(&format!("  <div class=\"lyrics\">{}</div>\n", escape_html(text)));
            }
        }
    }
    html.push_str("</div>\n");
    html
}

/// Escape markup characters and pin spaces with `&nbsp;`.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace(' ', "&nbsp;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b> & 'x'"), "&lt;b&gt;&nbsp;&amp;&nbsp;&#39;x&#39;");
        assert_eq!(escape_html("A   D"), "A&nbsp;&nbsp;&nbsp;D");
    }

    #[test]
    fn test_text_output() {
        let lines = vec![
            RenderedLine::Section { label: "Coro".to_string() },
            RenderedLine::Chords {
                chords: "A".to_string(),
                lyrics: Some("Hola".to_string()),
            },
            RenderedLine::Spacer,
            RenderedLine::Chords { chords: "D  E".to_string(), lyrics: None },
        ];
        assert_eq!(to_text(&lines), "Coro\nA\nHola\n\nD  E\n");
    }

    #[test]
    fn test_html_output_is_escaped() {
        let lines = vec![
            RenderedLine::Lyrics { text: "<script>".to_string() },
            RenderedLine::Separator,
        ];
        let html = to_html(&lines);
        assert!(html.contains("<div class=\"lyrics\">&lt;script&gt;</div>"));
        assert!(html.contains("<div class=\"separator\"></div>"));
        assert!(!html.contains("<script>"));
    }
}
