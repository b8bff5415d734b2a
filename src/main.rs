use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chordsheet::render::escape_html;
use chordsheet::setlist::RenderedSetlistSong;
use chordsheet::{
    compute_offset_for_target_key, to_html, to_text, transpose_chord, KeyPreset, RenderConfig,
    RenderedSong, Setlist, Song,
};

/// Render and transpose chord sheets
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a song file
    Render {
        file: PathBuf,

        /// Semitones to transpose by
        #[arg(short, long, allow_negative_numbers = true, conflicts_with_all = ["to", "voice"])]
        semitones: Option<i32>,

        /// Transpose to this key
        #[arg(long, conflicts_with = "voice")]
        to: Option<String>,

        /// Use the song's recommended key for a voice
        #[arg(long, value_enum)]
        voice: Option<Voice>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Render config (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the offset from one key to another
    Offset { from: String, to: String },

    /// Transpose a single chord symbol
    Transpose {
        chord: String,
        #[arg(allow_negative_numbers = true)]
        semitones: i32,
    },

    /// Render every song of a setlist
    Setlist {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Render config (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Voice {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Render {
            file,
            semitones,
            to,
            voice,
            format,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let song = Song::load(&file).with_context(|| format!("loading song {}", file.display()))?;
            let semitones = match (semitones, to, voice) {
                (Some(n), _, _) => n,
                (None, Some(key), _) => compute_offset_for_target_key(&song.original_key, &key),
                (None, None, Some(Voice::Male)) => song.offset_for(KeyPreset::Male),
                (None, None, Some(Voice::Female)) => song.offset_for(KeyPreset::Female),
                (None, None, None) => 0,
            };
            info!(title = %song.title, semitones, "rendering song");
            let rendered = song.render(semitones, &config);
            print!("{}", format_song(&song.title, &rendered, format)?);
        }
        Command::Offset { from, to } => {
            println!("{}", compute_offset_for_target_key(&from, &to));
        }
        Command::Transpose { chord, semitones } => {
            println!("{}", transpose_chord(&chord, semitones));
        }
        Command::Setlist {
            file,
            format,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let setlist =
                Setlist::load(&file).with_context(|| format!("loading setlist {}", file.display()))?;
            let base_dir = file.parent().unwrap_or_else(|| Path::new("."));
            let songs = setlist.render(base_dir, &config)?;
            info!(name = %setlist.name, songs = songs.len(), "rendered setlist");
            print!("{}", format_setlist(&setlist, &songs, format)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(RenderConfig::default()),
    }
}

fn key_header(rendered: &RenderedSong) -> String {
    if rendered.current_key_label == rendered.original_key {
        format!("Key: {}", rendered.current_key_label)
    } else {
        format!(
            "Key: {} (original: {})",
            rendered.current_key_label, rendered.original_key
        )
    }
}

fn format_song(title: &str, rendered: &RenderedSong, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => format!(
            "{}\n{}\n\n{}",
            title,
            key_header(rendered),
            to_text(&rendered.display_lines)
        ),
        Format::Html => format!(
            "<h1>{}</h1>\n<p class=\"key\">{}</p>\n{}",
            escape_html(title),
            escape_html(&key_header(rendered)),
            to_html(&rendered.display_lines)
        ),
        Format::Json => serde_json::to_string_pretty(rendered)? + "\n",
    })
}

fn format_setlist(setlist: &Setlist, songs: &[RenderedSetlistSong], format: Format) -> Result<String> {
    if format == Format::Json {
        return Ok(serde_json::to_string_pretty(songs)? + "\n");
    }

    let mut out = match format {
        Format::Html => format!("<h1>{}</h1>\n", escape_html(&setlist.name)),
        _ => format!("{}\n\n", setlist.name),
    };
    for song in songs {
        let title = format!("{}. {}", song.position, song.title);
        match format {
            Format::Html => {
                out.push_str("<section class=\"song\">\n");
                out.push_str(&format_song(&title, &song.rendered, format)?);
                out.push_str("</section>\n");
            }
            _ => {
                out.push_str(&format_song(&title, &song.rendered, format)?);
                out.push('\n');
            }
        }
    }
    Ok(out)
}
