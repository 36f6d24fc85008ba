//! Command-line interface definitions for News Card.
//!
//! Arguments can be given as flags or, where noted, environment variables.

use clap::{Parser, ValueEnum};

/// Layout used for the rendered cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

/// Command-line arguments for the News Card renderer.
///
/// # Examples
///
/// ```sh
/// # Render a feed dump as plain text
/// news_card -i ./news.json
///
/// # Markdown page with custom glyphs and links
/// news_card -i ./news.json -f markdown -c ./card.yaml -o ./news.md
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file holding one news item or an array of them
    #[arg(short, long)]
    pub input: String,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Optional path to a YAML config file
    #[arg(short, long, env = "NEWS_CARD_CONFIG")]
    pub config: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}
