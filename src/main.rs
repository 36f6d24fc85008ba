//! # News Card
//!
//! Reads news items from a JSON file and renders each one as a card in
//! plain text, Markdown, or JSON.
//!
//! ## Usage
//!
//! ```sh
//! news_card -i ./news.json -f markdown -o ./news.md
//! ```
//!
//! ## Pipeline
//!
//! 1. **Config**: load optional YAML (snippet budget, glyphs, link base)
//! 2. **Input**: parse one item or an array of items
//! 3. **Projection**: build a `CardView` per item
//! 4. **Output**: render and write to a file or stdout

use clap::Parser;
use news_card::config::load_config;
use news_card::models::parse_items;
use news_card::outputs::{json, markdown, text, write_output};
use news_card::utils::truncate_for_log;
use news_card::{CardError, CardView};
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, OutputFormat};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Logs go to stderr so stdout stays clean for rendered cards.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_card starting up");

    let args = Cli::parse();
    debug!(?args.input, ?args.format, ?args.config, ?args.output, "Parsed CLI arguments");

    // ---- Config ----
    let config = load_config(args.config.as_deref()).await.inspect_err(|e| {
        error!(error = %e, "Failed to load configuration");
    })?;
    let actions = config.actions().inspect_err(|e| {
        error!(error = %e, "Invalid read_more_base_url");
    })?;

    // ---- Input ----
    let raw = tokio::fs::read_to_string(&args.input)
        .await
        .map_err(|source| CardError::Io {
            path: args.input.clone(),
            source,
        })?;
    let items = match parse_items(&raw) {
        Ok(items) => items,
        Err(e) => {
            error!(
                path = %args.input,
                error = %e,
                preview = %truncate_for_log(&raw, 300),
                "Input is not a news item or list of news items"
            );
            return Err(CardError::from(e).into());
        }
    };
    info!(count = items.len(), path = %args.input, "Loaded news items");

    // ---- Projection ----
    let cards: Vec<CardView> = items
        .iter()
        .map(|item| CardView::project(item, &config.card, actions.as_ref()))
        .collect();
    let undated = cards.iter().filter(|c| c.published.is_err()).count();
    debug!(cards = cards.len(), undated, "Projected cards");

    // ---- Output ----
    let rendered = match args.format {
        OutputFormat::Text => text::cards_to_text(&cards, &config.card, &config.glyphs),
        OutputFormat::Markdown => markdown::cards_to_markdown(&cards, &config.card, &config.glyphs),
        OutputFormat::Json => json::cards_to_json(&cards)?,
    };
    write_output(&rendered, args.output.as_deref()).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        cards = cards.len(),
        undated,
        "Execution complete"
    );

    Ok(())
}
