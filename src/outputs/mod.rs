//! Renderers that lay [`CardView`]s out as text, Markdown, or JSON.
//!
//! These play the part of the rendering layer: they pick glyphs for star
//! states, choose the fallback for unparsable dates, and arrange fields.
//!
//! # Submodules
//!
//! - [`text`]: terminal-friendly plain text
//! - [`markdown`]: one `##` section per card
//! - [`json`]: serialized card views for other tools

pub mod json;
pub mod markdown;
pub mod text;

use crate::card::{CardOptions, CardView};
use crate::error::{CardError, Result};
use crate::utils::truncate_for_log;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument, warn};

/// Published date for display, falling back to the configured label.
pub(crate) fn published_label<'a>(card: &'a CardView, options: &'a CardOptions) -> &'a str {
    if let Err(e) = &card.published {
        warn!(
            title = %truncate_for_log(&card.title, 60),
            input = %truncate_for_log(&e.input, 60),
            "Unparsable published date; using fallback label"
        );
    }
    card.published_or(&options.unknown_date_label)
}

/// Write rendered output to `path`, or to stdout when `path` is `None`.
///
/// # Arguments
///
/// * `rendered` - The text, Markdown or JSON produced by a renderer
/// * `path` - Destination file; it is created or truncated
///
/// # Returns
///
/// `Ok(())` once everything is written, or [`CardError::Io`] naming the
/// destination that failed.
#[instrument(level = "info", skip_all, fields(path = ?path, bytes = rendered.len()))]
pub async fn write_output(rendered: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, rendered).await.map_err(|source| CardError::Io {
                path: path.to_string(),
                source,
            })?;
            info!(%path, "Wrote cards");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            let io_err = |source| CardError::Io {
                path: "<stdout>".to_string(),
                source,
            };
            stdout.write_all(rendered.as_bytes()).await.map_err(io_err)?;
            stdout.flush().await.map_err(io_err)?;
        }
    }
    Ok(())
}
