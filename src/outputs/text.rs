//! Plain-text card layout for terminals.

use super::published_label;
use crate::card::{CardOptions, CardView};
use crate::format::StarGlyphs;
use itertools::Itertools;
use std::fmt::Write;

const RULE: &str = "----------------------------------------";

/// Render one card as a block of plain text.
///
/// ```text
/// [Today's Pick] [Trending]
/// Jane Doe | Sunday, January 5, 2025
/// Central bank holds rates steady
/// Image: https://example.com/thumbs/rates.jpg
/// Tags: economy, rates, policy
/// The central bank kept its benchmark rate unchanged...
/// ★★★★⯪ 4.5 [Excellent] | 488,990 views
/// ```
pub fn card_to_text(card: &CardView, options: &CardOptions, glyphs: &StarGlyphs) -> String {
    let mut out = String::new();

    if !card.badges.is_empty() {
        let line = card.badges.iter().map(|b| format!("[{b}]")).join(" ");
        writeln!(out, "{line}").unwrap();
    }
    writeln!(out, "{} | {}", card.author_name, published_label(card, options)).unwrap();
    writeln!(out, "{}", card.title).unwrap();
    if !card.thumbnail_url.is_empty() {
        writeln!(out, "Image: {}", card.thumbnail_url).unwrap();
    }
    if !card.tags.is_empty() {
        writeln!(out, "Tags: {}", card.tags.iter().join(", ")).unwrap();
    }
    writeln!(out, "{}", card.snippet).unwrap();
    if let Some(url) = &card.read_more {
        writeln!(out, "Read More: {url}").unwrap();
    }
    if let Some(share) = &card.share {
        writeln!(out, "Share: {share}").unwrap();
    }

    write!(out, "{} {}", glyphs.draw(&card.stars), card.rating_label).unwrap();
    if let Some(badge) = &card.rating_badge {
        write!(out, " [{badge}]").unwrap();
    }
    writeln!(out, " | {} views", card.views).unwrap();
    out
}

/// Render every card, separated by a horizontal rule.
pub fn cards_to_text(cards: &[CardView], options: &CardOptions, glyphs: &StarGlyphs) -> String {
    cards
        .iter()
        .map(|card| card_to_text(card, options, glyphs))
        .join(&format!("{RULE}\n"))
}
