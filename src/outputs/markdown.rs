//! Markdown card layout.
//!
//! Each card becomes a `##` section whose anchor is the slugified title, so
//! a list of cards can be dropped into an mdBook page as-is.

use super::published_label;
use crate::card::{CardOptions, CardView};
use crate::format::StarGlyphs;
use crate::utils::slugify_title;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt::Write;

/// Render one card as a Markdown section.
pub fn card_to_markdown(card: &CardView, options: &CardOptions, glyphs: &StarGlyphs) -> String {
    let mut md = String::new();

    writeln!(md, "## {}\n", card.title).unwrap();

    if !card.badges.is_empty() {
        let line = card.badges.iter().map(|b| format!("`{b}`")).join(" ");
        writeln!(md, "{line}\n").unwrap();
    }

    writeln!(
        md,
        "**{}** · _{}_\n",
        card.author_name,
        published_label(card, options)
    )
    .unwrap();

    if !card.thumbnail_url.is_empty() {
        writeln!(md, "![{}]({})\n", card.title, card.thumbnail_url).unwrap();
    }

    if !card.tags.is_empty() {
        let tags = card.tags.iter().map(|t| format!("`{t}`")).join(" ");
        writeln!(md, "**Tags:** {tags}\n").unwrap();
    }

    writeln!(md, "{}\n", card.snippet).unwrap();

    if let Some(url) = &card.read_more {
        writeln!(md, "[Read More]({url})\n").unwrap();
    }

    write!(md, "{} {}", glyphs.draw(&card.stars), card.rating_label).unwrap();
    if let Some(badge) = &card.rating_badge {
        write!(md, " `{badge}`").unwrap();
    }
    writeln!(md, " · {} views", card.views).unwrap();
    md
}

/// Heading ids in page order. A repeated title gets `-1`, `-2`, ... appended
/// the way mdBook disambiguates headings.
fn heading_anchors(cards: &[CardView]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    cards
        .iter()
        .map(|card| {
            let slug = slugify_title(&card.title);
            let count = seen.entry(slug.clone()).or_insert(0);
            let anchor = if *count == 0 {
                slug
            } else {
                format!("{slug}-{count}")
            };
            *count += 1;
            anchor
        })
        .collect()
}

/// Render a page of cards with a linked table of contents.
pub fn cards_to_markdown(cards: &[CardView], options: &CardOptions, glyphs: &StarGlyphs) -> String {
    let mut md = String::from("# News\n\n");

    for (card, anchor) in cards.iter().zip(heading_anchors(cards)) {
        writeln!(md, "- [{}](#{})", card.title, anchor).unwrap();
    }
    if !cards.is_empty() {
        md.push('\n');
    }

    let body = cards
        .iter()
        .map(|card| card_to_markdown(card, options, glyphs))
        .join("\n");
    md.push_str(&body);
    md
}
