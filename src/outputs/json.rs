//! JSON output of card views.
//!
//! Each card serializes with its star states as `"full" | "half" | "empty"`
//! and `published: null` when the date did not parse, leaving glyphs and
//! fallback text to the consumer.

use crate::card::CardView;
use crate::error::Result;

/// Serialize cards as a pretty-printed JSON array.
pub fn cards_to_json(cards: &[CardView]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}
