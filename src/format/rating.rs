//! Star-rating classification.
//!
//! A rating in `[0, 5]` becomes five [`StarState`]s: a run of `Full` stars,
//! at most one `Half` directly after it, and `Empty` for the rest. Which icon
//! a `Half` gets is up to the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of star positions on a card.
pub const STAR_COUNT: usize = 5;

const MAX_RATING: f64 = STAR_COUNT as f64;

/// Fill level for one star position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarState {
    Full,
    Half,
    Empty,
}

/// Glyphs used to draw each [`StarState`] in plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarGlyphs {
    pub full: String,
    pub half: String,
    pub empty: String,
}

impl Default for StarGlyphs {
    fn default() -> Self {
        Self {
            full: "★".to_string(),
            half: "⯪".to_string(),
            empty: "☆".to_string(),
        }
    }
}

impl StarGlyphs {
    pub fn glyph(&self, state: StarState) -> &str {
        match state {
            StarState::Full => &self.full,
            StarState::Half => &self.half,
            StarState::Empty => &self.empty,
        }
    }

    /// Concatenate the glyphs for a full star row.
    pub fn draw(&self, stars: &[StarState]) -> String {
        stars.iter().map(|s| self.glyph(*s)).collect()
    }
}

impl fmt::Display for StarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StarState::Full => "full",
            StarState::Half => "half",
            StarState::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Clamp into `[0, 5]`. NaN counts as no rating at all.
fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    }
}

/// Classify a rating into exactly five star states.
///
/// Out-of-range input is clamped first, so `-3` draws like `0` and `7` like
/// `5`.
///
/// ```
/// use news_card::format::{render_stars, StarState::*};
///
/// assert_eq!(render_stars(3.5), [Full, Full, Full, Half, Empty]);
/// ```
pub fn render_stars(rating: f64) -> [StarState; STAR_COUNT] {
    let rating = clamp_rating(rating);
    let full = rating.floor() as usize;
    let has_half = rating.fract() != 0.0;

    std::array::from_fn(|i| {
        if i < full {
            StarState::Full
        } else if i == full && has_half {
            StarState::Half
        } else {
            StarState::Empty
        }
    })
}

/// Numeric label shown next to the stars, with no forced decimals (`4`,
/// `3.5`).
pub fn format_rating_label(rating: f64) -> String {
    rating.to_string()
}

/// Rating badges pass straight through; only presence matters.
pub fn format_badge(badge: Option<&str>) -> Option<&str> {
    badge
}
