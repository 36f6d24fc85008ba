//! Pure formatters that turn raw news fields into display primitives.
//!
//! Nothing in here touches I/O or shared state, so every function is safe to
//! call from any number of rendering contexts at once.
//!
//! # Submodules
//!
//! - [`date`]: `Weekday, Month D, YYYY` dates
//! - [`rating`]: five-position star classification and the numeric label
//! - [`snippet`]: collapsed, optionally truncated preview text
//! - [`views`]: thousands-grouped view counts
//! - [`badges`]: editorial badges from the `others` flags

pub mod badges;
pub mod date;
pub mod rating;
pub mod snippet;
pub mod views;

pub use badges::{Badge, badges};
pub use date::{DateValue, format_date};
pub use rating::{
    STAR_COUNT, StarGlyphs, StarState, format_badge, format_rating_label, render_stars,
};
pub use snippet::format_snippet;
pub use views::format_view_count;
