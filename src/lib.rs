//! # News Card
//!
//! Turns raw news records into display-ready card data: long-form dates,
//! five-position star ratings, snippets, view counts, and editorial badges.
//!
//! ## Layout
//!
//! - [`models`]: the `NewsItem` input shape
//! - [`format`]: pure formatters, one per display primitive
//! - [`card`]: the per-item [`CardView`](card::CardView) projection and the
//!   "Read More"/"Share" capabilities
//! - [`outputs`]: text, Markdown and JSON renderers
//! - [`config`]: YAML configuration
//!
//! ## Example
//!
//! ```
//! use news_card::format::{format_date, render_stars, StarState::*};
//!
//! assert_eq!(format_date("2025-01-05").unwrap(), "Sunday, January 5, 2025");
//! assert_eq!(render_stars(3.5), [Full, Full, Full, Half, Empty]);
//! ```

pub mod card;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod outputs;
pub mod utils;

pub use card::{CardActions, CardOptions, CardView, LinkActions, NoActions};
pub use error::{CardError, InvalidDateError};
pub use models::NewsItem;
