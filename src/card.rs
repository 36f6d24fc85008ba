//! Card projection: one [`NewsItem`] in, one display-ready [`CardView`] out.
//!
//! The projection runs every formatter once and carries the untouched fields
//! (title, tags, image URLs) alongside. It never fails. A date that does not
//! parse stays an `Err` in [`CardView::published`] so whoever draws the card
//! picks the fallback.
//!
//! "Read More" and "Share" are capabilities supplied through [`CardActions`];
//! the projection only asks them for links.

use crate::error::{CardError, InvalidDateError};
use crate::format::{
    Badge, STAR_COUNT, StarState, badges, format_badge, format_date, format_rating_label,
    format_snippet, format_view_count, render_stars,
};
use crate::models::NewsItem;
use crate::utils::slugify_title;
use serde::{Deserialize, Serialize};
use url::Url;

/// Knobs for building a [`CardView`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    /// Snippet budget in characters; `None` keeps the whole body.
    pub snippet_max_chars: Option<usize>,
    /// Shown in place of a date that failed to parse.
    pub unknown_date_label: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            snippet_max_chars: Some(180),
            unknown_date_label: "Unknown date".to_string(),
        }
    }
}

/// Navigation and sharing affordances attached to a card.
pub trait CardActions {
    /// Where "Read More" should lead, if anywhere.
    fn read_more(&self, item: &NewsItem) -> Option<Url>;

    /// Text handed to a share sheet, if sharing is offered.
    fn share(&self, item: &NewsItem) -> Option<String>;
}

/// No links, no sharing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoActions;

impl CardActions for NoActions {
    fn read_more(&self, _item: &NewsItem) -> Option<Url> {
        None
    }

    fn share(&self, _item: &NewsItem) -> Option<String> {
        None
    }
}

/// Links each item to `<base>/<slugified title>` and shares that link.
#[derive(Debug, Clone)]
pub struct LinkActions {
    base: Url,
}

impl LinkActions {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Build from a base URL string.
    pub fn parse(base: &str) -> Result<Self, CardError> {
        let base = Url::parse(base).map_err(|source| CardError::Url {
            input: base.to_string(),
            source,
        })?;
        Ok(Self::new(base))
    }
}

impl CardActions for LinkActions {
    fn read_more(&self, item: &NewsItem) -> Option<Url> {
        let slug = slugify_title(&item.title);
        if slug.is_empty() {
            return None;
        }
        let mut url = self.base.clone();
        url.path_segments_mut().ok()?.pop_if_empty().push(&slug);
        Some(url)
    }

    fn share(&self, item: &NewsItem) -> Option<String> {
        self.read_more(item)
            .map(|url| format!("{} - {}", item.title, url))
    }
}

/// Everything a renderer needs to draw one card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub title: String,
    pub author_name: String,
    pub author_img: String,
    #[serde(serialize_with = "serialize_published")]
    pub published: Result<String, InvalidDateError>,
    pub thumbnail_url: String,
    pub tags: Vec<String>,
    pub snippet: String,
    pub stars: [StarState; STAR_COUNT],
    pub rating_label: String,
    pub rating_badge: Option<String>,
    pub views: String,
    pub badges: Vec<Badge>,
    pub read_more: Option<Url>,
    pub share: Option<String>,
}

/// Failed dates serialize as `null`; the renderer decides on the fallback text.
fn serialize_published<S>(
    published: &Result<String, InvalidDateError>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    published.as_ref().ok().serialize(serializer)
}

impl CardView {
    /// Run every formatter over `item` and collect the results.
    ///
    /// # Arguments
    ///
    /// * `item` - The news record to project; it is only read
    /// * `options` - Snippet budget and date fallback settings
    /// * `actions` - Supplies the "Read More" link and share text
    ///
    /// # Returns
    ///
    /// A [`CardView`]. An empty rating badge counts as no badge, and an
    /// unparsable date is kept as `Err` in [`CardView::published`].
    pub fn project(item: &NewsItem, options: &CardOptions, actions: &dyn CardActions) -> Self {
        Self {
            title: item.title.clone(),
            author_name: item.author.name.clone(),
            author_img: item.author.img.clone(),
            published: format_date(&item.author.published_date),
            thumbnail_url: item.thumbnail_url.clone(),
            tags: item.tags.clone(),
            snippet: format_snippet(&item.details, options.snippet_max_chars),
            stars: render_stars(item.rating.number),
            rating_label: format_rating_label(item.rating.number),
            rating_badge: format_badge(item.rating.badge.as_deref())
                .filter(|badge| !badge.is_empty())
                .map(str::to_string),
            views: format_view_count(item.total_view),
            badges: badges(&item.others),
            read_more: actions.read_more(item),
            share: actions.share(item),
        }
    }

    /// The published date, or `fallback` when it did not parse.
    pub fn published_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.published.as_deref().unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DateValue;
    use crate::format::StarState::*;
    use crate::models::fixtures::sample_item;

    #[test]
    fn test_project_sample() {
        let card = CardView::project(&sample_item(), &CardOptions::default(), &NoActions);

        assert_eq!(card.title, "Central bank holds rates steady");
        assert_eq!(card.published.as_deref(), Ok("Sunday, January 5, 2025"));
        assert_eq!(card.stars, [Full, Full, Full, Full, Half]);
        assert_eq!(card.rating_label, "4.5");
        assert_eq!(card.rating_badge.as_deref(), Some("Excellent"));
        assert_eq!(card.views, "488,990");
        assert_eq!(card.badges, vec![Badge::Trending]);
        assert_eq!(card.tags, vec!["economy", "rates", "policy"]);
        assert!(card.snippet.ends_with("..."));
        assert_eq!(card.read_more, None);
        assert_eq!(card.share, None);
    }

    #[test]
    fn test_empty_rating_badge_is_absent() {
        let mut item = sample_item();
        item.rating.badge = Some(String::new());
        let card = CardView::project(&item, &CardOptions::default(), &NoActions);
        assert_eq!(card.rating_badge, None);
    }

    #[test]
    fn test_invalid_date_is_left_to_renderer() {
        let mut item = sample_item();
        item.author.published_date = DateValue::Text("sometime last week".to_string());

        let options = CardOptions::default();
        let card = CardView::project(&item, &options, &NoActions);
        assert_eq!(
            card.published,
            Err(InvalidDateError::new("sometime last week"))
        );
        assert_eq!(card.published_or(&options.unknown_date_label), "Unknown date");
    }

    #[test]
    fn test_snippet_budget_applies() {
        let options = CardOptions {
            snippet_max_chars: Some(16),
            ..CardOptions::default()
        };
        let card = CardView::project(&sample_item(), &options, &NoActions);
        assert_eq!(card.snippet, "The central bank...");

        let unlimited = CardOptions {
            snippet_max_chars: None,
            ..CardOptions::default()
        };
        let card = CardView::project(&sample_item(), &unlimited, &NoActions);
        assert_eq!(
            card.snippet,
            "The central bank kept its benchmark rate unchanged on Sunday, citing easing inflation..."
        );
    }

    #[test]
    fn test_link_actions() {
        let actions = LinkActions::parse("https://news.example.com/articles/").unwrap();
        let item = sample_item();

        let url = actions.read_more(&item).unwrap();
        assert_eq!(
            url.as_str(),
            "https://news.example.com/articles/central-bank-holds-rates-steady"
        );
        assert_eq!(
            actions.share(&item).unwrap(),
            "Central bank holds rates steady - https://news.example.com/articles/central-bank-holds-rates-steady"
        );
    }

    #[test]
    fn test_link_actions_without_trailing_slash() {
        let actions = LinkActions::parse("https://news.example.com/articles").unwrap();
        let url = actions.read_more(&sample_item()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://news.example.com/articles/central-bank-holds-rates-steady"
        );
    }

    #[test]
    fn test_link_actions_skip_unsluggable_titles() {
        let actions = LinkActions::parse("https://news.example.com").unwrap();
        let mut item = sample_item();
        item.title = "!!!".to_string();
        assert_eq!(actions.read_more(&item), None);
        assert_eq!(actions.share(&item), None);
    }

    #[test]
    fn test_link_actions_reject_bad_base() {
        let err = LinkActions::parse("not a url").unwrap_err();
        assert!(matches!(err, CardError::Url { .. }));
    }

    #[test]
    fn test_card_json_shape() {
        let mut item = sample_item();
        item.author.published_date = DateValue::Text("garbage".to_string());
        let card = CardView::project(&item, &CardOptions::default(), &NoActions);

        let json = serde_json::to_value(&card).unwrap();
        assert!(json["published"].is_null());
        assert_eq!(json["stars"][4], "half");
        assert_eq!(json["badges"][0], "trending");
        assert_eq!(json["views"], "488,990");
    }
}
