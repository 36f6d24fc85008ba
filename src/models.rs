//! Data models for the news records a card is built from.
//!
//! This module defines the read-only input shape:
//! - [`NewsItem`]: one article as supplied by the upstream feed
//! - [`Rating`], [`Author`], [`Others`]: its nested records
//!
//! Field names are snake_case to match the feed's JSON. Optional parts
//! (`rating.badge`, `others` and its flags, `tags`) default to absent/false
//! when the feed leaves them out.

use crate::format::DateValue;
use serde::Deserialize;

/// A news article as received from the data source.
///
/// Nothing in this crate mutates a `NewsItem`; cards are projections of it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsItem {
    /// The article headline.
    pub title: String,
    /// Reader rating and optional rating badge.
    pub rating: Rating,
    /// Total number of views.
    pub total_view: u64,
    /// Who wrote the article and when it was published.
    pub author: Author,
    /// Image shown at the top of the card.
    pub thumbnail_url: String,
    /// The article body the snippet is cut from.
    pub details: String,
    /// Topic tags, in display order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Editorial flags.
    #[serde(default)]
    pub others: Others,
}

/// Reader rating of an article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rating {
    /// Nominally in `[0, 5]`; out-of-range values are clamped when drawn.
    pub number: f64,
    /// Short label such as "Excellent" or "Trending".
    #[serde(default)]
    pub badge: Option<String>,
}

/// Article author and publication time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub name: String,
    /// Avatar URL.
    pub img: String,
    /// Epoch milliseconds or ISO-8601 text.
    pub published_date: DateValue,
}

/// Independent editorial flags; both may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Others {
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_today_pick: bool,
}

/// Parse a feed payload holding either one item or an array of items.
///
/// Array elements are decoded one by one so a malformed item reports its
/// own field error rather than a generic mismatch.
///
/// # Arguments
///
/// * `json` - Raw JSON text from the data source
///
/// # Returns
///
/// The items in payload order, or the first decoding error.
pub fn parse_items(json: &str) -> serde_json::Result<Vec<NewsItem>> {
    match serde_json::from_str::<serde_json::Value>(json)? {
        serde_json::Value::Array(values) => values
            .into_iter()
            .map(serde_json::from_value::<NewsItem>)
            .collect(),
        value => Ok(vec![serde_json::from_value(value)?]),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardOptions, CardView, NoActions};
    use crate::error::InvalidDateError;

    #[test]
    fn test_news_item_deserialization() {
        let item = fixtures::sample_item();
        assert_eq!(item.title, "Central bank holds rates steady");
        assert_eq!(item.rating.number, 4.5);
        assert_eq!(item.rating.badge.as_deref(), Some("Excellent"));
        assert_eq!(item.total_view, 488_990);
        assert_eq!(item.author.name, "Jane Doe");
        assert_eq!(
            item.author.published_date,
            DateValue::Text("2025-01-05T09:30:00.000Z".to_string())
        );
        assert_eq!(item.tags, vec!["economy", "rates", "policy"]);
        assert!(item.others.is_trending);
        assert!(!item.others.is_today_pick);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "title": "Minimal",
            "rating": { "number": 3 },
            "total_view": 0,
            "author": { "name": "A", "img": "", "published_date": 1736035200000 },
            "thumbnail_url": "",
            "details": ""
        }"#;

        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rating.badge, None);
        assert_eq!(item.others, Others::default());
        assert!(item.tags.is_empty());
        assert_eq!(
            item.author.published_date,
            DateValue::Timestamp(1_736_035_200_000)
        );
    }

    #[test]
    fn test_partial_others_flags() {
        let others: Others = serde_json::from_str(r#"{ "is_today_pick": true }"#).unwrap();
        assert!(others.is_today_pick);
        assert!(!others.is_trending);
    }

    #[test]
    fn test_parse_items_single_and_array() {
        let one = parse_items(fixtures::SAMPLE_JSON).unwrap();
        assert_eq!(one.len(), 1);

        let many = parse_items(&format!("[{0}, {0}]", fixtures::SAMPLE_JSON)).unwrap();
        assert_eq!(many.len(), 2);

        assert!(parse_items("[]").unwrap().is_empty());
        assert!(parse_items(r#"{"title": "missing everything"}"#).is_err());
    }

    #[test]
    fn test_parse_items_reports_field_errors() {
        let json = fixtures::SAMPLE_JSON
            .replace(r#""title": "Central bank holds rates steady","#, "");
        let err = parse_items(&format!("[{}, {json}]", fixtures::SAMPLE_JSON)).unwrap_err();
        assert!(err.to_string().contains("missing field `title`"));
    }

    #[test]
    fn test_bad_date_does_not_sink_the_batch() {
        let null_date = fixtures::SAMPLE_JSON
            .replace(r#""2025-01-05T09:30:00.000Z""#, "null");
        let float_date = fixtures::SAMPLE_JSON
            .replace(r#""2025-01-05T09:30:00.000Z""#, "1736035200000.0");
        let json = format!("[{}, {null_date}, {float_date}]", fixtures::SAMPLE_JSON);

        let items = parse_items(&json).unwrap();
        assert_eq!(items.len(), 3);

        let cards: Vec<CardView> = items
            .iter()
            .map(|item| CardView::project(item, &CardOptions::default(), &NoActions))
            .collect();
        assert_eq!(cards[0].published.as_deref(), Ok("Sunday, January 5, 2025"));
        assert_eq!(cards[1].published, Err(InvalidDateError::new("null")));
        assert_eq!(cards[2].published.as_deref(), Ok("Sunday, January 5, 2025"));
    }

    #[test]
    fn test_negative_view_count_rejected() {
        let json = fixtures::SAMPLE_JSON.replace("488990", "-1");
        assert!(serde_json::from_str::<NewsItem>(&json).is_err());
    }
}
