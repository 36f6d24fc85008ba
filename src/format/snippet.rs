//! Preview text for the card body.

use crate::utils::collapse_whitespace;

/// Appended to every snippet, truncated or not.
pub const ELLIPSIS: &str = "...";

/// Build the snippet shown under the thumbnail.
///
/// Whitespace runs collapse to a single space. With `max_chars` set, longer
/// text is cut at the last word boundary inside the budget, or hard-cut when
/// the first word alone is over it. The ellipsis is always appended.
///
/// # Arguments
///
/// * `details` - The article body
/// * `max_chars` - Character budget before the ellipsis; `None` keeps all text
///
/// # Returns
///
/// The snippet, ending in [`ELLIPSIS`].
pub fn format_snippet(details: &str, max_chars: Option<usize>) -> String {
    let text = collapse_whitespace(details);

    let body = match max_chars {
        Some(max) if text.chars().count() > max => cut_at_word(&text, max),
        _ => text.as_str(),
    };

    let mut snippet = body.trim_end_matches([' ', ',', ';', ':', '.']).to_string();
    snippet.push_str(ELLIPSIS);
    snippet
}

/// Longest prefix of `text` within `max` chars that ends on a word boundary.
fn cut_at_word(text: &str, max: usize) -> &str {
    let end = text
        .char_indices()
        .nth(max)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());

    // The cut already lands on a boundary when the next char is a space.
    if text[end..].starts_with(' ') {
        return &text[..end];
    }
    match text[..end].rfind(' ') {
        Some(space) => &text[..space],
        None => &text[..end],
    }
}
