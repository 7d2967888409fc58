//! Small display helpers shared by every front end.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::Category;

#[allow(clippy::unwrap_used)]
static CLOSED_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9]+)-([0-9]+)").unwrap());

#[allow(clippy::unwrap_used)]
static STRICT_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Space out the first `$min-max` range: `"$500-1000"` becomes
/// `"$500 - $1000"`. Other strings are returned unchanged.
#[must_use]
pub fn format_price_range(price_range: &str) -> String {
    CLOSED_RANGE
        .replacen(price_range, 1, "$$${1} - $$${2}")
        .into_owned()
}

/// Display label for a category identifier, falling back to the identifier
/// itself when it is not exactly a known category id.
#[must_use]
pub fn category_display_name(category_id: &str) -> String {
    Category::ALL
        .into_iter()
        .find(|c| c.id() == category_id)
        .map_or_else(|| category_id.to_string(), |c| c.display_name().to_string())
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    STRICT_EMAIL.is_match(email)
}

/// Cut `text` to `max_chars` characters and append `...` when it was longer.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((end, _)) => format!("{}...", &text[..end]),
    }
}

#[must_use]
pub fn user_initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
