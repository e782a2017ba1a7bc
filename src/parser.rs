//! Post-processing of raw model replies.

/// Separator the list prompts ask the model to use.
pub const LIST_SEPARATOR: &str = ", ";

/// Splits a model reply into list items.
///
/// The whole reply is trimmed once, then split on the exact two-character
/// separator `", "`. Items are neither trimmed nor deduplicated, and an item
/// that itself contains `", "` is split as well.
///
/// An empty reply yields a single empty item.
pub fn parse_comma_separated(text: &str) -> Vec<String> {
    text.trim()
        .split(LIST_SEPARATOR)
        .map(str::to_string)
        .collect()
}
