//! Label canonicalization for tolerant footer-label comparison.

use once_cell::sync::Lazy;
use regex::Regex;

static DOTS_AND_ZERO_WIDTH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.\u{200b}]+").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalizes a table label.
///
/// Non-breaking spaces become spaces, dots and zero-width spaces are dropped,
/// whitespace runs collapse to one space, the result is trimmed and lowercased.
/// `"162\u{a0}Game Avg."` and `"162 game avg"` normalize to the same string.
pub fn normalize_label(raw: &str) -> String {
    let s = raw.replace('\u{a0}', " ");
    let s = DOTS_AND_ZERO_WIDTH.replace_all(&s, "");
    let s = WHITESPACE.replace_all(&s, " ");
    s.trim().to_lowercase()
}

/// Concatenates an element's text nodes, each trimmed, without separators.
pub(crate) fn compact_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.map(str::trim).collect()
}

/// Joins an element's non-empty text nodes, each trimmed, with single spaces.
pub(crate) fn spaced_text<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
