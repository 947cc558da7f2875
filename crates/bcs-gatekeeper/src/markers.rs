//! Extraction of embedded code markers from markdown bodies

use regex::Regex;
use std::sync::LazyLock;

/// A marker carries at least one digit; the bare acronym is prose
static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bBCS[0-9][0-9A-Za-z]*").expect("valid marker regex"));

static BRACKET_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(BCS[0-9A-Za-z]*)\]").expect("valid bracket marker regex"));

/// Lines outside fenced code blocks
pub(crate) fn prose_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut in_fence = false;
    content.lines().filter(move |line| {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            return false;
        }
        !in_fence
    })
}

/// The first `BCS…` token on a heading line, if any
pub(crate) fn heading_marker(content: &str) -> Option<&str> {
    prose_lines(content)
        .filter(|line| line.starts_with('#'))
        .find_map(|line| HEADING_MARKER.find(line))
        .map(|m| m.as_str())
}

/// Every bracketed `[BCS…]` token outside code blocks
pub(crate) fn bracket_markers(content: &str) -> Vec<&str> {
    prose_lines(content)
        .flat_map(|line| BRACKET_MARKER.captures_iter(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Number of lines starting with `prefix` outside code blocks
pub(crate) fn count_headings(content: &str, prefix: &str) -> usize {
    prose_lines(content)
        .filter(|line| line.starts_with(prefix))
        .count()
}
