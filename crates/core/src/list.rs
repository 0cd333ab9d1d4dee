//! Bullet-list detection.
//!
//! A region reads as a list when at least half of its lines open with a
//! bullet (`•`, `-`, `*`), a numeral (`1.`) or a letter marker (`a)`, `A.`).
//! List lines lose their marker; the renderer draws its own bullets.

use regex::Regex;
use std::sync::LazyLock;

static LIST_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[•\-*]|\d+\.|[a-z]\)|[A-Z]\.)").unwrap());

/// Markers that are removed from list lines. `A.` is recognized but kept,
/// since it is often the start of an initial or abbreviation.
static BULLET_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[•\-*]|\d+\.|[a-z]\))\s*").unwrap());

/// Whether a line opens with a list marker.
pub fn is_list_item(line: &str) -> bool {
    LIST_ITEM_REGEX.is_match(line)
}

/// Whether enough of `lines` are list items for the region to be a list.
pub fn is_list<'a, I>(lines: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let (total, marked) = lines
        .into_iter()
        .fold((0usize, 0usize), |(total, marked), line| {
            (total + 1, marked + usize::from(is_list_item(line)))
        });

    total > 0 && marked * 2 >= total
}

/// Strip a leading bullet marker.
pub fn strip_marker(line: &str) -> &str {
    match BULLET_MARKER_REGEX.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}
