//! Layout inference and question splitting.
//!
//! The layout is never declared; it follows from which regions a slide
//! populates. Only the set of populated regions matters, not the order the
//! lines were written in.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::{Layout, RegionKind, StyleTag};

/// A line that opens with a question numeral: `1.` or `1)`.
static NUMBERED_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[.)]").unwrap());

/// A question numeral at line start or after whitespace.
static NUMBERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)(\d{1,2})[.)]").unwrap());

/// Whether the text after a numeral lets it stand as a question number.
///
/// `1. Who`, `1.Who` and a bare `1.` qualify; `2.5` does not.
fn ends_numeral(rest: &str) -> bool {
    rest.chars()
        .next()
        .map_or(true, |c| c.is_whitespace() || c.is_alphabetic())
}

/// Choose the layout for a set of populated regions.
pub fn resolve_layout<I>(populated: I) -> Layout
where
    I: IntoIterator<Item = RegionKind>,
{
    let populated: BTreeSet<RegionKind> = populated.into_iter().collect();
    let has = |kind| populated.contains(&kind);

    if has(RegionKind::LeftTop)
        && has(RegionKind::LeftBottom)
        && !has(RegionKind::RightTop)
        && !has(RegionKind::RightBottom)
    {
        Layout::Stacked
    } else if populated.iter().any(RegionKind::is_quadrant) {
        Layout::FourBox
    } else if has(RegionKind::Left) || has(RegionKind::Right) {
        Layout::TwoColumn
    } else {
        Layout::Single
    }
}

/// Choose the layout when a template asks for `shape`.
///
/// A stacked shape holds as long as one half of the stack is populated and
/// no right-hand quadrant is. Anything else falls back to
/// [`resolve_layout`], so explicit regions always win.
pub fn resolve_layout_with_shape<I>(populated: I, shape: Option<Layout>) -> Layout
where
    I: IntoIterator<Item = RegionKind>,
{
    let populated: BTreeSet<RegionKind> = populated.into_iter().collect();
    let has = |kind| populated.contains(&kind);

    if shape == Some(Layout::Stacked)
        && (has(RegionKind::LeftTop) || has(RegionKind::LeftBottom))
        && !has(RegionKind::RightTop)
        && !has(RegionKind::RightBottom)
    {
        return Layout::Stacked;
    }

    resolve_layout(populated)
}

/// A display line waiting to be split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub text: String,
    pub tag: Option<StyleTag>,
}

/// One piece produced by [`split_questions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionItem {
    /// The numeral as written; `None` for text before the first numeral.
    pub number: Option<u32>,
    pub text: String,
    pub tag: Option<StyleTag>,
}

impl QuestionItem {
    fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }
}

/// Whether any line of a block opens with a question numeral.
pub fn has_numbered_items(lines: &[StyledLine]) -> bool {
    lines.iter().any(|l| {
        NUMBERED_START_REGEX
            .find(&l.text)
            .is_some_and(|m| ends_numeral(&l.text[m.end()..]))
    })
}

/// Split a questions block into one item per numeral.
///
/// Returns `None` when no line opens with a numeral, in which case the block
/// stays as written. Text between numerals (including following lines) is
/// joined onto the preceding question; numerals are dropped from the text.
pub fn split_questions(lines: &[StyledLine]) -> Option<Vec<QuestionItem>> {
    if !has_numbered_items(lines) {
        return None;
    }

    let mut items: Vec<QuestionItem> = Vec::new();

    let push_text = |items: &mut Vec<QuestionItem>, text: &str, tag: Option<StyleTag>| {
        let text = text.trim();
        if let Some(last) = items.last_mut() {
            last.append(text);
        } else if !text.is_empty() {
            items.push(QuestionItem {
                number: None,
                text: text.to_string(),
                tag,
            });
        }
    };

    for line in lines {
        let mut last_end = 0;
        for caps in NUMBERED_ITEM_REGEX.captures_iter(&line.text) {
            let (Some(whole), Some(numeral)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if !ends_numeral(&line.text[whole.end()..]) {
                continue;
            }
            push_text(&mut items, &line.text[last_end..whole.start()], line.tag);
            items.push(QuestionItem {
                number: numeral.as_str().parse().ok(),
                text: String::new(),
                tag: line.tag,
            });
            last_end = whole.end();
        }
        push_text(&mut items, &line.text[last_end..], line.tag);
    }

    items.retain(|item| !item.text.is_empty());
    Some(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[&str]) -> Vec<StyledLine> {
        lines
            .iter()
            .map(|t| StyledLine {
                text: t.to_string(),
                tag: None,
            })
            .collect()
    }

    #[test]
    fn test_layout_priority() {
        use RegionKind::*;

        assert_eq!(resolve_layout([LeftTop, LeftBottom]), Layout::Stacked);
        assert_eq!(resolve_layout([LeftTop, LeftBottom, RightTop]), Layout::FourBox);
        assert_eq!(resolve_layout([LeftTop]), Layout::FourBox);
        assert_eq!(resolve_layout([RightBottom, Left]), Layout::FourBox);
        assert_eq!(resolve_layout([Left]), Layout::TwoColumn);
        assert_eq!(resolve_layout([Right, Content]), Layout::TwoColumn);
        assert_eq!(resolve_layout([Content]), Layout::Single);
        assert_eq!(resolve_layout(Vec::<RegionKind>::new()), Layout::Single);
    }

    #[test]
    fn test_stacked_shape_from_template() {
        use RegionKind::*;

        let stacked = Some(Layout::Stacked);
        assert_eq!(resolve_layout_with_shape([LeftBottom], stacked), Layout::Stacked);
        assert_eq!(resolve_layout_with_shape([LeftTop], stacked), Layout::Stacked);
        assert_eq!(
            resolve_layout_with_shape([LeftTop, LeftBottom, RightTop], stacked),
            Layout::FourBox
        );
        assert_eq!(resolve_layout_with_shape([Left], stacked), Layout::TwoColumn);
        assert_eq!(resolve_layout_with_shape([LeftBottom], None), Layout::FourBox);
        assert_eq!(
            resolve_layout_with_shape([Left], Some(Layout::TwoColumn)),
            Layout::TwoColumn
        );
    }

    #[test]
    fn test_layout_ignores_order() {
        use RegionKind::*;

        assert_eq!(
            resolve_layout([LeftBottom, LeftTop, LeftBottom]),
            resolve_layout([LeftTop, LeftBottom])
        );
    }

    #[test]
    fn test_split_single_line() {
        let items = split_questions(&plain(&["1. Q1? 2. Q2?"])).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].number, Some(1));
        assert_eq!(items[0].text, "Q1?");
        assert_eq!(items[1].number, Some(2));
        assert_eq!(items[1].text, "Q2?");
    }

    #[test]
    fn test_split_across_lines_with_parens() {
        let items = split_questions(&plain(&[
            "1) Why did the storm",
            "surprise the town?",
            "2) Who helped?",
        ]))
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text, "Why did the storm surprise the town?");
        assert_eq!(items[1].text, "Who helped?");
    }

    #[test]
    fn test_text_before_first_numeral_is_unnumbered() {
        let items = split_questions(&plain(&["Answer in full sentences.", "1. Where? 2. When?"]))
            .unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].number, None);
        assert_eq!(items[0].text, "Answer in full sentences.");
        assert_eq!(items[2].number, Some(2));
    }

    #[test]
    fn test_no_numerals_keeps_block() {
        assert_eq!(split_questions(&plain(&["What do you think happened next?"])), None);
        // A numeral inside the line does not trigger a split
        assert_eq!(split_questions(&plain(&["Read part 1. Then discuss."])), None);
    }

    #[test]
    fn test_split_without_space_after_numeral() {
        let items = split_questions(&plain(&["1.Who? 2.Where? 3)Why?"])).unwrap();
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Who?", "Where?", "Why?"]);
        assert_eq!(items[2].number, Some(3));
    }

    #[test]
    fn test_decimals_are_not_numerals() {
        let items = split_questions(&plain(&["1. Is 2.5 more than 2?"])).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "Is 2.5 more than 2?");
    }

    #[test]
    fn test_style_follows_source_line() {
        let lines = vec![
            StyledLine {
                text: "1. What?".to_string(),
                tag: Some(StyleTag::Question),
            },
            StyledLine {
                text: "2. Why?".to_string(),
                tag: None,
            },
        ];
        let items = split_questions(&lines).unwrap();
        assert_eq!(items[0].tag, Some(StyleTag::Question));
        assert_eq!(items[1].tag, None);
    }

    #[test]
    fn test_empty_numeral_dropped() {
        let items = split_questions(&plain(&["1.", "2. Only this"])).unwrap();
        // "1." has no text of its own, so it collects nothing and is dropped
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].number, Some(2));
    }
}
