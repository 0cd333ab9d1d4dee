//! Inline style tags.
//!
//! A content line may start with one bracketed tag such as `[vocabulary]`.
//! Recognized tags are stripped from the display text; anything else in
//! brackets is ordinary text and stays exactly as written.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::{Rgb, StylePreset};
use crate::StyleTag;

/// Leading `[name]` tag plus the whitespace after it.
static LEADING_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\w+)\]\s*").unwrap());

/// Built-in presets, indexed in `StyleTag::ALL` order.
const BUILTIN_PRESETS: [(StyleTag, StylePreset); 5] = [
    (
        StyleTag::Vocabulary,
        StylePreset {
            color: Rgb(0, 102, 0),
            bold: true,
            italic: false,
            font_size: 24,
        },
    ),
    (
        StyleTag::Question,
        StylePreset {
            color: Rgb(102, 0, 102),
            bold: false,
            italic: false,
            font_size: 20,
        },
    ),
    (
        StyleTag::Answer,
        StylePreset {
            color: Rgb(128, 128, 128),
            bold: false,
            italic: true,
            font_size: 18,
        },
    ),
    (
        StyleTag::Emphasis,
        StylePreset {
            color: Rgb(192, 0, 0),
            bold: true,
            italic: false,
            font_size: 22,
        },
    ),
    (
        StyleTag::Step,
        StylePreset {
            color: Rgb(0, 0, 102),
            bold: false,
            italic: false,
            font_size: 22,
        },
    ),
];

/// Built-in preset for a tag.
pub fn builtin_preset(tag: StyleTag) -> StylePreset {
    BUILTIN_PRESETS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, preset)| *preset)
        .unwrap_or(BUILTIN_PRESETS[0].1)
}

/// A line with its style tag resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText<'a> {
    /// Text with the tag removed.
    pub text: &'a str,
    pub tag: Option<StyleTag>,
}

/// Split a recognized leading tag off a content line.
pub fn resolve_style(line: &str) -> StyledText<'_> {
    let line = line.trim();

    if let Some(caps) = LEADING_TAG_REGEX.captures(line) {
        if let Some(tag) = StyleTag::from_name(&caps[1]) {
            return StyledText {
                text: &line[caps[0].len()..],
                tag: Some(tag),
            };
        }
        log::trace!("Leaving unknown tag [{}] as text", &caps[1]);
    }

    StyledText {
        text: line,
        tag: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_tag_is_stripped() {
        let styled = resolve_style("[vocabulary] resilience");
        assert_eq!(styled.text, "resilience");
        assert_eq!(styled.tag, Some(StyleTag::Vocabulary));
    }

    #[test]
    fn test_every_tag_is_recognized() {
        for tag in StyleTag::ALL {
            let line = format!("[{}] text", tag.name());
            assert_eq!(resolve_style(&line).tag, Some(tag));
        }
    }

    #[test]
    fn test_step_tag() {
        let styled = resolve_style("[step]First, identify the problem");
        assert_eq!(styled.text, "First, identify the problem");
        assert_eq!(styled.tag, Some(StyleTag::Step));
    }

    #[test]
    fn test_unknown_tag_is_literal() {
        let styled = resolve_style("[topic] What is your experience?");
        assert_eq!(styled.text, "[topic] What is your experience?");
        assert_eq!(styled.tag, None);
    }

    #[test]
    fn test_only_leading_tag_counts() {
        let styled = resolve_style("What is your experience with [question]?");
        assert_eq!(styled.tag, None);

        let styled = resolve_style("[emphasis] [answer] both");
        assert_eq!(styled.tag, Some(StyleTag::Emphasis));
        assert_eq!(styled.text, "[answer] both");
    }

    #[test]
    fn test_tag_names_are_case_sensitive() {
        assert_eq!(resolve_style("[Step] later").tag, None);
    }

    #[test]
    fn test_no_tag() {
        let styled = resolve_style("  plain text  ");
        assert_eq!(styled.text, "plain text");
        assert_eq!(styled.tag, None);
    }

    #[test]
    fn test_builtin_presets() {
        let vocab = builtin_preset(StyleTag::Vocabulary);
        assert_eq!(vocab.color, Rgb(0, 102, 0));
        assert!(vocab.bold);

        let answer = builtin_preset(StyleTag::Answer);
        assert!(answer.italic);
        assert_eq!(answer.font_size, 18);

        for tag in StyleTag::ALL {
            assert_eq!(
                BUILTIN_PRESETS.iter().filter(|(t, _)| *t == tag).count(),
                1
            );
        }
    }
}
