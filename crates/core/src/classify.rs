//! Maps the lines of a slide block to section kinds.
//!
//! A line that starts with a known keyword (`Title:`, `Left:`, ...) opens
//! that section. Any other line continues the most recent section, which is
//! how multi-line content under a single keyword works. `Image:` and
//! `Template:` are one-line directives and never take continuation lines.

use crate::tokenize::SourceLine;
use crate::RegionKind;

/// What a line of a slide block contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Region(RegionKind),
    Title,
    Notes,
    Image,
    Template,
}

impl SectionKind {
    /// Keywords in match order. Every keyword ends with a colon, so `Left:`
    /// never matches a `LeftTop:` line.
    const KEYWORDS: [(&'static str, SectionKind); 11] = [
        ("Title:", SectionKind::Title),
        ("Content:", SectionKind::Region(RegionKind::Content)),
        ("Left:", SectionKind::Region(RegionKind::Left)),
        ("Right:", SectionKind::Region(RegionKind::Right)),
        ("LeftTop:", SectionKind::Region(RegionKind::LeftTop)),
        ("RightTop:", SectionKind::Region(RegionKind::RightTop)),
        ("LeftBottom:", SectionKind::Region(RegionKind::LeftBottom)),
        ("RightBottom:", SectionKind::Region(RegionKind::RightBottom)),
        ("Notes:", SectionKind::Notes),
        ("Image:", SectionKind::Image),
        ("Template:", SectionKind::Template),
    ];

    /// Split a keyword prefix off a trimmed line. Matching is case-sensitive.
    pub fn match_keyword(line: &str) -> Option<(SectionKind, &str)> {
        Self::KEYWORDS.iter().find_map(|(keyword, kind)| {
            line.strip_prefix(keyword).map(|rest| (*kind, rest.trim()))
        })
    }

    /// Whether unkeyed lines after this section are appended to it.
    pub fn takes_continuation(&self) -> bool {
        !matches!(self, SectionKind::Image | SectionKind::Template)
    }
}

/// A line attributed to a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: SectionKind,
    /// Text after the keyword, trimmed. May be empty (`Content:` alone).
    pub text: &'a str,
    pub line: usize,
    /// The line had no keyword and was attached to the previous section.
    pub continuation: bool,
}

/// Result of classifying one block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    pub lines: Vec<ClassifiedLine<'a>>,
    /// Unkeyed lines seen before any section was opened.
    pub stray: Vec<SourceLine<'a>>,
}

/// Classify the lines of a block in order.
pub fn classify<'a>(lines: &[SourceLine<'a>]) -> Classification<'a> {
    let mut result = Classification::default();
    let mut section: Option<SectionKind> = None;

    for source in lines {
        let trimmed = source.text.trim();

        if let Some((kind, text)) = SectionKind::match_keyword(trimmed) {
            if kind.takes_continuation() {
                section = Some(kind);
            }
            log::trace!("line {}: {:?}", source.number, kind);
            result.lines.push(ClassifiedLine {
                kind,
                text,
                line: source.number,
                continuation: false,
            });
            continue;
        }

        match section {
            Some(kind) => {
                log::trace!("line {}: continues {:?}", source.number, kind);
                result.lines.push(ClassifiedLine {
                    kind,
                    text: trimmed,
                    line: source.number,
                    continuation: true,
                });
            }
            None => result.stray.push(*source),
        }
    }

    result
}
