//! Splits lesson text into raw slide blocks.
//!
//! A block starts at a `Slide N` marker line and ends at a `---` separator,
//! the next marker, or the end of input. Comment lines (first non-blank
//! character `#`) and blank lines are dropped here.

use regex::Regex;
use std::sync::LazyLock;

/// `Slide`, optionally followed by exactly one token.
static MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Slide(?:\s+(\S+))?\s*$").unwrap());

static SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-{3,}$").unwrap());

/// One non-blank, non-comment source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the input.
    pub number: usize,
    pub text: &'a str,
}

/// The marker that opened a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `Slide 3`
    Numbered(u32),
    /// `Slide` with a missing or non-numeric token, e.g. `Slide three`.
    Malformed(String),
}

/// Lines belonging to one slide, not yet classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// `None` for text that follows a separator or precedes the first marker.
    pub marker: Option<Marker>,
    /// Line of the marker, or of the first line for unmarked blocks.
    pub line: usize,
    pub lines: Vec<SourceLine<'a>>,
}

impl<'a> RawBlock<'a> {
    fn open(marker: Option<Marker>, line: usize) -> Self {
        Self {
            marker,
            line,
            lines: Vec::new(),
        }
    }

    fn push(&mut self, line: SourceLine<'a>) {
        if self.marker.is_none() && self.lines.is_empty() {
            self.line = line.number;
        }
        self.lines.push(line);
    }

    /// Unmarked blocks without text carry nothing worth reporting.
    fn is_worth_keeping(&self) -> bool {
        self.marker.is_some() || !self.lines.is_empty()
    }
}

/// Parse a trimmed line as a slide marker.
pub fn parse_marker(line: &str) -> Option<Marker> {
    let caps = MARKER_REGEX.captures(line)?;
    let marker = match caps.get(1) {
        Some(token) => match token.as_str().parse::<u32>() {
            Ok(number) => Marker::Numbered(number),
            Err(_) => Marker::Malformed(token.as_str().to_string()),
        },
        None => Marker::Malformed(String::new()),
    };
    Some(marker)
}

/// Whether a line is dropped as a comment.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Split the input into raw blocks, in source order.
pub fn tokenize(text: &str) -> Vec<RawBlock<'_>> {
    let mut blocks = Vec::new();
    let mut current = RawBlock::open(None, 1);

    for (idx, raw) in text.lines().enumerate() {
        let number = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || is_comment(trimmed) {
            continue;
        }

        if SEPARATOR_REGEX.is_match(trimmed) {
            let closed = std::mem::replace(&mut current, RawBlock::open(None, number + 1));
            if closed.is_worth_keeping() {
                blocks.push(closed);
            }
            continue;
        }

        if let Some(marker) = parse_marker(trimmed) {
            let closed = std::mem::replace(&mut current, RawBlock::open(Some(marker), number));
            if closed.is_worth_keeping() {
                blocks.push(closed);
            }
            continue;
        }

        current.push(SourceLine { number, text: raw });
    }

    if current.is_worth_keeping() {
        blocks.push(current);
    }

    log::debug!("Tokenized {} raw block(s)", blocks.len());
    blocks
}
