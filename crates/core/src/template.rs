//! Named slide templates.
//!
//! `Template: <name>` asks for a layout shape and puts a header line above
//! each region the author filled. Headers always come first; explicit lines
//! are appended after them and never replace them. A region the author left
//! empty gets no header.

use crate::{Layout, RegionKind};

/// A named template preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// Word / definition columns.
    Vocabulary,
    /// Passage on top, questions below.
    Reading,
    /// Before / after columns.
    Comparison,
}

impl Template {
    /// Look up a template by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "vocabulary" => Some(Template::Vocabulary),
            "reading" => Some(Template::Reading),
            "comparison" => Some(Template::Comparison),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Template::Vocabulary => "vocabulary",
            Template::Reading => "reading",
            Template::Comparison => "comparison",
        }
    }

    /// The layout shape this template asks for.
    pub fn shape(&self) -> Layout {
        match self {
            Template::Vocabulary | Template::Comparison => Layout::TwoColumn,
            Template::Reading => Layout::Stacked,
        }
    }

    /// Header lines (in markup form) this template puts in front of a region.
    pub fn seeds(&self) -> &'static [(RegionKind, &'static str)] {
        match self {
            Template::Vocabulary => &[
                (RegionKind::Left, "[emphasis] Word"),
                (RegionKind::Right, "[emphasis] Definition"),
            ],
            Template::Reading => &[(RegionKind::LeftBottom, "[emphasis] Questions")],
            Template::Comparison => &[
                (RegionKind::Left, "[emphasis] Before"),
                (RegionKind::Right, "[emphasis] After"),
            ],
        }
    }

    /// Seed lines for one region.
    pub fn seeds_for(&self, region: RegionKind) -> impl Iterator<Item = &'static str> + '_ {
        self.seeds()
            .iter()
            .filter(move |(kind, _)| *kind == region)
            .map(|(_, line)| *line)
    }
}
