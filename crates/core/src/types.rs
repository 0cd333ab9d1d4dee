//! Domain types for the compiled slide model.
//!
//! These are the types handed to a rendering backend. Everything a renderer
//! needs (layout, per-block font size and style, image parameters) is carried
//! explicitly so no further inference is required downstream.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::Theme;
use crate::symbols;

/// A compiled lesson: slides in declaration order plus the resolved theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Slides in the order their markers appear in the source.
    pub slides: Vec<Slide>,

    /// Renderer presets the document was compiled with.
    pub theme: Theme,
}

impl Document {
    /// Create an empty document using the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            slides: Vec::new(),
            theme,
        }
    }

    /// Add a slide to the document.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Look up a slide by its declared number.
    pub fn slide(&self, number: u32) -> Option<&Slide> {
        self.slides.iter().find(|s| s.number == number)
    }
}

/// The geometric arrangement of regions on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layout {
    /// One full-width column fed by `Content:`.
    Single,
    /// Two equal columns fed by `Left:` / `Right:`.
    TwoColumn,
    /// A 2x2 grid of equal quadrants.
    FourBox,
    /// Reading passage on top (`LeftTop:`), questions below (`LeftBottom:`).
    Stacked,
}

impl Layout {
    /// Regions this layout places on the slide, in reading order.
    pub fn regions(&self) -> &'static [RegionKind] {
        match self {
            Layout::Single => &[RegionKind::Content],
            Layout::TwoColumn => &[RegionKind::Left, RegionKind::Right],
            Layout::FourBox => &[
                RegionKind::LeftTop,
                RegionKind::RightTop,
                RegionKind::LeftBottom,
                RegionKind::RightBottom,
            ],
            Layout::Stacked => &[RegionKind::LeftTop, RegionKind::LeftBottom],
        }
    }

    /// Whether this layout places `region` on the slide.
    pub fn displays(&self, region: RegionKind) -> bool {
        self.regions().contains(&region)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::Single => "Single",
            Layout::TwoColumn => "TwoColumn",
            Layout::FourBox => "FourBox",
            Layout::Stacked => "Stacked",
        };
        f.write_str(name)
    }
}

/// A named placement slot within a slide layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RegionKind {
    Content,
    Left,
    Right,
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

impl RegionKind {
    /// Every region kind, in declaration order.
    pub const ALL: [RegionKind; 7] = [
        RegionKind::Content,
        RegionKind::Left,
        RegionKind::Right,
        RegionKind::LeftTop,
        RegionKind::RightTop,
        RegionKind::LeftBottom,
        RegionKind::RightBottom,
    ];

    /// The line-prefix keyword (without the colon) that feeds this region.
    pub fn keyword(&self) -> &'static str {
        match self {
            RegionKind::Content => "Content",
            RegionKind::Left => "Left",
            RegionKind::Right => "Right",
            RegionKind::LeftTop => "LeftTop",
            RegionKind::RightTop => "RightTop",
            RegionKind::LeftBottom => "LeftBottom",
            RegionKind::RightBottom => "RightBottom",
        }
    }

    /// Whether this region is one of the four grid quadrants.
    pub fn is_quadrant(&self) -> bool {
        matches!(
            self,
            RegionKind::LeftTop
                | RegionKind::RightTop
                | RegionKind::LeftBottom
                | RegionKind::RightBottom
        )
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single slide of the compiled document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    /// Number declared by the `Slide N` marker.
    pub number: u32,

    /// Slide title. May be empty, in which case validation reports an error.
    pub title: String,

    /// Layout inferred from the populated regions.
    pub layout: Layout,

    /// Content blocks per region, in source order.
    pub regions: BTreeMap<RegionKind, Vec<ContentBlock>>,

    /// Speaker notes, one `Notes:` line per text line.
    pub notes: Option<String>,

    /// Images in source order.
    pub images: Vec<ImageRef>,

    /// Template the slide was expanded from, if any.
    pub template: Option<String>,

    /// 1-based source line of the `Slide` marker.
    pub line: usize,
}

impl Slide {
    /// Create an empty single-column slide.
    pub fn new(number: u32, line: usize) -> Self {
        Self {
            number,
            title: String::new(),
            layout: Layout::Single,
            regions: BTreeMap::new(),
            notes: None,
            images: Vec::new(),
            template: None,
            line,
        }
    }

    /// Blocks of a region, empty if the region was never populated.
    pub fn blocks(&self, region: RegionKind) -> &[ContentBlock] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Regions holding at least one block.
    pub fn populated_regions(&self) -> impl Iterator<Item = RegionKind> + '_ {
        self.regions
            .iter()
            .filter(|(_, blocks)| !blocks.is_empty())
            .map(|(kind, _)| *kind)
    }

    /// Total displayed character count of a region.
    pub fn region_len(&self, region: RegionKind) -> usize {
        self.blocks(region).iter().map(ContentBlock::char_len).sum()
    }

    /// Whether a region is rendered as a bulleted list.
    pub fn is_list(&self, region: RegionKind) -> bool {
        self.blocks(region).iter().any(|b| b.is_bullet)
    }

    /// Number of numbered question blocks on the slide.
    pub fn question_count(&self) -> usize {
        self.regions
            .values()
            .flatten()
            .filter(|b| b.is_question())
            .count()
    }
}

/// One paragraph of displayed text within a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Display text: style tag stripped, symbols substituted.
    pub text: String,

    /// Inline style tag, if the line started with a recognized one.
    pub style: Option<StyleTag>,

    /// Point size derived from the text length.
    pub font_size: u32,

    /// Rendered as a separate shape so it can be revealed on its own.
    pub is_step: bool,

    /// Numeral of an auto-split question item (`2.` / `2)` gives 2).
    pub number: Option<u32>,

    /// Item of a bulleted list; the source marker has been removed.
    #[serde(default)]
    pub is_bullet: bool,
}

impl ContentBlock {
    /// Create a plain block.
    pub fn new(text: impl Into<String>, style: Option<StyleTag>, font_size: u32) -> Self {
        Self {
            text: text.into(),
            is_step: style == Some(StyleTag::Step),
            style,
            font_size,
            number: None,
            is_bullet: false,
        }
    }

    /// Mark the block as a list item.
    pub fn with_bullet(mut self) -> Self {
        self.is_bullet = true;
        self
    }

    /// Mark the block as a numbered question item.
    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    /// Whether the block was split off as a numbered question.
    pub fn is_question(&self) -> bool {
        self.number.is_some()
    }

    /// Displayed length in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Rebuild the markup the block was compiled from.
    ///
    /// Glyphs are turned back into their source tokens and the style tag is
    /// re-inserted. List items get a `- ` marker; question numerals are not
    /// restored.
    pub fn to_markup(&self) -> String {
        let mut text = symbols::restore(&self.text);
        if self.is_bullet {
            text.insert_str(0, "- ");
        }
        match self.style {
            Some(tag) => format!("[{}] {}", tag.name(), text),
            None => text,
        }
    }
}

/// Inline style tag selecting a predefined presentation preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Vocabulary,
    Question,
    Answer,
    Emphasis,
    Step,
}

impl StyleTag {
    /// Every recognized tag.
    pub const ALL: [StyleTag; 5] = [
        StyleTag::Vocabulary,
        StyleTag::Question,
        StyleTag::Answer,
        StyleTag::Emphasis,
        StyleTag::Step,
    ];

    /// Tag name as written between brackets.
    pub fn name(&self) -> &'static str {
        match self {
            StyleTag::Vocabulary => "vocabulary",
            StyleTag::Question => "question",
            StyleTag::Answer => "answer",
            StyleTag::Emphasis => "emphasis",
            StyleTag::Step => "step",
        }
    }

    /// Look up a tag by its bracketed name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Horizontal alignment of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Parse an `align=` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" => Some(Align::Left),
            "center" | "centre" => Some(Align::Center),
            "right" => Some(Align::Right),
            _ => None,
        }
    }
}

/// Image placement parsed from an `Image:` line. Dimensions are in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: String,
    pub width: f64,
    pub align: Align,
    pub left: Option<f64>,
    pub top: Option<f64>,
}

impl ImageRef {
    /// Default image width in inches.
    pub const DEFAULT_WIDTH: f64 = 4.0;

    /// Create an image reference with default placement.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            width: Self::DEFAULT_WIDTH,
            align: Align::default(),
            left: None,
            top: None,
        }
    }
}

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Error taxonomy a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// A malformed block that was skipped.
    StructuralError,
    /// The slide is present but must not be rendered.
    ValidationError,
    /// The slide renders, but probably not as intended.
    ValidationWarning,
}

/// Stable, machine-readable kind of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Text outside of any `Slide N` block.
    OrphanContent,
    /// A `Slide` marker without a usable number.
    MalformedMarker,
    /// Slide number repeats or goes backwards.
    SlideNumbering,
    MissingTitle,
    NoContent,
    TitleTooLong,
    /// Title given more than once; the last one wins.
    TitleRedefined,
    /// Region text exceeds the layout's length budget.
    RegionTooLong,
    TooManyQuestions,
    /// Region populated but not shown by the chosen layout.
    UnusedRegion,
    UnknownTemplate,
    /// `Template: reading` overridden by four-box regions.
    TemplateConflict,
    /// Bad `Image:` parameter.
    ImageParameter,
    /// Text before any section keyword in a slide block.
    StrayLine,
}

impl DiagnosticCode {
    /// Taxonomy bucket for this code.
    pub fn category(&self) -> Category {
        match self {
            DiagnosticCode::OrphanContent | DiagnosticCode::MalformedMarker => {
                Category::StructuralError
            }
            DiagnosticCode::SlideNumbering
            | DiagnosticCode::MissingTitle
            | DiagnosticCode::NoContent => Category::ValidationError,
            _ => Category::ValidationWarning,
        }
    }

    /// Severity implied by the taxonomy.
    pub fn severity(&self) -> Severity {
        match self.category() {
            Category::StructuralError | Category::ValidationError => Severity::Error,
            Category::ValidationWarning => Severity::Warning,
        }
    }
}

/// A validation or parse finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: DiagnosticCode,
    pub slide_number: Option<u32>,
    /// 1-based source line, when the finding points at a specific line.
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic; severity follows from the code.
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            slide_number: None,
            line: None,
            message: message.into(),
        }
    }

    /// Attach the slide the finding belongs to.
    pub fn for_slide(mut self, number: u32) -> Self {
        self.slide_number = Some(number);
        self
    }

    /// Attach the source line the finding points at.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}", level)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        if let Some(number) = self.slide_number {
            write!(f, ": Slide {}", number)?;
        }
        write!(f, ": {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        assert_eq!(Layout::Single.regions(), &[RegionKind::Content]);
        assert!(Layout::Stacked.displays(RegionKind::LeftBottom));
        assert!(!Layout::Stacked.displays(RegionKind::RightTop));
        assert_eq!(Layout::FourBox.regions().len(), 4);
    }

    #[test]
    fn test_style_tag_names() {
        for tag in StyleTag::ALL {
            assert_eq!(StyleTag::from_name(tag.name()), Some(tag));
        }
        assert_eq!(StyleTag::from_name("Vocabulary"), None);
        assert_eq!(StyleTag::from_name("topic"), None);
    }

    #[test]
    fn test_step_block_is_step() {
        let block = ContentBlock::new("First", Some(StyleTag::Step), 22);
        assert!(block.is_step);
        assert!(!ContentBlock::new("First", None, 22).is_step);
    }

    #[test]
    fn test_block_to_markup() {
        let block = ContentBlock::new("x² ≥ π", Some(StyleTag::Emphasis), 22);
        assert_eq!(block.to_markup(), "[emphasis] x^2 >= pi");

        let item = ContentBlock::new("milk", None, 22).with_bullet();
        assert_eq!(item.to_markup(), "- milk");
    }

    #[test]
    fn test_diagnostic_severity_follows_code() {
        let d = Diagnostic::new(DiagnosticCode::MissingTitle, "Missing title").for_slide(3);
        assert!(d.is_error());
        assert_eq!(d.code.category(), Category::ValidationError);
        assert_eq!(d.to_string(), "error: Slide 3: Missing title");

        let w = Diagnostic::new(DiagnosticCode::TitleTooLong, "Title is long").at_line(7);
        assert_eq!(w.severity, Severity::Warning);
        assert_eq!(w.to_string(), "warning (line 7): Title is long");
    }

    #[test]
    fn test_align_parse() {
        assert_eq!(Align::parse("CENTER"), Some(Align::Center));
        assert_eq!(Align::parse("right"), Some(Align::Right));
        assert_eq!(Align::parse("middle"), None);
    }

    #[test]
    fn test_region_serializes_as_map_key() {
        let mut slide = Slide::new(1, 1);
        slide
            .regions
            .insert(RegionKind::LeftTop, vec![ContentBlock::new("a", None, 22)]);
        let json = serde_json::to_string(&slide).unwrap();
        assert!(json.contains("\"LeftTop\""));
    }
}
