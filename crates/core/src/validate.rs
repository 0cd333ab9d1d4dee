//! Document validation.
//!
//! The validator reads a finished [`Document`] and reports every problem it
//! finds. Missing titles, empty slides and broken numbering are errors; the
//! rest are warnings that still allow the document to be rendered.

use crate::template::Template;
use crate::{CompilerConfig, Diagnostic, DiagnosticCode, Document, Layout, RegionKind, Slide};

/// Most characters a region should hold in a given layout.
const REGION_BUDGETS: [(Layout, RegionKind, usize); 8] = [
    (Layout::Single, RegionKind::Content, 500),
    (Layout::TwoColumn, RegionKind::Left, 300),
    (Layout::TwoColumn, RegionKind::Right, 300),
    (Layout::FourBox, RegionKind::LeftTop, 150),
    (Layout::FourBox, RegionKind::RightTop, 150),
    (Layout::FourBox, RegionKind::LeftBottom, 150),
    (Layout::FourBox, RegionKind::RightBottom, 150),
    (Layout::Stacked, RegionKind::LeftTop, 1000),
];

/// Most questions a stacked slide should carry.
pub const MAX_QUESTIONS: usize = 5;

/// Length budget for a region in a layout, if it has one.
pub fn region_budget(layout: Layout, region: RegionKind) -> Option<usize> {
    REGION_BUDGETS
        .iter()
        .find(|(l, r, _)| *l == layout && *r == region)
        .map(|(_, _, budget)| *budget)
}

/// Checks a compiled document against content rules.
#[derive(Debug, Clone)]
pub struct Validator {
    title_warning_length: usize,
    overflow_warnings: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&CompilerConfig::default())
    }
}

impl Validator {
    /// Create a validator using the limits from `config`.
    pub fn new(config: &CompilerConfig) -> Self {
        Self {
            title_warning_length: config.title_warning_length,
            overflow_warnings: config.enable_overflow_warnings,
        }
    }

    /// Validate every slide, collecting all findings.
    pub fn validate(&self, document: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut previous: Option<u32> = None;

        for slide in &document.slides {
            if let Some(prev) = previous {
                if slide.number <= prev {
                    let message = if slide.number == prev {
                        format!("Slide number {} is used more than once", slide.number)
                    } else {
                        format!("Slide {} comes after slide {}", slide.number, prev)
                    };
                    diagnostics.push(
                        Diagnostic::new(DiagnosticCode::SlideNumbering, message)
                            .for_slide(slide.number)
                            .at_line(slide.line),
                    );
                }
            }
            previous = Some(previous.map_or(slide.number, |p| p.max(slide.number)));

            self.validate_slide(slide, &mut diagnostics);
        }

        diagnostics
    }

    fn validate_slide(&self, slide: &Slide, diagnostics: &mut Vec<Diagnostic>) {
        let number = slide.number;
        let mut report = |code: DiagnosticCode, message: String| {
            diagnostics.push(
                Diagnostic::new(code, message)
                    .for_slide(number)
                    .at_line(slide.line),
            );
        };

        let title_len = slide.title.trim().chars().count();
        if title_len == 0 {
            report(DiagnosticCode::MissingTitle, "Missing title".to_string());
        } else if title_len > self.title_warning_length {
            report(
                DiagnosticCode::TitleTooLong,
                format!(
                    "Title is {} characters (keep it under {})",
                    title_len, self.title_warning_length
                ),
            );
        }

        let populated: Vec<RegionKind> = slide.populated_regions().collect();
        if populated.is_empty() {
            report(DiagnosticCode::NoContent, "No content defined".to_string());
            return;
        }

        for region in &populated {
            if !slide.layout.displays(*region) {
                report(
                    DiagnosticCode::UnusedRegion,
                    format!(
                        "{} lines are not shown in the {} layout",
                        region, slide.layout
                    ),
                );
            }
        }

        if self.overflow_warnings {
            for region in slide.layout.regions() {
                let Some(budget) = region_budget(slide.layout, *region) else {
                    continue;
                };
                let len = slide.region_len(*region);
                if len > budget {
                    report(
                        DiagnosticCode::RegionTooLong,
                        format!(
                            "{} has {} characters; the {} layout fits about {}",
                            region, len, slide.layout, budget
                        ),
                    );
                }
            }
        }

        if slide.layout == Layout::Stacked {
            let questions = slide.question_count();
            if questions > MAX_QUESTIONS {
                report(
                    DiagnosticCode::TooManyQuestions,
                    format!(
                        "{} questions on one slide (at most {} recommended)",
                        questions, MAX_QUESTIONS
                    ),
                );
            }
        }

        let reading = slide.template.as_deref().and_then(Template::from_name) == Some(Template::Reading);
        let right_quadrants: Vec<String> = populated
            .iter()
            .filter(|r| matches!(r, RegionKind::RightTop | RegionKind::RightBottom))
            .map(|r| r.to_string())
            .collect();
        if reading && !right_quadrants.is_empty() {
            report(
                DiagnosticCode::TemplateConflict,
                format!(
                    "Reading template overridden by four-box regions ({})",
                    right_quadrants.join(", ")
                ),
            );
        }
    }
}
