//! Assembles slides from raw blocks.
//!
//! Each block is handled on its own: a block that cannot become a slide is
//! skipped with a structural diagnostic and the next block is built as usual.

use std::collections::BTreeMap;

use crate::classify::{classify, SectionKind};
use crate::font::font_size_for;
use crate::image::parse_image;
use crate::layout::{resolve_layout_with_shape, split_questions, StyledLine};
use crate::list::{is_list, strip_marker};
use crate::style::resolve_style;
use crate::symbols::substitute;
use crate::template::Template;
use crate::tokenize::{Marker, RawBlock};
use crate::{ContentBlock, Diagnostic, DiagnosticCode, Layout, RegionKind, Slide};

/// What building one block produced.
#[derive(Debug, Clone, Default)]
pub struct BlockOutcome {
    /// The slide, unless the block was structurally broken.
    pub slide: Option<Slide>,
    pub diagnostics: Vec<Diagnostic>,
}

/// A region line after style and symbol resolution.
#[derive(Debug, Clone)]
struct RegionLine {
    styled: StyledLine,
    /// Put there by a template rather than written by the author.
    seeded: bool,
}

fn resolve_line(markup: &str, seeded: bool) -> RegionLine {
    let styled = resolve_style(markup);
    RegionLine {
        styled: StyledLine {
            text: substitute(styled.text),
            tag: styled.tag,
        },
        seeded,
    }
}

fn plain_block(line: &StyledLine) -> ContentBlock {
    ContentBlock::new(line.text.clone(), line.tag, font_size_for(&line.text))
}

/// Build the slide for one raw block.
pub fn build_block(block: &RawBlock<'_>) -> BlockOutcome {
    match &block.marker {
        Some(Marker::Numbered(number)) => build_slide(*number, block),
        Some(Marker::Malformed(token)) => {
            let message = if token.is_empty() {
                "Slide marker has no number; block skipped".to_string()
            } else {
                format!("Slide marker '{}' is not a number; block skipped", token)
            };
            log::warn!("line {}: {}", block.line, message);
            BlockOutcome {
                slide: None,
                diagnostics: vec![
                    Diagnostic::new(DiagnosticCode::MalformedMarker, message).at_line(block.line)
                ],
            }
        }
        None => {
            let message = format!(
                "{} line(s) outside of any 'Slide N' block; skipped",
                block.lines.len()
            );
            log::warn!("line {}: {}", block.line, message);
            BlockOutcome {
                slide: None,
                diagnostics: vec![
                    Diagnostic::new(DiagnosticCode::OrphanContent, message).at_line(block.line)
                ],
            }
        }
    }
}

fn build_slide(number: u32, block: &RawBlock<'_>) -> BlockOutcome {
    let classification = classify(&block.lines);
    let mut slide = Slide::new(number, block.line);
    let mut diagnostics = Vec::new();

    for stray in &classification.stray {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticCode::StrayLine,
                format!("Line is not under any section and was ignored: '{}'", stray.text.trim()),
            )
            .for_slide(number)
            .at_line(stray.number),
        );
    }

    let mut title: Option<String> = None;
    let mut notes: Vec<&str> = Vec::new();
    let mut template: Option<Template> = None;
    let mut explicit: BTreeMap<RegionKind, Vec<&str>> = BTreeMap::new();

    for line in &classification.lines {
        match line.kind {
            SectionKind::Title if line.continuation => {
                if let Some(title) = title.as_mut() {
                    if !title.is_empty() {
                        title.push(' ');
                    }
                    title.push_str(line.text);
                }
            }
            SectionKind::Title => {
                if title.is_some() {
                    diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCode::TitleRedefined,
                            "Title given more than once; using the last one",
                        )
                        .for_slide(number)
                        .at_line(line.line),
                    );
                }
                title = Some(line.text.to_string());
            }
            SectionKind::Notes => {
                if !line.text.is_empty() {
                    notes.push(line.text);
                }
            }
            SectionKind::Image => {
                let parsed = parse_image(line.text);
                for problem in parsed.problems {
                    diagnostics.push(
                        Diagnostic::new(DiagnosticCode::ImageParameter, problem)
                            .for_slide(number)
                            .at_line(line.line),
                    );
                }
                slide.images.extend(parsed.image);
            }
            SectionKind::Template => match Template::from_name(line.text) {
                Some(t) => template = Some(t),
                None => diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::UnknownTemplate,
                        format!("Unknown template '{}' ignored", line.text),
                    )
                    .for_slide(number)
                    .at_line(line.line),
                ),
            },
            SectionKind::Region(kind) => explicit.entry(kind).or_default().push(line.text),
        }
    }

    let mut regions: BTreeMap<RegionKind, Vec<RegionLine>> = BTreeMap::new();
    for (kind, markup) in explicit {
        let lines: Vec<RegionLine> = markup
            .iter()
            .map(|m| resolve_line(m, false))
            .filter(|l| !l.styled.text.is_empty())
            .collect();
        if !lines.is_empty() {
            regions.insert(kind, lines);
        }
    }

    if let Some(template) = template {
        // A reading passage may be written as plain Content.
        if template == Template::Reading && !regions.contains_key(&RegionKind::LeftTop) {
            if let Some(passage) = regions.remove(&RegionKind::Content) {
                regions.insert(RegionKind::LeftTop, passage);
            }
        }

        // Headers go above the author's lines, and only in regions they filled.
        for (kind, lines) in regions.iter_mut() {
            let mut seeded: Vec<RegionLine> = template
                .seeds_for(*kind)
                .map(|markup| resolve_line(markup, true))
                .collect();
            seeded.append(lines);
            *lines = seeded;
        }
    }

    slide.layout =
        resolve_layout_with_shape(regions.keys().copied(), template.map(|t| t.shape()));
    log::debug!(
        "Slide {}: layout {} from {:?}",
        number,
        slide.layout,
        regions.keys().collect::<Vec<_>>()
    );

    for (kind, lines) in regions {
        let blocks = if slide.layout == Layout::Stacked && kind == RegionKind::LeftBottom {
            question_blocks(&lines)
        } else {
            region_blocks(&lines)
        };
        if !blocks.is_empty() {
            slide.regions.insert(kind, blocks);
        }
    }

    slide.title = title.map(|t| substitute(t.trim())).unwrap_or_default();
    slide.template = template.map(|t| t.name().to_string());
    if !notes.is_empty() {
        slide.notes = Some(notes.join("\n"));
    }

    BlockOutcome {
        slide: Some(slide),
        diagnostics,
    }
}

/// Blocks for an ordinary region.
///
/// When at least half of the author's lines carry a list marker, every
/// author line becomes a bullet with its marker removed. Template headers
/// are never bullets.
fn region_blocks(lines: &[RegionLine]) -> Vec<ContentBlock> {
    let as_list = is_list(
        lines
            .iter()
            .filter(|l| !l.seeded)
            .map(|l| l.styled.text.as_str()),
    );

    lines
        .iter()
        .filter_map(|l| {
            if !as_list || l.seeded {
                return Some(plain_block(&l.styled));
            }
            let text = strip_marker(&l.styled.text);
            if text.is_empty() {
                return None;
            }
            Some(ContentBlock::new(text, l.styled.tag, font_size_for(text)).with_bullet())
        })
        .collect()
}

/// Blocks for the questions half of a stacked slide.
///
/// Template seeds stay as headers. The author's lines are split into one
/// block per numbered question when any of them opens with a numeral; every
/// split block takes its font size from the unsplit text.
fn question_blocks(lines: &[RegionLine]) -> Vec<ContentBlock> {
    let mut blocks: Vec<ContentBlock> = lines
        .iter()
        .filter(|l| l.seeded)
        .map(|l| plain_block(&l.styled))
        .collect();

    let written: Vec<StyledLine> = lines
        .iter()
        .filter(|l| !l.seeded)
        .map(|l| l.styled.clone())
        .collect();

    match split_questions(&written) {
        Some(items) => {
            let joined: Vec<&str> = written.iter().map(|l| l.text.as_str()).collect();
            let font_size = font_size_for(&joined.join(" "));
            blocks.extend(items.into_iter().map(|item| {
                let block = ContentBlock::new(item.text, item.tag, font_size);
                match item.number {
                    Some(n) => block.with_number(n),
                    None => block,
                }
            }));
        }
        None => blocks.extend(written.iter().map(plain_block)),
    }

    blocks
}
