//! End-to-end compile scenarios.

use slidemark_core::{
    Compiler, DiagnosticCode, Layout, RegionKind, Severity, StyleTag, SAMPLE_LESSON,
};

fn compile(text: &str) -> slidemark_core::Compilation {
    Compiler::new().compile(text).expect("input should compile")
}

#[test]
fn test_reading_passage_with_two_questions() {
    let compilation = compile(
        "Slide 1\nTitle: The Storm\nLeftTop: The storm reached the coast at dawn.\nLeftBottom: 1. Q1? 2. Q2?\n",
    );
    let slide = &compilation.document.slides[0];

    assert_eq!(slide.layout, Layout::Stacked);
    let questions = slide.blocks(RegionKind::LeftBottom);
    assert_eq!(questions.len(), 2);
    assert!(questions.iter().all(|q| q.is_question()));
    assert_eq!(questions[0].text, "Q1?");
    assert_eq!(questions[1].text, "Q2?");
    assert!(compilation.diagnostics.is_empty());
}

#[test]
fn test_missing_title_reports_error_but_keeps_slide() {
    let compilation = compile("Slide 1\nContent: no title here\n---\nSlide 2\nTitle: Fine\nContent: ok");

    assert_eq!(compilation.slide_count(), 2);
    let errors: Vec<_> = compilation.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].severity, Severity::Error);
    assert_eq!(errors[0].code, DiagnosticCode::MissingTitle);
    assert_eq!(errors[0].slide_number, Some(1));
    assert!(!compilation.is_renderable());
}

#[test]
fn test_vocabulary_tag() {
    let compilation = compile("Slide 1\nTitle: Words\nContent: [vocabulary] resilience");
    let block = &compilation.document.slides[0].blocks(RegionKind::Content)[0];

    assert_eq!(block.style, Some(StyleTag::Vocabulary));
    assert_eq!(block.text, "resilience");
    assert_eq!(block.font_size, 22);
}

#[test]
fn test_vocabulary_template_with_explicit_columns() {
    let compilation = compile(
        "Slide 3\nTitle: Vocabulary\nTemplate: vocabulary\nLeft: milestone\nRight: definition",
    );
    let slide = &compilation.document.slides[0];

    assert_eq!(slide.layout, Layout::TwoColumn);
    let left: Vec<&str> = slide
        .blocks(RegionKind::Left)
        .iter()
        .map(|b| b.text.as_str())
        .collect();
    let right: Vec<&str> = slide
        .blocks(RegionKind::Right)
        .iter()
        .map(|b| b.text.as_str())
        .collect();
    assert_eq!(left, vec!["Word", "milestone"]);
    assert_eq!(right, vec!["Definition", "definition"]);
}

#[test]
fn test_consecutive_markers_close_previous_slide() {
    let compilation = compile("Slide 1\nTitle: First\nContent: a\nSlide 2\nTitle: Second\nContent: b");

    assert_eq!(compilation.slide_count(), 2);
    let first = &compilation.document.slides[0];
    assert_eq!(first.title, "First");
    assert_eq!(first.blocks(RegionKind::Content).len(), 1);
    assert_eq!(compilation.document.slides[1].title, "Second");
}

#[test]
fn test_unknown_tag_stays_literal() {
    let compilation = compile("Slide 1\nTitle: T\nContent: [topic] remote work");
    let block = &compilation.document.slides[0].blocks(RegionKind::Content)[0];
    assert_eq!(block.text, "[topic] remote work");
    assert_eq!(block.style, None);
    assert!(compilation.diagnostics.is_empty());
}

#[test]
fn test_reading_template_with_four_box_regions_warns() {
    let compilation = compile(
        "Slide 1\nTitle: Mixed\nTemplate: reading\nLeftTop: a\nLeftBottom: b\nRightTop: c\nRightBottom: d",
    );
    let slide = &compilation.document.slides[0];

    assert_eq!(slide.layout, Layout::FourBox);
    let codes: Vec<DiagnosticCode> = compilation.warnings().map(|d| d.code).collect();
    assert_eq!(codes, vec![DiagnosticCode::TemplateConflict]);
    assert!(compilation.is_renderable());
}

#[test]
fn test_reading_template_with_only_questions_stays_stacked() {
    let compilation = compile("Slide 1\nTitle: Story\nTemplate: reading\nLeftBottom: 1. Who? 2. Where?");
    let slide = &compilation.document.slides[0];

    assert_eq!(slide.layout, Layout::Stacked);
    let questions: Vec<&str> = slide
        .blocks(RegionKind::LeftBottom)
        .iter()
        .filter(|b| b.is_question())
        .map(|b| b.text.as_str())
        .collect();
    assert_eq!(questions, vec!["Who?", "Where?"]);
    assert!(compilation.diagnostics.is_empty());
}

#[test]
fn test_reading_template_with_content_passage() {
    let compilation = compile("Slide 1\nTitle: Story\nTemplate: reading\nContent: The storm came.");
    let slide = &compilation.document.slides[0];

    assert_eq!(slide.layout, Layout::Stacked);
    assert_eq!(slide.blocks(RegionKind::LeftTop)[0].text, "The storm came.");
    assert!(compilation.diagnostics.is_empty());
}

#[test]
fn test_template_alone_is_not_content() {
    let compilation = compile("Slide 1\nTitle: T\nTemplate: vocabulary");
    let codes: Vec<DiagnosticCode> = compilation.errors().map(|d| d.code).collect();
    assert_eq!(codes, vec![DiagnosticCode::NoContent]);
}

#[test]
fn test_bulleted_content() {
    let compilation = compile("Slide 1\nTitle: Agenda\nContent: • greetings\nContent: • phrases");
    let slide = &compilation.document.slides[0];
    assert!(slide.is_list(RegionKind::Content));
    assert_eq!(slide.blocks(RegionKind::Content)[1].text, "phrases");
}

#[test]
fn test_non_contiguous_numbers_are_fine() {
    let compilation = compile("Slide 2\nTitle: A\nContent: a\nSlide 5\nTitle: B\nContent: b");
    let numbers: Vec<u32> = compilation.document.slides.iter().map(|s| s.number).collect();
    assert_eq!(numbers, vec![2, 5]);
    assert!(compilation.diagnostics.is_empty());
}

#[test]
fn test_duplicate_numbers_are_errors() {
    let compilation = compile("Slide 1\nTitle: A\nContent: a\nSlide 1\nTitle: B\nContent: b");
    assert_eq!(compilation.slide_count(), 2);
    let codes: Vec<DiagnosticCode> = compilation.errors().map(|d| d.code).collect();
    assert_eq!(codes, vec![DiagnosticCode::SlideNumbering]);
}

#[test]
fn test_every_problem_reported_in_one_run() {
    let long_title = "A title that keeps going well past the sixty character guideline";
    let text = format!(
        "Slide 1\nContent: untitled\nSlide 2\nTitle: {}\nContent: x\nSlide 3\nTitle: Empty\n",
        long_title
    );
    let compilation = compile(&text);

    let codes: Vec<DiagnosticCode> = compilation.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::MissingTitle,
            DiagnosticCode::TitleTooLong,
            DiagnosticCode::NoContent,
        ]
    );
}

#[test]
fn test_step_blocks_for_animation() {
    let compilation = compile(
        "Slide 1\nTitle: Steps\nContent: [step] First, identify the problem\nContent: [step] Then, analyze solutions",
    );
    let blocks = compilation.document.slides[0].blocks(RegionKind::Content);
    assert!(blocks.iter().all(|b| b.is_step && b.style == Some(StyleTag::Step)));
}

#[test]
fn test_sample_lesson_is_clean() {
    let compilation = compile(SAMPLE_LESSON);
    assert_eq!(compilation.slide_count(), 6);
    assert!(compilation.diagnostics.is_empty());
}
