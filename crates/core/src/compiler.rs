//! The compile pipeline: text in, slide model and diagnostics out.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::builder::build_block;
use crate::tokenize::{is_comment, tokenize};
use crate::validate::Validator;
use crate::{CompilerConfig, Diagnostic, Document, Error, Result};

/// Everything one compile run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Compilation {
    pub document: Document,
    /// Structural findings from parsing, then validation findings.
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Whether the document may be handed to a renderer.
    pub fn is_renderable(&self) -> bool {
        !self.has_errors()
    }

    pub fn slide_count(&self) -> usize {
        self.document.slides.len()
    }
}

/// Compiles lesson markup into a [`Document`].
///
/// A compiler holds only its configuration, so one instance can be shared
/// across threads and used for any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Compiler {
    /// Create a compiler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compiler with the given configuration.
    pub fn with_config(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Override the input size bound.
    pub fn with_max_input_bytes(mut self, max: usize) -> Self {
        self.config.max_input_bytes = max;
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Compile raw bytes, which must be UTF-8 text.
    pub fn compile_bytes(&self, bytes: &[u8]) -> Result<Compilation> {
        self.check_size(bytes.len())?;
        let text = std::str::from_utf8(bytes)?;
        self.compile(text)
    }

    /// Compile lesson text.
    ///
    /// Fails only when the input as a whole is unusable (empty or too large).
    /// Problems inside slides are returned as diagnostics, and every
    /// well-formed slide is present in the document even when it has errors.
    pub fn compile(&self, text: &str) -> Result<Compilation> {
        self.check_size(text.len())?;

        let text = normalize_input(text);
        if text
            .lines()
            .all(|line| line.trim().is_empty() || is_comment(line))
        {
            return Err(Error::EmptyInput);
        }

        let mut document = Document::new(self.config.theme.resolved());
        let mut diagnostics = Vec::new();

        for block in tokenize(&text) {
            let outcome = build_block(&block);
            document.slides.extend(outcome.slide);
            diagnostics.extend(outcome.diagnostics);
        }

        diagnostics.extend(Validator::new(&self.config).validate(&document));

        let compilation = Compilation {
            document,
            diagnostics,
        };
        log::debug!(
            "Compiled {} slide(s): {} error(s), {} warning(s)",
            compilation.slide_count(),
            compilation.errors().count(),
            compilation.warnings().count()
        );

        Ok(compilation)
    }

    fn check_size(&self, len: usize) -> Result<()> {
        if len > self.config.max_input_bytes {
            return Err(Error::InputTooLarge {
                len,
                max: self.config.max_input_bytes,
            });
        }
        Ok(())
    }
}

/// NFC-normalize and unify line endings to `\n`.
fn normalize_input(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .nfc()
        .collect()
}
