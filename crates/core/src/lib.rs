//! Lesson-slide markup compiler.
//!
//! Turns line-oriented lesson text into a typed slide model plus a list of
//! diagnostics:
//!
//! ```text
//! Slide 1
//! Title: Key Vocabulary
//! Template: vocabulary
//! Left: [vocabulary] milestone
//! Right: an important stage in a project
//! ---
//! ```
//!
//! The pipeline runs tokenize, classify, template, style and symbols,
//! layout, font size, build, then validate. See [`Compiler::compile`].

pub mod builder;
pub mod classify;
pub mod compiler;
pub mod config;
pub mod error;
pub mod font;
pub mod image;
pub mod layout;
pub mod list;
pub mod sample;
pub mod style;
pub mod symbols;
pub mod template;
pub mod tokenize;
pub mod types;
pub mod validate;

pub use compiler::{Compilation, Compiler};
pub use config::{CompilerConfig, Rgb, StylePreset, Theme};
pub use error::{Error, Result};
pub use sample::SAMPLE_LESSON;
pub use template::Template;
pub use types::{
    Align, Category, ContentBlock, Diagnostic, DiagnosticCode, Document, ImageRef, Layout,
    RegionKind, Severity, Slide, StyleTag,
};
pub use validate::Validator;
