//! WASM-compatible wrapper for lesson compilation.
//!
//! This crate exposes the compiler to JavaScript for use in Cloudflare
//! Workers and in-browser previews.

use serde::{Deserialize, Serialize};
use slidemark_core::{Compilation, Compiler, Diagnostic, SAMPLE_LESSON};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of checking a lesson without returning the slide model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of slides that parsed.
    pub slide_count: usize,
    /// True when no error diagnostics were produced.
    pub renderable: bool,
    /// Every diagnostic, in report order.
    pub issues: Vec<Diagnostic>,
}

/// Compile lesson markup.
///
/// # Arguments
/// * `text` - The lesson source
///
/// # Returns
/// A JavaScript object with the document and diagnostics, or throws when
/// the input is empty or too large.
#[wasm_bindgen]
pub fn compile_lesson(text: &str) -> Result<JsValue, JsValue> {
    let result = compile_lesson_impl(text).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Compile lesson markup from raw file bytes, which must be UTF-8.
#[wasm_bindgen]
pub fn compile_lesson_bytes(data: &[u8]) -> Result<JsValue, JsValue> {
    let result = Compiler::new()
        .compile_bytes(data)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn compile_lesson_impl(text: &str) -> Result<Compilation, String> {
    Compiler::new().compile(text).map_err(|e| e.to_string())
}

/// Check lesson markup and report only the findings.
#[wasm_bindgen]
pub fn validate_lesson(text: &str) -> Result<JsValue, JsValue> {
    let result = validate_lesson_impl(text).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn validate_lesson_impl(text: &str) -> Result<ValidationSummary, String> {
    let compilation = compile_lesson_impl(text)?;

    Ok(ValidationSummary {
        slide_count: compilation.slide_count(),
        renderable: compilation.is_renderable(),
        issues: compilation.diagnostics,
    })
}

/// The starter lesson shown to new authors.
#[wasm_bindgen]
pub fn sample_lesson() -> String {
    SAMPLE_LESSON.to_string()
}
