//! Tests that run in a JavaScript host (`wasm-pack test --node`).

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Reflect};
use slidemark_worker_wasm::{compile_lesson, sample_lesson, validate_lesson};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn test_compile_lesson_returns_plain_objects() {
    let value = compile_lesson("Slide 1\nTitle: Hi\nContent: there").unwrap();

    let slides = Array::from(&field(&field(&value, "document"), "slides"));
    assert_eq!(slides.length(), 1);
    assert_eq!(field(&slides.get(0), "title").as_string().as_deref(), Some("Hi"));
    assert_eq!(Array::from(&field(&value, "diagnostics")).length(), 0);
}

#[wasm_bindgen_test]
fn test_compile_errors_cross_as_strings() {
    let err = compile_lesson("").unwrap_err();
    assert_eq!(err.as_string().as_deref(), Some("Input is empty"));
}

#[wasm_bindgen_test]
fn test_validate_lesson_summary() {
    let value = validate_lesson("Slide 1\nContent: untitled").unwrap();

    assert_eq!(field(&value, "slide_count").as_f64(), Some(1.0));
    assert_eq!(field(&value, "renderable").as_bool(), Some(false));
    let issues = Array::from(&field(&value, "issues"));
    assert_eq!(field(&issues.get(0), "code").as_string().as_deref(), Some("MissingTitle"));
}

#[wasm_bindgen_test]
fn test_sample_lesson_validates() {
    let value = validate_lesson(&sample_lesson()).unwrap();
    assert_eq!(field(&value, "renderable").as_bool(), Some(true));
}
