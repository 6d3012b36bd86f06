//! WASM browser tests for ckeditor-js.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

use ckeditor_js::{EditorConfigInit, JsEditorConfig, is_content_empty, trim_content};

wasm_bindgen_test_configure!(run_in_browser);

fn parse(json: &str) -> JsValue {
    js_sys::JSON::parse(json).unwrap()
}

fn error_message(result: Result<JsEditorConfig, wasm_bindgen::JsError>) -> String {
    let err = JsValue::from(result.unwrap_err());
    String::from(err.dyn_into::<js_sys::Error>().unwrap().message())
}

// === withCustom ===

#[wasm_bindgen_test]
fn test_with_custom_plain_json() {
    let config = JsEditorConfig::new()
        .with_custom("link", parse(r#"{"addTargetToExternalLinks":true,"rel":null}"#))
        .unwrap()
        .with_custom("placeholder", JsValue::from_str("Type here"))
        .unwrap();
    assert_eq!(
        config.encode().unwrap(),
        r#"{"link":{"addTargetToExternalLinks":true,"rel":null},"placeholder":"Type here"}"#
    );
}

#[wasm_bindgen_test]
fn test_with_custom_rejects_function() {
    let func = js_sys::Function::new_no_args("return 1");
    let message = error_message(JsEditorConfig::new().with_custom("x", func.into()));
    assert!(message.contains("`x`"), "{message}");
}

#[wasm_bindgen_test]
fn test_with_custom_rejects_undefined() {
    let message = error_message(JsEditorConfig::new().with_custom("autosave", JsValue::UNDEFINED));
    assert!(message.contains("`autosave`"), "{message}");
}

#[wasm_bindgen_test]
fn test_with_custom_rejects_non_plain_objects() {
    let date = js_sys::Date::new_0();
    let message = error_message(JsEditorConfig::new().with_custom("d", date.into()));
    assert!(message.contains("`d`"), "{message}");

    let map = js_sys::Map::new();
    assert!(JsEditorConfig::new().with_custom("m", map.into()).is_err());
}

#[wasm_bindgen_test]
fn test_with_custom_rejects_nested_non_json() {
    let nested = parse(r#"{"outer":[{"inner":1}]}"#);
    let inner = js_sys::Reflect::get(&nested, &JsValue::from_str("outer")).unwrap();
    let first = js_sys::Reflect::get(&inner, &JsValue::from_f64(0.0)).unwrap();
    js_sys::Reflect::set(
        &first,
        &JsValue::from_str("inner"),
        &js_sys::Function::new_no_args("return 1"),
    )
    .unwrap();

    assert!(JsEditorConfig::new().with_custom("deep", nested).is_err());
    assert!(
        JsEditorConfig::new()
            .with_custom("nan", JsValue::from_f64(f64::NAN))
            .is_err()
    );
}

// === Builder semantics ===

#[wasm_bindgen_test]
fn test_builder_leaves_receiver_untouched() {
    let base = JsEditorConfig::new().with_language("en");
    let derived = base
        .with_language("nl")
        .with_plugins(vec!["Table".to_string()]);

    assert_eq!(base.language().as_deref(), Some("en"));
    assert_eq!(base.encode().unwrap(), r#"{"language":"en"}"#);
    assert_eq!(derived.language().as_deref(), Some("nl"));
    assert!(JsEditorConfig::new().is_empty());
}

#[wasm_bindgen_test]
fn test_from_object_matches_builder_chain() {
    let mut custom = serde_json::Map::new();
    custom.insert("mediaEmbed".into(), serde_json::json!({ "previewsInData": true }));
    let init = EditorConfigInit {
        language: Some("fr".into()),
        plugins: Some(vec!["Bold".into(), "Italic".into()]),
        remove_plugins: Some(vec!["Heading".into()]),
        toolbar: Some(vec!["bold".into(), "italic".into()]),
        custom,
    };

    let chained = JsEditorConfig::new()
        .with_language("fr")
        .with_plugins(vec!["Bold".into(), "Italic".into()])
        .with_plugins_removed(vec!["Heading".into()])
        .with_toolbar(vec!["bold".into(), "italic".into()])
        .with_custom("mediaEmbed", parse(r#"{"previewsInData":true}"#))
        .unwrap();

    assert_eq!(
        JsEditorConfig::from_object(init).encode().unwrap(),
        chained.encode().unwrap()
    );
}

#[wasm_bindgen_test]
fn test_decode_then_encode() {
    let text = r#"{"toolbar":["undo","redo"],"language":"de"}"#;
    let config = JsEditorConfig::decode(text).unwrap();
    assert_eq!(config.encode().unwrap(), text);
    assert!(JsEditorConfig::decode("[]").is_err());
}

// === Content helpers ===

#[wasm_bindgen_test]
fn test_content_helpers() {
    assert!(is_content_empty("  <P>&NBSP;</P>  "));
    assert!(!is_content_empty("<p>Hello</p>"));
    assert_eq!(trim_content("  <p>Hello</p>  "), "<p>Hello</p>");
    assert_eq!(trim_content("<p>&nbsp;</p>"), "");
}
