//! `EditorConfig` class for JavaScript.
//!
//! Mirrors the Rust builder: every `with*` method returns a new object and
//! leaves the receiver as it was.

use ckeditor_browser::{ConfigError, EditorConfig};
use js_sys::{Array, Object};
use wasm_bindgen::JsCast;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use crate::js_error;

/// Plain-object form accepted by `EditorConfig.fromObject`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfigInit {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub plugins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub remove_plugins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[tsify(optional)]
    pub toolbar: Option<Vec<String>>,
    /// Options without a dedicated field.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    #[tsify(optional, type = "Record<string, unknown>")]
    pub custom: Map<String, Value>,
}

impl From<EditorConfigInit> for EditorConfig {
    fn from(init: EditorConfigInit) -> Self {
        let mut config = EditorConfig::new();
        if let Some(code) = init.language {
            config = config.with_language(code);
        }
        if let Some(names) = init.plugins {
            config = config.with_plugins(names);
        }
        if let Some(names) = init.remove_plugins {
            config = config.with_plugins_removed(names);
        }
        if let Some(names) = init.toolbar {
            config = config.with_toolbar(names);
        }
        init.custom
            .into_iter()
            .fold(config, |config, (name, value)| config.with_custom(name, value))
    }
}

/// Immutable editor configuration.
#[wasm_bindgen(js_name = EditorConfig)]
#[derive(Debug, Clone, Default)]
pub struct JsEditorConfig {
    inner: EditorConfig,
}

#[wasm_bindgen(js_class = EditorConfig)]
impl JsEditorConfig {
    /// Create an empty config.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from a plain object.
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(init: EditorConfigInit) -> JsEditorConfig {
        EditorConfig::from(init).into()
    }

    /// Parse an encoded `config` attribute value.
    #[wasm_bindgen]
    pub fn decode(text: &str) -> Result<JsEditorConfig, JsError> {
        EditorConfig::decode(text).map(Into::into).map_err(js_error)
    }

    #[wasm_bindgen(js_name = withLanguage)]
    pub fn with_language(&self, code: &str) -> JsEditorConfig {
        self.inner.clone().with_language(code).into()
    }

    #[wasm_bindgen(js_name = withPlugins)]
    pub fn with_plugins(&self, names: Vec<String>) -> JsEditorConfig {
        self.inner.clone().with_plugins(names).into()
    }

    #[wasm_bindgen(js_name = withPluginsRemoved)]
    pub fn with_plugins_removed(&self, names: Vec<String>) -> JsEditorConfig {
        self.inner.clone().with_plugins_removed(names).into()
    }

    #[wasm_bindgen(js_name = withToolbar)]
    pub fn with_toolbar(&self, names: Vec<String>) -> JsEditorConfig {
        self.inner.clone().with_toolbar(names).into()
    }

    /// Set an option without a dedicated method.
    ///
    /// `value` must be plain JSON data: `null`, booleans, finite numbers,
    /// strings, arrays and plain objects. Anything else (`undefined`,
    /// functions, symbols, `Date`, `Map`, class instances) throws an error
    /// naming the option instead of being coerced the way `JSON.stringify`
    /// would.
    #[wasm_bindgen(js_name = withCustom)]
    pub fn with_custom(&self, name: &str, value: JsValue) -> Result<JsEditorConfig, JsError> {
        let not_json = |reason: String| {
            js_error(ConfigError::Serialization {
                key: name.to_owned(),
                source: serde_json::Error::custom(reason),
            })
        };
        check_plain_json(&value).map_err(|what| not_json(format!("{what} has no JSON form")))?;
        let value: Value =
            serde_wasm_bindgen::from_value(value).map_err(|e| not_json(e.to_string()))?;
        Ok(self.inner.clone().with_custom(name, value).into())
    }

    /// Encode as the compact JSON text for the element's `config` attribute.
    #[wasm_bindgen]
    pub fn encode(&self) -> Result<String, JsError> {
        self.inner.encode().map_err(js_error)
    }

    /// The config as a plain JS object.
    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsError> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        self.inner.serialize(&serializer).map_err(js_error)
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[wasm_bindgen(getter)]
    pub fn language(&self) -> Option<String> {
        self.inner.language().map(str::to_owned)
    }
}

impl JsEditorConfig {
    pub fn inner(&self) -> &EditorConfig {
        &self.inner
    }

    pub fn into_inner(self) -> EditorConfig {
        self.inner
    }
}

/// Walk `value` and report the first part that is not plain JSON data.
fn check_plain_json(value: &JsValue) -> Result<(), &'static str> {
    if value.is_undefined() {
        return Err("undefined");
    }
    if value.is_null() || value.as_bool().is_some() || value.as_string().is_some() {
        return Ok(());
    }
    if let Some(n) = value.as_f64() {
        return if n.is_finite() {
            Ok(())
        } else {
            Err("a non-finite number")
        };
    }
    if value.is_function() {
        return Err("a function");
    }
    if !value.is_object() {
        return Err("a symbol or bigint");
    }
    if Array::is_array(value) {
        return Array::from(value)
            .iter()
            .try_for_each(|item| check_plain_json(&item));
    }

    let proto = Object::get_prototype_of(value);
    let object_proto = Object::get_prototype_of(&Object::new());
    if !proto.is_null() && JsValue::from(proto) != JsValue::from(object_proto) {
        return Err("a non-plain object");
    }
    Object::values(value.unchecked_ref::<Object>())
        .iter()
        .try_for_each(|item| check_plain_json(&item))
}

impl From<EditorConfig> for JsEditorConfig {
    fn from(inner: EditorConfig) -> Self {
        Self { inner }
    }
}
