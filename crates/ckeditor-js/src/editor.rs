//! CkEditor - handle owning one `<x-ckeditor>` element for JavaScript.

use ckeditor_browser::{ChangeSubscription, CkEditorElement};
use wasm_bindgen::prelude::*;

use crate::config::JsEditorConfig;
use crate::js_error;

/// An `<x-ckeditor>` element plus its change listener.
#[wasm_bindgen(js_name = CkEditor)]
pub struct JsCkEditor {
    element: CkEditorElement,
    subscription: Option<ChangeSubscription>,
}

#[wasm_bindgen(js_class = CkEditor)]
impl JsCkEditor {
    /// Create a detached element for the named editor build.
    #[wasm_bindgen(constructor)]
    pub fn new(editor: &str) -> Result<JsCkEditor, JsError> {
        let element = CkEditorElement::create_in_window().map_err(js_error)?;
        element.set_editor(editor).map_err(js_error)?;
        Ok(Self {
            element,
            subscription: None,
        })
    }

    /// The underlying DOM element.
    #[wasm_bindgen(getter)]
    pub fn element(&self) -> web_sys::Element {
        self.element.element().clone()
    }

    #[wasm_bindgen(js_name = setContent)]
    pub fn set_content(&self, html: &str) -> Result<(), JsError> {
        self.element.set_content(html).map_err(js_error)
    }

    /// Apply a config. The editor reloads when the encoded text changes.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&self, config: &JsEditorConfig) -> Result<(), JsError> {
        self.element.set_config(config.inner()).map_err(js_error)
    }

    /// Register the change callback, replacing any previous one.
    ///
    /// The callback receives the editor HTML as a string.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: js_sys::Function) {
        self.subscription = Some(self.element.on_change(move |html| {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&html)) {
                tracing::warn!(error = ?err, "change callback threw");
            }
        }));
    }

    /// Append the element to `container`.
    #[wasm_bindgen]
    pub fn mount(&self, container: &web_sys::Element) -> Result<(), JsError> {
        self.element.mount(container).map_err(js_error)
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.element.is_mounted()
    }

    /// Detach the element and drop the change callback.
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.element.unmount();
    }
}
