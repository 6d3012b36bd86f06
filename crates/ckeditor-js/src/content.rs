//! Content helpers exposed to JavaScript.

use wasm_bindgen::prelude::*;

/// True if `html` is blank or the editor's empty paragraph (`<p>&nbsp;</p>`).
#[wasm_bindgen(js_name = isContentEmpty)]
pub fn is_content_empty(html: &str) -> bool {
    ckeditor_browser::is_content_empty(html)
}

/// Trim `html`, returning `""` for empty editor content.
#[wasm_bindgen(js_name = trimContent)]
pub fn trim_content(html: &str) -> String {
    ckeditor_browser::trim_content(html).to_owned()
}
