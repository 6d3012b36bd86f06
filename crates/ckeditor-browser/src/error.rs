//! Errors from the DOM layer.

use ckeditor_core::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum BrowserError {
    /// No `window` or `document` in this environment.
    #[error("no document available")]
    #[diagnostic(code(ckeditor::browser::no_document))]
    NoDocument,

    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    #[diagnostic(code(ckeditor::browser::dom))]
    Dom(String),

    /// An element passed in is not an `x-ckeditor`.
    #[error("expected an <x-ckeditor> element, got <{0}>")]
    #[diagnostic(code(ckeditor::browser::wrong_tag))]
    WrongTag(String),

    /// An event or attribute payload did not have the expected shape.
    #[error("failed to decode editor payload: {0}")]
    #[diagnostic(code(ckeditor::browser::decode))]
    Decode(String),

    #[error(transparent)]
    #[diagnostic_source]
    Config(#[from] ConfigError),
}

impl BrowserError {
    pub(crate) fn dom(err: wasm_bindgen::JsValue) -> Self {
        BrowserError::Dom(format!("{:?}", err))
    }
}
