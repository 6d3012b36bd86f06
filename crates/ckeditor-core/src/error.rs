//! Error types for building and decoding editor configuration.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building, encoding or decoding an [`EditorConfig`](crate::EditorConfig).
#[derive(Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ConfigError {
    /// A custom option value could not be represented as JSON.
    #[error("custom option `{key}` is not serializable to JSON")]
    #[diagnostic(code(ckeditor::config::serialization))]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A custom option shadows a dedicated field that is also set.
    #[error("custom option `{key}` conflicts with the dedicated `{key}` setting")]
    #[diagnostic(
        code(ckeditor::config::conflict),
        help("set the option through its builder method or through `with_custom`, not both")
    )]
    ConflictingKey { key: String },

    /// The config text was not valid JSON.
    #[error(transparent)]
    #[diagnostic(code(ckeditor::config::json))]
    Json(#[from] serde_json::Error),

    /// The config text was valid JSON but not an object.
    #[error("editor config must be a JSON object")]
    #[diagnostic(code(ckeditor::config::not_an_object))]
    NotAnObject,
}

/// Errors raised while decoding payloads emitted by the editor element.
#[derive(Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ElementError {
    /// The change event payload did not match `{ detail: string }`.
    #[error("malformed change event payload: {0}")]
    #[diagnostic(code(ckeditor::element::payload))]
    Payload(#[from] serde_json::Error),
}
