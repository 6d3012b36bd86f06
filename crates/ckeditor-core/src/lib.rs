//! ckeditor-core: configuration and content helpers for the `x-ckeditor`
//! web component, without any browser dependency.
//!
//! This crate provides:
//! - [`EditorConfig`] - immutable builder encoded into the element's `config` attribute
//! - [`is_content_empty`] / [`trim_content`] - normalizing the HTML the editor reports
//! - [`element`] - tag, attribute and event names plus the change-event payload

pub mod config;
pub mod content;
pub mod element;
pub mod error;

pub use config::{EditorConfig, LANGUAGE_KEY, PLUGINS_KEY, REMOVE_PLUGINS_KEY, TOOLBAR_KEY};
pub use content::{is_content_empty, trim_content};
pub use element::{
    ATTR_CONFIG, ATTR_CONTENT, ATTR_EDITOR, CHANGE_EVENT, ChangeEventDetail, EditorProps, TAG_NAME,
};
pub use error::{ConfigError, ElementError};
