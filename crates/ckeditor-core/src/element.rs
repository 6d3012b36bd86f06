//! Attribute and event contract of the `x-ckeditor` custom element.
//!
//! The element itself ships as JavaScript; these are the names and payload
//! shapes it exposes, kept here so the browser layer and any server-side
//! renderer agree on them.

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::content::trim_content;
use crate::error::{ConfigError, ElementError};

/// Tag the element is registered under.
pub const TAG_NAME: &str = "x-ckeditor";

/// Which registered editor build to instantiate.
pub const ATTR_EDITOR: &str = "editor";

/// Initial (or forced) HTML content.
pub const ATTR_CONTENT: &str = "content";

/// Encoded [`EditorConfig`]. Changing it reloads the editor.
pub const ATTR_CONFIG: &str = "config";

/// Custom event fired whenever the editor content changes.
pub const CHANGE_EVENT: &str = "ckeditorchange";

/// `detail` payload of a [`CHANGE_EVENT`].
///
/// The element nests the content one level down, so the event's `detail`
/// is `{ "detail": "<p>...</p>" }` rather than the HTML string itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEventDetail {
    pub detail: String,
}

impl ChangeEventDetail {
    /// Decode the payload from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ElementError> {
        Ok(serde_json::from_str(text)?)
    }

    /// The raw editor HTML.
    pub fn content(&self) -> &str {
        &self.detail
    }

    pub fn into_content(self) -> String {
        self.detail
    }

    /// The editor HTML with whitespace trimmed and empty documents mapped to `""`.
    pub fn trimmed(&self) -> &str {
        trim_content(&self.detail)
    }
}

/// Declarative attribute set for one editor element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorProps {
    pub editor: Option<String>,
    pub content: Option<String>,
    pub config: Option<EditorConfig>,
}

impl EditorProps {
    /// Props for the given editor build with no content or config.
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: Some(editor.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content(self, content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_config(self, config: EditorConfig) -> Self {
        Self {
            config: Some(config),
            ..self
        }
    }

    /// Attribute name/value pairs for every prop that is set, in the order
    /// `editor`, `content`, `config`.
    pub fn attributes(&self) -> Result<Vec<(&'static str, String)>, ConfigError> {
        let mut attrs = Vec::with_capacity(3);
        if let Some(editor) = &self.editor {
            attrs.push((ATTR_EDITOR, editor.clone()));
        }
        if let Some(content) = &self.content {
            attrs.push((ATTR_CONTENT, content.clone()));
        }
        if let Some(config) = &self.config {
            attrs.push((ATTR_CONFIG, config.encode()?));
        }
        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_detail() {
        let payload = ChangeEventDetail::from_json(r#"{"detail":"<p>x</p>"}"#).unwrap();
        assert_eq!(payload.content(), "<p>x</p>");
        assert_eq!(payload.into_content(), "<p>x</p>");
    }

    #[test]
    fn rejects_bare_string_payload() {
        assert!(ChangeEventDetail::from_json(r#""<p>x</p>""#).is_err());
        assert!(ChangeEventDetail::from_json(r#"{"detail":42}"#).is_err());
        assert!(ChangeEventDetail::from_json("{}").is_err());
    }

    #[test]
    fn trimmed_detail_drops_empty_paragraph() {
        let payload = ChangeEventDetail {
            detail: " <p>&nbsp;</p> ".into(),
        };
        assert_eq!(payload.trimmed(), "");
    }

    #[test]
    fn props_attributes_in_order() {
        let props = EditorProps::new("classic")
            .with_content("<p>Hi</p>")
            .with_config(EditorConfig::new().with_language("fr"));
        let attrs = props.attributes().unwrap();
        assert_eq!(
            attrs,
            vec![
                ("editor", "classic".to_string()),
                ("content", "<p>Hi</p>".to_string()),
                ("config", r#"{"language":"fr"}"#.to_string()),
            ]
        );
    }

    #[test]
    fn unset_props_are_skipped() {
        assert!(EditorProps::default().attributes().unwrap().is_empty());
    }
}
