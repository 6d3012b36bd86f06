//! Wrapper around a DOM `<x-ckeditor>` element.

use ckeditor_core::{
    ATTR_CONFIG, ATTR_CONTENT, ATTR_EDITOR, EditorConfig, EditorProps, TAG_NAME,
};
use web_sys::{Document, Element};

use crate::error::BrowserError;
use crate::events::ChangeSubscription;

/// An `<x-ckeditor>` element with typed attribute access.
#[derive(Debug, Clone)]
pub struct CkEditorElement {
    element: Element,
}

impl CkEditorElement {
    /// Create a detached element in `document`.
    pub fn create(document: &Document) -> Result<Self, BrowserError> {
        let element = document
            .create_element(TAG_NAME)
            .map_err(BrowserError::dom)?;
        Ok(Self { element })
    }

    /// Create a detached element in the current window's document.
    pub fn create_in_window() -> Result<Self, BrowserError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BrowserError::NoDocument)?;
        Self::create(&document)
    }

    /// Wrap an existing element, checking its tag.
    pub fn from_element(element: Element) -> Result<Self, BrowserError> {
        // HTML documents report tag names upper-cased.
        let tag = element.tag_name();
        if !tag.eq_ignore_ascii_case(TAG_NAME) {
            return Err(BrowserError::WrongTag(tag.to_ascii_lowercase()));
        }
        Ok(Self { element })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn into_element(self) -> Element {
        self.element
    }

    /// Select which registered editor build the element instantiates.
    pub fn set_editor(&self, editor: &str) -> Result<(), BrowserError> {
        self.set_attr(ATTR_EDITOR, editor)
    }

    pub fn editor(&self) -> Option<String> {
        self.element.get_attribute(ATTR_EDITOR)
    }

    /// Force the editor content.
    pub fn set_content(&self, html: &str) -> Result<(), BrowserError> {
        self.set_attr(ATTR_CONTENT, html)
    }

    pub fn content(&self) -> Option<String> {
        self.element.get_attribute(ATTR_CONTENT)
    }

    /// Encode and apply a config. The element reloads the editor whenever
    /// this attribute actually changes.
    pub fn set_config(&self, config: &EditorConfig) -> Result<(), BrowserError> {
        let encoded = config.encode()?;
        self.set_attr(ATTR_CONFIG, &encoded)
    }

    /// Decode the current `config` attribute, if there is one.
    pub fn config(&self) -> Result<Option<EditorConfig>, BrowserError> {
        let Some(text) = self.element.get_attribute(ATTR_CONFIG) else {
            return Ok(None);
        };
        Ok(Some(EditorConfig::decode(&text)?))
    }

    /// Apply every prop that is set. Unset props leave their attribute alone.
    pub fn apply(&self, props: &EditorProps) -> Result<(), BrowserError> {
        for (name, value) in props.attributes()? {
            self.set_attr(name, &value)?;
        }
        Ok(())
    }

    /// Call `callback` with the editor HTML after every change.
    pub fn on_change<F>(&self, mut callback: F) -> ChangeSubscription
    where
        F: FnMut(String) + 'static,
    {
        ChangeSubscription::new(&self.element, move |payload| {
            callback(payload.into_content())
        })
    }

    /// Append the element to `container`.
    pub fn mount(&self, container: &Element) -> Result<(), BrowserError> {
        container
            .append_child(&self.element)
            .map_err(BrowserError::dom)?;
        tracing::debug!(editor = ?self.editor(), "mounted x-ckeditor");
        Ok(())
    }

    /// Detach the element from wherever it is mounted.
    pub fn unmount(&self) {
        self.element.remove();
    }

    pub fn is_mounted(&self) -> bool {
        self.element.is_connected()
    }

    /// Write an attribute, skipping the write when the value is unchanged so
    /// the element does not reload for nothing.
    fn set_attr(&self, name: &str, value: &str) -> Result<(), BrowserError> {
        if self.element.get_attribute(name).as_deref() == Some(value) {
            return Ok(());
        }
        tracing::debug!(attribute = name, len = value.len(), "setting x-ckeditor attribute");
        self.element
            .set_attribute(name, value)
            .map_err(BrowserError::dom)
    }
}
