//! Immutable configuration for the `x-ckeditor` element.
//!
//! An [`EditorConfig`] is built by chaining `with_*` calls on a default value
//! and encoded into the compact JSON text the element reads from its `config`
//! attribute. Each builder call takes the config by value and hands back a new
//! one; clones are fully independent.

use std::str::FromStr;

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// JSON key for the editor locale.
pub const LANGUAGE_KEY: &str = "language";
/// JSON key for the plugin list.
pub const PLUGINS_KEY: &str = "plugins";
/// JSON key for the list of plugins to exclude.
pub const REMOVE_PLUGINS_KEY: &str = "removePlugins";
/// JSON key for the toolbar layout.
pub const TOOLBAR_KEY: &str = "toolbar";

/// Editor configuration passed to the element as its `config` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorConfig {
    language: Option<String>,
    plugins: Option<Vec<String>>,
    removed_plugins: Option<Vec<String>>,
    toolbar: Option<Vec<String>>,
    custom: Map<String, Value>,
}

impl EditorConfig {
    /// Create an empty config. Encodes as `{}`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the editor language, e.g. `"fr"`. The code is not validated.
    #[must_use]
    pub fn with_language(self, code: impl Into<String>) -> Self {
        Self {
            language: Some(code.into()),
            ..self
        }
    }

    /// Replace the plugin list.
    #[must_use]
    pub fn with_plugins<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            plugins: Some(collect_names(names)),
            ..self
        }
    }

    /// Replace the list of plugins the editor build should drop.
    #[must_use]
    pub fn with_plugins_removed<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            removed_plugins: Some(collect_names(names)),
            ..self
        }
    }

    /// Replace the toolbar layout.
    #[must_use]
    pub fn with_toolbar<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            toolbar: Some(collect_names(names)),
            ..self
        }
    }

    /// Set an option that has no dedicated builder method.
    ///
    /// `name` must be an option the editor understands. Nothing checks this;
    /// an unknown name is silently ignored by the editor.
    #[must_use]
    pub fn with_custom(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom.insert(name.into(), value.into());
        self
    }

    /// Like [`with_custom`](Self::with_custom), for any serializable value.
    ///
    /// Fails with [`ConfigError::Serialization`] naming `name` when the value
    /// has no JSON representation.
    pub fn try_with_custom<T>(
        self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self, ConfigError>
    where
        T: Serialize + ?Sized,
    {
        let key = name.into();
        match serde_json::to_value(value) {
            Ok(value) => Ok(self.with_custom(key, value)),
            Err(source) => Err(ConfigError::Serialization { key, source }),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn plugins(&self) -> Option<&[String]> {
        self.plugins.as_deref()
    }

    pub fn removed_plugins(&self) -> Option<&[String]> {
        self.removed_plugins.as_deref()
    }

    pub fn toolbar(&self) -> Option<&[String]> {
        self.toolbar.as_deref()
    }

    /// Look up a single custom option.
    pub fn custom(&self, name: &str) -> Option<&Value> {
        self.custom.get(name)
    }

    /// All custom options, in encoding order.
    pub fn custom_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.custom.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True when nothing has been set.
    pub fn is_empty(&self) -> bool {
        self.language.is_none()
            && self.plugins.is_none()
            && self.removed_plugins.is_none()
            && self.toolbar.is_none()
            && self.custom.is_empty()
    }

    /// Encode as the compact JSON object the element expects.
    ///
    /// Custom options come first, then `toolbar`, `removePlugins`, `plugins`
    /// and `language`. Unset fields are left out rather than written as
    /// `null`.
    pub fn encode(&self) -> Result<String, ConfigError> {
        if let Some(key) = self.conflicting_key() {
            tracing::warn!(key, "custom option shadows a dedicated config field");
            return Err(ConfigError::ConflictingKey {
                key: key.to_owned(),
            });
        }
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a `config` attribute value back into a config.
    ///
    /// The four dedicated keys fill their fields when they hold the expected
    /// JSON type. Anything else, including a dedicated key with an unexpected
    /// type, is kept as a custom option.
    ///
    /// A custom option that named an unset dedicated field comes back in that
    /// field, so `decode(encode(c))` equals `c.normalized()` rather than `c`.
    pub fn decode(text: &str) -> Result<Self, ConfigError> {
        let Value::Object(entries) = serde_json::from_str::<Value>(text)? else {
            return Err(ConfigError::NotAnObject);
        };

        let mut config = Self::default();
        for (key, value) in entries {
            config.absorb(key, value);
        }
        Ok(config)
    }

    /// Move custom options that name an unset dedicated field, with the
    /// right JSON type, into that field.
    ///
    /// Both forms encode to the same key/value set.
    #[must_use]
    pub fn normalized(self) -> Self {
        let Self {
            language,
            plugins,
            removed_plugins,
            toolbar,
            custom,
        } = self;
        let mut config = Self {
            language,
            plugins,
            removed_plugins,
            toolbar,
            custom: Map::new(),
        };
        for (key, value) in custom {
            config.absorb(key, value);
        }
        config
    }

    /// Route one JSON entry to its dedicated field if that field is unset
    /// and the value fits, otherwise to the custom options.
    fn absorb(&mut self, key: String, value: Value) {
        let value = match (key.as_str(), value) {
            (LANGUAGE_KEY, Value::String(code)) if self.language.is_none() => {
                self.language = Some(code);
                return;
            }
            (PLUGINS_KEY | REMOVE_PLUGINS_KEY | TOOLBAR_KEY, Value::Array(items)) => {
                let slot = match key.as_str() {
                    PLUGINS_KEY => &mut self.plugins,
                    REMOVE_PLUGINS_KEY => &mut self.removed_plugins,
                    _ => &mut self.toolbar,
                };
                if slot.is_some() {
                    Value::Array(items)
                } else {
                    match string_list(items) {
                        Ok(names) => {
                            *slot = Some(names);
                            return;
                        }
                        Err(items) => Value::Array(items),
                    }
                }
            }
            (_, value) => value,
        };
        self.custom.insert(key, value);
    }

    /// First custom key that names a dedicated field which is also set.
    fn conflicting_key(&self) -> Option<&str> {
        self.custom.keys().map(String::as_str).find(|key| match *key {
            LANGUAGE_KEY => self.language.is_some(),
            PLUGINS_KEY => self.plugins.is_some(),
            REMOVE_PLUGINS_KEY => self.removed_plugins.is_some(),
            TOOLBAR_KEY => self.toolbar.is_some(),
            _ => false,
        })
    }

    fn entry_count(&self) -> usize {
        self.custom.len()
            + usize::from(self.toolbar.is_some())
            + usize::from(self.removed_plugins.is_some())
            + usize::from(self.plugins.is_some())
            + usize::from(self.language.is_some())
    }
}

impl Serialize for EditorConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if let Some(key) = self.conflicting_key() {
            return Err(S::Error::custom(format_args!(
                "custom option `{key}` conflicts with the dedicated `{key}` setting"
            )));
        }

        let mut map = serializer.serialize_map(Some(self.entry_count()))?;
        for (key, value) in &self.custom {
            map.serialize_entry(key, value)?;
        }
        if let Some(toolbar) = &self.toolbar {
            map.serialize_entry(TOOLBAR_KEY, toolbar)?;
        }
        if let Some(removed) = &self.removed_plugins {
            map.serialize_entry(REMOVE_PLUGINS_KEY, removed)?;
        }
        if let Some(plugins) = &self.plugins {
            map.serialize_entry(PLUGINS_KEY, plugins)?;
        }
        if let Some(language) = &self.language {
            map.serialize_entry(LANGUAGE_KEY, language)?;
        }
        map.end()
    }
}

impl FromStr for EditorConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

fn collect_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// Convert a JSON array into a list of strings, handing the array back
/// untouched if any element is not a string.
fn string_list(items: Vec<Value>) -> Result<Vec<String>, Vec<Value>> {
    if !items.iter().all(Value::is_string) {
        return Err(items);
    }
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}
