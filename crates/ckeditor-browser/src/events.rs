//! `ckeditorchange` event handling.
//!
//! The element dispatches a `CustomEvent` whose `detail` is an object of the
//! shape `{ detail: string }`. Listeners here decode that object through
//! serde and hand the typed payload to the caller.

use ckeditor_core::{CHANGE_EVENT, ChangeEventDetail};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Event, EventTarget};

use crate::error::BrowserError;

/// Decode the payload carried by a `ckeditorchange` event.
pub fn decode_change_event(event: &Event) -> Result<ChangeEventDetail, BrowserError> {
    let custom = event.dyn_ref::<CustomEvent>().ok_or_else(|| {
        BrowserError::Decode(format!("`{}` event is not a CustomEvent", event.type_()))
    })?;
    serde_wasm_bindgen::from_value(custom.detail())
        .map_err(|e| BrowserError::Decode(e.to_string()))
}

/// A live `ckeditorchange` listener. Dropping it detaches the listener.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct ChangeSubscription {
    listener: EventListener,
}

impl ChangeSubscription {
    /// Listen for change events on `target`.
    ///
    /// Events whose payload does not decode are logged and skipped; the
    /// callback only ever sees well-formed payloads.
    pub fn new<F>(target: &EventTarget, mut callback: F) -> Self
    where
        F: FnMut(ChangeEventDetail) + 'static,
    {
        let listener = EventListener::new(target, CHANGE_EVENT, move |event| {
            match decode_change_event(event) {
                Ok(payload) => {
                    tracing::debug!(len = payload.detail.len(), "editor content changed");
                    callback(payload);
                }
                Err(err) => tracing::warn!(error = %err, "ignoring malformed change event"),
            }
        });
        Self { listener }
    }

    /// Keep the listener attached for the lifetime of the page.
    pub fn forget(self) {
        self.listener.forget();
    }
}
