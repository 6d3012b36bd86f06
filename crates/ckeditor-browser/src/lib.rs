//! Browser DOM layer for the `x-ckeditor` web component.
//!
//! This crate creates and configures the element and turns its
//! `ckeditorchange` events into typed callbacks. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Re-exports
//!
//! This crate re-exports `ckeditor-core` for convenience, so consumers
//! only need to depend on `ckeditor-browser`.

pub use ckeditor_core;
pub use ckeditor_core::*;

pub mod element;
pub mod error;
pub mod events;

pub use element::CkEditorElement;
pub use error::BrowserError;
pub use events::{ChangeSubscription, decode_change_event};
