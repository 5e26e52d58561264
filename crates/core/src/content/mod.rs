//! The site content document: a tagged, partially-schematized JSON tree.
//!
//! Storage keeps the raw `serde_json::Value` (schema-on-read); the typed
//! model in [`model`] is a tolerant read-side view used by the renderer and
//! the edit-form builder. The mutator in [`mutate`] edits the raw value
//! directly so fields it does not understand survive untouched.

pub mod form;
pub mod model;
pub mod mutate;
pub mod render;

pub use model::{ContentDocument, Page, Section};
