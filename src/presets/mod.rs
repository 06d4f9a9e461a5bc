//! Frame presets for qr-frames
//!
//! A preset bundles a frame style, an optional text label and the key of the
//! frame drawing it. The active list of presets is either the compiled-in
//! one or an override supplied as JSON, validated record by record.

pub mod builtin;
pub mod catalog;
pub mod models;
pub mod parser;


pub use builtin::BuiltInPresets;
pub use catalog::{CatalogSource, PresetCatalog};
pub use models::{FramePosition, FramePreset, FrameStyle};
