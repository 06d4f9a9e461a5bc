//! Style presets for framing generated QR codes.
//!
//! The frame registry maps frame keys to UI components. The preset catalog
//! holds the presets an application offers, either compiled-in or read from
//! the `FRAME_PRESETS` environment variable, and the default one, selected
//! through `FRAME_PRESET`.

pub mod config;
pub mod frames;
pub mod logger;
pub mod presets;
pub mod settings;

pub use config::FrameConfig;
pub use frames::{ComponentHandle, FrameComponent, FrameKey, FrameRegistry};
pub use presets::{CatalogSource, FramePosition, FramePreset, FrameStyle, PresetCatalog};
pub use settings::FrameSettings;
