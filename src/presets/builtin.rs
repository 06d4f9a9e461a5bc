//! Compiled-in frame presets

use super::models::{FramePosition, FramePreset, FrameStyle};
use crate::frames::FrameKey;

pub const PLAIN_FRAME_NAME: &str = "Default Frame";
pub const DARK_FRAME_NAME: &str = "Dark Frame";
pub const BORDERLESS_FRAME_NAME: &str = "Borderless Frame";
pub const SIMPLE_BOTTOM_FRAME_NAME: &str = "Simple Bottom Frame";

/// Black on white, thin border, no frame component.
pub fn plain_frame_preset() -> FramePreset {
    FramePreset {
        name: PLAIN_FRAME_NAME.to_string(),
        style: FrameStyle::new("#000000", "#ffffff", "#000000", "1px", "8px", "16px"),
        text: None,
        position: None,
        frame_type: FrameKey::None,
    }
}

pub fn dark_frame_preset() -> FramePreset {
    FramePreset {
        name: DARK_FRAME_NAME.to_string(),
        style: FrameStyle::new("#ffffff", "#000000", "#ffffff", "1px", "8px", "16px"),
        text: None,
        position: None,
        frame_type: FrameKey::None,
    }
}

pub fn borderless_frame_preset() -> FramePreset {
    FramePreset {
        name: BORDERLESS_FRAME_NAME.to_string(),
        style: FrameStyle::new("#000000", "#ffffff", "#ffffff", "0px", "0px", "16px"),
        text: None,
        position: None,
        frame_type: FrameKey::None,
    }
}

/// Dark frame with a "SCAN ME" label under the code.
pub fn simple_bottom_frame_preset() -> FramePreset {
    FramePreset {
        name: SIMPLE_BOTTOM_FRAME_NAME.to_string(),
        style: FrameStyle::new("#ffffff", "#000000", "#000000", "0px", "8px", "12px"),
        text: Some("SCAN ME".to_string()),
        position: Some(FramePosition::Bottom),
        frame_type: FrameKey::Simple,
    }
}

/// Non-empty list of presets used when no usable override is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltInPresets(Vec<FramePreset>);

impl BuiltInPresets {
    pub fn new(first: FramePreset, rest: Vec<FramePreset>) -> Self {
        let mut presets = Vec::with_capacity(rest.len() + 1);
        presets.push(first);
        presets.extend(rest);
        BuiltInPresets(presets)
    }

    pub fn presets(&self) -> &[FramePreset] {
        self.0.as_slice()
    }

    pub fn to_vec(&self) -> Vec<FramePreset> {
        self.0.clone()
    }
}

impl Default for BuiltInPresets {
    fn default() -> Self {
        BuiltInPresets::new(
            plain_frame_preset(),
            vec![
                dark_frame_preset(),
                borderless_frame_preset(),
                simple_bottom_frame_preset(),
            ],
        )
    }
}
