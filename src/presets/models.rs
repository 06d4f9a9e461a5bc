//! Frame preset data models

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::frames::FrameKey;

/// Styling attributes of a frame, as CSS-like strings.
///
/// Values are passed through to the renderer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStyle {
    pub text_color: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: String,
    pub border_radius: String,
    pub padding: String,
}

impl FrameStyle {
    pub fn new(
        text_color: &str,
        background_color: &str,
        border_color: &str,
        border_width: &str,
        border_radius: &str,
        padding: &str,
    ) -> Self {
        FrameStyle {
            text_color: text_color.to_string(),
            background_color: background_color.to_string(),
            border_color: border_color.to_string(),
            border_width: border_width.to_string(),
            border_radius: border_radius.to_string(),
            padding: padding.to_string(),
        }
    }
}

/// Side of the frame where the text label goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FramePosition {
    Top,
    Bottom,
    Left,
    Right,
}

impl FramePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            FramePosition::Top => "top",
            FramePosition::Bottom => "bottom",
            FramePosition::Left => "left",
            FramePosition::Right => "right",
        }
    }
}

impl Display for FramePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown frame position: {0}")]
pub struct UnknownPosition(pub String);

impl FromStr for FramePosition {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all::<FramePosition>()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| UnknownPosition(s.to_string()))
    }
}

/// A named, reusable frame configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramePreset {
    pub name: String,
    pub style: FrameStyle,
    /// Label drawn by frames that support one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<FramePosition>,
    /// Registry key of the frame drawing this preset
    #[serde(rename = "type")]
    pub frame_type: FrameKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_uses_camel_case_fields() {
        let style = FrameStyle::new("#000", "#fff", "#000", "1px", "8px", "16px");
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["textColor"], "#000");
        assert_eq!(json["backgroundColor"], "#fff");
        assert_eq!(json["borderRadius"], "8px");
    }

    #[test]
    fn test_preset_type_field_is_renamed() {
        let preset = FramePreset {
            name: "A".to_string(),
            style: FrameStyle::new("a", "b", "c", "d", "e", "f"),
            text: None,
            position: None,
            frame_type: FrameKey::Simple,
        };
        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(json["type"], "simple");
        assert!(json.get("text").is_none());
        assert!(json.get("position").is_none());
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("top".parse::<FramePosition>().unwrap(), FramePosition::Top);
        assert_eq!("right".parse::<FramePosition>().unwrap(), FramePosition::Right);
        assert!("middle".parse::<FramePosition>().is_err());
    }
}
