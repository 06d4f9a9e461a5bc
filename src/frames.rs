//! Frame registry
//!
//! Associates each frame key with the UI component drawing it, or with no
//! decoration at all.

use enum_iterator::{all, Sequence};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Identifier of a visual treatment around the generated artifact.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Sequence, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FrameKey {
    /// No frame is drawn
    #[default]
    None,
    /// Plain frame with an optional text label
    Simple,
}

impl FrameKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKey::None => "none",
            FrameKey::Simple => "simple",
        }
    }
}

impl Display for FrameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string does not name a frame key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown frame key: {0}")]
pub struct UnknownFrameKey(pub String);

impl FromStr for FrameKey {
    type Err = UnknownFrameKey;

    /// Keys are matched case-sensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all::<FrameKey>()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownFrameKey(s.to_string()))
    }
}

/// Opaque handle to a component owned by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentHandle(&'static str);

impl ComponentHandle {
    pub const fn new(name: &'static str) -> Self {
        ComponentHandle(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl Display for ComponentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the renderer should draw for a frame key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameComponent {
    /// Leave the artifact undecorated
    None,
    /// Wrap the artifact in this component
    Component(ComponentHandle),
}

impl FrameComponent {
    pub fn is_none(&self) -> bool {
        matches!(self, FrameComponent::None)
    }
}

impl Display for FrameComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameComponent::None => write!(f, "(no frame)"),
            FrameComponent::Component(handle) => write!(f, "{handle}"),
        }
    }
}

/// Component drawing the `simple` frame.
pub const FRAME_SIMPLE: ComponentHandle = ComponentHandle::new("FrameSimple");

/// Fixed table from frame keys to components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRegistry {
    simple: ComponentHandle,
}

impl Default for FrameRegistry {
    fn default() -> Self {
        Self::with_simple(FRAME_SIMPLE)
    }
}

impl FrameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry drawing the `simple` frame with `handle`.
    pub fn with_simple(handle: ComponentHandle) -> Self {
        FrameRegistry { simple: handle }
    }

    /// Return the component registered for `key`.
    pub fn lookup(&self, key: FrameKey) -> FrameComponent {
        match key {
            FrameKey::None => FrameComponent::None,
            FrameKey::Simple => FrameComponent::Component(self.simple),
        }
    }

    /// Set of keys a preset may reference.
    pub fn valid_keys(&self) -> BTreeSet<FrameKey> {
        all::<FrameKey>().collect()
    }

    /// Iterate over all registered entries, in key order.
    pub fn entries(&self) -> impl Iterator<Item = (FrameKey, FrameComponent)> + '_ {
        all::<FrameKey>().map(move |key| (key, self.lookup(key)))
    }
}
