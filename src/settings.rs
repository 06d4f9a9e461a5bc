//! Frame settings shared with the rendering layer

use log::info;

use crate::config::FrameConfig;
use crate::frames::{FrameComponent, FrameRegistry};
use crate::presets::{FramePreset, PresetCatalog};

/// Registry and preset catalog, built once at start-up and then only read.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSettings {
    registry: FrameRegistry,
    catalog: PresetCatalog,
}

impl FrameSettings {
    pub fn init(config: &FrameConfig) -> Self {
        Self::with_registry(config, FrameRegistry::new())
    }

    pub fn with_registry(config: &FrameConfig, registry: FrameRegistry) -> Self {
        let catalog = PresetCatalog::from_config(config, &registry);
        info!(
            "Frame presets ready: {} preset(s) from {}, default '{}'",
            catalog.presets().len(),
            catalog.source(),
            catalog.default_preset().name
        );
        FrameSettings { registry, catalog }
    }

    pub fn registry(&self) -> &FrameRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn default_preset(&self) -> &FramePreset {
        self.catalog.default_preset()
    }

    /// Component drawing `preset`.
    pub fn component_for(&self, preset: &FramePreset) -> FrameComponent {
        self.registry.lookup(preset.frame_type)
    }
}
