//! Preset catalog construction

use log::{debug, error, info, warn};
use std::collections::BTreeSet;
use std::fmt::{self, Display};

use super::builtin::BuiltInPresets;
use super::models::FramePreset;
use super::parser::{parse_overrides, PresetDiagnostic};
use crate::config::FrameConfig;
use crate::frames::{FrameKey, FrameRegistry};

/// Where the presets of a catalog come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// No override was given
    BuiltIn,
    /// The override provided at least one valid preset
    Override,
    /// The override could not be parsed, built-ins are used
    MalformedOverride,
    /// Every record of the override was rejected, built-ins are used
    RejectedOverride,
}

impl CatalogSource {
    /// True when an override was given but could not be used.
    pub fn is_fallback(&self) -> bool {
        matches!(
            self,
            CatalogSource::MalformedOverride | CatalogSource::RejectedOverride
        )
    }
}

impl Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let str = match self {
            CatalogSource::BuiltIn => "built-in presets",
            CatalogSource::Override => "override",
            CatalogSource::MalformedOverride => "built-in presets (override is malformed)",
            CatalogSource::RejectedOverride => "built-in presets (every override preset rejected)",
        };
        write!(f, "{}", str)
    }
}

/// Ordered, never empty list of presets plus the default selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCatalog {
    presets: Vec<FramePreset>,
    default_index: usize,
    source: CatalogSource,
    diagnostics: Vec<PresetDiagnostic>,
}

impl PresetCatalog {
    /// Build the catalog from an optional JSON override.
    ///
    /// Nothing here fails: a malformed override or one where every record is
    /// rejected leaves the built-ins in place, and invalid records are
    /// dropped one by one. Each problem is logged and kept in
    /// [`PresetCatalog::diagnostics`].
    pub fn build(
        raw_override: Option<&str>,
        built_ins: &BuiltInPresets,
        valid_keys: &BTreeSet<FrameKey>,
        default_name: Option<&str>,
    ) -> Self {
        let (presets, source, diagnostics) = match raw_override {
            None | Some("") => (built_ins.to_vec(), CatalogSource::BuiltIn, vec![]),
            Some(raw) => match parse_overrides(raw, valid_keys) {
                Err(e) => {
                    error!("Failed to parse frame presets override: {e}. Using built-in presets.");
                    (built_ins.to_vec(), CatalogSource::MalformedOverride, vec![])
                }
                Ok(validated) => {
                    for diagnostic in validated.diagnostics.iter() {
                        if diagnostic.drops_record() {
                            warn!("Skipping invalid {diagnostic}");
                        } else {
                            warn!("Ignoring field of {diagnostic}");
                        }
                    }
                    if validated.presets.is_empty() {
                        warn!(
                            "Frame presets override has no valid preset ({} rejected). Using built-in presets.",
                            validated.diagnostics.len()
                        );
                        (
                            built_ins.to_vec(),
                            CatalogSource::RejectedOverride,
                            validated.diagnostics,
                        )
                    } else {
                        info!(
                            "Loaded {} frame preset(s) from override",
                            validated.presets.len()
                        );
                        (validated.presets, CatalogSource::Override, validated.diagnostics)
                    }
                }
            },
        };

        let default_index = select_default(&presets, default_name);
        debug!("Default frame preset: {}", presets[default_index].name);

        PresetCatalog {
            presets,
            default_index,
            source,
            diagnostics,
        }
    }

    /// Build the catalog for `config`, checking frame types against `registry`.
    pub fn from_config(config: &FrameConfig, registry: &FrameRegistry) -> Self {
        Self::build(
            config.presets_json.as_deref(),
            &BuiltInPresets::default(),
            &registry.valid_keys(),
            config.default_preset.as_deref(),
        )
    }

    pub fn presets(&self) -> &[FramePreset] {
        self.presets.as_slice()
    }

    pub fn default_preset(&self) -> &FramePreset {
        &self.presets[self.default_index]
    }

    /// Find a preset by exact name.
    pub fn find(&self, name: &str) -> Option<&FramePreset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    /// Dropped records and ignored fields of the override, in input order.
    pub fn diagnostics(&self) -> &[PresetDiagnostic] {
        self.diagnostics.as_slice()
    }
}

/// Index of the first preset named `default_name`, or 0.
fn select_default(presets: &[FramePreset], default_name: Option<&str>) -> usize {
    let Some(name) = default_name.filter(|name| !name.is_empty()) else {
        return 0;
    };
    match presets.iter().position(|preset| preset.name == name) {
        Some(index) => index,
        None => {
            warn!("Default frame preset '{name}' not found, using '{}'", presets[0].name);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::builtin::{DARK_FRAME_NAME, PLAIN_FRAME_NAME};

    fn valid_keys() -> BTreeSet<FrameKey> {
        FrameRegistry::new().valid_keys()
    }

    #[test]
    fn test_no_override_uses_built_ins() {
        let catalog = PresetCatalog::build(None, &BuiltInPresets::default(), &valid_keys(), None);
        assert_eq!(catalog.presets().len(), 4);
        assert_eq!(catalog.source(), CatalogSource::BuiltIn);
        assert_eq!(catalog.default_preset().name, PLAIN_FRAME_NAME);
        assert!(catalog.diagnostics().is_empty());
    }

    #[test]
    fn test_empty_override_is_no_override() {
        let catalog =
            PresetCatalog::build(Some(""), &BuiltInPresets::default(), &valid_keys(), None);
        assert_eq!(catalog.source(), CatalogSource::BuiltIn);
        assert!(!catalog.source().is_fallback());
    }

    #[test]
    fn test_whitespace_override_is_malformed() {
        for raw in ["   ", "\n"] {
            let catalog =
                PresetCatalog::build(Some(raw), &BuiltInPresets::default(), &valid_keys(), None);
            assert_eq!(catalog.source(), CatalogSource::MalformedOverride);
            assert_eq!(catalog.presets().len(), 4);
        }
    }

    #[test]
    fn test_empty_default_name_uses_first_preset() {
        let catalog =
            PresetCatalog::build(None, &BuiltInPresets::default(), &valid_keys(), Some(""));
        assert_eq!(catalog.default_preset().name, PLAIN_FRAME_NAME);
        assert_eq!(select_default(catalog.presets(), Some("")), 0);
    }

    #[test]
    fn test_default_by_name() {
        let catalog = PresetCatalog::build(
            None,
            &BuiltInPresets::default(),
            &valid_keys(),
            Some(DARK_FRAME_NAME),
        );
        assert_eq!(catalog.default_preset().name, DARK_FRAME_NAME);
    }

    #[test]
    fn test_default_name_is_exact_match() {
        let catalog = PresetCatalog::build(
            None,
            &BuiltInPresets::default(),
            &valid_keys(),
            Some("dark frame"),
        );
        assert_eq!(catalog.default_preset().name, PLAIN_FRAME_NAME);
    }

    #[test]
    fn test_find() {
        let catalog = PresetCatalog::build(None, &BuiltInPresets::default(), &valid_keys(), None);
        assert!(catalog.find(DARK_FRAME_NAME).is_some());
        assert!(catalog.find("Nope").is_none());
    }

    #[test]
    fn test_from_config() {
        let config = FrameConfig {
            presets_json: None,
            default_preset: Some(DARK_FRAME_NAME.to_string()),
        };
        let catalog = PresetCatalog::from_config(&config, &FrameRegistry::new());
        assert_eq!(catalog.source(), CatalogSource::BuiltIn);
        assert_eq!(catalog.default_preset().name, DARK_FRAME_NAME);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(CatalogSource::Override.to_string(), "override");
        assert!(CatalogSource::RejectedOverride.is_fallback());
        assert!(CatalogSource::MalformedOverride.is_fallback());
        assert!(!CatalogSource::Override.is_fallback());
    }
}
