//! Start-up configuration read from the environment

use log::warn;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};

/// JSON array of presets replacing the built-in ones.
pub const PRESETS_ENV_VAR: &str = "FRAME_PRESETS";
/// Name of the preset selected by default.
pub const DEFAULT_PRESET_ENV_VAR: &str = "FRAME_PRESET";

#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Raw JSON override of the preset list
    pub presets_json: Option<String>,
    pub default_preset: Option<String>,
}

impl FrameConfig {
    pub fn new() -> FrameConfig {
        FrameConfig {
            presets_json: None,
            default_preset: None,
        }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> FrameConfig {
        FrameConfig::from_lookup(|key| match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!("Ignoring {key}: value is not valid unicode");
                None
            }
        })
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value.
    pub fn from_lookup<F>(lookup: F) -> FrameConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        FrameConfig {
            presets_json: lookup(PRESETS_ENV_VAR),
            default_preset: lookup(DEFAULT_PRESET_ENV_VAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_lookup_reads_both_variables() {
        let vars = HashMap::from([
            (PRESETS_ENV_VAR, "[]".to_string()),
            (DEFAULT_PRESET_ENV_VAR, "Dark Frame".to_string()),
        ]);
        let config = FrameConfig::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(config.presets_json.as_deref(), Some("[]"));
        assert_eq!(config.default_preset.as_deref(), Some("Dark Frame"));
    }

    #[test]
    fn test_from_lookup_without_variables() {
        let config = FrameConfig::from_lookup(|_| None);
        assert_eq!(config, FrameConfig::new());
    }
}
