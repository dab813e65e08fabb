//! Named grid presets loaded from RON.
use std::collections::BTreeMap;

use organic_grid::grid::config::GridConfig;
use serde::{Deserialize, Serialize};

use crate::error::{PluginError, Result};

const BUILTIN_PRESETS: &str = r#"{
    "dots": (
        columns: 12,
        rows: 12,
        gap: 8.0,
        size: 8.0,
        displacement: 0.0,
        smoothness: 0.05,
        sizeJitter: 0.0,
        maxRotation: 0.0,
    ),
    "drift": (
        columns: 16,
        rows: 10,
        gap: 12.0,
        size: 10.0,
        displacement: 6.0,
        smoothness: 0.02,
        sizeJitter: 0.15,
        maxRotation: 10.0,
    ),
    "confetti": (
        columns: 20,
        rows: 20,
        gap: 6.0,
        size: 6.0,
        displacement: 5.0,
        smoothness: 0.4,
        sizeJitter: 0.5,
        maxRotation: 90.0,
        seed: 7,
    ),
}"#;

/// A named collection of [`GridConfig`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridPresets(BTreeMap<String, GridConfig>);

impl GridPresets {
    /// Parse presets from RON text. Missing fields take [`GridConfig::default`] values.
    pub fn from_ron(text: &str) -> Result<Self> {
        let presets: Self = ron::from_str(text)?;
        for (name, config) in &presets.0 {
            config.validate().map_err(|err| {
                PluginError::Input(format!("preset '{name}' is invalid: {err}"))
            })?;
        }
        Ok(presets)
    }

    /// The presets shipped with the plugin.
    pub fn builtin() -> Result<Self> {
        Self::from_ron(BUILTIN_PRESETS)
    }

    pub fn get(&self, name: &str) -> Result<&GridConfig> {
        self.0
            .get(name)
            .ok_or_else(|| PluginError::UnknownPreset(name.to_owned()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, config: GridConfig) {
        self.0.insert(name.into(), config);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_presets_parse_and_validate() {
        let presets = GridPresets::builtin().unwrap();
        assert_eq!(
            presets.names().collect::<Vec<_>>(),
            vec!["confetti", "dots", "drift"]
        );
        let confetti = presets.get("confetti").unwrap();
        assert_eq!(confetti.seed, 7);
        assert_eq!(confetti.max_rotation, 90.0);
        assert_eq!(presets.get("dots").unwrap().seed, 0);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let presets = GridPresets::from_ron(r#"{ "tiny": (columns: 2, rows: 2) }"#).unwrap();
        let tiny = presets.get("tiny").unwrap();
        assert_eq!(tiny.size, GridConfig::default().size);
        assert_eq!(tiny.cell_count(), 4);
    }

    #[test]
    fn invalid_presets_are_rejected() {
        let err = GridPresets::from_ron(r#"{ "broken": (columns: 0) }"#).unwrap_err();
        assert!(err.to_string().contains("broken"));
        assert!(matches!(
            GridPresets::from_ron("{ not ron"),
            Err(PluginError::Preset(_))
        ));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let presets = GridPresets::default();
        assert!(presets.is_empty());
        assert!(matches!(
            presets.get("nope"),
            Err(PluginError::UnknownPreset(name)) if name == "nope"
        ));
    }
}
