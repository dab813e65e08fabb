//! Messages exchanged with the plugin UI.
//!
//! Both directions are JSON objects tagged by `type`. The UI sends plain numbers; converting them
//! into a [`GridConfig`] (truncating counts and seeds, rejecting non-finite values) happens here
//! so the core only ever sees typed configuration.
use organic_grid::grid::config::{GridConfig, DEFAULT_MAX_ROTATION, DEFAULT_SIZE_JITTER};
use serde::{Deserialize, Serialize};

use crate::document::NodeId;
use crate::error::{PluginError, Result};
use crate::selection::SelectionKind;

/// Grid parameters as entered in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridInput {
    pub columns: f64,
    pub rows: f64,
    pub gap: f64,
    pub size: f64,
    pub displacement: f64,
    pub smoothness: f64,
    #[serde(default)]
    pub size_jitter: Option<f64>,
    #[serde(default)]
    pub max_rotation: Option<f64>,
    pub seed: f64,
}

impl GridInput {
    /// Convert UI numbers into a [`GridConfig`]. The result is not yet validated.
    pub fn to_config(&self) -> Result<GridConfig> {
        Ok(GridConfig {
            columns: count_from_number("columns", self.columns)?,
            rows: count_from_number("rows", self.rows)?,
            gap: self.gap as f32,
            size: self.size as f32,
            displacement: self.displacement as f32,
            smoothness: self.smoothness as f32,
            size_jitter: self.size_jitter.map_or(DEFAULT_SIZE_JITTER, |v| v as f32),
            max_rotation: self.max_rotation.map_or(DEFAULT_MAX_ROTATION, |v| v as f32),
            seed: seed_from_number(self.seed)?,
        })
    }
}

impl From<&GridConfig> for GridInput {
    fn from(config: &GridConfig) -> Self {
        Self {
            columns: config.columns as f64,
            rows: config.rows as f64,
            gap: config.gap as f64,
            size: config.size as f64,
            displacement: config.displacement as f64,
            smoothness: config.smoothness as f64,
            size_jitter: Some(config.size_jitter as f64),
            max_rotation: Some(config.max_rotation as f64),
            seed: config.seed as f64,
        }
    }
}

/// Convert a UI seed into a `u64`: fractions are truncated, negative seeds wrap.
pub fn seed_from_number(value: f64) -> Result<u64> {
    if !value.is_finite() {
        return Err(PluginError::Input(format!("seed must be finite (got {value})")));
    }
    Ok(value.trunc() as i64 as u64)
}

fn count_from_number(field: &str, value: f64) -> Result<i32> {
    if !value.is_finite() {
        return Err(PluginError::Input(format!(
            "{field} must be finite (got {value})"
        )));
    }
    Ok(value.trunc() as i32)
}

/// Messages sent from the UI to the plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum UiMessage {
    /// Render a preview image without committing anything.
    Preview {
        config: GridInput,
        #[serde(default)]
        randomize_variants: bool,
    },
    /// Commit the grid into the document.
    Create {
        config: GridInput,
        #[serde(default)]
        randomize_variants: bool,
    },
    /// Close the plugin.
    Cancel,
}

impl UiMessage {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Messages sent from the plugin to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PluginMessage {
    /// The selection changed.
    Selection {
        kind: Option<SelectionKind>,
        name: Option<String>,
        /// Number of interchangeable variants; 0 when the grid will use dots.
        variant_count: usize,
    },
    /// A rendered preview. `generation` increases with every preview so the UI can drop
    /// stale images.
    Preview {
        generation: u64,
        count: usize,
        image: Vec<u8>,
    },
    /// The grid was committed to the document.
    Created { count: usize, group: NodeId },
    /// Non-fatal notice about the last generation.
    Notice { message: String },
    /// An operation failed; nothing was committed.
    Error { message: String },
    /// The plugin closed.
    Closed,
}

impl PluginMessage {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
