//! Noise-driven displacement, size jitter and rotation for a single cell.
use glam::Vec2;
use tracing::debug;

use crate::grid::config::{GridConfig, MIN_DIMENSION_FRACTION};
use crate::grid::{channel, BaseCell, PlacementRecord};
use crate::noise::NoiseSampler;

/// Sample `noise` for one channel at the cell's scaled coordinates.
#[inline]
pub(crate) fn sample_channel(
    noise: &dyn NoiseSampler,
    config: &GridConfig,
    cell: &BaseCell,
    offset: f32,
) -> f32 {
    let sx = cell.position.x * config.smoothness + offset;
    let sy = cell.position.y * config.smoothness + offset;
    noise.sample(sx, sy)
}

/// Outcome of perturbing one cell, including whether the dimension had to be clamped.
#[derive(Debug, Clone)]
pub(crate) struct Perturbed {
    pub record: PlacementRecord,
    /// Jittered dimension before clamping, when clamping occurred.
    pub clamped_from: Option<f32>,
}

/// Apply noise to a base cell, producing its placement record.
///
/// Every channel is sampled even when its magnitude is zero, so a record's noise reads do not
/// depend on which effects are enabled. The returned dimension is always > 0.
pub fn perturb(cell: &BaseCell, noise: &dyn NoiseSampler, config: &GridConfig) -> PlacementRecord {
    perturb_cell(cell, noise, config).record
}

pub(crate) fn perturb_cell(
    cell: &BaseCell,
    noise: &dyn NoiseSampler,
    config: &GridConfig,
) -> Perturbed {
    let dx = sample_channel(noise, config, cell, channel::X) * config.displacement;
    let dy = sample_channel(noise, config, cell, channel::Y) * config.displacement;
    let position = cell.position + Vec2::new(dx, dy);

    let size_noise = sample_channel(noise, config, cell, channel::SIZE);
    let raw = config.size * (1.0 + size_noise * config.size_jitter);
    let min_dimension = config.size * MIN_DIMENSION_FRACTION;
    let (dimension, clamped_from) = if raw.is_finite() && raw >= min_dimension {
        (raw, None)
    } else {
        debug!(
            "Cell ({}, {}) dimension {} clamped to {}.",
            cell.row, cell.column, raw, min_dimension
        );
        (min_dimension, Some(raw))
    };

    let rotation = sample_channel(noise, config, cell, channel::ROTATION) * config.max_rotation;

    Perturbed {
        record: PlacementRecord {
            name: PlacementRecord::name_for(cell.row, cell.column),
            row: cell.row,
            column: cell.column,
            base_position: cell.position,
            position,
            dimension,
            rotation,
            variant_index: None,
            randomize_variants: false,
        },
        clamped_from,
    }
}
