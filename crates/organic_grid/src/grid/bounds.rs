//! Grid extents and translation helpers.
//!
//! Layout places the first cell at the origin; hosts usually want the grid centered on the
//! viewport. [`center_on`] shifts a whole placement sequence so the base grid's bounding box is
//! centered on a target point.
use glam::Vec2;

use crate::grid::config::GridConfig;
use crate::grid::PlacementRecord;

/// Axis-aligned bounding box of the unperturbed grid, including element extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl GridBounds {
    pub fn extent(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Bounds of the base grid for `config`. Assumes a validated config.
pub fn grid_bounds(config: &GridConfig) -> GridBounds {
    let half = Vec2::splat(config.size * 0.5);
    let last = Vec2::new(
        (config.columns.max(1) - 1) as f32,
        (config.rows.max(1) - 1) as f32,
    ) * config.pitch();

    // A negative pitch lays cells out towards negative coordinates.
    let lo = last.min(Vec2::ZERO);
    let hi = last.max(Vec2::ZERO);
    GridBounds {
        min: lo - half,
        max: hi + half,
    }
}

/// Translate `records` so the base grid of `config` is centered on `target`.
///
/// Both `position` and `base_position` move by the same amount, so noise offsets are preserved.
pub fn center_on(records: &mut [PlacementRecord], config: &GridConfig, target: Vec2) {
    let shift = target - grid_bounds(config).center();
    for record in records.iter_mut() {
        record.position += shift;
        record.base_position += shift;
    }
}
