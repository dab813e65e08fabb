//! Grid configuration and validation.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default size jitter as a fraction of `size`.
pub const DEFAULT_SIZE_JITTER: f32 = 0.2;
/// Default maximum rotation in degrees.
pub const DEFAULT_MAX_ROTATION: f32 = 15.0;
/// Lower bound for a jittered dimension, as a fraction of `size`.
pub const MIN_DIMENSION_FRACTION: f32 = 0.05;
/// Largest accepted `columns * rows`.
pub const MAX_CELL_COUNT: usize = 1_000_000;

/// Configuration for generating one grid.
///
/// Only `columns`, `rows`, and `size` are range-checked, and `columns * rows` may not exceed
/// [`MAX_CELL_COUNT`]. A negative `gap` is accepted and yields overlapping or mirrored spacing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Number of columns; must be > 0.
    pub columns: i32,
    /// Number of rows; must be > 0.
    pub rows: i32,
    /// Space between neighbouring elements in canvas units.
    pub gap: f32,
    /// Base diameter or side length of each element; must be > 0.
    pub size: f32,
    /// Maximum distance noise may move a cell center along each axis.
    pub displacement: f32,
    /// Spatial frequency of the noise field. Lower values make neighbours move together.
    pub smoothness: f32,
    /// Size jitter as a fraction of `size`.
    pub size_jitter: f32,
    /// Maximum absolute rotation in degrees.
    pub max_rotation: f32,
    /// Noise seed; equal seeds and configs produce identical output.
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            rows: 10,
            gap: 10.0,
            size: 10.0,
            displacement: 0.0,
            smoothness: 0.05,
            size_jitter: DEFAULT_SIZE_JITTER,
            max_rotation: DEFAULT_MAX_ROTATION,
            seed: 0,
        }
    }
}

impl GridConfig {
    /// Creates a new [`GridConfig`] with the given dimensions and element size.
    pub fn new(columns: i32, rows: i32, size: f32) -> Self {
        Self {
            columns,
            rows,
            size,
            ..Default::default()
        }
    }

    /// Sets the gap between elements.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the displacement magnitude.
    pub fn with_displacement(mut self, displacement: f32) -> Self {
        self.displacement = displacement;
        self
    }

    /// Sets the noise frequency.
    pub fn with_smoothness(mut self, smoothness: f32) -> Self {
        self.smoothness = smoothness;
        self
    }

    /// Sets the size jitter fraction.
    pub fn with_size_jitter(mut self, size_jitter: f32) -> Self {
        self.size_jitter = size_jitter;
        self
    }

    /// Sets the maximum rotation in degrees.
    pub fn with_max_rotation(mut self, max_rotation: f32) -> Self {
        self.max_rotation = max_rotation;
        self
    }

    /// Sets the noise seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Distance between neighbouring cell centers.
    pub fn pitch(&self) -> f32 {
        self.size + self.gap
    }

    /// Number of cells in the grid, or 0 when either dimension is non-positive.
    pub fn cell_count(&self) -> usize {
        let columns = usize::try_from(self.columns).unwrap_or(0);
        let rows = usize::try_from(self.rows).unwrap_or(0);
        columns.saturating_mul(rows)
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.columns <= 0 {
            return Err(Error::InvalidConfig(format!(
                "columns must be > 0 (got {})",
                self.columns
            )));
        }
        if self.rows <= 0 {
            return Err(Error::InvalidConfig(format!(
                "rows must be > 0 (got {})",
                self.rows
            )));
        }
        let cells = i64::from(self.columns) * i64::from(self.rows);
        if cells > MAX_CELL_COUNT as i64 {
            return Err(Error::InvalidConfig(format!(
                "grid of {}x{} has {} cells (max {})",
                self.columns, self.rows, cells, MAX_CELL_COUNT
            )));
        }
        let fields = [
            ("gap", self.gap),
            ("size", self.size),
            ("displacement", self.displacement),
            ("smoothness", self.smoothness),
            ("size_jitter", self.size_jitter),
            ("max_rotation", self.max_rotation),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfig(format!("{name} must be finite")));
        }
        if self.size <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "size must be > 0 (got {})",
                self.size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let config = GridConfig::new(3, 4, 5.0)
            .with_gap(2.0)
            .with_displacement(1.5)
            .with_smoothness(0.2)
            .with_size_jitter(0.0)
            .with_max_rotation(45.0)
            .with_seed(9);

        assert_eq!((config.columns, config.rows), (3, 4));
        assert_eq!(config.size, 5.0);
        assert_eq!(config.gap, 2.0);
        assert_eq!(config.displacement, 1.5);
        assert_eq!(config.smoothness, 0.2);
        assert_eq!(config.size_jitter, 0.0);
        assert_eq!(config.max_rotation, 45.0);
        assert_eq!(config.seed, 9);
        assert_eq!(config.pitch(), 7.0);
        assert_eq!(config.cell_count(), 12);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for config in [
            GridConfig::new(0, 3, 5.0),
            GridConfig::new(3, -1, 5.0),
            GridConfig::new(-2, 0, 5.0),
        ] {
            let err = config.validate().unwrap_err();
            assert!(err.is_invalid_config(), "{err}");
        }
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(GridConfig::new(3, 3, 0.0).validate().is_err());
        assert!(GridConfig::new(3, 3, -4.0).validate().is_err());
    }

    #[test]
    fn accepts_negative_gap_and_displacement() {
        let config = GridConfig::new(3, 3, 5.0)
            .with_gap(-8.0)
            .with_displacement(-2.0)
            .with_smoothness(-1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = GridConfig::new(2, 2, 5.0)
            .with_gap(f32::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfig("gap must be finite".to_string())
        );
        assert!(GridConfig::new(2, 2, f32::INFINITY).validate().is_err());
        assert!(GridConfig::new(2, 2, 5.0)
            .with_smoothness(f32::NEG_INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn rejects_grids_over_the_cell_cap() {
        let err = GridConfig::new(i32::MAX, i32::MAX, 1.0)
            .validate()
            .unwrap_err();
        assert!(err.is_invalid_config(), "{err}");
        assert!(GridConfig::new(1001, 1000, 1.0).validate().is_err());
        assert!(GridConfig::new(1000, 1000, 1.0).validate().is_ok());
    }

    #[test]
    fn cell_count_is_zero_for_invalid_dimensions() {
        assert_eq!(GridConfig::new(-3, 4, 1.0).cell_count(), 0);
    }
}
