//! Grid generation pipeline: validate, lay out, perturb, pick variants, assemble.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod bounds;
pub mod config;
pub mod events;
pub mod generator;
pub mod layout;
pub mod perturb;
pub mod variant;

/// Noise-coordinate offsets that give each perturbation channel its own region of the field.
///
/// Offsets are added to both scaled coordinates before sampling. They lie at least 30 units
/// apart, so each channel reads a region of the field unrelated to the others.
pub mod channel {
    pub const X: f32 = 0.0;
    pub const Y: f32 = 71.3;
    pub const SIZE: f32 = 143.7;
    pub const ROTATION: f32 = 199.1;
    pub const VARIANT: f32 = 37.9;
}

/// A grid cell before any noise is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseCell {
    pub row: usize,
    pub column: usize,
    /// Cell center relative to the grid origin at `(0, 0)`.
    pub position: Vec2,
}

impl BaseCell {
    pub fn new(row: usize, column: usize, position: Vec2) -> Self {
        Self {
            row,
            column,
            position,
        }
    }

    /// Row-major index of this cell in a grid with `columns` columns.
    pub fn index(&self, columns: usize) -> usize {
        self.row * columns + self.column
    }
}

/// Final placement for one grid cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    /// Stable node name, `dot-{row}-{column}`.
    pub name: String,
    pub row: usize,
    pub column: usize,
    /// Center before perturbation.
    pub base_position: Vec2,
    /// Center after noise displacement.
    pub position: Vec2,
    /// Diameter or side length after size jitter; always > 0.
    pub dimension: f32,
    /// Rotation in degrees; positive values rotate counter-clockwise.
    pub rotation: f32,
    /// Selected variant when the source has more than one interchangeable variant.
    pub variant_index: Option<usize>,
    /// True when the record was generated with variant randomization enabled.
    pub randomize_variants: bool,
}

impl PlacementRecord {
    /// Node name for the cell at `(row, column)`.
    pub fn name_for(row: usize, column: usize) -> String {
        format!("dot-{row}-{column}")
    }

    /// Top-left corner of the element's bounding square, as hosts position nodes by corner.
    pub fn top_left(&self) -> Vec2 {
        self.position - Vec2::splat(self.dimension * 0.5)
    }

    /// Displacement applied by the noise field.
    pub fn offset(&self) -> Vec2 {
        self.position - self.base_position
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}
