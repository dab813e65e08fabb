//! Base cell layout for an R x C grid, before any noise is applied.
use glam::Vec2;

use crate::grid::config::{GridConfig, MAX_CELL_COUNT};
use crate::grid::BaseCell;

/// Compute base cell centers in row-major order.
///
/// Cell `(row = i, column = j)` sits at `(j * (size + gap), i * (size + gap))` relative to a grid
/// origin of `(0, 0)` and is stored at index `i * columns + j`. Callers translate the whole grid
/// afterwards (see [`crate::grid::bounds::center_on`]).
///
/// Non-positive dimensions produce an empty layout; validate the config first.
pub fn layout(config: &GridConfig) -> Vec<BaseCell> {
    let columns = usize::try_from(config.columns).unwrap_or(0);
    let rows = usize::try_from(config.rows).unwrap_or(0);
    let pitch = config.pitch();

    let mut cells = Vec::with_capacity(config.cell_count().min(MAX_CELL_COUNT));
    for i in 0..rows {
        for j in 0..columns {
            let position = Vec2::new(j as f32 * pitch, i as f32 * pitch);
            cells.push(BaseCell::new(i, j, position));
        }
    }

    cells
}
