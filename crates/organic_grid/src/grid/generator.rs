//! Placement assembly: the public entry point for grid generation.
use tracing::{info, warn};

use crate::error::Result;
use crate::grid::bounds::grid_bounds;
use crate::grid::config::GridConfig;
use crate::grid::events::{EventSink, GenerationSummary, GridEvent, GridEventKind};
use crate::grid::layout::layout;
use crate::grid::perturb::perturb_cell;
use crate::grid::variant::select_variant;
use crate::grid::PlacementRecord;
use crate::noise::{NoiseField, NoiseSampler};

/// Grids above this many cells still generate, but hosts are warned that previews may lag.
pub const LARGE_GRID_CELLS: usize = 10_000;

/// Generate the placement records for `config`.
///
/// Validates first and fails with [`crate::error::Error::InvalidConfig`] without producing any
/// output. Otherwise returns exactly `columns * rows` records in row-major order. A
/// `variant_count` greater than 1 assigns a `variant_index` to every record.
pub fn generate_shapes(
    config: &GridConfig,
    variant_count: Option<usize>,
) -> Result<Vec<PlacementRecord>> {
    generate_shapes_with_events(config, variant_count, &mut ())
}

/// Like [`generate_shapes`], streaming [`GridEvent`]s to `sink`.
pub fn generate_shapes_with_events(
    config: &GridConfig,
    variant_count: Option<usize>,
    sink: &mut dyn EventSink,
) -> Result<Vec<PlacementRecord>> {
    config.validate()?;
    let noise = NoiseField::new(config.seed);
    Ok(assemble(config, &noise, variant_count, sink))
}

/// Like [`generate_shapes`], driven by a caller-supplied noise sampler instead of a
/// seeded [`NoiseField`].
pub fn generate_shapes_with_noise(
    config: &GridConfig,
    noise: &dyn NoiseSampler,
    variant_count: Option<usize>,
) -> Result<Vec<PlacementRecord>> {
    config.validate()?;
    Ok(assemble(config, noise, variant_count, &mut ()))
}

fn assemble(
    config: &GridConfig,
    noise: &dyn NoiseSampler,
    variant_count: Option<usize>,
    sink: &mut dyn EventSink,
) -> Vec<PlacementRecord> {
    let variants = variant_count.filter(|&n| n > 1);
    let cells = layout(config);

    info!(
        "Generating {}x{} grid ({} cells), seed {}.",
        config.columns,
        config.rows,
        cells.len(),
        config.seed
    );
    if sink.wants(GridEventKind::GenerationStarted) {
        sink.send(GridEvent::GenerationStarted {
            config: config.clone(),
            cell_count: cells.len(),
            variant_count: variants,
        });
    }
    if cells.len() > LARGE_GRID_CELLS {
        warn!(
            "Grid has {} cells (over {}); previews may be slow.",
            cells.len(),
            LARGE_GRID_CELLS
        );
        if sink.wants(GridEventKind::Warning) {
            sink.send(GridEvent::Warning {
                context: "grid".into(),
                message: format!("Grid has {} cells; previews may be slow", cells.len()),
            });
        }
    }

    let mut clamped_count = 0;
    let mut records = Vec::with_capacity(cells.len());
    for (index, cell) in cells.iter().enumerate() {
        let mut perturbed = perturb_cell(cell, noise, config);

        if let Some(raw) = perturbed.clamped_from {
            clamped_count += 1;
            if sink.wants(GridEventKind::SizeClamped) {
                sink.send(GridEvent::SizeClamped {
                    index,
                    raw,
                    clamped: perturbed.record.dimension,
                });
            }
        }

        if let Some(count) = variants {
            perturbed.record.variant_index = select_variant(cell, noise, config, count);
            perturbed.record.randomize_variants = true;
        }

        if sink.wants(GridEventKind::CellPlaced) {
            sink.send(GridEvent::CellPlaced {
                index,
                record: perturbed.record.clone(),
            });
        }
        records.push(perturbed.record);
    }

    if clamped_count > 0 {
        warn!(
            "{} of {} cells had their size clamped; consider lowering size_jitter.",
            clamped_count,
            records.len()
        );
    }

    if sink.wants(GridEventKind::GenerationFinished) {
        sink.send(GridEvent::GenerationFinished {
            summary: GenerationSummary {
                cell_count: records.len(),
                clamped_count,
                bounds: grid_bounds(config),
            },
        });
    }

    records
}

/// Reusable generator holding a validated configuration.
#[derive(Debug, Clone)]
pub struct GridGenerator {
    config: GridConfig,
    variant_count: Option<usize>,
}

impl GridGenerator {
    /// Validate `config` and wrap it in a generator.
    pub fn try_new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            variant_count: None,
        })
    }

    /// Randomize over `variant_count` interchangeable variants.
    pub fn with_variant_count(mut self, variant_count: usize) -> Self {
        self.variant_count = Some(variant_count);
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn variant_count(&self) -> Option<usize> {
        self.variant_count
    }

    /// Generate the records; each call builds its own noise field.
    pub fn generate(&self) -> Vec<PlacementRecord> {
        self.generate_with_events(&mut ())
    }

    pub fn generate_with_events(&self, sink: &mut dyn EventSink) -> Vec<PlacementRecord> {
        let noise = NoiseField::new(self.config.seed);
        assemble(&self.config, &noise, self.variant_count, sink)
    }
}
