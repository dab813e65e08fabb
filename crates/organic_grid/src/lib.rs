#![forbid(unsafe_code)]
//! organic_grid: noise-perturbed grids of dots or component instances.
//!
//! Modules:
//! - noise: seeded, spatially smooth 2D value noise behind the [`noise::NoiseSampler`] seam
//! - grid: configuration, base layout, perturbation, variant selection, events and the generator
//!
//! The single entry point is [`grid::generator::generate_shapes`]; everything it returns is a pure
//! function of the [`grid::config::GridConfig`] and the optional variant count.
pub mod error;
pub mod grid;
pub mod noise;

/// Convenient re-exports for common types. Import with `use organic_grid::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::bounds::{center_on, grid_bounds, GridBounds};
    pub use crate::grid::config::GridConfig;
    pub use crate::grid::events::{
        EventSink, FnSink, GenerationSummary, GridEvent, GridEventKind, MultiSink, VecSink,
    };
    pub use crate::grid::generator::{
        generate_shapes, generate_shapes_with_events, generate_shapes_with_noise, GridGenerator,
    };
    pub use crate::grid::layout::layout;
    pub use crate::grid::perturb::perturb;
    pub use crate::grid::variant::select_variant;
    pub use crate::grid::{BaseCell, PlacementRecord};
    pub use crate::noise::{NoiseField, NoiseSampler};
}
