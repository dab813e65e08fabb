//! Deterministic per-cell variant selection.
//!
//! When the selected shape belongs to a family of `N` interchangeable variants, each cell reads a
//! dedicated noise channel ([`crate::grid::channel::VARIANT`]) and maps it onto `0..N`. Because
//! the channel is spatially smooth, neighbouring cells at low `smoothness` tend to share a
//! variant, which reads as patches rather than static.
use crate::grid::config::GridConfig;
use crate::grid::perturb::sample_channel;
use crate::grid::{channel, BaseCell};
use crate::noise::NoiseSampler;

/// Pick a variant index for `cell`, or `None` when `variant_count` is 0 or 1.
///
/// The `[-1, 1]` noise value is mapped to `[0, 1]`, scaled by `variant_count` and floored; the
/// result is clamped to `variant_count - 1` so a sample of exactly `1.0` stays in range.
pub fn select_variant(
    cell: &BaseCell,
    noise: &dyn NoiseSampler,
    config: &GridConfig,
    variant_count: usize,
) -> Option<usize> {
    if variant_count <= 1 {
        return None;
    }

    let value = sample_channel(noise, config, cell, channel::VARIANT);
    Some(index_for_value(value, variant_count))
}

#[inline]
pub(crate) fn index_for_value(value: f32, variant_count: usize) -> usize {
    debug_assert!(variant_count > 0, "variant_count must be > 0");
    let unit = ((value + 1.0) * 0.5).clamp(0.0, 1.0);
    let idx = (unit * variant_count as f32).floor() as usize;
    idx.min(variant_count - 1)
}
