//! Seeded 2D noise used to perturb grid cells.
//!
//! The perturbation stage only depends on the [`NoiseSampler`] trait, so any deterministic,
//! spatially continuous field can drive it. [`NoiseField`] is the built-in seeded
//! value noise.
pub mod value;

pub use value::NoiseField;

/// Trait for deterministic 2D noise sampling.
///
/// Implementations must return the same value for the same `(x, y)` on every call and should
/// keep outputs within `[-1, 1]`. Nearby inputs must produce nearby outputs.
pub trait NoiseSampler: Send + Sync {
    fn sample(&self, x: f32, y: f32) -> f32;
}

impl<T: NoiseSampler + ?Sized> NoiseSampler for &T {
    #[inline]
    fn sample(&self, x: f32, y: f32) -> f32 {
        (**self).sample(x, y)
    }
}
