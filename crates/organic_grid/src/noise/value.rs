//! Seeded value noise backed by [`noise::Value`].
use noise::{NoiseFn, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::noise::NoiseSampler;

/// Seed-derived rotations are kept this far (in radians) from the lattice axes.
const AXIS_MARGIN: f64 = 0.35;
/// Seed-derived translations are drawn from `[0, DOMAIN_SPAN)` on each axis.
const DOMAIN_SPAN: f64 = 4096.0;

/// Deterministic value-noise field parameterized by a seed.
///
/// Each integer lattice point of the underlying [`Value`] generator carries a pseudo-random value
/// in `[-1, 1]`, and samples in between are interpolated from the surrounding corners, so the
/// field is continuous and neighbouring inputs return correlated values.
///
/// The generator's permutation table repeats every 256 units along each lattice axis. Inputs are
/// therefore rotated by a seed-derived angle well away from the axes and translated by a
/// seed-derived offset before sampling, so points a whole period apart along either input axis
/// land on unrelated lattice cells.
#[derive(Debug, Clone)]
pub struct NoiseField {
    seed: u64,
    value: Value,
    /// `(cos, sin)` of the domain rotation.
    rotation: (f64, f64),
    translation: [f64; 2],
}

impl NoiseField {
    /// Build a field for `seed`. Equal seeds always build equal fields.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let value = Value::new(rng.next_u32());
        let quarter = std::f64::consts::FRAC_PI_2;
        let angle = AXIS_MARGIN + unit(&mut rng) * (quarter - 2.0 * AXIS_MARGIN);
        let translation = [
            unit(&mut rng) * DOMAIN_SPAN,
            unit(&mut rng) * DOMAIN_SPAN,
        ];

        Self {
            seed,
            value,
            rotation: (angle.cos(), angle.sin()),
            translation,
        }
    }

    /// Seed this field was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    fn to_domain(&self, x: f64, y: f64) -> [f64; 2] {
        let (cos, sin) = self.rotation;
        [
            cos * x - sin * y + self.translation[0],
            sin * x + cos * y + self.translation[1],
        ]
    }
}

impl NoiseSampler for NoiseField {
    /// Sample the field at `(x, y)`. Non-finite coordinates sample as `0.0`.
    fn sample(&self, x: f32, y: f32) -> f32 {
        if !x.is_finite() || !y.is_finite() {
            return 0.0;
        }
        let point = self.to_domain(f64::from(x), f64::from(y));
        (self.value.get(point) as f32).clamp(-1.0, 1.0)
    }
}

/// Uniform float in `[0, 1)` from the top 53 bits of a draw.
#[inline]
fn unit(rng: &mut impl Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}
