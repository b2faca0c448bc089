//! One-dimensional gradient noise.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::permutation::{cell_index, lookup, LATTICE_WRAP};
use crate::error::NoiseError;

use super::gradient::GradientSet;
use super::interp::{fade, lerp, remap, RAW_HALF_RANGE};

/// One-dimensional gradient noise sampler.
///
/// Owns a gradient pool and references the shared permutation table; sampling
/// is a pure function of the coordinate and that immutable state, so a
/// constructed sampler can be read from any number of threads. Changing the
/// vector count means building a new sampler, never mutating this one — the
/// caller synchronizes the swap.
///
/// The pool stores full 2D vectors even though 1D sampling only reads the x
/// component, keeping pool construction identical to [`Perlin2D`].
///
/// [`Perlin2D`]: super::Perlin2D
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Perlin1D {
    gradients: GradientSet,
}

impl Perlin1D {
    /// Sampler backed by the canonical four-vector gradient pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gradients: GradientSet::canonical(),
        }
    }

    /// Sampler backed by `count` randomly drawn gradient vectors.
    ///
    /// # Errors
    ///
    /// [`NoiseError::GradientPoolTooSmall`] if `count < 2`.
    pub fn with_random_gradients<R: Rng + ?Sized>(
        count: usize,
        rng: &mut R,
    ) -> Result<Self, NoiseError> {
        let gradients = GradientSet::random(count, rng)?;
        debug!(count, "built 1D sampler with random gradient pool");
        Ok(Self { gradients })
    }

    /// Number of vectors in the gradient pool.
    #[must_use]
    pub fn gradient_count(&self) -> usize {
        self.gradients.len()
    }

    /// Noise value at `x`, nominally in `[0, 1]`.
    ///
    /// Exactly 0.5 at integer lattice points. The result is not clamped:
    /// randomized pools can push values slightly outside the nominal band.
    /// Non-finite inputs propagate to non-finite outputs.
    #[must_use]
    pub fn sample(&self, x: f32) -> f32 {
        let cell_x = cell_index(x);

        let hash0 = lookup(lookup(cell_x));
        let hash1 = lookup(lookup((cell_x + 1) % LATTICE_WRAP));

        let frac_x = x - x.floor();

        let v0 = self.gradients.select(hash0);
        let v1 = self.gradients.select(hash1);

        // Each cell endpoint gradient is dotted with the offset from that
        // endpoint to the sample point.
        let dot0 = v0.x * frac_x;
        let dot1 = v1.x * (frac_x - 1.0);

        let value = lerp(dot0, dot1, fade(frac_x));
        remap(value, -RAW_HALF_RANGE, RAW_HALF_RANGE, 0.0, 1.0)
    }

    /// Noise values along the x axis: index `i` samples at `origin + i·step`.
    #[must_use]
    pub fn generate_trace(&self, len: usize, origin: f32, step: f32) -> Vec<f32> {
        (0..len)
            .map(|i| self.sample(origin + i as f32 * step))
            .collect()
    }
}

impl Default for Perlin1D {
    fn default() -> Self {
        Self::new()
    }
}
