//! Two-dimensional gradient noise.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core_types::permutation::{cell_index, corner_hash, LATTICE_WRAP};
use crate::error::NoiseError;

use super::gradient::GradientSet;
use super::interp::{fade, lerp, remap, RAW_HALF_RANGE};

/// Two-dimensional gradient noise sampler.
///
/// The bilinear analogue of [`Perlin1D`]: four lattice corners per cell, one
/// gradient each, blended along both axes with the quintic fade. The same
/// immutability rules apply — build once, share freely across threads,
/// rebuild to change the vector count.
///
/// [`Perlin1D`]: super::Perlin1D
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Perlin2D {
    gradients: GradientSet,
}

impl Perlin2D {
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
        debug!(count, "built 2D sampler with random gradient pool");
        Ok(Self { gradients })
    }

    /// Number of vectors in the gradient pool.
    #[must_use]
    pub fn gradient_count(&self) -> usize {
        self.gradients.len()
    }

    /// Noise value at `(x, y)`, nominally in `[0, 1]`.
    ///
    /// Exactly 0.5 at integer lattice points; unclamped elsewhere.
    /// Non-finite inputs propagate to non-finite outputs.
    #[must_use]
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let cell_x = cell_index(x);
        let cell_y = cell_index(y);
        let cell_x1 = (cell_x + 1) % LATTICE_WRAP;
        let cell_y1 = (cell_y + 1) % LATTICE_WRAP;

        // Corner order: (0,0), (1,0), (0,1), (1,1).
        let h00 = corner_hash(cell_x, cell_y);
        let h10 = corner_hash(cell_x1, cell_y);
        let h01 = corner_hash(cell_x, cell_y1);
        let h11 = corner_hash(cell_x1, cell_y1);

        let frac_x = x - x.floor();
        let frac_y = y - y.floor();

        let v00 = self.gradients.select(h00);
        let v10 = self.gradients.select(h10);
        let v01 = self.gradients.select(h01);
        let v11 = self.gradients.select(h11);

        // Each corner gradient is dotted with the offset from that corner to
        // the sample point.
        let dot00 = v00.x * frac_x + v00.y * frac_y;
        let dot10 = v10.x * (frac_x - 1.0) + v10.y * frac_y;
        let dot01 = v01.x * frac_x + v01.y * (frac_y - 1.0);
        let dot11 = v11.x * (frac_x - 1.0) + v11.y * (frac_y - 1.0);

        let fade_x = fade(frac_x);
        let fade_y = fade(frac_y);

        let value = lerp(
            lerp(dot00, dot10, fade_x),
            lerp(dot01, dot11, fade_x),
            fade_y,
        );
        remap(value, -RAW_HALF_RANGE, RAW_HALF_RANGE, 0.0, 1.0)
    }
}

impl Default for Perlin2D {
    fn default() -> Self {
        Self::new()
    }
}
