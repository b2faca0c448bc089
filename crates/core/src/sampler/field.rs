//! Batch generation of noise fields.
//!
//! Callers that fill whole images or grids sample the same noise many times
//! per frame. This module provides the batch form: a row-major grid of sample
//! points described by a [`FieldSpec`], filled row-parallel with `rayon`.
//! Mapping values to display intensities stays on the caller's side.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::perlin2d::Perlin2D;

/// Row-major grid of sample points for batch generation.
///
/// Grid point `(col, row)` samples the noise at
/// `(origin.0 + col·step, origin.1 + row·step)`. A moving `origin` gives
/// scrolling fields; `step` controls the feature frequency.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Grid width in samples.
    pub width: usize,
    /// Grid height in samples.
    pub height: usize,
    /// Coordinate of grid point (0, 0).
    pub origin: (f32, f32),
    /// Coordinate distance between adjacent samples.
    pub step: f32,
}

impl FieldSpec {
    /// Grid anchored at the coordinate origin.
    #[must_use]
    pub fn new(width: usize, height: usize, step: f32) -> Self {
        Self {
            width,
            height,
            origin: (0.0, 0.0),
            step,
        }
    }

    /// Same grid shifted to start at `(x, y)`.
    #[must_use]
    pub fn with_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    /// Total number of samples in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Perlin2D {
    /// Noise values for every point of `spec`, row-major (`row * width + col`).
    ///
    /// Each value equals the corresponding [`sample`](Perlin2D::sample) call
    /// exactly; rows are filled in parallel.
    #[must_use]
    pub fn generate_field(&self, spec: &FieldSpec) -> Vec<f32> {
        let mut field = vec![0.0; spec.len()];

        field
            .par_chunks_mut(spec.width.max(1))
            .enumerate()
            .for_each(|(row, out)| {
                let y = spec.origin.1 + row as f32 * spec.step;
                for (col, value) in out.iter_mut().enumerate() {
                    let x = spec.origin.0 + col as f32 * spec.step;
                    *value = self.sample(x, y);
                }
            });

        debug!(
            width = spec.width,
            height = spec.height,
            "generated noise field"
        );
        field
    }
}
