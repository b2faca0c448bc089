//! Gradient pools assigned to lattice corners.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core_types::Vec2;
use crate::error::NoiseError;

/// Ordered pool of gradient vectors selectable by lattice hash.
///
/// A pool is built once, at sampler construction, and never mutated in place:
/// changing the vector count means building a whole new pool. Two modes
/// exist, the fixed canonical pool of four unit diagonals and a randomized
/// pool of `count` vectors with components drawn uniformly from `[-1, 1)`.
///
/// Randomized vectors are deliberately not normalized, so their magnitudes
/// range up to `√2` and sampled noise may leave the nominal `[0, 1]` output
/// band.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientSet {
    vectors: Vec<Vec2>,
}

impl GradientSet {
    /// The canonical pool: exactly the four unit diagonals.
    #[must_use]
    pub fn canonical() -> Self {
        Self {
            vectors: vec![
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(-1.0, -1.0),
            ],
        }
    }

    /// Pool of `count` vectors with x and y drawn uniformly from `[-1, 1)`.
    ///
    /// The randomness source is supplied by the caller so tests can inject a
    /// seeded generator.
    ///
    /// # Errors
    ///
    /// [`NoiseError::GradientPoolTooSmall`] if `count < 2`. Selection divides
    /// by `count - 1`, so a single-vector pool is rejected rather than
    /// clamped.
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self, NoiseError> {
        if count < 2 {
            return Err(NoiseError::GradientPoolTooSmall { count });
        }
        let vectors = (0..count)
            .map(|_| Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
            .collect();
        Ok(Self { vectors })
    }

    /// Number of vectors in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the pool is empty. Never true for pools built by this module.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector assigned to a corner hash.
    ///
    /// Indexes by `hash % (len - 1)`, not `hash % len`: the last vector in
    /// the pool is structurally unreachable via selection.
    #[inline]
    pub(crate) fn select(&self, hash: usize) -> Vec2 {
        self.vectors[hash % (self.vectors.len() - 1)]
    }

    /// Pool with hand-planted vectors, for tests that need full control over
    /// corner assignment.
    #[cfg(test)]
    pub(crate) fn from_vectors(vectors: Vec<Vec2>) -> Self {
        Self { vectors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn canonical_pool_is_the_four_unit_diagonals() {
        let set = GradientSet::canonical();
        assert_eq!(set.len(), 4);
        assert_eq!(set.vectors[0], Vec2::new(1.0, 1.0));
        assert_eq!(set.vectors[1], Vec2::new(-1.0, 1.0));
        assert_eq!(set.vectors[2], Vec2::new(1.0, -1.0));
        assert_eq!(set.vectors[3], Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn random_pool_components_stay_in_half_open_unit_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = GradientSet::random(64, &mut rng).unwrap();
        assert_eq!(set.len(), 64);
        for v in &set.vectors {
            assert!((-1.0..1.0).contains(&v.x), "x component {} out of range", v.x);
            assert!((-1.0..1.0).contains(&v.y), "y component {} out of range", v.y);
        }
    }

    #[test]
    fn random_pool_rejects_degenerate_counts() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            GradientSet::random(0, &mut rng),
            Err(NoiseError::GradientPoolTooSmall { count: 0 })
        );
        assert_eq!(
            GradientSet::random(1, &mut rng),
            Err(NoiseError::GradientPoolTooSmall { count: 1 })
        );
    }

    #[test]
    fn random_pool_accepts_minimal_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let set = GradientSet::random(2, &mut rng).unwrap();
        assert_eq!(set.len(), 2);
        // With len 2 every hash selects index 0.
        for hash in 0..512 {
            assert_eq!(set.select(hash), set.vectors[0]);
        }
    }

    #[test]
    fn selection_never_reaches_last_vector() {
        // Plant a sentinel in the last slot; no hash may select it.
        let sentinel = Vec2::new(9.0, 9.0);
        let set = GradientSet {
            vectors: vec![
                Vec2::new(0.1, 0.2),
                Vec2::new(0.3, 0.4),
                Vec2::new(0.5, 0.6),
                sentinel,
            ],
        };
        for hash in 0..=512 {
            assert_ne!(set.select(hash), sentinel, "hash {hash} reached the last vector");
        }
    }

    #[test]
    fn same_seed_builds_identical_pools() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let pool_a = GradientSet::random(16, &mut a).unwrap();
        let pool_b = GradientSet::random(16, &mut b).unwrap();
        assert_eq!(pool_a, pool_b);
    }
}
