//! Error types for sampler construction.

use thiserror::Error;

/// Errors raised while building a sampler or its gradient pool.
///
/// Sampling itself is total over the reals and never fails; construction is
/// the only fallible step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoiseError {
    /// A random gradient pool was requested with fewer than two vectors.
    ///
    /// Corner selection indexes the pool by `hash % (len - 1)`, which is a
    /// division by zero for a single-vector pool. Construction rejects the
    /// request up front rather than clamping the count.
    #[error("gradient pool needs at least 2 vectors, got {count}")]
    GradientPoolTooSmall {
        /// The rejected vector count.
        count: usize,
    },
}
