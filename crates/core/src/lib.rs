//! Gradient Noise Core Library
//!
//! Deterministic one- and two-dimensional gradient ("Perlin") noise. Given
//! real-valued coordinates, a sampler returns a continuous pseudo-random
//! scalar that is smooth across lattice-cell boundaries.
//!
//! ## Design
//!
//! - One shared, immutable permutation table hashes lattice coordinates for
//!   every sampler; coordinate wraparound uses modulus 255 against the
//!   256-entry table.
//! - Gradient pools come in two flavors: the canonical four unit diagonals,
//!   or N randomly drawn, deliberately non-normalized vectors built from a
//!   caller-supplied randomness source.
//! - Sampling is a pure function of (coordinate, table, pool): no internal
//!   state, no locking, safe concurrent reads. Reconfiguring the vector
//!   count builds a brand-new sampler.
//! - Output is remapped to a nominal `[0, 1]` band without clamping; with
//!   randomized pools it may legitimately leave that band.

// Core types and utilities
pub mod core_types;

// Error types
pub mod error;

// Noise samplers, gradient pools, batch field generation
pub mod sampler;

// Re-export core types
pub use core_types::Vec2;

// Re-export the sampling API
pub use error::NoiseError;
pub use sampler::{FieldSpec, GradientMode, GradientSet, Perlin1D, Perlin2D, SamplerConfig};
