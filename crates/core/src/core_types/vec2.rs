//! Vector type alias for 2D gradient directions.

use nalgebra::Vector2;

/// 2D vector type for gradient directions and lattice-cell offsets.
///
/// This is a simple alias for `nalgebra::Vector2<f32>`, used throughout
/// the samplers for corner gradients and the offsets dotted against them.
pub type Vec2 = Vector2<f32>;
