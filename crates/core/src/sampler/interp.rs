//! Interpolation and remapping helpers shared by the samplers.

/// Theoretical half-range of a blended dot product with unit diagonal
/// gradients (`√2 / 2`).
pub(crate) const RAW_HALF_RANGE: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Quintic smoothstep `6t⁵ - 15t⁴ + 10t³`.
///
/// First and second derivatives vanish at 0 and 1, keeping the blended noise
/// C2-continuous across cell boundaries.
#[inline]
pub(crate) fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation between `a` and `b`.
#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Linearly remap `n` from `[in_start, in_stop]` to `[out_start, out_stop]`.
///
/// No clamping: inputs outside the source range map outside the target range.
#[inline]
pub(crate) fn remap(n: f32, in_start: f32, in_stop: f32, out_start: f32, out_stop: f32) -> f32 {
    (n - in_start) / (in_stop - in_start) * (out_stop - out_start) + out_start
}
