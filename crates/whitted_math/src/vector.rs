//! Vector helpers with the ray tracer's degenerate-case semantics.

use crate::Vec3;

/// Normalize a vector to unit length.
///
/// Unlike `Vec3::normalize`, the zero vector does not become NaN: it is
/// scaled by `+inf` component-wise, so every component comes out as `+inf`.
/// The value flows through later math and is resolved when colors are clamped.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let mag = v.length();
    if mag == 0.0 {
        Vec3::splat(f32::INFINITY)
    } else {
        v * (1.0 / mag)
    }
}

/// Mirror `d` about the surface normal `n`: `d - 2(n.d)n`.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - n * (2.0 * n.dot(d))
}
