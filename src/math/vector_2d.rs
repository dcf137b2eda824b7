use super::{Vector, Vector2, TOLERANCE};
use crate::error::GeometryError;

/// 2D cross product: `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` is counter-clockwise from `a`.
#[inline]
#[must_use]
pub fn perp_dot(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Counter-clockwise (left-pointing) normal, same length as `v`.
#[inline]
#[must_use]
pub fn ccw_normal(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Clockwise (right-pointing) normal, same length as `v`.
#[inline]
#[must_use]
pub fn cw_normal(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Normalizes `v` to unit length.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if `v` is shorter than [`TOLERANCE`].
pub fn unit<const D: usize>(v: &Vector<D>) -> Result<Vector<D>, GeometryError> {
    v.try_normalize(TOLERANCE).ok_or(GeometryError::ZeroVector)
}
