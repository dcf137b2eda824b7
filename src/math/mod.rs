pub mod distance_2d;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod orientation;
pub mod polygon_2d;
pub mod vector_2d;

use std::cmp::Ordering;

/// Point in `D`-dimensional space.
pub type Point<const D: usize> = nalgebra::Point<f64, D>;

/// Coordinate difference in `D`-dimensional space.
pub type Vector<const D: usize> = nalgebra::SVector<f64, D>;

/// 2D point type.
pub type Point2 = Point<2>;

/// 3D point type.
pub type Point3 = Point<3>;

/// 2D vector type.
pub type Vector2 = Vector<2>;

/// 3D vector type.
pub type Vector3 = Vector<3>;

/// Global absolute tolerance for coordinate comparisons.
///
/// Fixed, not scaled with input magnitude: callers working with very large
/// or very small coordinates should normalize first.
pub const TOLERANCE: f64 = 1e-8;

/// Returns `true` if every coordinate of `a` and `b` differs by at most [`TOLERANCE`].
#[must_use]
pub fn points_coincide<const D: usize>(a: &Point<D>, b: &Point<D>) -> bool {
    a.coords
        .iter()
        .zip(b.coords.iter())
        .all(|(x, y)| (x - y).abs() <= TOLERANCE)
}

/// Orders 2D points by x, breaking ties by y.
///
/// Exact comparison: this is the sweep order of the monotone triangulation.
#[must_use]
pub fn lex_cmp(a: &Point2, b: &Point2) -> Ordering {
    cmp_f64(a.x, b.x).then_with(|| cmp_f64(a.y, b.y))
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
