use std::f64::consts::TAU;

use super::{points_coincide, Point3, Vector3};

/// Below this `|n · d|` a line is treated as parallel to a plane.
const PARALLEL_EPSILON: f64 = 1e-6;

/// Tolerance on the angle sum (radians) for the point-in-triangle test.
const ANGLE_EPSILON: f64 = 1e-7;

/// Normal of the plane through three points (not normalized).
fn plane_normal(plane: &[Point3; 3]) -> Vector3 {
    (plane[2] - plane[0]).cross(&(plane[1] - plane[0]))
}

/// Crossing of the infinite line through `line` with the plane through
/// `plane`, with the parameter along `line[0] → line[1]`.
fn line_plane_hit(plane: &[Point3; 3], line: &[Point3; 2]) -> Option<(Point3, f64)> {
    let normal = plane_normal(plane);
    let dir = line[1] - line[0];
    let denom = normal.dot(&dir);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let u = normal.dot(&(plane[0] - line[0])) / denom;
    Some((line[0] + dir * u, u))
}

/// Intersection of the infinite line through `line[0]` and `line[1]` with the
/// plane through the three `plane` points.
///
/// Returns `None` when the line is (nearly) parallel to the plane or the
/// plane points are collinear.
#[must_use]
pub fn line_plane_intersection(plane: &[Point3; 3], line: &[Point3; 2]) -> Option<Point3> {
    line_plane_hit(plane, line).map(|(point, _)| point)
}

/// Sum of the angles subtended at `q` by consecutive triangle vertices.
///
/// Equals 2π exactly when `q` lies inside the triangle (or on its boundary).
fn angle_sum(triangle: &[Point3; 3], q: &Point3) -> f64 {
    let mut sum = 0.0;
    for i in 0..3 {
        let v1 = triangle[i] - q;
        let v2 = triangle[(i + 1) % 3] - q;
        let denom = v1.norm() * v2.norm();
        if denom <= ANGLE_EPSILON {
            // q sits on a vertex.
            return TAU;
        }
        sum += (v1.dot(&v2) / denom).clamp(-1.0, 1.0).acos();
    }
    sum
}

fn in_triangle(triangle: &[Point3; 3], q: &Point3) -> bool {
    (angle_sum(triangle, q) - TAU).abs() <= ANGLE_EPSILON
}

/// Intersection of the infinite line through `line` with a triangle.
#[must_use]
pub fn line_triangle_intersection(triangle: &[Point3; 3], line: &[Point3; 2]) -> Option<Point3> {
    let (point, _) = line_plane_hit(triangle, line)?;
    in_triangle(triangle, &point).then_some(point)
}

/// Intersection of the bounded segment `segment[0] → segment[1]` with a triangle.
#[must_use]
pub fn segment_triangle_intersection(
    triangle: &[Point3; 3],
    segment: &[Point3; 2],
) -> Option<Point3> {
    let (point, u) = line_plane_hit(triangle, segment)?;
    if !(-ANGLE_EPSILON..=1.0 + ANGLE_EPSILON).contains(&u) {
        return None;
    }
    in_triangle(triangle, &point).then_some(point)
}

/// Points where the edges of either triangle pierce the other triangle.
///
/// Each triangle edge is treated as a bounded segment. Coincident hits (an
/// edge endpoint shared by two edges) are reported once. Coplanar triangles
/// produce no points.
#[must_use]
pub fn triangle_triangle_intersection(a: &[Point3; 3], b: &[Point3; 3]) -> Vec<Point3> {
    let mut points: Vec<Point3> = Vec::new();
    for (tri, other) in [(a, b), (b, a)] {
        for i in 0..3 {
            let edge = [tri[i], tri[(i + 1) % 3]];
            if let Some(hit) = segment_triangle_intersection(other, &edge) {
                if !points.iter().any(|p| points_coincide(p, &hit)) {
                    points.push(hit);
                }
            }
        }
    }
    points
}
