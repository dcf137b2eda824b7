use super::vector_2d::perp_dot;
use super::{points_coincide, Point2};
use crate::geometry::Edge2;

/// Position of a point relative to a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Strictly left of the supporting line.
    Left,
    /// Strictly right of the supporting line.
    Right,
    /// On the supporting line, past the destination.
    Beyond,
    /// On the supporting line, before the origin.
    Behind,
    /// On the segment, strictly between its endpoints.
    Between,
    /// Coincides with the edge's origin.
    Origin,
    /// Coincides with the edge's destination.
    Destination,
}

/// Classifies `point` against the directed `edge`.
///
/// The side is the exact sign of the 2D cross product; only the collinear
/// case looks at the position along the segment.
#[must_use]
pub fn classify(edge: &Edge2, point: &Point2) -> Orientation {
    let a = edge.vector();
    let b = point - edge.start();
    let sa = perp_dot(&a, &b);

    if sa > 0.0 {
        return Orientation::Left;
    }
    if sa < 0.0 {
        return Orientation::Right;
    }
    if points_coincide(edge.start(), point) {
        return Orientation::Origin;
    }
    if points_coincide(edge.end(), point) {
        return Orientation::Destination;
    }
    if a.x * b.x < 0.0 || a.y * b.y < 0.0 {
        return Orientation::Behind;
    }
    if a.norm_squared() < b.norm_squared() {
        return Orientation::Beyond;
    }
    Orientation::Between
}
