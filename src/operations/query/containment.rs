use crate::geometry::{Edge2, Polygon2};
use crate::math::distance_2d::point_segment_distance;
use crate::math::{Point2, TOLERANCE};

/// Location of a point relative to a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    Outside,
    OnBoundary,
}

/// Even-odd ray-casting test.
///
/// Casts a horizontal ray towards negative x and counts boundary crossings.
/// Points exactly on the boundary may report either answer; use
/// [`locate_point`] when that matters.
#[must_use]
pub fn is_inside_polygon(polygon: &Polygon2, point: &Point2) -> bool {
    even_odd(polygon.vertices(), point)
}

/// Classifies `point` as inside, outside, or within [`TOLERANCE`] of the boundary.
#[must_use]
pub fn locate_point(polygon: &Polygon2, point: &Point2) -> PointLocation {
    locate_in_ring(polygon.vertices(), point)
}

pub(crate) fn locate_in_ring(ring: &[Point2], point: &Point2) -> PointLocation {
    let n = ring.len();
    if n == 0 {
        return PointLocation::Outside;
    }
    let on_boundary = (0..n).any(|i| {
        let edge = Edge2::new(ring[i], ring[(i + 1) % n]);
        point_segment_distance(point, &edge) <= TOLERANCE
    });
    if on_boundary {
        PointLocation::OnBoundary
    } else if even_odd(ring, point) {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

fn even_odd(ring: &[Point2], point: &Point2) -> bool {
    let n = ring.len();
    let mut inside = false;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        let straddles = (a.y < point.y && b.y >= point.y) || (b.y < point.y && a.y >= point.y);
        if straddles && a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x) < point.x {
            inside = !inside;
        }
    }
    inside
}
