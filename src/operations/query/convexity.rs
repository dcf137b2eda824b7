use crate::geometry::{Edge2, InteriorSide, Polygon2};
use crate::math::orientation::{classify, Orientation};

/// Returns `true` if no vertex triple turns against the polygon's interior side.
///
/// For a `Right`-interior polygon every turn must be clockwise (no `Left`
/// classification), for a `Left`-interior polygon every turn must be
/// counter-clockwise. Collinear triples are allowed. Fewer than 3 vertices
/// is not a polygon and reports `false`.
#[must_use]
pub fn is_convex(polygon: &Polygon2) -> bool {
    let pts = polygon.vertices();
    let n = pts.len();
    if n < 3 {
        return false;
    }
    let reflex = match polygon.interior_side() {
        InteriorSide::Left => Orientation::Right,
        InteriorSide::Right => Orientation::Left,
    };
    (0..n).all(|i| {
        let edge = Edge2::new(pts[i], pts[(i + 1) % n]);
        classify(&edge, &pts[(i + 2) % n]) != reflex
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn poly(coords: &[(f64, f64)], side: InteriorSide) -> Polygon2 {
        Polygon2::from_points(coords.iter().map(|&(x, y)| Point2::new(x, y)), side)
    }

    #[test]
    fn square_is_convex_in_both_windings() {
        let ccw = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], InteriorSide::Left);
        assert!(is_convex(&ccw));
        assert!(is_convex(&ccw.reversed()));
    }

    #[test]
    fn mismatched_tag_is_not_convex() {
        let ccw = poly(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], InteriorSide::Right);
        assert!(!is_convex(&ccw));
    }

    #[test]
    fn l_shape_is_not_convex() {
        let l = poly(
            &[(0.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 2.0), (0.0, 2.0)],
            InteriorSide::Left,
        );
        assert!(!is_convex(&l));
    }

    #[test]
    fn collinear_vertex_is_allowed() {
        let tri = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (1.0, 1.0)], InteriorSide::Left);
        assert!(is_convex(&tri));
    }

    #[test]
    fn too_few_vertices() {
        assert!(!is_convex(&poly(&[(0.0, 0.0), (1.0, 0.0)], InteriorSide::Left)));
    }
}
