mod chain;
mod monotone;

pub use monotone::TriangulateMonotone;

use crate::error::Result;
use crate::geometry::Polygon2;

/// Parameters for monotone triangulation.
#[derive(Debug, Clone, Copy)]
pub struct TriangulateParams {
    /// Reject inputs whose chains are not monotone instead of emitting
    /// triangles that do not cover the polygon.
    pub validate_monotone: bool,
}

impl Default for TriangulateParams {
    fn default() -> Self {
        Self {
            validate_monotone: true,
        }
    }
}

/// Triangulates a monotone polygon with default [`TriangulateParams`].
///
/// # Errors
///
/// See [`TriangulateMonotone::execute`].
pub fn triangulate_monotone(polygon: &Polygon2) -> Result<Vec<Polygon2>> {
    TriangulateMonotone::new(polygon).execute()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{OperationError, PolykernError};
    use crate::geometry::InteriorSide;
    use crate::math::{init_test_tracing, Point2};
    use approx::assert_relative_eq;

    fn poly(coords: &[(f64, f64)], side: InteriorSide) -> Polygon2 {
        Polygon2::from_points(coords.iter().map(|&(x, y)| Point2::new(x, y)), side)
    }

    fn total_area(triangles: &[Polygon2]) -> f64 {
        triangles.iter().map(Polygon2::area).sum()
    }

    fn pentagon() -> Polygon2 {
        poly(
            &[(0.0, 0.0), (2.0, 1.0), (3.0, 0.0), (2.0, 3.0), (0.0, 2.0)],
            InteriorSide::Left,
        )
    }

    /// Monotone polygon with a reflex vertex on its upper chain.
    fn notched() -> Polygon2 {
        poly(
            &[
                (0.0, 0.0),
                (2.0, -1.0),
                (4.0, 0.0),
                (3.0, 1.0),
                (2.0, 0.2),
                (1.0, 1.0),
            ],
            InteriorSide::Left,
        )
    }

    #[test]
    fn pentagon_gives_three_triangles() {
        init_test_tracing();
        let input = pentagon();
        let triangles = triangulate_monotone(&input).unwrap();
        assert_eq!(triangles.len(), 3);
        assert_relative_eq!(total_area(&triangles), input.area(), epsilon = 1e-12);
        assert_relative_eq!(total_area(&triangles), 5.0, epsilon = 1e-12);
        for tri in &triangles {
            assert_eq!(tri.len(), 3);
            assert!(tri.vertices().iter().all(|p| input.vertices().contains(p)));
        }
    }

    #[test]
    fn reflex_vertex_is_respected() {
        init_test_tracing();
        let input = notched();
        let triangles = triangulate_monotone(&input).unwrap();
        assert_eq!(triangles.len(), input.len() - 2);
        assert_relative_eq!(total_area(&triangles), 4.2, epsilon = 1e-12);
    }

    #[test]
    fn clockwise_input_gives_same_area() {
        let input = notched().reversed();
        let triangles = triangulate_monotone(&input).unwrap();
        assert_eq!(triangles.len(), 4);
        assert_relative_eq!(total_area(&triangles), input.area(), epsilon = 1e-12);
    }

    #[test]
    fn convex_polygon_count_and_area() {
        let input = poly(
            &[
                (0.0, 0.0),
                (1.0, -1.0),
                (3.0, -1.0),
                (4.0, 0.0),
                (3.0, 1.0),
                (1.0, 1.0),
            ],
            InteriorSide::Left,
        );
        let triangles = triangulate_monotone(&input).unwrap();
        assert_eq!(triangles.len(), 4);
        assert_relative_eq!(total_area(&triangles), input.area(), epsilon = 1e-12);
    }

    #[test]
    fn triangles_are_tagged_by_winding() {
        for tri in triangulate_monotone(&pentagon()).unwrap() {
            assert_eq!(tri.winding(), Some(tri.interior_side()));
        }
    }

    #[test]
    fn non_monotone_input_is_rejected() {
        let input = poly(
            &[
                (0.0, 0.0),
                (4.0, 0.0),
                (4.0, 2.0),
                (1.0, 1.0),
                (2.0, 3.0),
                (0.0, 3.0),
            ],
            InteriorSide::Left,
        );
        let err = triangulate_monotone(&input).unwrap_err();
        assert!(matches!(
            err,
            PolykernError::Operation(OperationError::NonMonotone { index: 3 })
        ));

        let unchecked = TriangulateMonotone::new(&input)
            .with_params(TriangulateParams {
                validate_monotone: false,
            })
            .execute();
        assert!(unchecked.is_ok());
    }

    #[test]
    fn fewer_than_three_vertices_give_nothing() {
        let segment = poly(&[(0.0, 0.0), (1.0, 0.0)], InteriorSide::Left);
        assert!(triangulate_monotone(&segment).unwrap().is_empty());
        assert!(triangulate_monotone(&Polygon2::default()).unwrap().is_empty());
    }

    #[test]
    fn input_is_not_modified() {
        let input = pentagon();
        let before = input.clone();
        triangulate_monotone(&input).unwrap();
        assert_eq!(input, before);
    }
}
