use std::ops::Range;

use crate::error::GeometryError;
use crate::math::polygon_2d::{bounds_2d, signed_area_2d};
use crate::math::{Point, Point2};

use super::edge::Edge;

/// Which side of each directed edge is the polygon's interior.
///
/// Walking the vertices in stored order, `Left` means the interior lies to
/// the left of every edge (counter-clockwise winding), `Right` the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteriorSide {
    #[default]
    Left,
    Right,
}

impl InteriorSide {
    /// Returns the other side.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A cyclic ordered sequence of points plus an interior-side tag.
///
/// The last vertex connects back to the first. The tag is not checked
/// against the actual winding; algorithms assume the two agree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<const D: usize> {
    vertices: Vec<Point<D>>,
    interior: InteriorSide,
}

/// Polygon in the plane.
pub type Polygon2 = Polygon<2>;

impl<const D: usize> Polygon<D> {
    /// Creates an empty polygon with the given interior side.
    #[must_use]
    pub fn new(interior: InteriorSide) -> Self {
        Self {
            vertices: Vec::new(),
            interior,
        }
    }

    /// Creates a polygon from an ordered list of vertices.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point<D>>, interior: InteriorSide) -> Self {
        Self {
            vertices: points.into_iter().collect(),
            interior,
        }
    }

    /// Returns the interior-side tag.
    #[must_use]
    pub fn interior_side(&self) -> InteriorSide {
        self.interior
    }

    /// Appends a vertex after the current last vertex.
    pub fn push_vertex(&mut self, point: Point<D>) {
        self.vertices.push(point);
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in stored order.
    #[must_use]
    pub fn vertices(&self) -> &[Point<D>] {
        &self.vertices
    }

    /// Vertex at `index`, if any.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Point<D>> {
        self.vertices.get(index)
    }

    /// Cyclic successor of `index`: the last vertex is followed by the first.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        if index + 1 >= self.vertices.len() {
            0
        } else {
            index + 1
        }
    }

    /// Cyclic predecessor of `index`: the first vertex is preceded by the last.
    #[must_use]
    pub fn prev_index(&self, index: usize) -> usize {
        if index == 0 {
            self.vertices.len().saturating_sub(1)
        } else {
            index - 1
        }
    }

    /// Inserts `point` so that it ends up at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index > len()`.
    pub fn insert(&mut self, index: usize, point: Point<D>) -> Result<(), GeometryError> {
        if index > self.vertices.len() {
            return Err(GeometryError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            });
        }
        self.vertices.insert(index, point);
        Ok(())
    }

    /// Removes and returns the vertex at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if there is no such vertex.
    pub fn remove(&mut self, index: usize) -> Result<Point<D>, GeometryError> {
        if index >= self.vertices.len() {
            return Err(GeometryError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            });
        }
        Ok(self.vertices.remove(index))
    }

    /// Cuts the contiguous vertex range out of this polygon into a new one
    /// with the same interior side.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRange`] if the range is reversed or
    /// extends past the last vertex.
    pub fn split(&mut self, range: Range<usize>) -> Result<Self, GeometryError> {
        if range.start > range.end || range.end > self.vertices.len() {
            return Err(GeometryError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.vertices.len(),
            });
        }
        Ok(Self {
            vertices: self.vertices.drain(range).collect(),
            interior: self.interior,
        })
    }

    /// Lazily enumerates the edges between consecutive vertices,
    /// wrapping from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Edge<D>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the polygon with the vertex order reversed and the
    /// interior side flipped, describing the same region.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self.vertices.iter().rev().copied().collect(),
            interior: self.interior.flipped(),
        }
    }
}

impl Polygon<2> {
    /// Signed shoelace area: positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Unsigned enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// The interior side implied by the actual vertex order.
    ///
    /// Returns `None` for polygons with zero signed area.
    #[must_use]
    pub fn winding(&self) -> Option<InteriorSide> {
        let area = self.signed_area();
        if area > 0.0 {
            Some(InteriorSide::Left)
        } else if area < 0.0 {
            Some(InteriorSide::Right)
        } else {
            None
        }
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        bounds_2d(&self.vertices)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn square() -> Polygon2 {
        Polygon2::from_points(
            [
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            InteriorSide::Left,
        )
    }

    #[test]
    fn cyclic_indices_wrap() {
        let poly = square();
        assert_eq!(poly.next_index(3), 0);
        assert_eq!(poly.next_index(1), 2);
        assert_eq!(poly.prev_index(0), 3);
        assert_eq!(poly.prev_index(2), 1);
    }

    #[test]
    fn edges_wrap_last_to_first() {
        let poly = square();
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3].start(), &Point2::new(0.0, 1.0));
        assert_eq!(edges[3].end(), &Point2::new(0.0, 0.0));
    }

    #[test]
    fn insert_and_remove() {
        let mut poly = square();
        poly.insert(1, Point2::new(0.5, 0.0)).unwrap();
        assert_eq!(poly.len(), 5);
        assert_eq!(poly.vertex(1), Some(&Point2::new(0.5, 0.0)));
        let removed = poly.remove(1).unwrap();
        assert_eq!(removed, Point2::new(0.5, 0.0));
        assert_eq!(poly, square());
    }

    #[test]
    fn insert_out_of_range_fails() {
        let mut poly = square();
        assert!(matches!(
            poly.insert(7, Point2::origin()),
            Err(GeometryError::IndexOutOfRange { index: 7, len: 4 })
        ));
        assert!(poly.remove(4).is_err());
    }

    #[test]
    fn split_moves_range_into_new_polygon() {
        let mut poly = square();
        let part = poly.split(1..3).unwrap();
        assert_eq!(part.vertices(), &[Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)]);
        assert_eq!(part.interior_side(), InteriorSide::Left);
        assert_eq!(poly.vertices(), &[Point2::new(0.0, 0.0), Point2::new(0.0, 1.0)]);
    }

    #[test]
    fn split_rejects_bad_range() {
        let mut poly = square();
        assert!(poly.split(2..9).is_err());
        assert_eq!(poly.len(), 4);
    }

    #[test]
    fn area_and_winding() {
        let poly = square();
        assert_relative_eq!(poly.signed_area(), 1.0);
        assert_eq!(poly.winding(), Some(InteriorSide::Left));
        let rev = poly.reversed();
        assert_relative_eq!(rev.signed_area(), -1.0);
        assert_relative_eq!(rev.area(), 1.0);
        assert_eq!(rev.winding(), Some(InteriorSide::Right));
        assert_eq!(rev.interior_side(), InteriorSide::Right);
    }

    #[test]
    fn bounds_of_square() {
        let (min, max) = square().bounds().unwrap();
        assert_eq!(min, Point2::new(0.0, 0.0));
        assert_eq!(max, Point2::new(1.0, 1.0));
        assert!(Polygon2::default().bounds().is_none());
    }

    #[test]
    fn polygon_in_space_enumerates_edges() {
        let poly = Polygon::<3>::from_points(
            [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
            InteriorSide::Left,
        );
        let total: f64 = poly.edges().map(|e| e.length()).sum();
        assert_relative_eq!(total, 2.0_f64.sqrt() * 3.0);
    }
}
