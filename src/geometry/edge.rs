use crate::error::GeometryError;
use crate::math::vector_2d::{ccw_normal, cw_normal, unit};
use crate::math::{Point, Vector, Vector2};

/// A directed line segment from `start` to `end`.
///
/// The parametric form is: `P(t) = start + t * (end - start)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<const D: usize> {
    start: Point<D>,
    end: Point<D>,
}

/// Directed segment in the plane.
pub type Edge2 = Edge<2>;

/// Directed segment in space.
pub type Edge3 = Edge<3>;

impl<const D: usize> Edge<D> {
    /// Creates a new edge going from `start` to `end`.
    #[must_use]
    pub fn new(start: Point<D>, end: Point<D>) -> Self {
        Self { start, end }
    }

    /// Returns the origin of the edge.
    #[must_use]
    pub fn start(&self) -> &Point<D> {
        &self.start
    }

    /// Returns the destination of the edge.
    #[must_use]
    pub fn end(&self) -> &Point<D> {
        &self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn vector(&self) -> Vector<D> {
        self.end - self.start
    }

    /// Euclidean length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Unit direction from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero-length edge.
    pub fn direction(&self) -> Result<Vector<D>, GeometryError> {
        unit(&self.vector())
    }

    /// Returns the same segment traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Point at parameter `t`; `0` is `start`, `1` is `end`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point<D> {
        self.start + self.vector() * t
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point<D> {
        nalgebra::center(&self.start, &self.end)
    }
}

impl Edge<2> {
    /// Unit normal pointing to the left of the direction of travel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero-length edge.
    pub fn ccw_normal(&self) -> Result<Vector2, GeometryError> {
        unit(&ccw_normal(&self.vector()))
    }

    /// Unit normal pointing to the right of the direction of travel.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] for a zero-length edge.
    pub fn cw_normal(&self) -> Result<Vector2, GeometryError> {
        unit(&cw_normal(&self.vector()))
    }
}
