use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::{Edge2, InteriorSide, Polygon2};
use crate::math::orientation::classify;
use crate::math::polygon_2d::{lex_max_index, lex_min_index};
use crate::math::Point2;

use super::chain::{first_non_monotone, ChainSweep, Cursor};
use super::TriangulateParams;

/// Triangulates a polygon that is monotone in the x-then-y order.
///
/// Emits `n - 2` triangles, each a 3-vertex polygon tagged with the
/// interior side matching its own winding.
pub struct TriangulateMonotone<'a> {
    polygon: &'a Polygon2,
    params: TriangulateParams,
}

impl<'a> TriangulateMonotone<'a> {
    /// Creates a new `TriangulateMonotone` operation with default parameters.
    #[must_use]
    pub fn new(polygon: &'a Polygon2) -> Self {
        Self {
            polygon,
            params: TriangulateParams::default(),
        }
    }

    /// Sets custom triangulation parameters.
    #[must_use]
    pub fn with_params(mut self, params: TriangulateParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the sweep, returning the triangles.
    ///
    /// A polygon with fewer than 3 vertices gives an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::NonMonotone`] with the offending vertex
    /// index of the input when validation is enabled and either chain
    /// between the extreme vertices doubles back.
    pub fn execute(&self) -> Result<Vec<Polygon2>> {
        let n = self.polygon.len();
        if n < 3 {
            debug!(vertices = n, "triangulation input has fewer than 3 vertices");
            return Ok(Vec::new());
        }

        // Sweep over a clockwise view; `to_input` maps its indices back.
        let reversed = self.polygon.signed_area() > 0.0;
        let points: Vec<Point2> = if reversed {
            self.polygon.vertices().iter().rev().copied().collect()
        } else {
            self.polygon.vertices().to_vec()
        };
        let to_input = |i: usize| if reversed { n - 1 - i } else { i };

        let (Some(start), Some(end)) = (lex_min_index(&points), lex_max_index(&points)) else {
            return Ok(Vec::new());
        };

        if self.params.validate_monotone {
            if let Some(i) = first_non_monotone(&points, start, end) {
                return Err(OperationError::NonMonotone { index: to_input(i) }.into());
            }
        }

        let triangles = sweep(&points, start);
        debug!(triangles = triangles.len(), "triangulation finished");
        Ok(triangles)
    }
}

fn sweep(points: &[Point2], start: usize) -> Vec<Polygon2> {
    let n = points.len();
    let mut triangles = Vec::with_capacity(n - 2);
    let mut emit = |a: usize, b: usize, c: usize| {
        trace!(a, b, c, "triangle");
        triangles.push(triangle([points[a], points[b], points[c]]));
    };

    let mut cursors = ChainSweep::new(points, start);
    let first = cursors.advance();
    let mut stack = vec![
        Cursor {
            index: start,
            chain: first.chain.other(),
        },
        first,
    ];

    for step in 2..n {
        let current = cursors.advance();
        let Some(&top) = stack.last() else {
            break;
        };

        if step < n - 1 && current.chain == top.chain {
            let interior = current.chain.interior();
            while stack.len() > 1 {
                let top = stack[stack.len() - 1];
                let below = stack[stack.len() - 2];
                let edge = Edge2::new(points[below.index], points[top.index]);
                if classify(&edge, &points[current.index]) != interior {
                    break;
                }
                emit(current.index, below.index, top.index);
                stack.pop();
            }
            stack.push(current);
        } else {
            // Chain switch, or the last vertex closing both chains.
            while stack.len() > 1 {
                let top = stack[stack.len() - 1];
                let below = stack[stack.len() - 2];
                emit(current.index, top.index, below.index);
                stack.pop();
            }
            stack.clear();
            stack.push(top);
            stack.push(current);
        }
    }
    triangles
}

fn triangle(corners: [Point2; 3]) -> Polygon2 {
    let mut tri = Polygon2::from_points(corners, InteriorSide::Right);
    if tri.winding() == Some(InteriorSide::Left) {
        tri = Polygon2::from_points(corners, InteriorSide::Left);
    }
    tri
}
