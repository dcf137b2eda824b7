use super::Point2;
use crate::geometry::Edge2;

/// Returns the minimum distance from `point` to the bounded segment `edge`.
#[must_use]
pub fn point_segment_distance(point: &Point2, edge: &Edge2) -> f64 {
    let d = edge.vector();
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return nalgebra::distance(point, edge.start());
    }

    // Project onto the supporting line, clamp to the segment.
    let t = ((point - edge.start()).dot(&d) / len_sq).clamp(0.0, 1.0);
    nalgebra::distance(point, &edge.point_at(t))
}
