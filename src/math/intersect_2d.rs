use super::vector_2d::{ccw_normal, cw_normal, perp_dot};
use super::{Point2, TOLERANCE};
use crate::geometry::{Edge2, InteriorSide};

/// A bounded segment-segment crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// The intersection point, computed on the first segment.
    pub point: Point2,
    /// Parameter along the first segment, in `[0, 1]`.
    pub t: f64,
    /// Parameter along the second segment, in `[0, 1]`.
    pub u: f64,
}

/// Intersection of two bounded segments by the parametric cross-product method.
///
/// Solves `p.start + t * (p.end - p.start) = q.start + u * (q.end - q.start)`
/// and returns the point if both `t` and `u` lie in `[0, 1]` (widened by
/// [`TOLERANCE`] so that endpoint contacts are found). Parallel and
/// collinear segments report no intersection.
#[must_use]
pub fn segment_intersection(p: &Edge2, q: &Edge2) -> Option<SegmentHit> {
    let b = p.vector();
    let d = q.vector();
    let denom = perp_dot(&b, &d);
    if denom.abs() <= TOLERANCE * b.norm() * d.norm() {
        return None;
    }

    let c = q.start() - p.start();
    let t = perp_dot(&c, &d) / denom;
    let u = perp_dot(&c, &b) / denom;

    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t = t.clamp(0.0, 1.0);
        Some(SegmentHit {
            point: p.point_at(t),
            t,
            u: u.clamp(0.0, 1.0),
        })
    } else {
        None
    }
}

/// Result of a half-plane crossing test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitType {
    /// The segments do not cross.
    NoHit,
    /// The probe moves into the reference edge's interior side.
    Entering,
    /// The probe moves out of the reference edge's interior side.
    Exiting,
}

/// Checks whether `probe` enters or exits the half-plane bounded by `reference`.
///
/// `interior` names which side of `reference` (walking from its start to its
/// end) is inside. Returns [`HitType::NoHit`] when the segments do not cross;
/// otherwise the sign of the probe direction against the inward normal decides.
#[must_use]
pub fn hit_query(probe: &Edge2, reference: &Edge2, interior: InteriorSide) -> HitType {
    if segment_intersection(probe, reference).is_none() {
        return HitType::NoHit;
    }
    let r = reference.vector();
    let inward = match interior {
        InteriorSide::Left => ccw_normal(&r),
        InteriorSide::Right => cw_normal(&r),
    };
    if probe.vector().dot(&inward) > 0.0 {
        HitType::Entering
    } else {
        HitType::Exiting
    }
}

/// Relationship between the supporting lines of two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineIntersection {
    /// Both segments lie on the same line.
    Collinear,
    /// The lines are parallel and distinct.
    Parallel,
    /// The lines cross at parameter `t` along the first segment.
    ///
    /// `t` is not restricted to `[0, 1]`.
    Skew { t: f64 },
}

/// Classifies two segments' supporting lines and, when they cross, returns
/// the parametric position of the crossing along `p`.
///
/// Useful where only an ordering key along `p` is needed, not the point.
#[must_use]
pub fn intersect(p: &Edge2, q: &Edge2) -> LineIntersection {
    let qv = q.vector();
    let n = cw_normal(&qv);
    let denom = n.dot(&p.vector());

    if denom.abs() <= TOLERANCE * qv.norm() * p.length() {
        let offset = perp_dot(&qv, &(p.start() - q.start()));
        let q_len = qv.norm();
        let distance = if q_len > 0.0 {
            offset.abs() / q_len
        } else {
            (p.start() - q.start()).norm()
        };
        return if distance <= TOLERANCE {
            LineIntersection::Collinear
        } else {
            LineIntersection::Parallel
        };
    }

    let num = n.dot(&(p.start() - q.start()));
    LineIntersection::Skew { t: -num / denom }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn e(x0: f64, y0: f64, x1: f64, y1: f64) -> Edge2 {
        Edge2::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    #[test]
    fn segments_crossing() {
        let hit = segment_intersection(&e(0.0, 0.0, 2.0, 2.0), &e(0.0, 2.0, 2.0, 0.0)).unwrap();
        assert_relative_eq!(hit.point, Point2::new(1.0, 1.0));
        assert_relative_eq!(hit.t, 0.5);
        assert_relative_eq!(hit.u, 0.5);
    }

    #[test]
    fn segments_not_reaching() {
        assert!(segment_intersection(&e(0.0, 0.0, 1.0, 0.0), &e(2.0, -1.0, 2.0, 1.0)).is_none());
        assert!(segment_intersection(&e(0.0, 0.0, 1.0, 0.0), &e(0.0, 1.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn segments_touching_at_endpoint() {
        let hit = segment_intersection(&e(0.0, 0.0, 1.0, 0.0), &e(1.0, 0.0, 1.0, 1.0)).unwrap();
        assert_relative_eq!(hit.point, Point2::new(1.0, 0.0));
        assert_relative_eq!(hit.t, 1.0);
        assert_relative_eq!(hit.u, 0.0);
    }

    #[test]
    fn collinear_segments_do_not_intersect() {
        assert!(segment_intersection(&e(0.0, 0.0, 2.0, 0.0), &e(1.0, 0.0, 3.0, 0.0)).is_none());
    }

    #[test]
    fn hit_query_right_is_interior() {
        // Reference runs along +x; with the right side interior, inside is y < 0.
        let reference = e(-1.0, 0.0, 1.0, 0.0);
        let down = e(0.0, 1.0, 0.0, -1.0);
        let up = e(0.0, -1.0, 0.0, 1.0);
        assert_eq!(hit_query(&down, &reference, InteriorSide::Right), HitType::Entering);
        assert_eq!(hit_query(&up, &reference, InteriorSide::Right), HitType::Exiting);
    }

    #[test]
    fn hit_query_left_is_interior() {
        let reference = e(-1.0, 0.0, 1.0, 0.0);
        let down = e(0.0, 1.0, 0.0, -1.0);
        let up = e(0.0, -1.0, 0.0, 1.0);
        assert_eq!(hit_query(&down, &reference, InteriorSide::Left), HitType::Exiting);
        assert_eq!(hit_query(&up, &reference, InteriorSide::Left), HitType::Entering);
    }

    #[test]
    fn hit_query_no_crossing() {
        let reference = e(-1.0, 0.0, 1.0, 0.0);
        let far = e(5.0, 1.0, 5.0, -1.0);
        assert_eq!(hit_query(&far, &reference, InteriorSide::Right), HitType::NoHit);
    }

    #[test]
    fn intersect_skew_gives_parameter_beyond_segment() {
        let result = intersect(&e(0.0, 0.0, 1.0, 0.0), &e(3.0, -1.0, 3.0, 1.0));
        let LineIntersection::Skew { t } = result else {
            panic!("expected skew, got {result:?}");
        };
        assert_relative_eq!(t, 3.0);
    }

    #[test]
    fn intersect_parallel_and_collinear() {
        assert_eq!(
            intersect(&e(0.0, 0.0, 1.0, 0.0), &e(0.0, 1.0, 2.0, 1.0)),
            LineIntersection::Parallel
        );
        assert_eq!(
            intersect(&e(0.0, 0.0, 1.0, 0.0), &e(5.0, 0.0, 7.0, 0.0)),
            LineIntersection::Collinear
        );
    }
}
