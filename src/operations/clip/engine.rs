use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::error::{OperationError, Result};
use crate::geometry::{Edge2, InteriorSide, Polygon2};
use crate::math::distance_2d::point_segment_distance;
use crate::math::intersect_2d::{hit_query, segment_intersection, HitType};
use crate::math::polygon_2d::bounds_overlap;
use crate::math::{points_coincide, Point2, Vector2, TOLERANCE};
use crate::operations::query::{locate_in_ring, PointLocation};

use super::ring::{ClipArena, RingId, VertexKey, VertexKind};
use super::ClipParams;

/// An intersection found on one edge, before it is spliced into the ring.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    point: Point2,
    distance: f64,
    kind: VertexKind,
}

/// Computes the regions common to `subject` and `clip`.
///
/// Pipeline: bounding-box early-out, ring construction, edge-pair
/// intersection, splicing, cross-linking, contact resolution, then one walk
/// per pending entering vertex.
pub(super) fn clip_execute(
    subject: &Polygon2,
    clip: &Polygon2,
    params: &ClipParams,
) -> Result<Vec<Polygon2>> {
    if subject.len() < 3 || clip.len() < 3 {
        debug!(
            subject = subject.len(),
            clip = clip.len(),
            "clip input has fewer than 3 vertices"
        );
        return Ok(Vec::new());
    }

    // Step 1: AABB early-out
    if let (Some(a), Some(b)) = (subject.bounds(), clip.bounds()) {
        if !bounds_overlap(&a, &b) {
            debug!("clip inputs have disjoint bounds");
            return Ok(Vec::new());
        }
    }

    // Step 2: Working copies, both with the interior on the right
    let subject_pts = right_handed(subject);
    let clip_pts = right_handed(clip);

    let mut arena = ClipArena::new();
    let subject_keys = arena.add_ring(&subject_pts, RingId::Subject);
    let clip_keys = arena.add_ring(&clip_pts, RingId::Clip);

    // Step 3: Edge-pair intersections
    let (subject_cands, clip_cands) = find_candidates(&subject_pts, &clip_pts);
    trace!(
        subject = subject_cands.iter().map(Vec::len).sum::<usize>(),
        clip = clip_cands.iter().map(Vec::len).sum::<usize>(),
        "intersection candidates"
    );

    // Step 4: Splice candidates into the rings
    splice_candidates(&mut arena, &subject_keys, subject_cands)?;
    splice_candidates(&mut arena, &clip_keys, clip_cands)?;

    // Step 5: Pair up intersection vertices and settle contacts
    let subject_ring = arena.ring_keys(subject_keys[0])?;
    let clip_ring = arena.ring_keys(clip_keys[0])?;
    cross_link(&mut arena, &subject_ring, &clip_ring)?;
    resolve_contacts(&mut arena, &subject_ring, &clip_pts)?;
    resolve_contacts(&mut arena, &clip_ring, &subject_pts)?;
    demote_unpaired(&mut arena, &subject_ring)?;
    demote_unpaired(&mut arena, &clip_ring)?;

    // Step 6: Queue entering vertices of the subject
    let mut queue = VecDeque::new();
    for &key in &subject_ring {
        if arena.vertex(key)?.kind == VertexKind::Entering {
            queue.push_back(key);
        }
    }

    if queue.is_empty() {
        debug!("no crossings survive, resolving by containment");
        if !params.resolve_containment {
            return Ok(Vec::new());
        }
        return Ok(containment_result(&subject_pts, &clip_pts));
    }

    // Step 7: Walk
    let limit = params.max_walk_steps.unwrap_or(arena.len());
    let mut results = Vec::new();
    while let Some(start) = queue.pop_front() {
        let region = walk_region(&arena, start, &mut queue, limit)?;
        trace!(vertices = region.len(), "emitted clip region");
        results.push(region);
    }
    debug!(regions = results.len(), "clip finished");
    Ok(results)
}

/// Vertex list of `polygon` ordered so that its interior lies to the right.
fn right_handed(polygon: &Polygon2) -> Vec<Point2> {
    match polygon.interior_side() {
        InteriorSide::Right => polygon.vertices().to_vec(),
        InteriorSide::Left => polygon.vertices().iter().rev().copied().collect(),
    }
}

/// Intersects every subject edge with every clip edge.
///
/// Returns the candidates grouped by the index of the edge's start vertex,
/// for the subject and the clip ring respectively. A crossing strictly
/// inside both edges is classified right away; any hit touching an edge
/// endpoint becomes a [`VertexKind::Contact`].
fn find_candidates(
    subject: &[Point2],
    clip: &[Point2],
) -> (Vec<Vec<Candidate>>, Vec<Vec<Candidate>>) {
    let mut subject_cands = vec![Vec::new(); subject.len()];
    let mut clip_cands = vec![Vec::new(); clip.len()];

    for (i, s_edge) in ring_edges(subject).enumerate() {
        for (j, c_edge) in ring_edges(clip).enumerate() {
            let Some(hit) = segment_intersection(&s_edge, &c_edge) else {
                continue;
            };
            let touches_endpoint = [s_edge.start(), s_edge.end(), c_edge.start(), c_edge.end()]
                .into_iter()
                .any(|p| points_coincide(p, &hit.point));

            let (s_kind, c_kind) = if touches_endpoint {
                (VertexKind::Contact, VertexKind::Contact)
            } else {
                (
                    crossing_kind(&s_edge, &c_edge),
                    crossing_kind(&c_edge, &s_edge),
                )
            };

            subject_cands[i].push(Candidate {
                point: hit.point,
                distance: (hit.point - s_edge.start()).norm(),
                kind: s_kind,
            });
            clip_cands[j].push(Candidate {
                point: hit.point,
                distance: (hit.point - c_edge.start()).norm(),
                kind: c_kind,
            });
        }
    }
    (subject_cands, clip_cands)
}

fn ring_edges(points: &[Point2]) -> impl Iterator<Item = Edge2> + '_ {
    let n = points.len();
    (0..n).map(move |i| Edge2::new(points[i], points[(i + 1) % n]))
}

fn crossing_kind(own: &Edge2, other: &Edge2) -> VertexKind {
    match hit_query(own, other, InteriorSide::Right) {
        HitType::Entering => VertexKind::Entering,
        HitType::Exiting => VertexKind::Exiting,
        HitType::NoHit => VertexKind::Contact,
    }
}

/// Inserts each edge's candidates between its endpoints, nearest first.
///
/// A candidate coinciding with an endpoint, or with the previously
/// inserted vertex on the same edge, is merged into that vertex, which
/// then becomes a contact to be resolved geometrically.
fn splice_candidates(
    arena: &mut ClipArena,
    originals: &[VertexKey],
    candidates: Vec<Vec<Candidate>>,
) -> Result<()> {
    let n = originals.len();
    for (i, mut cands) in candidates.into_iter().enumerate() {
        if cands.is_empty() {
            continue;
        }
        cands.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        let start = originals[i];
        let end = originals[(i + 1) % n];
        let start_pt = arena.vertex(start)?.point;
        let end_pt = arena.vertex(end)?.point;
        let mut last = start;

        for cand in cands {
            let target = if points_coincide(&cand.point, &start_pt) {
                Some(start)
            } else if points_coincide(&cand.point, &end_pt) {
                Some(end)
            } else if last != start && points_coincide(&cand.point, &arena.vertex(last)?.point) {
                Some(last)
            } else {
                None
            };
            match target {
                Some(key) => arena.vertex_mut(key)?.kind = VertexKind::Contact,
                None => last = arena.insert_after(last, cand.point, cand.kind)?,
            }
        }
    }
    Ok(())
}

/// Links each subject intersection vertex to the clip intersection vertex
/// at the same position.
fn cross_link(
    arena: &mut ClipArena,
    subject_ring: &[VertexKey],
    clip_ring: &[VertexKey],
) -> Result<()> {
    let mut clip_open: Vec<(VertexKey, Point2)> = Vec::new();
    for &key in clip_ring {
        let v = arena.vertex(key)?;
        if v.kind != VertexKind::Original {
            clip_open.push((key, v.point));
        }
    }

    for &key in subject_ring {
        let v = arena.vertex(key)?;
        if v.kind == VertexKind::Original {
            continue;
        }
        let point = v.point;
        if let Some(pos) = clip_open.iter().position(|(_, p)| points_coincide(p, &point)) {
            let (partner, _) = clip_open.swap_remove(pos);
            arena.vertex_mut(key)?.cross = Some(partner);
            arena.vertex_mut(partner)?.cross = Some(key);
        }
    }
    Ok(())
}

/// Decides every contact on `ring` by where the neighbouring sub-edges lie
/// relative to the `other` polygon.
///
/// Arriving from outside and leaving inside is an entry; the reverse is an
/// exit. Grazing contacts revert to ordinary vertices.
fn resolve_contacts(arena: &mut ClipArena, ring: &[VertexKey], other: &[Point2]) -> Result<()> {
    for &key in ring {
        let v = arena.vertex(key)?;
        if v.kind != VertexKind::Contact {
            continue;
        }
        let point = v.point;
        let before = sub_edge_location(&arena.vertex(v.prev)?.point, &point, other);
        let after = sub_edge_location(&point, &arena.vertex(v.next)?.point, other);

        let kind = match (before, after) {
            (PointLocation::Outside, PointLocation::Inside) => VertexKind::Entering,
            (PointLocation::Inside, PointLocation::Outside) => VertexKind::Exiting,
            _ => VertexKind::Original,
        };
        trace!(x = point.x, y = point.y, ?kind, "resolved contact");
        arena.vertex_mut(key)?.kind = kind;
    }
    Ok(())
}

/// Location of the sub-edge `from -> to` relative to `other`, judged at its
/// midpoint.
///
/// A sub-edge lying along the boundary of `other` counts as inside when it
/// runs the same way as that boundary (both rings have their interior on
/// the right, so it bounds the common region) and as outside when it runs
/// against it.
fn sub_edge_location(from: &Point2, to: &Point2, other: &[Point2]) -> PointLocation {
    let mid = Edge2::new(*from, *to).midpoint();
    match locate_in_ring(other, &mid) {
        PointLocation::OnBoundary => overlap_location(&(to - from), &mid, other),
        location => location,
    }
}

fn overlap_location(direction: &Vector2, mid: &Point2, other: &[Point2]) -> PointLocation {
    let n = other.len();
    for i in 0..n {
        let edge = Edge2::new(other[i], other[(i + 1) % n]);
        if point_segment_distance(mid, &edge) > TOLERANCE {
            continue;
        }
        let along = direction.dot(&edge.vector());
        if along > 0.0 {
            return PointLocation::Inside;
        }
        if along < 0.0 {
            return PointLocation::Outside;
        }
    }
    PointLocation::OnBoundary
}

/// Reverts crossings that have no vertex to switch to on the other ring.
fn demote_unpaired(arena: &mut ClipArena, ring: &[VertexKey]) -> Result<()> {
    for &key in ring {
        let v = arena.vertex_mut(key)?;
        if v.kind.is_crossing() && v.cross.is_none() {
            warn!(x = v.point.x, y = v.point.y, "dropping unpaired crossing");
            v.kind = VertexKind::Original;
        }
    }
    Ok(())
}

/// Follows the rings from `start`, switching to the other ring wherever the
/// current one leaves the other polygon, until the walk arrives back at the
/// start position.
fn walk_region(
    arena: &ClipArena,
    start: VertexKey,
    queue: &mut VecDeque<VertexKey>,
    limit: usize,
) -> Result<Polygon2> {
    let origin = arena.vertex(start)?.point;
    let inconsistent = |steps: usize| OperationError::ClipInconsistency {
        steps,
        x: origin.x,
        y: origin.y,
    };

    let mut points = vec![origin];
    let mut current = start;
    let mut steps = 0;
    loop {
        current = arena.vertex(current)?.next;
        steps += 1;
        if steps > limit {
            warn!(steps, x = origin.x, y = origin.y, "clip walk exceeded its step bound");
            return Err(inconsistent(steps).into());
        }

        let v = arena.vertex(current)?;
        if points_coincide(&v.point, &origin) {
            break;
        }
        points.push(v.point);
        if v.ring == RingId::Subject && v.kind == VertexKind::Entering {
            queue.retain(|&k| k != current);
        }

        if v.kind == VertexKind::Exiting {
            let partner = v.cross.ok_or_else(|| inconsistent(steps))?;
            if arena.vertex(partner)?.ring == RingId::Subject {
                queue.retain(|&k| k != partner);
            }
            current = partner;
        }
    }
    Ok(Polygon2::from_points(points, InteriorSide::Right))
}

/// Result when the boundaries never cross: the inner polygon if one
/// contains the other, nothing otherwise.
fn containment_result(subject: &[Point2], clip: &[Point2]) -> Vec<Polygon2> {
    if ring_within(subject, clip) {
        vec![Polygon2::from_points(subject.to_vec(), InteriorSide::Right)]
    } else if ring_within(clip, subject) {
        vec![Polygon2::from_points(clip.to_vec(), InteriorSide::Right)]
    } else {
        Vec::new()
    }
}

/// Returns `true` if no vertex or edge midpoint of `inner` lies outside `outer`.
fn ring_within(inner: &[Point2], outer: &[Point2]) -> bool {
    ring_edges(inner).all(|edge| {
        locate_in_ring(outer, edge.start()) != PointLocation::Outside
            && locate_in_ring(outer, &edge.midpoint()) != PointLocation::Outside
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn right_handed_reverses_left_polygons() {
        let ccw = Polygon2::from_points(pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]), InteriorSide::Left);
        assert_eq!(right_handed(&ccw), pts(&[(0.0, 1.0), (1.0, 0.0), (0.0, 0.0)]));
        let cw = ccw.reversed();
        assert_eq!(right_handed(&cw), cw.vertices().to_vec());
    }

    #[test]
    fn proper_crossing_gets_classified() {
        // Two clockwise squares overlapping at a corner.
        let subject = pts(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
        let clip = pts(&[(1.0, 1.0), (1.0, 3.0), (3.0, 3.0), (3.0, 1.0)]);
        let (s, c) = find_candidates(&subject, &clip);
        let s_all: Vec<_> = s.iter().flatten().collect();
        let c_all: Vec<_> = c.iter().flatten().collect();
        assert_eq!(s_all.len(), 2);
        assert_eq!(c_all.len(), 2);
        assert!(s_all.iter().all(|cand| cand.kind.is_crossing()));
        // Subject edge (0,2)->(2,2) enters the clip at (1,2).
        let entering = &s[1][0];
        assert!(points_coincide(&entering.point, &Point2::new(1.0, 2.0)));
        assert_eq!(entering.kind, VertexKind::Entering);
    }

    #[test]
    fn shared_vertex_is_a_contact() {
        let subject = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let (s, _) = find_candidates(&subject, &subject);
        assert!(s
            .iter()
            .flatten()
            .all(|cand| cand.kind == VertexKind::Contact));
    }

    #[test]
    fn splice_merges_coincident_candidates() {
        let mut arena = ClipArena::new();
        let keys = arena.add_ring(&pts(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0)]), RingId::Subject);
        let cand = |y: f64, kind| Candidate {
            point: Point2::new(0.0, y),
            distance: y,
            kind,
        };
        let cands = vec![
            vec![
                cand(3.0, VertexKind::Exiting),
                cand(1.0, VertexKind::Entering),
                cand(1.0 + 1e-10, VertexKind::Contact),
                cand(4.0, VertexKind::Contact),
            ],
            Vec::new(),
            Vec::new(),
        ];
        splice_candidates(&mut arena, &keys, cands).unwrap();

        let ring = arena.ring_keys(keys[0]).unwrap();
        let kinds: Vec<_> = ring.iter().map(|&k| arena.vertex(k).unwrap().kind).collect();
        assert_eq!(
            kinds,
            vec![
                VertexKind::Original,
                VertexKind::Contact,
                VertexKind::Exiting,
                VertexKind::Contact,
                VertexKind::Original,
            ]
        );
    }

    #[test]
    fn boundary_sub_edges_follow_overlap_direction() {
        let square = pts(&[(1.0, 0.0), (1.0, 2.0), (3.0, 2.0), (3.0, 0.0)]);
        let along = sub_edge_location(&Point2::new(1.0, 2.0), &Point2::new(2.0, 2.0), &square);
        assert_eq!(along, PointLocation::Inside);
        let against = sub_edge_location(&Point2::new(1.0, 1.5), &Point2::new(1.0, 0.5), &square);
        assert_eq!(against, PointLocation::Outside);
        let away = sub_edge_location(&Point2::new(0.0, 2.0), &Point2::new(1.0, 2.0), &square);
        assert_eq!(away, PointLocation::Outside);
    }

    #[test]
    fn unpaired_crossing_is_demoted() {
        let mut arena = ClipArena::new();
        let keys = arena.add_ring(&pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]), RingId::Clip);
        arena.vertex_mut(keys[1]).unwrap().kind = VertexKind::Entering;
        demote_unpaired(&mut arena, &keys).unwrap();
        assert_eq!(arena.vertex(keys[1]).unwrap().kind, VertexKind::Original);
    }

    #[test]
    fn walk_guard_reports_inconsistency() {
        let mut arena = ClipArena::new();
        let keys = arena.add_ring(&pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]), RingId::Subject);
        arena.vertex_mut(keys[1]).unwrap().kind = VertexKind::Exiting;
        let mut queue = VecDeque::new();
        let err = walk_region(&arena, keys[0], &mut queue, 10).unwrap_err();
        assert!(matches!(
            err,
            crate::error::PolykernError::Operation(OperationError::ClipInconsistency { .. })
        ));
    }

    #[test]
    fn containment_picks_inner_ring() {
        let outer = pts(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
        let inner = pts(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)]);
        let far = pts(&[(10.0, 10.0), (10.0, 11.0), (11.0, 11.0)]);
        assert_eq!(containment_result(&outer, &inner)[0].vertices(), &inner[..]);
        assert_eq!(containment_result(&inner, &outer)[0].vertices(), &inner[..]);
        assert!(containment_result(&outer, &far).is_empty());
    }
}
