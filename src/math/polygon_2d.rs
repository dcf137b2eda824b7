use std::cmp::Ordering;

use super::{lex_cmp, Point2};

/// Computes the signed area of a closed vertex loop (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Axis-aligned bounds `(min, max)` of a point set, or `None` when empty.
#[must_use]
pub fn bounds_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in &points[1..] {
        min = min.inf(pt);
        max = max.sup(pt);
    }
    Some((min, max))
}

/// Returns `true` if two closed boxes share at least one point.
#[must_use]
pub fn bounds_overlap(a: &(Point2, Point2), b: &(Point2, Point2)) -> bool {
    a.0.x <= b.1.x && b.0.x <= a.1.x && a.0.y <= b.1.y && b.0.y <= a.1.y
}

/// Index of the lexicographically smallest vertex (x first, then y).
///
/// The first of several equal candidates wins.
#[must_use]
pub fn lex_min_index(points: &[Point2]) -> Option<usize> {
    lex_extreme_index(points, Ordering::Less)
}

/// Index of the lexicographically largest vertex (x first, then y).
#[must_use]
pub fn lex_max_index(points: &[Point2]) -> Option<usize> {
    lex_extreme_index(points, Ordering::Greater)
}

fn lex_extreme_index(points: &[Point2], wanted: Ordering) -> Option<usize> {
    let mut best = None;
    for (i, pt) in points.iter().enumerate() {
        match best {
            Some(b) if lex_cmp(pt, &points[b]) != wanted => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Rotates a closed loop so it starts at its lexicographically smallest vertex.
///
/// Keeps the cyclic order; gives a deterministic starting point for comparisons.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    let Some(best) = lex_min_index(points) else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}
