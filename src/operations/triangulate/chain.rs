use std::cmp::Ordering;

use crate::math::orientation::Orientation;
use crate::math::{lex_cmp, Point2};

/// One of the two monotone chains between the extreme vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chain {
    /// Reached by walking forward from the lexicographically smallest vertex
    /// of a clockwise ring.
    Upper,
    /// Reached by walking backward.
    Lower,
}

impl Chain {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Upper => Self::Lower,
            Self::Lower => Self::Upper,
        }
    }

    /// Side of a chain edge, walked left to right, on which the interior lies.
    #[must_use]
    pub fn interior(self) -> Orientation {
        match self {
            Self::Upper => Orientation::Right,
            Self::Lower => Orientation::Left,
        }
    }
}

/// A vertex position tagged with the chain it was reached on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
    pub chain: Chain,
}

/// Two cursors sweeping a clockwise ring in lexicographic order.
///
/// Both start at `start`; the upper cursor moves forward around the ring,
/// the lower one backward.
#[derive(Debug)]
pub struct ChainSweep<'a> {
    points: &'a [Point2],
    upper: usize,
    lower: usize,
}

impl<'a> ChainSweep<'a> {
    #[must_use]
    pub fn new(points: &'a [Point2], start: usize) -> Self {
        Self {
            points,
            upper: start,
            lower: start,
        }
    }

    /// Moves whichever cursor has the lexicographically smaller next vertex.
    ///
    /// On a tie the lower cursor moves; the two only tie at the final vertex.
    pub fn advance(&mut self) -> Cursor {
        let n = self.points.len();
        let next_upper = (self.upper + 1) % n;
        let next_lower = (self.lower + n - 1) % n;
        if lex_cmp(&self.points[next_upper], &self.points[next_lower]) == Ordering::Less {
            self.upper = next_upper;
            Cursor {
                index: next_upper,
                chain: Chain::Upper,
            }
        } else {
            self.lower = next_lower;
            Cursor {
                index: next_lower,
                chain: Chain::Lower,
            }
        }
    }
}

/// Checks that both chains from `start` to `end` strictly increase.
///
/// Returns the ring index of the first vertex that breaks the order.
pub fn first_non_monotone(points: &[Point2], start: usize, end: usize) -> Option<usize> {
    let n = points.len();
    for step in [1, n - 1] {
        let mut prev = start;
        let mut current = (start + step) % n;
        while prev != end {
            if lex_cmp(&points[prev], &points[current]) != Ordering::Less {
                return Some(current);
            }
            prev = current;
            current = (current + step) % n;
        }
    }
    None
}
