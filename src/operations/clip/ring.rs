use slotmap::{new_key_type, SlotMap};

use crate::error::OperationError;
use crate::math::Point2;

new_key_type! {
    /// Stable handle to a vertex in a [`ClipArena`].
    pub struct VertexKey;
}

/// Role of a working vertex during clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    /// An input vertex that is not (or no longer) a crossing.
    Original,
    /// The owning ring moves into the other polygon here.
    Entering,
    /// The owning ring moves out of the other polygon here.
    Exiting,
    /// Touching contact whose direction is still undecided.
    Contact,
}

impl VertexKind {
    /// Returns `true` for a resolved crossing.
    #[must_use]
    pub fn is_crossing(self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }
}

/// Which input polygon a working ring was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingId {
    Subject,
    Clip,
}

/// A vertex of a working ring.
#[derive(Debug, Clone)]
pub struct ClipVertex {
    pub point: Point2,
    pub kind: VertexKind,
    pub next: VertexKey,
    pub prev: VertexKey,
    /// Vertex at the same position in the other ring, for crossings.
    pub cross: Option<VertexKey>,
    pub ring: RingId,
}

/// Arena holding both working rings of one clipping call.
///
/// Rings are doubly linked through keys, so inserting a vertex never
/// invalidates a cross-reference held elsewhere.
#[derive(Debug, Default)]
pub struct ClipArena {
    vertices: SlotMap<VertexKey, ClipVertex>,
}

impl ClipArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of vertices across both rings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Links `points` into a closed ring and returns the keys in order.
    pub fn add_ring(&mut self, points: &[Point2], ring: RingId) -> Vec<VertexKey> {
        let keys: Vec<VertexKey> = points
            .iter()
            .map(|&point| {
                self.vertices.insert(ClipVertex {
                    point,
                    kind: VertexKind::Original,
                    next: VertexKey::default(),
                    prev: VertexKey::default(),
                    cross: None,
                    ring,
                })
            })
            .collect();
        let n = keys.len();
        for (i, &key) in keys.iter().enumerate() {
            if let Some(v) = self.vertices.get_mut(key) {
                v.next = keys[(i + 1) % n];
                v.prev = keys[(i + n - 1) % n];
            }
        }
        keys
    }

    /// Splices a new vertex into the ring directly after `after`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::BrokenRing`] if `after` or its successor is missing.
    pub fn insert_after(
        &mut self,
        after: VertexKey,
        point: Point2,
        kind: VertexKind,
    ) -> Result<VertexKey, OperationError> {
        let (next, ring) = {
            let v = self.vertex(after)?;
            (v.next, v.ring)
        };
        let key = self.vertices.insert(ClipVertex {
            point,
            kind,
            next,
            prev: after,
            cross: None,
            ring,
        });
        self.vertex_mut(after)?.next = key;
        self.vertex_mut(next)?.prev = key;
        Ok(key)
    }

    /// # Errors
    ///
    /// Returns [`OperationError::BrokenRing`] if the key is not in the arena.
    pub fn vertex(&self, key: VertexKey) -> Result<&ClipVertex, OperationError> {
        self.vertices
            .get(key)
            .ok_or(OperationError::BrokenRing("vertex not found"))
    }

    /// # Errors
    ///
    /// Returns [`OperationError::BrokenRing`] if the key is not in the arena.
    pub fn vertex_mut(&mut self, key: VertexKey) -> Result<&mut ClipVertex, OperationError> {
        self.vertices
            .get_mut(key)
            .ok_or(OperationError::BrokenRing("vertex not found"))
    }

    /// Keys of the ring containing `start`, following `next` links.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::BrokenRing`] if a link dangles or the ring
    /// does not close.
    pub fn ring_keys(&self, start: VertexKey) -> Result<Vec<VertexKey>, OperationError> {
        let mut keys = vec![start];
        let mut current = self.vertex(start)?.next;
        while current != start {
            if keys.len() >= self.vertices.len() {
                return Err(OperationError::BrokenRing("ring does not close"));
            }
            keys.push(current);
            current = self.vertex(current)?.next;
        }
        Ok(keys)
    }
}
