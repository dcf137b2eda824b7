mod engine;
mod ring;

use crate::error::Result;
use crate::geometry::Polygon2;

use engine::clip_execute;

/// Parameters for polygon clipping.
#[derive(Debug, Clone, Copy)]
pub struct ClipParams {
    /// When the boundaries never cross, return the polygon contained in the
    /// other one instead of an empty result.
    pub resolve_containment: bool,
    /// Upper bound on the steps of a single boundary walk.
    ///
    /// `None` uses the total number of working vertices, which no
    /// consistent walk can exceed.
    pub max_walk_steps: Option<usize>,
}

impl Default for ClipParams {
    fn default() -> Self {
        Self {
            resolve_containment: true,
            max_walk_steps: None,
        }
    }
}

/// Computes the intersection of two polygons (Weiler–Atherton).
///
/// Each input is interpreted under its own interior-side tag. The result is
/// zero or more disjoint regions, each tagged [`InteriorSide::Right`].
/// The inputs are never modified.
///
/// [`InteriorSide::Right`]: crate::geometry::InteriorSide::Right
pub struct ClipIntersection<'a> {
    subject: &'a Polygon2,
    clip: &'a Polygon2,
    params: ClipParams,
}

impl<'a> ClipIntersection<'a> {
    /// Creates a new `ClipIntersection` operation with default parameters.
    #[must_use]
    pub fn new(subject: &'a Polygon2, clip: &'a Polygon2) -> Self {
        Self {
            subject,
            clip,
            params: ClipParams::default(),
        }
    }

    /// Sets custom clipping parameters.
    #[must_use]
    pub fn with_params(mut self, params: ClipParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the clip, returning the common regions.
    ///
    /// Inputs with fewer than 3 vertices, or with disjoint bounding boxes,
    /// give an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::ClipInconsistency`] if a boundary walk does
    /// not close within the step bound, which happens only when
    /// intersection pairing breaks down near the tolerance.
    ///
    /// [`OperationError::ClipInconsistency`]: crate::error::OperationError::ClipInconsistency
    pub fn execute(&self) -> Result<Vec<Polygon2>> {
        clip_execute(self.subject, self.clip, &self.params)
    }
}

/// Intersection of `subject` and `clip` with default [`ClipParams`].
///
/// # Errors
///
/// See [`ClipIntersection::execute`].
pub fn clip_intersection(subject: &Polygon2, clip: &Polygon2) -> Result<Vec<Polygon2>> {
    ClipIntersection::new(subject, clip).execute()
}
