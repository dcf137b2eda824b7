pub mod clip;
pub mod query;
pub mod triangulate;

pub use clip::{clip_intersection, ClipIntersection, ClipParams};
pub use query::{is_convex, is_inside_polygon, locate_point, PointLocation};
pub use triangulate::{triangulate_monotone, TriangulateMonotone, TriangulateParams};
