mod containment;
mod convexity;

pub(crate) use containment::locate_in_ring;
pub use containment::{is_inside_polygon, locate_point, PointLocation};
pub use convexity::is_convex;
