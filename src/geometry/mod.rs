pub mod edge;
pub mod polygon;

pub use edge::{Edge, Edge2, Edge3};
pub use polygon::{InteriorSide, Polygon, Polygon2};
