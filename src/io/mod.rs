mod color;
mod polyline_file;

pub use color::Color;
pub use polyline_file::{Polyline, PolylineFile};
