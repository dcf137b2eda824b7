pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;

pub use error::{PolykernError, Result};
