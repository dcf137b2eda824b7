use thiserror::Error;

/// Top-level error type for the polykern geometry kernel.
#[derive(Debug, Error)]
pub enum PolykernError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to geometric primitives and containers.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("vertex index {index} is out of range for a polygon of {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("vertex range {start}..{end} is invalid for a polygon of {len} vertices")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Errors related to clipping and triangulation.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("clip inconsistency: walk from ({x}, {y}) did not close after {steps} steps")]
    ClipInconsistency { steps: usize, x: f64, y: f64 },

    #[error("clipping ring is broken: {0}")]
    BrokenRing(&'static str),

    #[error("polygon is not monotone: vertex {index} breaks the x-then-y ordering")]
    NonMonotone { index: usize },
}

/// Errors raised while reading the polyline text format.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid number: {token:?}")]
    InvalidNumber { token: String },

    #[error("invalid count: {token:?}")]
    InvalidCount { token: String },

    #[error("invalid color: {token:?}")]
    InvalidColor { token: String },
}

/// Convenience type alias for results using [`PolykernError`].
pub type Result<T> = std::result::Result<T, PolykernError>;
