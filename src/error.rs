use thiserror::Error;

/// Top-level error type for the polykern planar kernel.
#[derive(Debug, Error)]
pub enum PolykernError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate edge: head and tail are both ({x}, {y})")]
    DegenerateEdge { x: f64, y: f64 },
}

/// Errors related to kernel operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PolykernError`].
pub type Result<T> = std::result::Result<T, PolykernError>;
