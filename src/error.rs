use thiserror::Error;

/// Top-level error type for catenary span generation.
#[derive(Debug, Error)]
pub enum CatenaryError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point ({x}, {y}, {z}) has a non-finite coordinate")]
    NonFinitePoint { x: f64, y: f64, z: f64 },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Failures of a scalar search.
///
/// These are recovered inside the solver pipeline and only surface when a
/// search is driven directly.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    #[error("no sign change found in [{lo}, {hi}]")]
    RootNotBracketed { lo: f64, hi: f64 },
}

/// Errors related to operation inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to sampling.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid sampling parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`CatenaryError`].
pub type Result<T> = std::result::Result<T, CatenaryError>;
