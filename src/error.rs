use thiserror::Error;

/// Top-level error type for the Wideline mesh kernel.
#[derive(Debug, Error)]
pub enum WidelineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scheme(#[from] SchemeError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Errors related to geometric data and transforms.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("cell index {index} is out of range for {positions} positions")]
    CellIndexOutOfRange { index: u32, positions: usize },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("world transform is not invertible")]
    NonInvertibleTransform,
}

/// Errors raised while accumulating a line scheme.
#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("invalid scheme parameters: {0}")]
    InvalidParameters(String),
}

/// Errors raised while assembling the combined mesh.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("vertex group count {groups} does not match material layer list count {layers}")]
    GroupLayerMismatch { groups: usize, layers: usize },
}

/// Convenience type alias for results using [`WidelineError`].
pub type Result<T> = std::result::Result<T, WidelineError>;
