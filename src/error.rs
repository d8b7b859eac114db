use thiserror::Error;

/// Outcome of a cell query that did not produce a triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// All corners are on the same side of the surface, so the cell contributes nothing.
    ///
    /// `inside` is true when all eight corners are inside the field.
    #[error("degenerate sample: uniform corners (inside: {inside})")]
    DegenerateSample { inside: bool },

    /// The normalized corner set matched no base case under any rotation.
    ///
    /// This points to a defective lookup table or rotation list.
    #[error("no base case matches corner set {corners:#010b}")]
    NoMatchFound { corners: u8 },
}

impl QueryError {
    /// True for the uniform inside/outside signal, which callers skip silently.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, QueryError::DegenerateSample { .. })
    }
}

/// Invalid [`PolygonizerConfig`](crate::PolygonizerConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("bounds must have positive extent along axis {axis}: min {min}, max {max}")]
    EmptyBounds { axis: usize, min: f64, max: f64 },

    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),

    #[error(
        "precision of {0} decimal places is out of range ({min} to {max})",
        min = crate::config::MIN_PRECISION,
        max = crate::config::MAX_PRECISION
    )]
    PrecisionOutOfRange(u32),

    #[error("grid has more than {max} cells")]
    TooManyCells { max: usize },
}
