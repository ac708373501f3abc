use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoiseError {
    /// Missing dimensions are reported as 0.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },

    #[error("lattice column {column} has {got} entries, expected {expected}")]
    RaggedLattice { column: usize, expected: usize, got: usize },

    #[error("lattice shape mismatch: grid is {}x{}, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    ShapeMismatch { expected: (usize, usize), got: (usize, usize) },

    #[error("tile counts must be positive, got {x_tiles}x{y_tiles}")]
    InvalidTileCount { x_tiles: usize, y_tiles: usize },

    #[error("invalid noise config: {0}")]
    Config(#[from] serde_json::Error),
}

impl NoiseError {
    pub(crate) fn invalid_dimension(width: usize, height: usize) -> Self {
        Self::InvalidDimension {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        }
    }
}

pub type Result<T> = std::result::Result<T, NoiseError>;
