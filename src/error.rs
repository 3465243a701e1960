//! Error type shared by every image operation.
//!
//! Apart from `ThreadPool`, every variant is a caller contract violation
//! detected before the result buffer is allocated.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    /// Sample count does not equal the volume declared by the axis exponents.
    #[error("shape mismatch: expected {expected} samples, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// A coordinate tuple has a different length than the image rank.
    #[error("rank mismatch: expected {expected} coordinates, found {found}")]
    RankMismatch { expected: usize, found: usize },

    /// A sub-region or downsample request reaches past an axis.
    #[error("range error: {0}")]
    Range(String),

    /// Axis exponents or lengths that cannot describe an addressable image.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ImageError>;
