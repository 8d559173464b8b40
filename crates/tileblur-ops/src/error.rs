//! Error types for blur operations.

use thiserror::Error;

/// Error type for blur operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid dimensions specified.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Image and decomposition (or two images) have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The worker pool could not be started.
    #[error("thread pool: {0}")]
    ThreadPool(String),

    /// Serial and parallel results differ.
    #[error("results differ at pixel ({x}, {y})")]
    Mismatch {
        /// Column of the first differing pixel
        x: usize,
        /// Row of the first differing pixel
        y: usize,
    },

    /// Error from a core type.
    #[error(transparent)]
    Core(#[from] tileblur_core::Error),
}

/// Result type for blur operations.
pub type OpsResult<T> = Result<T, OpsError>;
