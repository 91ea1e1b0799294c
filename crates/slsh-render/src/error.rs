//! Render error types.

use thiserror::Error;

/// Errors produced while rendering or writing frames.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid resolution {width}x{height}: both dimensions must be positive")]
    InvalidResolution { width: u32, height: u32 },

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),

    #[error("failed to write frame: {0}")]
    Io(#[from] std::io::Error),
}
