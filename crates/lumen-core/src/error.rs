//! Error type for fallible construction of views, images and kinds.
//!
//! The conversions and kernels themselves never fail; only the places where
//! a caller hands over raw layout data or a persisted name can be rejected.

/// Result alias for lumen operations.
pub type Result<T> = std::result::Result<T, LumenError>;

#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    #[error("unknown interpolation: {0}")]
    UnknownInterpolation(String),
    #[error("stride of {stride} bytes is not a whole number of f32 samples")]
    InvalidStride { stride: usize },
    #[error("sample view must be at least 1x1")]
    EmptyBuffer,
    #[error("buffer too small: layout needs {needed} samples, slice holds {len}")]
    BufferTooSmall { needed: usize, len: usize },
    #[error("channel {channel} out of range, images have 4 lanes")]
    InvalidChannel { channel: usize },
    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    PixelCount { expected: usize, actual: usize },
}
