//! Lumen Core: pixel-level numerical engine for the processing pipeline.
//!
//! This crate contains the per-pixel color space transforms, the
//! interpolation kernel catalog, and the separable resampler. Every
//! operation is pure and stateless, so all of it can be called from any
//! number of threads without synchronization. No GPU or framework
//! dependencies.

pub mod colorspace;
pub mod error;
pub mod image;
pub mod interpolation;
pub mod resample;

// Re-exports for convenience.
pub use colorspace::Pixel;
pub use error::{LumenError, Result};
pub use image::RgbaImage;
pub use interpolation::{
    InterpolationConfig, InterpolationKind, InterpolationSelector, Kernel, KernelTaps,
};
pub use resample::{SampleView, compute_pixel, compute_sample, resample_image};
