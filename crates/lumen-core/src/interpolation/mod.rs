//! Interpolation kernel catalog.
//!
//! - [`InterpolationKind`]: the closed set of kernels with stable ids
//! - [`Kernel`]: support width plus scalar and 4-lane weight functions
//! - [`InterpolationConfig`] / [`InterpolationSelector`]: the persisted user
//!   preference and how a caller asks for it

pub mod config;
pub mod kernel;
pub mod kind;

pub use config::{InterpolationConfig, InterpolationSelector};
pub use kernel::{Kernel, KernelTaps};
pub use kind::InterpolationKind;
