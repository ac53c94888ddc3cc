//! Color space math: single-pixel transforms between RGB, CIE, perceptual
//! and grading spaces.
//!
//! Every function maps one [`Pixel`] to another: lanes `x, y, z` carry the
//! three color channels and `w` is passed through unchanged. Matrices and
//! constants are compile-time data tied to a fixed white point (D50 for Lab,
//! D65 for sRGB, JzAzBz and the grading space). Chaining conversions across
//! white points is the caller's responsibility.
//!
//! Degenerate inputs (zero divisors, achromatic pixels) resolve to a defined
//! value, usually `0`, instead of producing NaN or infinity. Over-range and
//! negative (HDR) values are not clamped unless a formula says so.

use glam::{Mat3, Vec3};

pub mod grading;
pub mod hsx;
pub mod jzazbz;
pub mod lab;
pub mod rgb;

pub use grading::{grading_rgb_to_ych, grading_rgb_to_yrg, ych_to_grading_rgb, yrg_to_grading_rgb};
pub use hsx::{hsl_to_rgb, hsv_to_rgb, hue_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use jzazbz::{jzazbz_to_jzczhz, jzazbz_to_xyz, jzczhz_to_jzazbz, xyz_to_jzazbz};
pub use lab::{D50, lab_to_lch, lab_to_xyz, lch_to_lab, xyz_to_lab};
pub use rgb::{
    lab_to_prophoto_rgb, prophoto_rgb_to_lab, prophoto_rgb_to_xyz, srgb_to_xyz, xyz_to_prophoto_rgb,
    xyz_to_srgb,
};

/// Four f32 lanes: three channels plus passthrough alpha.
pub type Pixel = glam::Vec4;

/// Build a matrix from a row-major table at compile time.
pub(crate) const fn mat3_from_rows(m: [[f32; 3]; 3]) -> Mat3 {
    Mat3::from_cols(
        Vec3::new(m[0][0], m[1][0], m[2][0]),
        Vec3::new(m[0][1], m[1][1], m[2][1]),
        Vec3::new(m[0][2], m[1][2], m[2][2]),
    )
}

/// Multiply the three color lanes by `m`, keeping alpha.
#[inline]
pub(crate) fn apply_matrix(m: &Mat3, p: Pixel) -> Pixel {
    (*m * p.truncate()).extend(p.w)
}
