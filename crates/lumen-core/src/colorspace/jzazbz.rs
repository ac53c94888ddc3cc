//! JzAzBz perceptual space (Safdar et al. 2017) and its polar JzCzhz form.
//!
//! Input XYZ is D65, with `Y` in absolute luminance units over `10000`
//! full scale.
//!
//! ```text
//!   XYZ ──shear──→ X'Y'Z ──M──→ LMS ──PQ──→ L'M'S' ──A──→ IzAzBz ──→ JzAzBz
//!
//!   X' = b·X − (b−1)·Z          b = 1.15
//!   Y' = g·Y − (g−1)·X          g = 0.66
//!   PQ(x) = ((c1 + c2·xⁿ) / (1 + c3·xⁿ))ᵖ,  x = LMS / 10000
//!   Jz = (1+d)·Iz / (1 + d·Iz) − d0         d = −0.56, so 0.44·Iz / (1 − 0.56·Iz)
//! ```
//!
//! The inverse undoes each stage in reverse order. Negative LMS and
//! negative PQ ratios are clamped to zero before the fractional powers.

use glam::{Mat3, Vec3};
use std::f32::consts::PI;

use super::{Pixel, mat3_from_rows};

const B: f32 = 1.15;
const G: f32 = 0.66;
const C1: f32 = 0.835_937_5; // 3424 / 2^12
const C2: f32 = 18.851_562_5; // 2413 / 2^7
const C3: f32 = 18.6875; // 2392 / 2^7
const N: f32 = 0.159_301_758; // 2610 / 2^14
const P: f32 = 134.034_375; // 1.7 × 2523 / 2^5
const D: f32 = -0.56;
const D0: f32 = 1.629_549_953_282_156_6e-11;

const XYZ_TO_LMS: Mat3 = mat3_from_rows([
    [0.41478972, 0.579999, 0.0146480],
    [-0.2015100, 1.120649, 0.0531008],
    [-0.0166008, 0.264800, 0.6684799],
]);

const LMS_TO_IAB: Mat3 = mat3_from_rows([
    [0.5, 0.5, 0.0],
    [3.524000, -4.066708, 0.542708],
    [0.199076, 1.096799, -1.295875],
]);

const LMS_TO_XYZ: Mat3 = mat3_from_rows([
    [1.924_226_4, -1.004_792_3, 0.037_651_404],
    [0.350_316_77, 0.726_481_2, -0.065_384_42],
    [-0.090_982_81, -0.312_728_3, 1.522_766_6],
]);

const IAB_TO_LMS: Mat3 = mat3_from_rows([
    [1.0, 0.138_605_04, 0.058_047_316],
    [1.0, -0.138_605_04, -0.058_047_316],
    [1.0, -0.096_019_24, -0.811_891_9],
]);

/// XYZ (D65) → JzAzBz.
pub fn xyz_to_jzazbz(xyz: Pixel) -> Pixel {
    let sheared = Vec3::new(
        B * xyz.x - (B - 1.0) * xyz.z,
        G * xyz.y - (G - 1.0) * xyz.x,
        xyz.z,
    );

    let lms = XYZ_TO_LMS * sheared;
    let lms = (lms / 10000.0).max(Vec3::ZERO).powf(N);
    let lms = ((C1 + C2 * lms) / (1.0 + C3 * lms)).powf(P);

    let mut iab = LMS_TO_IAB * lms;
    iab.x = (1.0 + D) * iab.x / (1.0 + D * iab.x) - D0;
    iab.extend(xyz.w)
}

/// JzAzBz → XYZ (D65).
pub fn jzazbz_to_xyz(jab: Pixel) -> Pixel {
    let mut iab = jab.truncate();
    iab.x += D0;
    iab.x /= 1.0 + D - D * iab.x;

    let lms = IAB_TO_LMS * iab;
    let lms = lms.max(Vec3::ZERO).powf(1.0 / P);
    let lms = 10000.0 * ((C1 - lms) / (C3 * lms - C2)).max(Vec3::ZERO).powf(1.0 / N);

    let sheared = LMS_TO_XYZ * lms;
    let x = (sheared.x + (B - 1.0) * sheared.z) / B;
    let y = (sheared.y + (G - 1.0) * x) / G;
    Pixel::new(x, y, sheared.z, jab.w)
}

/// JzAzBz → JzCzhz. Hue is a turn fraction.
///
/// ```text
/// h  = atan2(bz, az) / 2π
/// hz = h ≥ 0 ? h : 1 + h
/// ```
///
/// Unlike [`super::lab_to_lch`], a zero angle stays `0.0`.
pub fn jzazbz_to_jzczhz(jab: Pixel) -> Pixel {
    let h = jab.z.atan2(jab.y) / (2.0 * PI);
    let cz = (jab.y * jab.y + jab.z * jab.z).sqrt();
    let hz = if h >= 0.0 { h } else { 1.0 + h };
    Pixel::new(jab.x, cz, hz, jab.w)
}

/// JzCzhz → JzAzBz.
pub fn jzczhz_to_jzazbz(jch: Pixel) -> Pixel {
    let angle = 2.0 * PI * jch.z;
    Pixel::new(jch.x, jch.y * angle.cos(), jch.y * angle.sin(), jch.w)
}
