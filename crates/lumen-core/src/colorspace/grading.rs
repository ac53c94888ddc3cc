//! Grading RGB working space with luminance + chromaticity coordinates.
//!
//! # Formula
//! ```text
//!   Y   = max(0.67282368·R + 0.47812261·G + 0.01044966·B, 0)
//!   a   = R + G + B
//!   rgb = a == 0 ? 0 : RGB / a                 normalized chromaticity
//!
//!   Yrg = (Y, r, g)
//!   Ych = (Y, hypot(r − r₀, g − g₀), Y == 0 ? 0 : atan2(g − g₀, r − r₀))
//! ```
//!
//! `(r₀, g₀) = (0.18600766, 0.5908061)` is the D65 white in this space.
//! Hue is in radians.
//!
//! The luminance clamp is deliberate and lossy: a pixel whose weighted sum
//! is negative comes back from the inverse as black.

use super::Pixel;

const LUMINANCE: [f32; 3] = [0.67282368, 0.47812261, 0.01044966];
const D65_R: f32 = 0.18600766;
const D65_G: f32 = 0.5908061;

#[inline]
fn luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMINANCE[0] * r + LUMINANCE[1] * g + LUMINANCE[2] * b
}

/// Chromaticity `(r, g)` of `rgb`, or zero when the channel sum is zero.
#[inline]
fn chromaticity(rgb: Pixel) -> (f32, f32) {
    let a = rgb.x + rgb.y + rgb.z;
    if a == 0.0 {
        (0.0, 0.0)
    } else {
        (rgb.x / a, rgb.y / a)
    }
}

/// Rescale chromaticity `(r, g)` back to RGB with luminance `y`.
#[inline]
fn rescale(y: f32, r: f32, g: f32, alpha: f32) -> Pixel {
    let b = 1.0 - r - g;
    let a = luminance(r, g, b);
    if a == 0.0 {
        Pixel::new(0.0, 0.0, 0.0, alpha)
    } else {
        let k = y / a;
        Pixel::new(r * k, g * k, b * k, alpha)
    }
}

/// Grading RGB → Ych.
pub fn grading_rgb_to_ych(rgb: Pixel) -> Pixel {
    let y = luminance(rgb.x, rgb.y, rgb.z).max(0.0);
    let (r, g) = chromaticity(rgb);

    let r = r - D65_R;
    let g = g - D65_G;

    let c = g.hypot(r);
    let h = if y == 0.0 { 0.0 } else { g.atan2(r) };
    Pixel::new(y, c, h, rgb.w)
}

/// Ych → grading RGB.
pub fn ych_to_grading_rgb(ych: Pixel) -> Pixel {
    let r = ych.y * ych.z.cos() + D65_R;
    let g = ych.y * ych.z.sin() + D65_G;
    rescale(ych.x, r, g, ych.w)
}

/// Grading RGB → Yrg.
pub fn grading_rgb_to_yrg(rgb: Pixel) -> Pixel {
    let y = luminance(rgb.x, rgb.y, rgb.z).max(0.0);
    let (r, g) = chromaticity(rgb);
    Pixel::new(y, r, g, rgb.w)
}

/// Yrg → grading RGB.
pub fn yrg_to_grading_rgb(yrg: Pixel) -> Pixel {
    rescale(yrg.x, yrg.y, yrg.z, yrg.w)
}
