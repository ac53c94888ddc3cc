//! CIE 1976 L*a*b* (D50) and its polar LCh form.
//!
//! ```text
//! f(t)    = t > ε ? ∛t : (κ·t + 16) / 116          ε = 216/24389, κ = 24389/27
//! L       = 116·f(Y/Yn) − 16
//! a       = 500·(f(X/Xn) − f(Y/Yn))
//! b       = 200·(f(Y/Yn) − f(Z/Zn))
//!
//! f⁻¹(u)  = u > 6/29 ? u³ : (116·u − 16) / κ
//! ```
//!
//! Negative and over-range XYZ are not clamped; the cube root is taken
//! only above ε, so the linear segment handles everything below it.

use std::f32::consts::PI;

use super::Pixel;

/// D50 reference white, `(Xn, Yn, Zn)`.
pub const D50: [f32; 3] = [0.9642, 1.0, 0.8249];

const CIE_EPSILON: f32 = 216.0 / 24389.0;
const CIE_KAPPA: f32 = 24389.0 / 27.0;
/// `6/29`, the f-domain image of `CIE_EPSILON`.
const CIE_EPSILON_F: f32 = 0.206_896_551;

/// Lab → LCh. Hue is a turn fraction.
///
/// ```text
/// H = atan2(b, a)
/// h = H > 0 ? H / 2π : 1 − |H| / 2π
/// ```
///
/// Note that `H == 0` (positive `a`, zero `b`) folds to `1.0`, not `0.0`.
/// This fold differs from [`super::jzazbz_to_jzczhz`] and the two must stay
/// separate.
pub fn lab_to_lch(lab: Pixel) -> Pixel {
    let mut h = lab.z.atan2(lab.y);
    h = if h > 0.0 {
        h / (2.0 * PI)
    } else {
        1.0 - h.abs() / (2.0 * PI)
    };

    let c = (lab.y * lab.y + lab.z * lab.z).sqrt();
    Pixel::new(lab.x, c, h, lab.w)
}

/// LCh → Lab.
pub fn lch_to_lab(lch: Pixel) -> Pixel {
    let angle = 2.0 * PI * lch.z;
    Pixel::new(lch.x, angle.cos() * lch.y, angle.sin() * lch.y, lch.w)
}

#[inline]
fn lab_f(x: f32) -> f32 {
    if x > CIE_EPSILON {
        x.cbrt()
    } else {
        (CIE_KAPPA * x + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(x: f32) -> f32 {
    if x > CIE_EPSILON_F {
        x * x * x
    } else {
        (116.0 * x - 16.0) / CIE_KAPPA
    }
}

/// XYZ (D50) → Lab.
pub fn xyz_to_lab(xyz: Pixel) -> Pixel {
    let fx = lab_f(xyz.x / D50[0]);
    let fy = lab_f(xyz.y / D50[1]);
    let fz = lab_f(xyz.z / D50[2]);

    Pixel::new(
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
        xyz.w,
    )
}

/// Lab → XYZ (D50).
pub fn lab_to_xyz(lab: Pixel) -> Pixel {
    let fy = (lab.x + 16.0) / 116.0;
    let fx = lab.y / 500.0 + fy;
    let fz = fy - lab.z / 200.0;

    Pixel::new(
        D50[0] * lab_f_inv(fx),
        D50[1] * lab_f_inv(fy),
        D50[2] * lab_f_inv(fz),
        lab.w,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn assert_close(a: Pixel, b: Pixel, tol: f32) {
        assert!(
            (a - b).abs().max_element() < tol,
            "{a:?} vs {b:?} (tolerance {tol})"
        );
    }

    #[test]
    fn test_white_is_100() {
        let lab = xyz_to_lab(Pixel::new(D50[0], D50[1], D50[2], 1.0));
        assert_close(lab, Pixel::new(100.0, 0.0, 0.0, 1.0), EPSILON);
    }

    #[test]
    fn test_black_is_0() {
        let lab = xyz_to_lab(Pixel::ZERO);
        assert_close(lab, Pixel::ZERO, EPSILON);
    }

    #[test]
    fn test_xyz_lab_roundtrip() {
        for &x in &[0.0_f32, 0.001, 0.05, 0.2, 0.5, 0.9] {
            for &y in &[0.0_f32, 0.004, 0.1, 0.4, 1.0] {
                for &z in &[0.0_f32, 0.003, 0.3, 0.8] {
                    let xyz = Pixel::new(x, y, z, 0.5);
                    let back = lab_to_xyz(xyz_to_lab(xyz));
                    assert_close(back, xyz, EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_lab_xyz_roundtrip() {
        for &l in &[0.0_f32, 5.0, 25.0, 50.0, 75.0, 100.0] {
            for &a in &[-60.0_f32, -10.0, 0.0, 20.0, 60.0] {
                for &b in &[-60.0_f32, -5.0, 0.0, 30.0, 60.0] {
                    let lab = Pixel::new(l, a, b, 1.0);
                    let back = xyz_to_lab(lab_to_xyz(lab));
                    assert_close(back, lab, EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_hdr_values_pass_unclamped() {
        let lab = xyz_to_lab(Pixel::new(2.0, 3.0, 2.5, 1.0));
        assert!(lab.x > 100.0);
        let back = lab_to_xyz(lab);
        assert_close(back, Pixel::new(2.0, 3.0, 2.5, 1.0), 1e-3);
    }

    #[test]
    fn test_lch_hue_is_turn_fraction() {
        let lch = lab_to_lch(Pixel::new(50.0, 0.0, 10.0, 1.0));
        assert!((lch.y - 10.0).abs() < EPSILON);
        assert!((lch.z - 0.25).abs() < EPSILON);

        let lch = lab_to_lch(Pixel::new(50.0, 0.0, -10.0, 1.0));
        assert!((lch.z - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_lch_zero_angle_folds_to_one() {
        let lch = lab_to_lch(Pixel::new(50.0, 10.0, 0.0, 1.0));
        assert_eq!(lch.z, 1.0);
    }

    #[test]
    fn test_lab_lch_roundtrip() {
        let lab = Pixel::new(62.0, -23.0, 41.0, 0.3);
        let back = lch_to_lab(lab_to_lch(lab));
        assert_close(back, lab, 1e-3);
    }
}
