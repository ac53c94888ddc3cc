//! Linear RGB ↔ XYZ matrix transforms for ProPhoto RGB and sRGB.
//!
//! ProPhoto uses the D50 pair, sRGB its own pair. The forward and inverse
//! matrices of each pair are inverses of one another to working precision.

use glam::Mat3;

use super::{Pixel, apply_matrix, lab_to_xyz, mat3_from_rows, xyz_to_lab};

const PROPHOTO_TO_XYZ: Mat3 = mat3_from_rows([
    [0.7976749, 0.1351917, 0.0313534],
    [0.2880402, 0.7118741, 0.0000857],
    [0.0000000, 0.0000000, 0.8252100],
]);

const XYZ_TO_PROPHOTO: Mat3 = mat3_from_rows([
    [1.3459433, -0.2556075, -0.0511118],
    [-0.5445989, 1.5081673, 0.0205351],
    [0.0000000, 0.0000000, 1.2118128],
]);

const SRGB_TO_XYZ: Mat3 = mat3_from_rows([
    [0.4360747, 0.3850649, 0.1430804],
    [0.2225045, 0.7168786, 0.0606169],
    [0.0139322, 0.0971045, 0.7141733],
]);

const XYZ_TO_SRGB: Mat3 = mat3_from_rows([
    [3.1338561, -1.6168667, -0.4906146],
    [-0.9787684, 1.9161415, 0.0334540],
    [0.0719453, -0.2289914, 1.4052427],
]);

/// Linear ProPhoto RGB → XYZ.
pub fn prophoto_rgb_to_xyz(rgb: Pixel) -> Pixel {
    apply_matrix(&PROPHOTO_TO_XYZ, rgb)
}

/// XYZ → linear ProPhoto RGB.
pub fn xyz_to_prophoto_rgb(xyz: Pixel) -> Pixel {
    apply_matrix(&XYZ_TO_PROPHOTO, xyz)
}

/// Lab → linear ProPhoto RGB, through XYZ.
pub fn lab_to_prophoto_rgb(lab: Pixel) -> Pixel {
    xyz_to_prophoto_rgb(lab_to_xyz(lab))
}

/// Linear ProPhoto RGB → Lab, through XYZ.
pub fn prophoto_rgb_to_lab(rgb: Pixel) -> Pixel {
    xyz_to_lab(prophoto_rgb_to_xyz(rgb))
}

/// XYZ → linear sRGB.
pub fn xyz_to_srgb(xyz: Pixel) -> Pixel {
    apply_matrix(&XYZ_TO_SRGB, xyz)
}

/// Linear sRGB → XYZ.
pub fn srgb_to_xyz(rgb: Pixel) -> Pixel {
    apply_matrix(&SRGB_TO_XYZ, rgb)
}
