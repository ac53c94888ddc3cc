//! Kernel catalog: support width plus scalar and 4-lane weight functions.
//!
//! The set of kernels is closed, so the catalog is a static table indexed by
//! [`InterpolationKind`] and every weight call dispatches on the kind tag.
//! The scalar and vectorized paths evaluate the same formula with the same
//! operation order; they must agree to floating tolerance for every input.
//!
//! # Kernels
//! ```text
//! bilinear   |t| < 1 : 1 − |t|
//!
//! bicubic    |t| ≤ 1 : ½·(|t|·(3t² − 5|t|) + 2)                  a = −0.5
//!        1 < |t| < 2 : ½·(|t|·(−t² + 5|t| − 8) + 4)
//!
//! lanczos    t = 0   : 1
//!        0 < |t| < w : w·sin(πt)·sin(πt/w) / (π²t²)
//! ```
//! All kernels are `0` outside their support. Lanczos uses a bounded
//! fast-sine approximation valid on `[−π, π]`; `sin(πt)` is evaluated as
//! `±sin(π·r)` with `r = t − trunc(t)`, which keeps every nonzero integer
//! offset at exactly `0`.

use std::f32::consts::PI;

use glam::Vec4;

use super::InterpolationKind;

/// Largest half width in the catalog.
pub const MAX_HALF_WIDTH: usize = 3;
/// Largest number of taps a kernel needs along one axis.
pub const MAX_TAPS: usize = 2 * MAX_HALF_WIDTH;
/// Tap storage rounded up to whole 4-lane groups.
const TAP_LANES: usize = MAX_TAPS.div_ceil(4) * 4;

/// An interpolation kernel descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    kind: InterpolationKind,
}

static KERNELS: [Kernel; 4] = [
    Kernel {
        kind: InterpolationKind::Bilinear,
    },
    Kernel {
        kind: InterpolationKind::Bicubic,
    },
    Kernel {
        kind: InterpolationKind::Lanczos2,
    },
    Kernel {
        kind: InterpolationKind::Lanczos3,
    },
];

/// Weights for the `2·width` taps around one fractional position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelTaps {
    /// Index of the first tap: `⌊t⌋ − width + 1`.
    pub first: i64,
    /// Number of valid entries in `weights`.
    pub len: usize,
    /// Tap weights, first tap first. Entries past `len` are zero.
    pub weights: [f32; TAP_LANES],
    /// Sum of the valid weights.
    pub norm: f32,
}

impl KernelTaps {
    /// The valid weights.
    pub fn as_slice(&self) -> &[f32] {
        &self.weights[..self.len]
    }
}

impl Kernel {
    /// Descriptor for `kind`. Never fails.
    pub fn lookup(kind: InterpolationKind) -> &'static Kernel {
        &KERNELS[kind.id() as usize]
    }

    /// Descriptor for a persisted id. Unknown ids resolve to the default
    /// kernel (bilinear).
    pub fn lookup_id(id: u32) -> &'static Kernel {
        Self::lookup(InterpolationKind::from(id))
    }

    /// The whole catalog in id order.
    pub fn all() -> &'static [Kernel] {
        &KERNELS
    }

    pub fn kind(&self) -> InterpolationKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Half width of the support, in samples.
    pub fn width(&self) -> usize {
        self.kind.half_width()
    }

    /// Kernel weight at signed offset `t`.
    #[inline]
    pub fn weight(&self, t: f32) -> f32 {
        let width = self.width() as f32;
        match self.kind {
            InterpolationKind::Bilinear => bilinear(t),
            InterpolationKind::Bicubic => bicubic(t),
            InterpolationKind::Lanczos2 | InterpolationKind::Lanczos3 => lanczos(width, t),
        }
    }

    /// Kernel weights at four offsets at once.
    #[inline]
    pub fn weight4(&self, t: Vec4) -> Vec4 {
        let width = self.width() as f32;
        match self.kind {
            InterpolationKind::Bilinear => bilinear4(t),
            InterpolationKind::Bicubic => bicubic4(t),
            InterpolationKind::Lanczos2 | InterpolationKind::Lanczos3 => {
                lanczos4(Vec4::splat(width), t)
            }
        }
    }

    /// Tap weights for position `t`, four taps per evaluation.
    ///
    /// Tap `i` sits at `first + i` and is weighted by `weight(t − (first + i))`.
    pub fn taps(&self, t: f32) -> KernelTaps {
        let (first, len, offset) = self.tap_layout(t);
        let mut weights = [0.0_f32; TAP_LANES];

        let step = Vec4::new(0.0, 1.0, 2.0, 3.0);
        for (lane, chunk) in weights.chunks_exact_mut(4).enumerate() {
            if lane * 4 >= len {
                break;
            }
            let offsets = Vec4::splat(offset - (lane * 4) as f32) - step;
            chunk.copy_from_slice(&self.weight4(offsets).to_array());
        }
        weights[len..].fill(0.0);

        let norm = weights[..len].iter().sum();
        KernelTaps {
            first,
            len,
            weights,
            norm,
        }
    }

    /// Tap weights for position `t`, one tap at a time.
    pub fn taps_scalar(&self, t: f32) -> KernelTaps {
        let (first, len, offset) = self.tap_layout(t);
        let mut weights = [0.0_f32; TAP_LANES];
        for (i, w) in weights[..len].iter_mut().enumerate() {
            *w = self.weight(offset - i as f32);
        }
        let norm = weights[..len].iter().sum();
        KernelTaps {
            first,
            len,
            weights,
            norm,
        }
    }

    /// First tap index, tap count, and the offset of the first tap.
    #[inline]
    fn tap_layout(&self, t: f32) -> (i64, usize, f32) {
        let width = self.width();
        let base = t.floor();
        let first = base as i64 - width as i64 + 1;
        let offset = (t - base) + (width - 1) as f32;
        (first, 2 * width, offset)
    }
}

// ---------------------------------------------------------------------------
// Scalar kernels
// ---------------------------------------------------------------------------

#[inline]
fn bilinear(t: f32) -> f32 {
    (1.0 - t.abs()).max(0.0)
}

#[inline]
fn bicubic(t: f32) -> f32 {
    let t = t.abs();
    let t2 = t * t;
    if t <= 1.0 {
        0.5 * (t * (3.0 * t2 - 5.0 * t) + 2.0)
    } else if t < 2.0 {
        0.5 * (t * (-t2 + 5.0 * t - 8.0) + 4.0)
    } else {
        0.0
    }
}

/// Parabolic sine approximation, accurate to ~1e-3 on `[−π, π]`.
#[inline]
fn sinf_fast(t: f32) -> f32 {
    const A: f32 = 4.0 / (PI * PI);
    const P: f32 = 0.225;
    let t = A * t * (PI - t.abs());
    P * t * (t.abs() - 1.0) + t
}

#[inline]
fn lanczos(width: f32, t: f32) -> f32 {
    if t == 0.0 {
        return 1.0;
    }
    if t.abs() >= width {
        return 0.0;
    }
    let a = t.trunc();
    let r = t - a;
    let sign = if (a * 0.5).trunc() != a * 0.5 { -1.0 } else { 1.0 };
    (width * sign * sinf_fast(PI * r) * sinf_fast(PI * t / width)) / (PI * PI * t * t)
}

// ---------------------------------------------------------------------------
// 4-lane kernels
// ---------------------------------------------------------------------------

#[inline]
fn bilinear4(t: Vec4) -> Vec4 {
    (Vec4::ONE - t.abs()).max(Vec4::ZERO)
}

#[inline]
fn bicubic4(t: Vec4) -> Vec4 {
    let t = t.abs();
    let t2 = t * t;
    let inner = 0.5 * (t * (3.0 * t2 - 5.0 * t) + 2.0);
    let outer = 0.5 * (t * (-t2 + 5.0 * t - 8.0) + 4.0);
    let outer = Vec4::select(t.cmplt(Vec4::splat(2.0)), outer, Vec4::ZERO);
    Vec4::select(t.cmple(Vec4::ONE), inner, outer)
}

#[inline]
fn sinf_fast4(t: Vec4) -> Vec4 {
    const A: f32 = 4.0 / (PI * PI);
    const P: f32 = 0.225;
    let t = A * t * (PI - t.abs());
    P * t * (t.abs() - 1.0) + t
}

#[inline]
fn lanczos4(width: Vec4, t: Vec4) -> Vec4 {
    let a = t.trunc();
    let r = t - a;
    let half = a * 0.5;
    let sign = Vec4::select(half.trunc().cmpne(half), Vec4::NEG_ONE, Vec4::ONE);
    let w = (width * sign * sinf_fast4(PI * r) * sinf_fast4(PI * t / width)) / (PI * PI * t * t);

    let w = Vec4::select(t.abs().cmpge(width), Vec4::ZERO, w);
    Vec4::select(t.cmpeq(Vec4::ZERO), Vec4::ONE, w)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn offsets() -> impl Iterator<Item = f32> {
        (-400..=400).map(|i| i as f32 / 100.0)
    }

    #[test]
    fn test_support_widths() {
        let widths: Vec<_> = Kernel::all().iter().map(Kernel::width).collect();
        assert_eq!(widths, [1, 2, 2, 3]);
    }

    #[test]
    fn test_lookup_matches_kind() {
        for kind in InterpolationKind::ALL {
            assert_eq!(Kernel::lookup(kind).kind(), kind);
        }
    }

    #[test]
    fn test_unknown_id_resolves_to_bilinear() {
        assert_eq!(Kernel::lookup_id(9).kind(), InterpolationKind::Bilinear);
        assert_eq!(Kernel::lookup_id(3).kind(), InterpolationKind::Lanczos3);
    }

    #[test]
    fn test_scalar_and_vector_weights_agree() {
        for kernel in Kernel::all() {
            let ts: Vec<f32> = offsets().collect();
            for chunk in ts.chunks_exact(4) {
                let v = kernel.weight4(Vec4::from_slice(chunk)).to_array();
                for (lane, &t) in chunk.iter().enumerate() {
                    let s = kernel.weight(t);
                    assert!(
                        (s - v[lane]).abs() < EPSILON,
                        "{}: t={t} scalar={s} vector={}",
                        kernel.name(),
                        v[lane]
                    );
                }
            }
        }
    }

    #[test]
    fn test_unit_weight_at_origin_zero_at_integers() {
        for kernel in Kernel::all() {
            assert_eq!(kernel.weight(0.0), 1.0, "{}", kernel.name());
            let width = kernel.width() as i32;
            for i in (-width..=width).filter(|&i| i != 0) {
                assert_eq!(kernel.weight(i as f32), 0.0, "{} at {i}", kernel.name());
            }
            let v = kernel.weight4(Vec4::new(0.0, 1.0, -1.0, 2.0));
            assert_eq!(v.x, 1.0);
            assert_eq!(v.y, 0.0);
            assert_eq!(v.z, 0.0);
            assert_eq!(v.w, 0.0);
        }
    }

    #[test]
    fn test_zero_outside_support() {
        for kernel in Kernel::all() {
            let width = kernel.width() as f32;
            for t in [width, width + 0.5, -width - 0.25, 10.0] {
                assert_eq!(kernel.weight(t), 0.0, "{} at {t}", kernel.name());
            }
        }
    }

    #[test]
    fn test_kernels_are_symmetric() {
        for kernel in Kernel::all() {
            for t in offsets() {
                assert!((kernel.weight(t) - kernel.weight(-t)).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_bicubic_reference_values() {
        let kernel = Kernel::lookup(InterpolationKind::Bicubic);
        // Catmull-Rom at half-sample offsets.
        assert!((kernel.weight(0.5) - 0.5625).abs() < EPSILON);
        assert!((kernel.weight(1.5) + 0.0625).abs() < EPSILON);
    }

    #[test]
    fn test_lanczos_close_to_exact_sinc() {
        // Bounded by the fast-sine error, which peaks near the origin.
        for kind in [InterpolationKind::Lanczos2, InterpolationKind::Lanczos3] {
            let kernel = Kernel::lookup(kind);
            let w = kernel.width() as f32;
            for t in offsets().filter(|t| t.abs() < w && *t != 0.0) {
                let exact = w * (PI * t).sin() * (PI * t / w).sin() / (PI * PI * t * t);
                assert!(
                    (kernel.weight(t) - exact).abs() < 3e-2,
                    "{kind} at {t}: {} vs {exact}",
                    kernel.weight(t)
                );
            }
        }
    }

    #[test]
    fn test_tap_layout() {
        let kernel = Kernel::lookup(InterpolationKind::Lanczos3);
        let taps = kernel.taps(10.25);
        assert_eq!(taps.first, 8);
        assert_eq!(taps.len, 6);

        let kernel = Kernel::lookup(InterpolationKind::Bilinear);
        let taps = kernel.taps(3.25);
        assert_eq!(taps.first, 3);
        assert_eq!(taps.as_slice(), &[0.75, 0.25]);
        assert!((taps.norm - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_taps_on_grid_are_a_unit_impulse() {
        for kernel in Kernel::all() {
            let taps = kernel.taps(5.0);
            let width = kernel.width();
            assert_eq!(taps.first, 5 - width as i64 + 1);
            for (i, &w) in taps.as_slice().iter().enumerate() {
                let expected = if i == width - 1 { 1.0 } else { 0.0 };
                assert_eq!(w, expected, "{} tap {i}", kernel.name());
            }
            assert_eq!(taps.norm, 1.0);
        }
    }

    #[test]
    fn test_vector_and_scalar_taps_agree() {
        for kernel in Kernel::all() {
            for t in [0.0_f32, 0.1, 0.5, 0.99, 7.3, -2.6] {
                let v = kernel.taps(t);
                let s = kernel.taps_scalar(t);
                assert_eq!(v.first, s.first);
                assert_eq!(v.len, s.len);
                for (a, b) in v.as_slice().iter().zip(s.as_slice()) {
                    assert!((a - b).abs() < EPSILON, "{}: {a} vs {b}", kernel.name());
                }
                assert!((v.norm - s.norm).abs() < EPSILON);
            }
        }
    }
}
