//! Separable resampler.
//!
//! A sample at a continuous coordinate `(x, y)` is the 2D convolution of the
//! source with a kernel, computed as two 1D passes:
//!
//! ```text
//!   row(j)  = Σᵢ wx(i) · src(x₀ + i, y₀ + j)       horizontal, per tap row
//!   sample  = Σⱼ wy(j) · row(j) / (Σwx · Σwy)
//! ```
//!
//! Taps outside the buffer are clamped to the nearest edge sample. When all
//! taps fall inside the buffer the clamp changes nothing.

use glam::Vec4;
use rayon::prelude::*;

use crate::colorspace::Pixel;
use crate::error::{LumenError, Result};
use crate::image::RgbaImage;
use crate::interpolation::{Kernel, KernelTaps};

/// Read-only strided view over one channel of float samples.
#[derive(Debug, Clone, Copy)]
pub struct SampleView<'a> {
    data: &'a [f32],
    width: usize,
    height: usize,
    sample_stride: usize,
    line_stride: usize,
}

impl<'a> SampleView<'a> {
    /// View `width × height` samples. Strides are in `f32` elements.
    pub fn new(
        data: &'a [f32],
        width: usize,
        height: usize,
        sample_stride: usize,
        line_stride: usize,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LumenError::EmptyBuffer);
        }
        let needed = (height - 1)
            .checked_mul(line_stride)
            .and_then(|rows| {
                (width - 1)
                    .checked_mul(sample_stride)
                    .and_then(|cols| rows.checked_add(cols))
            })
            .and_then(|last| last.checked_add(1))
            .unwrap_or(usize::MAX);
        if data.len() < needed {
            return Err(LumenError::BufferTooSmall {
                needed,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            sample_stride,
            line_stride,
        })
    }

    /// View with strides given in bytes, as image buffers usually describe
    /// them. Both strides must be whole samples.
    pub fn from_byte_strides(
        data: &'a [f32],
        width: usize,
        height: usize,
        sample_stride_bytes: usize,
        line_stride_bytes: usize,
    ) -> Result<Self> {
        const SAMPLE: usize = size_of::<f32>();
        for stride in [sample_stride_bytes, line_stride_bytes] {
            if stride % SAMPLE != 0 {
                return Err(LumenError::InvalidStride { stride });
            }
        }
        Self::new(
            data,
            width,
            height,
            sample_stride_bytes / SAMPLE,
            line_stride_bytes / SAMPLE,
        )
    }

    /// Channel `c` (0..=3) of an interleaved RGBA image.
    pub fn channel(image: &'a RgbaImage, c: usize) -> Result<Self> {
        if c > 3 {
            return Err(LumenError::InvalidChannel { channel: c });
        }
        let (width, height) = (image.width as usize, image.height as usize);
        if width == 0 || height == 0 {
            return Err(LumenError::EmptyBuffer);
        }
        Self::new(&image.samples()[c..], width, height, 4, 4 * width)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sample at integer `(x, y)`. Panics if out of range.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.line_stride + x * self.sample_stride]
    }
}

#[inline]
fn clamp_tap(first: i64, i: usize, len: usize) -> usize {
    (first + i as i64).clamp(0, len as i64 - 1) as usize
}

/// Interpolated sample of `view` at `(x, y)`.
///
/// At integer coordinates every kernel returns the source sample unchanged.
pub fn compute_sample(kernel: &Kernel, view: &SampleView<'_>, x: f32, y: f32) -> f32 {
    let hx = kernel.taps(x);
    let hy = kernel.taps(y);

    let mut acc = 0.0;
    for (j, &wy) in hy.as_slice().iter().enumerate() {
        let row = clamp_tap(hy.first, j, view.height);
        let mut line = 0.0;
        for (i, &wx) in hx.as_slice().iter().enumerate() {
            line += wx * view.get(clamp_tap(hx.first, i, view.width), row);
        }
        acc += wy * line;
    }
    acc / (hx.norm * hy.norm)
}

/// Interpolate all four lanes of `image` at `(x, y)`.
///
/// Returns zero for an empty image.
pub fn compute_pixel(kernel: &Kernel, image: &RgbaImage, x: f32, y: f32) -> Pixel {
    if image.width == 0 || image.height == 0 {
        return Pixel::ZERO;
    }
    let hx = kernel.taps(x);
    let hy = kernel.taps(y);
    pixel_from_taps(image, &hx, &hy)
}

fn pixel_from_taps(image: &RgbaImage, hx: &KernelTaps, hy: &KernelTaps) -> Pixel {
    let (width, height) = (image.width as usize, image.height as usize);

    let mut acc = Vec4::ZERO;
    for (j, &wy) in hy.as_slice().iter().enumerate() {
        let row = clamp_tap(hy.first, j, height) * width;
        let mut line = Vec4::ZERO;
        for (i, &wx) in hx.as_slice().iter().enumerate() {
            let px = Vec4::from_array(image.pixels[row + clamp_tap(hx.first, i, width)]);
            line += wx * px;
        }
        acc += wy * line;
    }
    acc / (hx.norm * hy.norm)
}

/// Rescale `src` to `width × height`.
///
/// Destination pixel centres map onto source coordinates as
/// `sx = (dx + 0.5)·sw/dw − 0.5`. Rows run in parallel. An empty source
/// gives an all-zero destination.
pub fn resample_image(kernel: &Kernel, src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    tracing::debug!(
        "resampling {}x{} -> {}x{} with {}",
        src.width,
        src.height,
        width,
        height,
        kernel.name()
    );

    let mut dst = RgbaImage::filled(width, height, [0.0; 4]);
    if src.width == 0 || src.height == 0 || dst.pixels.is_empty() {
        return dst;
    }

    let scale_x = src.width as f32 / width as f32;
    let scale_y = src.height as f32 / height as f32;
    let row_len = width as usize;

    // Horizontal taps are the same for every row.
    let columns: Vec<KernelTaps> = (0..row_len)
        .map(|dx| kernel.taps((dx as f32 + 0.5) * scale_x - 0.5))
        .collect();

    dst.pixels
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(dy, row)| {
            let hy = kernel.taps((dy as f32 + 0.5) * scale_y - 0.5);
            for (px, hx) in row.iter_mut().zip(&columns) {
                *px = pixel_from_taps(src, hx, &hy).to_array();
            }
        });
    dst
}
