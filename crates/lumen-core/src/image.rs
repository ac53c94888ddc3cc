//! Image representation for whole-buffer conversion and resampling.

use rayon::prelude::*;

use crate::colorspace::Pixel;
use crate::error::{LumenError, Result};

/// Owned interleaved image. Always stored as 4-lane f32 pixels, row-major.
///
/// The fourth lane is alpha for RGB data, but nothing here interprets the
/// lanes: a buffer may just as well hold Lab, JzAzBz or Ych pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data, `width × height` entries.
    pub pixels: Vec<[f32; 4]>,
}

impl RgbaImage {
    /// Wrap existing pixel data, checking that it covers `width × height`.
    pub fn new(width: u32, height: u32, pixels: Vec<[f32; 4]>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(LumenError::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image with every pixel set to `value`.
    pub fn filled(width: u32, height: u32, value: [f32; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width as usize * height as usize],
        }
    }

    /// Pixel at `(x, y)`. Panics if out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        Pixel::from_array(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Interleaved samples as one flat `f32` slice (`4 × width × height`).
    pub fn samples(&self) -> &[f32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Apply a per-pixel conversion to every pixel, one row per task.
    ///
    /// Any of the `colorspace` transforms can be passed directly, e.g.
    /// `image.map_pixels(colorspace::xyz_to_lab)`.
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn(Pixel) -> Pixel + Sync,
    {
        let row_len = (self.width as usize).max(1);
        self.pixels.par_chunks_mut(row_len).for_each(|row| {
            for px in row.iter_mut() {
                *px = f(Pixel::from_array(*px)).to_array();
            }
        });
    }
}
