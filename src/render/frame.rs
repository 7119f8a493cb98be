use std::path::Path;

use crate::foundation::core::Color;
use crate::foundation::error::{TailfinError, TailfinResult};

/// A rendered frame as linear RGB `f32` pixels in `[0, 1]`.
///
/// The whole pipeline, rasterizer and post passes alike, works on this type;
/// conversion to 8-bit happens once at the output edge.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRgb {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl FrameRgb {
    /// Black frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Frame filled with one color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut data = Vec::with_capacity((width as usize) * (height as usize) * 3);
        for _ in 0..(width as usize) * (height as usize) {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wrap raw channel data; `data.len()` must equal `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<f32>) -> TailfinResult<Self> {
        if data.len() != (width as usize) * (height as usize) * 3 {
            return Err(TailfinError::render(
                "frame data length must be width * height * 3",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw channel data, row-major RGB.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw channel data.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Pixel at `(x, y)`; coordinates clamp to the frame edge.
    pub fn pixel_clamped(&self, x: i64, y: i64) -> [f32; 3] {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        let i = (y * self.width as usize + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Pixel at `(x, y)` without clamping.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        self.pixel_clamped(i64::from(x), i64::from(y))
    }

    /// Overwrite pixel `(x, y)`; out-of-bounds writes are dropped.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [f32; 3]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Clamp every channel into `[0, 1]`.
    pub fn clamp01(&mut self) {
        for v in &mut self.data {
            *v = v.clamp(0.0, 1.0);
        }
    }

    /// Convert to tightly packed RGBA8 with full alpha.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() / 3 * 4);
        for px in self.data.chunks_exact(3) {
            for c in px {
                out.push((c.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
            out.push(255);
        }
        out
    }

    /// Write the frame as a PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> TailfinResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| TailfinError::render(format!("write png '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
