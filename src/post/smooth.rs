use crate::post::{PassCtx, PostPass, map_pixels};
use crate::render::FrameRgb;

/// Variance-minimizing smoothing (Kuwahara).
///
/// For each pixel, four overlapping square windows (toward each corner) are
/// averaged; the window with the lowest summed channel variance wins. Flat
/// regions blur into painterly patches while edges stay put, which is what
/// gives gouache illustrations their filled-in look.
#[derive(Clone, Copy, Debug)]
pub struct SmoothPass {
    radius: i64,
}

impl SmoothPass {
    /// Pass with the given window radius in pixels.
    pub fn new(radius: u32) -> Self {
        Self {
            radius: i64::from(radius.clamp(1, 8)),
        }
    }
}

impl PostPass for SmoothPass {
    fn name(&self) -> &'static str {
        "smooth"
    }

    fn apply(&self, src: &FrameRgb, _ctx: &PassCtx) -> FrameRgb {
        let r = self.radius;
        // Quadrant x/y spans relative to the pixel.
        let quadrants: [(i64, i64, i64, i64); 4] = [
            (-r, 0, -r, 0),
            (0, r, -r, 0),
            (0, r, 0, r),
            (-r, 0, 0, r),
        ];

        map_pixels(src, |x, y, center| {
            let mut best = center;
            let mut best_variance = f32::INFINITY;

            for (x0, x1, y0, y1) in quadrants {
                let mut sum = [0.0f32; 3];
                let mut sq_sum = [0.0f32; 3];
                let mut count = 0.0f32;

                for dy in y0..=y1 {
                    for dx in x0..=x1 {
                        let s = src.pixel_clamped(i64::from(x) + dx, i64::from(y) + dy);
                        for c in 0..3 {
                            sum[c] += s[c];
                            sq_sum[c] += s[c] * s[c];
                        }
                        count += 1.0;
                    }
                }

                let mut mean = [0.0f32; 3];
                let mut variance = 0.0f32;
                for c in 0..3 {
                    mean[c] = sum[c] / count;
                    variance += (sq_sum[c] / count - mean[c] * mean[c]).abs();
                }

                if variance < best_variance {
                    best_variance = variance;
                    best = mean;
                }
            }
            best
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/post/smooth.rs"]
mod tests;
