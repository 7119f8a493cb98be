use crate::foundation::math::smoothstep;
use crate::post::{ContourSettings, PassCtx, PostPass, map_pixels};
use crate::render::FrameRgb;

/// Sobel edge darkening.
///
/// Gradient magnitude picks up silhouettes; a soft mask blends each edge
/// pixel toward a darkened version of its own color, so outlines read as ink
/// without tinting edges with a foreign hue.
#[derive(Clone, Copy, Debug)]
pub struct ContourPass {
    settings: ContourSettings,
}

impl ContourPass {
    /// Pass from settings.
    pub fn new(settings: ContourSettings) -> Self {
        Self { settings }
    }
}

impl PostPass for ContourPass {
    fn name(&self) -> &'static str {
        "contour"
    }

    fn apply(&self, src: &FrameRgb, _ctx: &PassCtx) -> FrameRgb {
        let step = self.settings.thickness.max(0.0);
        let darkness = self.settings.darkness.clamp(0.0, 1.0);

        map_pixels(src, |x, y, center| {
            let sample = |dx: f32, dy: f32| -> [f32; 3] {
                src.pixel_clamped(
                    i64::from(x) + (dx * step).round() as i64,
                    i64::from(y) + (dy * step).round() as i64,
                )
            };

            let tl = sample(-1.0, -1.0);
            let t = sample(0.0, -1.0);
            let tr = sample(1.0, -1.0);
            let l = sample(-1.0, 0.0);
            let r = sample(1.0, 0.0);
            let bl = sample(-1.0, 1.0);
            let b = sample(0.0, 1.0);
            let br = sample(1.0, 1.0);

            let mut gx_sq = 0.0f32;
            let mut gy_sq = 0.0f32;
            for c in 0..3 {
                let gx = -tl[c] - 2.0 * l[c] - bl[c] + tr[c] + 2.0 * r[c] + br[c];
                let gy = -tl[c] - 2.0 * t[c] - tr[c] + bl[c] + 2.0 * b[c] + br[c];
                gx_sq += gx * gx;
                gy_sq += gy * gy;
            }

            let edge = smoothstep(0.15, 0.4, gx_sq.sqrt() + gy_sq.sqrt());
            let mix = edge * darkness;
            [
                center[0] + (center[0] * 0.3 - center[0]) * mix,
                center[1] + (center[1] * 0.3 - center[1]) * mix,
                center[2] + (center[2] * 0.3 - center[2]) * mix,
            ]
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/post/contour.rs"]
mod tests;
