use crate::foundation::math::smoothstep;
use crate::post::{PassCtx, PostPass, VignetteSettings, map_pixels};
use crate::render::FrameRgb;

/// Radial darkening toward the frame edges.
#[derive(Clone, Copy, Debug)]
pub struct VignettePass {
    settings: VignetteSettings,
}

impl VignettePass {
    /// Pass from settings.
    pub fn new(settings: VignetteSettings) -> Self {
        Self { settings }
    }
}

impl PostPass for VignettePass {
    fn name(&self) -> &'static str {
        "vignette"
    }

    fn apply(&self, src: &FrameRgb, _ctx: &PassCtx) -> FrameRgb {
        let (w, h) = (src.width().max(1) as f32, src.height().max(1) as f32);
        let offset = self.settings.offset.clamp(0.0, 1.0);
        let darkness = self.settings.darkness.clamp(0.0, 1.0);
        map_pixels(src, |x, y, c| {
            let u = x as f32 / w - 0.5;
            let v = y as f32 / h - 0.5;
            // Normalized so the corners land at distance 1.
            let dist = (u * u + v * v).sqrt() / std::f32::consts::FRAC_1_SQRT_2;
            let factor = 1.0 - darkness * smoothstep(offset, 1.0, dist);
            [c[0] * factor, c[1] * factor, c[2] * factor]
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/post/vignette.rs"]
mod tests;
