use crate::foundation::math::lerp;
use crate::post::{GradeSettings, PassCtx, PostPass, map_pixels};
use crate::render::FrameRgb;

/// Warm tone shift plus a light fade toward paper white.
///
/// Mid-century print stock pushed reds up and blues down; the fade mimics
/// decades of pigment bleaching.
#[derive(Clone, Copy, Debug)]
pub struct WarmGradePass {
    settings: GradeSettings,
}

impl WarmGradePass {
    /// Pass from settings.
    pub fn new(settings: GradeSettings) -> Self {
        Self { settings }
    }
}

impl PostPass for WarmGradePass {
    fn name(&self) -> &'static str {
        "warm_grade"
    }

    fn apply(&self, src: &FrameRgb, _ctx: &PassCtx) -> FrameRgb {
        let warmth = self.settings.warmth;
        let fade = self.settings.fade * 0.1;
        const PAPER: [f32; 3] = [0.95, 0.92, 0.88];

        map_pixels(src, |_x, _y, c| {
            let warmed = [
                c[0] * (1.0 + warmth * 0.1),
                c[1] * (1.0 + warmth * 0.02),
                c[2] * (1.0 - warmth * 0.08),
            ];
            [
                lerp(warmed[0], PAPER[0], fade),
                lerp(warmed[1], PAPER[1], fade),
                lerp(warmed[2], PAPER[2], fade),
            ]
        })
    }
}

/// Saturation boost followed by brightness and contrast.
#[derive(Clone, Copy, Debug)]
pub struct ColorAdjustPass {
    settings: GradeSettings,
}

impl ColorAdjustPass {
    /// Pass from settings.
    pub fn new(settings: GradeSettings) -> Self {
        Self { settings }
    }
}

impl PostPass for ColorAdjustPass {
    fn name(&self) -> &'static str {
        "color_adjust"
    }

    fn apply(&self, src: &FrameRgb, _ctx: &PassCtx) -> FrameRgb {
        let saturation = 1.0 + self.settings.saturation;
        let brightness = self.settings.brightness;
        let contrast = 1.0 + self.settings.contrast;

        map_pixels(src, |_x, _y, c| {
            let luma = 0.299 * c[0] + 0.587 * c[1] + 0.114 * c[2];
            let mut out = [0.0f32; 3];
            for i in 0..3 {
                let saturated = lerp(luma, c[i], saturation);
                let bright = saturated + brightness;
                out[i] = (bright - 0.5) * contrast + 0.5;
            }
            out
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/post/grade.rs"]
mod tests;
