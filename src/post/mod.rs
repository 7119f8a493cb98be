//! Image-space pass chain reproducing the vintage illustration look.
//!
//! Pass order is fixed and significant: smoothing first so later passes see
//! painterly regions, edge darkening before grain so outlines stay crisp,
//! grading after texture, vignette last.

mod contour;
mod grade;
mod grain;
mod smooth;
mod vignette;

pub use contour::ContourPass;
pub use grade::{ColorAdjustPass, WarmGradePass};
pub use grain::{FineNoisePass, PaperGrainPass};
pub use smooth::SmoothPass;
pub use vignette::VignettePass;

use crate::foundation::error::TailfinResult;
use crate::render::FrameRgb;

/// Per-frame uniforms shared by every pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassCtx {
    /// Scene time in seconds; animates the fine grain.
    pub time_secs: f32,
    /// Base seed for the stateless pixel hashes.
    pub noise_seed: u32,
}

/// One image-space pass: a pure function of the previous pass's output.
///
/// Implementations must tolerate arbitrary input in `[0, 1]` and clamp their
/// output back into `[0, 1]`; kernels work in pixel space and read the frame
/// dimensions every call, so resizes need no extra plumbing.
pub trait PostPass: Send + Sync {
    /// Pass label for logs.
    fn name(&self) -> &'static str;
    /// Transform `src` into a new frame of the same dimensions.
    fn apply(&self, src: &FrameRgb, ctx: &PassCtx) -> FrameRgb;
}

/// Edge-darkening settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContourSettings {
    /// Sample offset in texels.
    pub thickness: f32,
    /// Blend strength toward the darkened color.
    pub darkness: f32,
}

impl Default for ContourSettings {
    fn default() -> Self {
        Self {
            thickness: 1.0,
            darkness: 0.9,
        }
    }
}

/// Paper-texture settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaperSettings {
    /// Multiply-blend strength.
    pub intensity: f32,
    /// Noise cells across the frame.
    pub scale: f32,
}

impl Default for PaperSettings {
    fn default() -> Self {
        Self {
            intensity: 0.08,
            scale: 60.0,
        }
    }
}

/// Warm-shift and color adjustment settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradeSettings {
    /// Warm tone shift amount.
    pub warmth: f32,
    /// Fade toward paper white.
    pub fade: f32,
    /// Saturation boost.
    pub saturation: f32,
    /// Brightness offset.
    pub brightness: f32,
    /// Contrast gain.
    pub contrast: f32,
}

impl Default for GradeSettings {
    fn default() -> Self {
        Self {
            warmth: 0.4,
            fade: 0.1,
            saturation: 0.35,
            brightness: 0.05,
            contrast: 0.15,
        }
    }
}

/// Vignette settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VignetteSettings {
    /// Radius where darkening begins, normalized to the corner distance.
    pub offset: f32,
    /// Darkening strength at the corners.
    pub darkness: f32,
}

impl Default for VignetteSettings {
    fn default() -> Self {
        Self {
            offset: 0.4,
            darkness: 0.25,
        }
    }
}

/// Settings for the whole chain; all numeric tuning is data.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PostSettings {
    /// Skip the chain entirely when false.
    pub enabled: bool,
    /// Smoothing window radius in pixels.
    pub smoothing_radius: u32,
    /// Edge darkening.
    pub contour: ContourSettings,
    /// Paper grain.
    pub paper: PaperSettings,
    /// Warm shift plus saturation/brightness/contrast.
    pub grade: GradeSettings,
    /// Fine per-pixel noise opacity.
    pub noise_opacity: f32,
    /// Vignette.
    pub vignette: VignetteSettings,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            smoothing_radius: 3,
            contour: ContourSettings::default(),
            paper: PaperSettings::default(),
            grade: GradeSettings::default(),
            noise_opacity: 0.12,
            vignette: VignetteSettings::default(),
        }
    }
}

/// The ordered pass chain.
pub struct PostChain {
    passes: Vec<Box<dyn PostPass>>,
}

impl PostChain {
    /// Build the fixed chain from settings.
    pub fn from_settings(settings: &PostSettings) -> Self {
        let passes: Vec<Box<dyn PostPass>> = if settings.enabled {
            vec![
                Box::new(SmoothPass::new(settings.smoothing_radius)),
                Box::new(ContourPass::new(settings.contour)),
                Box::new(PaperGrainPass::new(settings.paper)),
                Box::new(WarmGradePass::new(settings.grade)),
                Box::new(ColorAdjustPass::new(settings.grade)),
                Box::new(FineNoisePass::new(settings.noise_opacity)),
                Box::new(VignettePass::new(settings.vignette)),
            ]
        } else {
            Vec::new()
        };
        Self { passes }
    }

    /// Number of passes in the chain.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// True when the chain is disabled.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every pass in order over `frame`.
    pub fn apply(&self, frame: FrameRgb, ctx: &PassCtx) -> TailfinResult<FrameRgb> {
        let mut current = frame;
        for pass in &self.passes {
            let span = tracing::debug_span!("post_pass", pass = pass.name());
            let _guard = span.enter();
            current = pass.apply(&current, ctx);
        }
        Ok(current)
    }
}

/// Map every pixel of `src` in parallel rows.
pub(crate) fn map_pixels<F>(src: &FrameRgb, f: F) -> FrameRgb
where
    F: Fn(u32, u32, [f32; 3]) -> [f32; 3] + Send + Sync,
{
    use rayon::prelude::*;

    let (w, h) = (src.width(), src.height());
    let mut data = vec![0.0f32; (w as usize) * (h as usize) * 3];
    data.par_chunks_mut(w as usize * 3)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as u32;
            for x in 0..w {
                let out = f(x, y, src.pixel(x, y));
                let i = x as usize * 3;
                row[i] = out[0].clamp(0.0, 1.0);
                row[i + 1] = out[1].clamp(0.0, 1.0);
                row[i + 2] = out[2].clamp(0.0, 1.0);
            }
        });

    FrameRgb::from_raw(w, h, data).unwrap_or_else(|_| FrameRgb::new(w, h))
}

#[cfg(test)]
#[path = "../../tests/unit/post/chain.rs"]
mod tests;
