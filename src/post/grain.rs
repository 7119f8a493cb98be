use crate::foundation::math::{hash01, lerp};
use crate::post::{PaperSettings, PassCtx, PostPass, map_pixels};
use crate::render::FrameRgb;

/// Multiplicative paper texture from fractal value noise.
///
/// Four octaves of smoothed value noise make the broad fiber structure; a
/// fine hash on top adds tooth. The texture multiplies the image, as printed
/// ink on toothy stock would.
#[derive(Clone, Copy, Debug)]
pub struct PaperGrainPass {
    settings: PaperSettings,
}

impl PaperGrainPass {
    /// Pass from settings.
    pub fn new(settings: PaperSettings) -> Self {
        Self { settings }
    }
}

impl PostPass for PaperGrainPass {
    fn name(&self) -> &'static str {
        "paper_grain"
    }

    fn apply(&self, src: &FrameRgb, ctx: &PassCtx) -> FrameRgb {
        let (w, h) = (src.width().max(1) as f32, src.height().max(1) as f32);
        let intensity = self.settings.intensity.clamp(0.0, 1.0);
        let scale = self.settings.scale.max(1.0);
        let seed = ctx.noise_seed;

        map_pixels(src, |x, y, center| {
            let u = x as f32 / w;
            let v = y as f32 / h;
            let fiber = fbm(u * scale, v * scale, seed);
            let tooth = hash01(x, y, seed ^ 0x9e37) * 0.02;

            let paper = 0.95 + fiber * 0.1 + tooth;
            let factor = lerp(1.0, paper, intensity);
            [center[0] * factor, center[1] * factor, center[2] * factor]
        })
    }
}

/// Fine per-pixel noise, centered so it adds tooth without shifting tone.
#[derive(Clone, Copy, Debug)]
pub struct FineNoisePass {
    opacity: f32,
}

impl FineNoisePass {
    /// Pass with the given blend opacity.
    pub fn new(opacity: f32) -> Self {
        Self {
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

impl PostPass for FineNoisePass {
    fn name(&self) -> &'static str {
        "fine_noise"
    }

    fn apply(&self, src: &FrameRgb, ctx: &PassCtx) -> FrameRgb {
        // The grain crawls slowly; quantizing time keeps frames reproducible.
        let tick = ((ctx.time_secs * 0.1).fract() * 255.0) as u32;
        let seed = ctx.noise_seed ^ tick.wrapping_mul(0x5bd1);
        let opacity = self.opacity;

        map_pixels(src, |x, y, center| {
            let n = (hash01(x, y, seed) - 0.5) * opacity;
            [center[0] + n, center[1] + n, center[2] + n]
        })
    }
}

/// Smoothed value noise at integer lattice points.
fn value_noise(px: f32, py: f32, seed: u32) -> f32 {
    let ix = px.floor();
    let iy = py.floor();
    let fx = px - ix;
    let fy = py - iy;
    let sx = fx * fx * (3.0 - 2.0 * fx);
    let sy = fy * fy * (3.0 - 2.0 * fy);

    let (ix, iy) = (ix.max(0.0) as u32, iy.max(0.0) as u32);
    let a = hash01(ix, iy, seed);
    let b = hash01(ix.wrapping_add(1), iy, seed);
    let c = hash01(ix, iy.wrapping_add(1), seed);
    let d = hash01(ix.wrapping_add(1), iy.wrapping_add(1), seed);

    lerp(lerp(a, b, sx), lerp(c, d, sx), sy)
}

fn fbm(px: f32, py: f32, seed: u32) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    for octave in 0..4u32 {
        value += amplitude * value_noise(px * frequency, py * frequency, seed.wrapping_add(octave));
        frequency *= 2.0;
        amplitude *= 0.5;
    }
    value
}

#[cfg(test)]
#[path = "../../tests/unit/post/grain.rs"]
mod tests;
