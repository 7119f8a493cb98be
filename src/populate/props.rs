use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tracing::debug;

use crate::curve::Spline;
use crate::foundation::core::Vec3;
use crate::foundation::error::{TailfinError, TailfinResult};

/// Attempts per prop before the slot is given up.
const MAX_ATTEMPTS: u32 = 16;

/// Category of a static set-dressing prop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropKind {
    /// City-block building with optionally lit windows.
    Building,
    /// Roadside lamp post.
    StreetLamp,
    /// Sidewalk figure.
    Pedestrian,
    /// Signal mast near the road.
    TrafficLight,
}

/// A rectangular spawn region and the prop mix drawn inside it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionConfig {
    /// Display label, used in logs only.
    pub label: String,
    /// Prop category this region spawns.
    pub kind: PropKind,
    /// Number of placement slots.
    pub count: u32,
    /// World X extent `[min, max]`.
    pub x: [f32; 2],
    /// World Z extent `[min, max]`.
    pub z: [f32; 2],
    /// Footprint edge range `[min, max]`.
    pub footprint: [f32; 2],
    /// Height range `[min, max]`.
    pub height: [f32; 2],
    /// Fraction of props whose windows draw as lit.
    #[serde(default = "default_lit_fraction")]
    pub lit_fraction: f32,
}

fn default_lit_fraction() -> f32 {
    0.55
}

/// Seeded-placement parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PopulationConfig {
    /// Master seed; identical seed and regions reproduce the scene exactly.
    pub seed: u64,
    /// Minimum distance from any sampled curve point.
    pub clearance: f32,
    /// Curve sampling stride in `t` for the clearance test.
    #[serde(default = "default_stride")]
    pub curve_stride: f32,
    /// Spawn regions, evaluated in declaration order.
    pub regions: Vec<RegionConfig>,
}

fn default_stride() -> f32 {
    0.05
}

impl PopulationConfig {
    /// Validate ranges before generation.
    pub fn validate(&self) -> TailfinResult<()> {
        if !(self.clearance > 0.0) {
            return Err(TailfinError::validation("population clearance must be > 0"));
        }
        if !(self.curve_stride > 0.0 && self.curve_stride <= 0.5) {
            return Err(TailfinError::validation(
                "population curve_stride must be in (0, 0.5]",
            ));
        }
        for region in &self.regions {
            if region.x[0] > region.x[1] || region.z[0] > region.z[1] {
                return Err(TailfinError::validation(format!(
                    "region '{}' has inverted bounds",
                    region.label
                )));
            }
            if region.footprint[0] > region.footprint[1]
                || region.height[0] > region.height[1]
            {
                return Err(TailfinError::validation(format!(
                    "region '{}' has inverted size ranges",
                    region.label
                )));
            }
        }
        Ok(())
    }
}

/// One placed prop. Position, extents, variant, and the lit draw are fixed at
/// generation; only the rendered intensity of lit windows follows the live
/// time-of-day value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prop {
    /// Category.
    pub kind: PropKind,
    /// Ground anchor (y = 0).
    pub position: Vec3,
    /// Width / height / depth.
    pub extents: Vec3,
    /// Palette variant selector.
    pub variant: u32,
    /// Whether windows draw as lit once night emissives turn on.
    pub lit: bool,
}

/// Place all regions' props with one seeded generator stream.
///
/// Candidates are drawn and tested in a fixed order: the generator advances
/// monotonically and is never reset, so a seed and region list reproduce the
/// identical prop list on every run. Candidates closer than `clearance` to
/// any sampled curve point are rejected; rejected candidates still consumed
/// their position draws, which keeps the stream aligned.
pub fn generate_props(config: &PopulationConfig, spline: &Spline) -> TailfinResult<Vec<Prop>> {
    config.validate()?;

    let samples = clearance_samples(spline, config.curve_stride);
    let mut rng = Pcg32::seed_from_u64(config.seed);
    let mut props = Vec::new();

    for region in &config.regions {
        let mut placed = 0u32;
        for _ in 0..region.count {
            let mut accepted = None;
            for _ in 0..MAX_ATTEMPTS {
                let x = draw_range(&mut rng, region.x[0], region.x[1]);
                let z = draw_range(&mut rng, region.z[0], region.z[1]);
                let candidate = Vec3::new(x, 0.0, z);
                if is_clear(candidate, &samples, config.clearance) {
                    accepted = Some(candidate);
                    break;
                }
            }

            let Some(position) = accepted else {
                continue;
            };

            let w = draw_range(&mut rng, region.footprint[0], region.footprint[1]);
            let d = draw_range(&mut rng, region.footprint[0], region.footprint[1]);
            let h = draw_range(&mut rng, region.height[0], region.height[1]);
            let variant = rng.random_range(0..8u32);
            let lit = rng.random::<f32>() < region.lit_fraction;

            props.push(Prop {
                kind: region.kind,
                position,
                extents: Vec3::new(w, h, d),
                variant,
                lit,
            });
            placed += 1;
        }
        if placed < region.count {
            debug!(
                region = %region.label,
                requested = region.count,
                placed,
                "region ran out of clear candidates"
            );
        }
    }

    Ok(props)
}

/// Curve points used by the clearance test, sampled every `stride` of `t`.
pub fn clearance_samples(spline: &Spline, stride: f32) -> Vec<Vec3> {
    let steps = (1.0 / stride).round() as usize;
    (0..=steps)
        .map(|i| spline.point_at((i as f32 * stride).min(1.0)))
        .collect()
}

/// Count props violating the clearance rule; generation keeps this at zero.
pub fn clearance_violations(props: &[Prop], spline: &Spline, clearance: f32, stride: f32) -> usize {
    let samples = clearance_samples(spline, stride);
    props
        .iter()
        .filter(|p| !is_clear(p.position, &samples, clearance))
        .count()
}

fn is_clear(candidate: Vec3, samples: &[Vec3], clearance: f32) -> bool {
    samples.iter().all(|s| s.distance(candidate) >= clearance)
}

/// Uniform draw that tolerates a collapsed range.
fn draw_range(rng: &mut Pcg32, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

#[cfg(test)]
#[path = "../../tests/unit/populate/props.rs"]
mod tests;
