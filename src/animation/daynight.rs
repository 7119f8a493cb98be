use crate::foundation::core::Color;
use crate::foundation::math::lerp;

/// Interpolation shape of one day/night quantity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampShape {
    /// Plain linear blend over the whole `[0, 1]` range.
    Linear,
    /// Hold the day value through the gate, then blend over the remainder.
    ///
    /// The jump at the gate is intentional: emissives priced as per-vehicle
    /// point lights switch on, they do not fade in from epsilon.
    Threshold {
        /// Time-of-day value at or below which the day value holds exactly.
        gate: f32,
    },
}

/// Scalar day/night ramp. `value(0)` is exactly `day`; `value(1)` is exactly
/// `night`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ramp {
    /// Value at full day.
    pub day: f32,
    /// Value at full night.
    pub night: f32,
    /// Interpolation shape.
    pub shape: RampShape,
}

impl Ramp {
    /// Linear ramp.
    pub const fn linear(day: f32, night: f32) -> Self {
        Self {
            day,
            night,
            shape: RampShape::Linear,
        }
    }

    /// Threshold-gated ramp.
    pub const fn gated(day: f32, night: f32, gate: f32) -> Self {
        Self {
            day,
            night,
            shape: RampShape::Threshold { gate },
        }
    }

    /// Evaluate at time-of-day `t` in `[0, 1]`.
    ///
    /// The endpoints are exact: `t = 0` returns `day` and `t = 1` returns
    /// `night` without float drift.
    pub fn value(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.shape {
            RampShape::Linear => {
                if t <= 0.0 {
                    self.day
                } else if t >= 1.0 {
                    self.night
                } else {
                    lerp(self.day, self.night, t)
                }
            }
            RampShape::Threshold { gate } => {
                if t <= gate {
                    self.day
                } else if t >= 1.0 {
                    self.night
                } else {
                    lerp(self.day, self.night, (t - gate) / (1.0 - gate))
                }
            }
        }
    }
}

/// Color day/night ramp, always linear.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorRamp {
    /// Color at full day.
    pub day: Color,
    /// Color at full night.
    pub night: Color,
}

impl ColorRamp {
    /// Evaluate at time-of-day `t` in `[0, 1]`.
    pub fn value(&self, t: f32) -> Color {
        self.day.lerp(self.night, t)
    }
}

/// Every quantity the single time-of-day scalar fans out to.
///
/// Each consumer owns its own day/night pair and shape; the controller holds
/// no state of its own.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DayNight {
    /// Ambient light intensity.
    pub ambient: Ramp,
    /// Ambient light color.
    pub ambient_color: ColorRamp,
    /// Key directional intensity.
    pub key: Ramp,
    /// Key directional color.
    pub key_color: ColorRamp,
    /// Fill directional intensity.
    pub fill: Ramp,
    /// Fill directional color.
    pub fill_color: ColorRamp,
    /// Back directional intensity.
    pub back: Ramp,
    /// Back directional color.
    pub back_color: ColorRamp,
    /// Sky color at the zenith.
    pub sky_top: ColorRamp,
    /// Sky color at the horizon.
    pub sky_horizon: ColorRamp,
    /// Clear color behind everything.
    pub background: ColorRamp,
    /// Magazine overlay opacity.
    pub overlay_opacity: Ramp,
    /// Headlight emissive intensity; gated.
    pub headlight: Ramp,
    /// Tail-light emissive intensity; gated with the headlights.
    pub taillight: Ramp,
    /// Street-lamp emissive intensity; gated.
    pub street_lamp: Ramp,
    /// Lit-window emissive intensity; gated.
    pub window: Ramp,
}

/// Concrete values of every fanned-out quantity at one time-of-day.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atmosphere {
    /// Ambient intensity.
    pub ambient: f32,
    /// Ambient color.
    pub ambient_color: Color,
    /// Key directional intensity.
    pub key: f32,
    /// Key directional color.
    pub key_color: Color,
    /// Fill directional intensity.
    pub fill: f32,
    /// Fill directional color.
    pub fill_color: Color,
    /// Back directional intensity.
    pub back: f32,
    /// Back directional color.
    pub back_color: Color,
    /// Sky color at the zenith.
    pub sky_top: Color,
    /// Sky color at the horizon.
    pub sky_horizon: Color,
    /// Clear color.
    pub background: Color,
    /// Overlay opacity.
    pub overlay_opacity: f32,
    /// Headlight emissive intensity.
    pub headlight: f32,
    /// Tail-light emissive intensity.
    pub taillight: f32,
    /// Street-lamp emissive intensity.
    pub street_lamp: f32,
    /// Lit-window emissive intensity.
    pub window: f32,
}

impl DayNight {
    /// Evaluate every quantity at time-of-day `t`.
    pub fn fan_out(&self, t: f32) -> Atmosphere {
        Atmosphere {
            ambient: self.ambient.value(t),
            ambient_color: self.ambient_color.value(t),
            key: self.key.value(t),
            key_color: self.key_color.value(t),
            fill: self.fill.value(t),
            fill_color: self.fill_color.value(t),
            back: self.back.value(t),
            back_color: self.back_color.value(t),
            sky_top: self.sky_top.value(t),
            sky_horizon: self.sky_horizon.value(t),
            background: self.background.value(t),
            overlay_opacity: self.overlay_opacity.value(t),
            headlight: self.headlight.value(t),
            taillight: self.taillight.value(t),
            street_lamp: self.street_lamp.value(t),
            window: self.window.value(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/daynight.rs"]
mod tests;
