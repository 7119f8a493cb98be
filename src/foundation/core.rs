//! Core value types: color, viewport, and re-exported math primitives.

use crate::foundation::error::{TailfinError, TailfinResult};

pub use glam::{Mat4, Quat, Vec2, Vec3};

/// Linear RGB color with components in `[0, 1]`.
///
/// Scene palette and material colors are stored linear; conversion to 8-bit
/// output happens once, at the raster edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Build a color from components; callers keep components in `[0, 1]`.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> TailfinResult<Self> {
        let s = hex.strip_prefix('#').unwrap_or(hex);
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TailfinError::validation(format!(
                "color must be #rrggbb, got '{hex}'"
            )));
        }
        let byte = |i: usize| -> f32 {
            let v = u8::from_str_radix(&s[i..i + 2], 16).unwrap_or(0);
            f32::from(v) / 255.0
        };
        Ok(Self::new(byte(0), byte(2), byte(4)))
    }

    /// Interpolate toward `other` with factor `t` in `[0, 1]`.
    ///
    /// Endpoints are exact so day/night fan-out hits its configured colors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Multiply all components by `k`, clamping to `[0, 1]`.
    pub fn scaled(self, k: f32) -> Self {
        Self::new(
            (self.r * k).clamp(0.0, 1.0),
            (self.g * k).clamp(0.0, 1.0),
            (self.b * k).clamp(0.0, 1.0),
        )
    }

    /// Perceptual luminance (Rec. 601 weights).
    pub fn luma(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }
}

impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr([f32; 3]),
            Obj { r: f32, g: f32, b: f32 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Color::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr([r, g, b]) => Ok(Color::new(r, g, b)),
            Repr::Obj { r, g, b } => Ok(Color::new(r, g, b)),
        }
    }
}

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a validated viewport with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> TailfinResult<Self> {
        if width == 0 || height == 0 {
            return Err(TailfinError::validation("viewport must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Width over height.
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
