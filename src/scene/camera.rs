use crate::foundation::core::{Vec2, Vec3};

/// The one externally toggled discrete state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneMode {
    /// Fixed magazine-cover framing with a pointer nudge.
    #[default]
    Cover,
    /// Slow orbit around the scene.
    Explore,
}

/// Camera tuning; all values are configuration data.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Cover-mode eye position before the pointer nudge.
    pub cover_eye: Vec3,
    /// Cover-mode look target, down the road toward the vanishing point.
    pub cover_target: Vec3,
    /// Pointer nudge amplitude on X and Y.
    pub pointer_sway: Vec2,
    /// Exponential smoothing rate toward the cover eye, per second.
    pub smoothing: f32,
    /// Explore-mode orbit radius.
    pub orbit_radius: f32,
    /// Explore-mode base height.
    pub orbit_height: f32,
    /// Explore-mode vertical bob amplitude.
    pub orbit_bob: f32,
    /// Orbit angular rate in radians per second.
    pub orbit_rate: f32,
    /// Vertical bob rate in radians per second.
    pub orbit_bob_rate: f32,
    /// Explore-mode look target.
    pub orbit_target: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 65.0,
            near: 0.1,
            far: 1500.0,
            cover_eye: Vec3::new(45.0, 24.0, 380.0),
            cover_target: Vec3::new(-20.0, 20.0, -120.0),
            pointer_sway: Vec2::new(8.0, 3.0),
            smoothing: 2.0,
            orbit_radius: 200.0,
            orbit_height: 80.0,
            orbit_bob: 30.0,
            orbit_rate: 0.1,
            orbit_bob_rate: 0.08,
            orbit_target: Vec3::new(0.0, 18.0, -50.0),
        }
    }
}

/// Where the camera is and what it looks at, for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Eye position.
    pub eye: Vec3,
    /// Look target.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

/// Per-frame camera state machine.
///
/// Cover mode eases the eye toward the framed position with an exponential
/// smoothing that is delta-time correct, so dropped frames land at the same
/// place a steady run would. Explore mode derives the eye purely from
/// elapsed time.
#[derive(Clone, Debug)]
pub struct CameraRig {
    config: CameraConfig,
    eye: Vec3,
}

impl CameraRig {
    /// Rig starting at the cover framing.
    pub fn new(config: CameraConfig) -> Self {
        Self {
            eye: config.cover_eye,
            config,
        }
    }

    /// Current eye position.
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Advance by `dt` seconds and produce the frame's pose.
    ///
    /// `pointer` is the normalized pointer position in `[-1, 1]` on each
    /// axis; `elapsed` is total scene time, which drives the orbit.
    pub fn step(&mut self, dt: f32, mode: SceneMode, pointer: Vec2, elapsed: f32) -> CameraPose {
        let c = &self.config;
        let target = match mode {
            SceneMode::Cover => {
                let goal = c.cover_eye
                    + Vec3::new(
                        pointer.x * c.pointer_sway.x,
                        pointer.y * c.pointer_sway.y,
                        0.0,
                    );
                let alpha = 1.0 - (-c.smoothing * dt.max(0.0)).exp();
                self.eye = self.eye.lerp(goal, alpha.clamp(0.0, 1.0));
                c.cover_target
            }
            SceneMode::Explore => {
                let swing = elapsed * c.orbit_rate;
                self.eye = Vec3::new(
                    swing.sin() * c.orbit_radius,
                    c.orbit_height + (elapsed * c.orbit_bob_rate).sin() * c.orbit_bob,
                    swing.cos() * c.orbit_radius,
                );
                c.orbit_target
            }
        };

        CameraPose {
            eye: self.eye,
            target,
            fov_deg: c.fov_deg,
            near: c.near,
            far: c.far,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/camera.rs"]
mod tests;
