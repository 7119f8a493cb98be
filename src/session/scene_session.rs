use tracing::debug;

use crate::actors::Vehicle;
use crate::animation::{Atmosphere, ScrollInput, ScrollMapper, ScrollProgress};
use crate::assets::CarModel;
use crate::foundation::core::{Quat, Vec2, Viewport};
use crate::foundation::error::TailfinResult;
use crate::post::{PassCtx, PostChain};
use crate::render::{CpuRenderer, FrameRgb};
use crate::scene::{
    CameraPose, CameraRig, DrawItem, SceneConfig, SceneMode, StaticScene, Transform, build_scene,
};

/// The frame-driven driver owning all mutable per-frame state.
///
/// Construction builds every immutable structure (curve, road geometry,
/// seeded props, car rigs) and fails fast on bad input. After that the only
/// mutations are the per-frame ones: vehicle progress, camera smoothing, the
/// scroll snapshot, and the time-of-day scalar. Everything is driven by an
/// injected clock, so frame gaps jump the simulation forward instead of
/// drifting it, and tests never need to sleep.
///
/// Scroll events coalesce: `on_scroll` replaces any pending input, and
/// [`SceneSession::advance`] folds at most one recomputation into each frame.
/// Dropping the session releases everything; no callbacks or timers outlive
/// it.
pub struct SceneSession {
    config: SceneConfig,
    scene: StaticScene,
    static_draws: Vec<DrawItem>,
    vehicles: Vec<Vehicle>,
    camera: CameraRig,
    camera_pose: CameraPose,
    mapper: ScrollMapper,
    renderer: CpuRenderer,
    post: PostChain,
    mode: SceneMode,
    pointer: Vec2,
    pending_scroll: Option<ScrollInput>,
    time_of_day: f32,
    last_tick: Option<f64>,
    elapsed: f32,
}

impl SceneSession {
    /// Build a session with the procedural fallback cars.
    pub fn new(config: SceneConfig, viewport: Viewport) -> TailfinResult<Self> {
        Self::build(config, viewport, None)
    }

    /// Build a session around a loaded car model.
    ///
    /// The model's named parts are classified and bound to materials; parts
    /// that classify as removable are dropped.
    pub fn with_car_model(
        config: SceneConfig,
        viewport: Viewport,
        model: &CarModel,
    ) -> TailfinResult<Self> {
        Self::build(config, viewport, Some(model))
    }

    fn build(
        config: SceneConfig,
        viewport: Viewport,
        model: Option<&CarModel>,
    ) -> TailfinResult<Self> {
        let scene = build_scene(&config, model)?;
        let static_draws = scene.graph.collect_draws();
        let vehicles = config.traffic.iter().map(Vehicle::new).collect();
        let mut camera = CameraRig::new(config.camera);
        let camera_pose = camera.step(0.0, SceneMode::Cover, Vec2::ZERO, 0.0);
        let post = PostChain::from_settings(&config.post);
        let renderer = CpuRenderer::new(viewport);

        Ok(Self {
            config,
            scene,
            static_draws,
            vehicles,
            camera,
            camera_pose,
            mapper: ScrollMapper::new(),
            renderer,
            post,
            mode: SceneMode::Cover,
            pointer: Vec2::ZERO,
            pending_scroll: None,
            time_of_day: 0.0,
            last_tick: None,
            elapsed: 0.0,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The immutable built scene.
    pub fn scene(&self) -> &StaticScene {
        &self.scene
    }

    /// Current vehicles, in traffic-table order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Latest scroll snapshot.
    pub fn scroll_progress(&self) -> ScrollProgress {
        self.mapper.snapshot()
    }

    /// Current time-of-day scalar.
    pub fn time_of_day(&self) -> f32 {
        self.time_of_day
    }

    /// Pin the time-of-day scalar, overriding the scroll-derived value until
    /// the next scroll recomputation.
    pub fn set_time_of_day(&mut self, t: f32) {
        self.time_of_day = t.clamp(0.0, 1.0);
    }

    /// The fan-out evaluated at the current time-of-day.
    pub fn atmosphere(&self) -> Atmosphere {
        self.config.daynight.fan_out(self.time_of_day)
    }

    /// Current camera mode.
    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    /// Toggle between cover framing and the explore orbit.
    pub fn set_mode(&mut self, mode: SceneMode) {
        self.mode = mode;
    }

    /// Record a raw scroll event.
    ///
    /// Events arriving faster than the frame rate coalesce; only the latest
    /// input is folded in on the next [`SceneSession::advance`].
    pub fn on_scroll(&mut self, input: ScrollInput) {
        self.pending_scroll = Some(input);
    }

    /// Record the pointer position, normalized to `[-1, 1]` per axis.
    pub fn on_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0));
    }

    /// Change the output resolution.
    pub fn resize(&mut self, viewport: Viewport) {
        self.renderer.resize(viewport);
    }

    /// Advance the simulation to wall-clock time `now` (seconds).
    ///
    /// All per-frame updates happen here, once: vehicle ticks, camera
    /// smoothing, the coalesced scroll recomputation, and the debounce check.
    pub fn advance(&mut self, now_secs: f64) -> ScrollProgress {
        let dt = match self.last_tick {
            Some(last) => (now_secs - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_tick = Some(now_secs);
        self.elapsed += dt;

        let curve_length = self.scene.spline.length();
        for vehicle in &mut self.vehicles {
            vehicle.step(dt, curve_length, self.config.progress_rate);
        }

        self.camera_pose = self
            .camera
            .step(dt, self.mode, self.pointer, self.elapsed);

        if let Some(input) = self.pending_scroll.take() {
            let snapshot = self.mapper.recompute(&input, now_secs);
            self.time_of_day = snapshot.page_progress;
            debug!(
                scroll_y = input.scroll_y,
                hero_exit = snapshot.hero_exit,
                time_of_day = self.time_of_day,
                "scroll recomputed"
            );
        }
        self.mapper.settle(now_secs)
    }

    /// Render the current state through the rasterizer and the post chain.
    pub fn render(&mut self) -> TailfinResult<FrameRgb> {
        let atmosphere = self.config.daynight.fan_out(self.time_of_day);

        let mut draws = self.static_draws.clone();
        self.append_vehicle_draws(&mut draws);

        let frame = self.renderer.render(
            &self.scene.resources,
            &draws,
            &self.camera_pose,
            &atmosphere,
            &self.config.lights,
        );

        let ctx = PassCtx {
            time_secs: self.elapsed,
            noise_seed: self.config.population.seed as u32,
        };
        self.post.apply(frame, &ctx)
    }

    fn append_vehicle_draws(&self, draws: &mut Vec<DrawItem>) {
        for (vehicle, rig) in self.vehicles.iter().zip(self.scene.rigs.iter()) {
            let pose = vehicle.pose(&self.scene.spline, &self.config.road, self.config.ride_height);
            let body = Transform {
                translation: pose.position,
                rotation: Quat::from_rotation_y(pose.yaw),
                scale: crate::foundation::core::Vec3::ONE,
            }
            .matrix();

            for piece in &rig.pieces {
                let local = if piece.spins {
                    Transform {
                        rotation: piece.local.rotation * Quat::from_rotation_x(pose.wheel_angle),
                        ..piece.local
                    }
                } else {
                    piece.local
                };
                draws.push(DrawItem {
                    mesh: piece.mesh,
                    material: piece.material,
                    world: body * local.matrix(),
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/scene_session.rs"]
mod tests;
