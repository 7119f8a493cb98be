use crate::animation::Atmosphere;
use crate::foundation::core::{Color, Mat4, Vec3, Viewport};
use crate::render::frame::FrameRgb;
use crate::scene::{CameraPose, DrawItem, EmissiveRole, Material, SceneResources};

/// Directions toward the three scene lights, in world space.
///
/// Intensities and colors come from the time-of-day fan-out; only the
/// directions are static.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightDirs {
    /// Key light direction.
    pub key: Vec3,
    /// Fill light direction.
    pub fill: Vec3,
    /// Back light direction.
    pub back: Vec3,
}

impl Default for LightDirs {
    fn default() -> Self {
        Self {
            key: Vec3::new(20.0, 40.0, 30.0),
            fill: Vec3::new(30.0, 15.0, 50.0),
            back: Vec3::new(-30.0, 20.0, -50.0),
        }
    }
}

/// Z-buffered flat-shading CPU rasterizer.
///
/// Small by intent: perspective projection, Lambert diffuse from three
/// directionals plus ambient, emissive term, sky-gradient clear. Every draw
/// reads only immutable scene resources, so the renderer owns nothing but
/// its buffers.
#[derive(Debug)]
pub struct CpuRenderer {
    viewport: Viewport,
    zbuf: Vec<f32>,
}

impl CpuRenderer {
    /// Renderer for the given output size.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            zbuf: vec![f32::INFINITY; (viewport.width * viewport.height) as usize],
        }
    }

    /// Current output size.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Change the output size; buffers are re-created on next render.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.zbuf = vec![f32::INFINITY; (viewport.width * viewport.height) as usize];
    }

    /// Render draw items into a fresh frame.
    pub fn render(
        &mut self,
        resources: &SceneResources,
        draws: &[DrawItem],
        pose: &CameraPose,
        atmosphere: &Atmosphere,
        lights: &LightDirs,
    ) -> FrameRgb {
        let vp = self.viewport;
        let mut frame = sky_clear(vp, atmosphere);
        self.zbuf.fill(f32::INFINITY);

        let view = Mat4::look_at_rh(pose.eye, pose.target, Vec3::Y);
        let proj = Mat4::perspective_rh(
            pose.fov_deg.to_radians(),
            vp.aspect(),
            pose.near,
            pose.far,
        );
        let view_proj = proj * view;

        let shading = ShadingCtx {
            atmosphere,
            key: lights.key.normalize_or(Vec3::Y),
            fill: lights.fill.normalize_or(Vec3::Y),
            back: lights.back.normalize_or(Vec3::Y),
            eye: pose.eye,
        };

        for draw in draws {
            let (Some(mesh), Some(material)) =
                (resources.mesh(draw.mesh), resources.material(draw.material))
            else {
                continue;
            };

            for tri in mesh.indices.chunks_exact(3) {
                let a = draw.world.transform_point3(mesh.positions[tri[0] as usize]);
                let b = draw.world.transform_point3(mesh.positions[tri[1] as usize]);
                let c = draw.world.transform_point3(mesh.positions[tri[2] as usize]);

                let color = shade_face(a, b, c, material, &shading);
                self.raster_triangle(
                    &mut frame,
                    &view_proj,
                    [a, b, c],
                    color,
                    material.opacity,
                    pose.near,
                );
            }
        }

        frame.clamp01();
        frame
    }

    fn raster_triangle(
        &mut self,
        frame: &mut FrameRgb,
        view_proj: &Mat4,
        world: [Vec3; 3],
        color: Color,
        opacity: f32,
        near: f32,
    ) {
        // Clip against the near plane first so geometry straddling the
        // camera rasterizes without gaps instead of being dropped whole.
        let clip: Vec<glam::Vec4> = world
            .into_iter()
            .map(|p| *view_proj * p.extend(1.0))
            .collect();
        let clipped = clip_near(&clip, near.max(1e-4));
        if clipped.len() < 3 {
            return;
        }

        let vp = self.viewport;
        let (w, h) = (vp.width as f32, vp.height as f32);
        let screen: Vec<Vec3> = clipped
            .iter()
            .map(|c| {
                let ndc = *c / c.w;
                Vec3::new(
                    (ndc.x * 0.5 + 0.5) * w,
                    (1.0 - (ndc.y * 0.5 + 0.5)) * h,
                    ndc.z,
                )
            })
            .collect();

        // Fan-triangulate the clipped polygon.
        for i in 1..screen.len() - 1 {
            self.raster_screen_triangle(frame, [screen[0], screen[i], screen[i + 1]], color, opacity);
        }
    }

    fn raster_screen_triangle(
        &mut self,
        frame: &mut FrameRgb,
        screen: [Vec3; 3],
        color: Color,
        opacity: f32,
    ) {
        let vp = self.viewport;
        let (w, h) = (vp.width as f32, vp.height as f32);

        let min_x = screen.iter().map(|s| s.x).fold(f32::INFINITY, f32::min).floor().max(0.0) as u32;
        let max_x = screen.iter().map(|s| s.x).fold(f32::NEG_INFINITY, f32::max).ceil().min(w - 1.0) as u32;
        let min_y = screen.iter().map(|s| s.y).fold(f32::INFINITY, f32::min).floor().max(0.0) as u32;
        let max_y = screen.iter().map(|s| s.y).fold(f32::NEG_INFINITY, f32::max).ceil().min(h - 1.0) as u32;
        if min_x > max_x || min_y > max_y {
            return;
        }

        let [s0, s1, s2] = screen;
        let area = edge(s0, s1, s2);
        if area.abs() < 1e-8 {
            return;
        }

        let opaque = opacity >= 1.0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec3::new(x as f32 + 0.5, y as f32 + 0.5, 0.0);
                let w0 = edge(s1, s2, p) / area;
                let w1 = edge(s2, s0, p) / area;
                let w2 = edge(s0, s1, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * s0.z + w1 * s1.z + w2 * s2.z;
                let zi = (y * self.viewport.width + x) as usize;
                if depth >= self.zbuf[zi] {
                    continue;
                }

                if opaque {
                    self.zbuf[zi] = depth;
                    frame.set_pixel(x, y, [color.r, color.g, color.b]);
                } else {
                    let dst = frame.pixel(x, y);
                    let blended = [
                        dst[0] + (color.r - dst[0]) * opacity,
                        dst[1] + (color.g - dst[1]) * opacity,
                        dst[2] + (color.b - dst[2]) * opacity,
                    ];
                    frame.set_pixel(x, y, blended);
                }
            }
        }
    }
}

struct ShadingCtx<'a> {
    atmosphere: &'a Atmosphere,
    key: Vec3,
    fill: Vec3,
    back: Vec3,
    eye: Vec3,
}

/// Flat Lambert shading of one face, plus the material's emissive term.
fn shade_face(a: Vec3, b: Vec3, c: Vec3, material: &Material, ctx: &ShadingCtx<'_>) -> Color {
    let atmos = ctx.atmosphere;
    let mut normal = (b - a).cross(c - a).normalize_or(Vec3::Y);
    let centroid = (a + b + c) / 3.0;
    if normal.dot(ctx.eye - centroid) < 0.0 {
        normal = -normal;
    }

    let mut lit = [
        atmos.ambient_color.r * atmos.ambient,
        atmos.ambient_color.g * atmos.ambient,
        atmos.ambient_color.b * atmos.ambient,
    ];
    for (dir, intensity, color) in [
        (ctx.key, atmos.key, atmos.key_color),
        (ctx.fill, atmos.fill, atmos.fill_color),
        (ctx.back, atmos.back, atmos.back_color),
    ] {
        let diff = normal.dot(dir).max(0.0) * intensity;
        lit[0] += color.r * diff;
        lit[1] += color.g * diff;
        lit[2] += color.b * diff;
    }

    let glow = emissive_strength(material, atmos);
    Color::new(
        material.base.r * lit[0] + material.emissive.r * glow,
        material.base.g * lit[1] + material.emissive.g * glow,
        material.base.b * lit[2] + material.emissive.b * glow,
    )
}

/// Glow strength for a material, live from the fan-out when a role is set.
fn emissive_strength(material: &Material, atmos: &Atmosphere) -> f32 {
    match material.emissive_role {
        None => material.emissive_intensity,
        Some(EmissiveRole::Headlight) => atmos.headlight,
        Some(EmissiveRole::Taillight) => atmos.taillight,
        Some(EmissiveRole::StreetLamp) => atmos.street_lamp,
        Some(EmissiveRole::Window) => atmos.window,
    }
}

fn sky_clear(viewport: Viewport, atmosphere: &Atmosphere) -> FrameRgb {
    let mut frame = FrameRgb::new(viewport.width, viewport.height);
    let h = viewport.height.max(1);
    for y in 0..viewport.height {
        let v = y as f32 / (h - 1).max(1) as f32;
        let c = atmosphere.sky_top.lerp(atmosphere.sky_horizon, v.powf(0.8));
        for x in 0..viewport.width {
            frame.set_pixel(x, y, [c.r, c.g, c.b]);
        }
    }
    frame
}

fn edge(a: Vec3, b: Vec3, p: Vec3) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

/// Sutherland-Hodgman clip of a clip-space polygon against `w >= w_min`.
fn clip_near(poly: &[glam::Vec4], w_min: f32) -> Vec<glam::Vec4> {
    let mut out = Vec::with_capacity(poly.len() + 1);
    for i in 0..poly.len() {
        let a = poly[i];
        let b = poly[(i + 1) % poly.len()];
        let a_in = a.w >= w_min;
        let b_in = b.w >= w_min;

        if a_in {
            out.push(a);
        }
        if a_in != b_in {
            let t = (w_min - a.w) / (b.w - a.w);
            out.push(a + (b - a) * t);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
