use crate::curve::{Spline, binormal};
use crate::foundation::core::{Vec2, Vec3};
use crate::foundation::error::{TailfinError, TailfinResult};
use crate::foundation::math::StableHasher;
use crate::geometry::mesh::TriMesh;

/// Road-shape parameters; all tuning lives in configuration data.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RoadParams {
    /// Full road width at `t = 0`.
    pub width: f32,
    /// Quad-strip segment count along the curve.
    pub segments: u32,
    /// Linear width falloff toward the far end: `width(t) = width * (1 - taper * t)`.
    ///
    /// `0` keeps a constant width; the flat-scene variant used `0.6` for a
    /// drawn-perspective exaggeration.
    #[serde(default)]
    pub taper: f32,
    /// Number of lanes; lane strips sit at interior lane boundaries.
    #[serde(default = "default_lanes")]
    pub lanes: u32,
    /// Lift of surface decals above the deck, avoiding z-fighting.
    #[serde(default = "default_lift")]
    pub lift: f32,
    /// Support pillars dropped from the deck to the ground.
    #[serde(default = "default_pillars")]
    pub pillar_count: u32,
}

fn default_lanes() -> u32 {
    6
}

fn default_lift() -> f32 {
    0.05
}

fn default_pillars() -> u32 {
    6
}

impl Default for RoadParams {
    fn default() -> Self {
        Self {
            width: 36.0,
            segments: 160,
            taper: 0.0,
            lanes: default_lanes(),
            lift: default_lift(),
            pillar_count: default_pillars(),
        }
    }
}

impl RoadParams {
    /// Road width at curve parameter `t`.
    pub fn width_at(&self, t: f32) -> f32 {
        self.width * (1.0 - self.taper * t.clamp(0.0, 1.0))
    }

    fn validate(&self) -> TailfinResult<()> {
        if self.segments < 1 {
            return Err(TailfinError::geometry("road needs at least 1 segment"));
        }
        if !(self.width > 0.0) {
            return Err(TailfinError::geometry("road width must be > 0"));
        }
        if !(0.0..1.0).contains(&self.taper) {
            return Err(TailfinError::geometry("road taper must be in [0, 1)"));
        }
        if self.lanes < 2 {
            return Err(TailfinError::geometry("road needs at least 2 lanes"));
        }
        Ok(())
    }
}

/// Role of a thin decal strip on the road surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripRole {
    /// Dashed lane divider.
    LaneDash,
    /// The wider center divider.
    CenterLine,
    /// Solid border line at the road edge.
    EdgeLine,
}

/// One decal panel: a world-space quad plus fade data for the scene layer.
#[derive(Clone, Debug)]
pub struct StripPanel {
    /// Quad geometry in world space.
    pub mesh: TriMesh,
    /// Curve parameter at the panel start.
    pub t: f32,
    /// Opacity in `[0, 1]`; panels fade with distance.
    pub opacity: f32,
    /// Which line this panel belongs to.
    pub role: StripRole,
}

/// Base point and height of one deck support pillar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PillarAnchor {
    /// Ground position under the deck.
    pub base: Vec3,
    /// Vertical extent from ground to deck underside.
    pub height: f32,
}

/// Everything the geometry builder derives from one curve + parameter set.
#[derive(Clone, Debug)]
pub struct RoadGeometry {
    /// Road deck quad strip: exactly `2 * (segments + 1)` vertices and
    /// `2 * segments` triangles.
    pub surface: TriMesh,
    /// Dashed lane dividers and the center line.
    pub lane_panels: Vec<StripPanel>,
    /// Solid border lines on both road edges.
    pub edge_panels: Vec<StripPanel>,
    /// Support pillars under the elevated deck.
    pub pillars: Vec<PillarAnchor>,
}

/// Build road surface, lane/edge decals, and pillar anchors from the curve.
///
/// Rejects degenerate parameters up front rather than emitting a zero-area
/// mesh. The output is a pure function of `(spline, params)`.
pub fn build_road_geometry(spline: &Spline, params: &RoadParams) -> TailfinResult<RoadGeometry> {
    params.validate()?;

    Ok(RoadGeometry {
        surface: build_surface(spline, params),
        lane_panels: build_lane_panels(spline, params),
        edge_panels: build_edge_panels(spline, params),
        pillars: pillar_anchors(spline, params),
    })
}

fn build_surface(spline: &Spline, params: &RoadParams) -> TriMesh {
    let n = params.segments;
    let mut mesh = TriMesh::new();

    for i in 0..=n {
        let t = i as f32 / n as f32;
        let point = spline.point_at(t);
        let side = binormal(spline.tangent_at(t));
        let half = params.width_at(t) * 0.5;

        let left = point - side * half;
        let right = point + side * half;
        mesh.push_vertex(left, Vec2::new(0.0, t));
        mesh.push_vertex(right, Vec2::new(1.0, t));
    }

    for i in 0..n {
        let a = i * 2;
        let b = a + 1;
        let c = a + 2;
        let d = a + 3;
        mesh.push_triangle(a, c, b);
        mesh.push_triangle(b, c, d);
    }
    mesh
}

/// Dashes every 4th sample, covering 60% of the gap, matching the drawn
/// look of mid-century roadmap illustrations.
fn build_lane_panels(spline: &Spline, params: &RoadParams) -> Vec<StripPanel> {
    let n = params.segments;
    let lanes = params.lanes;
    let center_lane = lanes / 2;
    let mut panels = Vec::new();

    for lane in 1..lanes {
        let lane_frac = lane as f32 / lanes as f32 - 0.5;
        let is_center = lane == center_lane;

        let mut i = 0;
        while i < n {
            let t = i as f32 / n as f32;
            let t2 = ((i + 2) as f32 / n as f32).min(1.0);
            let scale = 1.0 - params.taper * t;
            let offset = lane_frac * params.width * scale;

            let line_width = if is_center { 0.4 } else { 0.2 } * scale;
            let opacity = (0.9 - t * 0.5).clamp(0.0, 1.0);
            let role = if is_center {
                StripRole::CenterLine
            } else {
                StripRole::LaneDash
            };
            panels.push(StripPanel {
                mesh: panel_quad(spline, params, t, t2, offset, line_width, 0.6),
                t,
                opacity,
                role,
            });
            i += 4;
        }
    }
    panels
}

fn build_edge_panels(spline: &Spline, params: &RoadParams) -> Vec<StripPanel> {
    let n = params.segments;
    let mut panels = Vec::new();

    for side in [-1.0f32, 1.0] {
        let mut i = 0;
        while i < n {
            let t = i as f32 / n as f32;
            let t2 = ((i + 2) as f32 / n as f32).min(1.0);
            let scale = 1.0 - params.taper * t;
            let offset = (params.width * 0.5 - 0.5) * scale * side;
            let opacity = (0.8 - t * 0.4).clamp(0.0, 1.0);

            panels.push(StripPanel {
                mesh: panel_quad(spline, params, t, t2, offset, 0.3 * scale, 1.0),
                t,
                opacity,
                role: StripRole::EdgeLine,
            });
            i += 2;
        }
    }
    panels
}

/// World-space quad between curve parameters `t1` and `t2`, shifted `offset`
/// along the local binormal, `fill` of the span long.
fn panel_quad(
    spline: &Spline,
    params: &RoadParams,
    t1: f32,
    t2: f32,
    offset: f32,
    width: f32,
    fill: f32,
) -> TriMesh {
    let side = binormal(spline.tangent_at(t1));
    let p1 = spline.point_at(t1) + side * offset;
    let p2 = spline.point_at(t2) + side * offset;

    let mid = (p1 + p2) * 0.5;
    let dir = (p2 - p1).normalize_or(Vec3::Z);
    let half_len = p1.distance(p2) * 0.5 * fill;
    let half_w = width * 0.5;
    let perp = binormal(dir);
    let lift = Vec3::new(0.0, params.lift, 0.0);

    let mut mesh = TriMesh::new();
    let a = mesh.push_vertex(mid - dir * half_len - perp * half_w + lift, Vec2::new(0.0, 0.0));
    let b = mesh.push_vertex(mid - dir * half_len + perp * half_w + lift, Vec2::new(1.0, 0.0));
    let c = mesh.push_vertex(mid + dir * half_len + perp * half_w + lift, Vec2::new(1.0, 1.0));
    let d = mesh.push_vertex(mid + dir * half_len - perp * half_w + lift, Vec2::new(0.0, 1.0));
    mesh.push_quad(a, b, c, d);
    mesh
}

/// Evenly spaced pillar anchors under the deck, skipping spans that touch
/// the ground.
fn pillar_anchors(spline: &Spline, params: &RoadParams) -> Vec<PillarAnchor> {
    let count = params.pillar_count;
    let mut pillars = Vec::new();
    for j in 1..=count {
        let t = j as f32 / (count + 1) as f32;
        let deck = spline.point_at(t);
        let height = deck.y - 0.4;
        if height > 1.0 {
            pillars.push(PillarAnchor {
                base: Vec3::new(deck.x, 0.0, deck.z),
                height,
            });
        }
    }
    pillars
}

/// Content key for the rebuild-iff-changed contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryKey(u64);

/// Fingerprint of every input the road geometry depends on.
pub fn geometry_key(spline: &Spline, params: &RoadParams) -> GeometryKey {
    let mut h = StableHasher::new();
    for p in spline.control_points() {
        h.write_f32(p.x);
        h.write_f32(p.y);
        h.write_f32(p.z);
    }
    h.write_f32(spline.tension());
    h.write_f32(params.width);
    h.write_u32(params.segments);
    h.write_f32(params.taper);
    h.write_u32(params.lanes);
    h.write_f32(params.lift);
    h.write_u32(params.pillar_count);
    GeometryKey(h.finish())
}

/// Cached road geometry, regenerated only when curve or parameters change.
#[derive(Debug, Default)]
pub struct RoadCache {
    key: Option<GeometryKey>,
    geometry: Option<RoadGeometry>,
    rebuilds: u64,
}

impl RoadCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return cached geometry, rebuilding iff the content key changed.
    pub fn get_or_build(
        &mut self,
        spline: &Spline,
        params: &RoadParams,
    ) -> TailfinResult<&RoadGeometry> {
        let key = geometry_key(spline, params);
        if self.key != Some(key) || self.geometry.is_none() {
            self.geometry = Some(build_road_geometry(spline, params)?);
            self.key = Some(key);
            self.rebuilds += 1;
        }
        self.geometry
            .as_ref()
            .ok_or_else(|| TailfinError::geometry("road cache empty after rebuild"))
    }

    /// How many times the cache had to rebuild.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/road.rs"]
mod tests;
