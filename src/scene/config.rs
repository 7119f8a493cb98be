use std::path::Path;

use crate::actors::{CarClass, TrafficEntry};
use crate::animation::{ColorRamp, DayNight, Ramp};
use crate::foundation::core::{Color, Vec3};
use crate::foundation::error::{TailfinError, TailfinResult};
use crate::geometry::RoadParams;
use crate::populate::{PopulationConfig, PropKind, RegionConfig};
use crate::post::PostSettings;
use crate::render::LightDirs;
use crate::scene::camera::CameraConfig;

/// The 1959 print palette.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Daytime sky at the zenith.
    pub sky: Color,
    /// Daytime sky at the horizon.
    pub sky_light: Color,
    /// Asphalt.
    pub road: Color,
    /// Lane paint.
    pub road_line: Color,
    /// Edge paint.
    pub road_edge: Color,
    /// Terrain around the road.
    pub ground: Color,
    /// Bright trim.
    pub chrome: Color,
    /// Whitewall tires.
    pub whitewall: Color,
    /// Tire rubber and dark accents.
    pub black: Color,
    /// Glazing tint.
    pub glass: Color,
    /// Concrete pillars and decks.
    pub concrete: Color,
    /// Building facade tints, indexed by prop variant.
    pub facades: Vec<Color>,
    /// Pedestrian clothing tints, indexed by prop variant.
    pub figures: Vec<Color>,
    /// Lit window glow.
    pub window_glow: Color,
    /// Street-lamp glow.
    pub lamp_glow: Color,
    /// Headlight glow.
    pub headlight_glow: Color,
    /// Tail-light glow.
    pub taillight_glow: Color,
}

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::WHITE)
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky: hex("#7fbfb5"),
            sky_light: hex("#a8d4cd"),
            road: hex("#8b7d6b"),
            road_line: hex("#f0e8d0"),
            road_edge: hex("#d0c8b8"),
            ground: hex("#9a9080"),
            chrome: hex("#e8e4dc"),
            whitewall: hex("#f8f6f0"),
            black: hex("#2a2a2a"),
            glass: hex("#a8c8d8"),
            concrete: hex("#a89a8a"),
            facades: vec![
                hex("#c8b8a0"),
                hex("#b8a890"),
                hex("#d0c0a8"),
                hex("#a89878"),
            ],
            figures: vec![hex("#4a6a8a"), hex("#c23b22"), hex("#e9c46a")],
            window_glow: hex("#ffd98a"),
            lamp_glow: hex("#ffe8b0"),
            headlight_glow: hex("#ffffaa"),
            taillight_glow: hex("#ff3333"),
        }
    }
}

/// Highway path configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurveConfig {
    /// Ordered control points; at least 4.
    pub control_points: Vec<Vec3>,
    /// Spline tangent tension.
    pub tension: f32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        // Elevated sweep from the far vanishing point down past the camera.
        Self {
            control_points: vec![
                Vec3::new(30.0, 18.0, -450.0),
                Vec3::new(10.0, 18.0, -340.0),
                Vec3::new(-12.0, 18.0, -230.0),
                Vec3::new(-18.0, 18.0, -120.0),
                Vec3::new(-10.0, 18.0, -15.0),
                Vec3::new(15.0, 18.0, 90.0),
                Vec3::new(65.0, 18.0, 200.0),
                Vec3::new(130.0, 18.0, 320.0),
            ],
            tension: 0.5,
        }
    }
}

/// One elevated crossing deck, set dressing behind the main highway.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverpassConfig {
    /// Deck center.
    pub position: Vec3,
    /// Deck heading about Y, radians.
    pub yaw: f32,
    /// Deck length.
    pub length: f32,
    /// Deck width.
    pub width: f32,
    /// Deck thickness.
    pub thickness: f32,
    /// Pillar offsets along the deck axis.
    pub pillar_offsets: Vec<f32>,
}

/// Complete scene description; every tuning constant lives here as data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Highway path.
    pub curve: CurveConfig,
    /// Road shape.
    pub road: RoadParams,
    /// Vehicle origin height above the deck.
    pub ride_height: f32,
    /// Converts vehicle speed into curve progress per second.
    pub progress_rate: f32,
    /// Traffic slots, near to far.
    pub traffic: Vec<TrafficEntry>,
    /// Seeded prop placement.
    pub population: PopulationConfig,
    /// Day/night fan-out ramps.
    pub daynight: DayNight,
    /// Camera rig tuning.
    pub camera: CameraConfig,
    /// Static light directions.
    pub lights: LightDirs,
    /// Color palette.
    pub palette: Palette,
    /// Post-processing chain settings.
    pub post: PostSettings,
    /// Terrain plane edge length.
    pub ground_size: f32,
    /// Crossing decks behind the hero highway.
    pub overpasses: Vec<OverpassConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::vintage_1959()
    }
}

impl SceneConfig {
    /// The built-in magazine-cover scene.
    pub fn vintage_1959() -> Self {
        Self {
            curve: CurveConfig::default(),
            road: RoadParams::default(),
            ride_height: 0.0,
            progress_rate: 0.015,
            traffic: default_traffic(),
            population: default_population(),
            daynight: default_daynight(),
            camera: CameraConfig::default(),
            lights: LightDirs::default(),
            palette: Palette::default(),
            post: PostSettings::default(),
            ground_size: 1200.0,
            overpasses: vec![
                OverpassConfig {
                    position: Vec3::new(-10.0, 10.0, -40.0),
                    yaw: std::f32::consts::PI * 0.25,
                    length: 70.0,
                    width: 12.0,
                    thickness: 0.8,
                    pillar_offsets: vec![-25.0, 0.0, 25.0],
                },
                OverpassConfig {
                    position: Vec3::new(5.0, 14.0, -50.0),
                    yaw: -std::f32::consts::PI * 0.15,
                    length: 55.0,
                    width: 10.0,
                    thickness: 0.8,
                    pillar_offsets: vec![-20.0, 0.0, 20.0],
                },
            ],
        }
    }

    /// Parse a scene from JSON; missing fields take the built-in defaults.
    pub fn from_json_str(json: &str) -> TailfinResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TailfinError::validation(format!("parse scene config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a scene config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> TailfinResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            TailfinError::validation(format!("read scene config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> TailfinResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TailfinError::validation(format!("serialize scene config: {e}")))
    }

    /// Check cross-field invariants before any geometry is built.
    pub fn validate(&self) -> TailfinResult<()> {
        if self.curve.control_points.len() < 4 {
            return Err(TailfinError::validation(
                "curve needs at least 4 control points",
            ));
        }
        if !(self.progress_rate > 0.0) {
            return Err(TailfinError::validation("progress_rate must be > 0"));
        }
        for (i, entry) in self.traffic.iter().enumerate() {
            if !(0.0..=1.0).contains(&entry.start_t) {
                return Err(TailfinError::validation(format!(
                    "traffic[{i}] start_t must be in [0, 1]"
                )));
            }
            if entry.lane_offset.abs() > 1.0 {
                return Err(TailfinError::validation(format!(
                    "traffic[{i}] lane_offset must be in [-1, 1]"
                )));
            }
            if entry.speed < 0.0 {
                return Err(TailfinError::validation(format!(
                    "traffic[{i}] speed must be >= 0"
                )));
            }
        }
        self.population.validate()?;
        if self.palette.facades.is_empty() {
            return Err(TailfinError::validation(
                "palette needs at least one facade color",
            ));
        }
        Ok(())
    }
}

/// The traffic table: depth-staggered slots, faster toward the horizon.
fn default_traffic() -> Vec<TrafficEntry> {
    let coral = hex("#d35843");
    let cream = hex("#e8c55a");
    let sky = hex("#6ba3c7");
    let mint = hex("#7db88f");
    let peach = hex("#e8a86b");
    let turquoise = hex("#5fb3a5");
    let ivory = hex("#f5f0e1");
    let dark_blue = hex("#4a6a8a");
    let orange = hex("#d97a3e");

    use CarClass::{Cadillac, Fairlane, Fury, Impala};
    let rows: [(f32, f32, f32, Color, CarClass); 23] = [
        // Hero vehicles, right in front of the camera.
        (0.3, 0.88, 0.35, coral, Cadillac),
        (-0.4, 0.86, 0.4, cream, Impala),
        (0.6, 0.84, 0.38, sky, Fury),
        // Foreground.
        (-0.2, 0.80, 0.45, ivory, Fairlane),
        (0.45, 0.78, 0.42, mint, Cadillac),
        (-0.55, 0.76, 0.48, orange, Impala),
        (0.1, 0.74, 0.44, peach, Fury),
        // Near field.
        (0.5, 0.70, 0.5, dark_blue, Fairlane),
        (-0.35, 0.68, 0.52, coral, Cadillac),
        (0.25, 0.65, 0.48, turquoise, Impala),
        (-0.5, 0.62, 0.55, cream, Fury),
        // Mid field.
        (0.4, 0.58, 0.6, sky, Fairlane),
        (-0.15, 0.54, 0.58, mint, Cadillac),
        (0.55, 0.50, 0.62, ivory, Impala),
        (-0.45, 0.46, 0.65, orange, Fury),
        // Far field.
        (0.2, 0.40, 0.7, peach, Fairlane),
        (-0.3, 0.35, 0.72, dark_blue, Cadillac),
        (0.5, 0.30, 0.75, coral, Impala),
        (-0.55, 0.25, 0.78, turquoise, Fury),
        // Almost at the vanishing point.
        (0.35, 0.20, 0.82, cream, Fairlane),
        (-0.2, 0.15, 0.85, sky, Cadillac),
        (0.1, 0.10, 0.9, mint, Impala),
        (-0.4, 0.06, 0.95, ivory, Fury),
    ];

    rows.into_iter()
        .map(|(lane_offset, start_t, speed, color, class)| TrafficEntry {
            lane_offset,
            start_t,
            speed,
            color,
            class,
        })
        .collect()
}

fn default_population() -> PopulationConfig {
    PopulationConfig {
        seed: 1959,
        clearance: 30.0,
        curve_stride: 0.05,
        regions: vec![
            RegionConfig {
                label: "left city block".into(),
                kind: PropKind::Building,
                count: 14,
                x: [-150.0, -60.0],
                z: [-260.0, 60.0],
                footprint: [12.0, 22.0],
                height: [18.0, 55.0],
                lit_fraction: 0.55,
            },
            RegionConfig {
                label: "right city block".into(),
                kind: PropKind::Building,
                count: 12,
                x: [80.0, 170.0],
                z: [-220.0, 80.0],
                footprint: [12.0, 20.0],
                height: [15.0, 45.0],
                lit_fraction: 0.5,
            },
            RegionConfig {
                label: "far skyline".into(),
                kind: PropKind::Building,
                count: 16,
                x: [-120.0, 160.0],
                z: [-520.0, -400.0],
                footprint: [14.0, 24.0],
                height: [35.0, 80.0],
                lit_fraction: 0.65,
            },
            RegionConfig {
                label: "roadside lamps".into(),
                kind: PropKind::StreetLamp,
                count: 10,
                x: [-60.0, 120.0],
                z: [-300.0, 250.0],
                footprint: [0.3, 0.32],
                height: [6.0, 7.5],
                lit_fraction: 1.0,
            },
            RegionConfig {
                label: "sidewalk figures".into(),
                kind: PropKind::Pedestrian,
                count: 8,
                x: [-80.0, 140.0],
                z: [-150.0, 150.0],
                footprint: [0.45, 0.55],
                height: [1.6, 1.9],
                lit_fraction: 0.0,
            },
            RegionConfig {
                label: "signals".into(),
                kind: PropKind::TrafficLight,
                count: 3,
                x: [-40.0, 100.0],
                z: [-100.0, 150.0],
                footprint: [0.4, 0.5],
                height: [4.5, 5.5],
                lit_fraction: 1.0,
            },
        ],
    }
}

fn default_daynight() -> DayNight {
    DayNight {
        ambient: Ramp::linear(0.6, 0.18),
        ambient_color: ColorRamp {
            day: hex("#fff5e6"),
            night: hex("#334060"),
        },
        key: Ramp::linear(1.0, 0.25),
        key_color: ColorRamp {
            day: hex("#fffaf0"),
            night: hex("#a8c0e8"),
        },
        fill: Ramp::linear(0.4, 0.1),
        fill_color: ColorRamp {
            day: hex("#ffe8d0"),
            night: hex("#405070"),
        },
        back: Ramp::linear(0.3, 0.15),
        back_color: ColorRamp {
            day: hex("#d0e8ff"),
            night: hex("#24335c"),
        },
        sky_top: ColorRamp {
            day: hex("#7fbfb5"),
            night: hex("#101a33"),
        },
        sky_horizon: ColorRamp {
            day: hex("#a8d4cd"),
            night: hex("#2c3a60"),
        },
        background: ColorRamp {
            day: hex("#7fbfb5"),
            night: hex("#0d1528"),
        },
        overlay_opacity: Ramp::linear(0.92, 1.0),
        headlight: Ramp::gated(0.0, 1.25, 0.4),
        taillight: Ramp::gated(0.3, 1.0, 0.4),
        street_lamp: Ramp::gated(0.0, 1.1, 0.35),
        window: Ramp::gated(0.0, 0.9, 0.3),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
