use crate::curve::{Spline, binormal};
use crate::foundation::core::{Color, Vec3};
use crate::foundation::math::wrap_unit;
use crate::geometry::RoadParams;

/// Vehicles stay inside this fraction of the half road-width.
const LANE_MARGIN: f32 = 0.8;

/// Numeric guard floor for length and radius divisions.
const GUARD_EPS: f32 = 1e-4;

/// Body-proportion class for the 1959 lineup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarClass {
    /// Longest body, tallest tail fins.
    Cadillac,
    /// Wide and low.
    Impala,
    /// Mid-size with flared fins.
    Fury,
    /// Shortest of the set.
    Fairlane,
}

/// Dimensions selected by a [`CarClass`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarProportions {
    /// Body length along the travel axis.
    pub length: f32,
    /// Body width.
    pub width: f32,
    /// Lower-body height.
    pub height: f32,
    /// Tail-fin height above the trunk.
    pub fin_height: f32,
    /// Wheel radius.
    pub wheel_radius: f32,
}

impl CarClass {
    /// Body proportions for this class.
    pub fn proportions(self) -> CarProportions {
        match self {
            Self::Cadillac => CarProportions {
                length: 5.9,
                width: 2.2,
                height: 0.62,
                fin_height: 0.75,
                wheel_radius: 0.38,
            },
            Self::Impala => CarProportions {
                length: 5.5,
                width: 2.3,
                height: 0.58,
                fin_height: 0.55,
                wheel_radius: 0.37,
            },
            Self::Fury => CarProportions {
                length: 5.4,
                width: 2.15,
                height: 0.6,
                fin_height: 0.65,
                wheel_radius: 0.36,
            },
            Self::Fairlane => CarProportions {
                length: 5.1,
                width: 2.1,
                height: 0.6,
                fin_height: 0.5,
                wheel_radius: 0.36,
            },
        }
    }
}

/// One configured traffic slot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrafficEntry {
    /// Signed fraction of the usable half road-width, `-1` to `1`.
    pub lane_offset: f32,
    /// Initial curve progress.
    pub start_t: f32,
    /// Progress speed factor.
    pub speed: f32,
    /// Body color.
    pub color: Color,
    /// Body proportions.
    pub class: CarClass,
}

/// World pose derived from a vehicle's curve progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehiclePose {
    /// Body origin in world space.
    pub position: Vec3,
    /// Heading about the Y axis; forward is local +Z.
    pub yaw: f32,
    /// Wheel spin angle in radians.
    pub wheel_angle: f32,
}

/// A vehicle traveling along the curve forever.
///
/// The odometer tracks total distance and only ever grows; it survives every
/// wrap of `t` and is never reset after construction.
#[derive(Clone, Copy, Debug)]
pub struct Vehicle {
    /// Curve progress in `[0, 1)`.
    pub t: f32,
    /// Signed lane offset fraction.
    pub lane_offset: f32,
    /// Progress speed factor.
    pub speed: f32,
    /// Body color.
    pub color: Color,
    /// Body proportions.
    pub class: CarClass,
    /// Total distance traveled, in world units.
    pub odometer: f32,
    wheel_angle: f32,
}

impl Vehicle {
    /// Spawn a vehicle at its configured slot.
    pub fn new(entry: &TrafficEntry) -> Self {
        Self {
            t: wrap_unit(entry.start_t),
            lane_offset: entry.lane_offset.clamp(-1.0, 1.0),
            speed: entry.speed.max(0.0),
            color: entry.color,
            class: entry.class,
            odometer: 0.0,
            wheel_angle: 0.0,
        }
    }

    /// Advance progress by `dt` seconds.
    ///
    /// `rate` converts speed into progress per second; `curve_length` feeds
    /// the odometer. Past `t = 1` the vehicle wraps to `0` and keeps going.
    /// Wheel angle holds its previous value when length or radius degenerate.
    pub fn step(&mut self, dt: f32, curve_length: f32, rate: f32) {
        let t_prev = self.t;
        self.t = wrap_unit(t_prev + self.speed * dt.max(0.0) * rate);

        let delta_t = if self.t < t_prev {
            (1.0 - t_prev) + self.t
        } else {
            self.t - t_prev
        };
        self.odometer += delta_t * curve_length.max(0.0);

        let radius = self.class.proportions().wheel_radius;
        if curve_length > GUARD_EPS && radius > GUARD_EPS {
            self.wheel_angle = self.odometer / radius;
        }
    }

    /// Wheel spin angle in radians.
    pub fn wheel_angle(&self) -> f32 {
        self.wheel_angle
    }

    /// World pose at the current progress.
    pub fn pose(&self, spline: &Spline, road: &RoadParams, ride_height: f32) -> VehiclePose {
        pose_at(
            spline,
            road,
            self.t,
            self.lane_offset,
            ride_height,
            self.wheel_angle,
        )
    }
}

/// Pose for an arbitrary progress value; vehicles and tests share this.
pub fn pose_at(
    spline: &Spline,
    road: &RoadParams,
    t: f32,
    lane_offset: f32,
    ride_height: f32,
    wheel_angle: f32,
) -> VehiclePose {
    let t = wrap_unit(t);
    let point = spline.point_at(t);
    let tangent = spline.tangent_at(t);
    let side = binormal(tangent);
    let offset = lane_offset * (road.width_at(t) * 0.5) * LANE_MARGIN;

    let mut position = point + side * offset;
    position.y = point.y + ride_height;

    VehiclePose {
        position,
        yaw: tangent.x.atan2(tangent.z),
        wheel_angle,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actors/vehicle.rs"]
mod tests;
