//! Moving entities: vehicles looping along the highway curve.

mod vehicle;

pub use vehicle::{CarClass, CarProportions, TrafficEntry, Vehicle, VehiclePose, pose_at};
