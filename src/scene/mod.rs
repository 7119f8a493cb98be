//! Scene configuration, the explicit node graph, and the camera rig.

mod build;
mod camera;
mod config;
mod graph;

pub use build::{CarPiece, CarRig, StaticScene, build_scene};
pub use camera::{CameraConfig, CameraPose, CameraRig, SceneMode};
pub use config::{CurveConfig, OverpassConfig, Palette, SceneConfig};
pub use graph::{
    DrawItem, EmissiveRole, Material, MaterialId, MeshId, SceneGraph, SceneNode, SceneResources,
    Transform,
};
